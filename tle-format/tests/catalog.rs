//! Read a small element set catalog and decode every entry

use approx::assert_relative_eq;
use tle_format::*;

const CATALOG: &str = include_str!("../test_fixtures/catalog.txt");

#[test]
fn every_entry_is_valid() {
    let tle_set = parse_tle_set(CATALOG).unwrap();
    let names: Vec<&str> = tle_set.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        ["ISS (ZARYA)", "ABS-3", "TIANGONG 1", "Unknown", "SES-4"]
    );

    for tle in &tle_set {
        assert_eq!(validate(tle), Ok(()), "{}", tle.name);
        assert!(is_valid_tle(tle));
        assert_eq!(tle.line1.len(), LINE_LENGTH);
        assert_eq!(tle.line2.len(), LINE_LENGTH);
    }
}

#[test]
fn stored_checksums_match_computed() {
    for tle in parse_tle_set(CATALOG).unwrap() {
        assert_eq!(
            fields::checksum_1(&tle).unwrap(),
            u64::from(line_checksum(&tle.line1))
        );
        assert_eq!(
            fields::checksum_2(&tle).unwrap(),
            u64::from(line_checksum(&tle.line2))
        );
    }
}

#[test]
fn decode_every_entry() {
    let tle_set = parse_tle_set(CATALOG).unwrap();
    let decoded: Vec<_> = tle_set.iter().map(|t| elements(t).unwrap()).collect();

    assert_eq!(decoded[1].satellite_number, 24901);
    assert_relative_eq!(decoded[1].mean_motion, 0.99995119);
    assert_relative_eq!(decoded[1].bstar_drag, 0.0);

    assert_eq!(decoded[2].revolution_number, 33404);
    assert_relative_eq!(decoded[2].bstar_drag, 0.13004e-3);
    assert_relative_eq!(decoded[3].first_time_derivative, -0.00000009);

    assert_eq!(cospar_id(&tle_set[1]).unwrap(), "1997-042A");
    assert_eq!(cospar_id(&tle_set[4]).unwrap(), "2013-011A");
}

#[test]
fn epochs_are_ordered_by_publication() {
    let tle_set = parse_tle_set(CATALOG).unwrap();
    let iss = epoch_timestamp(&tle_set[0]).unwrap();
    let abs3 = epoch_timestamp(&tle_set[1]).unwrap();
    let ses4 = epoch_timestamp(&tle_set[4]).unwrap();
    assert!(iss < abs3);
    assert!(abs3 < ses4);
    assert_eq!(epoch_datetime(&tle_set[4]).unwrap().timestamp_millis(), ses4);
}

#[test]
fn geostationary_period_is_about_a_day() {
    let tle_set = parse_tle_set(CATALOG).unwrap();
    let period = average_orbit_time_ms(&tle_set[1]).unwrap();
    assert_relative_eq!(period, 86_404_217.3, epsilon = 1.0);
}
