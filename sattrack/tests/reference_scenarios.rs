//! Positions of real satellites propagated with SGP4
//!
//! Expected values come from an independent SGP4 implementation. Positions
//! agree to a few micro-degrees, the remainder being the geodetic solver.

use approx::assert_abs_diff_eq;
use indoc::indoc;
use sattrack::*;

const ISS: &str = indoc! {r#"
    ISS (ZARYA)
    1 25544U 98067A   17206.51418347  .00001345  00000-0  27503-4 0  9993
    2 25544  51.6396 207.2711 0006223  72.3525  71.7719 15.54224686 67715
    "#};

const ABS3: &str = indoc! {r#"
    ABS-3
    1 24901U 97042A   17279.07057876  .00000084  00000-0  00000+0 0  9995
    2 24901   5.0867  62.6208 0007858 138.4124 258.4388  0.99995119 73683
    "#};

const TIMESTAMP: EpochMillis = 1501039265000;

const BIG_BEAR: ObserverLocation = ObserverLocation::new(34.243889, -116.911389);

#[test]
fn big_bear_flyover() {
    let engine = PositionEngine::new();
    let state = engine
        .satellite_info(ISS, TIMESTAMP, Some(BIG_BEAR))
        .unwrap();

    assert_abs_diff_eq!(state.lat, 34.43928468167498, epsilon = 1e-5);
    assert_abs_diff_eq!(state.lng, -117.47561026844932, epsilon = 1e-5);
    assert_abs_diff_eq!(state.height, 403.0134527800419, epsilon = 1e-3);
    assert_abs_diff_eq!(state.velocity, 7.675511980883446, epsilon = 1e-4);
    assert_abs_diff_eq!(state.azimuth().unwrap(), 292.8251393, epsilon = 2e-3);
    assert_abs_diff_eq!(state.elevation().unwrap(), 81.5452178, epsilon = 1e-3);
    assert_abs_diff_eq!(state.range().unwrap(), 406.8007926883391, epsilon = 1e-3);
}

#[test]
fn observer_on_the_ellipsoid() {
    let engine = PositionEngine::new();
    let state = engine
        .satellite_info(ISS, TIMESTAMP, Some(BIG_BEAR.with_height_km(0.0)))
        .unwrap();

    assert_abs_diff_eq!(state.elevation().unwrap(), 81.5528558, epsilon = 1e-3);
    assert_abs_diff_eq!(state.range().unwrap(), 407.1666504, epsilon = 1e-3);
}

#[test]
fn lat_lng_matches_full_state() {
    let engine = PositionEngine::new();
    let lat_lng = engine.lat_lng(ISS, TIMESTAMP).unwrap();
    let state = engine
        .satellite_info(ISS, TIMESTAMP, Some(BIG_BEAR))
        .unwrap();
    assert_eq!(lat_lng, state.lat_lng());
    assert_abs_diff_eq!(lat_lng.lat, 34.43928468167498, epsilon = 1e-5);
    assert_abs_diff_eq!(lat_lng.lng, -117.47561026844932, epsilon = 1e-5);
}

#[test]
fn repeated_calls_are_identical_and_cached() {
    let engine = PositionEngine::new();
    let first = engine
        .satellite_info(ISS, TIMESTAMP + 3000, Some(BIG_BEAR))
        .unwrap();
    let misses = engine.cache_stats().misses;
    let second = engine
        .satellite_info(ISS, TIMESTAMP + 3000, Some(BIG_BEAR))
        .unwrap();
    assert_eq!(first, second);
    assert_eq!(engine.cache_stats().misses, misses);
    assert_eq!(engine.propagator().model_cache_stats().misses, 1);
}

#[test]
fn look_angles_only() {
    let engine = PositionEngine::new();
    let look = engine.look_angles(ISS, TIMESTAMP, BIG_BEAR).unwrap();
    let state = engine
        .satellite_info(ISS, TIMESTAMP, Some(BIG_BEAR))
        .unwrap();
    assert_eq!(Some(look), state.look_angles);
}

#[test]
fn iss_crosses_the_antemeridian_every_orbit() {
    let engine = PositionEngine::new();
    let period = engine.orbit_period_ms(ISS).unwrap();
    let crossing = engine
        .last_antemeridian_crossing(ISS, TIMESTAMP)
        .unwrap()
        .unwrap();

    assert!(crossing <= TIMESTAMP);
    assert!((TIMESTAMP - crossing) as f64 <= 2.0 * period);

    let before = engine.lat_lng(ISS, crossing - 1).unwrap();
    let after = engine.lat_lng(ISS, crossing).unwrap();
    assert!(before.lng > 179.0, "{before}");
    assert!(after.lng < -179.0, "{after}");
}

#[test]
fn iss_ground_track_segments() {
    let engine = PositionEngine::new();
    let step_ms = 60_000;
    let segments = engine.ground_track(ISS, step_ms, TIMESTAMP).unwrap();

    // One orbit before the last crossing and two after, the ground track
    // period being a little longer than the orbital one
    assert_eq!(segments.len(), 3);
    for seg in &segments {
        for pair in seg.windows(2) {
            assert!((pair[1].lng - pair[0].lng).abs() < 180.0);
        }
    }
    for pair in segments.windows(2) {
        let end = pair[0].last().unwrap();
        let start = pair[1].first().unwrap();
        assert!(end.lng > 0.0 && start.lng < 0.0);
    }
}

#[test]
fn geosynchronous_position() {
    let engine = PositionEngine::new();
    let lat_lng = engine.lat_lng(ABS3, TIMESTAMP).unwrap();
    assert_abs_diff_eq!(lat_lng.lat, 4.353016018653351, epsilon = 1e-5);
    assert_abs_diff_eq!(lat_lng.lng, 129.632535483672, epsilon = 1e-5);
}

#[test]
fn geosynchronous_never_crosses() {
    let engine = PositionEngine::new();
    assert_eq!(
        engine.last_antemeridian_crossing(ABS3, TIMESTAMP).unwrap(),
        None
    );
}

#[test]
fn geosynchronous_orbit_track() {
    let engine = PositionEngine::new();
    let lines: Vec<&str> = ABS3.lines().collect();
    let track = engine
        .orbit_track_with_step(&lines, TIMESTAMP, 1000, 6_000_000)
        .unwrap();
    assert_eq!(track.len(), 6001);

    let track = engine.orbit_track(&lines, TIMESTAMP, 10).unwrap();
    assert_eq!(track.len(), 11);
}

#[test]
fn geosynchronous_ground_track() {
    let engine = PositionEngine::new();
    let segments = engine.ground_track(ABS3, 1000, TIMESTAMP).unwrap();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].len(), 145);
}

#[test]
fn invalid_checksum_is_rejected() {
    let engine = PositionEngine::new();
    let bad = ISS.replace("0  9993", "0  9999");
    assert!(matches!(
        engine.satellite_info(bad.as_str(), TIMESTAMP, None),
        Err(PositionError::Tle(TleError::InvalidTle { .. }))
    ));
}
