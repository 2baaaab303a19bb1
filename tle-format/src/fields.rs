//! The fixed-column layout of the two element lines
//!
//! Every field is described once in [`FIELDS`]; the typed getters at the bottom
//! of this module and [`elements`] are all derived from that table.

use crate::{
    epoch::full_year,
    error::TleError,
    parser::{Result, SyntaxError, TleSource},
};
use nom::{
    character::complete::{digit1, one_of},
    combinator::{all_consuming, opt},
    error::ErrorKind,
};
use tle_types::prelude::*;

/// Named fields of an element set, in column order
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Field {
    LineNumber1,
    SatelliteNumber,
    Classification,
    IntDesignatorYear,
    IntDesignatorLaunchNumber,
    IntDesignatorPiece,
    EpochYear,
    EpochDay,
    FirstTimeDerivative,
    SecondTimeDerivative,
    BstarDrag,
    OrbitModel,
    ElementSetNumber,
    Checksum1,
    LineNumber2,
    SatelliteNumber2,
    Inclination,
    RightAscension,
    Eccentricity,
    ArgumentOfPerigee,
    MeanAnomaly,
    MeanMotion,
    RevolutionNumber,
    Checksum2,
}

impl Field {
    pub fn spec(self) -> &'static FieldSpec {
        &FIELDS[self as usize]
    }
}

/// How the text of a field is decoded
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FieldKind {
    Integer,
    Float,
    Char,
    Text,
    /// Digits with an assumed leading decimal point, e.g. `0006317` is 0.0006317
    ImpliedDecimal,
    /// Implied decimal mantissa with a power of ten, e.g. `-11606-4` is -0.11606e-4
    ExponentDecimal,
}

/// Column range of a field, 1-indexed and inclusive like published layouts
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FieldSpec {
    pub field: Field,
    pub name: &'static str,
    pub line: LineNumber,
    pub start: usize,
    pub end: usize,
    pub kind: FieldKind,
}

#[derive(Clone, PartialEq, Debug)]
pub enum FieldValue {
    Integer(u64),
    Float(f64),
    Char(char),
    Text(String),
}

const fn spec(
    field: Field,
    name: &'static str,
    line: LineNumber,
    start: usize,
    end: usize,
    kind: FieldKind,
) -> FieldSpec {
    FieldSpec {
        field,
        name,
        line,
        start,
        end,
        kind,
    }
}

use FieldKind::*;
use LineNumber::{One, Two};

pub static FIELDS: [FieldSpec; 24] = [
    spec(Field::LineNumber1, "line_number_1", One, 1, 1, Integer),
    spec(Field::SatelliteNumber, "satellite_number", One, 3, 7, Integer),
    spec(Field::Classification, "classification", One, 8, 8, Char),
    spec(Field::IntDesignatorYear, "int_designator_year", One, 10, 11, Integer),
    spec(Field::IntDesignatorLaunchNumber, "int_designator_launch_number", One, 12, 14, Integer),
    spec(Field::IntDesignatorPiece, "int_designator_piece", One, 15, 17, Text),
    spec(Field::EpochYear, "epoch_year", One, 19, 20, Integer),
    spec(Field::EpochDay, "epoch_day", One, 21, 32, Float),
    spec(Field::FirstTimeDerivative, "first_time_derivative", One, 34, 43, Float),
    spec(Field::SecondTimeDerivative, "second_time_derivative", One, 45, 52, ExponentDecimal),
    spec(Field::BstarDrag, "bstar_drag", One, 54, 61, ExponentDecimal),
    spec(Field::OrbitModel, "orbit_model", One, 63, 63, Integer),
    spec(Field::ElementSetNumber, "element_set_number", One, 65, 68, Integer),
    spec(Field::Checksum1, "checksum_1", One, 69, 69, Integer),
    spec(Field::LineNumber2, "line_number_2", Two, 1, 1, Integer),
    spec(Field::SatelliteNumber2, "satellite_number_2", Two, 3, 7, Integer),
    spec(Field::Inclination, "inclination", Two, 9, 16, Float),
    spec(Field::RightAscension, "right_ascension", Two, 18, 25, Float),
    spec(Field::Eccentricity, "eccentricity", Two, 27, 33, ImpliedDecimal),
    spec(Field::ArgumentOfPerigee, "argument_of_perigee", Two, 35, 42, Float),
    spec(Field::MeanAnomaly, "mean_anomaly", Two, 44, 51, Float),
    spec(Field::MeanMotion, "mean_motion", Two, 53, 63, Float),
    spec(Field::RevolutionNumber, "revolution_number", Two, 64, 68, Integer),
    spec(Field::Checksum2, "checksum_2", Two, 69, 69, Integer),
];

/// Decode a single field according to its table entry
pub fn read_field<T: TleSource + ?Sized>(tle: &T, field: Field) -> std::result::Result<FieldValue, TleError> {
    let tle = tle.to_tle()?;
    let spec = field.spec();
    let text = field_text(&tle, spec)?;
    Ok(match spec.kind {
        Integer => FieldValue::Integer(parse_integer(spec, text)?),
        Float => FieldValue::Float(parse_float(spec, text)?),
        ImpliedDecimal => FieldValue::Float(parse_implied_decimal(spec, text)?),
        ExponentDecimal => FieldValue::Float(parse_exponent_decimal(spec, text)?),
        Char => FieldValue::Char(parse_char(spec, text)?),
        Text => FieldValue::Text(text.trim().to_owned()),
    })
}

fn field_text<'a>(tle: &'a TleRecord, spec: &FieldSpec) -> std::result::Result<&'a str, TleError> {
    let line = tle.line(spec.line);
    line.get(spec.start - 1..spec.end).ok_or_else(|| {
        TleError::field_parse(
            spec.name,
            line,
            format!(
                "columns {}-{} are out of range for a line of {} characters",
                spec.start,
                spec.end,
                line.len()
            ),
        )
    })
}

fn parse_integer(spec: &FieldSpec, text: &str) -> std::result::Result<u64, TleError> {
    text.trim()
        .parse()
        .map_err(|e| TleError::field_parse(spec.name, text, e))
}

fn parse_float(spec: &FieldSpec, text: &str) -> std::result::Result<f64, TleError> {
    text.trim()
        .parse()
        .map_err(|e| TleError::field_parse(spec.name, text, e))
}

fn parse_char(spec: &FieldSpec, text: &str) -> std::result::Result<char, TleError> {
    text.trim()
        .chars()
        .next()
        .ok_or_else(|| TleError::field_parse(spec.name, text, "field is blank"))
}

fn parse_implied_decimal(spec: &FieldSpec, text: &str) -> std::result::Result<f64, TleError> {
    let digits = text.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TleError::field_parse(spec.name, text, "expected digits only"));
    }
    format!("0.{digits}")
        .parse()
        .map_err(|e| TleError::field_parse(spec.name, text, e))
}

fn parse_exponent_decimal(spec: &FieldSpec, text: &str) -> std::result::Result<f64, TleError> {
    all_consuming(exponent_decimal)(text.trim())
        .map(|(_, value)| value)
        .map_err(|e| TleError::field_parse(spec.name, text, e))
}

fn exponent_decimal(s: &str) -> Result<&str, f64> {
    let (s, sign) = opt(one_of("+-"))(s)?;
    let (s, mantissa) = digit1(s)?;
    let (s, exponent_sign) = one_of("+-")(s)?;
    let (s, exponent) = digit1(s)?;
    let sign = if sign == Some('-') { "-" } else { "" };
    match format!("{sign}0.{mantissa}e{exponent_sign}{exponent}").parse() {
        Ok(value) => Ok((s, value)),
        Err(_) => Err(nom::Err::Error(SyntaxError::Nom(s, ErrorKind::Float))),
    }
}

/// Typed view of a [`FieldValue`], failing when the table decodes the field
/// into a different shape
trait FromFieldValue: Sized {
    const SHAPE: &'static str;

    fn from_value(value: FieldValue) -> Option<Self>;

    fn from_field_value(spec: &FieldSpec, value: FieldValue) -> std::result::Result<Self, TleError> {
        let text = format!("{value:?}");
        Self::from_value(value).ok_or_else(|| {
            TleError::field_parse(
                spec.name,
                text,
                format!("{:?} field does not decode to {}", spec.kind, Self::SHAPE),
            )
        })
    }
}

impl FromFieldValue for u64 {
    const SHAPE: &'static str = "an integer";

    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Integer(v) => Some(v),
            _ => None,
        }
    }
}

impl FromFieldValue for f64 {
    const SHAPE: &'static str = "a float";

    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Float(v) => Some(v),
            _ => None,
        }
    }
}

impl FromFieldValue for char {
    const SHAPE: &'static str = "a character";

    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Char(v) => Some(v),
            _ => None,
        }
    }
}

impl FromFieldValue for String {
    const SHAPE: &'static str = "text";

    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Text(v) => Some(v),
            _ => None,
        }
    }
}

macro_rules! create_field_getter {
    ($func_name:ident, $field:ident, $ty:ty) => {
        pub fn $func_name<T: TleSource + ?Sized>(tle: &T) -> std::result::Result<$ty, TleError> {
            let value = read_field(tle, Field::$field)?;
            <$ty>::from_field_value(Field::$field.spec(), value)
        }
    };
}

create_field_getter!(line_number_1, LineNumber1, u64);
create_field_getter!(satellite_number, SatelliteNumber, u64);
create_field_getter!(classification, Classification, char);
create_field_getter!(int_designator_year, IntDesignatorYear, u64);
create_field_getter!(int_designator_launch_number, IntDesignatorLaunchNumber, u64);
create_field_getter!(int_designator_piece, IntDesignatorPiece, String);
create_field_getter!(epoch_year, EpochYear, u64);
create_field_getter!(epoch_day, EpochDay, f64);
create_field_getter!(first_time_derivative, FirstTimeDerivative, f64);
create_field_getter!(second_time_derivative, SecondTimeDerivative, f64);
create_field_getter!(bstar_drag, BstarDrag, f64);
create_field_getter!(orbit_model, OrbitModel, u64);
create_field_getter!(element_set_number, ElementSetNumber, u64);
create_field_getter!(checksum_1, Checksum1, u64);
create_field_getter!(line_number_2, LineNumber2, u64);
create_field_getter!(satellite_number_2, SatelliteNumber2, u64);
create_field_getter!(inclination, Inclination, f64);
create_field_getter!(right_ascension, RightAscension, f64);
create_field_getter!(eccentricity, Eccentricity, f64);
create_field_getter!(argument_of_perigee, ArgumentOfPerigee, f64);
create_field_getter!(mean_anomaly, MeanAnomaly, f64);
create_field_getter!(mean_motion, MeanMotion, f64);
create_field_getter!(revolution_number, RevolutionNumber, u64);
create_field_getter!(checksum_2, Checksum2, u64);

/// Decode every field of the element set
pub fn elements<T: TleSource + ?Sized>(tle: &T) -> std::result::Result<OrbitalElements, TleError> {
    let tle = tle.to_tle()?;
    let tle = tle.as_ref();
    Ok(OrbitalElements {
        line_number_1: line_number_1(tle)?,
        satellite_number: satellite_number(tle)?,
        classification: classification(tle)?,
        int_designator_year: int_designator_year(tle)?,
        int_designator_launch_number: int_designator_launch_number(tle)?,
        int_designator_piece: int_designator_piece(tle)?,
        epoch_year: epoch_year(tle)?,
        epoch_day: epoch_day(tle)?,
        first_time_derivative: first_time_derivative(tle)?,
        second_time_derivative: second_time_derivative(tle)?,
        bstar_drag: bstar_drag(tle)?,
        orbit_model: orbit_model(tle)?,
        element_set_number: element_set_number(tle)?,
        checksum_1: checksum_1(tle)?,
        line_number_2: line_number_2(tle)?,
        satellite_number_2: satellite_number_2(tle)?,
        inclination: inclination(tle)?,
        right_ascension: right_ascension(tle)?,
        eccentricity: eccentricity(tle)?,
        argument_of_perigee: argument_of_perigee(tle)?,
        mean_anomaly: mean_anomaly(tle)?,
        mean_motion: mean_motion(tle)?,
        revolution_number: revolution_number(tle)?,
        checksum_2: checksum_2(tle)?,
    })
}

pub fn satellite_name<T: TleSource + ?Sized>(tle: &T) -> std::result::Result<String, TleError> {
    Ok(tle.to_tle()?.name.clone())
}

/// NORAD catalog number
pub fn catalog_number<T: TleSource + ?Sized>(tle: &T) -> std::result::Result<u64, TleError> {
    satellite_number(tle)
}

/// International designator in COSPAR form, e.g. `1998-067A`
pub fn cospar_id<T: TleSource + ?Sized>(tle: &T) -> std::result::Result<String, TleError> {
    let tle = tle.to_tle()?;
    let tle = tle.as_ref();
    Ok(format!(
        "{}-{:03}{}",
        full_year(int_designator_year(tle)?),
        int_designator_launch_number(tle)?,
        int_designator_piece(tle)?
    ))
}

/// One day divided by the mean motion
pub fn average_orbit_time_ms<T: TleSource + ?Sized>(tle: &T) -> std::result::Result<f64, TleError> {
    let tle = tle.to_tle()?;
    let revs_per_day = mean_motion(tle.as_ref())?;
    if revs_per_day.is_nan() || revs_per_day <= 0.0 {
        return Err(TleError::field_parse(
            Field::MeanMotion.spec().name,
            revs_per_day.to_string(),
            "mean motion must be positive",
        ));
    }
    Ok(MS_PER_DAY as f64 / revs_per_day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use indoc::indoc;

    const ISS: &str = indoc! {r#"
        ISS (ZARYA)
        1 25544U 98067A   17206.18396726  .00001961  00000-0  36771-4 0  9993
        2 25544  51.6400 208.9163 0006317  69.9862  25.2906 15.54225995 67660
        "#};

    #[test]
    fn table_is_in_field_order() {
        for (idx, spec) in FIELDS.iter().enumerate() {
            assert_eq!(spec.field as usize, idx, "{}", spec.name);
            assert!(spec.start <= spec.end, "{}", spec.name);
            assert!(spec.end <= crate::LINE_LENGTH, "{}", spec.name);
        }
    }

    #[test]
    fn line_numbers_and_checksums() {
        assert_eq!(line_number_1(ISS), Ok(1));
        assert_eq!(line_number_2(ISS), Ok(2));
        assert_eq!(checksum_1(ISS), Ok(3));
        assert_eq!(checksum_2(ISS), Ok(0));
    }

    #[test]
    fn element_getters() {
        assert_eq!(satellite_number(ISS), Ok(25544));
        assert_eq!(classification(ISS), Ok('U'));
        assert_eq!(int_designator_piece(ISS), Ok("A".to_owned()));
        assert_eq!(epoch_year(ISS), Ok(17));
        assert_relative_eq!(epoch_day(ISS).unwrap(), 206.18396726);
        assert_relative_eq!(first_time_derivative(ISS).unwrap(), 0.00001961);
        assert_relative_eq!(second_time_derivative(ISS).unwrap(), 0.0);
        assert_relative_eq!(bstar_drag(ISS).unwrap(), 0.36771e-4);
        assert_relative_eq!(inclination(ISS).unwrap(), 51.64);
        assert_relative_eq!(right_ascension(ISS).unwrap(), 208.9163);
        assert_relative_eq!(eccentricity(ISS).unwrap(), 0.0006317);
        assert_relative_eq!(argument_of_perigee(ISS).unwrap(), 69.9862);
        assert_relative_eq!(mean_anomaly(ISS).unwrap(), 25.2906);
        assert_relative_eq!(mean_motion(ISS).unwrap(), 15.54225995);
        assert_eq!(revolution_number(ISS), Ok(6766));
        assert_eq!(element_set_number(ISS), Ok(999));
    }

    #[test]
    fn read_field_by_kind() {
        assert_eq!(read_field(ISS, Field::Classification), Ok(FieldValue::Char('U')));
        assert_eq!(read_field(ISS, Field::SatelliteNumber2), Ok(FieldValue::Integer(25544)));
        assert_eq!(
            read_field(ISS, Field::IntDesignatorPiece),
            Ok(FieldValue::Text("A".to_owned()))
        );
        assert_eq!(read_field(ISS, Field::Eccentricity), Ok(FieldValue::Float(0.0006317)));
    }

    #[test]
    fn getters_decode_through_the_table() {
        for spec in FIELDS.iter() {
            let value = read_field(ISS, spec.field).unwrap();
            let expected = match spec.kind {
                FieldKind::Integer => matches!(value, FieldValue::Integer(_)),
                FieldKind::Float | FieldKind::ImpliedDecimal | FieldKind::ExponentDecimal => {
                    matches!(value, FieldValue::Float(_))
                }
                FieldKind::Char => matches!(value, FieldValue::Char(_)),
                FieldKind::Text => matches!(value, FieldValue::Text(_)),
            };
            assert!(expected, "{}: {value:?}", spec.name);
        }
        assert_eq!(
            FieldValue::Float(eccentricity(ISS).unwrap()),
            read_field(ISS, Field::Eccentricity).unwrap()
        );
        assert_eq!(
            FieldValue::Float(bstar_drag(ISS).unwrap()),
            read_field(ISS, Field::BstarDrag).unwrap()
        );
    }

    #[test]
    fn shape_mismatch_is_a_field_error() {
        let spec = Field::Inclination.spec();
        assert!(matches!(
            u64::from_field_value(spec, FieldValue::Float(51.64)),
            Err(TleError::FieldParse {
                field: "inclination",
                ..
            })
        ));
        assert_eq!(f64::from_field_value(spec, FieldValue::Float(51.64)), Ok(51.64));
    }

    #[test]
    fn negative_exponent_decimal() {
        assert_eq!(all_consuming(exponent_decimal)("-11606-4"), Ok(("", -0.11606e-4)));
        assert_eq!(all_consuming(exponent_decimal)("12345+1"), Ok(("", 1.2345)));
        assert!(all_consuming(exponent_decimal)("1.2e-4").is_err());
    }

    #[test]
    fn whole_record() {
        let el = elements(ISS).unwrap();
        assert_eq!(el.satellite_number, el.satellite_number_2);
        assert_eq!(el.int_designator_year, 98);
        assert_eq!(el.int_designator_launch_number, 67);
        assert_relative_eq!(el.mean_motion, 15.54225995);
    }

    #[test]
    fn derived_identifiers() {
        assert_eq!(satellite_name(ISS), Ok("ISS (ZARYA)".to_owned()));
        assert_eq!(catalog_number(ISS), Ok(25544));
        assert_eq!(cospar_id(ISS), Ok("1998-067A".to_owned()));
        assert_relative_eq!(
            average_orbit_time_ms(ISS).unwrap(),
            86_400_000.0 / 15.54225995
        );
    }

    #[test]
    fn malformed_field() {
        let bad = ISS.replace("51.6400", "51.6x00");
        assert!(matches!(
            inclination(bad.as_str()),
            Err(TleError::FieldParse {
                field: "inclination",
                ..
            })
        ));
    }

    #[test]
    fn short_line() {
        let tle = TleRecord::unnamed("1 25544U", "2 25544");
        assert!(matches!(
            mean_motion(&tle),
            Err(TleError::FieldParse { field: "mean_motion", .. })
        ));
    }
}
