//! Two-line element set text handling: parsing, checksums, the fixed-column
//! field layout and epoch decoding.

pub use crate::checksum::{is_valid_tle, line_checksum, validate};
pub use crate::epoch::{epoch_datetime, epoch_millis, epoch_timestamp, full_year};
pub use crate::error::{InvalidTleReason, TleError};
pub use crate::fields::{
    average_orbit_time_ms, catalog_number, cospar_id, elements, read_field, satellite_name, Field,
    FieldKind, FieldSpec, FieldValue, FIELDS,
};
pub use crate::parser::{parse_tle, parse_tle_lines, parse_tle_set, TleSource};

pub mod checksum;
pub mod epoch;
pub mod error;
pub mod fields;
pub mod parser;

/// Width of a standard element line, checksum included
pub const LINE_LENGTH: usize = 69;
