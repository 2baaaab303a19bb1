//! Element set epoch decoding

use crate::{
    error::TleError,
    fields::{epoch_day, epoch_year, Field},
    parser::TleSource,
};
use chrono::TimeZone;
use tle_types::prelude::*;

/// Two-digit years from 57 on belong to the 20th century
pub const CENTURY_PIVOT: u64 = 57;

/// Resolve a two-digit year as published in element sets
pub fn full_year(two_digit_year: u64) -> i32 {
    let year = two_digit_year % 100;
    if year >= CENTURY_PIVOT {
        1900 + year as i32
    } else {
        2000 + year as i32
    }
}

/// The epoch with its sub-millisecond fraction kept, for propagation
pub fn epoch_millis<T: TleSource + ?Sized>(tle: &T) -> Result<f64, TleError> {
    let tle = tle.to_tle()?;
    let tle = tle.as_ref();
    let year = full_year(epoch_year(tle)?);
    let day = epoch_day(tle)?;
    if !(1.0..367.0).contains(&day) {
        return Err(TleError::field_parse(
            Field::EpochDay.spec().name,
            day.to_string(),
            "day of year must lie in [1, 367)",
        ));
    }

    let new_year = chrono::Utc
        .with_ymd_and_hms(year, 1, 1, 0, 0, 0)
        .single()
        .ok_or_else(|| {
            TleError::field_parse(Field::EpochYear.spec().name, year.to_string(), "invalid year")
        })?;
    Ok(new_year.timestamp_millis() as f64 + (day - 1.0) * MS_PER_DAY as f64)
}

/// Epoch in whole milliseconds since the Unix epoch
pub fn epoch_timestamp<T: TleSource + ?Sized>(tle: &T) -> Result<EpochMillis, TleError> {
    Ok(epoch_millis(tle)?.round() as EpochMillis)
}

pub fn epoch_datetime<T: TleSource + ?Sized>(tle: &T) -> Result<UtcTimestamp, TleError> {
    let ms = epoch_timestamp(tle)?;
    chrono::Utc.timestamp_millis_opt(ms).single().ok_or_else(|| {
        TleError::field_parse(Field::EpochDay.spec().name, ms.to_string(), "epoch out of range")
    })
}
