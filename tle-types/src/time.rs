/// Absolute instants are expressed in UTC
pub type UtcTimestamp = chrono::DateTime<chrono::Utc>;

/// Milliseconds since 1970-01-01T00:00:00Z
pub type EpochMillis = i64;

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_DAY: i64 = 24 * 60 * MS_PER_MINUTE;
