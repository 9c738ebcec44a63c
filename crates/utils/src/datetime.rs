use std::time::SystemTime;

use chrono::{DateTime, Local, NaiveDateTime};

/// Layout of the EXIF `DateTime*` tags.
pub const EXIF_DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

#[must_use]
pub fn system_time_to_local(time: std::io::Result<SystemTime>) -> Option<DateTime<Local>> {
    time.ok().map(DateTime::<Local>::from)
}

/// Parses an EXIF date such as `2023:05:10 14:22:01`.
///
/// Surrounding whitespace and the NUL padding some cameras write are ignored.
#[must_use]
pub fn parse_exif_datetime(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || c == '\0');
    NaiveDateTime::parse_from_str(trimmed, EXIF_DATETIME_FORMAT).ok()
}
