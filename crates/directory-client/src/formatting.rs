//! Display formatting for server timestamps.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%d %b %Y %H:%M:%S";
const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Renders timestamps for display.
#[cfg_attr(test, mockall::automock)]
pub trait DateFormatting: Send + Sync {
    /// Format `value`, returning it unchanged when it cannot be parsed.
    fn format_date(&self, value: &str) -> String;
}

/// Formats as `dd Mon yyyy HH:MM:SS` in a fixed offset or the local zone.
///
/// Timestamps without an offset are taken to be in the display zone already.
///
/// # Examples
/// ```
/// use chrono::FixedOffset;
/// use directory_client::{DateFormatter, DateFormatting};
///
/// let formatter = DateFormatter::with_offset(FixedOffset::east_opt(0).expect("offset"));
/// assert_eq!(
///     formatter.format_date("2017-02-03T04:05:06Z"),
///     "03 Feb 2017 04:05:06"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DateFormatter {
    offset: Option<FixedOffset>,
}

impl DateFormatter {
    /// Format in the machine's local time zone.
    pub fn local() -> Self {
        Self { offset: None }
    }

    /// Format in a fixed offset from UTC.
    pub fn with_offset(offset: FixedOffset) -> Self {
        Self {
            offset: Some(offset),
        }
    }
}

impl DateFormatting for DateFormatter {
    fn format_date(&self, value: &str) -> String {
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
            return match self.offset {
                Some(offset) => timestamp.with_timezone(&offset).format(DISPLAY_FORMAT).to_string(),
                None => timestamp.with_timezone(&Local).format(DISPLAY_FORMAT).to_string(),
            };
        }
        NaiveDateTime::parse_from_str(value, NAIVE_FORMAT).map_or_else(
            |_| value.to_owned(),
            |naive| naive.format(DISPLAY_FORMAT).to_string(),
        )
    }
}
