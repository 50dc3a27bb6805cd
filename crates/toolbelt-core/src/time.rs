// Rust guideline compliant 2026-10-16

//! Timestamp and duration formatting helpers.

use chrono::{DateTime, Local};
use std::time::Duration;

/// Timestamp layout used at the start of every console line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Width the bracketed tag column is padded to.
pub const TAG_WIDTH: usize = 10;

/// Formats a local time with millisecond precision.
pub fn format_timestamp(at: DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Builds the `<timestamp> <tag>` prefix shared by log and progress lines.
///
/// The tag is left-aligned in a fixed-width column followed by a single
/// space, so messages line up regardless of the tag length.
pub fn line_prefix(tag: &str) -> String {
    format!("{} {}", format_timestamp(Local::now()), tag_column(tag))
}

/// Pads a bracketed tag to the fixed column width plus a separating space.
pub fn tag_column(tag: &str) -> String {
    format!("{:<width$} ", tag, width = TAG_WIDTH)
}

/// Renders a duration compactly, e.g. `1h2m3.5s`, `2.75s` or `150ms`.
///
/// Fractions are kept to millisecond precision (microseconds below one
/// millisecond) with trailing zeros removed.
pub fn format_duration(duration: Duration) -> String {
    if duration.is_zero() {
        return "0s".to_string();
    }

    if duration < Duration::from_millis(1) {
        return format!("{}µs", duration.as_micros());
    }

    if duration < Duration::from_secs(1) {
        let millis = duration.as_secs_f64() * 1_000.0;
        return format!("{}ms", trim_fraction(format!("{millis:.3}")));
    }

    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = (total_secs % 60) as f64 + f64::from(duration.subsec_nanos()) / 1e9;
    let seconds = trim_fraction(format!("{seconds:.3}"));

    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    }
}

fn trim_fraction(text: String) -> String {
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration(Duration::ZERO), "0s");
    }

    #[test]
    fn test_format_duration_sub_second() {
        assert_eq!(format_duration(Duration::from_millis(150)), "150ms");
        assert_eq!(format_duration(Duration::from_micros(1_500)), "1.5ms");
        assert_eq!(format_duration(Duration::from_micros(250)), "250µs");
    }

    #[test]
    fn test_format_duration_seconds() {
        assert_eq!(format_duration(Duration::from_millis(2_750)), "2.75s");
        assert_eq!(format_duration(Duration::from_secs(3)), "3s");
    }

    #[test]
    fn test_format_duration_minutes_and_hours() {
        assert_eq!(format_duration(Duration::from_secs(62)), "1m2s");
        assert_eq!(format_duration(Duration::from_millis(3_723_500)), "1h2m3.5s");
        assert_eq!(format_duration(Duration::from_secs(3_720)), "1h2m0s");
    }

    #[test]
    fn test_tag_column_counts_characters() {
        assert_eq!(tag_column("[ERROR]"), "[ERROR]    ");
        assert_eq!(tag_column("[✔]").chars().count(), TAG_WIDTH + 1);
    }

    #[test]
    fn test_line_prefix_pads_tag_column() {
        let prefix = line_prefix("[INFO]");
        let timestamp = &prefix[..23];
        assert!(NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(&prefix[23..], " [INFO]     ");
    }
}
