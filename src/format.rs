//! Human-readable time strings.

use std::time::Duration;

/// Shown in place of a statistic when there are no laps.
pub const EMPTY_STAT: &str = "--:--:--";

/// Display parts of a duration, each zero-padded to two digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeParts {
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    pub centis: String,
}

impl TimeParts {
    /// Splits `d` into fields. Everything below a centisecond is dropped,
    /// never rounded up. Hours grow past 99 without wrapping.
    pub fn from_duration(d: Duration) -> Self {
        let total_ms = d.as_millis();
        let total_secs = total_ms / 1000;
        Self {
            hours: format!("{:02}", total_secs / 3600),
            minutes: format!("{:02}", (total_secs % 3600) / 60),
            seconds: format!("{:02}", total_secs % 60),
            centis: format!("{:02}", (total_ms % 1000) / 10),
        }
    }
}

/// Format as "HH:MM:SS.CC" (centiseconds)
pub fn format_hms_cs(d: Duration) -> String {
    let p = TimeParts::from_duration(d);
    format!("{}:{}:{}.{}", p.hours, p.minutes, p.seconds, p.centis)
}

/// Like [`format_hms_cs`] but renders `None` as the empty placeholder.
pub fn format_stat(d: Option<Duration>) -> String {
    d.map(format_hms_cs).unwrap_or_else(|| EMPTY_STAT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hms_cs() {
        assert_eq!(format_hms_cs(Duration::ZERO), "00:00:00.00");
        assert_eq!(format_hms_cs(Duration::from_millis(12_340)), "00:00:12.34");
        assert_eq!(format_hms_cs(Duration::from_millis(3_725_410)), "01:02:05.41");
    }

    #[test]
    fn test_format_truncates_to_centis() {
        assert_eq!(format_hms_cs(Duration::from_millis(999)), "00:00:00.99");
        assert_eq!(format_hms_cs(Duration::from_nanos(866_666_666)), "00:00:00.86");
        assert_eq!(format_hms_cs(Duration::from_micros(9_999)), "00:00:00.00");
    }

    #[test]
    fn test_hours_do_not_wrap() {
        let d = Duration::from_secs(100 * 3600 + 59 * 60 + 59);
        assert_eq!(format_hms_cs(d), "100:59:59.00");
    }

    #[test]
    fn test_format_stat_placeholder() {
        assert_eq!(format_stat(None), "--:--:--");
        assert_eq!(format_stat(Some(Duration::from_millis(100))), "00:00:00.10");
    }

    #[test]
    fn test_time_parts() {
        let p = TimeParts::from_duration(Duration::from_millis(61_050));
        assert_eq!(p.hours, "00");
        assert_eq!(p.minutes, "01");
        assert_eq!(p.seconds, "01");
        assert_eq!(p.centis, "05");
    }
}
