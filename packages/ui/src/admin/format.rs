//! Display formatting shared by the admin pages.

use chrono::{DateTime, Utc};

/// Placeholder for absent values.
const EMPTY: &str = "—";

pub fn format_time(time: Option<DateTime<Utc>>) -> String {
    time.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| EMPTY.to_string())
}

pub fn format_hours(hours: Option<f64>) -> String {
    hours
        .map(|h| format!("{h:.1} h"))
        .unwrap_or_else(|| EMPTY.to_string())
}

pub fn format_rate(rate: Option<f64>) -> String {
    rate.map(|r| format!("${r:.2}/h"))
        .unwrap_or_else(|| EMPTY.to_string())
}

pub fn or_empty(value: Option<&str>) -> &str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or(EMPTY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_present_and_missing_values() {
        let t = Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).single();
        assert_eq!(format_time(t), "2024-06-01 09:30");
        assert_eq!(format_time(None), EMPTY);
        assert_eq!(format_hours(Some(7.5)), "7.5 h");
        assert_eq!(format_rate(Some(30.0)), "$30.00/h");
        assert_eq!(or_empty(Some("  ")), EMPTY);
        assert_eq!(or_empty(Some("M")), "M");
    }
}
