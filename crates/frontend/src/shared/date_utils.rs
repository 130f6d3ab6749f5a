//! Date and duration formatting shared by every panel.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

fn parse_naive(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    // Python's str(datetime) and a few backend variants
    for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// "2024-03-15..." -> "15.03.2024"; unparseable input is returned as-is.
pub fn format_date(value: &str) -> String {
    match parse_naive(value) {
        Some(dt) => dt.format("%d.%m.%Y").to_string(),
        None => value.to_string(),
    }
}

/// "2024-03-15T14:02:26Z" -> "15.03, 14:02" (the panel's short form).
pub fn format_datetime(value: &str) -> String {
    match parse_naive(value) {
        Some(dt) => dt.format("%d.%m, %H:%M").to_string(),
        None => value.to_string(),
    }
}

/// Milliseconds to a human-readable duration; zero or absent -> "N/A".
pub fn format_duration(ms: Option<f64>) -> String {
    let ms = match ms {
        Some(v) if v > 0.0 => v,
        _ => return "N/A".to_string(),
    };
    if ms < 1000.0 {
        format!("{}ms", ms.round() as i64)
    } else if ms < 60_000.0 {
        format!("{:.1}s", ms / 1000.0)
    } else {
        let minutes = (ms / 60_000.0).floor() as i64;
        let seconds = ((ms % 60_000.0) / 1000.0).round() as i64;
        format!("{}m {}s", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
        assert_eq!(format_date("2024-03-15 14:02:26"), "15.03.2024");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15.03, 14:02");
        assert_eq!(format_datetime("2024-12-31 23:59:59"), "31.12, 23:59");
        assert_eq!(format_datetime("invalid"), "invalid");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(None), "N/A");
        assert_eq!(format_duration(Some(0.0)), "N/A");
        assert_eq!(format_duration(Some(850.0)), "850ms");
        assert_eq!(format_duration(Some(1500.0)), "1.5s");
        assert_eq!(format_duration(Some(125_000.0)), "2m 5s");
    }
}
