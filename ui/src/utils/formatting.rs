//! Display formatting for money, areas, file sizes and timestamps

use chrono::{DateTime, FixedOffset, NaiveDateTime};

const TIMESTAMP_DISPLAY: &str = "%Y-%m-%d %H:%M";

/// Inserts thousands separators into a non-negative integer
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Whole dollars, e.g. `$1,250,000`
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(amount.abs().round() as u64))
}

/// e.g. `1,200 sq ft`
pub fn format_area(square_feet: f64) -> String {
    format!("{} sq ft", group_thousands(square_feet.max(0.0).round() as u64))
}

pub fn format_file_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let size = bytes as f64;
    if size >= GB {
        format!("{:.1} GB", size / GB)
    } else if size >= MB {
        format!("{:.1} MB", size / MB)
    } else if size >= KB {
        format!("{:.1} KB", size / KB)
    } else {
        format!("{} B", bytes)
    }
}

/// RFC 3339 instant as sent by the API
pub fn parse_timestamp(timestamp: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(timestamp.trim()).ok()
}

/// Shortens a timestamp to `YYYY-MM-DD HH:MM` in its own offset; anything
/// unparseable is returned as is
pub fn format_timestamp(timestamp: &str) -> String {
    let trimmed = timestamp.trim();
    if let Some(instant) = parse_timestamp(trimmed) {
        return instant.format(TIMESTAMP_DISPLAY).to_string();
    }
    // Some endpoints omit the offset
    match NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(local) => local.format(TIMESTAMP_DISPLAY).to_string(),
        Err(_) => trimmed.to_string(),
    }
}

pub fn format_optional_timestamp(timestamp: Option<&str>) -> String {
    timestamp
        .map(format_timestamp)
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1_250_000.0), "$1,250,000");
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(-1500.0), "-$1,500");
    }

    #[test]
    fn test_format_area() {
        assert_eq!(format_area(1200.0), "1,200 sq ft");
        assert_eq!(format_area(85.6), "86 sq ft");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1_572_864), "1.5 MB");
        assert_eq!(format_file_size(25 * 1024 * 1024), "25.0 MB");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2024-03-02T12:30:45Z"), "2024-03-02 12:30");
        assert_eq!(format_timestamp("2024-03-02T01:00:00+05:00"), "2024-03-02 01:00");
        assert_eq!(format_timestamp("2024-03-02T12:30:45.123"), "2024-03-02 12:30");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
        assert_eq!(format_optional_timestamp(None), "-");
    }

    #[test]
    fn test_format_timestamp_keeps_malformed_multibyte_input() {
        assert_eq!(format_timestamp("2024-03-02T12:3\u{e9}"), "2024-03-02T12:3\u{e9}");
        assert_eq!(format_timestamp(" 2024-03-02Tété "), "2024-03-02Tété");
    }
}
