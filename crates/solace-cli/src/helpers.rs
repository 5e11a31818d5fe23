//! Input validation and small formatting helpers.

use chrono::{NaiveDate, NaiveDateTime};

/// Validate a `YYYY-MM-DD` filter bound. The core compares these
/// lexicographically, so the zero-padded shape matters as much as the
/// calendar validity; both are enforced here at the edge.
pub fn ensure_date(value: &str) -> anyhow::Result<()> {
    if value.len() == 10 && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok() {
        return Ok(());
    }
    Err(anyhow::anyhow!("Invalid date (expected YYYY-MM-DD): {}", value))
}

/// Validate a `YYYY-MM-DDTHH:MM` entry timestamp.
pub fn ensure_stamp(value: &str) -> anyhow::Result<()> {
    if value.len() == 16 && NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").is_ok() {
        return Ok(());
    }
    Err(anyhow::anyhow!(
        "Invalid timestamp (expected YYYY-MM-DDTHH:MM): {}",
        value
    ))
}

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Short display form of an entry id.
pub fn short_id(id: &str) -> String {
    truncate(id, 8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_date() {
        assert!(ensure_date("2024-01-31").is_ok());
        assert!(ensure_date("2024-13-01").is_err());
        assert!(ensure_date("01/31/2024").is_err());
        assert!(ensure_date("2024-1-1").is_err());
    }

    #[test]
    fn test_ensure_stamp() {
        assert!(ensure_stamp("2024-01-31T09:30").is_ok());
        assert!(ensure_stamp("2024-01-31 09:30").is_err());
        assert!(ensure_stamp("2024-01-31T25:00").is_err());
        assert!(ensure_stamp("2024-01-31").is_err());
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer string", 10), "a longe...");
        assert_eq!(truncate("abcdef", 3), "abc");
    }
}
