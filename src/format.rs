//! Display Formatting
//!
//! Text truncation and creation-time labels for task rows.

use chrono::{Local, NaiveDateTime};

use crate::config::ELLIPSIS;

/// Cut `text` to `max_len` characters and append the ellipsis marker.
/// Text already within the limit comes back unchanged.
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_len).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Undo the marker added by `truncate` at the same bound.
/// Short text that happens to end in "..." is user content and is kept.
pub fn strip_truncation_marker(text: &str, max_len: usize) -> &str {
    if text.chars().count() > max_len {
        if let Some(stripped) = text.strip_suffix(ELLIPSIS) {
            return stripped;
        }
    }
    text
}

/// `"Today HH:MM"`, `"Yesterday HH:MM"` or `"MM/DD/YYYY HH:MM"` for `at`, relative to `now`
pub fn format_timestamp(at: NaiveDateTime, now: NaiveDateTime) -> String {
    let day = at.date();
    if day == now.date() {
        format!("Today {}", at.format("%H:%M"))
    } else if Some(day) == now.date().pred_opt() {
        format!("Yesterday {}", at.format("%H:%M"))
    } else {
        at.format("%m/%d/%Y %H:%M").to_string()
    }
}

/// Label for a task created right now. Stored as-is and never refreshed.
pub fn created_at_now() -> String {
    let now = Local::now().naive_local();
    format_timestamp(now, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("", 30), "");
        assert_eq!(truncate("Buy milk", 30), "Buy milk");
        let exact = "x".repeat(30);
        assert_eq!(truncate(&exact, 30), exact);
    }

    #[test]
    fn test_truncate_long_text() {
        let long = "a".repeat(40);
        let cut = truncate(&long, 30);
        assert_eq!(cut, format!("{}...", "a".repeat(30)));
        assert_eq!(cut.chars().count(), 33);
        assert!(long.starts_with(&cut[..30]));
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let text = "é".repeat(31);
        let cut = truncate(&text, 30);
        assert_eq!(cut.chars().count(), 33);
        assert!(cut.starts_with(&"é".repeat(30)));
        assert_eq!(truncate(&"é".repeat(30), 30), "é".repeat(30));
    }

    #[test]
    fn test_strip_truncation_marker() {
        let cut = truncate(&"a".repeat(40), 30);
        assert_eq!(strip_truncation_marker(&cut, 30), "a".repeat(30));
        assert_eq!(strip_truncation_marker("wait for it...", 30), "wait for it...");
        assert_eq!(strip_truncation_marker("plain", 30), "plain");
    }

    #[test]
    fn test_format_timestamp_today() {
        let now = at(2026, 3, 14, 18, 0);
        assert_eq!(format_timestamp(at(2026, 3, 14, 9, 5), now), "Today 09:05");
    }

    #[test]
    fn test_format_timestamp_yesterday() {
        let now = at(2026, 3, 1, 0, 30);
        assert_eq!(format_timestamp(at(2026, 2, 28, 23, 59), now), "Yesterday 23:59");
    }

    #[test]
    fn test_format_timestamp_older() {
        let now = at(2026, 3, 14, 18, 0);
        assert_eq!(format_timestamp(at(2026, 3, 12, 7, 45), now), "03/12/2026 07:45");
        assert_eq!(format_timestamp(at(2025, 12, 31, 23, 0), now), "12/31/2025 23:00");
    }

    #[test]
    fn test_created_at_now_is_today() {
        assert!(created_at_now().starts_with("Today "));
    }
}
