//! Shared helper functions for CLI commands

use crate::core::measure::Inches;

/// Truncate a string to max_len, adding "..." if truncated
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format an optional length, "N/A" when the part does not apply
pub fn format_length(length: Option<Inches>) -> String {
    match length {
        Some(inches) => format!("{}\"", inches),
        None => "N/A".to_string(),
    }
}

/// "1 representative" / "3 representatives"
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("Northern California", 10), "Northe...");
    }

    #[test]
    fn test_format_length() {
        assert_eq!(format_length(Some(Inches(30.0))), "30.000\"");
        assert_eq!(format_length(None), "N/A");
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "series"), "1 series");
        assert_eq!(plural(2, "model"), "2 models");
    }
}
