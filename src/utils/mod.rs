//! Common utilities and helper functions
//!
//! This module provides shared utilities used across the application.

use regex::Regex;
use std::sync::OnceLock;

/// Fallback name for subjects that sanitize to nothing
const UNTITLED: &str = "untitled";

/// Sanitize a subject label for use in a filename
///
/// Characters that are invalid on common filesystems become `_`, as does
/// whitespace; leading and trailing `_` and `.` are trimmed.
///
/// # Examples
///
/// ```
/// use feedback_analyzer::utils::sanitize_filename;
///
/// assert_eq!(sanitize_filename("Math 101: Fall"), "Math_101__Fall");
/// assert_eq!(sanitize_filename("../"), "untitled");
/// ```
pub fn sanitize_filename(filename: &str) -> String {
    static INVALID_CHARS: OnceLock<Regex> = OnceLock::new();

    let re = INVALID_CHARS
        .get_or_init(|| Regex::new(r#"[<>:"/\\|?*\s\x00-\x1f]"#).expect("Invalid regex pattern"));

    let sanitized = re.replace_all(filename.trim(), "_");
    let sanitized = sanitized.trim_matches(|c| c == '_' || c == '.');

    if sanitized.is_empty() {
        UNTITLED.to_string()
    } else {
        sanitized.to_string()
    }
}

/// Truncate text to at most `max_chars` characters, marking the cut with `...`
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}

/// Format a ratio in [0, 1] as a percentage with one decimal
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}
