//! Character-level cleanup applied before tokenization
//!
//! These helpers remove the parts of a comment that never carry content
//! words: links, e-mail addresses and punctuation.

use regex::Regex;
use std::sync::LazyLock;

// URL with scheme, bare www. host, or anything shaped like local@domain
static LINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+|www\.\S+|\S+@\S+").expect("Invalid regex pattern"));

/// Delete URLs and e-mail addresses
///
/// Matches are removed outright, not replaced with a placeholder.
///
/// # Examples
///
/// ```
/// use feedback_analyzer::text::sanitize::strip_links;
///
/// assert_eq!(strip_links("see www.example.org or mail me@uni.edu"), "see  or mail ");
/// ```
pub fn strip_links(text: &str) -> String {
    LINK_REGEX.replace_all(text, "").into_owned()
}

/// Remove ASCII punctuation characters
///
/// # Examples
///
/// ```
/// use feedback_analyzer::text::sanitize::strip_punctuation;
///
/// assert_eq!(strip_punctuation("don't stop!!!"), "dont stop");
/// ```
pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

/// Check that a token is non-empty and made of letters only
#[must_use]
pub fn is_alphabetic_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_links_removes_schemes() {
        assert_eq!(strip_links("visit https://x.com now"), "visit  now");
        assert_eq!(strip_links("http://a.b/c?d=e"), "");
    }

    #[test]
    fn test_strip_links_removes_www_and_email() {
        assert_eq!(strip_links("go to www.uni.edu/course"), "go to ");
        assert_eq!(strip_links("contact ta@uni.edu please"), "contact  please");
    }

    #[test]
    fn test_strip_links_keeps_plain_text() {
        assert_eq!(strip_links("nothing to strip"), "nothing to strip");
    }

    #[test]
    fn test_strip_punctuation() {
        assert_eq!(strip_punctuation("well-paced, clear."), "wellpaced clear");
        assert_eq!(strip_punctuation("100%"), "100");
        // Non-ASCII punctuation is left for the tokenizer
        assert_eq!(strip_punctuation("great…"), "great…");
    }

    #[test]
    fn test_is_alphabetic_word() {
        assert!(is_alphabetic_word("lecture"));
        assert!(is_alphabetic_word("café"));
        assert!(!is_alphabetic_word("cs101"));
        assert!(!is_alphabetic_word(""));
    }
}
