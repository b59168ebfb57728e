//! Social handle normalization and validation

use regex::Regex;
use std::sync::OnceLock;

/// Regex for the platform handle shape: 1-15 word characters, optional leading @
fn handle_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^@?[A-Za-z0-9_]{1,15}$").unwrap())
}

/// Normalize a configured handle for the `twitter:creator` tag.
/// Blank input yields None (tag omitted); anything else gains a leading
/// `@` unless it already has one.
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with('@') {
        Some(trimmed.to_string())
    } else {
        Some(format!("@{}", trimmed))
    }
}

/// Check a handle against the platform shape. Used when the handle is
/// configured, not when it is rendered; rendering trusts the stored value.
pub fn is_valid(raw: &str) -> bool {
    handle_regex().is_match(raw.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_adds_at() {
        assert_eq!(normalize("acme").as_deref(), Some("@acme"));
    }

    #[test]
    fn test_normalize_keeps_existing_at() {
        assert_eq!(normalize("@acme").as_deref(), Some("@acme"));
    }

    #[test]
    fn test_normalize_blank_is_none() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("   "), None);
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(normalize("  acme  ").as_deref(), Some("@acme"));
    }

    #[test]
    fn test_is_valid_accepts_plain_and_prefixed() {
        assert!(is_valid("acme"));
        assert!(is_valid("@acme"));
        assert!(is_valid("user_123"));
    }

    #[test]
    fn test_is_valid_rejects_bad_shapes() {
        assert!(!is_valid(""));
        assert!(!is_valid("@"));
        assert!(!is_valid("has spaces"));
        assert!(!is_valid("way_too_long_for_twitter"));
        assert!(!is_valid("dash-ed"));
    }
}
