//! Validation utilities for Swift identifiers

use swan_core::{SWIFT_RESERVED_WORDS, sanitize_name};

/// Check if a name is a Swift reserved word
pub(crate) fn is_swift_reserved(name: &str) -> bool {
    SWIFT_RESERVED_WORDS.contains(&name)
}

/// Validate that a name can be emitted verbatim as a Swift identifier.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }

    if is_swift_reserved(name) {
        return Some("name is a Swift reserved word");
    }

    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return Some("name must not start with a digit");
    }

    if sanitize_name(name) != name {
        return Some("name contains characters that are not allowed in identifiers");
    }

    None
}

/// Validate a model name prefix or suffix.
///
/// Affixes are joined to model names before camel-casing, so they only need
/// to survive sanitizing unchanged; a leading digit is fine for a suffix.
pub(crate) fn validate_affix(affix: &str) -> Option<&'static str> {
    if affix.is_empty() {
        return Some("affix cannot be empty");
    }
    if sanitize_name(affix) != affix {
        return Some("affix contains characters that are not allowed in identifiers");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("descriptionText").is_none());
        assert!(validate_identifier("_private").is_none());
        assert!(validate_identifier("value2").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("class").is_some());
        assert!(validate_identifier("2fast").is_some());
        assert!(validate_identifier("my-name").is_some());
        assert!(validate_identifier("a b").is_some());
    }

    #[test]
    fn test_validate_affix() {
        assert!(validate_affix("API").is_none());
        assert!(validate_affix("V2").is_none());
        assert!(validate_affix("2").is_none());
        assert!(validate_affix("my-prefix").is_some());
        assert_eq!(validate_affix(""), Some("affix cannot be empty"));
    }
}
