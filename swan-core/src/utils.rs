//! Shared string utilities for identifier normalization.

/// Characters that separate words for [`camelize`].
const WORD_DELIMITERS: [char; 5] = ['_', '-', ' ', '.', '/'];

/// Strip or replace characters that cannot appear in an identifier.
///
/// Purely syntactic: knows nothing about casing or reserved words.
/// Applying it twice yields the same result as applying it once.
pub fn sanitize_name(name: &str) -> String {
    if name == "$" {
        return "value".to_string();
    }

    name.replace("[]", "")
        .replace(['[', '('], "_")
        .replace([']', ')'], "")
        .replace(['.', '-', ' '], "_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Convert a delimited name to camel case (e.g., "pet_id" -> "PetId").
///
/// A delimiter followed by another character is dropped and that character
/// upper-cased; a trailing delimiter is kept. Inner case is preserved, so
/// "petId" becomes "PetId". With `lowercase_first` the first character of
/// the result is lower-cased ("pet_id" -> "petId").
pub fn camelize(word: &str, lowercase_first: bool) -> String {
    let mut result = String::with_capacity(word.len());
    let mut chars = word.chars().peekable();
    let mut upper_next = true;

    while let Some(c) = chars.next() {
        if WORD_DELIMITERS.contains(&c) && chars.peek().is_some() {
            upper_next = true;
            continue;
        }
        if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }

    if lowercase_first {
        lowercase_first_char(&result)
    } else {
        result
    }
}

/// Lower-case everything, then upper-case the first letter of each word.
///
/// Words are separated by any of `delimiters`, which are kept in the output
/// (e.g., "PENDING_REVIEW" with `['_']` -> "Pending_Review").
pub fn capitalize_fully(text: &str, delimiters: &[char]) -> String {
    let mut result = String::with_capacity(text.len());
    let mut capitalize_next = true;

    for c in text.chars() {
        if delimiters.contains(&c) {
            result.push(c);
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }
    result
}

/// Upper-case the first character, leaving the rest untouched.
pub fn initial_caps(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

fn lowercase_first_char(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Returns true for constant-style names made only of `A-Z` and `_`.
///
/// The empty string counts as screaming case.
pub fn is_screaming_case(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_uppercase() || c == '_')
}

/// Returns true if the first character is an ASCII digit.
pub fn starts_with_digit(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Remove double quotes so text can be embedded in a string literal.
pub fn escape_quotation_mark(input: &str) -> String {
    input.replace('"', "")
}

/// Break up comment delimiters so text can be embedded in a block comment.
pub fn escape_unsafe_characters(input: &str) -> String {
    input.replace("*/", "*_/").replace("/*", "/_*")
}
