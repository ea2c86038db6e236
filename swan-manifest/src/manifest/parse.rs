//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::Manifest;
use crate::{
    Error, Result,
    error::SourceContext,
    validate::{is_swift_reserved, validate_affix, validate_identifier},
};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "swan.toml")
    }
}

impl Manifest {
    /// Parse a swan.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a swan.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate_manifest(&manifest, &ctx)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    let affixes = [
        ("model prefix", manifest.naming.prefix.as_deref()),
        ("model suffix", manifest.naming.suffix.as_deref()),
    ];
    for (context, affix) in affixes {
        if let Some(affix) = affix
            && let Some(reason) = validate_affix(affix)
        {
            return Err(ctx.invalid_identifier_error(affix, context, reason));
        }
    }

    for (word, replacement) in &manifest.reserved_words {
        if word.is_empty() {
            return Err(ctx.validation_error("reserved word cannot be empty", "\"\""));
        }
        if is_swift_reserved(replacement) {
            return Err(ctx.reserved_replacement_error(word, replacement));
        }
        if replacement == word {
            return Err(ctx.validation_error(
                format!("'{}' cannot be its own replacement", word),
                &format!("\"{}\"", replacement),
            ));
        }
        if manifest.reserved_words.contains_key(replacement) {
            return Err(ctx.validation_error(
                format!(
                    "replacement for '{}' is itself a reserved word: '{}'",
                    word, replacement
                ),
                &format!("\"{}\"", replacement),
            ));
        }
        if let Some(reason) = validate_identifier(replacement) {
            return Err(ctx.invalid_identifier_error(
                replacement,
                format!("replacement for '{}'", word),
                reason,
            ));
        }
    }

    Ok(())
}
