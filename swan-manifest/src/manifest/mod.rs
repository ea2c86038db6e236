//! Manifest types and parsing for swan.toml files.

mod file;
mod parse;

use indexmap::IndexMap;
use serde::Deserialize;
pub use file::SwanToml;
pub use parse::parse_manifest;
use swan_core::{NamingContext, ReservedWords};

/// Root manifest for swan.toml
///
/// ```toml
/// [naming]
/// prefix = "API"
/// unwrap-required = true
///
/// [reserved-words]
/// description = "descriptionText"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Manifest {
    /// Global naming options
    #[serde(default)]
    pub naming: NamingContext,

    /// Explicit replacements for reserved words (word -> replacement)
    #[serde(default)]
    pub reserved_words: IndexMap<String, String>,
}

impl Manifest {
    /// Build the reserved-word table: the Swift words plus configured replacements.
    pub fn reserved_word_table(&self) -> ReservedWords {
        ReservedWords::swift().with_mappings(
            self.reserved_words
                .iter()
                .map(|(word, replacement)| (word.clone(), replacement.clone())),
        )
    }
}
