//! Global naming options.

use serde::Deserialize;

/// Options that change naming for a whole generation run.
///
/// Built once before any resolution and passed by reference to every
/// resolver; never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct NamingContext {
    /// Prefix joined to every model name with an underscore
    pub prefix: Option<String>,
    /// Suffix joined to every model name with an underscore
    pub suffix: Option<String>,
    /// Render required properties as non-optional types
    #[serde(default)]
    pub unwrap_required: bool,
}

impl NamingContext {
    /// Create a context with no prefix, no suffix, and optional rendering for everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the model name prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set the model name suffix.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Set the required-vs-optional rendering toggle.
    pub fn with_unwrap_required(mut self, unwrap_required: bool) -> Self {
        self.unwrap_required = unwrap_required;
        self
    }

    /// The configured prefix.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// The configured suffix.
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// Whether a property with the given required flag renders as an optional type.
    pub fn is_optional(&self, required: bool) -> bool {
        !self.unwrap_required || !required
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_optional() {
        let ctx = NamingContext::new();
        assert!(ctx.is_optional(true));
        assert!(ctx.is_optional(false));

        let ctx = NamingContext::new().with_unwrap_required(true);
        assert!(!ctx.is_optional(true));
        assert!(ctx.is_optional(false));
    }

    #[test]
    fn test_affixes() {
        let ctx = NamingContext::new().with_suffix("DTO");
        assert_eq!(ctx.prefix(), None);
        assert_eq!(ctx.suffix(), Some("DTO"));
    }
}
