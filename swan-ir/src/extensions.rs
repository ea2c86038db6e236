//! Free-form annotation bag attached to models and properties.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// Set on a property whose resolved name differs from its raw key.
pub const ESCAPED_PROPERTY_NAME: &str = "x-codegen-escaped-property-name";
/// Set on a model when any of its properties has an escaped name.
pub const HAS_ESCAPED_PROPERTY_NAMES: &str = "x-codegen-has-escaped-property-names";
/// Set on a property that renders as an optional numeric or boolean scalar.
pub const SWIFT_OPTIONAL_SCALAR: &str = "x-swift-optional-scalar";

/// Vendor-extension style annotations consumed by the template layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Extensions(BTreeMap<String, Value>);

impl Extensions {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an arbitrary value, replacing any previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Set a boolean flag to `true`.
    pub fn set_flag(&mut self, key: &str) {
        self.insert(key, true);
    }

    /// Returns true if `key` is present and set to `true`.
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.0.get(key), Some(Value::Bool(true)))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags() {
        let mut ext = Extensions::new();
        assert!(!ext.flag(ESCAPED_PROPERTY_NAME));

        ext.set_flag(ESCAPED_PROPERTY_NAME);
        assert!(ext.flag(ESCAPED_PROPERTY_NAME));

        ext.insert(SWIFT_OPTIONAL_SCALAR, "yes");
        assert!(!ext.flag(SWIFT_OPTIONAL_SCALAR));
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let mut ext = Extensions::new();
        ext.set_flag(HAS_ESCAPED_PROPERTY_NAMES);
        let json = serde_json::to_string(&ext).unwrap();
        assert_eq!(json, r#"{"x-codegen-has-escaped-property-names":true}"#);
    }
}
