//! Naming conventions for the target language.

use swan_core::{camelize, is_screaming_case};

/// Language-specific naming conventions.
///
/// Defines how sanitized names are cased and which decorations make a
/// colliding name legal again.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a name to a type name (e.g., "pet_store" -> "PetStore")
    pub type_case: fn(&str) -> String,
    /// Transform a name to a value name (e.g., "pet_id" -> "petId")
    pub value_case: fn(&str) -> String,
    /// Value names for which casing is skipped (e.g., constant-style names)
    pub keep_case: fn(&str) -> bool,
    /// Prepended to type names that are reserved or start with a digit
    pub model_marker: &'static str,
    /// Prepended to operation names that are reserved or start with a digit
    pub operation_verb: &'static str,
    /// Appended to enum type names that would collide
    pub enum_suffix: &'static str,
}

impl NamingConvention {
    /// Case a sanitized name as a type name.
    pub fn type_name(&self, name: &str) -> String {
        (self.type_case)(name)
    }

    /// Case a sanitized name as a value (variable or parameter) name.
    pub fn value_name(&self, name: &str) -> String {
        if (self.keep_case)(name) {
            name.to_string()
        } else {
            (self.value_case)(name)
        }
    }

    /// Case a sanitized name as a method name.
    pub fn method_name(&self, name: &str) -> String {
        (self.value_case)(name)
    }

    /// Decorate a type name so it is no longer reserved (e.g., "Type" -> "ModelType").
    pub fn marked_type(&self, name: &str) -> String {
        format!("{}{}", self.model_marker, name)
    }

    /// Decorate a method name with the operation verb (e.g., "return" -> "callReturn").
    pub fn verb_method(&self, name: &str) -> String {
        (self.value_case)(&format!("{}_{}", self.operation_verb, name))
    }
}

fn swift_type_case(name: &str) -> String {
    camelize(name, false)
}

fn swift_value_case(name: &str) -> String {
    camelize(name, true)
}

/// Swift naming: UpperCamelCase types, lowerCamelCase values.
pub const SWIFT_NAMING: NamingConvention = NamingConvention {
    type_case: swift_type_case,
    value_case: swift_value_case,
    keep_case: is_screaming_case,
    model_marker: "Model",
    operation_verb: "call",
    enum_suffix: "Enum",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swift_casing() {
        assert_eq!(SWIFT_NAMING.type_name("pet_store"), "PetStore");
        assert_eq!(SWIFT_NAMING.value_name("pet_id"), "petId");
        assert_eq!(SWIFT_NAMING.value_name("MAX_SIZE"), "MAX_SIZE");
        assert_eq!(SWIFT_NAMING.method_name("MAX_SIZE"), "mAXSIZE");
    }

    #[test]
    fn test_decorations() {
        assert_eq!(SWIFT_NAMING.marked_type("Type"), "ModelType");
        assert_eq!(SWIFT_NAMING.verb_method("return"), "callReturn");
        assert_eq!(SWIFT_NAMING.verb_method("123go"), "call123go");
    }
}
