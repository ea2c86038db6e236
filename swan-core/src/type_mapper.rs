//! Type mapping between schema types and language-specific types.

/// Trait for mapping schema type names to language-specific type names.
///
/// Implement this trait for each target language to provide the
/// primitive/alias table and the sets of names that are never treated as
/// generated model references.
pub trait TypeMapper {
    /// Map a schema type name (e.g., "integer", "DateTime") to a language type.
    ///
    /// Returns `None` for names the table does not know, which callers treat
    /// as model references.
    fn map_schema_type(&self, schema_type: &str) -> Option<&'static str>;

    /// Check if a type name is a primitive of the target language.
    fn is_language_primitive(&self, type_name: &str) -> bool;

    /// Check if a type name is provided by the target language's default imports.
    fn is_default_include(&self, type_name: &str) -> bool;

    /// Check if a type name is used as-is, bypassing model name decoration.
    fn is_builtin(&self, type_name: &str) -> bool {
        self.is_language_primitive(type_name) || self.is_default_include(type_name)
    }
}

/// Swift primitives that never get model decoration.
pub const SWIFT_PRIMITIVES: &[&str] = &[
    "Int",
    "Int32",
    "Int64",
    "Float",
    "Double",
    "Bool",
    "Void",
    "String",
    "Character",
    "AnyObject",
    "Any",
];

/// Foundation and standard library types available without imports.
pub const SWIFT_DEFAULT_INCLUDES: &[&str] = &[
    "Data",
    "Date",
    "URL",
    "UUID",
    "Array",
    "Dictionary",
    "Set",
    "Any",
    "Empty",
    "AnyObject",
];

/// Swift type mapper implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct SwiftTypeMapper;

impl TypeMapper for SwiftTypeMapper {
    fn map_schema_type(&self, schema_type: &str) -> Option<&'static str> {
        let mapped = match schema_type {
            "array" | "List" => "Array",
            "map" => "Dictionary",
            "date" | "Date" | "DateTime" => "Date",
            "boolean" => "Bool",
            "string" => "String",
            "char" => "Character",
            "short" | "int" | "integer" | "Integer" => "Int",
            "long" => "Int64",
            "float" => "Float",
            "number" | "double" => "Double",
            "object" => "Any",
            "file" => "URL",
            "binary" | "ByteArray" => "Data",
            "UUID" => "UUID",
            _ => return None,
        };
        Some(mapped)
    }

    fn is_language_primitive(&self, type_name: &str) -> bool {
        SWIFT_PRIMITIVES.contains(&type_name)
    }

    fn is_default_include(&self, type_name: &str) -> bool {
        SWIFT_DEFAULT_INCLUDES.contains(&type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swift_type_mapper() {
        let mapper = SwiftTypeMapper;

        assert_eq!(mapper.map_schema_type("integer"), Some("Int"));
        assert_eq!(mapper.map_schema_type("long"), Some("Int64"));
        assert_eq!(mapper.map_schema_type("number"), Some("Double"));
        assert_eq!(mapper.map_schema_type("DateTime"), Some("Date"));
        assert_eq!(mapper.map_schema_type("file"), Some("URL"));
        assert_eq!(mapper.map_schema_type("ByteArray"), Some("Data"));
        assert_eq!(mapper.map_schema_type("object"), Some("Any"));
        assert_eq!(mapper.map_schema_type("Pet"), None);
    }

    #[test]
    fn test_builtin_sets() {
        let mapper = SwiftTypeMapper;

        assert!(mapper.is_language_primitive("Int64"));
        assert!(!mapper.is_language_primitive("Date"));
        assert!(mapper.is_default_include("Date"));
        assert!(mapper.is_builtin("String"));
        assert!(mapper.is_builtin("UUID"));
        assert!(!mapper.is_builtin("Pet"));
    }

    #[test]
    fn test_every_mapped_type_is_builtin() {
        let mapper = SwiftTypeMapper;
        for schema_type in [
            "array", "List", "map", "date", "Date", "DateTime", "boolean", "string", "char",
            "short", "int", "long", "integer", "Integer", "float", "number", "double", "object",
            "file", "binary", "ByteArray", "UUID",
        ] {
            let mapped = mapper.map_schema_type(schema_type).unwrap();
            assert!(mapper.is_builtin(mapped), "{schema_type} -> {mapped}");
        }
    }
}
