//! Mapping schema types to Swift type expressions.

use swan_core::{SwiftTypeMapper, TypeMapper};
use swan_ir::{ScalarKind, TypeDescriptor};

use crate::naming::Namer;

/// Resolves [`TypeDescriptor`]s into Swift type strings.
///
/// Leaf names go through the primitive table first; anything that is not a
/// Swift builtin afterwards is treated as a model and named like one.
#[derive(Debug, Clone, Copy)]
pub struct TypeResolver<'a, M: TypeMapper = SwiftTypeMapper> {
    mapper: M,
    namer: Namer<'a>,
}

impl<'a> TypeResolver<'a> {
    pub fn new(namer: Namer<'a>) -> Self {
        Self::with_mapper(SwiftTypeMapper, namer)
    }
}

impl<'a, M: TypeMapper> TypeResolver<'a, M> {
    pub fn with_mapper(mapper: M, namer: Namer<'a>) -> Self {
        Self { mapper, namer }
    }

    /// Resolve a type to its declaration (e.g., `[String:[Int]]`).
    pub fn resolve_type(&self, ty: &TypeDescriptor) -> String {
        match ty {
            TypeDescriptor::Array(inner) => format!("[{}]", self.resolve_type(inner)),
            TypeDescriptor::Map(inner) => format!("[String:{}]", self.resolve_type(inner)),
            TypeDescriptor::Primitive(name) | TypeDescriptor::Reference(name) => {
                self.resolve_leaf(name)
            }
        }
    }

    /// Resolve the innermost element type of a (possibly nested) container.
    pub fn base_type(&self, ty: &TypeDescriptor) -> String {
        match ty {
            TypeDescriptor::Array(inner) | TypeDescriptor::Map(inner) => self.base_type(inner),
            TypeDescriptor::Primitive(name) | TypeDescriptor::Reference(name) => {
                self.resolve_leaf(name)
            }
        }
    }

    /// The concrete container type used to create an empty value.
    pub fn instantiation_type(&self, ty: &TypeDescriptor) -> Option<String> {
        ty.is_container().then(|| self.resolve_type(ty))
    }

    /// Swift properties have no default value; missing values are `nil`.
    pub fn default_value(&self, _ty: &TypeDescriptor) -> Option<String> {
        None
    }

    pub fn is_file(&self, datatype: &str) -> bool {
        datatype == "URL"
    }

    pub fn is_binary(&self, datatype: &str) -> bool {
        datatype == "Data"
    }

    pub fn scalar_kind(&self, datatype: &str) -> Option<ScalarKind> {
        ScalarKind::from_swift_type(datatype)
    }

    fn resolve_leaf(&self, name: &str) -> String {
        let mapped = self.mapper.map_schema_type(name).unwrap_or(name);
        if self.mapper.is_builtin(mapped) {
            mapped.to_string()
        } else {
            self.namer.model_name(mapped).name
        }
    }
}

#[cfg(test)]
mod tests {
    use swan_core::{NamingContext, ReservedWords};

    use super::*;
    use crate::language::SWIFT_NAMING;

    fn with_resolver<R>(context: &NamingContext, f: impl FnOnce(TypeResolver<'_>) -> R) -> R {
        let reserved = ReservedWords::swift();
        f(TypeResolver::new(Namer::new(&SWIFT_NAMING, context, &reserved)))
    }

    fn resolve(ty: TypeDescriptor) -> String {
        with_resolver(&NamingContext::default(), |r| r.resolve_type(&ty))
    }

    #[test]
    fn test_primitives() {
        assert_eq!(resolve(TypeDescriptor::primitive("integer")), "Int");
        assert_eq!(resolve(TypeDescriptor::primitive("long")), "Int64");
        assert_eq!(resolve(TypeDescriptor::primitive("number")), "Double");
        assert_eq!(resolve(TypeDescriptor::primitive("boolean")), "Bool");
        assert_eq!(resolve(TypeDescriptor::primitive("DateTime")), "Date");
        assert_eq!(resolve(TypeDescriptor::primitive("file")), "URL");
        assert_eq!(resolve(TypeDescriptor::primitive("ByteArray")), "Data");
        assert_eq!(resolve(TypeDescriptor::primitive("object")), "Any");
        assert_eq!(resolve(TypeDescriptor::primitive("UUID")), "UUID");
    }

    #[test]
    fn test_nested_array() {
        let ty = TypeDescriptor::array(TypeDescriptor::array(TypeDescriptor::primitive(
            "integer",
        )));
        assert_eq!(resolve(ty), "[[Int]]");
    }

    #[test]
    fn test_map() {
        assert_eq!(
            resolve(TypeDescriptor::map(TypeDescriptor::primitive("string"))),
            "[String:String]"
        );
        assert_eq!(
            resolve(TypeDescriptor::map(TypeDescriptor::array(
                TypeDescriptor::reference("pet")
            ))),
            "[String:[Pet]]"
        );
    }

    #[test]
    fn test_model_references() {
        assert_eq!(resolve(TypeDescriptor::reference("Pet")), "Pet");
        assert_eq!(resolve(TypeDescriptor::reference("order_item")), "OrderItem");
        assert_eq!(resolve(TypeDescriptor::reference("Error")), "ModelError");
    }

    #[test]
    fn test_references_follow_affixes() {
        let context = NamingContext::new().with_prefix("API");
        let resolved = with_resolver(&context, |r| {
            r.resolve_type(&TypeDescriptor::array(TypeDescriptor::reference("Pet")))
        });
        assert_eq!(resolved, "[APIPet]");
    }

    #[test]
    fn test_base_type() {
        with_resolver(&NamingContext::default(), |r| {
            let ty = TypeDescriptor::map(TypeDescriptor::array(TypeDescriptor::reference("Pet")));
            assert_eq!(r.base_type(&ty), "Pet");
            assert_eq!(r.base_type(&TypeDescriptor::primitive("string")), "String");
        });
    }

    #[test]
    fn test_instantiation_and_default() {
        with_resolver(&NamingContext::default(), |r| {
            let list = TypeDescriptor::array(TypeDescriptor::primitive("string"));
            assert_eq!(r.instantiation_type(&list).as_deref(), Some("[String]"));
            assert_eq!(r.instantiation_type(&TypeDescriptor::primitive("string")), None);
            assert_eq!(r.default_value(&list), None);
        });
    }

    #[test]
    fn test_file_and_binary() {
        with_resolver(&NamingContext::default(), |r| {
            assert!(r.is_file("URL"));
            assert!(!r.is_file("Data"));
            assert!(r.is_binary("Data"));
            assert_eq!(r.scalar_kind("Int64"), Some(ScalarKind::Long));
            assert_eq!(r.scalar_kind("[Int]"), None);
        });
    }
}
