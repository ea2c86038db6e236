//! Model annotations consumed by the template layer.

use swan_core::NamingContext;
use swan_ir::{
    ESCAPED_PROPERTY_NAME, HAS_ESCAPED_PROPERTY_NAMES, ModelMap, SWIFT_OPTIONAL_SCALAR,
    SchemaModel, SchemaProperty,
};

/// Annotate every model in place.
pub fn post_process_models(models: &mut ModelMap, context: &NamingContext) {
    for model in models.values_mut() {
        post_process_model(model, context);
    }
}

/// Flag escaped property names and optional scalars on one model.
///
/// Every property list is annotated so the flags agree whichever list a
/// template iterates.
pub fn post_process_model(model: &mut SchemaModel, context: &NamingContext) {
    let mut has_escaped = false;
    for list in [
        &mut model.vars,
        &mut model.all_vars,
        &mut model.parent_vars,
    ] {
        for property in list.iter_mut() {
            has_escaped |= post_process_property(property, context);
        }
    }

    if has_escaped {
        model.extensions.set_flag(HAS_ESCAPED_PROPERTY_NAMES);
    }
}

/// Annotate one property. Returns true if its name is escaped.
pub fn post_process_property(property: &mut SchemaProperty, context: &NamingContext) -> bool {
    if context.is_optional(property.required) && property.scalar.is_some() {
        property.extensions.set_flag(SWIFT_OPTIONAL_SCALAR);
    }

    let escaped = property.is_escaped();
    if escaped {
        property.extensions.set_flag(ESCAPED_PROPERTY_NAME);
    }
    escaped
}
