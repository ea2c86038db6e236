//! Inheritance reconciliation.
//!
//! A property declared by an ancestor is owned by that ancestor: it is
//! removed from the descendant's own list and only appears there through
//! `all_vars`.

use std::collections::HashSet;

use swan_ir::{ModelMap, SchemaModel, SchemaProperty, mark_has_more};

/// Walk the parent chain of `model` through `store`, nearest first.
///
/// Stops at a parent that is not in the store and at the first name seen
/// twice, so a cyclic chain yields each model at most once.
pub fn ancestors<'s>(model: &SchemaModel, store: &'s ModelMap) -> Vec<&'s SchemaModel> {
    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(model.base_name.as_str());

    let mut chain = Vec::new();
    let mut next = model.parent_schema.as_deref();
    while let Some(name) = next {
        if !visited.insert(name) {
            break;
        }
        let Some(parent) = store.get(name) else {
            break;
        };
        chain.push(parent);
        next = parent.parent_schema.as_deref();
    }
    chain
}

/// Reconcile one model against the un-reconciled `store`.
///
/// Returns true if any own property was removed.
pub fn reconcile(model: &mut SchemaModel, store: &ModelMap) -> bool {
    let chain = ancestors(model, store);

    model.all_vars = flatten(&model.vars, &chain);
    mark_has_more(&mut model.all_vars);

    model.parent_vars = match chain.split_first() {
        Some((parent, rest)) => flatten(&parent.vars, rest),
        None => Vec::new(),
    };
    mark_has_more(&mut model.parent_vars);

    let mut removed = false;
    for ancestor in &chain {
        for inherited in &ancestor.vars {
            if let Some(index) = model
                .vars
                .iter()
                .position(|own| own.base_name == inherited.base_name)
            {
                model.vars.remove(index);
                removed = true;
            }
        }
    }

    if removed {
        mark_has_more(&mut model.vars);
    }
    removed
}

/// Reconcile every model in place.
///
/// All chains are read from a snapshot taken before any model is touched.
pub fn reconcile_all(models: &mut ModelMap) -> usize {
    let snapshot = models.clone();
    models
        .values_mut()
        .map(|model| reconcile(model, &snapshot))
        .filter(|removed| *removed)
        .count()
}

/// `own` followed by every ancestor property whose raw key is not yet present.
///
/// A property some ancestor also declares is taken from the topmost
/// ancestor that declares it, so its flags match the owner's copy.
fn flatten(own: &[SchemaProperty], chain: &[&SchemaModel]) -> Vec<SchemaProperty> {
    let owner_copy = |property: &SchemaProperty| {
        chain
            .iter()
            .rev()
            .find_map(|ancestor| {
                ancestor
                    .vars
                    .iter()
                    .find(|p| p.base_name == property.base_name)
            })
            .unwrap_or(property)
            .clone()
    };

    let mut flat: Vec<SchemaProperty> = own.iter().map(&owner_copy).collect();
    for ancestor in chain {
        for property in &ancestor.vars {
            if !flat.iter().any(|p| p.base_name == property.base_name) {
                flat.push(owner_copy(property));
            }
        }
    }
    flat
}
