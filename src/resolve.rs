//! Type resolution: property descriptor → `(type name, many)`.
//!
//! One algorithm, two scalar tables (`Flavor`). The model flavor names types
//! for plain data-holder classes; the marshalling flavor names marshmallow
//! field kinds and tracks list cardinality separately via `many`.

use crate::schema::{Definitions, PropertyDescriptor, ScalarKind, Shape};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    Model,
    Marshal,
}

impl Flavor {
    fn scalar_name(self, kind: ScalarKind) -> &'static str {
        match (self, kind) {
            (Flavor::Model, ScalarKind::Integer) => "int",
            (Flavor::Model, ScalarKind::Number) => "float",
            (Flavor::Model, ScalarKind::String) => "str",
            (Flavor::Model, ScalarKind::Boolean) => "bool",
            (Flavor::Marshal, ScalarKind::Integer) => "Int",
            (Flavor::Marshal, ScalarKind::Number) => "Float",
            (Flavor::Marshal, ScalarKind::String) => "Str",
            (Flavor::Marshal, ScalarKind::Boolean) => "Boolean",
        }
    }

    fn list_name(self) -> &'static str {
        match self {
            Flavor::Model => "list",
            Flavor::Marshal => "List",
        }
    }

    /// Built-in names need no import; anything else is a generated type.
    pub fn is_builtin(self, name: &str) -> bool {
        match self {
            Flavor::Model => matches!(name, "int" | "float" | "str" | "list" | "bool"),
            Flavor::Marshal => matches!(name, "Int" | "Float" | "Str" | "List" | "Boolean"),
        }
    }
}

/// Empty `name` means "drop this property".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedType {
    pub name: String,
    pub many: bool,
}

impl ResolvedType {
    fn none() -> Self {
        Self::default()
    }

    fn single(name: &str) -> Self {
        Self { name: name.to_string(), many: false }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

pub fn resolve(
    descriptor: &PropertyDescriptor,
    definitions: &Definitions,
    flavor: Flavor,
) -> ResolvedType {
    match descriptor.shape() {
        Shape::Scalar(kind) => ResolvedType::single(flavor.scalar_name(kind)),
        Shape::Null | Shape::Unresolved => ResolvedType::none(),
        // inline objects are named by their title; no title → drop
        Shape::Object { title } => title.map(ResolvedType::single).unwrap_or_default(),
        Shape::Array { items } => match flavor {
            // model side folds cardinality into the type name itself
            Flavor::Model => ResolvedType::single(flavor.list_name()),
            Flavor::Marshal => {
                let name = match items {
                    Some(items) => resolve(items, definitions, flavor).name,
                    None => flavor.list_name().to_string(),
                };
                ResolvedType { name, many: true }
            }
        },
        Shape::Union(branches) => {
            // first typed branch with a non-empty resolution wins; this is
            // a pick, not a sum type
            for branch in branches {
                if !branch.is_typed() {
                    continue;
                }
                let resolved = resolve(branch, definitions, flavor);
                if !resolved.is_empty() {
                    return resolved;
                }
            }
            ResolvedType::none()
        }
        Shape::Reference(name) => {
            if let Some(target) = definitions.get(name) {
                // alias transparency: a non-record target resolves as if its
                // descriptor had been written inline (recursive, so chains
                // of aliases flatten)
                if !target.is_record() && target.descriptor.is_typed() {
                    return resolve(&target.descriptor, definitions, flavor);
                }
            }
            // record target, or a name absent from the document: used as-is
            ResolvedType::single(name)
        }
    }
}

// ------------------------------- Tests ------------------------------------ //
