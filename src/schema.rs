//! Loosely-parsed view of a JSON Schema document.
//!
//! Only the keys the generator cares about are modeled; everything else in
//! the document is ignored. Maps deserialize into `IndexMap` so definitions
//! and properties keep their document order all the way to the output.

use indexmap::IndexMap;
use serde::Deserialize;

pub type Definitions = IndexMap<String, Definition>;

#[derive(Debug, Clone, Deserialize)]
pub struct SchemaDocument {
    pub definitions: Option<Definitions>,
}

/// A named entry under `definitions`: either a record (has `properties`) or
/// a scalar alias (bare `type`, possibly with `items`). Only records are
/// materialized as output units.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Definition {
    #[serde(default)]
    pub properties: Option<IndexMap<String, PropertyDescriptor>>,
    #[serde(flatten)]
    pub descriptor: PropertyDescriptor,
}

impl Definition {
    pub fn is_record(&self) -> bool {
        self.properties.is_some()
    }
}

/// One property's schema fragment. Which key is present decides the shape;
/// `type` wins over `anyOf`, which wins over `$ref`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyDescriptor {
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub title: Option<String>,
    pub items: Option<Box<PropertyDescriptor>>,
    #[serde(rename = "anyOf")]
    pub any_of: Option<Vec<PropertyDescriptor>>,
    #[serde(rename = "$ref")]
    pub reference: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Integer,
    Number,
    String,
    Boolean,
}

/// Tagged classification the resolver matches on. Total: every descriptor
/// maps to exactly one variant, unknown shapes land in `Unresolved`.
#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
    Scalar(ScalarKind),
    Null,
    Object { title: Option<&'a str> },
    Array { items: Option<&'a PropertyDescriptor> },
    Union(&'a [PropertyDescriptor]),
    /// Final path segment of the `$ref` string.
    Reference(&'a str),
    Unresolved,
}

impl PropertyDescriptor {
    pub fn shape(&self) -> Shape<'_> {
        if let Some(ty) = self.type_.as_deref() {
            return match ty {
                "integer" => Shape::Scalar(ScalarKind::Integer),
                "number" => Shape::Scalar(ScalarKind::Number),
                "string" => Shape::Scalar(ScalarKind::String),
                "boolean" => Shape::Scalar(ScalarKind::Boolean),
                "null" => Shape::Null,
                "object" => Shape::Object { title: self.title.as_deref() },
                "array" => Shape::Array { items: self.items.as_deref() },
                _ => Shape::Unresolved,
            };
        }
        if let Some(branches) = self.any_of.as_deref() {
            return Shape::Union(branches);
        }
        if let Some(reference) = self.reference.as_deref() {
            return Shape::Reference(ref_name(reference));
        }
        Shape::Unresolved
    }

    /// A descriptor is "typed" iff it carries a `type` key. Union scanning
    /// keys off this, not off resolvability.
    pub fn is_typed(&self) -> bool {
        self.type_.is_some()
    }
}

/// `#/definitions/Address` → `Address`. A ref with no `/` is used whole.
pub fn ref_name(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}

// ------------------------------- Tests ------------------------------------ //
