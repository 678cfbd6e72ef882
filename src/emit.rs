//! Structured source IR shared by the two emitters.
//!
//! An emitter builds a `SourceUnit` (ordered import lines + ordered body
//! lines); rendering to text is a separate step, so tests can check the
//! structure without pinning every byte of formatting.

pub mod model;
pub mod schema;

use indexmap::IndexMap;

use crate::resolve::{Flavor, resolve};
use crate::schema::{Definitions, PropertyDescriptor};

/// Surviving properties of one definition, in document order. Borrowed view;
/// the underlying property map is never mutated.
pub type PropertySet<'a> = Vec<(&'a str, &'a PropertyDescriptor)>;

/// The one filtering step, applied once per definition and handed to both
/// emitters: drops `__typename` (GraphQL introspection artifact) and every
/// property whose model-flavor resolution is empty.
pub fn filter_properties<'a>(
    properties: &'a IndexMap<String, PropertyDescriptor>,
    definitions: &Definitions,
) -> PropertySet<'a> {
    properties
        .iter()
        .filter(|(name, _)| name.as_str() != "__typename")
        .filter(|(_, descriptor)| !resolve(descriptor, definitions, Flavor::Model).is_empty())
        .map(|(name, descriptor)| (name.as_str(), descriptor))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub module: String,
    pub symbol: String,
}

#[derive(Debug, Clone, Default)]
pub struct SourceUnit {
    pub imports: Vec<Import>,
    pub body: Vec<String>,
}

impl SourceUnit {
    pub fn import(&mut self, module: impl Into<String>, symbol: impl Into<String>) {
        self.imports.push(Import { module: module.into(), symbol: symbol.into() });
    }

    pub fn line(&mut self, line: impl Into<String>) {
        self.body.push(line.into());
    }

    /// Imports, a blank separator line, then the body. Duplicate imports are
    /// rendered as-is (Python tolerates them; dedup would break byte parity
    /// with pre-existing generated output).
    pub fn render(&self) -> String {
        let mut out = String::new();
        for import in &self.imports {
            out.push_str("from ");
            out.push_str(&import.module);
            out.push_str(" import ");
            out.push_str(&import.symbol);
            out.push('\n');
        }
        out.push('\n');
        for line in &self.body {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn properties(v: serde_json::Value) -> IndexMap<String, PropertyDescriptor> {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn filter_drops_typename_and_unresolvable() {
        let props = properties(json!({
            "__typename": {"type": "string"},
            "gone": {"type": "null"},
            "also_gone": {"anyOf": [{"$ref": "#/definitions/X"}]},
            "kept": {"type": "integer"}
        }));
        let defs = Definitions::default();
        let filtered = filter_properties(&props, &defs);
        let names: Vec<&str> = filtered.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["kept"]);
    }

    #[test]
    fn filter_is_pure_and_repeatable() {
        let props = properties(json!({
            "__typename": {"type": "string"},
            "id": {"type": "integer"}
        }));
        let defs = Definitions::default();
        let a = filter_properties(&props, &defs);
        let b = filter_properties(&props, &defs);
        assert_eq!(a.len(), 1);
        assert_eq!(a.len(), b.len());
        // original map untouched
        assert_eq!(props.len(), 2);
    }

    #[test]
    fn render_separates_imports_from_body() {
        let mut unit = SourceUnit::default();
        unit.import("models.Address", "Address");
        unit.line("class X:");
        assert_eq!(unit.render(), "from models.Address import Address\n\nclass X:\n");
    }
}
