//! Schema emitter: a marshmallow schema class mirroring the model.
//!
//! Every field is `required=False, allow_none=True` — the generated schemas
//! are for tolerant parsing of heterogeneous upstream data, and unknown
//! incoming fields are excluded rather than rejected.

use super::{PropertySet, SourceUnit};
use crate::resolve::{Flavor, ResolvedType, resolve};
use crate::schema::Definitions;

pub fn emit_schema(
    schema_name: &str,
    properties: &PropertySet<'_>,
    definitions: &Definitions,
    schema_namespace: &str,
    fields_namespace: &str,
) -> String {
    let mut unit = SourceUnit::default();
    unit.import(fields_namespace, "Schema, fields");
    // the unknown-field policy symbol always comes from marshmallow proper
    unit.import("marshmallow", "EXCLUDE");

    let resolved: Vec<(&str, ResolvedType)> = properties
        .iter()
        .map(|(name, descriptor)| (*name, resolve(descriptor, definitions, Flavor::Marshal)))
        .collect();

    for (_, ty) in &resolved {
        if !Flavor::Marshal.is_builtin(&ty.name) {
            unit.import(
                format!("{schema_namespace}.{}Schema", ty.name),
                format!("{}Schema", ty.name),
            );
        }
    }

    unit.line(format!("class {schema_name}(Schema):"));
    unit.line("\tclass Meta:");
    unit.line("\t\tunknown = EXCLUDE");

    for (name, ty) in &resolved {
        if Flavor::Marshal.is_builtin(&ty.name) {
            if ty.many {
                unit.line(format!(
                    "\t{name} = fields.List(fields.{}(), required=False, allow_none=True)",
                    ty.name
                ));
            } else {
                unit.line(format!(
                    "\t{name} = fields.{}(required=False, allow_none=True)",
                    ty.name
                ));
            }
        } else {
            let many = if ty.many { "True" } else { "False" };
            unit.line(format!(
                "\t{name} = fields.Nested({}Schema, many={many}, required=False, allow_none=True)",
                ty.name
            ));
        }
    }

    unit.render()
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::filter_properties;
    use crate::schema::PropertyDescriptor;
    use indexmap::IndexMap;
    use serde_json::json;

    fn properties(v: serde_json::Value) -> IndexMap<String, PropertyDescriptor> {
        serde_json::from_value(v).unwrap()
    }

    fn definitions(v: serde_json::Value) -> Definitions {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn scalar_and_list_fields() {
        let props = properties(json!({
            "id": {"type": "integer"},
            "tags": {"type": "array", "items": {"type": "string"}}
        }));
        let defs = Definitions::default();
        let filtered = filter_properties(&props, &defs);
        let text = emit_schema("ThingSchema", &filtered, &defs, "schemas", "marshmallow");
        assert_eq!(
            text,
            "from marshmallow import Schema, fields\n\
             from marshmallow import EXCLUDE\n\
             \n\
             class ThingSchema(Schema):\n\
             \tclass Meta:\n\
             \t\tunknown = EXCLUDE\n\
             \tid = fields.Int(required=False, allow_none=True)\n\
             \ttags = fields.List(fields.Str(), required=False, allow_none=True)\n"
        );
    }

    #[test]
    fn nested_reference_imports_companion_schema() {
        let defs = definitions(json!({
            "Address": {"properties": {"street": {"type": "string"}}}
        }));
        let props = properties(json!({
            "address": {"$ref": "#/definitions/Address"}
        }));
        let filtered = filter_properties(&props, &defs);
        let text = emit_schema("PersonSchema", &filtered, &defs, "schemas", "marshmallow");
        assert!(text.contains("from schemas.AddressSchema import AddressSchema\n"));
        assert!(text.contains(
            "\taddress = fields.Nested(AddressSchema, many=False, required=False, allow_none=True)\n"
        ));
    }

    #[test]
    fn array_of_references_is_nested_many() {
        let defs = definitions(json!({
            "Address": {"properties": {"street": {"type": "string"}}}
        }));
        let props = properties(json!({
            "addresses": {"type": "array", "items": {"$ref": "#/definitions/Address"}}
        }));
        let filtered = filter_properties(&props, &defs);
        let text = emit_schema("PersonSchema", &filtered, &defs, "schemas", "marshmallow");
        assert!(text.contains(
            "\taddresses = fields.Nested(AddressSchema, many=True, required=False, allow_none=True)\n"
        ));
    }

    #[test]
    fn alias_of_array_becomes_scalar_list_field() {
        let defs = definitions(json!({
            "Ids": {"type": "array", "items": {"type": "integer"}}
        }));
        let props = properties(json!({
            "ids": {"$ref": "#/definitions/Ids"}
        }));
        let filtered = filter_properties(&props, &defs);
        let text = emit_schema("ThingSchema", &filtered, &defs, "schemas", "marshmallow");
        assert!(text.contains(
            "\tids = fields.List(fields.Int(), required=False, allow_none=True)\n"
        ));
        // flattened all the way to a scalar, so no companion-schema import
        assert!(!text.contains("IdsSchema"));
    }

    #[test]
    fn custom_fields_namespace_only_moves_the_base_import() {
        let props = properties(json!({"id": {"type": "integer"}}));
        let defs = Definitions::default();
        let filtered = filter_properties(&props, &defs);
        let text = emit_schema("ThingSchema", &filtered, &defs, "schemas", "company.fields");
        assert!(text.starts_with("from company.fields import Schema, fields\n"));
        assert!(text.contains("from marshmallow import EXCLUDE\n"));
    }
}
