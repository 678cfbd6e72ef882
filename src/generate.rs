//! Driver: walk the document's definitions and produce generated units.

use colored::Colorize;
use thiserror::Error;

use crate::emit::{filter_properties, model::emit_model, schema::emit_schema};
use crate::resolve::{Flavor, resolve};
use crate::schema::{Definitions, PropertyDescriptor, SchemaDocument, Shape};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Missing definitions in json schema")]
    MissingDefinitions,
    #[error("definition `{definition}`, property `{property}`: `$ref` to unknown definition `{target}`")]
    DanglingReference {
        definition: String,
        property: String,
        target: String,
    },
    #[error("definition `{definition}`, property `{property}`: type cannot be resolved, property would be dropped")]
    UnresolvableProperty { definition: String, property: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    Model,
    Schema,
}

/// One output artifact. `name` is also the file stem the CLI writes to.
#[derive(Debug, Clone)]
pub struct GeneratedUnit {
    pub name: String,
    pub kind: UnitKind,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct Options {
    pub model_namespace: String,
    pub schema_namespace: String,
    pub fields_namespace: String,
    /// Fail on dangling `$ref`s and silently-dropped properties instead of
    /// mirroring them into the output.
    pub strict: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            model_namespace: "models".to_string(),
            schema_namespace: "schemas".to_string(),
            fields_namespace: "marshmallow".to_string(),
            strict: false,
        }
    }
}

/// One pass over the document: for every record definition, a model unit
/// named `<name>` and a schema unit named `<name>Schema`, in document order.
/// Scalar-alias definitions produce nothing.
pub fn generate(
    document: &SchemaDocument,
    options: &Options,
) -> Result<Vec<GeneratedUnit>, GenerateError> {
    let definitions = document
        .definitions
        .as_ref()
        .ok_or(GenerateError::MissingDefinitions)?;

    if options.strict {
        check_strict(definitions)?;
    }

    let mut units = Vec::new();
    for (name, definition) in definitions {
        println!("{} {name}", "Generating".green());
        let Some(properties) = definition.properties.as_ref() else {
            continue;
        };

        // one filtered view, shared by both emitters
        let filtered = filter_properties(properties, definitions);

        units.push(GeneratedUnit {
            name: name.clone(),
            kind: UnitKind::Model,
            text: emit_model(name, &filtered, definitions, &options.model_namespace),
        });
        let schema_name = format!("{name}Schema");
        let text = emit_schema(
            &schema_name,
            &filtered,
            definitions,
            &options.schema_namespace,
            &options.fields_namespace,
        );
        units.push(GeneratedUnit { name: schema_name, kind: UnitKind::Schema, text });
    }
    Ok(units)
}

fn check_strict(definitions: &Definitions) -> Result<(), GenerateError> {
    for (definition_name, definition) in definitions {
        let Some(properties) = definition.properties.as_ref() else {
            continue;
        };
        for (property_name, descriptor) in properties {
            if property_name == "__typename" {
                continue;
            }
            check_references(definition_name, property_name, descriptor, definitions)?;
            if resolve(descriptor, definitions, Flavor::Model).is_empty() {
                return Err(GenerateError::UnresolvableProperty {
                    definition: definition_name.clone(),
                    property: property_name.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Walks every `$ref` reachable from a descriptor (top level, `items`,
/// `anyOf` branches, and through alias targets).
fn check_references(
    definition: &str,
    property: &str,
    descriptor: &PropertyDescriptor,
    definitions: &Definitions,
) -> Result<(), GenerateError> {
    match descriptor.shape() {
        Shape::Reference(target) => {
            let Some(next) = definitions.get(target) else {
                return Err(GenerateError::DanglingReference {
                    definition: definition.to_string(),
                    property: property.to_string(),
                    target: target.to_string(),
                });
            };
            if !next.is_record() {
                check_references(definition, property, &next.descriptor, definitions)?;
            }
        }
        Shape::Array { items: Some(items) } => {
            check_references(definition, property, items, definitions)?;
        }
        Shape::Union(branches) => {
            for branch in branches {
                check_references(definition, property, branch, definitions)?;
            }
        }
        _ => {}
    }
    Ok(())
}

// ------------------------------- Tests ------------------------------------ //
