//! Model emitter: a plain data-holder class, one required constructor
//! parameter per surviving property.

use super::{PropertySet, SourceUnit};
use crate::resolve::{Flavor, resolve};
use crate::schema::Definitions;

pub fn emit_model(
    model_name: &str,
    properties: &PropertySet<'_>,
    definitions: &Definitions,
    model_namespace: &str,
) -> String {
    let mut unit = SourceUnit::default();

    let resolved: Vec<(&str, String)> = properties
        .iter()
        .map(|(name, descriptor)| (*name, resolve(descriptor, definitions, Flavor::Model).name))
        .collect();

    for (_, ty) in &resolved {
        if !Flavor::Model.is_builtin(ty) {
            unit.import(format!("{model_namespace}.{ty}"), ty.clone());
        }
    }

    unit.line(format!("class {model_name}:"));
    let mut signature = String::from("\tdef __init__(self");
    for (name, ty) in &resolved {
        signature.push_str(&format!(", {name}: {ty}"));
    }
    signature.push_str("):");
    unit.line(signature);
    for (name, _) in &resolved {
        unit.line(format!("\t\tself.{name} = {name}"));
    }

    unit.render()
}

// ------------------------------- Tests ------------------------------------ //
