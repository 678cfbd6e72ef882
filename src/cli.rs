//! Minimal CLI: json schema in → model/schema .py files out.
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crate::generate::{Options, UnitKind, generate};
use crate::schema::SchemaDocument;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate plain Python models and marshmallow schemas from the named
/// definitions of a json schema
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    /// path to the json schema file
    json_schema_path: PathBuf,

    /// output folder for the generated models
    model_output_folder: PathBuf,

    /// output folder for the generated schemas
    schema_output_folder: PathBuf,

    /// namespace for the models
    #[arg(long, default_value = "models")]
    model_namespace: String,

    /// namespace for the schemas
    #[arg(long, default_value = "schemas")]
    schema_namespace: String,

    /// namespace for the fields
    #[arg(long, default_value = "marshmallow")]
    fields_namespace: String,

    /// fail on dangling `$ref`s and properties that would be silently dropped
    #[arg(long, default_value_t = false)]
    strict: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let source_path_str = self.json_schema_path.to_string_lossy().to_string();
        let source = std::fs::read_to_string(&self.json_schema_path)
            .with_context(|| format!("Failed to read schema file ({source_path_str})"))?;

        // serde_path_to_error names the json path of whatever fails to parse
        let mut deserializer = serde_json::Deserializer::from_str(&source);
        let document: SchemaDocument = serde_path_to_error::deserialize(&mut deserializer)
            .with_context(|| format!("Failed to parse JSON schema file ({source_path_str})"))?;

        let options = Options {
            model_namespace: self.model_namespace.clone(),
            schema_namespace: self.schema_namespace.clone(),
            fields_namespace: self.fields_namespace.clone(),
            strict: self.strict,
        };
        let units = generate(&document, &options)?;

        std::fs::create_dir_all(&self.model_output_folder)
            .with_context(|| format!("Failed to create {}", self.model_output_folder.display()))?;
        std::fs::create_dir_all(&self.schema_output_folder)
            .with_context(|| format!("Failed to create {}", self.schema_output_folder.display()))?;

        for unit in &units {
            let folder = match unit.kind {
                UnitKind::Model => &self.model_output_folder,
                UnitKind::Schema => &self.schema_output_folder,
            };
            let out_path = folder.join(format!("{}.py", unit.name));
            std::fs::write(&out_path, &unit.text)
                .with_context(|| format!("Failed to write {}", out_path.display()))?;
        }
        Ok(())
    }
}
