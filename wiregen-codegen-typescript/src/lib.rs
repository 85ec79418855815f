//! TypeScript templates for the wiregen code generator.
//!
//! Each template consumes the resolved application model through the shared
//! pipeline contract and renders one TypeScript source file. Model templates
//! render operation JSON schemas through the schema visitor; everything else
//! is assembled with the shared [`CodeBuilder`](wiregen_codegen::CodeBuilder).

mod client;
mod helpers;
mod hooks;
mod interface;
mod models;

pub use client::TypeScriptClient;
pub use helpers::{input_typename, internal_input_typename, response_typename};
pub use hooks::TypeScriptHooks;
pub use interface::json_schema_to_interface;
pub use models::{
    BaseTypeScriptDataModel, TypeScriptInputModels, TypeScriptInternalInputModels,
    TypeScriptResponseModels,
};

use wiregen_codegen::Template;

/// The default template set: client, hooks, the server-side input models,
/// and everything they pull in.
pub fn all_templates() -> Vec<Box<dyn Template>> {
    vec![
        Box::new(TypeScriptClient),
        Box::new(TypeScriptHooks),
        Box::new(TypeScriptInternalInputModels),
    ]
}

#[cfg(test)]
mod tests {
    use wiregen_codegen::{
        CodeGenConfig, DEFAULT_MAX_TEMPLATE_DEPTH, FileSystemWriter, collect_all_templates,
        generate_code,
    };
    use wiregen_core::GENERATED_FILE_HEADER;
    use wiregen_model::ResolvedApplication;

    use super::*;

    fn app() -> ResolvedApplication {
        serde_json::from_value(serde_json::json!({
            "apiName": "pets",
            "schema": { "types": [] },
            "authentication": { "roles": ["admin"] },
            "operations": [
                {
                    "name": "MyReviews",
                    "operationType": "query",
                    "content": "query MyReviews { reviews { id } }",
                    "variablesSchema": {
                        "type": "object",
                        "properties": { "limit": { "type": "integer" } }
                    }
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_default_set_resolves_without_duplicates() {
        let resolved = collect_all_templates(all_templates(), DEFAULT_MAX_TEMPLATE_DEPTH);
        let names: Vec<String> = resolved.iter().map(|t| t.name()).collect();
        assert_eq!(
            names,
            [
                "typescript-client",
                "typescript-hooks",
                "typescript-internal-input-models",
                "typescript-input-models",
                "typescript-response-models",
                "typescript-base-data-model",
            ]
        );
    }

    #[test]
    fn test_full_pipeline_is_idempotent_on_disk() {
        let app = app();
        let temp = tempfile::TempDir::new().unwrap();

        let mut writer = FileSystemWriter::new(temp.path());
        let first = generate_code(CodeGenConfig::new(&app, all_templates()), &mut writer).unwrap();
        assert!(first.up_to_date.is_empty());
        assert!(temp.path().join("models/base.ts").exists());
        assert!(temp.path().join("client.ts").exists());

        let mut writer = FileSystemWriter::new(temp.path());
        let second = generate_code(CodeGenConfig::new(&app, all_templates()), &mut writer).unwrap();
        // client.ts carries WritePolicy::Always and is always rewritten;
        // every protected file is recognized as up to date.
        assert_eq!(second.written, ["client.ts"]);
        assert!(second.preserved.is_empty());
    }

    #[test]
    fn test_customized_hooks_survive_regeneration() {
        let app = app();
        let temp = tempfile::TempDir::new().unwrap();

        let mut writer = FileSystemWriter::new(temp.path());
        generate_code(CodeGenConfig::new(&app, all_templates()), &mut writer).unwrap();

        let hooks_path = temp.path().join("hooks.ts");
        let generated = std::fs::read_to_string(&hooks_path).unwrap();
        let customized = generated.replace(GENERATED_FILE_HEADER, "// customized\n");
        std::fs::write(&hooks_path, &customized).unwrap();

        let mut writer = FileSystemWriter::new(temp.path());
        let summary =
            generate_code(CodeGenConfig::new(&app, all_templates()), &mut writer).unwrap();
        assert!(summary.preserved.contains(&"hooks.ts".to_string()));
        assert_eq!(std::fs::read_to_string(&hooks_path).unwrap(), customized);
    }
}
