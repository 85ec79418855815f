// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! `wiregen.toml` parsing and validation.
//!
//! The project file points at the resolved-model artifact, selects the
//! template sets to run, and carries the per-namespace options of the
//! operation-stub generator. Parsing and validation failures surface as
//! miette diagnostics against the original TOML source.

mod error;
mod file;
mod validate;

use std::collections::HashMap;
use std::path::PathBuf;

pub use error::{Error, Result, SourceContext};
pub use file::WiregenToml;
use serde::Deserialize;

/// Template sets wiregen ships with.
pub const VALID_TEMPLATES: [&str; 1] = ["typescript"];

/// Root schema for wiregen.toml
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WiregenConfig {
    /// Project metadata and artifact locations
    pub project: ProjectConfig,

    /// Template pipeline settings
    #[serde(default)]
    pub codegen: CodegenConfig,

    /// Operation-stub generator settings
    #[serde(default)]
    pub operations: OperationsConfig,
}

/// `[project]` section.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    pub name: String,

    /// Path to the resolved application model artifact (JSON).
    pub model: PathBuf,

    /// Output directory of the template pipeline.
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("generated")
}

/// `[codegen]` section.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodegenConfig {
    /// Template sets to run.
    #[serde(default = "default_templates")]
    pub templates: Vec<String>,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            templates: default_templates(),
        }
    }
}

fn default_templates() -> Vec<String> {
    vec!["typescript".to_string()]
}

/// `[operations]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OperationsConfig {
    /// Subdirectory under `operations/` the stubs are placed in.
    #[serde(default)]
    pub base_path: String,

    /// Only generate stubs for these namespaces; unset keeps all of them.
    #[serde(default)]
    pub include_namespaces: Option<Vec<String>>,

    /// Namespaces to skip.
    #[serde(default)]
    pub exclude_namespaces: Vec<String>,

    /// Per-namespace selection options, keyed by namespace
    /// (`[operations.namespaces.spacex]`).
    #[serde(default)]
    pub namespaces: HashMap<String, NamespaceOptions>,
}

/// Selection options of one namespace.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamespaceOptions {
    /// Maximum selection-set nesting.
    #[serde(default)]
    pub depth_limit: Option<usize>,

    /// Circular re-entry bound for named types.
    #[serde(default)]
    pub circular_reference_depth: Option<usize>,

    /// Allow-list of argument names turned into variables.
    #[serde(default)]
    pub arg_names: Option<Vec<String>>,

    /// Field names never selected.
    #[serde(default)]
    pub ignore: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_parses_with_defaults() {
        let config: WiregenConfig = toml::from_str(
            r#"
            [project]
            name = "pets"
            model = "generated/app.model.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.project.name, "pets");
        assert_eq!(config.project.out_dir, PathBuf::from("generated"));
        assert_eq!(config.codegen.templates, ["typescript"]);
        assert!(config.operations.namespaces.is_empty());
        assert!(config.operations.include_namespaces.is_none());
    }

    #[test]
    fn test_namespace_options_parse() {
        let config: WiregenConfig = toml::from_str(
            r#"
            [project]
            name = "pets"
            model = "model.json"

            [operations]
            base_path = "main"
            exclude_namespaces = ["internal"]

            [operations.namespaces.spacex]
            depth_limit = 3
            circular_reference_depth = 2
            arg_names = ["find", "limit"]
            ignore = ["launch_site"]
            "#,
        )
        .unwrap();

        assert_eq!(config.operations.base_path, "main");
        assert_eq!(config.operations.exclude_namespaces, ["internal"]);
        let spacex = &config.operations.namespaces["spacex"];
        assert_eq!(spacex.depth_limit, Some(3));
        assert_eq!(spacex.circular_reference_depth, Some(2));
        assert_eq!(spacex.arg_names.as_deref(), Some(&["find".to_string(), "limit".to_string()][..]));
        assert_eq!(spacex.ignore, ["launch_site"]);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result: std::result::Result<WiregenConfig, _> = toml::from_str(
            r#"
            [project]
            name = "pets"
            model = "model.json"
            banana = true
            "#,
        );
        assert!(result.is_err());
    }
}
