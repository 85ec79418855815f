//! Stub generation and stale-artifact reconciliation.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use wiregen_core::{GENERATED_OPERATION_HEADER, remove_empty_dirs, write_file};
use wiregen_model::{ResolvedApplication, SchemaIndex};

use crate::{
    FieldConfig, GenerationManifest, MANIFEST_FILE_NAME, OperationsGenerationConfig,
    SelectionOptions, build_operation_document,
};

/// Configuration of one operation-generation run.
pub struct GenerateConfig<'a> {
    pub app: &'a ResolvedApplication,
    /// Project root; stubs live under `<project_dir>/operations`.
    pub project_dir: PathBuf,
    /// Selected root fields and the base path under `operations/`.
    pub operations: OperationsGenerationConfig,
    /// Per-namespace selection options; namespaces without an entry use the
    /// defaults.
    pub options: HashMap<String, SelectionOptions>,
}

impl<'a> GenerateConfig<'a> {
    fn options_for(&self, namespace: &str) -> SelectionOptions {
        self.options.get(namespace).cloned().unwrap_or_default()
    }
}

/// What one run did, per stub path (relative to the operations root).
#[derive(Debug, Default)]
pub struct OperationsReport {
    /// Stubs created or refreshed.
    pub written: Vec<String>,
    /// Stubs whose on-disk content was already identical.
    pub up_to_date: Vec<String>,
    /// Stubs the developer customized; left untouched.
    pub preserved: Vec<String>,
    /// Stale stubs from the previous run that were deleted.
    pub removed: Vec<String>,
}

/// Run the operation-stub pipeline.
///
/// Synthesizes one stub per selected root field, writes it under the
/// idempotent/customization-preserving discipline, reconciles the tree
/// against the previous run's manifest, and persists the new manifest.
pub fn generate_operations(config: &GenerateConfig<'_>) -> Result<OperationsReport> {
    let operations_root = config.project_dir.join("operations");
    let manifest_path = operations_root.join(MANIFEST_FILE_NAME);
    let previous = GenerationManifest::load(&manifest_path);

    let index = SchemaIndex::new(&config.app.schema);
    let mut report = OperationsReport::default();
    let mut generated: Vec<String> = Vec::new();

    for field in config.operations.root_fields() {
        let options = config.options_for(&field.namespace);
        let document = build_operation_document(&index, field, &options).wrap_err_with(|| {
            format!("failed to build operation for '{}'", field.root_field_name)
        })?;
        let content = format!("{}{}", GENERATED_OPERATION_HEADER, document);

        let relative = stub_path(config.operations.base_path(), field);
        let full = operations_root.join(&relative);
        generated.push(relative.clone());

        if full.exists() {
            let existing = std::fs::read_to_string(&full)?;
            if existing == content {
                report.up_to_date.push(relative);
                continue;
            }
            if !existing.starts_with(GENERATED_OPERATION_HEADER) {
                report.preserved.push(relative);
                continue;
            }
        }
        write_file(&full, &content)?;
        report.written.push(relative);
    }

    collect_stale(&previous, &generated, &operations_root, &mut report)?;

    GenerationManifest::new(generated)
        .store(&manifest_path)
        .wrap_err("failed to persist the generation manifest")?;

    Ok(report)
}

/// Delete stubs the previous run produced that this run no longer does.
///
/// A stale path is only deleted while it still exists and still starts with
/// the sentinel header; anything else belongs to the developer now.
/// Directories the deletions empty out are pruned up to the operations
/// root.
fn collect_stale(
    previous: &GenerationManifest,
    generated: &[String],
    operations_root: &Path,
    report: &mut OperationsReport,
) -> Result<()> {
    let current: HashSet<&str> = generated.iter().map(String::as_str).collect();
    let mut parents: BTreeSet<PathBuf> = BTreeSet::new();

    for old in &previous.files {
        if current.contains(old.as_str()) {
            continue;
        }
        let full = operations_root.join(old);
        if !full.exists() {
            continue;
        }
        let content = std::fs::read_to_string(&full)?;
        if !content.starts_with(GENERATED_OPERATION_HEADER) {
            continue;
        }
        std::fs::remove_file(&full)?;
        report.removed.push(old.clone());
        if let Some(parent) = full.parent() {
            parents.insert(parent.to_path_buf());
        }
    }

    for dir in parents {
        remove_empty_dirs(&dir, operations_root)?;
    }

    Ok(())
}

/// Stub path for `field`, relative to the operations root.
///
/// Empty base-path and namespace segments are dropped rather than producing
/// empty directories.
pub fn stub_path(base_path: &str, field: &FieldConfig) -> String {
    let file_name = field.file_name();
    [base_path, field.namespace.as_str(), file_name.as_str()]
        .iter()
        .filter(|segment| !segment.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use wiregen_model::OperationType;

    use super::*;

    fn app(field_names: &[&str]) -> ResolvedApplication {
        let fields: Vec<serde_json::Value> = field_names
            .iter()
            .map(|name| {
                serde_json::json!({
                    "name": name,
                    "arguments": [],
                    "fieldType": { "kind": "named", "of": "String" }
                })
            })
            .collect();
        serde_json::from_value(serde_json::json!({
            "apiName": "app",
            "schema": {
                "types": [
                    { "kind": "object", "name": "Query", "fields": fields }
                ]
            }
        }))
        .unwrap()
    }

    fn run(
        app: &ResolvedApplication,
        project_dir: &Path,
        keep: impl Fn(&FieldConfig) -> bool,
    ) -> OperationsReport {
        let mut operations = OperationsGenerationConfig::new(&app.schema);
        operations.filter_root_fields(keep);
        let config = GenerateConfig {
            app,
            project_dir: project_dir.to_path_buf(),
            operations,
            options: HashMap::new(),
        };
        generate_operations(&config).unwrap()
    }

    #[test]
    fn test_first_run_writes_stubs_and_manifest() {
        let app = app(&["ns_fieldA", "ns_fieldB"]);
        let temp = TempDir::new().unwrap();

        let report = run(&app, temp.path(), |_| true);

        assert_eq!(report.written, ["ns/FieldA.graphql", "ns/FieldB.graphql"]);
        let stub = temp.path().join("operations/ns/FieldA.graphql");
        let content = std::fs::read_to_string(stub).unwrap();
        assert!(content.starts_with(GENERATED_OPERATION_HEADER));
        assert!(content.contains("query FieldA {\n  ns_fieldA\n}\n"));

        let manifest =
            GenerationManifest::load(&temp.path().join("operations").join(MANIFEST_FILE_NAME));
        assert_eq!(manifest.files, ["ns/FieldA.graphql", "ns/FieldB.graphql"]);
    }

    #[test]
    fn test_second_run_is_idempotent() {
        let app = app(&["ns_fieldA"]);
        let temp = TempDir::new().unwrap();

        run(&app, temp.path(), |_| true);
        let report = run(&app, temp.path(), |_| true);

        assert!(report.written.is_empty());
        assert_eq!(report.up_to_date, ["ns/FieldA.graphql"]);
    }

    #[test]
    fn test_stale_stub_is_deleted_and_directory_pruned() {
        let app = app(&["ns_fieldA", "other_fieldC"]);
        let temp = TempDir::new().unwrap();

        run(&app, temp.path(), |_| true);
        assert!(temp.path().join("operations/other/FieldC.graphql").exists());

        let report = run(&app, temp.path(), |field| field.namespace == "ns");

        assert_eq!(report.removed, ["other/FieldC.graphql"]);
        assert!(!temp.path().join("operations/other").exists());
        assert!(temp.path().join("operations/ns/FieldA.graphql").exists());

        let manifest =
            GenerationManifest::load(&temp.path().join("operations").join(MANIFEST_FILE_NAME));
        assert_eq!(manifest.files, ["ns/FieldA.graphql"]);
    }

    #[test]
    fn test_customized_stale_stub_survives_reconciliation() {
        let app = app(&["ns_fieldA", "ns_fieldB"]);
        let temp = TempDir::new().unwrap();

        run(&app, temp.path(), |_| true);
        let stub = temp.path().join("operations/ns/FieldB.graphql");
        std::fs::write(&stub, "query FieldB {\n  ns_fieldB\n}\n").unwrap();

        let report = run(&app, temp.path(), |field| field.root_field_name == "ns_fieldA");

        assert!(report.removed.is_empty());
        assert!(stub.exists());
    }

    #[test]
    fn test_customized_stub_is_not_rewritten() {
        let app = app(&["ns_fieldA"]);
        let temp = TempDir::new().unwrap();

        run(&app, temp.path(), |_| true);
        let stub = temp.path().join("operations/ns/FieldA.graphql");
        let customized = "query FieldA {\n  ns_fieldA\n}\n";
        std::fs::write(&stub, customized).unwrap();

        let report = run(&app, temp.path(), |_| true);

        assert_eq!(report.preserved, ["ns/FieldA.graphql"]);
        assert_eq!(std::fs::read_to_string(&stub).unwrap(), customized);
    }

    #[test]
    fn test_manually_deleted_stale_stub_is_skipped() {
        let app = app(&["ns_fieldA", "ns_fieldB"]);
        let temp = TempDir::new().unwrap();

        run(&app, temp.path(), |_| true);
        std::fs::remove_file(temp.path().join("operations/ns/FieldB.graphql")).unwrap();

        let report = run(&app, temp.path(), |field| field.root_field_name == "ns_fieldA");

        assert!(report.removed.is_empty());
    }

    #[test]
    fn test_empty_namespace_lands_in_operations_root() {
        let app = app(&["me"]);
        let temp = TempDir::new().unwrap();

        let report = run(&app, temp.path(), |_| true);

        assert_eq!(report.written, ["Me.graphql"]);
        assert!(temp.path().join("operations/Me.graphql").exists());
    }

    #[test]
    fn test_base_path_prefixes_stub_paths() {
        let app = app(&["ns_fieldA"]);
        let temp = TempDir::new().unwrap();

        let mut operations = OperationsGenerationConfig::new(&app.schema);
        operations.set_base_path("main");
        let config = GenerateConfig {
            app: &app,
            project_dir: temp.path().to_path_buf(),
            operations,
            options: HashMap::new(),
        };
        let report = generate_operations(&config).unwrap();

        assert_eq!(report.written, ["main/ns/FieldA.graphql"]);
        assert!(temp.path().join("operations/main/ns/FieldA.graphql").exists());
    }
}
