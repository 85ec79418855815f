//! Run orchestration.
//!
//! One generation run resolves the requested templates, invokes each one in
//! sequence, and commits every produced file through the output writer.
//! Templates execute one after another because they are not guaranteed to be
//! independent; a failing template aborts the run and files already written
//! by earlier templates stay on disk. There is no rollback.

use eyre::{Context, Result};
use wiregen_core::{GENERATED_FILE_HEADER, WriteDisposition};
use wiregen_model::ResolvedApplication;

use crate::{
    CodeGenOutWriter, GenerationContext, Template, TemplateOutputFile, WritePolicy,
    collect_all_templates, resolve::DEFAULT_MAX_TEMPLATE_DEPTH,
};

/// Configuration of one generation run.
pub struct CodeGenConfig<'a> {
    pub app: &'a ResolvedApplication,
    /// Root templates; dependencies are collected automatically.
    pub templates: Vec<Box<dyn Template>>,
    /// Bound on dependency expansion.
    pub max_dependency_depth: usize,
}

impl<'a> CodeGenConfig<'a> {
    pub fn new(app: &'a ResolvedApplication, templates: Vec<Box<dyn Template>>) -> Self {
        Self {
            app,
            templates,
            max_dependency_depth: DEFAULT_MAX_TEMPLATE_DEPTH,
        }
    }
}

/// What one run did, per output path.
///
/// This is the run's result object; the CLI renders it into the user-facing
/// report and nothing in the pipeline keeps state beyond it.
#[derive(Debug, Default)]
pub struct GenerationSummary {
    /// Files created or overwritten.
    pub written: Vec<String>,
    /// Files skipped because the on-disk content was already identical.
    pub up_to_date: Vec<String>,
    /// Files skipped because the developer removed the sentinel header.
    pub preserved: Vec<String>,
}

impl GenerationSummary {
    fn record(&mut self, path: &str, disposition: WriteDisposition) {
        let bucket = match disposition {
            WriteDisposition::Written => &mut self.written,
            WriteDisposition::UpToDate => &mut self.up_to_date,
            WriteDisposition::Preserved => &mut self.preserved,
        };
        bucket.push(path.to_string());
    }

    /// Total number of files the run produced, regardless of disposition.
    pub fn total(&self) -> usize {
        self.written.len() + self.up_to_date.len() + self.preserved.len()
    }
}

/// Run the template pipeline.
///
/// Resolves `config.templates` through [`collect_all_templates`], invokes
/// `generate` on each resolved template in order, then commits all output
/// files through `writer` under the customization-preserving policy.
pub fn generate_code(
    config: CodeGenConfig<'_>,
    writer: &mut dyn CodeGenOutWriter,
) -> Result<GenerationSummary> {
    let templates = collect_all_templates(config.templates, config.max_dependency_depth);
    let ctx = GenerationContext { app: config.app };

    let mut files: Vec<TemplateOutputFile> = Vec::new();
    for template in &templates {
        let generated = template
            .generate(&ctx)
            .wrap_err_with(|| format!("template '{}' failed to generate", template.name()))?;
        files.extend(generated);
    }

    let mut summary = GenerationSummary::default();
    for file in &files {
        let disposition = commit(file, writer)
            .wrap_err_with(|| format!("failed to write '{}'", file.path))?;
        summary.record(&file.path, disposition);
    }

    Ok(summary)
}

/// Commit one output file under its write policy.
fn commit(
    file: &TemplateOutputFile,
    writer: &mut dyn CodeGenOutWriter,
) -> Result<WriteDisposition> {
    match file.policy {
        WritePolicy::Always => {
            writer.write_file(&file.path, &file.content)?;
            Ok(WriteDisposition::Written)
        }
        WritePolicy::ProtectCustomizations => {
            let full = format!("{}{}", GENERATED_FILE_HEADER, file.content);
            match writer.existing_content(&file.path)? {
                None => {
                    writer.write_file(&file.path, &full)?;
                    Ok(WriteDisposition::Written)
                }
                Some(existing) if existing == full => Ok(WriteDisposition::UpToDate),
                Some(existing) if existing.starts_with(GENERATED_FILE_HEADER) => {
                    writer.write_file(&file.path, &full)?;
                    Ok(WriteDisposition::Written)
                }
                Some(_) => Ok(WriteDisposition::Preserved),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use eyre::eyre;
    use wiregen_model::SchemaDocument;

    use super::*;
    use crate::MemoryWriter;

    fn test_app() -> ResolvedApplication {
        serde_json::from_value(serde_json::json!({
            "apiName": "test",
            "schema": SchemaDocument::default(),
            "operations": [
                { "name": "MyReviews", "operationType": "query", "content": "query MyReviews { reviews { id } }" },
                { "name": "CreatePet", "operationType": "mutation", "content": "mutation CreatePet { postPets { name } }" },
                { "name": "NewPets", "operationType": "subscription", "content": "subscription NewPets { newPets { name } }" }
            ]
        }))
        .unwrap()
    }

    /// Emits one plain file listing all operation names.
    struct OperationList;

    impl Template for OperationList {
        fn name(&self) -> String {
            "operation-list".to_string()
        }

        fn generate(&self, ctx: &GenerationContext<'_>) -> Result<Vec<TemplateOutputFile>> {
            let content = ctx
                .app
                .operations
                .iter()
                .map(|op| op.name.as_str())
                .collect::<Vec<_>>()
                .join("+");
            Ok(vec![TemplateOutputFile::always("testFile.txt", content)])
        }
    }

    /// Emits one protected file whose content tracks the model.
    struct ProtectedFile;

    impl Template for ProtectedFile {
        fn name(&self) -> String {
            "protected-file".to_string()
        }

        fn generate(&self, ctx: &GenerationContext<'_>) -> Result<Vec<TemplateOutputFile>> {
            let content = format!("export const api = '{}';\n", ctx.app.api_name);
            Ok(vec![TemplateOutputFile::protected("api.ts", content)])
        }
    }

    struct FailingTemplate;

    impl Template for FailingTemplate {
        fn name(&self) -> String {
            "failing".to_string()
        }

        fn generate(&self, _ctx: &GenerationContext<'_>) -> Result<Vec<TemplateOutputFile>> {
            Err(eyre!("boom"))
        }
    }

    #[test]
    fn test_generate_writes_template_output() {
        let app = test_app();
        let mut writer = MemoryWriter::new();

        let summary = generate_code(
            CodeGenConfig::new(&app, vec![Box::new(OperationList)]),
            &mut writer,
        )
        .unwrap();

        assert_eq!(summary.written, ["testFile.txt"]);
        assert_eq!(
            writer.content("testFile.txt"),
            Some("MyReviews+CreatePet+NewPets")
        );
    }

    #[test]
    fn test_duplicate_templates_generate_once() {
        let app = test_app();
        let mut writer = MemoryWriter::new();

        let summary = generate_code(
            CodeGenConfig::new(&app, vec![Box::new(OperationList), Box::new(OperationList)]),
            &mut writer,
        )
        .unwrap();

        assert_eq!(summary.total(), 1);
    }

    #[test]
    fn test_two_runs_are_deterministic() {
        let app = test_app();
        let templates = || -> Vec<Box<dyn Template>> {
            vec![Box::new(OperationList), Box::new(ProtectedFile)]
        };

        let mut first = MemoryWriter::new();
        generate_code(CodeGenConfig::new(&app, templates()), &mut first).unwrap();
        let mut second = MemoryWriter::new();
        generate_code(CodeGenConfig::new(&app, templates()), &mut second).unwrap();

        assert_eq!(first.files(), second.files());
    }

    #[test]
    fn test_second_run_is_idempotent() {
        let app = test_app();
        let mut writer = MemoryWriter::new();

        generate_code(
            CodeGenConfig::new(&app, vec![Box::new(ProtectedFile)]),
            &mut writer,
        )
        .unwrap();
        let after_first = writer.files().clone();

        let summary = generate_code(
            CodeGenConfig::new(&app, vec![Box::new(ProtectedFile)]),
            &mut writer,
        )
        .unwrap();

        assert_eq!(writer.files(), &after_first);
        assert!(summary.written.is_empty());
        assert_eq!(summary.up_to_date, ["api.ts"]);
    }

    #[test]
    fn test_protected_file_gets_header_on_first_write() {
        let app = test_app();
        let mut writer = MemoryWriter::new();

        generate_code(
            CodeGenConfig::new(&app, vec![Box::new(ProtectedFile)]),
            &mut writer,
        )
        .unwrap();

        let content = writer.content("api.ts").unwrap();
        assert!(content.starts_with(GENERATED_FILE_HEADER));
        assert!(content.ends_with("export const api = 'test';\n"));
    }

    #[test]
    fn test_customized_file_is_never_overwritten() {
        let app = test_app();
        let mut writer = MemoryWriter::new();
        writer.insert("api.ts", "// my own version\nexport const api = 'mine';\n");

        let summary = generate_code(
            CodeGenConfig::new(&app, vec![Box::new(ProtectedFile)]),
            &mut writer,
        )
        .unwrap();

        assert_eq!(summary.preserved, ["api.ts"]);
        assert_eq!(
            writer.content("api.ts"),
            Some("// my own version\nexport const api = 'mine';\n")
        );
    }

    #[test]
    fn test_stale_generated_file_is_refreshed() {
        let app = test_app();
        let mut writer = MemoryWriter::new();
        writer.insert(
            "api.ts",
            format!("{}export const api = 'old';\n", GENERATED_FILE_HEADER),
        );

        let summary = generate_code(
            CodeGenConfig::new(&app, vec![Box::new(ProtectedFile)]),
            &mut writer,
        )
        .unwrap();

        assert_eq!(summary.written, ["api.ts"]);
        assert!(writer.content("api.ts").unwrap().contains("'test'"));
    }

    #[test]
    fn test_failing_template_aborts_the_run() {
        let app = test_app();
        let mut writer = MemoryWriter::new();

        let result = generate_code(
            CodeGenConfig::new(&app, vec![Box::new(OperationList), Box::new(FailingTemplate)]),
            &mut writer,
        );

        assert!(result.is_err());
        // All generate() calls complete before the commit loop starts, so a
        // generation failure leaves the output untouched.
        assert!(writer.files().is_empty());
    }
}
