use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use wiregen_codegen::{
    CodeGenConfig, DEFAULT_MAX_TEMPLATE_DEPTH, FileSystemWriter, GenerationContext,
    GenerationSummary, Template, collect_all_templates, generate_code,
};
use wiregen_config::{WiregenConfig, WiregenToml};
use wiregen_model::{ResolvedApplication, SchemaIndex};
use wiregen_operations::{
    GenerateConfig, OperationsReport, build_operation_document, generate_operations, stub_path,
};

use super::{UnwrapOrExit, build_operations, load_model};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to wiregen.toml (defaults to ./wiregen.toml)
    #[arg(short, long, default_value = "wiregen.toml")]
    pub config: PathBuf,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let file = WiregenToml::open(&self.config).unwrap_or_exit();
        let config = file.config();
        let project_dir = self
            .config
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .to_path_buf();

        let app = load_model(&project_dir.join(&config.project.model))?;
        let templates = template_sets(&config.codegen.templates);

        if self.dry_run {
            return self.run_preview(&app, templates, config);
        }

        let out_dir = project_dir.join(&config.project.out_dir);
        let mut writer = FileSystemWriter::new(&out_dir);
        let summary = generate_code(CodeGenConfig::new(&app, templates), &mut writer)
            .wrap_err("code generation failed")?;

        let (operations, options) = build_operations(&app, config);
        let report = generate_operations(&GenerateConfig {
            app: &app,
            project_dir,
            operations,
            options,
        })
        .wrap_err("operation generation failed")?;

        println!("{} ({} operations)", config.project.name, app.operations.len());
        println!();
        print_summary(&summary, &out_dir);
        print_operations_report(&report);

        Ok(())
    }

    fn run_preview(
        &self,
        app: &ResolvedApplication,
        templates: Vec<Box<dyn Template>>,
        config: &WiregenConfig,
    ) -> Result<()> {
        let resolved = collect_all_templates(templates, DEFAULT_MAX_TEMPLATE_DEPTH);
        let ctx = GenerationContext { app };

        let mut count = 0;
        for template in &resolved {
            for file in template.generate(&ctx)? {
                println!("── {} ──", file.path);
                println!("{}", file.content);
                count += 1;
            }
        }

        let (operations, options) = build_operations(app, config);
        let index = SchemaIndex::new(&app.schema);
        for field in operations.root_fields() {
            let selection = options
                .get(&field.namespace)
                .cloned()
                .unwrap_or_default();
            let document = build_operation_document(&index, field, &selection)?;
            println!("── operations/{} ──", stub_path(operations.base_path(), field));
            println!("{}", document);
            count += 1;
        }

        println!("── Summary ──");
        println!("{} files would be generated", count);

        Ok(())
    }
}

/// Resolve configured template set names into root templates.
pub(crate) fn template_sets(names: &[String]) -> Vec<Box<dyn Template>> {
    let mut templates: Vec<Box<dyn Template>> = Vec::new();
    for name in names {
        // Config validation rejects anything else up front.
        if name == "typescript" {
            templates.extend(wiregen_codegen_typescript::all_templates());
        }
    }
    templates
}

pub(crate) fn print_summary(summary: &GenerationSummary, out_dir: &Path) {
    println!("Generated: {}/", out_dir.display());
    println!("  {} written, {} up to date", summary.written.len(), summary.up_to_date.len());
    if !summary.preserved.is_empty() {
        println!();
        println!("Customized files left untouched:");
        for path in &summary.preserved {
            println!("  = {}", path);
        }
    }
}

pub(crate) fn print_operations_report(report: &OperationsReport) {
    println!();
    println!(
        "Operations: {} written, {} up to date",
        report.written.len(),
        report.up_to_date.len()
    );
    if !report.written.is_empty() {
        for path in &report.written {
            println!("  + operations/{}", path);
        }
    }
    if !report.removed.is_empty() {
        println!();
        println!("Removed stale operations:");
        for path in &report.removed {
            println!("  - operations/{}", path);
        }
    }
    if !report.preserved.is_empty() {
        println!();
        println!("Customized operations left untouched:");
        for path in &report.preserved {
            println!("  = operations/{}", path);
        }
    }
}
