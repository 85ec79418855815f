use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use wiregen_config::WiregenToml;
use wiregen_operations::{GenerateConfig, generate_operations};

use super::{UnwrapOrExit, build_operations, load_model};
use crate::commands::generate::print_operations_report;

#[derive(Args)]
pub struct OperationsCommand {
    /// Path to wiregen.toml (defaults to ./wiregen.toml)
    #[arg(short, long, default_value = "wiregen.toml")]
    pub config: PathBuf,
}

impl OperationsCommand {
    /// Run only the operation-stub pipeline
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
        let (operations, options) = build_operations(&app, config);

        let report = generate_operations(&GenerateConfig {
            app: &app,
            project_dir,
            operations,
            options,
        })
        .wrap_err("operation generation failed")?;

        println!("{}", config.project.name);
        print_operations_report(&report);

        Ok(())
    }
}
