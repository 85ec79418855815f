use std::path::{Path, PathBuf};

use clap::Args;
use eyre::Result;
use wiregen_config::WiregenToml;

use super::{UnwrapOrExit, build_operations, load_model};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to wiregen.toml (defaults to ./wiregen.toml)
    #[arg(short, long, default_value = "wiregen.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Validate the configuration and the model artifact
    pub fn run(&self) -> Result<()> {
        let file = WiregenToml::open(&self.config).unwrap_or_exit();
        let config = file.config();
        let project_dir = self
            .config
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or(Path::new("."));

        let app = load_model(&project_dir.join(&config.project.model))?;
        let (operations, _) = build_operations(&app, config);

        println!("{}: configuration OK", config.project.name);
        println!("  templates: {}", config.codegen.templates.join(", "));
        println!("  operations: {}", app.operations.len());
        println!(
            "  root fields selected for stubs: {}",
            operations.root_fields().len()
        );

        Ok(())
    }
}
