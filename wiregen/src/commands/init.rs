use std::path::PathBuf;

use clap::Args;
use dialoguer::{Confirm, theme::ColorfulTheme};
use eyre::{Context, Result};
use wiregen_core::write_file;

#[derive(Args)]
pub struct InitCommand {
    /// Project name (defaults to the current directory name)
    pub name: Option<String>,

    /// Directory to place wiregen.toml in (defaults to .)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

impl InitCommand {
    /// Scaffold a starter wiregen.toml
    pub fn run(&self) -> Result<()> {
        let name = match &self.name {
            Some(name) => name.clone(),
            None => {
                let cwd = std::env::current_dir().wrap_err("Failed to get current directory")?;
                cwd.file_name()
                    .and_then(|n| n.to_str())
                    .ok_or_else(|| eyre::eyre!("Current directory has no valid name"))?
                    .to_string()
            }
        };

        let path = self.output.join("wiregen.toml");
        if path.exists() {
            let overwrite = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(format!("{} already exists. Overwrite?", path.display()))
                .default(false)
                .interact()
                .wrap_err("Failed to get confirmation")?;
            if !overwrite {
                println!("Aborted");
                return Ok(());
            }
        }

        write_file(&path, &starter_config(&name))?;
        println!("Created {}", path.display());
        println!("Point project.model at your resolved model artifact, then run 'wiregen generate'");

        Ok(())
    }
}

fn starter_config(name: &str) -> String {
    format!(
        r#"[project]
name = "{}"
model = "generated/app.model.json"
out_dir = "generated"

[codegen]
templates = ["typescript"]

[operations]
base_path = ""

# Per-namespace stub options, e.g.:
# [operations.namespaces.spacex]
# depth_limit = 3
# ignore = ["launch_site"]
"#,
        name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_config_is_valid() {
        let config = starter_config("pets");
        assert!(wiregen_config::WiregenToml::parse(config, "wiregen.toml").is_ok());
    }
}
