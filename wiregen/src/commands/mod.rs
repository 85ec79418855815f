mod check;
mod completions;
mod generate;
mod init;
mod operations;

use std::collections::HashMap;
use std::path::Path;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::{Context, Result};
use generate::GenerateCommand;
use init::InitCommand;
use operations::OperationsCommand;
use wiregen_config::WiregenConfig;
use wiregen_model::ResolvedApplication;
use wiregen_operations::{OperationsGenerationConfig, SelectionOptions};

/// Extension trait for exiting on configuration errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for wiregen_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "wiregen")]
#[command(version)]
#[command(about = "Generate API clients and operation stubs from a resolved schema")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Operations(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run the template pipeline and the operation-stub generator
    Generate(GenerateCommand),

    /// Run only the operation-stub generator
    Operations(OperationsCommand),

    /// Validate wiregen.toml and the model artifact without generating
    Check(CheckCommand),

    /// Create a starter wiregen.toml
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Load the resolved application model artifact.
pub(crate) fn load_model(path: &Path) -> Result<ResolvedApplication> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read model artifact '{}'", path.display()))?;
    serde_json::from_str(&content)
        .wrap_err_with(|| format!("failed to parse model artifact '{}'", path.display()))
}

/// Map the `[operations]` configuration onto the generator's inputs.
pub(crate) fn build_operations(
    app: &ResolvedApplication,
    config: &WiregenConfig,
) -> (OperationsGenerationConfig, HashMap<String, SelectionOptions>) {
    let mut operations = OperationsGenerationConfig::new(&app.schema);
    operations.set_base_path(config.operations.base_path.clone());

    if let Some(include) = &config.operations.include_namespaces {
        let names: Vec<&str> = include.iter().map(String::as_str).collect();
        operations.include_namespaces(&names);
    }
    if !config.operations.exclude_namespaces.is_empty() {
        let names: Vec<&str> = config
            .operations
            .exclude_namespaces
            .iter()
            .map(String::as_str)
            .collect();
        operations.exclude_namespaces(&names);
    }

    let options = config
        .operations
        .namespaces
        .iter()
        .map(|(namespace, ns)| {
            let mut selection = SelectionOptions::default();
            if let Some(depth_limit) = ns.depth_limit {
                selection.depth_limit = depth_limit;
            }
            if let Some(circular) = ns.circular_reference_depth {
                selection.circular_reference_depth = circular;
            }
            selection.arg_names = ns.arg_names.clone();
            selection.ignore = ns.ignore.clone();
            (namespace.clone(), selection)
        })
        .collect();

    (operations, options)
}
