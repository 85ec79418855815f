//! The template contract.

use eyre::Result;
use wiregen_model::ResolvedApplication;

/// Read-only context handed to every template of a run.
#[derive(Debug, Clone, Copy)]
pub struct GenerationContext<'a> {
    /// The resolved application model.
    pub app: &'a ResolvedApplication,
}

/// A unit of code generation.
///
/// A template turns the resolved application model into zero or more output
/// files and may declare other templates it relies on; the resolver pulls
/// those in automatically. Templates are constructed fresh each run and must
/// not carry state across runs.
pub trait Template {
    /// Stable identity used for deduplication within a run.
    ///
    /// Two instances with the same name are treated as the same template,
    /// even when constructed independently. Parameterized templates must
    /// fold their configuration into the name.
    fn name(&self) -> String;

    /// Produce this template's output files from the model.
    fn generate(&self, ctx: &GenerationContext<'_>) -> Result<Vec<TemplateOutputFile>>;

    /// Templates this one relies on; collected transitively by the resolver.
    fn dependencies(&self) -> Vec<Box<dyn Template>> {
        Vec::new()
    }
}

/// How the writer treats an existing file at an output path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    /// Overwrite unconditionally.
    Always,
    /// Prefix the sentinel header on write and leave the file alone once a
    /// developer has removed that header.
    ProtectCustomizations,
}

/// One file produced by a template.
#[derive(Debug, Clone)]
pub struct TemplateOutputFile {
    /// Path relative to the run's output directory; may contain
    /// subdirectories. Must be unique across all templates of a run.
    pub path: String,
    pub content: String,
    pub policy: WritePolicy,
}

impl TemplateOutputFile {
    /// An unconditionally overwritten file.
    pub fn always(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            policy: WritePolicy::Always,
        }
    }

    /// A file that developers may take ownership of by stripping the
    /// sentinel header.
    pub fn protected(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            policy: WritePolicy::ProtectCustomizations,
        }
    }
}
