//! `wiregen.toml` loading.

use std::path::Path;

use crate::{
    Error, Result, SourceContext, WiregenConfig,
    validate::validate,
};

/// A parsed and validated `wiregen.toml` together with its source, kept for
/// diagnostic rendering.
#[derive(Debug)]
pub struct WiregenToml {
    config: WiregenConfig,
    ctx: SourceContext,
}

impl WiregenToml {
    /// Read, parse, and validate the file at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source,
            })
        })?;
        Self::parse(content, path.display().to_string())
    }

    /// Parse and validate configuration content.
    pub fn parse(content: impl Into<String>, filename: impl Into<String>) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let config: WiregenConfig =
            toml::from_str(ctx.src()).map_err(|source| ctx.parse_error(source))?;
        validate(&config, &ctx)?;
        Ok(Self { config, ctx })
    }

    pub fn config(&self) -> &WiregenConfig {
        &self.config
    }

    pub fn source(&self) -> &SourceContext {
        &self.ctx
    }
}
