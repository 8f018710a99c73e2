//! Weave command implementation.

use std::path::PathBuf;

use weft::errors::Result;
use weft::interface::{expand_globs, weave_files};
use weft::Config;

/// Options for the weave command.
#[derive(Debug, Clone, Default)]
pub struct WeaveOptions {
    /// Glob patterns naming input markdown files.
    pub globs: Vec<String>,
    /// Output directory override.
    pub dir: Option<PathBuf>,
}

/// Executes the weave command.
pub fn weave(config: &Config, options: WeaveOptions) -> Result<()> {
    tracing::info!("Weaving documents...");

    let files = expand_globs(&options.globs)?;
    let output_dir = options.dir.or_else(|| config.output_dir.clone());
    weave_files(&files, output_dir.as_deref(), config)
}
