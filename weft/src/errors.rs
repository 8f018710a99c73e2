//! Error types for the weft system.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for weft operations.
#[derive(Error, Debug)]
pub enum WeftError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Globs didn't match any source files")]
    NoInputs,

    #[error("Directory does not exist: {}", path.display())]
    MissingOutputDir { path: PathBuf },

    #[error("Recursion limit exceeded after {passes} resolution passes")]
    RecursionLimit { passes: usize },
}

/// Result type alias for weft operations.
pub type Result<T> = std::result::Result<T, WeftError>;
