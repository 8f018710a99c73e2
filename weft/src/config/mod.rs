//! Configuration loading and the language table.

mod language;

pub use language::Language;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Comment token assumed when the language is unknown or absent.
pub const DEFAULT_COMMENT: &str = "//";

/// Standard configuration file names to search for.
const CONFIG_FILES: &[&str] = &["weft.toml", ".weft.toml"];

/// Weft configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default output directory for woven files.
    pub output_dir: Option<PathBuf>,

    /// Extra language entries, consulted before the builtin table.
    pub languages: Vec<Language>,
}

impl Config {
    /// Resolves the line-comment token for a language tag.
    ///
    /// User entries shadow the builtin table; anything unresolved falls back
    /// to [`DEFAULT_COMMENT`].
    pub fn comment_for(&self, tag: Option<&str>) -> &str {
        let Some(tag) = tag else {
            return DEFAULT_COMMENT;
        };

        if let Some(lang) = self.languages.iter().find(|l| l.matches(tag)) {
            return &lang.comment;
        }

        builtin_comment_token(tag).unwrap_or(DEFAULT_COMMENT)
    }
}

/// Looks up the builtin line-comment token for a language tag.
pub fn builtin_comment_token(tag: &str) -> Option<&'static str> {
    match tag {
        "js" | "c" | "h" | "cpp" | "cs" | "php" | "m" | "java" | "scala" => Some("//"),
        "coffee" | "litcoffee" | "ls" | "rb" | "py" => Some("#"),
        "hs" | "lua" => Some("--"),
        "erl" | "hrl" => Some("%"),
        _ => None,
    }
}

/// Finds the configuration file in the given directory or its parents.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for name in CONFIG_FILES {
            let candidate = current.join(name);
            if candidate.exists() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Reads configuration from a TOML file.
pub fn read_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Reads configuration, searching from the given directory.
///
/// If no config file is found, returns the default configuration.
pub fn read_config(start_dir: &Path) -> Result<Config> {
    match find_config_file(start_dir) {
        Some(path) => read_config_file(&path),
        None => Ok(Config::default()),
    }
}
