//! Document loading and the weaving pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::errors::{Result, WeftError};
use crate::grammar::Grammar;
use crate::model::Weaver;
use crate::readers::lex;

/// A markdown document being woven.
#[derive(Debug, Clone)]
pub struct Document {
    /// Path to the source markdown file.
    pub path: PathBuf,
    /// Raw markdown text.
    pub source: String,
    /// Declared language tag, derived from the file name.
    pub language: Option<String>,
}

impl Document {
    /// Loads a document from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            language: language_tag(path),
            source,
        })
    }

    /// Creates a document from in-memory source, deriving the language tag
    /// from the given (possibly nonexistent) path.
    pub fn from_source(path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            language: language_tag(&path),
            path,
            source: source.into(),
        }
    }

    /// Weaves the document into its assembled source text.
    pub fn weave(&self, config: &Config) -> Result<String> {
        let comment = config.comment_for(self.language.as_deref());
        let grammar = Grammar::compile(comment)?;

        let mut weaver = Weaver::new(grammar);
        for block in lex(&self.source) {
            weaver.push(&block);
        }
        weaver.weave()
    }

    /// Where the woven output is written: the file name with its markdown
    /// extension stripped, in `output_dir` or alongside the source.
    pub fn output_path(&self, output_dir: Option<&Path>) -> PathBuf {
        let name = output_name(&self.path);
        match output_dir {
            Some(dir) => dir.join(name),
            None => match self.path.parent() {
                Some(parent) => parent.join(name),
                None => PathBuf::from(name),
            },
        }
    }
}

/// Derives the language tag from a file name: the segment immediately before
/// the final extension (`chapter.js.md` -> `js`).
pub fn language_tag(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let parts: Vec<&str> = name.split('.').collect();
    if parts.len() < 2 {
        return None;
    }
    Some(parts[parts.len() - 2].to_string())
}

/// The output file name: the markdown extension stripped, if present.
fn output_name(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    for ext in [".md", ".markdown"] {
        if let Some(stripped) = name.strip_suffix(ext) {
            return stripped.to_string();
        }
    }
    name
}

/// Expands glob patterns into the matched input files, in pattern order.
pub fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        for entry in glob::glob(pattern)? {
            files.push(entry.map_err(|e| WeftError::Io(e.into_error()))?);
        }
    }

    if files.is_empty() {
        return Err(WeftError::NoInputs);
    }
    Ok(files)
}

/// Weaves each input file and writes the assembled source next to it, or
/// into `output_dir` when given. Existing output files are overwritten.
pub fn weave_files(files: &[PathBuf], output_dir: Option<&Path>, config: &Config) -> Result<()> {
    if let Some(dir) = output_dir {
        if !dir.is_dir() {
            return Err(WeftError::MissingOutputDir {
                path: dir.to_path_buf(),
            });
        }
    }

    for path in files {
        let document = Document::load(path)?;
        let output = document.weave(config)?;
        let out_path = document.output_path(output_dir);
        fs::write(&out_path, output)?;
        tracing::info!("wove {} -> {}", path.display(), out_path.display());
    }

    Ok(())
}
