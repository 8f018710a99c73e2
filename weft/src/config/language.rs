//! User-supplied language entries.

use serde::{Deserialize, Serialize};

/// A language entry from `weft.toml`.
///
/// Maps file-name tags to the line-comment token the weaving grammar is built
/// from. Entries are consulted before the builtin table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Language name (e.g., "python").
    pub name: String,

    /// File-name tags that select this language.
    #[serde(default)]
    pub identifiers: Vec<String>,

    /// Line-comment token (e.g., "#").
    pub comment: String,
}

impl Language {
    /// Creates a new Language entry.
    pub fn new(name: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identifiers: Vec::new(),
            comment: comment.into(),
        }
    }

    /// Adds file-name tags.
    pub fn with_identifiers(mut self, identifiers: Vec<String>) -> Self {
        self.identifiers = identifiers;
        self
    }

    /// Checks if this language matches a given tag.
    pub fn matches(&self, tag: &str) -> bool {
        self.name == tag || self.identifiers.iter().any(|id| id == tag)
    }
}
