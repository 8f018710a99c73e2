//! Section names for woven code buckets.

use std::borrow::Borrow;
use std::fmt;

/// A section name identifies a named bucket of code text.
///
/// Names are opaque: whatever the author wrote between the markers, with
/// surrounding whitespace trimmed by the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SectionName(String);

impl SectionName {
    /// Creates a new SectionName from a string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SectionName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SectionName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for SectionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for SectionName {
    fn borrow(&self) -> &str {
        &self.0
    }
}
