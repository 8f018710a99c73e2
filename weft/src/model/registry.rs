//! Section registry: the per-document buckets of accumulated code text.

use indexmap::IndexMap;

use super::section_name::SectionName;

/// Holds every chunk of code text filed while weaving one document.
///
/// The anonymous bucket collects top-level code and forms the skeleton of the
/// final output. Named buckets accumulate section bodies in encounter order
/// (insertion-ordered map) and are substituted at reference sites. A bucket,
/// once created, persists for the document's lifetime; heading-scoped and
/// inline contributions under the same name share one bucket.
#[derive(Debug, Clone, Default)]
pub struct SectionRegistry {
    /// Top-level code chunks not assigned to any named section.
    anonymous: Vec<String>,

    /// Named buckets, in order of first contribution.
    named: IndexMap<SectionName, Vec<String>>,
}

impl SectionRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a chunk to the anonymous bucket.
    pub fn push_anonymous(&mut self, chunk: String) {
        self.anonymous.push(chunk);
    }

    /// Appends a chunk to the named bucket, creating the bucket if new.
    pub fn push_named(&mut self, name: &SectionName, chunk: String) {
        self.named.entry(name.clone()).or_default().push(chunk);
    }

    /// Creates the named bucket if it does not exist yet.
    pub fn ensure(&mut self, name: &SectionName) {
        self.named.entry(name.clone()).or_default();
    }

    /// Checks if a named bucket exists.
    pub fn contains(&self, name: &str) -> bool {
        self.named.contains_key(name)
    }

    /// Returns a named bucket's text: its chunks joined with newlines.
    pub fn section_text(&self, name: &str) -> Option<String> {
        self.named.get(name).map(|chunks| chunks.join("\n"))
    }

    /// Returns the anonymous bucket's text: its chunks joined with newlines.
    pub fn anonymous_text(&self) -> String {
        self.anonymous.join("\n")
    }

    /// Returns all section names in order of first contribution.
    pub fn names(&self) -> impl Iterator<Item = &SectionName> {
        self.named.keys()
    }

    /// Returns the number of named buckets.
    pub fn len(&self) -> usize {
        self.named.len()
    }

    /// Returns true if there are no named buckets.
    pub fn is_empty(&self) -> bool {
        self.named.is_empty()
    }
}
