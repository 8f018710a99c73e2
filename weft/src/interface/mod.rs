//! Document pipeline: loading, weaving, writing.

mod document;

pub use document::{expand_globs, language_tag, weave_files, Document};
