//! CLI command implementations.

mod weave;

pub use weave::{weave, WeaveOptions};
