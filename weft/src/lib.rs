//! Weft - Literate Programming Weaver
//!
//! This library extracts source code embedded in markdown documentation and
//! weaves it into compilable source files. A document's fenced code blocks are
//! classified into ordinary code, named sections, or private blocks using a
//! comment-syntax-aware grammar, and section references are expanded by
//! recursive textual substitution with indentation preserved.
//!
//! # Example
//!
//! ````
//! use weft::{Config, Document};
//!
//! let source = "```\nconsole.log('hi');\n```\n";
//! let document = Document::from_source("hello.js.md", source);
//! let output = document.weave(&Config::default()).unwrap();
//! assert_eq!(output, "console.log('hi');\n");
//! ````

pub mod config;
pub mod errors;
pub mod grammar;
pub mod interface;
pub mod model;
pub mod readers;

// Re-export commonly used types
pub use config::Config;
pub use errors::{Result, WeftError};
pub use grammar::Grammar;
pub use interface::Document;
pub use model::{Block, SectionRegistry, Weaver};
