//! The weaver state machine: routes code blocks into section buckets.

use crate::errors::Result;
use crate::grammar::{BlockHeader, Grammar, HeadingControl};

use super::block::Block;
use super::registry::SectionRegistry;
use super::resolve::assemble;
use super::section_name::SectionName;

/// Only headings of this depth act as section controls.
pub const SECTION_HEADING_DEPTH: usize = 2;

/// Where plain code blocks are currently filed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// The anonymous top-level bucket.
    Anonymous,
    /// A named section bucket.
    Named(SectionName),
}

/// Consumes a document's block sequence in order and files each code block
/// into the correct bucket.
///
/// State is two fields: the open scope (initially anonymous) and the `ignore`
/// flag (set by a private heading, reset by every depth-2 heading).
#[derive(Debug)]
pub struct Weaver {
    grammar: Grammar,
    registry: SectionRegistry,
    open: Scope,
    ignore: bool,
}

impl Weaver {
    /// Creates a weaver with an empty registry.
    pub fn new(grammar: Grammar) -> Self {
        Self {
            grammar,
            registry: SectionRegistry::new(),
            open: Scope::Anonymous,
            ignore: false,
        }
    }

    /// Feeds one block through the state machine.
    pub fn push(&mut self, block: &Block) {
        match block {
            Block::Heading { depth, text } => self.on_heading(*depth, text),
            Block::Code { text } => self.on_code(text),
        }
    }

    fn on_heading(&mut self, depth: usize, text: &str) {
        if depth != SECTION_HEADING_DEPTH {
            return;
        }

        self.ignore = false;
        match self.grammar.match_heading(text) {
            // A plain heading ends any named-section scope.
            None => self.open = Scope::Anonymous,
            Some(HeadingControl::Private) => self.ignore = true,
            Some(HeadingControl::Named(name)) => {
                let name = SectionName::new(name);
                self.registry.ensure(&name);
                self.open = Scope::Named(name);
            }
        }
    }

    fn on_code(&mut self, text: &str) {
        if self.ignore {
            return;
        }

        match self.grammar.match_block(text) {
            None => {
                let chunk = format!("{}\n", text);
                match &self.open {
                    Scope::Anonymous => self.registry.push_anonymous(chunk),
                    Scope::Named(name) => self.registry.push_named(name, chunk),
                }
            }
            // Inline private header drops this block only.
            Some(BlockHeader::Private) => {}
            // Inline named header files the body regardless of the open scope.
            Some(BlockHeader::Named { name, body }) => {
                self.registry.push_named(&SectionName::new(name), body);
            }
        }
    }

    /// The open scope (for inspection and tests).
    pub fn scope(&self) -> &Scope {
        &self.open
    }

    /// True while inside a heading-scoped private region.
    pub fn is_ignoring(&self) -> bool {
        self.ignore
    }

    /// The registry built so far.
    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// Resolves references and assembles the final output text.
    pub fn weave(self) -> Result<String> {
        assemble(&self.registry, &self.grammar)
    }
}
