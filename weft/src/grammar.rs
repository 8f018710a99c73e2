//! Grammar compilation for section and reference markers.
//!
//! Every pattern is derived once per document from the language's line-comment
//! token. Inline markers live inside a comment on the first line of a code
//! block; heading markers appear bare at the line level; reference markers are
//! comment-wrapped lines found anywhere in multi-line text.
//!
//! The regex crate has no backreferences, so the rule that an optional closing
//! marker must repeat the opening marker (`==` closes `==`, `!!` closes `!!`)
//! is expressed by compiling one pattern per marker kind. The two prefixes are
//! mutually exclusive, which makes the pair equivalent to a single
//! backreferencing pattern.

use regex::Regex;

use crate::errors::Result;

/// Marker opening a named section.
pub const SECTION_MARKER: &str = "==";

/// Marker opening a private (ignored) section.
pub const PRIVATE_MARKER: &str = "!!";

/// Marker naming a section to be substituted in place of the line.
pub const REFERENCE_MARKER: &str = "::";

/// Classification of a code block's first-line header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockHeader {
    /// `<comment> == name` header; `body` is the rest of the block, verbatim.
    Named { name: String, body: String },
    /// `<comment> !! ...` header; the block is documentation-only.
    Private,
}

/// Section control carried by a depth-2 heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadingControl {
    /// `== name`: open the named section for all following code blocks.
    Named(String),
    /// `!!`: drop all code blocks until the next depth-2 heading.
    Private,
}

/// Compiled per-document patterns.
#[derive(Debug, Clone)]
pub struct Grammar {
    section_open: Regex,
    section_private: Regex,
    heading_open: Regex,
    heading_private: Regex,
    reference: Regex,
}

impl Grammar {
    /// Compiles the grammar for a language's line-comment token.
    pub fn compile(comment: &str) -> Result<Self> {
        let c = regex::escape(comment);

        Ok(Self {
            section_open: Regex::new(&inline_pattern(&c, SECTION_MARKER))?,
            section_private: Regex::new(&inline_pattern(&c, PRIVATE_MARKER))?,
            heading_open: Regex::new(&heading_pattern(SECTION_MARKER))?,
            heading_private: Regex::new(&heading_pattern(PRIVATE_MARKER))?,
            reference: Regex::new(&reference_pattern(&c))?,
        })
    }

    /// Classifies a code block's own text by its first-line header, if any.
    pub fn match_block(&self, text: &str) -> Option<BlockHeader> {
        if let Some(caps) = self.section_open.captures(text) {
            return Some(BlockHeader::Named {
                name: caps["name"].trim().to_string(),
                body: caps["body"].to_string(),
            });
        }
        if self.section_private.is_match(text) {
            return Some(BlockHeader::Private);
        }
        None
    }

    /// Classifies a depth-2 heading's text, if it carries a marker.
    pub fn match_heading(&self, text: &str) -> Option<HeadingControl> {
        if let Some(caps) = self.heading_open.captures(text) {
            return Some(HeadingControl::Named(caps["name"].trim().to_string()));
        }
        if self.heading_private.is_match(text) {
            return Some(HeadingControl::Private);
        }
        None
    }

    /// The reference pattern, applied globally over multi-line text.
    ///
    /// Captures `indent` (leading spaces) and `name`.
    pub fn reference(&self) -> &Regex {
        &self.reference
    }
}

/// Inline section header: comment-wrapped marker on the first line of a code
/// block, optionally self-closed, then an optional blank line, then the body.
fn inline_pattern(comment: &str, marker: &str) -> String {
    let m = regex::escape(marker);
    format!(
        r"^{comment} *{m} *(?P<name>.*?)(?: *{m} *(?:{comment})? *)?\n\n?(?P<body>(?s:.*))$"
    )
}

/// Heading section control: the bare marker grammar anchored to the whole
/// heading text, with no comment token and no body.
fn heading_pattern(marker: &str) -> String {
    let m = regex::escape(marker);
    format!(r"^{m} *(?P<name>.*?)(?: *{m})? *$")
}

/// Reference line: leading spaces, comment-wrapped `::` marker, section name,
/// optional close. Multiline so every occurrence in a blob is found.
fn reference_pattern(comment: &str) -> String {
    let m = regex::escape(REFERENCE_MARKER);
    format!(
        r"(?m)^(?P<indent> *){comment} *{m} *(?P<name>.*?)(?: *{m} *(?:{comment})? *)? *$"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slash() -> Grammar {
        Grammar::compile("//").unwrap()
    }

    #[test]
    fn test_inline_named_section() {
        let header = slash().match_block("//== helper\nreturn 1;").unwrap();
        assert_eq!(
            header,
            BlockHeader::Named {
                name: "helper".to_string(),
                body: "return 1;".to_string(),
            }
        );
    }

    #[test]
    fn test_inline_named_section_blank_line() {
        let header = slash().match_block("//== helper\n\nreturn 1;").unwrap();
        assert_eq!(
            header,
            BlockHeader::Named {
                name: "helper".to_string(),
                body: "return 1;".to_string(),
            }
        );
    }

    #[test]
    fn test_inline_self_closing_marker() {
        let header = slash()
            .match_block("//== helper ==//\nreturn 1;\nreturn 2;")
            .unwrap();
        assert_eq!(
            header,
            BlockHeader::Named {
                name: "helper".to_string(),
                body: "return 1;\nreturn 2;".to_string(),
            }
        );
    }

    #[test]
    fn test_inline_close_without_trailing_comment() {
        let header = slash().match_block("// == helper ==\nbody").unwrap();
        assert_eq!(
            header,
            BlockHeader::Named {
                name: "helper".to_string(),
                body: "body".to_string(),
            }
        );
    }

    #[test]
    fn test_inline_mismatched_close_joins_name() {
        // A close marker of the other kind does not close; it is name text.
        let header = slash().match_block("//== helper !!//\nbody").unwrap();
        assert_eq!(
            header,
            BlockHeader::Named {
                name: "helper !!//".to_string(),
                body: "body".to_string(),
            }
        );
    }

    #[test]
    fn test_inline_private_block() {
        let header = slash().match_block("// !! secret !!\nhidden text").unwrap();
        assert_eq!(header, BlockHeader::Private);
    }

    #[test]
    fn test_inline_requires_newline() {
        // A header with no body line is not a section header.
        assert_eq!(slash().match_block("//== helper"), None);
    }

    #[test]
    fn test_plain_code_is_not_a_header() {
        assert_eq!(slash().match_block("var x = 1;\nvar y = 2;"), None);
        assert_eq!(slash().match_block("// a normal comment\ncode"), None);
    }

    #[test]
    fn test_inline_other_comment_token() {
        let pound = Grammar::compile("#").unwrap();
        let header = pound.match_block("#== setup\nimport os").unwrap();
        assert_eq!(
            header,
            BlockHeader::Named {
                name: "setup".to_string(),
                body: "import os".to_string(),
            }
        );
        // The slash grammar does not recognize pound headers.
        assert_eq!(slash().match_block("#== setup\nimport os"), None);
    }

    #[test]
    fn test_comment_token_is_escaped() {
        // Erlang's % and Haskell's -- are regex-significant when unescaped.
        let dash = Grammar::compile("--").unwrap();
        assert_eq!(
            dash.match_block("--== rows\nselect 1"),
            Some(BlockHeader::Named {
                name: "rows".to_string(),
                body: "select 1".to_string(),
            })
        );
    }

    #[test]
    fn test_heading_named() {
        assert_eq!(
            slash().match_heading("== helper"),
            Some(HeadingControl::Named("helper".to_string()))
        );
        assert_eq!(
            slash().match_heading("== helper =="),
            Some(HeadingControl::Named("helper".to_string()))
        );
    }

    #[test]
    fn test_heading_private() {
        assert_eq!(slash().match_heading("!!"), Some(HeadingControl::Private));
        assert_eq!(
            slash().match_heading("!! scratch !!"),
            Some(HeadingControl::Private)
        );
    }

    #[test]
    fn test_heading_plain() {
        assert_eq!(slash().match_heading("Usage"), None);
        assert_eq!(slash().match_heading("Results == notes"), None);
    }

    #[test]
    fn test_heading_markers_are_not_comment_wrapped() {
        // Inline syntax does not apply at the heading level.
        assert_eq!(slash().match_heading("//== helper"), None);
    }

    #[test]
    fn test_reference_basic() {
        let grammar = slash();
        let caps = grammar.reference().captures("//:: helper").unwrap();
        assert_eq!(&caps["indent"], "");
        assert_eq!(caps["name"].trim(), "helper");
    }

    #[test]
    fn test_reference_closed_and_spaced() {
        let grammar = slash();
        let caps = grammar.reference().captures("  // :: helper ::").unwrap();
        assert_eq!(&caps["indent"], "  ");
        assert_eq!(caps["name"].trim(), "helper");

        let caps = grammar.reference().captures("//:: helper :://").unwrap();
        assert_eq!(caps["name"].trim(), "helper");
    }

    #[test]
    fn test_reference_finds_all_lines() {
        let grammar = slash();
        let text = "code();\n//:: one\nmore();\n  //:: two ::\n";
        let names: Vec<_> = grammar
            .reference()
            .captures_iter(text)
            .map(|caps| caps["name"].trim().to_string())
            .collect();
        assert_eq!(names, vec!["one", "two"]);
    }

    #[test]
    fn test_reference_is_whole_line() {
        let grammar = slash();
        assert!(grammar.reference().captures("x = 1; //:: helper").is_none());
    }
}
