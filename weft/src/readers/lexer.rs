//! Markdown block lexer.
//!
//! Produces the ordered block sequence the weaver consumes: ATX headings and
//! fenced code blocks. Everything else in the document is prose and yields no
//! block.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::Block;

/// Pattern for matching code fence openings.
static FENCE_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<indent>\s*)(?P<fence>`{3,}|~{3,})(?P<info>.*)$").unwrap());

/// Pattern for ATX headings, with optional closing hashes.
static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<marks>#{1,6})\s+(?P<text>.*?)\s*#*\s*$").unwrap());

/// Lexes markdown into heading and code blocks, in source order.
pub fn lex(input: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut lines = input.lines();

    while let Some(line) = lines.next() {
        if let Some(caps) = FENCE_OPEN.captures(line) {
            let indent = caps["indent"].to_string();
            let fence = &caps["fence"];
            let fence_char = fence.chars().next().unwrap_or('`');
            let fence_len = fence.len();

            let mut content = Vec::new();
            for content_line in lines.by_ref() {
                if closes_fence(content_line, fence_char, fence_len) {
                    break;
                }
                // Strip the fence's own indentation from content lines.
                let stripped = content_line.strip_prefix(&indent).unwrap_or(content_line);
                content.push(stripped.to_string());
            }

            // An unclosed fence runs to end of input.
            blocks.push(Block::Code {
                text: content.join("\n"),
            });
        } else if let Some(caps) = HEADING.captures(line) {
            blocks.push(Block::Heading {
                depth: caps["marks"].len(),
                text: caps["text"].to_string(),
            });
        }
    }

    blocks
}

/// A closing fence is the same character repeated at least as many times,
/// with nothing but whitespace around it.
fn closes_fence(line: &str, fence_char: char, fence_len: usize) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= fence_len && trimmed.chars().all(|ch| ch == fence_char)
}
