//! Reference resolution and final assembly.
//!
//! Assembly joins the anonymous bucket into one blob, then repeatedly
//! substitutes reference lines with section text until a pass changes
//! nothing. Textual equality between passes is the convergence test, and the
//! pass ceiling is the only cycle-detection mechanism.

use regex::Captures;

use crate::errors::{Result, WeftError};
use crate::grammar::Grammar;

use super::registry::SectionRegistry;

/// Ceiling on resolution passes before a cyclic reference is assumed.
pub const MAX_RESOLUTION_PASSES: usize = 50;

/// Expands references in the anonymous bucket to a fixed point and returns
/// the final output text, terminated by exactly one newline.
pub fn assemble(registry: &SectionRegistry, grammar: &Grammar) -> Result<String> {
    let mut code = registry.anonymous_text();

    for pass in 0..MAX_RESOLUTION_PASSES {
        let expanded = expand_references(&code, registry, grammar);
        if expanded == code {
            tracing::debug!("references resolved in {} passes", pass);
            return Ok(terminate_newline(&code));
        }
        code = expanded;
    }

    Err(WeftError::RecursionLimit {
        passes: MAX_RESOLUTION_PASSES,
    })
}

/// One substitution pass: every reference line naming an existing section is
/// replaced by that section's text, indented to match the reference line.
/// References to unknown sections are left verbatim.
fn expand_references(code: &str, registry: &SectionRegistry, grammar: &Grammar) -> String {
    grammar
        .reference()
        .replace_all(code, |caps: &Captures| {
            let leading = &caps["indent"];
            let name = caps["name"].trim();
            match registry.section_text(name) {
                Some(text) => indent(&text, leading),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Prefixes every non-blank line with the leading whitespace. Blank lines are
/// left blank rather than gaining trailing whitespace.
fn indent(text: &str, leading: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{}{}", leading, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Normalizes the blob to end with exactly one trailing newline.
fn terminate_newline(code: &str) -> String {
    format!("{}\n", code.trim_end_matches('\n'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SectionName;

    fn grammar() -> Grammar {
        Grammar::compile("//").unwrap()
    }

    fn registry(anonymous: &[&str], sections: &[(&str, &str)]) -> SectionRegistry {
        let mut registry = SectionRegistry::new();
        for chunk in anonymous {
            registry.push_anonymous(chunk.to_string());
        }
        for (name, chunk) in sections {
            registry.push_named(&SectionName::new(*name), chunk.to_string());
        }
        registry
    }

    #[test]
    fn test_no_references_is_identity_plus_newline() {
        let registry = registry(&["a\n", "b\n"], &[]);
        let result = assemble(&registry, &grammar()).unwrap();
        assert_eq!(result, "a\n\nb\n");
    }

    #[test]
    fn test_simple_substitution() {
        let registry = registry(&["//:: helper\n"], &[("helper", "return 1;")]);
        let result = assemble(&registry, &grammar()).unwrap();
        assert_eq!(result, "return 1;\n");
    }

    #[test]
    fn test_substitution_preserves_indentation() {
        let registry = registry(
            &["function f() {\n  //:: body ::\n}\n"],
            &[("body", "var a = 1;\n\nreturn a;")],
        );
        let result = assemble(&registry, &grammar()).unwrap();
        // Non-blank lines gain the reference line's indent; blank lines stay blank.
        assert_eq!(result, "function f() {\n  var a = 1;\n\n  return a;\n}\n");
    }

    #[test]
    fn test_unresolved_reference_left_verbatim() {
        let registry = registry(&["  //:: missing ::\n"], &[]);
        let result = assemble(&registry, &grammar()).unwrap();
        assert_eq!(result, "  //:: missing ::\n");
    }

    #[test]
    fn test_transitive_references_resolve() {
        let registry = registry(
            &["//:: outer\n"],
            &[("outer", "begin\n//:: inner\nend"), ("inner", "middle")],
        );
        let result = assemble(&registry, &grammar()).unwrap();
        assert_eq!(result, "begin\nmiddle\nend\n");
    }

    #[test]
    fn test_definition_order_is_irrelevant() {
        let registry = registry(
            &["//:: a\n"],
            &[("b", "done"), ("a", "//:: b")],
        );
        let result = assemble(&registry, &grammar()).unwrap();
        assert_eq!(result, "done\n");
    }

    #[test]
    fn test_mutual_recursion_hits_the_ceiling() {
        let registry = registry(&["//:: a\n"], &[("a", "//:: b"), ("b", "//:: a")]);
        let result = assemble(&registry, &grammar());
        assert!(matches!(
            result,
            Err(WeftError::RecursionLimit {
                passes: MAX_RESOLUTION_PASSES
            })
        ));
    }

    #[test]
    fn test_trailing_newline_is_exactly_one() {
        assert_eq!(
            assemble(&registry(&["no newline"], &[]), &grammar()).unwrap(),
            "no newline\n"
        );
        assert_eq!(
            assemble(&registry(&["two\n\n"], &[]), &grammar()).unwrap(),
            "two\n"
        );
    }

    #[test]
    fn test_indent_helper() {
        assert_eq!(indent("a\nb", "  "), "  a\n  b");
        assert_eq!(indent("a\n\nb", "  "), "  a\n\n  b");
        assert_eq!(indent("a\n", "    "), "    a\n");
    }
}
