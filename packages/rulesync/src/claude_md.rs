//! Reading and writing rules in CLAUDE.md documents.
//!
//! A CLAUDE.md document is semi-structured markdown. Rules live under `### `
//! headings; `## ` headings demarcate sections that are not rules, except for
//! the `## Active Rules` header which introduces the rules themselves:
//!
//! ```markdown
//! ## Active Rules
//! ### Rule One
//! Do the thing.
//! ### Rule Two
//! Do another thing.
//! ## Active MCP Servers
//! ignored text
//! ```
//!
//! [`parse_content`] turns such a document into [`Rule`](crate::rules::Rule)
//! records, and [`merge`] writes records back into a document.

pub use parser::{parse, parse_content};
pub use render::{merge, render_section};

mod parser;
mod render;

/// Marker that starts a rule heading.
pub const RULE_MARKER: &str = "### ";

/// Marker that starts a section heading.
pub const SECTION_MARKER: &str = "## ";

/// The section header that introduces the rules of a document.
pub const ACTIVE_RULES_HEADER: &str = "## Active Rules";

/// A single line of a CLAUDE.md document, classified by how it affects rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    /// A `### ` heading, holding the trimmed rule name.
    RuleHeading(&'a str),

    /// Exactly `## Active Rules`.
    ActiveRules,

    /// Any other `## ` heading, holding the text after the marker.
    SectionHeading(&'a str),

    /// Anything else.
    Body(&'a str),
}

impl<'a> From<&'a str> for Line<'a> {
    fn from(line: &'a str) -> Self {
        if let Some(name) = line.strip_prefix(RULE_MARKER) {
            Line::RuleHeading(name.trim())
        } else if line == ACTIVE_RULES_HEADER {
            Line::ActiveRules
        } else if let Some(title) = line.strip_prefix(SECTION_MARKER) {
            Line::SectionHeading(title)
        } else {
            Line::Body(line)
        }
    }
}
