//! Writing rules back into CLAUDE.md documents.

use std::ops::Range;

use crate::rules::Rule;

use super::{ACTIVE_RULES_HEADER, Line, RULE_MARKER};

/// Render rules as an `## Active Rules` section.
///
/// Each rule becomes a `### ` heading followed by its content and a blank
/// line, so the section parses back into the same rules.
pub fn render_section(rules: &[Rule]) -> String {
    let mut section = format!("{ACTIVE_RULES_HEADER}\n");
    for rule in rules {
        section.push('\n');
        section.push_str(RULE_MARKER);
        section.push_str(&rule.name);
        section.push('\n');
        section.push_str(&rule.content);
        section.push('\n');
    }
    section
}

/// Merge rules into a document, replacing its `## Active Rules` section.
///
/// The section runs from its header to the next `## ` heading other than
/// another `## Active Rules`, which is swallowed into the section. Text outside
/// the section is kept as-is. A document without the section gets it
/// appended after a blank line.
#[tracing::instrument(skip_all, fields(rules = rules.len()))]
pub fn merge(document: &str, rules: &[Rule]) -> String {
    let section = render_section(rules);

    let Some(range) = active_rules_range(document) else {
        tracing::debug!("no active rules section, appending");
        let preamble = document.trim_end();
        if preamble.is_empty() {
            return section;
        }
        return format!("{preamble}\n\n{section}");
    };

    tracing::debug!(?range, "replacing active rules section");
    let before = &document[..range.start];
    let after = &document[range.end..];
    if after.is_empty() {
        format!("{before}{section}")
    } else {
        format!("{before}{section}\n{after}")
    }
}

/// Byte range of the first `## Active Rules` section, if there is one.
///
/// Repeated `## Active Rules` headers belong to the section: the parser
/// discards the rule pending at such a header, so a section ending there
/// would lose its last rule on the next import.
fn active_rules_range(document: &str) -> Option<Range<usize>> {
    let mut start = None;
    let mut offset = 0;

    for raw in document.split_inclusive('\n') {
        let line = raw.strip_suffix('\n').unwrap_or(raw);
        let line = line.strip_suffix('\r').unwrap_or(line);

        match (start, Line::from(line)) {
            (None, Line::ActiveRules) => start = Some(offset),
            (Some(start), Line::SectionHeading(_)) => {
                return Some(start..offset);
            }
            _ => {}
        }

        offset += raw.len();
    }

    start.map(|start| start..document.len())
}
