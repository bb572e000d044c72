//! Rule-block parsing.
//!
//! The document is scanned once, top to bottom. Body lines are buffered while
//! a rule is pending and flushed into a [`Rule`] at the next heading or at the
//! end of the document. Malformed documents never fail to parse; they simply
//! produce fewer rules.

use std::fs;
use std::io;
use std::path::Path;

use itertools::Itertools;

use crate::rules::Rule;

use super::Line;

/// Parse the CLAUDE.md document at `path`.
///
/// Read errors (missing file, permissions, invalid UTF-8) are returned as-is.
#[tracing::instrument]
pub fn parse(path: &Path) -> io::Result<Vec<Rule>> {
    let text = fs::read_to_string(path)?;
    let rules = parse_content(&text);
    tracing::debug!(count = rules.len(), "parsed rules");
    Ok(rules)
}

/// Parse CLAUDE.md document text into rules, in heading order.
pub fn parse_content(text: &str) -> Vec<Rule> {
    let mut rules = Vec::new();
    let mut state = State::Idle;

    for line in text.lines() {
        state = match Line::from(line) {
            Line::RuleHeading(name) => {
                state.flush_into(&mut rules);
                State::Accumulating { name, body: vec![] }
            }
            Line::ActiveRules => {
                if let State::Accumulating { name, .. } = &state {
                    tracing::trace!(name, "discarding pending rule at active rules header");
                }
                State::Idle
            }
            Line::SectionHeading(title) => {
                state.flush_into(&mut rules);
                tracing::trace!(title, "skipping section");
                State::Skipping
            }
            Line::Body(line) => state.push(line),
        };
    }

    state.flush_into(&mut rules);
    rules
}

/// Where the scan currently is relative to rules.
#[derive(Debug)]
enum State<'a> {
    /// Before any heading, or right after the active rules header.
    Idle,

    /// Inside a rule, buffering its body.
    Accumulating { name: &'a str, body: Vec<&'a str> },

    /// Inside a section that holds no rules.
    Skipping,
}

impl<'a> State<'a> {
    /// Buffer a body line if a rule is pending; drop it otherwise.
    fn push(self, line: &'a str) -> Self {
        match self {
            State::Accumulating { name, mut body } => {
                body.push(line);
                State::Accumulating { name, body }
            }
            other => {
                tracing::trace!(state = ?other, line, "dropping line outside of a rule");
                other
            }
        }
    }

    /// Emit the pending rule, if any and if it has content.
    fn flush_into(self, rules: &mut Vec<Rule>) {
        let State::Accumulating { name, body } = self else {
            return;
        };

        let content = body.iter().join("\n");
        let content = content.trim();
        if content.is_empty() {
            tracing::trace!(name, "dropping rule without content");
            return;
        }

        rules.push(Rule::builder().name(name).content(content).build());
    }
}
