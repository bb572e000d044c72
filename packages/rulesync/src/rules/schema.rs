//! Schema types for rules and rule-set files.

use bon::Builder;
use derive_more::Display;
use monostate::MustBe;
use serde::{Deserialize, Serialize};

use crate::claude_md::{RULE_MARKER, SECTION_MARKER};

/// A single named rule.
///
/// Rules are read out of the `### ` headings of a CLAUDE.md document, or out
/// of a rule-set file, and written back as the "Active Rules" section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize, Builder, Display)]
#[builder(on(String, into))]
#[display("{name}")]
pub struct Rule {
    /// The label of the rule, taken from its heading.
    ///
    /// Names are not required to be unique.
    pub name: String,

    /// The body of the rule, with leading and trailing whitespace trimmed.
    pub content: String,
}

impl Rule {
    /// Find the problems that would stop this rule from surviving a trip
    /// through the Active Rules section of a CLAUDE.md document.
    pub fn problems(&self) -> Vec<Problem> {
        let mut problems = vec![];

        if self.name.trim().is_empty() {
            problems.push(Problem::EmptyName);
        } else if self.name.trim() != self.name || self.name.contains('\n') {
            problems.push(Problem::UntrimmedName);
        }

        if self.content.trim().is_empty() {
            problems.push(Problem::EmptyContent);
        } else if self.content.trim() != self.content {
            problems.push(Problem::UntrimmedContent);
        }

        if self.content.contains("\r\n") {
            problems.push(Problem::CrlfInContent);
        }

        problems.extend(
            self.content
                .lines()
                .enumerate()
                .filter(|(_, line)| {
                    line.starts_with(SECTION_MARKER) || line.starts_with(RULE_MARKER)
                })
                .map(|(i, line)| Problem::HeadingInContent {
                    line: i + 1,
                    text: line.to_string(),
                }),
        );

        problems
    }
}

/// A reason a rule can't be written to a CLAUDE.md document unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Problem {
    /// The name is blank.
    #[display("name is empty")]
    EmptyName,

    /// The name has surrounding whitespace or spans several lines.
    #[display("name has surrounding whitespace or line breaks")]
    UntrimmedName,

    /// The content is blank, so the rule would be dropped on import.
    #[display("content is empty")]
    EmptyContent,

    /// The content has leading or trailing whitespace, which is trimmed on import.
    #[display("content has leading or trailing whitespace")]
    UntrimmedContent,

    /// The content has `\r\n` line breaks, which are read back as `\n`.
    #[display("content has CRLF line endings, which become LF on import")]
    CrlfInContent,

    /// A content line would be read back as a heading.
    #[display("content line {line} would be read as a heading: {text:?}")]
    HeadingInContent { line: usize, text: String },
}

/// A rule-set file as read from disk.
///
/// ```yaml
/// version: 1
///
/// rules:
///   - name: Prefer small commits
///     content: |
///       Keep each commit focused on a single change.
///       Split refactors from behavior changes.
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RuleSet {
    /// The version of the rule-set file.
    pub version: MustBe!(1),

    /// The rules defined in this file.
    #[serde(default)]
    pub rules: Vec<Rule>,
}

/// A rule-set file as written to disk.
///
/// Kept separate from [`RuleSet`] so that writing borrows the rules instead
/// of requiring an owned copy.
#[derive(Debug, Clone, Serialize)]
pub struct RuleSetRef<'a> {
    /// Always `1`.
    pub version: u32,

    /// The rules to write.
    pub rules: &'a [Rule],
}

impl<'a> RuleSetRef<'a> {
    /// The current rule-set file version.
    pub const VERSION: u32 = 1;

    /// Wrap rules for serialization at the current version.
    pub fn new(rules: &'a [Rule]) -> Self {
        Self {
            version: Self::VERSION,
            rules,
        }
    }
}
