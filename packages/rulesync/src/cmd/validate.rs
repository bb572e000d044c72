//! Validate rule-set files.
//!
//! Every rule set is parsed and every rule is checked for problems that would
//! stop it from surviving an export to CLAUDE.md and a re-import. Exits with a
//! non-zero status if any rule has a problem.

use std::path::{Path, PathBuf};
use std::process;

use clap::Args;
use color_eyre::eyre::{Context, Result};
use tracing::instrument;

use rulesync::rules::{self, Problem, Rule};

#[derive(Args, Clone, Debug)]
pub struct Config {
    /// Path to a specific rule-set file to validate.
    /// If not specified, validates all discoverable rule sets.
    pub path: Option<PathBuf>,
}

/// A problem found in a rule.
#[derive(Debug)]
struct Issue<'a> {
    /// The rule set containing the rule.
    source: &'a Path,

    /// 1-indexed position of the rule within its rule set.
    index: usize,

    /// The rule with the problem.
    rule: &'a Rule,

    /// What is wrong with it.
    problem: Problem,
}

#[instrument]
pub fn main(config: Config) -> Result<()> {
    let rule_sets = match config.path {
        Some(path) => {
            let rules = rules::load_explicit(&path).context("parse rule set")?;
            vec![(path, rules)]
        }
        None => rules::load_all_attributed().context("load rules")?,
    };

    let issues = rule_sets
        .iter()
        .flat_map(|(source, rules)| {
            rules.iter().enumerate().flat_map(move |(i, rule)| {
                rule.problems().into_iter().map(move |problem| Issue {
                    source,
                    index: i + 1,
                    rule,
                    problem,
                })
            })
        })
        .collect::<Vec<_>>();

    if issues.is_empty() {
        print_success(&rule_sets)
    } else {
        print_failure(&issues);
        process::exit(1);
    }
}

/// Print each rule set and the rules it contains.
fn print_success(rule_sets: &[(PathBuf, Vec<Rule>)]) -> Result<()> {
    for (source, rules) in rule_sets {
        let yaml = serde_yaml::to_string(rules).context("serialize rules")?;
        println!("Rule set: {}", source.display());
        println!("{yaml}");
        println!("------");
        println!();
    }

    let total = rule_sets.iter().map(|(_, rules)| rules.len()).sum::<usize>();
    println!(
        "\u{2713} Validated {} {}",
        total,
        if total == 1 { "rule" } else { "rules" }
    );

    Ok(())
}

/// Print every issue, grouped in rule-set order.
fn print_failure(issues: &[Issue<'_>]) {
    println!(
        "\u{2717} Found {} {}",
        issues.len(),
        if issues.len() == 1 { "issue" } else { "issues" }
    );
    println!();

    for issue in issues {
        println!(
            "{} rule #{} [{}]",
            issue.source.display(),
            issue.index,
            issue.rule
        );
        println!("  {}", issue.problem);
        println!();
    }
}
