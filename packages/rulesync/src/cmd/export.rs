//! Write rules into the Active Rules section of a CLAUDE.md document.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use clap::Args;
use color_eyre::eyre::{Context, Result};
use tracing::instrument;

use rulesync::{claude_md, rules};

#[derive(Args, Clone, Debug)]
pub struct Config {
    /// Rule-set file to export.
    /// If not specified, exports the rules from all discoverable rule sets.
    #[arg(long, value_name = "RULESET")]
    pub rules: Option<PathBuf>,

    /// CLAUDE.md document to update. Created if it doesn't exist.
    #[arg(long, default_value = "CLAUDE.md")]
    pub target: PathBuf,

    /// Print the merged document instead of writing it.
    #[arg(long)]
    pub dry_run: bool,
}

#[instrument]
pub fn main(config: Config) -> Result<()> {
    let rules = match &config.rules {
        Some(path) => rules::load_explicit(path).context("load rule set")?,
        None => rules::load_all().context("load rules")?,
    };
    tracing::debug!(count = rules.len(), "loaded rules for export");

    let document = match fs::read_to_string(&config.target) {
        Ok(document) => document,
        Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e).context(format!("read target document: {:?}", config.target)),
    };

    let merged = claude_md::merge(&document, &rules);

    if config.dry_run {
        print!("{merged}");
        return Ok(());
    }

    if merged == document {
        println!("\u{2713} {} is already up to date", config.target.display());
        return Ok(());
    }

    fs::write(&config.target, &merged)
        .with_context(|| format!("write target document: {:?}", config.target))?;
    println!(
        "\u{2713} Wrote {} {} to {}",
        rules.len(),
        if rules.len() == 1 { "rule" } else { "rules" },
        config.target.display()
    );

    Ok(())
}
