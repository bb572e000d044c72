//! Import rules from a CLAUDE.md document.

use std::path::PathBuf;

use clap::Args;
use color_eyre::eyre::{Context, Result};
use tracing::instrument;

use rulesync::{claude_md, rules};

use super::Format;

#[derive(Args, Clone, Debug)]
pub struct Config {
    /// Path to the CLAUDE.md document to import.
    pub path: PathBuf,

    /// Format for printing the imported rules.
    #[arg(long, value_enum, default_value_t = Format::Yaml)]
    pub format: Format,

    /// Save the imported rules to this rule-set file instead of printing them.
    #[arg(long, value_name = "RULESET")]
    pub write: Option<PathBuf>,
}

#[instrument]
pub fn main(config: Config) -> Result<()> {
    let rules = claude_md::parse(&config.path)
        .with_context(|| format!("read CLAUDE.md: {:?}", config.path))?;
    tracing::debug!(count = rules.len(), "imported rules");

    if let Some(target) = &config.write {
        rules::save_to(target, &rules).context("save imported rules")?;
        println!(
            "\u{2713} Imported {} {} from {} into {}",
            rules.len(),
            if rules.len() == 1 { "rule" } else { "rules" },
            config.path.display(),
            target.display()
        );
        return Ok(());
    }

    let output = match config.format {
        Format::Yaml => serde_yaml::to_string(&rules).context("serialize rules as yaml")?,
        Format::Json => serde_json::to_string_pretty(&rules).context("serialize rules as json")?,
    };
    println!("{output}");

    Ok(())
}
