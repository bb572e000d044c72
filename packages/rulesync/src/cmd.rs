//! Subcommands of the rulesync CLI.

use clap::ValueEnum;
use derive_more::Display;

pub mod docs;
pub mod export;
pub mod import;
pub mod validate;

/// Output format for commands that print rules.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Display)]
pub enum Format {
    /// YAML list of rules.
    #[default]
    #[display("yaml")]
    Yaml,

    /// Pretty-printed JSON array of rules.
    #[display("json")]
    Json,
}
