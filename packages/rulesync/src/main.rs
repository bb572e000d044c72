//! rulesync keeps the rules in your CLAUDE.md files in sync with rule sets.

use color_eyre::{Result, Section};
use tracing::{instrument, level_filters::LevelFilter};

mod cmd;

use clap::{Parser, Subcommand};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// rulesync keeps CLAUDE.md rules in sync with rule sets.
#[derive(Parser)]
#[command(author, version = env!("RULESYNC_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import rules from a CLAUDE.md document.
    Import(cmd::import::Config),

    /// Write rules into the Active Rules section of a CLAUDE.md document.
    Export(cmd::export::Config),

    /// Validate rule-set files.
    Validate(cmd::validate::Config),

    /// Show documentation for the CLAUDE.md rule format and rule sets.
    Docs(cmd::docs::Config),
}

#[instrument]
fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    // stdout carries command output (YAML, JSON, merged documents), so logs
    // go to stderr and only errors are shown unless `RULESYNC_LOG` says
    // otherwise.
    //
    // Examples:
    // - `RULESYNC_LOG=trace` to see every parser decision
    // - `RULESYNC_LOG=debug` to see loaded rule sets and merge ranges
    // - `RULESYNC_LOG=error` to log only errors (this is the default)
    tracing_subscriber::registry()
        .with(ErrorLayer::default())
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_level(true)
                .with_file(true)
                .with_line_number(true)
                .with_target(true)
                .with_thread_ids(true)
                .with_thread_names(true)
                .pretty(),
        )
        .with(
            EnvFilter::builder()
                .with_env_var("RULESYNC_LOG")
                .with_default_directive(LevelFilter::ERROR.into())
                .from_env_lossy(),
        )
        .init();

    match cli.command {
        Commands::Import(config) => cmd::import::main(config),
        Commands::Export(config) => cmd::export::main(config),
        Commands::Validate(config) => cmd::validate::main(config),
        Commands::Docs(config) => cmd::docs::main(config),
    }
    .suggestion("Run `rulesync docs` for documentation on the CLAUDE.md rule format and rule sets.")
}
