//! `nbindex` — query a generated export index from the command line.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use nbindex::{Snapshot, SymbolLocator};

#[derive(Parser)]
#[command(name = "nbindex", version, about = "Query the notebook export index")]
struct Cli {
    /// Snapshot file to query (.toml or .json); defaults to the embedded one
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    /// Emit machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show which notebook defines a symbol
    Lookup {
        symbol: String,
    },

    /// List compiled modules in generation order
    Modules,

    /// Print the documentation link for a symbol
    DocLink {
        symbol: String,
    },

    /// Print the repository source link for a symbol
    SourceLink {
        symbol: String,
    },

    /// Print the documentation and repository roots
    Urls,

    /// Report index entries whose compiled module is missing from the module list
    Check,
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    let owned;
    let locator = match &cli.snapshot {
        Some(path) => {
            owned = SymbolLocator::new(
                Snapshot::load(path)
                    .with_context(|| format!("failed to load snapshot {}", path.display()))?,
            );
            &owned
        }
        None => SymbolLocator::builtin(),
    };

    let code = match cli.command {
        Command::Lookup { symbol } => commands::cmd_lookup(locator, &symbol, cli.json),
        Command::Modules => commands::cmd_modules(locator, cli.json),
        Command::DocLink { symbol } => commands::cmd_doc_link(locator, &symbol, cli.json),
        Command::SourceLink { symbol } => commands::cmd_source_link(locator, &symbol, cli.json),
        Command::Urls => commands::cmd_urls(locator, cli.json),
        Command::Check => commands::cmd_check(locator, cli.json),
    };
    Ok(code)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::from(2)
        }
    }
}
