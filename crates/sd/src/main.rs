//! SD CLI - Site declaration tool.
//!
//! Provides commands for:
//! - `check`: Load and validate the site declaration
//! - `sidebar`: Print the sidebar navigation tree
//! - `export`: Print the declaration as generator-facing JSON

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ExportArgs, SidebarArgs};
use output::Output;

/// SD - Site declaration tool.
#[derive(Parser)]
#[command(name = "sd", version, about)]
struct Cli {
    /// Enable verbose output (show loading and discovery logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the site declaration.
    Check(CheckArgs),
    /// Print the sidebar navigation tree.
    Sidebar(SidebarArgs),
    /// Export the declaration as JSON.
    Export(ExportArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(cli.verbose, rust_log.as_deref());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Sidebar(args) => args.execute(),
        Commands::Export(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

/// Log filter: `--verbose` enables DEBUG, otherwise `RUST_LOG` directives,
/// falling back to WARN when they are unset, empty or malformed.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}
