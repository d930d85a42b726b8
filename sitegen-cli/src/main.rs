//! sitegen — generate a one-page site from a few fields and publish it.
//!
//! # Usage
//!
//! ```text
//! sitegen render  [--kind landing|profile] [--name ..] [--description ..] [--color ..] [-f k=v].. [--draft] [-o FILE]
//! sitegen preview [same inputs] [-o FILE]
//! sitegen deploy  [same inputs] --project <name> [--token ..] [--endpoint URL] [--json]
//! sitegen draft set <field> <value> [--kind ..] | unset <field> | show [--json] | clear
//! ```
//!
//! Logging goes to stderr and is controlled by `SITEGEN_LOG` (default `warn`).

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    deploy::DeployArgs, draft::DraftCommand, preview::PreviewArgs, render::RenderArgs,
};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "sitegen",
    version,
    about = "Generate a single-page website from a few fields and deploy it",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the HTML document to stdout or a file.
    Render(RenderArgs),

    /// Write a preview page embedding the site in a sandboxed frame.
    Preview(PreviewArgs),

    /// Render the site and publish it to the deployment API.
    Deploy(DeployArgs),

    /// Manage the saved draft of field values.
    Draft {
        #[command(subcommand)]
        command: DraftCommand,
    },
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_env("SITEGEN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Render(args) => args.run(),
        Commands::Preview(args) => args.run(),
        Commands::Deploy(args) => args.run(),
        Commands::Draft { command } => commands::draft::run(command),
    }
}
