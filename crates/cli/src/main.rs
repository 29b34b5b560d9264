//! relnotes CLI — the main entry point.
//!
//! Commands:
//! - `generate` — Render a Markdown changelog from an issues JSON file
//! - `sections` — Show the effective changelog sections

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod render;

#[derive(Parser)]
#[command(
    name = "relnotes",
    about = "relnotes — label-driven changelog generator",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to $RELNOTES_CONFIG or ./relnotes.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a changelog from a JSON array of issues
    Generate {
        /// Path to the issues JSON file
        #[arg(short, long)]
        issues: PathBuf,

        /// Write the changelog here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the changelog sections in effect
    Sections,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing (stderr, so stdout carries only the changelog)
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Generate { issues, output } => {
            commands::generate::run(config_path, &issues, output.as_deref())?
        }
        Commands::Sections => commands::sections::run(config_path)?,
    }

    Ok(())
}
