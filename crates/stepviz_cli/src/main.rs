//! Stepviz - record, inspect, and play algorithm traces
//!
//! A terminal front end over the scenario catalog:
//! - List the catalog and show a scenario's reference listing
//! - Export a recorded trace as JSON for other tools
//! - Play a trace step by step at a configurable speed

mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Record and play algorithm traces from the terminal
#[derive(Parser, Debug)]
#[command(name = "stepviz")]
#[command(about = "Record, inspect, and play algorithm traces")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the scenario catalog
    List,
    /// Show a scenario's reference listing and step count
    Show {
        /// Scenario name, as printed by `list`
        name: String,
    },
    /// Record a scenario and write its trace as JSON
    Export {
        /// Scenario name, as printed by `list`
        name: String,
        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Play a trace step by step in the terminal
    Play {
        /// Scenario to record and play
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        name: Option<String>,
        /// Play a previously exported trace file instead
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,
        /// Milliseconds per step at speed 1.0
        #[arg(long, default_value_t = 500)]
        interval_ms: u64,
        /// Speed multiplier, larger is faster
        #[arg(long, default_value_t = 1.0)]
        speed: f64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::List => commands::list(),
        Command::Show { name } => commands::show(&name),
        Command::Export {
            name,
            output,
            pretty,
        } => commands::export(&name, output.as_deref(), pretty),
        Command::Play {
            name,
            file,
            interval_ms,
            speed,
        } => commands::play(name.as_deref(), file.as_deref(), interval_ms, speed).await,
    }
}
