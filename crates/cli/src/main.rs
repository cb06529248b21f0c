//! Lineup CLI - replay queue scripts and drain priority queues

mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use lineup_core::application::{execute, FailurePolicy, Outcome, Script};
use lineup_core::domain::{Entry, PriorityQueue};
use lineup_core::settings::Settings;
use serde_json::json;
use std::path::PathBuf;
use tabled::{Table, Tabled};
use tracing::info;

#[derive(Parser)]
#[command(name = "lineup")]
#[command(about = "Priority and service queue driver", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: ./lineup.toml when present)
    #[arg(long, env = "LINEUP_CONFIG", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a JSON queue script
    Run {
        /// Path to the script file
        script: PathBuf,

        /// Record failing commands and keep going instead of stopping
        #[arg(long)]
        keep_going: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Enqueue entries, then dequeue until empty
    Drain {
        /// Entry as NAME:PRIORITY (repeatable, higher = served first)
        #[arg(short, long = "entry", required = true)]
        entries: Vec<Entry>,
    },

    /// Show the effective settings
    Config,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Tabled)]
struct ServedRow {
    order: usize,
    name: String,
}

fn print_outcomes(outcomes: &[Outcome], rendered: &str) {
    for outcome in outcomes {
        match outcome {
            Outcome::Rejected { .. } => println!("  {} {}", "✗".red(), outcome.to_string().red()),
            Outcome::Snapshot { .. } => println!("  {} {}", "•".bold(), outcome),
            _ => println!("  {} {}", "✓".green(), outcome),
        }
    }
    println!();
    println!("{} {}", "Queue:".bold(), rendered);
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load configuration
    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;

    // 2. Initialize logging
    logging::init_logging(&settings.log)?;
    info!("Lineup v{} starting", lineup_core::VERSION);

    match cli.command {
        Commands::Run {
            script,
            keep_going,
            format,
        } => {
            let parsed = Script::from_path(&script)
                .with_context(|| format!("Failed to load script {}", script.display()))?;

            let policy = if keep_going {
                FailurePolicy::Continue
            } else {
                FailurePolicy::Stop
            };

            let (outcomes, rendered) = execute(parsed, settings.service.max_size, policy)?;

            match format {
                OutputFormat::Json => {
                    let report = json!({
                        "outcomes": outcomes,
                        "queue": rendered,
                    });
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
                OutputFormat::Text => print_outcomes(&outcomes, &rendered),
            }
        }

        Commands::Drain { entries } => {
            let mut queue: PriorityQueue = entries.into_iter().collect();
            println!("{} {}", "Queue:".bold(), queue);
            println!();

            let mut rows = Vec::with_capacity(queue.len());
            while !queue.is_empty() {
                let name = queue.dequeue()?;
                rows.push(ServedRow {
                    order: rows.len() + 1,
                    name,
                });
            }

            println!("{}", "✓ Drained in priority order".green().bold());
            println!("{}", Table::new(rows));
        }

        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
    }

    Ok(())
}
