//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use super::commands;
use approvals::output::OutputMode;

/// approvals - review and promote approval-test artifacts
#[derive(Parser, Debug)]
#[command(
    name = "approvals",
    version,
    about = "Review and promote approval-test artifacts",
    long_about = "Approval tests write a received file next to each approved baseline.\n\n\
                  Compare artifacts, list what is waiting for review, and accept\n\
                  received output as the new baseline."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default approvals.toml in the current directory
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Compare a received artifact against an approved one
    Compare {
        /// Received artifact
        received: PathBuf,

        /// Approved artifact
        approved: PathBuf,

        /// Strategy: exact, normalized-text (defaults to the configured one)
        #[arg(short, long)]
        strategy: Option<String>,
    },

    /// List received artifacts and how they compare with their baselines
    Pending {
        /// Directory to scan
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Only include file names matching this glob
        #[arg(short, long)]
        filter: Option<String>,

        /// Strategy: exact, normalized-text (defaults to the configured one)
        #[arg(short, long)]
        strategy: Option<String>,
    },

    /// Promote received artifacts to approved baselines
    Accept {
        /// Received artifacts to accept
        #[arg(required = true)]
        received: Vec<PathBuf>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let passed = match cli.command {
        Some(Command::Init { force }) => commands::init(force, output_mode)?,
        Some(Command::Compare {
            received,
            approved,
            strategy,
        }) => commands::compare(&received, &approved, strategy.as_deref(), output_mode)?,
        Some(Command::Pending {
            root,
            filter,
            strategy,
        }) => commands::pending(&root, filter.as_deref(), strategy.as_deref(), output_mode)?,
        Some(Command::Accept { received }) => commands::accept(&received, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": approvals::VERSION
                    })
                );
            } else {
                println!("approvals v{}", approvals::VERSION);
            }
            true
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": approvals::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("approvals v{}", approvals::VERSION);
                println!("\nRun 'approvals --help' for usage");
                println!("Run 'approvals pending' to review received artifacts");
            }
            true
        },
    };

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
