//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use crate::cli::commands;
use crate::output::OutputMode;

/// skillkit - Build and manage voice skill projects
#[derive(Parser, Debug)]
#[command(
    name = "skillkit",
    version,
    about = "Build and manage voice skill projects",
    long_about = "Manage voice skill projects against the skill-management service.\n\n\
                  upgrade-project migrates a legacy (v1) project to the v2 layout:\n\
                  the v1 tree moves into legacy/, a fresh skeleton is generated, and\n\
                  the skill package is re-imported from the service."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable, non-interactive)
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Upgrade a v1 skill project to the v2 structure
    UpgradeProject {
        /// Profile to run under (defaults to $SKILLKIT_PROFILE, then "default")
        #[arg(short, long)]
        profile: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Log requests to the skill-management service
        #[arg(long)]
        debug: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let debug = matches!(
        &cli.command,
        Some(Command::UpgradeProject { debug: true, .. })
    );
    if cli.verbose || debug {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::UpgradeProject { profile, yes, .. }) => {
            commands::upgrade_project(profile.as_deref(), yes, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("skillkit v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("skillkit v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'skillkit --help' for usage");
                println!("Run 'skillkit upgrade-project' at a v1 project root to migrate it");
            }
            Ok(())
        },
    }
}
