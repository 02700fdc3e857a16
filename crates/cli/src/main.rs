//! intrasync - intranet class schedule tool
//!
//! Usage:
//!   intrasync extract --input page.html          List the events on a saved page
//!   intrasync extract --input page.html --json   Print them as JSON
//!   intrasync export --input page.html           Write an iCalendar file
//!   intrasync sync --input page.html             Push them to Google Calendar

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use intrasync_infra::config;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::commands::PageArgs;

#[derive(Parser)]
#[command(name = "intrasync")]
#[command(about = "Extract intranet class schedules, export them to iCalendar and sync them")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (TOML or JSON); probed when omitted
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List the events found on a saved intranet page
    Extract {
        #[command(flatten)]
        page: PageArgs,

        /// Print events as JSON instead of a listing
        #[arg(long)]
        json: bool,
    },
    /// Write the events to an iCalendar (.ics) file
    Export {
        #[command(flatten)]
        page: PageArgs,

        /// Output file; defaults to the configured export path
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Create the events in Google Calendar, skipping ones already there
    Sync {
        #[command(flatten)]
        page: PageArgs,

        /// Remote calendar name; defaults to the configured name
        #[arg(long, value_name = "NAME")]
        calendar: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(error) => debug!(%error, "no .env file loaded"),
    }

    match run(cli).await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let mut app_config =
        config::load(cli.config.as_deref()).context("failed to load configuration")?;

    match cli.command {
        Commands::Extract { page, json } => commands::extract(&app_config, &page, json),
        Commands::Export { page, output } => commands::export(&app_config, &page, output),
        Commands::Sync { page, calendar } => {
            if let Some(name) = calendar {
                app_config.sync.calendar_name = name;
            }
            commands::sync(&app_config, &page).await
        }
    }
}

/// Logs go to stderr so `extract --json` output stays parseable.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("warn,intrasync=debug,intrasync_core=debug,intrasync_infra=debug"),
        _ => EnvFilter::new("debug,intrasync=trace,intrasync_core=trace,intrasync_infra=trace"),
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
