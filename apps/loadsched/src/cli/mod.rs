//! # loadsched CLI Module
//!
//! This module implements the CLI interface for loadsched.
//!
//! ## Available Commands
//!
//! - (none) - Show today's schedule for the active stage
//! - `print-schedule` - Print the entire schedule
//! - `status` - Show the live load shedding stage

mod commands;

use crate::config::{Overrides, Settings};
use crate::error::AppError;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// loadsched - Load shedding schedule tool
///
/// Combines a monthly load shedding timetable with the live stage to show
/// when your power is scheduled to be cut.
#[derive(Parser, Debug)]
#[command(name = "loadsched")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Print verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// File to read schedule from [default: schedule.txt]
    #[arg(short = 'f', long = "filename", global = true)]
    pub filename: Option<PathBuf>,

    /// Configuration file [default: ./loadsched.toml if present]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Status endpoint queried when no stage is given
    #[arg(long, global = true)]
    pub status_url: Option<String>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json: bool,

    /// Day of month to show schedule for [default: today]
    #[arg(short, long)]
    pub day: Option<u32>,

    /// Schedule for this stage only. If not given, it is queried live.
    #[arg(short, long)]
    pub stage: Option<u32>,

    /// Filter on specified groups (repeat or comma-separate)
    #[arg(short = 'g', long = "group", value_delimiter = ',')]
    pub groups: Vec<u32>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the entire schedule
    PrintSchedule,

    /// Show the live load shedding stage
    Status,
}

impl Cli {
    /// Settings overrides carried by the global flags.
    #[must_use]
    pub fn overrides(&self) -> Overrides {
        Overrides {
            config: self.config.clone(),
            schedule_file: self.filename.clone(),
            status_url: self.status_url.clone(),
        }
    }

    /// Options for the default action.
    #[must_use]
    pub fn show_options(&self) -> ShowOptions {
        ShowOptions {
            day: self.day,
            stage: self.stage,
            groups: self.groups.clone(),
            verbose: self.verbose,
            json: self.json,
        }
    }
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments, writing results to `out`.
pub async fn execute<W: Write>(cli: Cli, out: &mut W) -> Result<(), AppError> {
    let settings = Settings::from_env(&cli.overrides())?;
    run(&cli, &settings, out).await
}

/// Execute the CLI against already-resolved settings.
pub async fn run<W: Write>(cli: &Cli, settings: &Settings, out: &mut W) -> Result<(), AppError> {
    match cli.command {
        Some(Commands::PrintSchedule) => cmd_print_schedule(settings, cli.json, out),
        Some(Commands::Status) => cmd_status(settings, cli.json, out).await,
        None => cmd_show(settings, &cli.show_options(), out).await,
    }
}
