//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.
//! Commands write to a caller-supplied writer; errors end the run.

use crate::config::Settings;
use crate::error::AppError;
use crate::status::{LiveStage, StatusClient};
use chrono::Datelike;
use loadsched_core::{DayOfMonth, Group, Schedule, Stage, render::rows};
use std::io::Write;

/// Options of the default (no subcommand) action.
#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    /// Day of month; today when absent.
    pub day: Option<u32>,
    /// Stage; looked up live when absent.
    pub stage: Option<u32>,
    /// Groups to keep; all when empty.
    pub groups: Vec<u32>,
    /// Print `#`-prefixed context lines.
    pub verbose: bool,
    /// Print rows as JSON.
    pub json: bool,
}

// =============================================================================
// SHOW (DEFAULT) COMMAND
// =============================================================================

/// Show the schedule for one stage and day, optionally narrowed to groups.
pub async fn cmd_show<W: Write>(
    settings: &Settings,
    options: &ShowOptions,
    out: &mut W,
) -> Result<(), AppError> {
    let schedule = load_schedule(settings)?;
    let verbose = options.verbose && !options.json;

    let stage = match options.stage {
        Some(stage) => Stage(stage),
        None => match fetch_live_stage(settings).await? {
            LiveStage::NoShedding => {
                tracing::info!("no load shedding in progress");
                if verbose {
                    writeln!(out, "# No load shedding in progress! \\o/")?;
                }
                if options.json {
                    writeln!(out, "[]")?;
                }
                return Ok(());
            }
            LiveStage::Shedding(stage) => stage,
        },
    };
    let schedule = schedule.filter_by_stage(stage);
    if verbose {
        writeln!(out, "# LOAD SHEDDING STAGE: {}", stage)?;
    }

    let day = DayOfMonth(options.day.unwrap_or_else(today));
    if verbose {
        writeln!(out, "# DAY OF MONTH: {}", day)?;
    }
    let mut schedule = schedule.filter_by_day(day);

    if verbose {
        let listed: Vec<String> = options.groups.iter().map(u32::to_string).collect();
        writeln!(out, "# GROUPS: {}", listed.join(", "))?;
    }
    if !options.groups.is_empty() {
        let groups: Vec<Group> = options.groups.iter().copied().map(Group).collect();
        schedule = schedule.filter_by_groups(&groups);
    }

    if verbose {
        writeln!(out, "# TIMESLOTS:")?;
    }
    write_rows(&schedule, options.json, out)
}

// =============================================================================
// PRINT-SCHEDULE COMMAND
// =============================================================================

/// Print the entire unfiltered schedule.
pub fn cmd_print_schedule<W: Write>(
    settings: &Settings,
    json: bool,
    out: &mut W,
) -> Result<(), AppError> {
    let schedule = load_schedule(settings)?;
    write_rows(&schedule, json, out)
}

// =============================================================================
// STATUS COMMAND
// =============================================================================

/// Print the live stage; 0 means no shedding.
pub async fn cmd_status<W: Write>(
    settings: &Settings,
    json: bool,
    out: &mut W,
) -> Result<(), AppError> {
    let live = fetch_live_stage(settings).await?;
    let stage = live.stage();

    if json {
        let output = serde_json::json!({
            "stage": stage.value(),
            "shedding": live != LiveStage::NoShedding,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    } else {
        writeln!(out, "{}", stage)?;
    }

    Ok(())
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Load the configured schedule file.
pub fn load_schedule(settings: &Settings) -> Result<Schedule, AppError> {
    tracing::debug!(file = %settings.schedule_file.display(), "loading schedule");
    Ok(Schedule::from_file(settings.schedule_file.clone())?)
}

/// Query the configured status endpoint once.
pub async fn fetch_live_stage(settings: &Settings) -> Result<LiveStage, AppError> {
    let client = StatusClient::new(settings.status_url.clone(), settings.timeout)?;
    client.fetch_stage().await
}

/// Today's day of the month on the local clock.
fn today() -> u32 {
    chrono::Local::now().day()
}

fn write_rows<W: Write>(schedule: &Schedule, json: bool, out: &mut W) -> Result<(), AppError> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&rows(schedule))?)?;
    } else {
        loadsched_core::write_schedule(schedule, out)?;
    }
    Ok(())
}
