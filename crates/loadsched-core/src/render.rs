//! # Renderer Module
//!
//! Deterministic text output for a (possibly filtered) [`Schedule`].
//!
//! Ordering:
//! - days ascending
//! - timeslots by [`time_rank`] of the start label; equal ranks keep the
//!   slot table's own order
//! - stages ascending
//! - groups ascending
//!
//! `(day, slot, stage)` entries with no groups produce no row.

use crate::schedule::Schedule;
use crate::time::time_rank;
use crate::{DayOfMonth, Group, Stage, TimeSlot};
use serde::Serialize;
use std::fmt;
use std::io;

/// One printable schedule line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRow {
    /// Day of month.
    pub day: DayOfMonth,
    /// Stage the groups are shed at.
    pub stage: Stage,
    /// Timeslot, flattened into `start`/`end` when serialized.
    #[serde(flatten)]
    pub slot: TimeSlot,
    /// Shed groups, ascending, never empty.
    pub groups: Vec<Group>,
}

impl fmt::Display for ScheduleRow {
    /// `" 1 2 06:00 - 08:30: 1, 2"`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>2} {} {}: ", self.day, self.stage, self.slot)?;
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{group}")?;
        }
        Ok(())
    }
}

/// Collect the rows of `schedule` in render order.
#[must_use]
pub fn rows(schedule: &Schedule) -> Vec<ScheduleRow> {
    let mut out = Vec::new();

    for (day, slots) in schedule.data() {
        let mut ordered: Vec<_> = slots.iter().collect();
        ordered.sort_by_key(|(slot, _)| time_rank(&slot.start));

        for (slot, stages) in ordered {
            for (stage, groups) in stages {
                if groups.is_empty() {
                    continue;
                }
                out.push(ScheduleRow {
                    day: *day,
                    stage: *stage,
                    slot: slot.clone(),
                    groups: groups.iter().copied().collect(),
                });
            }
        }
    }

    out
}

/// Render `schedule` as text lines, one per row.
#[must_use]
pub fn render_lines(schedule: &Schedule) -> Vec<String> {
    rows(schedule).iter().map(ToString::to_string).collect()
}

/// Write every rendered line of `schedule` to `out`, newline-terminated.
pub fn write_schedule<W: io::Write>(schedule: &Schedule, out: &mut W) -> io::Result<()> {
    for row in rows(schedule) {
        writeln!(out, "{row}")?;
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
