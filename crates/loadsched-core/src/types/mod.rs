//! # Core Type Definitions
//!
//! This module contains all core types for the load-shedding schedule model:
//! - Coordinate identifiers (`DayOfMonth`, `Stage`, `Group`)
//! - The composite timeslot key (`TimeSlot`)
//! - The nested schedule mapping (`ScheduleData` and its levels)
//! - Error types (`ScheduleError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Implement `Ord` for deterministic ordering in `BTreeMap`/`BTreeSet`
//! - Compare by exact value; no normalization happens on construction

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use thiserror::Error;

// =============================================================================
// COORDINATE IDENTIFIERS
// =============================================================================

/// Day of the month a schedule column applies to (1..=31 for parsed data).
///
/// No calendar validation is done: day 31 exists for every month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayOfMonth(pub u32);

impl fmt::Display for DayOfMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Load-shedding severity level. Higher stages shed more groups.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Stage(pub u32);

impl Stage {
    /// Stage 0 means no load shedding is in effect.
    pub const NONE: Stage = Stage(0);

    /// The stage immediately below this one, if it is a real shedding stage.
    ///
    /// Stage 1 has no lower stage to inherit from.
    #[must_use]
    pub const fn lower(self) -> Option<Stage> {
        if self.0 > 1 {
            Some(Stage(self.0 - 1))
        } else {
            None
        }
    }

    /// Get the raw stage number.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Identifier of a load-shedding group (zone).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Group(pub u32);

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// =============================================================================
// TIMESLOT
// =============================================================================

/// A `(start, end)` time-of-day interval, kept as the literal `"HH:MM"` labels.
///
/// Equality, hashing and ordering use the exact strings, so `"08:00"` and
/// `"8:00"` are different slots. Render order is decided separately by
/// [`crate::time::time_rank`].
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct TimeSlot {
    /// Start label, e.g. `"06:00"`.
    pub start: String,
    /// End label, e.g. `"08:30"`.
    pub end: String,
}

impl TimeSlot {
    /// Create a new timeslot from its start and end labels.
    #[must_use]
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>5} - {:>5}", self.start, self.end)
    }
}

// =============================================================================
// SCHEDULE DATA
// =============================================================================

/// Groups shed at one `(day, slot, stage)` coordinate.
pub type GroupSet = BTreeSet<Group>;

/// Stage -> groups, for one day and timeslot.
pub type StageGroups = BTreeMap<Stage, GroupSet>;

/// Timeslot -> stages, for one day.
pub type DaySlots = BTreeMap<TimeSlot, StageGroups>;

/// The full four-level mapping: day -> timeslot -> stage -> groups.
///
/// Presence of a `(day, slot, stage, group)` path is the fact that the group
/// is shed in that slot on that day at that stage.
pub type ScheduleData = BTreeMap<DayOfMonth, DaySlots>;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while loading a schedule.
///
/// Either the whole schedule loads or nothing does; there is no partial result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The schedule file is missing, unreadable or not a regular file.
    #[error("I/O error reading {path}: {message}")]
    IoError {
        /// Path that was being read.
        path: String,
        /// Underlying cause.
        message: String,
    },

    /// A stage label or group cell is not a valid integer.
    #[error("Format error on line {line}: {message}")]
    FormatError {
        /// 1-based line number in the input.
        line: usize,
        /// What could not be parsed.
        message: String,
    },
}

impl ScheduleError {
    pub(crate) fn io(path: impl fmt::Display, err: impl fmt::Display) -> Self {
        Self::IoError {
            path: path.to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn format(line: usize, message: impl Into<String>) -> Self {
        Self::FormatError {
            line,
            message: message.into(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
