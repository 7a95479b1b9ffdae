//! # loadsched-core
//!
//! The load-shedding schedule model - THE MODEL.
//!
//! Answers "when is my power scheduled to be cut" from a static monthly
//! timetable: a four-level lookup of day -> timeslot -> stage -> groups.
//!
//! ## Pipeline
//!
//! ```text
//! text ──parse──▶ Schedule ──filter_by_stage──▶ ──filter_by_day──▶ ──filter_by_groups──▶ rows
//! ```
//!
//! - `parser` reads the tabular text and applies the stage cascade: every
//!   group shed at stage N-1 is also shed at stage N
//! - `schedule` owns the data; filters return new, independent copies
//! - `render` prints in a stable order
//!
//! ## Architectural Constraints
//!
//! - No async, no network dependencies (pure Rust)
//! - BTreeMap/BTreeSet only, so output never depends on hash order
//! - A loaded schedule is never mutated by a filter

// =============================================================================
// MODULES
// =============================================================================

pub mod parser;
pub mod primitives;
pub mod render;
pub mod schedule;
pub mod time;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    DayOfMonth, DaySlots, Group, GroupSet, ScheduleData, ScheduleError, Stage, StageGroups,
    TimeSlot,
};

// =============================================================================
// RE-EXPORTS: Model
// =============================================================================

pub use parser::{Line, classify_line, parse_schedule};
pub use render::{ScheduleRow, render_lines, rows, write_schedule};
pub use schedule::Schedule;
pub use time::time_rank;
