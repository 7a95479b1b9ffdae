//! # Format Primitives
//!
//! Fixed constants of the schedule text format.
//!
//! These are compiled into the binary and are immutable at runtime.
//!
//! ## Line Shapes
//!
//! 1. **Comment**: starts with [`COMMENT_PREFIX`].
//! 2. **Timeslot header**: [`TIMESLOT_HEADER_FIELDS`] fields, `start|end`.
//! 3. **Stage row**: [`STAGE_ROW_FIELDS`] fields, a `Stage<N>` label and one
//!    group number per day-of-month column.
//!
//! Every other line is ignored.

/// Lines starting with this character are comments.
pub const COMMENT_PREFIX: char = '#';

/// Field separator. Whitespace around it is not significant.
pub const FIELD_DELIMITER: char = '|';

/// Literal prefix of a stage row label, e.g. `Stage4`.
pub const STAGE_LABEL_PREFIX: &str = "Stage";

/// Number of day-of-month columns in a stage row.
///
/// Every month gets 31 columns; short months carry whatever the file has.
pub const DAYS_PER_ROW: usize = 31;

/// Number of non-empty fields in a timeslot header line.
pub const TIMESLOT_HEADER_FIELDS: usize = 2;

/// Number of non-empty fields in a stage row: the label plus one per day.
pub const STAGE_ROW_FIELDS: usize = 1 + DAYS_PER_ROW;

/// Separator between a time label's hour and minute parts.
pub const TIME_SEPARATOR: char = ':';

// =============================================================================
// INPUT VALIDATION LIMITS
// =============================================================================

/// Maximum schedule file size (16 MiB).
///
/// A full monthly timetable is a few kilobytes; anything this large is not a
/// schedule file.
pub const MAX_SCHEDULE_FILE_SIZE: u64 = 16 * 1024 * 1024;
