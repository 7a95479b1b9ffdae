//! # Parser Module
//!
//! Converts the tabular schedule text into [`ScheduleData`].
//!
//! - Classify each line as comment, timeslot header, stage row or noise
//! - Reject stage rows whose label or group cells are not integers
//! - Apply the stage cascade in a single forward pass
//! - No whole-document validation

use crate::primitives::{
    COMMENT_PREFIX, FIELD_DELIMITER, STAGE_LABEL_PREFIX, STAGE_ROW_FIELDS, TIMESLOT_HEADER_FIELDS,
};
use crate::{DayOfMonth, Group, GroupSet, ScheduleData, ScheduleError, Stage, TimeSlot};

/// One classified input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// `# ...`
    Comment,
    /// `start|end`: becomes the current timeslot for following stage rows.
    Timeslot(TimeSlot),
    /// `Stage<N>|g1|...|g31`: one group per day-of-month column, day 1 first.
    StageRow {
        /// Parsed stage number.
        stage: Stage,
        /// Group numbers for days 1..=31.
        groups: Vec<Group>,
    },
    /// Any other shape. Skipped without error.
    Ignored,
}

/// Split a line on the delimiter, trimming each field and dropping empty ones.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(FIELD_DELIMITER)
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .collect()
}

/// Classify a single line. `line_no` is 1-based and only used for errors.
pub fn classify_line(line: &str, line_no: usize) -> Result<Line, ScheduleError> {
    if line.starts_with(COMMENT_PREFIX) {
        return Ok(Line::Comment);
    }

    let fields = split_fields(line);
    match fields.len() {
        TIMESLOT_HEADER_FIELDS => Ok(Line::Timeslot(TimeSlot::new(fields[0], fields[1]))),
        STAGE_ROW_FIELDS => {
            let stage = parse_stage_label(fields[0], line_no)?;
            let groups = fields[1..]
                .iter()
                .enumerate()
                .map(|(column, cell)| parse_group_cell(cell, column + 1, line_no))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Line::StageRow { stage, groups })
        }
        _ => Ok(Line::Ignored),
    }
}

/// Only a leading `Stage` is stripped, so `1Stage` is rejected.
fn parse_stage_label(label: &str, line_no: usize) -> Result<Stage, ScheduleError> {
    let number = label.strip_prefix(STAGE_LABEL_PREFIX).unwrap_or(label);
    number
        .parse()
        .map(Stage)
        .map_err(|_| ScheduleError::format(line_no, format!("invalid stage label {label:?}")))
}

fn parse_group_cell(cell: &str, day: usize, line_no: usize) -> Result<Group, ScheduleError> {
    cell.parse().map(Group).map_err(|_| {
        ScheduleError::format(line_no, format!("invalid group {cell:?} for day {day}"))
    })
}

/// Parse a whole schedule document.
///
/// Stage rows are applied in file order. Each `(day, slot, stage)` set also
/// receives every group already recorded for `stage - 1` at that moment, so
/// rows must arrive in increasing stage order within a timeslot block for the
/// cascade to hold. Out-of-order input is not detected.
///
/// Stage rows seen before any header use the empty timeslot `("", "")`.
///
/// Returns `ScheduleError::FormatError` on the first bad stage label or group
/// cell; nothing is returned for the rest of the document.
pub fn parse_schedule(contents: &str) -> Result<ScheduleData, ScheduleError> {
    let mut data = ScheduleData::new();
    let mut current = TimeSlot::default();
    let mut stage_rows = 0usize;

    for (index, raw) in contents.split('\n').enumerate() {
        let line_no = index + 1;
        let line = raw.strip_suffix('\r').unwrap_or(raw);

        match classify_line(line, line_no)? {
            Line::Comment => {}
            Line::Timeslot(slot) => current = slot,
            Line::StageRow { stage, groups } => {
                apply_stage_row(&mut data, &current, stage, &groups);
                stage_rows += 1;
            }
            Line::Ignored => {
                if !line.trim().is_empty() {
                    tracing::trace!(line = line_no, "ignoring unrecognised schedule line");
                }
            }
        }
    }

    tracing::debug!(stage_rows, days = data.len(), "parsed schedule");

    Ok(data)
}

/// Record one stage row under `slot`, cascading from the stage below.
fn apply_stage_row(data: &mut ScheduleData, slot: &TimeSlot, stage: Stage, groups: &[Group]) {
    for (column, &group) in groups.iter().enumerate() {
        let day = DayOfMonth(column as u32 + 1);
        let stages = data.entry(day).or_default().entry(slot.clone()).or_default();

        let inherited: GroupSet = stage
            .lower()
            .and_then(|lower| stages.get(&lower))
            .cloned()
            .unwrap_or_default();

        let set = stages.entry(stage).or_default();
        set.insert(group);
        set.extend(inherited);
    }
}

// =============================================================================
// TESTS
// =============================================================================
