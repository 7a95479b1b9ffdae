//! # Schedule Store
//!
//! Owns a parsed [`ScheduleData`] together with the file it came from.
//!
//! A schedule is populated once and then only read. Every filter builds a
//! fresh nested mapping and returns a new [`Schedule`] carrying the same file
//! name, so filters can be chained (stage -> day -> groups) without touching
//! the original.

use crate::parser::parse_schedule;
use crate::primitives::MAX_SCHEDULE_FILE_SIZE;
use crate::{
    DayOfMonth, DaySlots, Group, GroupSet, ScheduleData, ScheduleError, Stage, StageGroups,
    TimeSlot,
};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// A load-shedding timetable and the file it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    file_name: PathBuf,
    data: ScheduleData,
}

impl Schedule {
    /// Create an empty schedule bound to `file_name`. Nothing is read yet.
    #[must_use]
    pub fn new(file_name: impl Into<PathBuf>) -> Self {
        Self {
            file_name: file_name.into(),
            data: ScheduleData::new(),
        }
    }

    /// Create a schedule from already-parsed data.
    #[must_use]
    pub fn with_data(file_name: impl Into<PathBuf>, data: ScheduleData) -> Self {
        Self {
            file_name: file_name.into(),
            data,
        }
    }

    /// Parse `contents` as the schedule for `file_name`.
    pub fn from_contents(
        file_name: impl Into<PathBuf>,
        contents: &str,
    ) -> Result<Self, ScheduleError> {
        Ok(Self::with_data(file_name, parse_schedule(contents)?))
    }

    /// Read and parse the schedule file at `path`.
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, ScheduleError> {
        let mut schedule = Self::new(path);
        schedule.load()?;
        Ok(schedule)
    }

    /// Read the bound file and replace the data with its parsed contents.
    ///
    /// On error the current data is left as it was.
    pub fn load(&mut self) -> Result<(), ScheduleError> {
        let contents = read_schedule_file(&self.file_name)?;
        self.data = parse_schedule(&contents)?;
        tracing::debug!(
            file = %self.file_name.display(),
            days = self.data.len(),
            "loaded schedule"
        );
        Ok(())
    }

    /// The file this schedule was (or will be) read from.
    #[must_use]
    pub fn file_name(&self) -> &Path {
        &self.file_name
    }

    /// The nested day -> slot -> stage -> groups mapping.
    #[must_use]
    pub fn data(&self) -> &ScheduleData {
        &self.data
    }

    /// Consume the schedule, returning its data.
    #[must_use]
    pub fn into_data(self) -> ScheduleData {
        self.data
    }

    /// True when no group is recorded anywhere.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data
            .values()
            .flat_map(|slots| slots.values())
            .flat_map(|stages| stages.values())
            .all(BTreeSet::is_empty)
    }

    /// Groups recorded at one exact coordinate.
    #[must_use]
    pub fn groups_at(&self, day: DayOfMonth, slot: &TimeSlot, stage: Stage) -> Option<&GroupSet> {
        self.data.get(&day)?.get(slot)?.get(&stage)
    }

    // =========================================================================
    // FILTERS
    // =========================================================================

    /// Keep only `day`.
    ///
    /// The result always has exactly one day key. A day with no data maps to
    /// an empty slot table rather than being an error.
    #[must_use]
    pub fn filter_by_day(&self, day: DayOfMonth) -> Schedule {
        let mut filtered = ScheduleData::new();
        filtered.insert(day, self.data.get(&day).cloned().unwrap_or_default());
        self.derive(filtered)
    }

    /// Keep only `stage` in every day and timeslot.
    ///
    /// Every day and timeslot of the source is kept. Where the stage has no
    /// recorded groups the result holds an empty set for it.
    #[must_use]
    pub fn filter_by_stage(&self, stage: Stage) -> Schedule {
        let filtered: ScheduleData = self
            .data
            .iter()
            .map(|(day, slots)| {
                let slots: DaySlots = slots
                    .iter()
                    .map(|(slot, stages)| {
                        let groups = stages.get(&stage).cloned().unwrap_or_default();
                        let kept: StageGroups = [(stage, groups)].into_iter().collect();
                        (slot.clone(), kept)
                    })
                    .collect();
                (*day, slots)
            })
            .collect();
        self.derive(filtered)
    }

    /// Keep only the requested groups.
    ///
    /// Unlike the other filters, containers left empty are pruned: a day,
    /// timeslot or stage only appears if at least one requested group is
    /// shed there.
    #[must_use]
    pub fn filter_by_groups(&self, groups: &[Group]) -> Schedule {
        let wanted: GroupSet = groups.iter().copied().collect();
        let mut filtered = ScheduleData::new();

        for (day, slots) in &self.data {
            for (slot, stages) in slots {
                for (stage, shed) in stages {
                    let hits: GroupSet = shed.intersection(&wanted).copied().collect();
                    if hits.is_empty() {
                        continue;
                    }
                    filtered
                        .entry(*day)
                        .or_default()
                        .entry(slot.clone())
                        .or_default()
                        .insert(*stage, hits);
                }
            }
        }

        self.derive(filtered)
    }

    fn derive(&self, data: ScheduleData) -> Schedule {
        Schedule::with_data(self.file_name.clone(), data)
    }
}

/// Read a schedule file after checking it is a regular file of sane size.
fn read_schedule_file(path: &Path) -> Result<String, ScheduleError> {
    let display = path.display();
    let metadata = std::fs::metadata(path).map_err(|e| ScheduleError::io(&display, e))?;

    if !metadata.is_file() {
        return Err(ScheduleError::io(&display, "not a regular file"));
    }

    if metadata.len() > MAX_SCHEDULE_FILE_SIZE {
        return Err(ScheduleError::io(
            &display,
            format!(
                "file size {} bytes exceeds maximum allowed {} bytes",
                metadata.len(),
                MAX_SCHEDULE_FILE_SIZE
            ),
        ));
    }

    std::fs::read_to_string(path).map_err(|e| ScheduleError::io(&display, e))
}

// =============================================================================
// TESTS
// =============================================================================
