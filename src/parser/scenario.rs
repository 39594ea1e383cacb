//! Scenario assembly: one worksheet → activities and steps

use crate::config::ScriptLayout;
use crate::error::{ScriptError, ScriptResult, ValidationError, ValidationKind};
use crate::excel::{Cell, CellAddress, Worksheet};
use crate::text;
use crate::types::{Activity, Step, TestCase};
use std::collections::HashSet;
use tracing::debug;

/// Where the row walk stands within a scenario
#[derive(Debug)]
enum GroupingState {
    /// No activity seen yet; the next row must open one
    NoActivityOpen,
    /// `current` indexes the activity receiving continuation rows;
    /// `seen` holds every raw activity name used so far
    ActivityOpen {
        current: usize,
        seen: HashSet<String>,
    },
}

/// Groups the rows of one scenario into activities, validating activity
/// cells as it goes
struct ActivityGrouper<'a> {
    file: &'a str,
    scenario: &'a str,
    state: GroupingState,
    activities: Vec<Activity>,
}

impl<'a> ActivityGrouper<'a> {
    fn new(file: &'a str, scenario: &'a str) -> Self {
        Self {
            file,
            scenario,
            state: GroupingState::NoActivityOpen,
            activities: Vec::new(),
        }
    }

    /// Validate the row's activity cell, open a new activity when it names
    /// one, then file the row as a step of the current activity
    fn push_row(&mut self, row: &[Cell]) -> ScriptResult<()> {
        let activity_cell = row.first().ok_or_else(|| {
            ScriptError::Format(format!(
                "Empty step row in scenario '{}' of {}",
                self.scenario, self.file
            ))
        })?;
        let value = activity_cell.value.as_str();

        if text::is_space_only(value) {
            return Err(self.violation(activity_cell, ValidationKind::SpaceOnlyName));
        }
        if value != text::trim_non_printable(value) {
            return Err(self.violation(
                activity_cell,
                ValidationKind::ProblematicName {
                    name: value.to_string(),
                },
            ));
        }

        let current = if text::is_blank(value) {
            match &self.state {
                GroupingState::NoActivityOpen => {
                    return Err(self.violation(activity_cell, ValidationKind::MissingFirstActivity))
                }
                GroupingState::ActivityOpen { current, .. } => *current,
            }
        } else {
            self.open_activity(activity_cell)?
        };

        let values = row.iter().map(|cell| cell.value.clone()).collect();
        self.activities[current].steps.push(Step::new(
            activity_cell.address.row_number(),
            current,
            values,
        ));
        Ok(())
    }

    fn open_activity(&mut self, cell: &Cell) -> ScriptResult<usize> {
        let raw = cell.value.as_str();

        let mut seen = match std::mem::replace(&mut self.state, GroupingState::NoActivityOpen) {
            GroupingState::NoActivityOpen => HashSet::new(),
            GroupingState::ActivityOpen { current, seen } => {
                if seen.contains(raw) {
                    self.state = GroupingState::ActivityOpen { current, seen };
                    return Err(self.violation(
                        cell,
                        ValidationKind::DuplicateName {
                            name: raw.to_string(),
                        },
                    ));
                }
                seen
            }
        };
        seen.insert(raw.to_string());

        let name = text::to_single_line(raw, true)?;
        debug!(scenario = %self.scenario, cell = %cell.address, activity = %name, "activity opened");
        self.activities.push(Activity::new(
            name,
            raw.to_string(),
            self.scenario,
            cell.address.row_number(),
        ));

        let current = self.activities.len() - 1;
        self.state = GroupingState::ActivityOpen { current, seen };
        Ok(current)
    }

    fn violation(&self, cell: &Cell, kind: ValidationKind) -> ScriptError {
        ValidationError::new(self.file, self.scenario, cell.reference(), kind).into()
    }

    fn finish(self) -> Vec<Activity> {
        self.activities
    }
}

/// Parse the step area of `worksheet` into the activities of `test_case`.
///
/// The area runs from the first step row down to the last row with a
/// populated command cell, and from the activity column across to the
/// reason column. No populated command cell means no rows and no
/// activities.
pub(crate) fn parse_scenario(
    test_case: &TestCase,
    worksheet: &Worksheet,
    layout: &ScriptLayout,
) -> ScriptResult<Vec<Activity>> {
    let first_row = layout.first_step_index();
    let Some(last_row) = worksheet.last_data_row(layout.command_col()?, first_row) else {
        debug!(scenario = %test_case.name, "no step rows");
        return Ok(Vec::new());
    };

    let area = worksheet.area(
        CellAddress::new(first_row, layout.activity_col()?),
        CellAddress::new(last_row, layout.reason_col()?),
    );

    let mut grouper = ActivityGrouper::new(worksheet.file_name(), &test_case.name);
    for row in &area {
        grouper.push_row(row)?;
    }
    Ok(grouper.finish())
}
