//! Positional layout of a test script worksheet
//!
//! Scenario sheets follow a fixed grid: a header row naming the columns,
//! then one step per row starting at the first step row. The defaults
//! describe the standard script template; a YAML file can override any
//! field:
//!
//! ```yaml
//! first_step_row: 5
//! activity_column: A
//! command_column: C
//! reason_column: N
//! ```

use crate::error::{ScriptError, ScriptResult};
use crate::excel::address::{column_index, CellAddress};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Expected header label in a given column of the header row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderLabel {
    pub column: String,
    pub label: String,
}

impl HeaderLabel {
    fn new(column: &str, label: &str) -> Self {
        Self {
            column: column.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptLayout {
    /// 1-based row carrying the column headers
    pub header_row: u32,
    /// 1-based row of the first step
    pub first_step_row: u32,
    /// Column holding the activity name; leftmost column of the step area
    pub activity_column: String,
    /// Column scanned for the last step row
    pub command_column: String,
    /// Rightmost column of the step area
    pub reason_column: String,
    /// Labels a worksheet must carry in its header row to count as a scenario
    pub headers: Vec<HeaderLabel>,
    /// Require scripts to live under `<project>/artifact/script/`
    pub require_standard_project: bool,
}

impl Default for ScriptLayout {
    fn default() -> Self {
        Self {
            header_row: 4,
            first_step_row: 5,
            activity_column: "A".to_string(),
            command_column: "C".to_string(),
            reason_column: "N".to_string(),
            headers: vec![
                HeaderLabel::new("A", "activity"),
                HeaderLabel::new("B", "description"),
                HeaderLabel::new("C", "cmd type"),
                HeaderLabel::new("D", "command"),
            ],
            require_standard_project: true,
        }
    }
}

impl ScriptLayout {
    /// Load a layout from a YAML file; missing fields keep their defaults
    pub fn from_yaml_file(path: &Path) -> ScriptResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ScriptError::Resource(format!(
                "Unable to read layout file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> ScriptResult<Self> {
        let layout: ScriptLayout = serde_yaml::from_str(content)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Check that rows and columns describe a usable step area
    pub fn validate(&self) -> ScriptResult<()> {
        if self.header_row == 0 || self.first_step_row == 0 {
            return Err(ScriptError::Format(
                "Layout rows are 1-based and must be at least 1".to_string(),
            ));
        }
        if self.first_step_row <= self.header_row {
            return Err(ScriptError::Format(format!(
                "First step row ({}) must come after the header row ({})",
                self.first_step_row, self.header_row
            )));
        }

        let activity = self.activity_col()?;
        self.command_col()?;
        let reason = self.reason_col()?;
        if reason < activity {
            return Err(ScriptError::Format(format!(
                "Reason column {} lies left of activity column {}",
                self.reason_column, self.activity_column
            )));
        }

        for header in &self.headers {
            parse_column(&header.column)?;
        }
        Ok(())
    }

    pub fn activity_col(&self) -> ScriptResult<u32> {
        parse_column(&self.activity_column)
    }

    pub fn command_col(&self) -> ScriptResult<u32> {
        parse_column(&self.command_column)
    }

    pub fn reason_col(&self) -> ScriptResult<u32> {
        parse_column(&self.reason_column)
    }

    /// Zero-based row index of the first step
    pub fn first_step_index(&self) -> u32 {
        self.first_step_row.saturating_sub(1)
    }

    /// Header cells to check, as (address, expected label)
    pub fn header_cells(&self) -> ScriptResult<Vec<(CellAddress, &str)>> {
        self.headers
            .iter()
            .map(|h| -> ScriptResult<(CellAddress, &str)> {
                Ok((
                    CellAddress::from_parts(&h.column, self.header_row)?,
                    h.label.as_str(),
                ))
            })
            .collect()
    }
}

fn parse_column(letters: &str) -> ScriptResult<u32> {
    column_index(letters)
        .ok_or_else(|| ScriptError::Format(format!("Invalid column reference '{}'", letters)))
}
