use serde::{Deserialize, Serialize};

/// Prefix marking a scenario as "not applicable"; such scenarios are never loaded
pub const NOT_APPLICABLE_MARKER: &str = "(nat)";

//==============================================================================
// Step columns (offsets from the activity column)
//==============================================================================

pub const COL_DESCRIPTION: usize = 1;
pub const COL_CMD_TYPE: usize = 2;
pub const COL_COMMAND: usize = 3;
pub const COL_PARAM_FIRST: usize = 4;
pub const COL_PARAM_LAST: usize = 8;
pub const COL_CAPTURE_SCREEN: usize = 9;
pub const COL_FLOW_CONTROLS: usize = 10;
pub const COL_REASON: usize = 13;

//==============================================================================
// Test Case
//==============================================================================

/// One scenario worksheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// Worksheet name
    pub name: String,
    pub activities: Vec<Activity>,
}

impl TestCase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            activities: Vec::new(),
        }
    }

    /// Case-insensitive check for the `(nat)` name prefix
    pub fn is_not_applicable(&self) -> bool {
        is_not_applicable(&self.name)
    }

    pub fn activity(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn step_count(&self) -> usize {
        self.activities.iter().map(|a| a.steps.len()).sum()
    }
}

/// True when a scenario name starts with the `(nat)` marker, ignoring case
pub fn is_not_applicable(scenario_name: &str) -> bool {
    scenario_name
        .to_lowercase()
        .starts_with(NOT_APPLICABLE_MARKER)
}

//==============================================================================
// Activity
//==============================================================================

/// A named run of consecutive steps within a test case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Name collapsed onto a single line
    pub name: String,
    /// Cell text as written; unique within the test case
    pub raw_name: String,
    /// Name of the owning test case
    pub test_case: String,
    /// 1-based sheet row that opened this activity
    pub row: u32,
    pub steps: Vec<Step>,
}

impl Activity {
    pub fn new(name: String, raw_name: String, test_case: impl Into<String>, row: u32) -> Self {
        Self {
            name,
            raw_name,
            test_case: test_case.into(),
            row,
            steps: Vec::new(),
        }
    }
}

//==============================================================================
// Step
//==============================================================================

/// One scripted row.
///
/// `values` holds every cell of the row from the activity column through the
/// reason column; columns are positional and interpreted by the accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// 1-based sheet row
    pub row: u32,
    /// Index of the owning activity within its test case
    pub activity: usize,
    pub values: Vec<String>,
}

impl Step {
    pub fn new(row: u32, activity: usize, values: Vec<String>) -> Self {
        Self {
            row,
            activity,
            values,
        }
    }

    /// Cell text at a column offset, empty when the row is narrower
    pub fn value(&self, column: usize) -> &str {
        self.values.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn description(&self) -> &str {
        self.value(COL_DESCRIPTION)
    }

    pub fn cmd_type(&self) -> &str {
        self.value(COL_CMD_TYPE)
    }

    pub fn command(&self) -> &str {
        self.value(COL_COMMAND)
    }

    /// Non-blank parameters, in column order
    pub fn params(&self) -> Vec<&str> {
        (COL_PARAM_FIRST..=COL_PARAM_LAST)
            .map(|c| self.value(c))
            .filter(|p| !p.trim().is_empty())
            .collect()
    }

    /// Screenshot flag column
    pub fn capture_screen(&self) -> &str {
        self.value(COL_CAPTURE_SCREEN)
    }

    pub fn flow_controls(&self) -> &str {
        self.value(COL_FLOW_CONTROLS)
    }

    pub fn reason(&self) -> &str {
        self.value(COL_REASON)
    }
}
