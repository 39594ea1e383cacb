//! tms-script - spreadsheet test scripts as validated test case models
//!
//! This library loads `.xlsx` test-automation scripts and turns every
//! scenario worksheet into a test case made of activities (named groups of
//! consecutive rows) and steps (one per row), ready for export to a
//! test-management system.
//!
//! # Features
//!
//! - Scenario discovery by header row, `(nat)` scenarios skipped
//! - Fail-fast validation of activity names with cell-level diagnostics
//! - Configurable worksheet layout (YAML)
//! - Serde-serializable model (JSON / YAML)
//!
//! # Example
//!
//! ```no_run
//! use tms_script::parser::load_script;
//! use std::path::Path;
//!
//! let test_cases = load_script(Path::new("artifact/script/login.xlsx"))?;
//!
//! for tc in &test_cases {
//!     for activity in &tc.activities {
//!         println!("{} / {}: {} steps", tc.name, activity.name, activity.steps.len());
//!     }
//! }
//! # Ok::<(), tms_script::error::ScriptError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod excel;
pub mod parser;
pub mod text;
pub mod types;

// Re-export commonly used types
pub use config::ScriptLayout;
pub use error::{ScriptError, ScriptResult, ValidationError, ValidationKind};
pub use parser::{load_script, load_script_with_layout};
pub use types::{Activity, Step, TestCase};
