//! Script document resolution and scenario discovery

use crate::config::ScriptLayout;
use crate::error::{ScriptError, ScriptResult};
use crate::excel::worksheet::Worksheet;
use calamine::{open_workbook, Reader, Xlsx};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A fully loaded test script workbook
#[derive(Debug, Clone)]
pub struct ScriptDocument {
    path: PathBuf,
    sheets: Vec<Worksheet>,
}

impl ScriptDocument {
    /// Wrap already-loaded worksheets, in workbook order
    pub fn new<P: AsRef<Path>>(path: P, sheets: Vec<Worksheet>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            sheets,
        }
    }

    /// Open `path` and confirm it is a usable test script.
    ///
    /// Checks, in order: the path exists, it is an `.xlsx` workbook that
    /// opens, it holds at least one scenario sheet, and (when the layout
    /// asks for it) it sits in a standard project structure.
    pub fn resolve(path: &Path, layout: &ScriptLayout) -> ScriptResult<Self> {
        if !path.exists() {
            return Err(ScriptError::Resource(format!(
                "The path specified does not exist: {}",
                path.display()
            )));
        }

        let is_xlsx = path
            .extension()
            .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("xlsx"))
            .unwrap_or(false);
        if !path.is_file() || !is_xlsx {
            return Err(ScriptError::Format(format!(
                "Invalid test script - {}: expected an .xlsx workbook",
                path.display()
            )));
        }

        let document = Self::open(path)?;

        if document.scenario_names(layout)?.is_empty() {
            return Err(ScriptError::Format(format!(
                "Invalid test script - {}: no scenario worksheet found",
                path.display()
            )));
        }

        if layout.require_standard_project && project_home(path).is_none() {
            return Err(ScriptError::Resource(format!(
                "specified test script ({}) not following standard project structure, \
                 related directories would not be resolved from commandline arguments.",
                path.display()
            )));
        }

        Ok(document)
    }

    /// Read every worksheet of the workbook into memory
    fn open(path: &Path) -> ScriptResult<Self> {
        let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| {
            ScriptError::Resource(format!("Failed to open Excel file {}: {}", path.display(), e))
        })?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut sheets = Vec::new();
        for sheet_name in workbook.sheet_names().to_vec() {
            let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
                ScriptError::Resource(format!(
                    "Failed to read worksheet '{}' of {}: {}",
                    sheet_name,
                    path.display(),
                    e
                ))
            })?;
            debug!(sheet = %sheet_name, "loaded worksheet");
            sheets.push(Worksheet::new(file_name.clone(), sheet_name, range));
        }

        Ok(Self::new(path, sheets))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn worksheets(&self) -> &[Worksheet] {
        &self.sheets
    }

    pub fn worksheet(&self, name: &str) -> Option<&Worksheet> {
        self.sheets.iter().find(|ws| ws.name() == name)
    }

    /// Names of the scenario worksheets, in workbook order.
    ///
    /// System sheets (names starting with `#`) never count. Every other sheet
    /// must carry the layout's header labels (trimmed, case-insensitive).
    pub fn scenario_names(&self, layout: &ScriptLayout) -> ScriptResult<Vec<String>> {
        let headers = layout.header_cells()?;

        Ok(self
            .sheets
            .iter()
            .filter(|ws| !ws.name().starts_with('#'))
            .filter(|ws| {
                headers.iter().all(|(address, label)| {
                    ws.cell_value(*address).trim().eq_ignore_ascii_case(label)
                })
            })
            .map(|ws| ws.name().to_string())
            .collect())
    }
}

/// Project directory of a script stored as `<project>/artifact/script/<file>`
pub fn project_home(script: &Path) -> Option<PathBuf> {
    let script = script.canonicalize().ok()?;
    let script_dir = script.parent()?;
    let artifact_dir = script_dir.parent()?;

    let named = |dir: &Path, expected: &str| {
        dir.file_name()
            .map(|n| n.to_string_lossy() == expected)
            .unwrap_or(false)
    };

    if named(script_dir, "script") && named(artifact_dir, "artifact") {
        artifact_dir.parent().map(Path::to_path_buf)
    } else {
        None
    }
}
