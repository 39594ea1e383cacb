//! Script loading: workbook → validated test cases

mod scenario;

use crate::config::ScriptLayout;
use crate::error::{ScriptError, ScriptResult};
use crate::excel::ScriptDocument;
use crate::types::TestCase;
use std::path::Path;
use tracing::{debug, info};

/// Load a test script with the standard layout and return one test case per
/// applicable scenario.
///
/// This is the main entry point. The script is resolved and validated, then
/// every scenario worksheet is parsed in workbook order. Scenarios whose name
/// starts with `(nat)` (any case) are skipped.
///
/// # Errors
/// The first failure aborts the whole load; no partial result is returned.
/// * `ScriptError::Resource` / `ScriptError::Format` - the script could not be resolved
/// * `ScriptError::Validation` - an activity cell broke a structural rule
/// * `ScriptError::Unexpected` - anything else, tagged with the script path
///
/// # Example
/// ```no_run
/// use tms_script::parser::load_script;
/// use std::path::Path;
///
/// let test_cases = load_script(Path::new("artifact/script/login.xlsx"))?;
/// for tc in &test_cases {
///     println!("{}: {} activities", tc.name, tc.activities.len());
/// }
/// # Ok::<(), tms_script::error::ScriptError>(())
/// ```
pub fn load_script(path: &Path) -> ScriptResult<Vec<TestCase>> {
    load_script_with_layout(path, &ScriptLayout::default())
}

/// [`load_script`] with an explicit worksheet layout
pub fn load_script_with_layout(path: &Path, layout: &ScriptLayout) -> ScriptResult<Vec<TestCase>> {
    layout.validate()?;
    let document = ScriptDocument::resolve(path, layout)?;
    let test_cases = load_resolved(path, &document, layout)?;

    info!(
        script = %path.display(),
        test_cases = test_cases.len(),
        "script loaded"
    );
    Ok(test_cases)
}

/// [`load_document`], with every failure other than a structural
/// validation error reported as `Unexpected` against `path`
fn load_resolved(
    path: &Path,
    document: &ScriptDocument,
    layout: &ScriptLayout,
) -> ScriptResult<Vec<TestCase>> {
    load_document(document, layout).map_err(|e| match e {
        ScriptError::Validation(_) => e,
        other => ScriptError::Unexpected {
            path: path.display().to_string(),
            message: other.to_string(),
        },
    })
}

/// Parse every applicable scenario of an already resolved document
pub fn load_document(
    document: &ScriptDocument,
    layout: &ScriptLayout,
) -> ScriptResult<Vec<TestCase>> {
    let mut test_cases = Vec::new();

    for name in document.scenario_names(layout)? {
        let worksheet = document.worksheet(&name).ok_or_else(|| {
            ScriptError::Format(format!("Worksheet '{}' disappeared from the script", name))
        })?;

        let mut test_case = TestCase::new(worksheet.name());
        if test_case.is_not_applicable() {
            debug!(scenario = %name, "skipping not-applicable scenario");
            continue;
        }

        test_case.activities = scenario::parse_scenario(&test_case, worksheet, layout)?;
        debug!(
            scenario = %name,
            activities = test_case.activities.len(),
            steps = test_case.step_count(),
            "scenario parsed"
        );
        test_cases.push(test_case);
    }

    Ok(test_cases)
}
