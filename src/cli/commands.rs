use crate::config::ScriptLayout;
use crate::error::{ScriptError, ScriptResult};
use crate::excel::ScriptDocument;
use crate::parser;
use crate::types::{is_not_applicable, TestCase};
use clap::ValueEnum;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Output format for the parse command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented activity/step tree
    Tree,
    Json,
    Yaml,
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_logging(verbose: bool) {
    let default = if verbose {
        "tms_script=debug"
    } else {
        "tms_script=warn"
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Layout from a YAML file, or the standard layout
pub fn load_layout(path: Option<&Path>) -> ScriptResult<ScriptLayout> {
    match path {
        Some(p) => ScriptLayout::from_yaml_file(p),
        None => Ok(ScriptLayout::default()),
    }
}

/// Execute the parse command
pub fn parse(file: PathBuf, layout: Option<PathBuf>, format: OutputFormat) -> ScriptResult<()> {
    let layout = load_layout(layout.as_deref())?;
    let test_cases = parser::load_script_with_layout(&file, &layout)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&test_cases)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&test_cases)?),
        OutputFormat::Tree => {
            println!("{}", "📖 Test Script".bold().green());
            println!("   File: {}\n", file.display());
            print!("{}", render_tree(&test_cases));
            println!(
                "\n{}",
                format!(
                    "✅ {} test cases, {} activities, {} steps",
                    test_cases.len(),
                    test_cases.iter().map(|tc| tc.activities.len()).sum::<usize>(),
                    test_cases.iter().map(TestCase::step_count).sum::<usize>()
                )
                .bold()
                .green()
            );
        }
    }
    Ok(())
}

/// Execute the scenarios command
pub fn scenarios(file: PathBuf, layout: Option<PathBuf>) -> ScriptResult<()> {
    let layout = load_layout(layout.as_deref())?;
    let document = ScriptDocument::resolve(&file, &layout)?;

    println!("{}", "📋 Scenarios".bold().green());
    println!("   File: {}\n", file.display());

    for name in document.scenario_names(&layout)? {
        if is_not_applicable(&name) {
            println!("   {} {}", name.dimmed(), "(skipped: not applicable)".yellow());
        } else {
            println!("   {}", name.bright_blue().bold());
        }
    }
    Ok(())
}

/// Execute the validate command over one or more scripts.
///
/// Every script is checked and reported; the first failure is returned.
pub fn validate(files: Vec<PathBuf>, layout: Option<PathBuf>) -> ScriptResult<()> {
    let layout = load_layout(layout.as_deref())?;
    let mut first_error: Option<ScriptError> = None;

    for file in &files {
        match parser::load_script_with_layout(file, &layout) {
            Ok(test_cases) => println!(
                "{} {} ({} test cases)",
                "✅".green(),
                file.display(),
                test_cases.len()
            ),
            Err(e) => {
                println!("{} {}", "❌".red(), file.display());
                println!("   {}", e.to_string().red());
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Render test cases as an indented tree
fn render_tree(test_cases: &[TestCase]) -> String {
    let mut out = String::new();

    for tc in test_cases {
        out.push_str(&format!(
            "   📋 {} ({} activities)\n",
            tc.name.bright_blue().bold(),
            tc.activities.len()
        ));
        for activity in &tc.activities {
            out.push_str(&format!(
                "      ▸ {} ({} steps)\n",
                activity.name.cyan(),
                activity.steps.len()
            ));
            for step in &activity.steps {
                let params = step.params();
                let params = if params.is_empty() {
                    String::new()
                } else {
                    format!(" [{}]", params.join(", "))
                };
                out.push_str(&format!(
                    "         {:>4}  {} {}{}\n",
                    step.row,
                    step.cmd_type(),
                    step.command(),
                    params
                ));
            }
        }
    }

    out
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
