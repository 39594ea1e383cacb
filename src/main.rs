use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tms_script::cli::{self, OutputFormat};

#[derive(Parser)]
#[command(name = "tms-script")]
#[command(about = "Load spreadsheet test scripts into test cases, activities and steps.")]
#[command(long_about = "tms-script - Spreadsheet test script loader

Reads an .xlsx test script, validates every scenario worksheet and builds
the test case → activity → step hierarchy used for test-management export.

COMMANDS:
  parse      - Load a script and print its test cases
  scenarios  - List the scenario worksheets of a script
  validate   - Check one or more scripts for structural errors

EXAMPLES:
  tms-script parse artifact/script/login.xlsx
  tms-script parse artifact/script/login.xlsx --format json
  tms-script validate artifact/script/*.xlsx
  tms-script scenarios login.xlsx --layout layout.yaml")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Worksheet layout override (YAML)
    #[arg(short, long, global = true, env = "TMS_SCRIPT_LAYOUT")]
    layout: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Load a test script and print its test cases.

Every scenario worksheet becomes a test case; rows are grouped into
activities by the activity column. Scenarios named '(nat) ...' are skipped.
The first structural error aborts the load and names the offending cell:

  Error found in [login.xlsx][Smoke][A7]: Found duplicate activity name 'Login'")]
    /// Load a test script and print its test cases
    Parse {
        /// Path to the .xlsx test script
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "tree")]
        format: OutputFormat,
    },

    /// List the scenario worksheets of a test script
    Scenarios {
        /// Path to the .xlsx test script
        file: PathBuf,
    },

    #[command(long_about = "Check test scripts for structural errors.

BATCH VALIDATION:
  tms-script validate a.xlsx b.xlsx c.xlsx
  Validates every file, reporting each result; exits non-zero if any fails.")]
    /// Check test scripts for structural errors
    Validate {
        /// Path to .xlsx test script(s)
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Parse { file, format } => cli::parse(file, cli.layout, format),
        Commands::Scenarios { file } => cli::scenarios(file, cli.layout),
        Commands::Validate { files } => cli::validate(files, cli.layout),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "❌".red(), e.to_string().red());
            ExitCode::FAILURE
        }
    }
}
