use std::fmt;
use thiserror::Error;

pub type ScriptResult<T> = Result<T, ScriptError>;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Missing path, unreadable workbook or non-standard project layout
    #[error("Resource error: {0}")]
    Resource(String),

    /// The document is not a recognized test script
    #[error("Format error: {0}")]
    Format(String),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Error occurred while parsing the excel file: {path} : {message}")]
    Unexpected { path: String, message: String },
}

impl ScriptError {
    /// Returns the structural validation failure, if this is one
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            ScriptError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

/// The structural rule an activity cell violated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationKind {
    SpaceOnlyName,
    ProblematicName { name: String },
    MissingFirstActivity,
    DuplicateName { name: String },
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationKind::SpaceOnlyName => write!(f, "Found invalid, space-only activity name"),
            ValidationKind::ProblematicName { name } => write!(
                f,
                "Problematic activity name found: '{}'. Remove any leading/trailing non-printable characters",
                name.escape_debug()
            ),
            ValidationKind::MissingFirstActivity => {
                write!(f, "Invalid format; First row must contain valid activity name")
            }
            ValidationKind::DuplicateName { name } => {
                write!(f, "Found duplicate activity name '{}'", name)
            }
        }
    }
}

/// A fatal structural violation, addressed down to the offending cell
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Error found in [{file}][{scenario}][{cell}]: {kind}")]
pub struct ValidationError {
    pub file: String,
    pub scenario: String,
    pub cell: String,
    pub kind: ValidationKind,
}

impl ValidationError {
    pub fn new(
        file: impl Into<String>,
        scenario: impl Into<String>,
        cell: impl Into<String>,
        kind: ValidationKind,
    ) -> Self {
        Self {
            file: file.into(),
            scenario: scenario.into(),
            cell: cell.into(),
            kind,
        }
    }
}
