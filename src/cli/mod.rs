//! CLI command handlers

pub mod commands;

pub use commands::{init_logging, parse, scenarios, validate, OutputFormat};
