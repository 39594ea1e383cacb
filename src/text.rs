//! Text helpers for cell values

use crate::error::{ScriptError, ScriptResult};
use regex::Regex;

/// Whitespace or a control character (anything at or below U+0020)
fn is_non_printable(c: char) -> bool {
    c <= ' ' || c.is_whitespace()
}

/// Strip leading/trailing whitespace and control characters
pub fn trim_non_printable(text: &str) -> &str {
    text.trim_matches(is_non_printable)
}

/// True for empty or whitespace-only text
pub fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}

/// True for text that is non-empty yet holds nothing but whitespace
pub fn is_space_only(text: &str) -> bool {
    !text.is_empty() && is_blank(text)
}

/// Collapse `raw` onto one line.
///
/// Every line break becomes a single space. With `collapse_whitespace`,
/// runs of whitespace are squeezed into one space as well. The result is
/// trimmed.
pub fn to_single_line(raw: &str, collapse_whitespace: bool) -> ScriptResult<String> {
    let line_breaks = Regex::new(r"\r\n|\r|\n")
        .map_err(|e| ScriptError::Format(format!("Regex error: {}", e)))?;
    let one_line = line_breaks.replace_all(raw, " ");

    let text = if collapse_whitespace {
        let spaces = Regex::new(r"\s+")
            .map_err(|e| ScriptError::Format(format!("Regex error: {}", e)))?;
        spaces.replace_all(&one_line, " ").into_owned()
    } else {
        one_line.into_owned()
    };

    Ok(text.trim().to_string())
}
