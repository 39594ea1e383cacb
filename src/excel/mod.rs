//! Excel access for test scripts
//!
//! - Addressing: A1 references ↔ zero-based coordinates
//! - Worksheet: cell text, last-used-row detection, area extraction
//! - Document: workbook resolution and scenario discovery

pub mod address;
mod document;
mod worksheet;

pub use address::{column_index, column_letter, CellAddress};
pub use document::{project_home, ScriptDocument};
pub use worksheet::{cell_text, Cell, Worksheet};
