//! Report data structures for commands.
//!
//! Commands build reports, then render them to an [`Output`] or serialize
//! them as JSON.

mod check;
mod generate;
mod output;

pub use check::{CatalogStatus, CheckReport, CheckedCatalog};
pub use generate::{CatalogSummary, GenerateReport};
pub use output::{Report, TerminalOutput};
