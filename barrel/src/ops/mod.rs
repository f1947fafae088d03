//! Core operations.
//!
//! Business logic for barrel commands, separated from argument parsing and
//! output rendering.

pub mod check;
pub mod generate;

pub use check::check;
pub use generate::{GenerateOptions, generate};
