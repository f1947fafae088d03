//! Code building blocks for the barrel catalog generator.
//!
//! This crate holds the language-agnostic pieces used by the module-format
//! renderers in `barrel-js`.
//!
//! # Module Organization
//!
//! - [`builder`] - Indented text building (CodeBuilder, CodeFragment, Renderable, Indent)

pub mod builder;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
