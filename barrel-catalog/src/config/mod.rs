//! Generation configuration.

mod file;
mod format;

use std::path::{Path, PathBuf};

pub use file::BarrelToml;
pub use format::{KeyScheme, ModuleFormat};

use crate::{Result, walker::check_root};

/// Options for one catalog generation.
///
/// Constructed once per run, validated, then consumed by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    root: PathBuf,
    output: String,
    format: ModuleFormat,
    ignore: Vec<String>,
}

impl GenerationConfig {
    /// Base name of the generated catalog when none is given.
    pub const DEFAULT_OUTPUT: &'static str = "__all.js";

    /// Patterns ignored unless [`without_default_ignores`](Self::without_default_ignores) is used.
    pub const DEFAULT_IGNORES: &'static [&'static str] = &["*.txt"];

    pub fn new(root: impl Into<PathBuf>, format: ModuleFormat) -> Self {
        Self {
            root: root.into(),
            output: Self::DEFAULT_OUTPUT.to_string(),
            format,
            ignore: Self::DEFAULT_IGNORES.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Set the catalog file name. The file is written into the root directory.
    pub fn output(mut self, name: impl Into<String>) -> Self {
        self.output = name.into();
        self
    }

    /// Add a glob pattern for files and directories to leave out.
    pub fn ignore(mut self, pattern: impl Into<String>) -> Self {
        self.ignore.push(pattern.into());
        self
    }

    /// Drop the default ignore patterns.
    pub fn without_default_ignores(mut self) -> Self {
        self.ignore.clear();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn output_name(&self) -> &str {
        &self.output
    }

    pub fn format(&self) -> ModuleFormat {
        self.format
    }

    pub fn scheme(&self) -> KeyScheme {
        self.format.scheme()
    }

    pub fn ignore_patterns(&self) -> &[String] {
        &self.ignore
    }

    /// Full path of the catalog file.
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output)
    }

    /// Check that the root exists and is a directory.
    pub fn validate(&self) -> Result<()> {
        check_root(&self.root)
    }
}
