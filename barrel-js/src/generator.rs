//! Walk, build, render and write a catalog.

use std::path::PathBuf;

use barrel_catalog::{Catalog, CatalogFile, GenerationConfig, ModuleFormat, Result};

use crate::formats;

/// The outcome of one generation run.
#[derive(Debug, Clone)]
pub struct CatalogOutput {
    /// Where the catalog is (or would be) written.
    pub path: PathBuf,
    pub format: ModuleFormat,
    /// Flat module keys in render order.
    pub modules: Vec<String>,
    /// Rendered catalog text.
    pub content: String,
}

/// Catalog generator for one [`GenerationConfig`].
pub struct Generator<'a> {
    config: &'a GenerationConfig,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a GenerationConfig) -> Self {
        Self { config }
    }

    /// Run the full pipeline without writing anything.
    pub fn preview(&self) -> Result<CatalogOutput> {
        self.config.validate()?;

        let catalog = barrel_catalog::collect(self.config)?;
        let content = formats::render(self.config.format(), &catalog)?;

        Ok(self.output(&catalog, content))
    }

    /// Run the pipeline and write the catalog, replacing any existing file.
    ///
    /// The catalog is fully rendered in memory before the single write, so a
    /// failure never leaves a partial file behind.
    pub fn generate(&self) -> Result<CatalogOutput> {
        let output = self.preview()?;
        CatalogFile::new(&output.path, output.content.as_str()).write()?;
        Ok(output)
    }

    fn output(&self, catalog: &Catalog, content: String) -> CatalogOutput {
        CatalogOutput {
            path: self.config.output_path(),
            format: self.config.format(),
            modules: catalog.ordered_keys().map(str::to_string).collect(),
            content,
        }
    }
}

/// Generate the catalog described by `config`.
pub fn generate(config: &GenerationConfig) -> Result<CatalogOutput> {
    Generator::new(config).generate()
}

/// Render the catalog described by `config` without writing it.
pub fn preview(config: &GenerationConfig) -> Result<CatalogOutput> {
    Generator::new(config).preview()
}
