//! Generate operation - write (or preview) every requested catalog.

use barrel_catalog::{GenerationConfig, Result};
use barrel_js::CatalogOutput;

use crate::reports::{CatalogSummary, GenerateReport};

/// Options for the generate operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Render without writing.
    pub dry_run: bool,
    /// Keep the module list in the report.
    pub verbose: bool,
}

/// Execute the generate operation.
///
/// Catalogs are processed in order and the first failure stops the run.
/// Catalogs written before the failure stay on disk.
pub fn generate(configs: &[GenerationConfig], opts: GenerateOptions) -> Result<GenerateReport> {
    let mut catalogs = Vec::with_capacity(configs.len());

    for config in configs {
        let output = if opts.dry_run {
            barrel_js::preview(config)?
        } else {
            barrel_js::generate(config)?
        };
        catalogs.push(summarize(output, opts));
    }

    Ok(GenerateReport {
        dry_run: opts.dry_run,
        catalogs,
    })
}

fn summarize(output: CatalogOutput, opts: GenerateOptions) -> CatalogSummary {
    CatalogSummary {
        path: output.path,
        format: output.format,
        module_count: output.modules.len(),
        modules: opts.verbose.then_some(output.modules),
        content: opts.dry_run.then_some(output.content),
    }
}
