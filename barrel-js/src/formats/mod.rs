//! The five catalog renderers.
//!
//! Every renderer is a pure function of the ordered catalog: identical input
//! produces byte-identical text. Output lines are joined with `\n` and carry
//! no trailing newline.

mod amd;
mod common_js;
mod deep;
mod es6;

use barrel_catalog::{Catalog, ModuleFormat, Result};
use barrel_codegen::{CodeBuilder, Renderable};

pub use es6::identifier;

/// Render `catalog` in `format`.
///
/// A catalog built for the other key scheme is rebuilt first.
pub fn render(format: ModuleFormat, catalog: &Catalog) -> Result<String> {
    if catalog.scheme() != format.scheme() {
        let rebuilt = Catalog::build(catalog.entries().to_vec(), format.scheme())?;
        return render(format, &rebuilt);
    }

    match format {
        ModuleFormat::CommonJs => Ok(common_js::render(catalog)),
        ModuleFormat::Amd => Ok(amd::render(catalog)),
        ModuleFormat::Es6 => es6::render(catalog),
        ModuleFormat::DeepCommonJs => Ok(deep::render_common_js(catalog)),
        ModuleFormat::DeepAmd => Ok(deep::render_amd(catalog)),
    }
}

fn finish(nodes: &[&dyn Renderable]) -> String {
    let mut builder = CodeBuilder::default();
    for node in nodes {
        builder.emit(node);
    }
    builder.finish()
}

fn require(import_path: &str) -> String {
    format!("require({})", crate::quote::single_quoted(import_path))
}

fn argument(index: usize) -> String {
    format!("arguments[{index}]")
}
