//! JavaScript module-format renderers for barrel catalogs.
//!
//! # Usage
//!
//! ```no_run
//! use barrel_catalog::{GenerationConfig, ModuleFormat};
//!
//! let config = GenerationConfig::new("public/js", ModuleFormat::Amd);
//! let output = barrel_js::generate(&config)?;
//! println!("{} modules in {}", output.modules.len(), output.path.display());
//! # Ok::<(), Box<barrel_catalog::Error>>(())
//! ```
//!
//! # Formats
//!
//! - `commonJS` - `define(function(require) { return { 'k': require('./k') }; })`
//! - `amd` - dependency array plus `'k': arguments[i]`
//! - `es6` - `import k from './k';` plus `export default { k }`
//! - `deepCommonJS` - `commonJS` with one nested object per directory
//! - `deepAMD` - `amd` with nested objects and `"arguments[i]"` string leaves

mod generator;
mod quote;

pub mod ast;
pub mod formats;

pub use formats::render;
pub use generator::{CatalogOutput, Generator, generate, preview};
