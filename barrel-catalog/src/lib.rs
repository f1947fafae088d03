//! Directory walking, module key derivation and catalog building for barrel.
//!
//! The pipeline is one-directional:
//!
//! 1. [`walk`] yields every file under a root directory.
//! 2. [`derive_key`] turns each file into a [`CatalogEntry`].
//! 3. [`Catalog::build`] orders the entries and nests them for the chosen
//!    [`KeyScheme`].
//!
//! Rendering the catalog into JavaScript lives in `barrel-js`.

mod catalog;
mod config;
mod error;
mod file;
mod key;
mod walker;

pub use catalog::{Catalog, CatalogNode, CatalogTree, ModuleRef};
pub use config::{BarrelToml, GenerationConfig, KeyScheme, ModuleFormat};
pub use error::{Error, Result};
pub use file::CatalogFile;
pub use key::{CatalogEntry, derive_key};
pub use walker::{Walk, check_root, walk};

/// Walk the configured root and build its catalog.
pub fn collect(config: &GenerationConfig) -> Result<Catalog> {
    let root = config.root();
    let entries = walk(root, config.output_name(), config.ignore_patterns())?
        .map(|file| {
            let file = file?;
            tracing::debug!(path = %file.display(), "discovered module");
            derive_key(root, &file)
        })
        .collect::<Result<Vec<_>>>()?;

    Catalog::build(entries, config.scheme())
}
