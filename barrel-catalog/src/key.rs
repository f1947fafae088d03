//! Module key derivation.

use std::path::{Component, Path};

use crate::{Error, Result};

/// One file's place in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Flat module key: the root-relative path without extension, `/`-joined.
    pub key: String,
    /// The same path split into segments; the last one is the leaf key.
    pub segments: Vec<String>,
    /// Import specifier relative to the catalog file, e.g. `./js/file1`.
    pub import_path: String,
    /// Root-relative path of the source file, extension included.
    pub source: String,
}

impl CatalogEntry {
    /// Whether the file sits directly in the root directory.
    pub fn is_root_level(&self) -> bool {
        self.segments.len() == 1
    }
}

/// Derive the module key of `file` relative to `root`.
///
/// Only the final extension of the base name is removed (`a.min.js` keeps
/// `a.min`). Names without an extension, and dotfiles such as `.eslintrc`,
/// are kept as they are. Separators are always `/` in the result.
pub fn derive_key(root: &Path, file: &Path) -> Result<CatalogEntry> {
    let relative = file.strip_prefix(root).map_err(|_| {
        Box::new(Error::OutsideRoot {
            path: file.to_path_buf(),
            root: root.to_path_buf(),
        })
    })?;

    let mut names = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(name) => {
                let name = name.to_str().ok_or_else(|| {
                    Box::new(Error::NonUtf8Path {
                        path: file.to_path_buf(),
                    })
                })?;
                names.push(name);
            }
            Component::CurDir => {}
            _ => {
                return Err(Box::new(Error::OutsideRoot {
                    path: file.to_path_buf(),
                    root: root.to_path_buf(),
                }));
            }
        }
    }

    let Some((file_name, dirs)) = names.split_last() else {
        return Err(Box::new(Error::OutsideRoot {
            path: file.to_path_buf(),
            root: root.to_path_buf(),
        }));
    };

    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(*file_name);

    let segments: Vec<String> = dirs
        .iter()
        .map(|d| d.to_string())
        .chain(std::iter::once(stem.to_string()))
        .collect();
    let key = segments.join("/");

    Ok(CatalogEntry {
        import_path: format!("./{key}"),
        source: names.join("/"),
        key,
        segments,
    })
}
