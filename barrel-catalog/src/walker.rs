//! Recursive discovery of catalog members.

use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

use crate::{Error, Result};

/// Check that `root` exists and is a directory.
pub fn check_root(root: &Path) -> Result<()> {
    let metadata = std::fs::metadata(root).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Box::new(Error::NotFound {
                path: root.to_path_buf(),
            })
        } else {
            Box::new(Error::Io {
                path: root.to_path_buf(),
                source: e,
            })
        }
    })?;

    if !metadata.is_dir() {
        return Err(Box::new(Error::NotADirectory {
            path: root.to_path_buf(),
        }));
    }

    Ok(())
}

/// Walk `root` and yield every file beneath it.
///
/// Entries named `exclude` are skipped at any depth, and so are entries whose
/// base name or root-relative path matches one of `ignore`. Skipped
/// directories are not descended into.
pub fn walk(root: &Path, exclude: &str, ignore: &[String]) -> Result<Walk> {
    check_root(root)?;

    let ignore = ignore
        .iter()
        .map(|pattern| {
            Pattern::new(pattern).map_err(|source| {
                Box::new(Error::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Walk {
        root: root.to_path_buf(),
        exclude: exclude.to_string(),
        ignore,
        entries: WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter(),
    })
}

/// Lazy sequence of file paths produced by [`walk`].
pub struct Walk {
    root: PathBuf,
    exclude: String,
    ignore: Vec<Pattern>,
    entries: walkdir::IntoIter,
}

impl Walk {
    fn is_skipped(&self, entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();
        if name == self.exclude.as_str() {
            return true;
        }

        let relative = entry
            .path()
            .strip_prefix(&self.root)
            .unwrap_or(entry.path())
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        self.ignore
            .iter()
            .any(|pattern| pattern.matches(&name) || pattern.matches(&relative))
    }
}

impl Iterator for Walk {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(source) => {
                    let path = source
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.root.clone());
                    return Some(Err(Box::new(Error::Walk { path, source })));
                }
            };

            if entry.depth() == 0 {
                continue;
            }

            let is_dir = entry.file_type().is_dir();
            if self.is_skipped(&entry) {
                tracing::debug!(path = %entry.path().display(), "skipping ignored entry");
                if is_dir {
                    self.entries.skip_current_dir();
                }
                continue;
            }

            if entry.file_type().is_file() {
                return Some(Ok(entry.into_path()));
            }
        }
    }
}
