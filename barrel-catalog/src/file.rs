use std::path::PathBuf;

use crate::{Error, Result};

/// A rendered catalog waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFile {
    path: PathBuf,
    content: String,
}

impl CatalogFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Create or truncate the file and write the content in one call.
    pub fn write(&self) -> Result<()> {
        std::fs::write(&self.path, &self.content).map_err(|e| Error::write(&self.path, e))?;
        tracing::info!(path = %self.path.display(), bytes = self.content.len(), "wrote catalog");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("__all.js");

        CatalogFile::new(&path, "export default {}").write().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "export default {}");
    }

    #[test]
    fn test_write_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("__all.js");
        fs::write(&path, "old catalog").unwrap();

        CatalogFile::new(&path, "new catalog").write().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new catalog");
    }

    #[test]
    fn test_write_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("__all.js");

        let err = CatalogFile::new(&path, "x").write().unwrap_err();
        assert!(matches!(*err, Error::Write { .. }));
    }
}
