//! Check operation - compare rendered catalogs with the files on disk.

use std::{fs, io};

use barrel_catalog::{Error, GenerationConfig, Result};

use crate::reports::{CatalogStatus, CheckReport, CheckedCatalog};

/// Execute the check operation.
///
/// Renders each catalog without writing it and compares the result with the
/// current file contents.
pub fn check(configs: &[GenerationConfig]) -> Result<CheckReport> {
    let mut catalogs = Vec::with_capacity(configs.len());

    for config in configs {
        let output = barrel_js::preview(config)?;
        let status = match fs::read_to_string(&output.path) {
            Ok(existing) if existing == output.content => CatalogStatus::Current,
            Ok(_) => CatalogStatus::Stale,
            Err(e) if e.kind() == io::ErrorKind::NotFound => CatalogStatus::Missing,
            Err(source) => {
                return Err(Box::new(Error::Io {
                    path: output.path,
                    source,
                }));
            }
        };

        catalogs.push(CheckedCatalog {
            path: output.path,
            format: output.format,
            modules: output.modules,
            status,
        });
    }

    Ok(CheckReport { catalogs })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use barrel_catalog::ModuleFormat;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_check_reports_missing_then_current_then_stale() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.js"), "").unwrap();
        let configs = vec![GenerationConfig::new(dir.path(), ModuleFormat::CommonJs)];

        let report = check(&configs).unwrap();
        assert_eq!(report.catalogs[0].status, CatalogStatus::Missing);
        assert!(!report.is_current());

        barrel_js::generate(&configs[0]).unwrap();
        let report = check(&configs).unwrap();
        assert_eq!(report.catalogs[0].status, CatalogStatus::Current);
        assert_eq!(report.catalogs[0].modules, vec!["a"]);
        assert!(report.is_current());

        fs::write(dir.path().join("b.js"), "").unwrap();
        let report = check(&configs).unwrap();
        assert_eq!(report.catalogs[0].status, CatalogStatus::Stale);
    }

    #[test]
    fn test_check_never_writes() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.js"), "").unwrap();
        let configs = vec![GenerationConfig::new(dir.path(), ModuleFormat::Es6)];

        check(&configs).unwrap();

        assert!(!dir.path().join("__all.js").exists());
    }
}
