//! Check command report data structures.

use std::path::PathBuf;

use barrel_catalog::ModuleFormat;
use serde::Serialize;

use super::output::{Output, Report};

/// Report data from comparing catalogs with the files on disk.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub catalogs: Vec<CheckedCatalog>,
}

impl CheckReport {
    /// Whether every catalog file matches what would be generated.
    pub fn is_current(&self) -> bool {
        self.catalogs
            .iter()
            .all(|c| c.status == CatalogStatus::Current)
    }
}

#[derive(Debug, Serialize)]
pub struct CheckedCatalog {
    pub path: PathBuf,
    pub format: ModuleFormat,
    pub modules: Vec<String>,
    pub status: CatalogStatus,
}

/// State of a catalog file relative to a fresh render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogStatus {
    Current,
    Stale,
    Missing,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for (i, catalog) in self.catalogs.iter().enumerate() {
            if i > 0 {
                out.newline();
            }

            out.section(&catalog.path.display().to_string());
            out.key_value_indented("format", catalog.format.as_str());
            out.key_value_indented("modules", &catalog.modules.len().to_string());
            for module in &catalog.modules {
                out.list_item(module);
            }

            match catalog.status {
                CatalogStatus::Current => {
                    out.preformatted(&format!("✓ {} is up to date", catalog.path.display()))
                }
                CatalogStatus::Stale => {
                    out.warning(&format!("{} is out of date", catalog.path.display()))
                }
                CatalogStatus::Missing => {
                    out.warning(&format!("{} has not been generated", catalog.path.display()))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    fn checked(status: CatalogStatus) -> CheckedCatalog {
        CheckedCatalog {
            path: PathBuf::from("src/__all.js"),
            format: ModuleFormat::DeepAmd,
            modules: vec!["a".into(), "b/c".into()],
            status,
        }
    }

    #[test]
    fn test_render_current() {
        let report = CheckReport {
            catalogs: vec![checked(CatalogStatus::Current)],
        };
        let mut out = RecordingOutput::default();

        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "src/__all.js:",
                "  format: deepAMD",
                "  modules: 2",
                "  - a",
                "  - b/c",
                "✓ src/__all.js is up to date",
            ]
        );
        assert!(report.is_current());
    }

    #[test]
    fn test_stale_and_missing_are_not_current() {
        let report = CheckReport {
            catalogs: vec![
                checked(CatalogStatus::Current),
                checked(CatalogStatus::Stale),
            ],
        };
        assert!(!report.is_current());

        let report = CheckReport {
            catalogs: vec![checked(CatalogStatus::Missing)],
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines.last().map(String::as_str),
            Some("warning: src/__all.js has not been generated")
        );
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_value(CatalogStatus::Stale).unwrap();
        assert_eq!(json, "stale");
    }
}
