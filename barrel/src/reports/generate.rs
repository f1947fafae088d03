//! Generate command report data structures.

use std::path::PathBuf;

use barrel_catalog::ModuleFormat;
use serde::Serialize;

use super::output::{Output, Report};

/// Report data from catalog generation.
#[derive(Debug, Serialize)]
pub struct GenerateReport {
    /// Whether this was a dry run (nothing written).
    pub dry_run: bool,
    pub catalogs: Vec<CatalogSummary>,
}

/// One generated (or previewed) catalog.
#[derive(Debug, Serialize)]
pub struct CatalogSummary {
    pub path: PathBuf,
    pub format: ModuleFormat,
    pub module_count: usize,
    /// Module keys in render order, kept with `--verbose`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modules: Option<Vec<String>>,
    /// Rendered text, kept with `--dry-run`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for (i, catalog) in self.catalogs.iter().enumerate() {
            if i > 0 {
                out.newline();
            }

            if let Some(content) = &catalog.content {
                out.divider(&catalog.path.display().to_string());
                out.preformatted(content);
                out.divider("end");
            }

            let verb = if self.dry_run { "Would write" } else { "Wrote" };
            out.preformatted(&format!(
                "{} {} ({}, {} module{})",
                verb,
                catalog.path.display(),
                catalog.format,
                catalog.module_count,
                if catalog.module_count == 1 { "" } else { "s" }
            ));

            if let Some(modules) = &catalog.modules {
                for module in modules {
                    out.list_item(module);
                }
            }

            if catalog.module_count == 0 {
                out.warning(&format!("{} has no modules", catalog.path.display()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    fn summary(module_count: usize) -> CatalogSummary {
        CatalogSummary {
            path: PathBuf::from("lib/__all.js"),
            format: ModuleFormat::Es6,
            module_count,
            modules: None,
            content: None,
        }
    }

    #[test]
    fn test_render_written() {
        let report = GenerateReport {
            dry_run: false,
            catalogs: vec![summary(2)],
        };
        let mut out = RecordingOutput::default();

        report.render(&mut out);

        assert_eq!(out.lines, vec!["Wrote lib/__all.js (es6, 2 modules)"]);
    }

    #[test]
    fn test_render_dry_run_verbose() {
        let mut catalog = summary(1);
        catalog.modules = Some(vec!["a".into()]);
        catalog.content = Some("import a from './a';".into());
        let report = GenerateReport {
            dry_run: true,
            catalogs: vec![catalog],
        };
        let mut out = RecordingOutput::default();

        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "── lib/__all.js ──",
                "import a from './a';",
                "── end ──",
                "Would write lib/__all.js (es6, 1 module)",
                "  - a",
            ]
        );
    }

    #[test]
    fn test_render_warns_on_empty_catalog() {
        let report = GenerateReport {
            dry_run: false,
            catalogs: vec![summary(0)],
        };
        let mut out = RecordingOutput::default();

        report.render(&mut out);

        assert_eq!(out.lines[1], "warning: lib/__all.js has no modules");
    }

    #[test]
    fn test_json_skips_unset_fields() {
        let report = GenerateReport {
            dry_run: false,
            catalogs: vec![summary(2)],
        };

        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "dry_run": false,
                "catalogs": [{
                    "path": "lib/__all.js",
                    "format": "es6",
                    "module_count": 2,
                }],
            })
        );
    }
}
