//! `barrel.toml` project file.

use std::path::{Path, PathBuf};

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;

use super::{GenerationConfig, ModuleFormat};
use crate::{Error, Result};

/// One `[[catalog]]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogSection {
    /// Directory to scan, relative to the file that declares it.
    path: PathBuf,
    format: ModuleFormat,
    output: Option<String>,
    /// Replaces the default ignore patterns when present.
    ignore: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Document {
    #[serde(default)]
    catalog: Vec<CatalogSection>,
}

/// A parsed barrel.toml with the path it was read from.
#[derive(Debug)]
pub struct BarrelToml {
    path: PathBuf,
    catalogs: Vec<CatalogSection>,
}

impl BarrelToml {
    /// Open and parse a barrel.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let catalogs = Self::parse(&content, &filename)?;

        Ok(Self { path, catalogs })
    }

    /// Parse barrel.toml content. `filename` is only used for diagnostics.
    pub fn from_str_with_filename(
        path: impl Into<PathBuf>,
        content: &str,
        filename: &str,
    ) -> Result<Self> {
        Ok(Self {
            path: path.into(),
            catalogs: Self::parse(content, filename)?,
        })
    }

    fn parse(content: &str, filename: &str) -> Result<Vec<CatalogSection>> {
        toml::from_str::<Document>(content)
            .map(|doc| doc.catalog)
            .map_err(|source| {
                let span = source.span().map(SourceSpan::from);
                Box::new(Error::Parse {
                    src: NamedSource::new(filename, content.to_string()),
                    span,
                    source,
                })
            })
    }

    /// Build one [`GenerationConfig`] per `[[catalog]]` table.
    pub fn configs(&self) -> Vec<GenerationConfig> {
        let base = self.path.parent().unwrap_or_else(|| Path::new(""));

        self.catalogs
            .iter()
            .map(|section| {
                let mut config = GenerationConfig::new(base.join(&section.path), section.format);
                if let Some(output) = &section.output {
                    config = config.output(output);
                }
                if let Some(patterns) = &section.ignore {
                    config = patterns
                        .iter()
                        .fold(config.without_default_ignores(), |c, p| c.ignore(p));
                }
                config
            })
            .collect()
    }
}
