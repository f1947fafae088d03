use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for catalog operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("root path '{path}' does not exist")]
    #[diagnostic(code(barrel::not_found))]
    NotFound { path: PathBuf },

    #[error("root path '{path}' is not a directory")]
    #[diagnostic(
        code(barrel::not_a_directory),
        help("point the catalog at the directory that contains the modules")
    )]
    NotADirectory { path: PathBuf },

    #[error("unknown module format '{format}'")]
    #[diagnostic(
        code(barrel::unknown_format),
        help("expected one of: commonJS, amd, es6, deepCommonJS, deepAMD")
    )]
    UnknownFormat { format: String },

    #[error("duplicate module key '{key}'")]
    #[diagnostic(
        code(barrel::duplicate_key),
        help("'{first}' and '{second}' resolve to the same key; rename one of them or ignore it")
    )]
    DuplicateKey {
        key: String,
        first: String,
        second: String,
    },

    #[error("duplicate import identifier '{identifier}'")]
    #[diagnostic(
        code(barrel::duplicate_identifier),
        help("'{first}' and '{second}' both sanitize to '{identifier}'")
    )]
    DuplicateIdentifier {
        identifier: String,
        first: String,
        second: String,
    },

    #[error("invalid ignore pattern '{pattern}'")]
    #[diagnostic(code(barrel::invalid_pattern))]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to walk '{path}'")]
    #[diagnostic(code(barrel::walk))]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("path '{path}' is not valid UTF-8")]
    #[diagnostic(
        code(barrel::non_utf8_path),
        help("module keys are derived from file names, which must be valid UTF-8")
    )]
    NonUtf8Path { path: PathBuf },

    #[error("'{path}' is not inside '{root}'")]
    #[diagnostic(code(barrel::outside_root))]
    OutsideRoot { path: PathBuf, root: PathBuf },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(barrel::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read '{path}'")]
    #[diagnostic(code(barrel::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse barrel.toml")]
    #[diagnostic(code(barrel::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Convert an I/O error raised while writing `path`.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Self::Write {
            path: path.into(),
            source,
        })
    }

    /// Short identifier of the error kind, stable across releases.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::NotADirectory { .. } => "not_a_directory",
            Self::UnknownFormat { .. } => "unknown_format",
            Self::DuplicateKey { .. } => "duplicate_key",
            Self::DuplicateIdentifier { .. } => "duplicate_identifier",
            Self::InvalidPattern { .. } => "invalid_pattern",
            Self::Walk { .. } => "walk",
            Self::NonUtf8Path { .. } => "non_utf8_path",
            Self::OutsideRoot { .. } => "outside_root",
            Self::Write { .. } => "write",
            Self::Io { .. } => "io",
            Self::Parse { .. } => "parse_error",
        }
    }
}
