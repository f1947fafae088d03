//! Module formats and key schemes.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Error;

/// How module keys are shaped in the generated catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyScheme {
    /// One level of keys, each the slash-joined relative path (`coffee/file1`).
    Flat,
    /// One nested object per directory level (`coffee: { file1: ... }`).
    Deep,
}

/// The fixed set of catalog output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleFormat {
    /// `define(function(require) { return { 'key': require('./key') }; });`
    CommonJs,
    /// `define(['key'], function() { return { 'key': arguments[0] } });`
    Amd,
    /// `import key from './key';` followed by `export default { key }`
    Es6,
    /// CommonJS wrapper returning a nested object per directory.
    DeepCommonJs,
    /// AMD dependency array with a nested object of `"arguments[i]"` leaves.
    DeepAmd,
}

impl ModuleFormat {
    /// Every supported format, in documentation order.
    pub const ALL: [ModuleFormat; 5] = [
        ModuleFormat::CommonJs,
        ModuleFormat::Amd,
        ModuleFormat::Es6,
        ModuleFormat::DeepCommonJs,
        ModuleFormat::DeepAmd,
    ];

    /// Returns the format identifier as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleFormat::CommonJs => "commonJS",
            ModuleFormat::Amd => "amd",
            ModuleFormat::Es6 => "es6",
            ModuleFormat::DeepCommonJs => "deepCommonJS",
            ModuleFormat::DeepAmd => "deepAMD",
        }
    }

    /// The key scheme this format renders with.
    pub fn scheme(&self) -> KeyScheme {
        match self {
            ModuleFormat::CommonJs | ModuleFormat::Amd | ModuleFormat::Es6 => KeyScheme::Flat,
            ModuleFormat::DeepCommonJs | ModuleFormat::DeepAmd => KeyScheme::Deep,
        }
    }
}

impl fmt::Display for ModuleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ModuleFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "commonJS" => Ok(ModuleFormat::CommonJs),
            "amd" => Ok(ModuleFormat::Amd),
            "es6" => Ok(ModuleFormat::Es6),
            "deepCommonJS" => Ok(ModuleFormat::DeepCommonJs),
            "deepAMD" => Ok(ModuleFormat::DeepAmd),
            _ => Err(Error::UnknownFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl Serialize for ModuleFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ModuleFormat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            ModuleFormat::from_str("commonJS").unwrap(),
            ModuleFormat::CommonJs
        );
        assert_eq!(ModuleFormat::from_str("amd").unwrap(), ModuleFormat::Amd);
        assert_eq!(ModuleFormat::from_str("es6").unwrap(), ModuleFormat::Es6);
        assert_eq!(
            ModuleFormat::from_str("deepCommonJS").unwrap(),
            ModuleFormat::DeepCommonJs
        );
        assert_eq!(
            ModuleFormat::from_str("deepAMD").unwrap(),
            ModuleFormat::DeepAmd
        );
    }

    #[test]
    fn test_unknown_format() {
        let err = ModuleFormat::from_str("umd").unwrap_err();
        assert!(matches!(err, Error::UnknownFormat { ref format } if format == "umd"));
    }

    #[test]
    fn test_identifiers_are_case_sensitive() {
        for name in ["ES6", "COMMONJS", "deepamd", "DeepCommonJs", "Amd"] {
            let err = ModuleFormat::from_str(name).unwrap_err();
            assert!(
                matches!(err, Error::UnknownFormat { ref format } if format == name),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn test_display_round_trips_identifier() {
        for format in ModuleFormat::ALL {
            assert_eq!(format.to_string().parse::<ModuleFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_scheme() {
        assert_eq!(ModuleFormat::CommonJs.scheme(), KeyScheme::Flat);
        assert_eq!(ModuleFormat::Amd.scheme(), KeyScheme::Flat);
        assert_eq!(ModuleFormat::Es6.scheme(), KeyScheme::Flat);
        assert_eq!(ModuleFormat::DeepCommonJs.scheme(), KeyScheme::Deep);
        assert_eq!(ModuleFormat::DeepAmd.scheme(), KeyScheme::Deep);
    }

    #[test]
    fn test_serde() {
        let format: ModuleFormat = serde_json::from_str(r#""deepAMD""#).unwrap();
        assert_eq!(format, ModuleFormat::DeepAmd);
        assert_eq!(
            serde_json::to_string(&ModuleFormat::CommonJs).unwrap(),
            r#""commonJS""#
        );
        assert!(serde_json::from_str::<ModuleFormat>(r#""umd""#).is_err());
    }
}
