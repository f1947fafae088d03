//! JavaScript object literal builder.

use barrel_codegen::{CodeFragment, Renderable};

use crate::quote::{double_quoted, single_quoted};

/// Quote character used for keys and string values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quote {
    #[default]
    Single,
    Double,
}

impl Quote {
    pub fn apply(&self, s: &str) -> String {
        match self {
            Quote::Single => single_quoted(s),
            Quote::Double => double_quoted(s),
        }
    }
}

/// A property in a JavaScript object literal.
#[derive(Debug, Clone)]
pub struct Property {
    pub key: String,
    pub value: PropertyValue,
}

/// The value of an object property.
#[derive(Debug, Clone)]
pub enum PropertyValue {
    /// A literal string value (will be quoted).
    String(String),
    /// A raw expression (will not be quoted).
    Raw(String),
    /// A nested object.
    Object(JsObject),
    /// `{ name }` style property; the key is the variable name.
    Shorthand,
}

/// Builder for JavaScript object literals.
///
/// Properties are separated by commas with no trailing comma after the last
/// one. Keys are quoted with the object's [`Quote`] unless shorthand.
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    quote: Quote,
    properties: Vec<Property>,
}

impl JsObject {
    pub fn new(quote: Quote) -> Self {
        Self {
            quote,
            properties: Vec::new(),
        }
    }

    /// Add a property with a raw expression value.
    pub fn raw(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, PropertyValue::Raw(value.into()));
        self
    }

    /// Add a shorthand property where key equals the variable name.
    pub fn shorthand(mut self, name: impl Into<String>) -> Self {
        self.push(name, PropertyValue::Shorthand);
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: PropertyValue) {
        self.properties.push(Property {
            key: key.into(),
            value,
        });
    }

    /// Render as `{prefix}{ ... }{suffix}`, e.g. `return { ... };`.
    ///
    /// An empty object collapses to a single `{prefix}{}{suffix}` line.
    pub fn fragments_with(&self, prefix: &str, suffix: &str) -> Vec<CodeFragment> {
        if self.properties.is_empty() {
            return vec![CodeFragment::line(format!("{prefix}{{}}{suffix}"))];
        }

        vec![CodeFragment::block(
            format!("{prefix}{{"),
            self.properties_to_fragments(),
            Some(format!("}}{suffix}")),
        )]
    }

    fn properties_to_fragments(&self) -> Vec<CodeFragment> {
        let last = self.properties.len().saturating_sub(1);
        self.properties
            .iter()
            .enumerate()
            .map(|(i, prop)| {
                let sep = if i == last { "" } else { "," };
                let key = self.quote.apply(&prop.key);
                match &prop.value {
                    PropertyValue::String(s) => {
                        CodeFragment::line(format!("{key}: {}{sep}", self.quote.apply(s)))
                    }
                    PropertyValue::Raw(s) => CodeFragment::line(format!("{key}: {s}{sep}")),
                    PropertyValue::Object(obj) => {
                        CodeFragment::sequence(obj.fragments_with(&format!("{key}: "), sep))
                    }
                    PropertyValue::Shorthand => CodeFragment::line(format!("{}{sep}", prop.key)),
                }
            })
            .collect()
    }
}

impl Renderable for JsObject {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.fragments_with("", "")
    }
}
