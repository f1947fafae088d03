//! JavaScript array literal builder.

use barrel_codegen::CodeFragment;

use crate::quote::single_quoted;

/// A one-element-per-line array of single-quoted strings.
#[derive(Debug, Clone, Default)]
pub struct JsArray {
    elements: Vec<String>,
}

impl JsArray {
    /// Create an array from string values (will be quoted).
    pub fn from_strings<I, S>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            elements: iter.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The elements as lines, comma-separated, without brackets.
    pub fn element_fragments(&self) -> Vec<CodeFragment> {
        let last = self.elements.len().saturating_sub(1);
        self.elements
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let sep = if i == last { "" } else { "," };
                CodeFragment::line(format!("{}{sep}", single_quoted(e)))
            })
            .collect()
    }
}
