//! Indentation configuration for code generation.

/// One level of indentation in generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(&'static str);

impl Indent {
    /// 4-space indentation, used by every catalog format.
    pub const CATALOG: Self = Self("    ");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::CATALOG
    }
}
