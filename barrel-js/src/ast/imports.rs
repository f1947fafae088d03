//! ES module import builder.

use barrel_codegen::{CodeFragment, Renderable};

use crate::quote::single_quoted;

/// `import <name> from '<from>';`
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    default: String,
}

impl Import {
    pub fn new(default: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: default.into(),
        }
    }

    pub fn build(&self) -> String {
        format!("import {} from {};", self.default, single_quoted(&self.from))
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.build())]
    }
}
