//! ES module default export.

use barrel_codegen::{CodeFragment, Renderable};

use super::JsObject;

/// `export default { ... }` with no trailing semicolon.
#[derive(Debug, Clone)]
pub struct ExportDefault(JsObject);

impl ExportDefault {
    pub fn new(object: JsObject) -> Self {
        Self(object)
    }
}

impl Renderable for ExportDefault {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0.fragments_with("export default ", "")
    }
}
