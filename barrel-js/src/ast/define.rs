//! AMD `define(...)` wrapper.

use barrel_codegen::{CodeFragment, Renderable};

use super::JsArray;

/// A `define` call wrapping a factory function.
///
/// ```text
/// define(function(require) {      define([
///     ...                             'dep'
/// });                             ], function() {
///                                     ...
///                                 });
/// ```
#[derive(Debug, Clone)]
pub struct Define {
    dependencies: Option<JsArray>,
    params: String,
    body: Vec<CodeFragment>,
}

impl Define {
    /// Factory-style define whose function receives `require`.
    pub fn factory() -> Self {
        Self {
            dependencies: None,
            params: "require".to_string(),
            body: Vec::new(),
        }
    }

    /// Dependency-array define whose function reads `arguments`.
    pub fn with_dependencies(dependencies: JsArray) -> Self {
        Self {
            dependencies: Some(dependencies),
            params: String::new(),
            body: Vec::new(),
        }
    }

    /// Append fragments to the factory body.
    pub fn body(mut self, fragments: impl IntoIterator<Item = CodeFragment>) -> Self {
        self.body.extend(fragments);
        self
    }
}

impl Renderable for Define {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let close = Some("});".to_string());
        let function = format!("function({}) {{", self.params);

        match &self.dependencies {
            None => vec![CodeFragment::block(
                format!("define({function}"),
                self.body.clone(),
                close,
            )],
            Some(deps) if deps.is_empty() => vec![CodeFragment::block(
                format!("define([], {function}"),
                self.body.clone(),
                close,
            )],
            Some(deps) => vec![
                CodeFragment::block("define([", deps.element_fragments(), None),
                CodeFragment::block(format!("], {function}"), self.body.clone(), close),
            ],
        }
    }
}
