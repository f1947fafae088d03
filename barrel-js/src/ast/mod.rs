//! JavaScript syntax builders for catalog files.
//!
//! Each builder produces [`CodeFragment`](barrel_codegen::CodeFragment)s that
//! are rendered through a [`CodeBuilder`](barrel_codegen::CodeBuilder).

mod arrays;
mod define;
mod exports;
mod imports;
mod objects;

pub use arrays::JsArray;
pub use define::Define;
pub use exports::ExportDefault;
pub use imports::Import;
pub use objects::{JsObject, Property, PropertyValue, Quote};
