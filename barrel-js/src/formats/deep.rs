//! Nested-object renderers: one object level per directory.

use barrel_catalog::{Catalog, CatalogNode, CatalogTree, ModuleRef};

use super::{argument, finish, require};
use crate::ast::{Define, JsArray, JsObject, PropertyValue, Quote};

pub(super) fn render_common_js(catalog: &Catalog) -> String {
    let object = nested(catalog.tree(), &|module| {
        PropertyValue::Raw(require(&catalog.entry(module).import_path))
    });

    finish(&[&Define::factory().body(object.fragments_with("return ", ";"))])
}

/// Leaves are the string `"arguments[i]"`, not the expression.
pub(super) fn render_amd(catalog: &Catalog) -> String {
    let dependencies = JsArray::from_strings(catalog.ordered_keys());
    let object = nested(catalog.tree(), &|module| {
        PropertyValue::String(argument(module.index))
    });

    finish(&[&Define::with_dependencies(dependencies).body(object.fragments_with("return ", ";"))])
}

fn nested(tree: &CatalogTree, leaf: &dyn Fn(ModuleRef) -> PropertyValue) -> JsObject {
    let mut object = JsObject::new(Quote::Double);
    for (key, node) in tree {
        let value = match node {
            CatalogNode::Module(module) => leaf(*module),
            CatalogNode::Directory(children) => PropertyValue::Object(nested(children, leaf)),
        };
        object.push(key, value);
    }
    object
}
