use barrel_catalog::Catalog;

use super::{finish, require};
use crate::ast::{Define, JsObject, Quote};

pub(super) fn render(catalog: &Catalog) -> String {
    let object = catalog
        .entries()
        .iter()
        .fold(JsObject::new(Quote::Single), |obj, entry| {
            obj.raw(&entry.key, require(&entry.import_path))
        });

    finish(&[&Define::factory().body(object.fragments_with("return ", ";"))])
}
