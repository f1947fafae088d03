use barrel_catalog::Catalog;

use super::{argument, finish};
use crate::ast::{Define, JsArray, JsObject, Quote};

/// The dependency array lists the flat keys; `arguments[i]` is the i-th one.
pub(super) fn render(catalog: &Catalog) -> String {
    let dependencies = JsArray::from_strings(catalog.ordered_keys());
    let object = catalog
        .entries()
        .iter()
        .enumerate()
        .fold(JsObject::new(Quote::Single), |obj, (index, entry)| {
            obj.raw(&entry.key, argument(index))
        });

    finish(&[&Define::with_dependencies(dependencies).body(object.fragments_with("return ", ""))])
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use barrel_catalog::{KeyScheme, derive_key};

    use super::*;

    #[test]
    fn test_render() {
        let root = Path::new("/r");
        let entries = ["css/a.css", "b.js"]
            .iter()
            .map(|p| derive_key(root, &root.join(p)).unwrap());
        let catalog = Catalog::build(entries, KeyScheme::Flat).unwrap();

        assert_eq!(
            render(&catalog),
            "define([
    'b',
    'css/a'
], function() {
    return {
        'b': arguments[0],
        'css/a': arguments[1]
    }
});"
        );
    }

    #[test]
    fn test_render_empty() {
        let catalog = Catalog::build(Vec::new(), KeyScheme::Flat).unwrap();
        assert_eq!(
            render(&catalog),
            "define([], function() {\n    return {}\n});"
        );
    }
}
