use std::collections::HashMap;

use barrel_catalog::{Catalog, Error, Result};
use barrel_codegen::Renderable;

use super::finish;
use crate::ast::{ExportDefault, Import, JsObject, Quote};

/// Local binding name for a flat key: path separators become `_`.
pub fn identifier(key: &str) -> String {
    key.replace('/', "_")
}

pub(super) fn render(catalog: &Catalog) -> Result<String> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    let mut imports = Vec::with_capacity(catalog.len());
    let mut object = JsObject::new(Quote::Single);

    for entry in catalog.entries() {
        let name = identifier(&entry.key);
        if let Some(first) = seen.insert(name.clone(), &entry.key) {
            return Err(Box::new(Error::DuplicateIdentifier {
                identifier: name,
                first: first.to_string(),
                second: entry.key.clone(),
            }));
        }
        imports.push(Import::new(&name, &entry.import_path));
        object = object.shorthand(name);
    }

    let export = ExportDefault::new(object);
    let mut nodes: Vec<&dyn Renderable> = imports.iter().map(|i| i as &dyn Renderable).collect();
    nodes.push(&export);

    Ok(finish(&nodes))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use barrel_catalog::{KeyScheme, derive_key};

    use super::*;

    fn catalog(paths: &[&str]) -> Catalog {
        let root = Path::new("/r");
        let entries = paths.iter().map(|p| derive_key(root, &root.join(p)).unwrap());
        Catalog::build(entries, KeyScheme::Flat).unwrap()
    }

    #[test]
    fn test_identifier() {
        assert_eq!(identifier("rootjs"), "rootjs");
        assert_eq!(identifier("coffee/file1"), "coffee_file1");
        assert_eq!(identifier("a/b/c"), "a_b_c");
    }

    #[test]
    fn test_render() {
        assert_eq!(
            render(&catalog(&["coffee/file1.coffee", "rootjs.js"])).unwrap(),
            "import rootjs from './rootjs';
import coffee_file1 from './coffee/file1';
export default {
    rootjs,
    coffee_file1
}"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&catalog(&[])).unwrap(), "export default {}");
    }

    #[test]
    fn test_identifier_collision() {
        let err = render(&catalog(&["a/b.js", "a_b.js"])).unwrap_err();
        match *err {
            Error::DuplicateIdentifier {
                identifier,
                first,
                second,
            } => {
                assert_eq!(identifier, "a_b");
                assert_eq!(first, "a_b");
                assert_eq!(second, "a/b");
            }
            other => panic!("expected duplicate identifier, got {other:?}"),
        }
    }
}
