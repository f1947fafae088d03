//! Catalog building: ordering, indexing and nesting of module keys.

use std::cmp::Ordering;

use indexmap::{IndexMap, map::Entry};

use crate::{CatalogEntry, Error, KeyScheme, Result};

/// Ordered mapping from key (or key segment) to node.
pub type CatalogTree = IndexMap<String, CatalogNode>;

/// A value in the catalog tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogNode {
    /// A module reference.
    Module(ModuleRef),
    /// A directory, only present under the deep scheme.
    Directory(CatalogTree),
}

/// Reference from the tree back into the flat entry list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleRef {
    /// Position of the entry in the flat order. AMD argument index.
    pub index: usize,
}

/// The ordered set of modules for one generation run.
#[derive(Debug, Clone)]
pub struct Catalog {
    scheme: KeyScheme,
    entries: Vec<CatalogEntry>,
    tree: CatalogTree,
}

impl Catalog {
    /// Order `entries`, reject key collisions and build the tree for `scheme`.
    ///
    /// Flat order puts files directly under the root first, then everything
    /// else, each group ascending by key. The comparison is by byte value,
    /// never locale-aware.
    pub fn build(entries: impl IntoIterator<Item = CatalogEntry>, scheme: KeyScheme) -> Result<Self> {
        let mut entries: Vec<CatalogEntry> = entries.into_iter().collect();
        entries.sort_by(flat_order);

        if let Some(pair) = entries.windows(2).find(|w| w[0].key == w[1].key) {
            return Err(Box::new(Error::DuplicateKey {
                key: pair[0].key.clone(),
                first: pair[0].source.clone(),
                second: pair[1].source.clone(),
            }));
        }

        let tree = match scheme {
            KeyScheme::Flat => entries
                .iter()
                .enumerate()
                .map(|(index, entry)| (entry.key.clone(), CatalogNode::Module(ModuleRef { index })))
                .collect(),
            KeyScheme::Deep => nest(&entries)?,
        };

        tracing::debug!(modules = entries.len(), ?scheme, "built catalog");

        Ok(Self {
            scheme,
            entries,
            tree,
        })
    }

    pub fn scheme(&self) -> KeyScheme {
        self.scheme
    }

    /// Entries in flat order. An entry's position is its AMD argument index.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Flat keys in render order.
    pub fn ordered_keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn tree(&self) -> &CatalogTree {
        &self.tree
    }

    /// Resolve a tree reference back to its entry.
    pub fn entry(&self, module: ModuleRef) -> &CatalogEntry {
        &self.entries[module.index]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Root-level files first, then by extension-stripped key. The source path
/// only breaks ties between entries that already collide.
fn flat_order(a: &CatalogEntry, b: &CatalogEntry) -> Ordering {
    (!a.is_root_level(), &a.key, &a.source).cmp(&(!b.is_root_level(), &b.key, &b.source))
}

/// Within each directory: files before subdirectories, then by name.
fn deep_order(a: &[String], b: &[String]) -> Ordering {
    for (i, (x, y)) in a.iter().zip(b).enumerate() {
        let a_leaf = i + 1 == a.len();
        let b_leaf = i + 1 == b.len();
        match (a_leaf, b_leaf) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
        match x.cmp(y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    a.len().cmp(&b.len())
}

fn nest(entries: &[CatalogEntry]) -> Result<CatalogTree> {
    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by(|&a, &b| deep_order(&entries[a].segments, &entries[b].segments));

    let mut root = CatalogTree::new();
    for index in order {
        let entry = &entries[index];
        let Some((leaf, dirs)) = entry.segments.split_last() else {
            continue;
        };

        let mut level = &mut root;
        for (depth, dir) in dirs.iter().enumerate() {
            let node = level
                .entry(dir.clone())
                .or_insert_with(|| CatalogNode::Directory(CatalogTree::new()));
            level = match node {
                CatalogNode::Directory(children) => children,
                CatalogNode::Module(existing) => {
                    return Err(Box::new(Error::DuplicateKey {
                        key: entry.segments[..=depth].join("/"),
                        first: entries[existing.index].source.clone(),
                        second: entry.source.clone(),
                    }));
                }
            };
        }

        match level.entry(leaf.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(CatalogNode::Module(ModuleRef { index }));
            }
            Entry::Occupied(_) => {
                return Err(Box::new(Error::DuplicateKey {
                    key: entry.key.clone(),
                    first: format!("{}/", entry.key),
                    second: entry.source.clone(),
                }));
            }
        }
    }

    Ok(root)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::derive_key;

    fn entries(paths: &[&str]) -> Vec<CatalogEntry> {
        let root = Path::new("/r");
        paths
            .iter()
            .map(|p| derive_key(root, &root.join(p)).unwrap())
            .collect()
    }

    fn fixture() -> Vec<CatalogEntry> {
        entries(&[
            "ts/file2.ts",
            "js/file1.js",
            "rootjs.js",
            "coffee/file2.coffee",
            "roothtml.html",
            "coffee/file1.coffee",
            "js/file2.js",
            "rootcss.css",
        ])
    }

    fn keys(tree: &CatalogTree) -> Vec<&str> {
        tree.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_flat_order_root_files_first() {
        let catalog = Catalog::build(fixture(), KeyScheme::Flat).unwrap();
        let keys: Vec<&str> = catalog.ordered_keys().collect();
        assert_eq!(
            keys,
            [
                "rootcss",
                "roothtml",
                "rootjs",
                "coffee/file1",
                "coffee/file2",
                "js/file1",
                "js/file2",
                "ts/file2",
            ]
        );
    }

    #[test]
    fn test_flat_tree_matches_entry_order() {
        let catalog = Catalog::build(fixture(), KeyScheme::Flat).unwrap();
        let flat: Vec<&str> = catalog.ordered_keys().collect();
        assert_eq!(keys(catalog.tree()), flat);

        for (index, node) in catalog.tree().values().enumerate() {
            assert_eq!(node, &CatalogNode::Module(ModuleRef { index }));
        }
    }

    #[test]
    fn test_deep_tree_nests_directories() {
        let catalog = Catalog::build(fixture(), KeyScheme::Deep).unwrap();
        let tree = catalog.tree();
        assert_eq!(
            keys(tree),
            ["rootcss", "roothtml", "rootjs", "coffee", "js", "ts"]
        );

        let CatalogNode::Directory(js) = &tree["js"] else {
            panic!("js should be a directory");
        };
        assert_eq!(keys(js), ["file1", "file2"]);
        let CatalogNode::Module(file2) = js["file2"] else {
            panic!("file2 should be a module");
        };
        assert_eq!(file2.index, 6);
        assert_eq!(catalog.entry(file2).import_path, "./js/file2");
    }

    #[test]
    fn test_deep_files_precede_subdirectories() {
        let catalog = Catalog::build(
            entries(&["a/z.js", "a/b/c.js", "a/b/a.js", "top.js"]),
            KeyScheme::Deep,
        )
        .unwrap();

        let CatalogNode::Directory(a) = &catalog.tree()["a"] else {
            panic!("a should be a directory");
        };
        assert_eq!(keys(a), ["z", "b"]);

        // Flat order is by full key, so indices differ from the nesting order.
        let flat: Vec<&str> = catalog.ordered_keys().collect();
        assert_eq!(flat, ["top", "a/b/a", "a/b/c", "a/z"]);
        assert_eq!(a["z"], CatalogNode::Module(ModuleRef { index: 3 }));
    }

    #[test]
    fn test_ordering_is_bytewise() {
        let catalog =
            Catalog::build(entries(&["b.js", "B.js", "a.js", "_x.js"]), KeyScheme::Flat).unwrap();
        let keys: Vec<&str> = catalog.ordered_keys().collect();
        assert_eq!(keys, ["B", "_x", "a", "b"]);
    }

    #[test]
    fn test_flat_order_uses_stripped_key() {
        // By full path `x/a-b.js` would sort before `x/a.js`.
        let catalog = Catalog::build(
            entries(&["x/a-b.js", "rootb.js", "x/a.js", "root.js"]),
            KeyScheme::Flat,
        )
        .unwrap();
        let keys: Vec<&str> = catalog.ordered_keys().collect();
        assert_eq!(keys, ["root", "rootb", "x/a", "x/a-b"]);
    }

    #[test]
    fn test_duplicate_flat_key() {
        let err = Catalog::build(entries(&["a.js", "a.css"]), KeyScheme::Flat).unwrap_err();
        match *err {
            Error::DuplicateKey { key, first, second } => {
                assert_eq!(key, "a");
                assert_eq!(first, "a.css");
                assert_eq!(second, "a.js");
            }
            other => panic!("expected duplicate key, got {other:?}"),
        }
    }

    #[test]
    fn test_deep_file_and_directory_collide() {
        let err = Catalog::build(entries(&["js.js", "js/file1.js"]), KeyScheme::Deep).unwrap_err();
        match *err {
            Error::DuplicateKey { key, first, second } => {
                assert_eq!(key, "js");
                assert_eq!(first, "js.js");
                assert_eq!(second, "js/file1.js");
            }
            other => panic!("expected duplicate key, got {other:?}"),
        }

        // The flat scheme has distinct keys for the same files.
        assert!(Catalog::build(entries(&["js.js", "js/file1.js"]), KeyScheme::Flat).is_ok());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::build(Vec::new(), KeyScheme::Deep).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.tree().is_empty());
    }
}
