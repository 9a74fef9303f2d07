//! Project hierarchy derived from path ancestry
//!
//! A project's mapped path is its record directory, which sits two levels
//! below the project root. Any directory above that root whose name is
//! itself a known project makes that project an ancestor.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Component, Path, PathBuf};

use super::mapping::ProjectMapping;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ProjectNode {
    pub(crate) id: String,
    pub(crate) path: PathBuf,
    pub(crate) parent: Option<String>,
    pub(crate) children: BTreeSet<String>,
}

pub(crate) type ProjectTree = BTreeMap<String, ProjectNode>;

pub(crate) fn build(mapping: &ProjectMapping) -> ProjectTree {
    let mut tree: ProjectTree = mapping
        .iter()
        .map(|(id, path)| {
            let node = ProjectNode {
                id: id.clone(),
                path: path.clone(),
                parent: None,
                children: BTreeSet::new(),
            };
            (id.clone(), node)
        })
        .collect();

    for (id, path) in mapping.iter() {
        let Some(grandparent) = path.parent().and_then(Path::parent) else {
            continue;
        };
        // Root first, so the nearest matching ancestor ends up as parent.
        for component in grandparent.components() {
            let Component::Normal(name) = component else {
                continue;
            };
            let Some(name) = name.to_str() else {
                continue;
            };
            if name == id || !mapping.contains(name) {
                continue;
            }
            if let Some(node) = tree.get_mut(id) {
                node.parent = Some(name.to_string());
            }
            if let Some(ancestor) = tree.get_mut(name) {
                ancestor.children.insert(id.clone());
            }
        }
    }

    tree
}

/// Identifiers without a parent, in order.
pub(crate) fn roots(tree: &ProjectTree) -> Vec<&str> {
    tree.values()
        .filter(|node| node.parent.is_none())
        .map(|node| node.id.as_str())
        .collect()
}

/// Parent chain of `id`, nearest first. Stops on a repeated identifier.
pub(crate) fn ancestors<'a>(tree: &'a ProjectTree, id: &str) -> Vec<&'a str> {
    let mut chain: Vec<&str> = Vec::new();
    let mut current = tree.get(id).and_then(|node| node.parent.as_deref());
    while let Some(parent) = current {
        if parent == id || chain.contains(&parent) {
            break;
        }
        chain.push(parent);
        current = tree.get(parent).and_then(|node| node.parent.as_deref());
    }
    chain
}
