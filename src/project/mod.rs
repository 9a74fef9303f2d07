//! Project mapping and the hierarchy derived from it

mod mapping;
mod tree;

pub(crate) use mapping::ProjectMapping;
pub(crate) use tree::{ProjectNode, ProjectTree, ancestors, build, roots};
