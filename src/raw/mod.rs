mod build;
mod node;
mod raw_tree;
mod size;

pub(crate) use build::normalize;
pub(crate) use raw_tree::{RawIter, RawTree};
