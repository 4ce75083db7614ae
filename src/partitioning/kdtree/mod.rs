pub use kdtree_tree::{KdNode, KdSplitPlane, KdTree, KdTreeOptions, KdTreeStrategy};

mod kdtree_build;
mod kdtree_tree;

#[cfg(test)]
mod kdtree_tests;
