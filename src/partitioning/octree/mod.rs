pub use octree_tree::{Octree, OctreeNode, OctreeOptions};

mod octree_build;
mod octree_tree;
