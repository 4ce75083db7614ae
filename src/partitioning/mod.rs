//! Spatial partitioning trees over a triangle soup.

pub use self::bvh::{Bvh, BvhBuildStrategy, BvhNode, BvhOptions, RefitError};
pub use self::kdtree::{KdNode, KdSplitPlane, KdTree, KdTreeOptions, KdTreeStrategy};
pub use self::octree::{Octree, OctreeNode, OctreeOptions};

mod bvh;
mod kdtree;
mod octree;
