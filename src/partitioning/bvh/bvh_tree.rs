use super::{bvh_binned_build, bvh_median_build};
use crate::bounding_volume::Aabb;
use crate::math::Point;
use crate::shape::Triangle;

/// The strategy used to pick the split plane during a one-time build of the tree.
#[derive(Default, Clone, Debug, Copy, PartialEq, Eq)]
pub enum BvhBuildStrategy {
    /// Every node is split at the median of the triangle centroids projected on
    /// the longest axis of their bounds.
    ///
    /// The simplest and fastest strategy; tree quality is acceptable for
    /// reasonably uniform meshes.
    #[default]
    Median,
    /// Nodes holding at most [`BvhOptions::sah_threshold`] triangles are split
    /// with a binned Surface-Area-Heuristic sweep; larger nodes fall back to a
    /// median split.
    ///
    /// SAH evaluation cost grows with the triangle count, which is why it is
    /// restricted to the smaller nodes.
    Hybrid,
}

/// Build-time parameters of a [`Bvh`].
///
/// None of these can be changed after construction.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub struct BvhOptions {
    /// The maximum number of triangles a leaf may hold before it must be split.
    pub leaf_capacity: usize,
    /// Triangle count at or below which the hybrid build evaluates a binned SAH
    /// split instead of a median split.
    ///
    /// Only relevant for [`BvhBuildStrategy::Hybrid`].
    pub sah_threshold: usize,
    /// The number of equal-width bins of the SAH sweep.
    ///
    /// Only relevant for [`BvhBuildStrategy::Hybrid`].
    pub num_bins: usize,
}

impl Default for BvhOptions {
    fn default() -> Self {
        Self {
            leaf_capacity: 256,
            sah_threshold: 256,
            num_bins: 16,
        }
    }
}

/// A node (internal or leaf) of a [`Bvh`].
///
/// A node is a leaf iff it has no children, in which case it holds the indices
/// of the triangles it contains. Every node's bounding box encloses the union
/// of its children's boxes.
#[derive(Clone, Debug)]
pub struct BvhNode {
    pub(super) aabb: Aabb,
    pub(super) children: Option<Box<(BvhNode, BvhNode)>>,
    pub(super) triangles: Vec<u32>,
}

impl BvhNode {
    #[inline]
    pub(super) fn leaf(aabb: Aabb, triangles: Vec<u32>) -> Self {
        Self {
            aabb,
            children: None,
            triangles,
        }
    }

    #[inline]
    pub(super) fn internal(aabb: Aabb, left: BvhNode, right: BvhNode) -> Self {
        Self {
            aabb,
            children: Some(Box::new((left, right))),
            triangles: Vec::new(),
        }
    }

    /// The bounding box of this node.
    #[inline]
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// Is this node a leaf?
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// The two children of this node, or `None` if it is a leaf.
    #[inline]
    pub fn children(&self) -> Option<(&BvhNode, &BvhNode)> {
        self.children.as_deref().map(|c| (&c.0, &c.1))
    }

    /// The indices of the triangles held by this node.
    ///
    /// This is empty for internal nodes: triangles only live in the leaves.
    #[inline]
    pub fn triangle_indices(&self) -> &[u32] {
        &self.triangles
    }

    /// The depth of the subtree rooted at this node: 0 for a leaf, one more
    /// than the deepest child otherwise.
    pub fn depth(&self) -> u32 {
        match &self.children {
            None => 0,
            Some(c) => 1 + c.0.depth().max(c.1.depth()),
        }
    }
}

/// A binary bounding-volume hierarchy over a triangle buffer.
///
/// The tree owns the triangle buffer it was built from; leaves reference the
/// buffer by index, and every triangle appears in exactly one leaf.
#[derive(Clone, Debug)]
pub struct Bvh {
    pub(super) root: BvhNode,
    pub(super) triangles: Vec<Triangle>,
}

impl Bvh {
    /// Builds a BVH over `triangles` with the given strategy and default
    /// [`BvhOptions`].
    ///
    /// An empty input yields a root that is an empty, zero-size leaf rather
    /// than an error; callers should treat it as "nothing to query".
    pub fn from_triangles(strategy: BvhBuildStrategy, triangles: Vec<Triangle>) -> Self {
        Self::with_options(strategy, triangles, BvhOptions::default())
    }

    /// Builds a BVH over `triangles` with the given strategy and options.
    pub fn with_options(
        strategy: BvhBuildStrategy,
        triangles: Vec<Triangle>,
        options: BvhOptions,
    ) -> Self {
        let root = if triangles.is_empty() {
            BvhNode::leaf(Aabb::new(Point::origin(), Point::origin()), Vec::new())
        } else {
            let subset = (0..triangles.len() as u32).collect();
            match strategy {
                BvhBuildStrategy::Median => {
                    bvh_median_build::build_median(&triangles, subset, &options)
                }
                BvhBuildStrategy::Hybrid => {
                    bvh_binned_build::build_hybrid(&triangles, subset, &options)
                }
            }
        };

        Self { root, triangles }
    }

    /// The root node of this tree.
    #[inline]
    pub fn root(&self) -> &BvhNode {
        &self.root
    }

    /// The triangle buffer this tree was built over.
    ///
    /// Leaf [`BvhNode::triangle_indices`] index into this slice.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// The depth of this tree, i.e. the maximum depth over all its leaves.
    ///
    /// Useful for clamping a user-supplied draw depth during debug rendering.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.root.depth()
    }
}
