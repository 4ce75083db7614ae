use super::kdtree_build;
use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::Triangle;

/// The rule used to assign triangles to the two sides of a k-d split plane.
#[derive(Default, Clone, Debug, Copy, PartialEq, Eq)]
pub enum KdTreeStrategy {
    /// A triangle's bounding-box extent is tested against the split plane: a
    /// box straddling the plane puts the triangle on *both* sides, otherwise
    /// it goes to the side that fully contains it.
    ///
    /// Duplication buys tighter per-leaf geometry at the cost of memory; this
    /// is the preferred structure for tight spatial queries such as ray
    /// intersection.
    #[default]
    Spatial,
    /// Each triangle is assigned to exactly one side by comparing its centroid
    /// against the split plane (also called an object k-d tree).
    ///
    /// No duplication; builds faster and uses less memory than
    /// [`KdTreeStrategy::Spatial`].
    Centroid,
}

/// Build-time parameters of a [`KdTree`].
///
/// None of these can be changed after construction.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct KdTreeOptions {
    /// The maximum number of triangles a leaf may hold before it must be split.
    pub leaf_capacity: usize,
    /// Nodes at this depth are never subdivided.
    pub max_depth: u32,
    /// Nodes with any bounding-box dimension below this size are never
    /// subdivided.
    ///
    /// This prevents pathological deep recursion on degenerate or heavily
    /// overlapping geometry; tune it to the model units.
    pub min_extent: Real,
}

impl Default for KdTreeOptions {
    fn default() -> Self {
        Self {
            leaf_capacity: 256,
            max_depth: 32,
            min_extent: 0.005,
        }
    }
}

/// The implicit axis-aligned split plane of an internal k-d tree node.
///
/// The plane is not stored as geometry, only as an axis and an offset along
/// that axis.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct KdSplitPlane {
    /// The splitting axis: 0 = X, 1 = Y, 2 = Z.
    pub axis: usize,
    /// The coordinate of the plane along `axis`.
    pub position: Real,
}

/// A node (internal or leaf) of a [`KdTree`].
///
/// A node is a leaf iff it has no children, in which case it holds the indices
/// of the triangles it contains. Internal nodes carry the split plane that
/// separates their children.
#[derive(Clone, Debug)]
pub struct KdNode {
    pub(super) aabb: Aabb,
    pub(super) split: Option<KdSplitPlane>,
    pub(super) children: Option<Box<(KdNode, KdNode)>>,
    pub(super) triangles: Vec<u32>,
}

impl KdNode {
    #[inline]
    pub(super) fn leaf(aabb: Aabb, triangles: Vec<u32>) -> Self {
        Self {
            aabb,
            split: None,
            children: None,
            triangles,
        }
    }

    #[inline]
    pub(super) fn internal(aabb: Aabb, split: KdSplitPlane, left: KdNode, right: KdNode) -> Self {
        Self {
            aabb,
            split: Some(split),
            children: Some(Box::new((left, right))),
            triangles: Vec::new(),
        }
    }

    /// The bounding box of this node, i.e. the union of its member triangles'
    /// boxes.
    #[inline]
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// Is this node a leaf?
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// The split plane separating this node's children, or `None` for a leaf.
    #[inline]
    pub fn split_plane(&self) -> Option<&KdSplitPlane> {
        self.split.as_ref()
    }

    /// The two children of this node, or `None` if it is a leaf.
    #[inline]
    pub fn children(&self) -> Option<(&KdNode, &KdNode)> {
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

/// A k-d tree over a triangle buffer.
///
/// Space is recursively split at the spatial midpoint of the longest axis of
/// the node bounds; the assignment of triangles to the two sides depends on
/// the [`KdTreeStrategy`]. With [`KdTreeStrategy::Centroid`] every triangle
/// appears in exactly one leaf; with [`KdTreeStrategy::Spatial`] a triangle
/// straddling a split plane appears in the leaves of both sides, but never
/// more than once per leaf.
#[derive(Clone, Debug)]
pub struct KdTree {
    pub(super) root: KdNode,
    pub(super) triangles: Vec<Triangle>,
}

impl KdTree {
    /// Builds a k-d tree over `triangles` with the given strategy and default
    /// [`KdTreeOptions`].
    ///
    /// An empty input yields a root that is an empty, zero-size leaf rather
    /// than an error; callers should treat it as "nothing to query".
    pub fn from_triangles(strategy: KdTreeStrategy, triangles: Vec<Triangle>) -> Self {
        Self::with_options(strategy, triangles, KdTreeOptions::default())
    }

    /// Builds a k-d tree over `triangles` with the given strategy and options.
    pub fn with_options(
        strategy: KdTreeStrategy,
        triangles: Vec<Triangle>,
        options: KdTreeOptions,
    ) -> Self {
        let root = if triangles.is_empty() {
            KdNode::leaf(Aabb::new(Point::origin(), Point::origin()), Vec::new())
        } else {
            let subset = (0..triangles.len() as u32).collect();
            kdtree_build::build_node(&triangles, subset, 0, strategy, &options)
        };

        Self { root, triangles }
    }

    /// The root node of this tree.
    #[inline]
    pub fn root(&self) -> &KdNode {
        &self.root
    }

    /// The triangle buffer this tree was built over.
    ///
    /// Leaf [`KdNode::triangle_indices`] index into this slice.
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
