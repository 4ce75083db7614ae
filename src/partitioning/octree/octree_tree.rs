use super::octree_build;
use crate::bounding_volume::details::triangle_set_aabb;
use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::Triangle;

/// Build-time parameters of an [`Octree`].
///
/// None of these can be changed after construction.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct OctreeOptions {
    /// The maximum number of triangles a node may hold before it must be
    /// subdivided.
    pub leaf_capacity: usize,
    /// Nodes at this depth are never subdivided.
    pub max_depth: u32,
    /// Nodes with any bounding-box dimension below this size are never
    /// subdivided.
    pub min_extent: Real,
}

impl Default for OctreeOptions {
    fn default() -> Self {
        Self {
            leaf_capacity: 4,
            max_depth: 8,
            min_extent: 0.01,
        }
    }
}

/// A node (internal or leaf) of an [`Octree`].
///
/// A node owns either exactly 0 or exactly 8 children, never a partial set. A
/// node is a leaf iff it has no children, in which case it holds the indices
/// of the triangles it contains; octant children that received no triangle are
/// kept as empty leaves. Unlike a BVH node, an octree node's box is the
/// a-priori spatial subdivision box, not tightened to the contained geometry.
#[derive(Clone, Debug)]
pub struct OctreeNode {
    pub(super) aabb: Aabb,
    pub(super) children: Option<Box<[OctreeNode; 8]>>,
    pub(super) triangles: Vec<u32>,
}

impl OctreeNode {
    #[inline]
    pub(super) fn leaf(aabb: Aabb, triangles: Vec<u32>) -> Self {
        Self {
            aabb,
            children: None,
            triangles,
        }
    }

    #[inline]
    pub(super) fn internal(aabb: Aabb, children: [OctreeNode; 8]) -> Self {
        Self {
            aabb,
            children: Some(Box::new(children)),
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

    /// The eight children of this node, or `None` if it is a leaf.
    #[inline]
    pub fn children(&self) -> Option<&[OctreeNode; 8]> {
        self.children.as_deref()
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
            Some(c) => 1 + c.iter().map(Self::depth).max().unwrap_or(0),
        }
    }
}

/// An eight-way spatial subdivision of the bounding box of a triangle set.
///
/// Each subdivision step splits a node's box into 8 equal octants; a triangle
/// is assigned to every octant its bounding box intersects, so triangles
/// straddling internal boundaries are duplicated across siblings (but appear
/// at most once per leaf).
#[derive(Clone, Debug)]
pub struct Octree {
    pub(super) root: OctreeNode,
    pub(super) triangles: Vec<Triangle>,
}

impl Octree {
    /// Builds an octree over `triangles` with the default [`OctreeOptions`].
    ///
    /// An empty input yields a root that is an empty, zero-size leaf rather
    /// than an error; callers should treat it as "nothing to query".
    pub fn from_triangles(triangles: Vec<Triangle>) -> Self {
        Self::with_options(triangles, OctreeOptions::default())
    }

    /// Builds an octree over `triangles` with the given options.
    ///
    /// The root covers the union bounding box of all input triangles.
    pub fn with_options(triangles: Vec<Triangle>, options: OctreeOptions) -> Self {
        let root = if triangles.is_empty() {
            OctreeNode::leaf(Aabb::new(Point::origin(), Point::origin()), Vec::new())
        } else {
            let subset: Vec<u32> = (0..triangles.len() as u32).collect();
            let aabb = triangle_set_aabb(&triangles, &subset);
            octree_build::build_node(&triangles, subset, aabb, 0, &options)
        };

        Self { root, triangles }
    }

    /// The root node of this tree.
    #[inline]
    pub fn root(&self) -> &OctreeNode {
        &self.root
    }

    /// The triangle buffer this tree was built over.
    ///
    /// Leaf [`OctreeNode::triangle_indices`] index into this slice.
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
