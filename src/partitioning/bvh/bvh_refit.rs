use super::bvh_tree::{Bvh, BvhNode};
use crate::bounding_volume::details::triangle_set_aabb;
use crate::bounding_volume::BoundingVolume;
use crate::math::{Point, Real};
use crate::shape::Triangle;

/// Error returned when a refit is invoked against geometry that no longer
/// matches the tree.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum RefitError {
    /// The number of supplied triangles differs from the number of triangles
    /// the tree was built over.
    #[error("the tree holds {expected} triangles but {found} were supplied")]
    TriangleCountMismatch {
        /// The number of triangles stored at build time.
        expected: usize,
        /// The number of triangles supplied to the refit.
        found: usize,
    },
}

impl Bvh {
    /// Updates every bounding box of the tree after vertex motion, without
    /// re-splitting anything.
    ///
    /// `vertices` supplies the new vertex positions of every triangle, in the
    /// same order and count as the buffer the tree was built from; the `i`-th
    /// entry replaces the vertices of the `i`-th triangle. Leaves recompute
    /// each member triangle's box and centroid, then their own box as the
    /// union of the member boxes; internal nodes take the union of their two
    /// children's boxes, bottom-up. This is much cheaper than a rebuild.
    ///
    /// The existing left/right partition is trusted to still be a reasonable
    /// spatial split, which holds when the whole mesh moved rigidly or with a
    /// uniform scale. A non-uniform scale or any change of mesh topology
    /// invalidates the centroid ordering the tree was split on, and requires
    /// a fresh build instead; deciding between the two is the caller's job.
    pub fn refit(&mut self, vertices: &[[Point<Real>; 3]]) -> Result<(), RefitError> {
        if vertices.len() != self.triangles.len() {
            return Err(RefitError::TriangleCountMismatch {
                expected: self.triangles.len(),
                found: vertices.len(),
            });
        }

        for (tri, vtx) in self.triangles.iter_mut().zip(vertices.iter()) {
            tri.set_vertices(vtx[0], vtx[1], vtx[2]);
        }

        refit_node(&mut self.root, &self.triangles);
        Ok(())
    }
}

fn refit_node(node: &mut BvhNode, triangles: &[Triangle]) {
    match &mut node.children {
        None => {
            // An empty leaf only exists as the root of an empty build; its
            // zero-size box stays as-is.
            if !node.triangles.is_empty() {
                node.aabb = triangle_set_aabb(triangles, &node.triangles);
            }
        }
        Some(children) => {
            refit_node(&mut children.0, triangles);
            refit_node(&mut children.1, triangles);
            node.aabb = children.0.aabb.merged(&children.1.aabb);
        }
    }
}
