use super::octree_tree::{OctreeNode, OctreeOptions};
use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::Vector;
use crate::shape::Triangle;

/// Builds a subtree over `subset` inside the a-priori box `aabb`.
///
/// The leaf conditions mirror the k-d tree's: capacity, maximum depth, or a
/// box dimension below the minimum extent. Otherwise the box is subdivided
/// into 8 equal octants and every triangle is forwarded to each octant its
/// bounding box intersects; octants left empty stay as empty leaves and are
/// not recursed into.
pub(super) fn build_node(
    triangles: &[Triangle],
    subset: Vec<u32>,
    aabb: Aabb,
    depth: u32,
    options: &OctreeOptions,
) -> OctreeNode {
    let extents = aabb.extents();

    if subset.len() <= options.leaf_capacity
        || depth >= options.max_depth
        || extents.min() < options.min_extent
    {
        return OctreeNode::leaf(aabb, subset);
    }

    let mut any_child_has_triangles = false;
    let children = octant_aabbs(&aabb).map(|child_aabb| {
        let child_subset: Vec<u32> = subset
            .iter()
            .copied()
            .filter(|&i| child_aabb.intersects(triangles[i as usize].aabb()))
            .collect();

        if child_subset.is_empty() {
            OctreeNode::leaf(child_aabb, Vec::new())
        } else {
            any_child_has_triangles = true;
            build_node(triangles, child_subset, child_aabb, depth + 1, options)
        }
    });

    // Only possible when every member box degenerates onto the parent box's
    // boundary; discard the useless subdivision and keep the set here.
    if !any_child_has_triangles {
        log::debug!(
            "all 8 octants empty at depth {}, reverting the node to a leaf of {} triangles",
            depth,
            subset.len()
        );
        return OctreeNode::leaf(aabb, subset);
    }

    OctreeNode::internal(aabb, children)
}

/// The 8 equal octant boxes of `parent`: half its size, centered at a
/// quarter-extent offset from its center along each axis.
pub(super) fn octant_aabbs(parent: &Aabb) -> [Aabb; 8] {
    let center = parent.center();
    let child_half = parent.half_extents() / 2.0;
    let mut octants = [*parent; 8];

    let mut i = 0;
    for sx in [-1.0, 1.0] {
        for sy in [-1.0, 1.0] {
            for sz in [-1.0, 1.0] {
                let offset = Vector::new(
                    sx * child_half.x,
                    sy * child_half.y,
                    sz * child_half.z,
                );
                octants[i] = Aabb::from_half_extents(center + offset, child_half);
                i += 1;
            }
        }
    }

    octants
}
