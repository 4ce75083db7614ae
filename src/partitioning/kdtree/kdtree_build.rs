use super::kdtree_tree::{KdNode, KdSplitPlane, KdTreeOptions, KdTreeStrategy};
use crate::bounding_volume::details::triangle_set_aabb;
use crate::math::Real;
use crate::shape::Triangle;

/// Builds a subtree over `subset` with recursive midpoint splits.
///
/// A node becomes a leaf as soon as any of the three conditions holds: its
/// triangle count fits the leaf capacity, it sits at the maximum depth, or one
/// of its box dimensions fell below the minimum extent. Otherwise the split
/// plane is the spatial midpoint of the longest axis of the node bounds, and
/// the strategy decides how triangles are assigned to the two sides.
pub(super) fn build_node(
    triangles: &[Triangle],
    subset: Vec<u32>,
    depth: u32,
    strategy: KdTreeStrategy,
    options: &KdTreeOptions,
) -> KdNode {
    let aabb = triangle_set_aabb(triangles, &subset);
    let extents = aabb.extents();

    if subset.len() <= options.leaf_capacity
        || depth >= options.max_depth
        || extents.min() < options.min_extent
    {
        return KdNode::leaf(aabb, subset);
    }

    let axis = extents.imax();
    let position = (aabb.mins[axis] + aabb.maxs[axis]) / 2.0;

    let (left, right) = match strategy {
        KdTreeStrategy::Centroid => partition_by_centroid(triangles, &subset, axis, position),
        KdTreeStrategy::Spatial => partition_by_extent(triangles, &subset, axis, position),
    };

    // If the midpoint plane failed to separate the set at all, recursing would
    // never terminate; emit a leaf holding the full set instead.
    if left.is_empty()
        || right.is_empty()
        || left.len() == subset.len()
        || right.len() == subset.len()
    {
        log::debug!(
            "unsplittable k-d node at depth {} (axis {}, position {}, {} triangles), emitting a leaf",
            depth,
            axis,
            position,
            subset.len()
        );
        return KdNode::leaf(aabb, subset);
    }

    KdNode::internal(
        aabb,
        KdSplitPlane { axis, position },
        build_node(triangles, left, depth + 1, strategy, options),
        build_node(triangles, right, depth + 1, strategy, options),
    )
}

/// Assigns each triangle to exactly one side by a single comparison of its
/// centroid coordinate against the plane.
fn partition_by_centroid(
    triangles: &[Triangle],
    subset: &[u32],
    axis: usize,
    position: Real,
) -> (Vec<u32>, Vec<u32>) {
    let mut left = Vec::new();
    let mut right = Vec::new();

    for &i in subset {
        if triangles[i as usize].centroid()[axis] < position {
            left.push(i);
        } else {
            right.push(i);
        }
    }

    (left, right)
}

/// Assigns each triangle by its bounding-box extent: a box straddling the
/// plane puts the triangle on both sides, otherwise it goes to the side that
/// fully contains it.
fn partition_by_extent(
    triangles: &[Triangle],
    subset: &[u32],
    axis: usize,
    position: Real,
) -> (Vec<u32>, Vec<u32>) {
    let mut left = Vec::new();
    let mut right = Vec::new();

    for &i in subset {
        let aabb = triangles[i as usize].aabb();

        if aabb.mins[axis] < position && aabb.maxs[axis] > position {
            left.push(i);
            right.push(i);
        } else if aabb.maxs[axis] <= position {
            left.push(i);
        } else {
            right.push(i);
        }
    }

    (left, right)
}
