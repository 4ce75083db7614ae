use super::bvh_tree::{BvhNode, BvhOptions};
use crate::bounding_volume::details::{triangle_set_aabb, triangle_set_centroid_aabb};
use crate::shape::Triangle;

/// Builds a subtree over `subset` with recursive median splits.
///
/// The split axis is the longest axis of the bounds of the member centroids
/// (not of the member boxes, which would over-weigh large triangles), and the
/// set is cut at the median of the centroid projections on that axis.
/// Termination is guaranteed because both halves of a split are strictly
/// smaller than their parent set.
pub(super) fn build_median(
    triangles: &[Triangle],
    subset: Vec<u32>,
    options: &BvhOptions,
) -> BvhNode {
    let aabb = triangle_set_aabb(triangles, &subset);

    if subset.len() <= options.leaf_capacity {
        return BvhNode::leaf(aabb, subset);
    }

    let centroid_aabb = triangle_set_centroid_aabb(triangles, &subset);
    let axis = centroid_aabb.extents().imax();
    let (left, right) = median_partition_on_axis(triangles, subset, axis);

    BvhNode::internal(
        aabb,
        build_median(triangles, left, options),
        build_median(triangles, right, options),
    )
}

/// Stably orders `subset` by centroid coordinate along `axis` and cuts it at
/// the midpoint index, the left half getting the smaller part on odd counts.
pub(super) fn median_partition_on_axis(
    triangles: &[Triangle],
    mut subset: Vec<u32>,
    axis: usize,
) -> (Vec<u32>, Vec<u32>) {
    subset.sort_by(|i, j| {
        let ci = triangles[*i as usize].centroid()[axis];
        let cj = triangles[*j as usize].centroid()[axis];
        ci.total_cmp(&cj)
    });

    let mid = subset.len() / 2;
    let right = subset.split_off(mid);
    (subset, right)
}
