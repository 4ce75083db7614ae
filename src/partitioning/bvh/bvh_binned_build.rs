use super::bvh_median_build::median_partition_on_axis;
use super::bvh_tree::{BvhNode, BvhOptions};
use crate::bounding_volume::details::{triangle_set_aabb, triangle_set_centroid_aabb};
use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::Real;
use crate::shape::Triangle;

/// Below this centroid extent the split axis is considered zero-width and
/// cannot be binned.
const BIN_EPSILON: Real = 1.0e-5;

/// Builds a subtree over `subset` with the hybrid median + binned-SAH strategy.
///
/// Nodes holding more than `options.sah_threshold` triangles are split at the
/// median (the SAH sweep is too expensive there); the rest get a binned
/// Surface-Area-Heuristic split, which falls back to the median split whenever
/// the node is degenerate.
pub(super) fn build_hybrid(
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

    let (left, right) = if subset.len() <= options.sah_threshold {
        binned_sah_partition(triangles, subset, axis, &centroid_aabb, &aabb, options)
    } else {
        median_partition_on_axis(triangles, subset, axis)
    };

    BvhNode::internal(
        aabb,
        build_hybrid(triangles, left, options),
        build_hybrid(triangles, right, options),
    )
}

#[derive(Clone)]
struct BvhBin {
    aabb: Aabb,
    triangles: Vec<u32>,
}

impl Default for BvhBin {
    fn default() -> Self {
        Self {
            aabb: Aabb::new_invalid(),
            triangles: Vec::new(),
        }
    }
}

/// Picks the minimum-cost split plane among `num_bins - 1` candidates along
/// `axis`, under the standard ray-tracing cost model: the cost of a candidate
/// is `(leftArea * leftCount + rightArea * rightCount) / parentArea`, i.e.
/// the probability of hitting a side (its surface-area share) times the
/// number of primitives to test on that side.
fn binned_sah_partition(
    triangles: &[Triangle],
    subset: Vec<u32>,
    axis: usize,
    centroid_aabb: &Aabb,
    parent_aabb: &Aabb,
    options: &BvhOptions,
) -> (Vec<u32>, Vec<u32>) {
    let num_bins = options.num_bins;
    let min = centroid_aabb.mins[axis];
    let max = centroid_aabb.maxs[axis];

    // All centroids (or nearly all) coincide along the split axis: a
    // zero-width axis cannot be binned.
    if max - min < BIN_EPSILON || num_bins < 2 {
        log::debug!(
            "degenerate SAH split axis {} (extent {}), falling back to a median split",
            axis,
            max - min
        );
        return median_partition_on_axis(triangles, subset, axis);
    }

    let bin_width = (max - min) / num_bins as Real;
    let mut bins = vec![BvhBin::default(); num_bins];

    // Clamping to the last bin absorbs floating-point edge cases at `max`.
    for &i in &subset {
        let c = triangles[i as usize].centroid()[axis];
        let bin_id = (((c - min) / bin_width) as usize).min(num_bins - 1);
        let bin = &mut bins[bin_id];
        bin.aabb.merge(triangles[i as usize].aabb());
        bin.triangles.push(i);
    }

    // Suffix-accumulated bounds for the right side of every candidate plane.
    let mut right_merges = vec![Aabb::new_invalid(); num_bins];
    let mut right_acc = Aabb::new_invalid();
    for i in (0..num_bins).rev() {
        right_acc.merge(&bins[i].aabb);
        right_merges[i] = right_acc;
    }

    // Sweep the candidate planes `1..num_bins` (never 0, so the left side is
    // guaranteed non-empty whenever a candidate is valid), accumulating the
    // left side as we go.
    let parent_area = parent_aabb.surface_area();
    let mut best_cost = Real::MAX;
    let mut best_plane = None;
    let mut left_acc = Aabb::new_invalid();
    let mut left_count = 0;

    for i in 1..num_bins {
        left_acc.merge(&bins[i - 1].aabb);
        left_count += bins[i - 1].triangles.len();
        let right_count = subset.len() - left_count;

        if left_count == 0 || right_count == 0 {
            continue;
        }

        let cost = (left_acc.surface_area() * left_count as Real
            + right_merges[i].surface_area() * right_count as Real)
            / parent_area;

        if cost < best_cost {
            best_cost = cost;
            best_plane = Some(i);
        }
    }

    match best_plane {
        None => {
            log::debug!("no valid SAH candidate split, falling back to a median split");
            median_partition_on_axis(triangles, subset, axis)
        }
        Some(plane) => {
            // Materialize the winning sides directly from the bins.
            let mut left = Vec::new();
            let mut right = Vec::new();
            for (i, bin) in bins.iter().enumerate() {
                if i < plane {
                    left.extend_from_slice(&bin.triangles);
                } else {
                    right.extend_from_slice(&bin.triangles);
                }
            }
            (left, right)
        }
    }
}
