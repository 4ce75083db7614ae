use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Point, Real};
use crate::shape::Triangle;

/// Computes the AABB of a set of points.
pub fn local_point_cloud_aabb<I>(pts: I) -> Aabb
where
    I: IntoIterator<Item = Point<Real>>,
{
    let mut it = pts.into_iter();

    let p0 = it.next().expect(
        "Point cloud AABB construction: the input iterator should yield at least one point.",
    );
    let mut min: Point<Real> = p0;
    let mut max: Point<Real> = p0;

    for pt in it {
        min = min.inf(&pt);
        max = max.sup(&pt);
    }

    Aabb::new(min, max)
}

/// Computes the union of the cached bounding boxes of a subset of `triangles`.
///
/// `subset` contains indices into `triangles` and must not be empty.
pub fn triangle_set_aabb(triangles: &[Triangle], subset: &[u32]) -> Aabb {
    let mut it = subset.iter();
    let i0 = it
        .next()
        .expect("Triangle set AABB construction: the subset should contain at least one triangle.");
    let mut aabb = *triangles[*i0 as usize].aabb();

    for i in it {
        aabb.merge(triangles[*i as usize].aabb());
    }

    aabb
}

/// Computes the AABB of the centroids of a subset of `triangles`.
///
/// `subset` contains indices into `triangles` and must not be empty.
pub fn triangle_set_centroid_aabb(triangles: &[Triangle], subset: &[u32]) -> Aabb {
    local_point_cloud_aabb(subset.iter().map(|i| triangles[*i as usize].centroid()))
}
