//! Definition of the triangle primitive.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, DIM};

/// A mesh triangle with a cached bounding box and centroid.
///
/// The box and centroid are derived from the vertices at construction time and
/// every time the vertices are replaced through [`Triangle::set_vertices`], so
/// they are always consistent with the current vertex positions. The vertices
/// are expected to already be in the coordinate space the tree is built in
/// (typically world space).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    a: Point<Real>,
    b: Point<Real>,
    c: Point<Real>,
    aabb: Aabb,
    centroid: Point<Real>,
}

impl From<[Point<Real>; 3]> for Triangle {
    fn from(arr: [Point<Real>; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        let (aabb, centroid) = Self::derived(&a, &b, &c);
        Triangle {
            a,
            b,
            c,
            aabb,
            centroid,
        }
    }

    fn derived(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> (Aabb, Point<Real>) {
        let mut mins = *a;
        let mut maxs = *a;

        for d in 0..DIM {
            mins[d] = a[d].min(b[d]).min(c[d]);
            maxs[d] = a[d].max(b[d]).max(c[d]);
        }

        let centroid = Point::from((a.coords + b.coords + c.coords) / 3.0);
        (Aabb::new(mins, maxs), centroid)
    }

    /// The triangle's first point.
    #[inline]
    pub fn a(&self) -> Point<Real> {
        self.a
    }

    /// The triangle's second point.
    #[inline]
    pub fn b(&self) -> Point<Real> {
        self.b
    }

    /// The triangle's third point.
    #[inline]
    pub fn c(&self) -> Point<Real> {
        self.c
    }

    /// The three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// The cached axis-aligned bounding box of this triangle.
    #[inline]
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// The cached centroid of this triangle, i.e. the mean of its vertices.
    #[inline]
    pub fn centroid(&self) -> Point<Real> {
        self.centroid
    }

    /// Replaces the vertices of this triangle and recomputes its bounding box
    /// and centroid.
    #[inline]
    pub fn set_vertices(&mut self, a: Point<Real>, b: Point<Real>, c: Point<Real>) {
        let (aabb, centroid) = Self::derived(&a, &b, &c);
        self.a = a;
        self.b = b;
        self.c = c;
        self.aabb = aabb;
        self.centroid = centroid;
    }
}

#[cfg(test)]
mod test {
    use super::Triangle;
    use crate::math::Point;

    #[test]
    fn cached_aabb_and_centroid() {
        let t = Triangle::new(
            Point::new(0.0, 0.0, 0.0),
            Point::new(3.0, 0.0, 0.0),
            Point::new(0.0, 3.0, -1.0),
        );

        assert_eq!(t.aabb().mins, Point::new(0.0, 0.0, -1.0));
        assert_eq!(t.aabb().maxs, Point::new(3.0, 3.0, 0.0));
        assert_relative_eq!(t.centroid(), Point::new(1.0, 1.0, -1.0 / 3.0));
    }

    #[test]
    fn set_vertices_refreshes_the_cache() {
        let mut t = Triangle::new(
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
        );

        t.set_vertices(
            Point::new(10.0, 0.0, 0.0),
            Point::new(11.0, 0.0, 0.0),
            Point::new(10.0, 1.0, 0.0),
        );

        assert_eq!(t.aabb().mins, Point::new(10.0, 0.0, 0.0));
        assert_eq!(t.aabb().maxs, Point::new(11.0, 1.0, 0.0));
        assert_relative_eq!(t.centroid(), Point::new(31.0 / 3.0, 1.0 / 3.0, 0.0));
    }
}
