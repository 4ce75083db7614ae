/*!
meshtree
========

**meshtree** builds spatial acceleration structures — bounding-volume
hierarchies, k-d trees, and octrees — over the triangle set of a 3D mesh,
so downstream consumers (ray casters, collision queries, visibility
culling) can avoid linear scans over every triangle.

The host extracts a flat list of world-space [`shape::Triangle`]s from its
mesh asset and hands it to the constructor of whichever tree it needs:

- [`partitioning::Bvh`] — a binary bounding-volume hierarchy, built either
  with pure median splits or with a hybrid median + binned
  Surface-Area-Heuristic strategy. Supports [`partitioning::Bvh::refit`]
  for cheap bound updates under rigid/uniformly-scaled motion.
- [`partitioning::KdTree`] — a k-d tree with an implicit axis-aligned split
  plane per node, in a centroid (object) variant that never duplicates a
  triangle and a spatial variant that duplicates straddling triangles for
  tighter per-leaf bounds.
- [`partitioning::Octree`] — an eight-way spatial subdivision where a
  triangle lands in every octant its bounding box touches.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod partitioning;
pub mod shape;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Aliases for the mathematical types used throughout this crate.
pub mod math {
    pub use super::real::*;
    pub use na::{Point3, Vector3};

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;
}
