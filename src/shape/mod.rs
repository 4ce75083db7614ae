//! Geometric primitives tracked by the acceleration trees.

pub use self::triangle::Triangle;

mod triangle;
