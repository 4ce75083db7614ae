pub use bvh_refit::RefitError;
pub use bvh_tree::{Bvh, BvhBuildStrategy, BvhNode, BvhOptions};

mod bvh_binned_build;
mod bvh_median_build;
mod bvh_refit;
mod bvh_tree;
