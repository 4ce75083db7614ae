use crate::bounding_volume::BoundingVolume;
use crate::math::{Point, Real, Vector};
use crate::partitioning::{KdNode, KdTree, KdTreeOptions, KdTreeStrategy};
use crate::shape::Triangle;

fn random_soup(n: usize, seed: u64) -> Vec<Triangle> {
    let mut rng = oorandom::Rand32::new(seed);
    let mut rand_real = move || rng.rand_float() as Real;

    (0..n)
        .map(|_| {
            let p = Point::new(rand_real(), rand_real(), rand_real());
            Triangle::new(
                p,
                p + Vector::new(0.02, 0.0, 0.0),
                p + Vector::new(0.0, 0.02, 0.01),
            )
        })
        .collect()
}

fn collect_leaf_indices(node: &KdNode, out: &mut Vec<u32>) {
    match node.children() {
        None => out.extend_from_slice(node.triangle_indices()),
        Some((l, r)) => {
            collect_leaf_indices(l, out);
            collect_leaf_indices(r, out);
        }
    }
}

/// Leaves must contain their member triangle boxes, internal boxes must be the
/// union of their children's, and no leaf may list the same triangle twice.
fn assert_well_formed(node: &KdNode, triangles: &[Triangle], depth: u32, options: &KdTreeOptions) {
    assert!(depth <= options.max_depth);

    match node.children() {
        None => {
            for &i in node.triangle_indices() {
                assert!(node.aabb().contains(triangles[i as usize].aabb()));
            }
            let mut indices = node.triangle_indices().to_vec();
            indices.sort_unstable();
            indices.dedup();
            assert_eq!(indices.len(), node.triangle_indices().len());
        }
        Some((l, r)) => {
            assert!(node.triangle_indices().is_empty());
            assert_eq!(*node.aabb(), l.aabb().merged(r.aabb()));

            let plane = node.split_plane().unwrap();
            assert!(plane.axis < 3);
            assert!(plane.position >= node.aabb().mins[plane.axis]);
            assert!(plane.position <= node.aabb().maxs[plane.axis]);

            assert_well_formed(l, triangles, depth + 1, options);
            assert_well_formed(r, triangles, depth + 1, options);
        }
    }
}

#[test]
fn centroid_variant_assigns_each_triangle_exactly_once() {
    let triangles = random_soup(500, 11);
    let options = KdTreeOptions {
        leaf_capacity: 16,
        ..KdTreeOptions::default()
    };
    let tree = KdTree::with_options(KdTreeStrategy::Centroid, triangles, options);

    let mut indices = Vec::new();
    collect_leaf_indices(tree.root(), &mut indices);
    indices.sort_unstable();
    assert_eq!(indices, (0..500).collect::<Vec<u32>>());

    assert!(tree.depth() > 0);
    assert_well_formed(tree.root(), tree.triangles(), 0, &options);
}

#[test]
fn split_plane_sits_at_the_midpoint_of_the_longest_axis() {
    // A soup stretched along X: the root split must be the X midpoint.
    let mut triangles = random_soup(200, 5);
    for (i, t) in triangles.iter_mut().enumerate() {
        let [a, b, c] = t.vertices();
        let shift = Vector::new(i as Real * 0.1, 0.0, 0.0);
        t.set_vertices(a + shift, b + shift, c + shift);
    }

    let tree = KdTree::with_options(
        KdTreeStrategy::Centroid,
        triangles,
        KdTreeOptions {
            leaf_capacity: 16,
            ..KdTreeOptions::default()
        },
    );

    let root = tree.root();
    assert!(!root.is_leaf());
    let plane = root.split_plane().unwrap();
    assert_eq!(plane.axis, 0);
    assert_relative_eq!(
        plane.position,
        (root.aabb().mins.x + root.aabb().maxs.x) / 2.0
    );
}

#[test]
fn unsplittable_set_becomes_a_leaf() {
    // Identical triangles: every centroid sits exactly on the midpoint plane,
    // so the partition sends the full set to one side and the build must
    // abandon the split instead of recursing forever.
    let tri = Triangle::new(
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.5),
    );
    let triangles = vec![tri; 300];

    for strategy in [KdTreeStrategy::Centroid, KdTreeStrategy::Spatial] {
        let tree = KdTree::with_options(
            strategy,
            triangles.clone(),
            KdTreeOptions {
                leaf_capacity: 4,
                min_extent: 1.0e-6,
                ..KdTreeOptions::default()
            },
        );

        assert!(tree.root().is_leaf());
        assert_eq!(tree.root().triangle_indices().len(), 300);
    }
}

#[test]
fn spatial_variant_duplicates_straddling_triangles() {
    // Two clusters on either side of x = 5 plus one triangle spanning the
    // plane. The straddler must appear in the leaves of both sides.
    let mut triangles = Vec::new();
    let mut rng = oorandom::Rand32::new(17);
    let mut rand_real = move || rng.rand_float() as Real;
    for i in 0..16 {
        let x = if i < 8 { rand_real() } else { 9.0 + rand_real() };
        let p = Point::new(x, rand_real(), rand_real());
        triangles.push(Triangle::new(
            p,
            p + Vector::new(0.02, 0.0, 0.0),
            p + Vector::new(0.0, 0.02, 0.01),
        ));
    }
    let straddler = triangles.len() as u32;
    triangles.push(Triangle::new(
        Point::new(3.0, 0.5, 0.5),
        Point::new(7.0, 0.5, 0.5),
        Point::new(5.0, 0.6, 0.5),
    ));

    let options = KdTreeOptions {
        leaf_capacity: 8,
        ..KdTreeOptions::default()
    };
    let tree = KdTree::with_options(KdTreeStrategy::Spatial, triangles, options);

    assert!(!tree.root().is_leaf());

    let mut indices = Vec::new();
    collect_leaf_indices(tree.root(), &mut indices);

    // Duplication may only add occurrences, never lose triangles.
    assert!(indices.len() >= 17);
    let mut deduped = indices.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped, (0..17).collect::<Vec<u32>>());

    let occurrences = indices.iter().filter(|&&i| i == straddler).count();
    assert!(occurrences >= 2, "straddling triangle was not duplicated");

    assert_well_formed(tree.root(), tree.triangles(), 0, &options);
}

#[test]
fn depth_never_exceeds_the_configured_maximum() {
    let triangles = random_soup(800, 23);
    let options = KdTreeOptions {
        leaf_capacity: 1,
        max_depth: 4,
        min_extent: 1.0e-9,
    };

    for strategy in [KdTreeStrategy::Centroid, KdTreeStrategy::Spatial] {
        let tree = KdTree::with_options(strategy, triangles.clone(), options);
        assert!(tree.depth() <= 4);
        assert_well_formed(tree.root(), tree.triangles(), 0, &options);
    }
}
