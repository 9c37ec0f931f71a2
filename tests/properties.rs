//! Property tests for `Point` arithmetic and predicates.

use points::prelude::*;
use proptest::prelude::*;

const TOLERANCE: f64 = 1e-6;

fn coordinate() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6
}

fn point() -> impl Strategy<Value = Point> {
    (coordinate(), coordinate(), coordinate()).prop_map(|(x, y, z)| Point::new(x, y, z))
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOLERANCE * (1.0 + a.abs().max(b.abs()))
}

proptest! {
    #[test]
    fn equality_is_reflexive(p in point()) {
        prop_assert_eq!(p, p);
    }

    #[test]
    fn zero_is_additive_identity(p in point()) {
        prop_assert_eq!(p + Point::zero(), p);
    }

    #[test]
    fn planar_predicates_follow_axes(p in point(), q in point()) {
        prop_assert_eq!(p.is_leftest(&q), p.x() < q.x());
        prop_assert_eq!(p.is_rightest(&q), p.x() > q.x());
        prop_assert_eq!(p.is_highest(&q), p.y() > q.y());
        prop_assert_eq!(p.is_lowest(&q), p.y() < q.y());
    }

    #[test]
    fn depth_predicates_follow_z(p in point(), q in point()) {
        prop_assert_eq!(p.is_farthest(&q), p.z() > q.z());
        prop_assert_eq!(p.is_nearest(&q), p.z() < q.z());
    }

    #[test]
    fn distance_is_symmetric(p in point(), q in point()) {
        prop_assert!(close(p.distance(&q), q.distance(&p)));
        prop_assert_eq!(p.distance(&p), 0.0);
    }

    #[test]
    fn subtraction_undoes_addition(p in point(), q in point()) {
        let back = (p + q) - q;
        prop_assert!(close(back.x(), p.x()));
        prop_assert!(close(back.y(), p.y()));
        prop_assert!(close(back.z(), p.z()));
    }

    #[test]
    fn negation_is_subtraction_from_zero(p in point()) {
        prop_assert_eq!(-p, Point::zero() - p);
    }

    #[test]
    fn advanced_matches_adding_a_uniform_point(p in point(), n in coordinate()) {
        prop_assert_eq!(p.advanced(n), p + Point::new(n, n, n));
    }
}
