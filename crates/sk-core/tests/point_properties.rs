//! Property tests for point construction and distance.

use proptest::prelude::*;
use sk_core::{Point, Value};

fn coord() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6f64
}

proptest! {
    #[test]
    fn coordinates_round_trip(x in coord(), y in coord()) {
        let p = Point::new(x, y).unwrap();
        prop_assert_eq!(p.x(), x);
        prop_assert_eq!(p.y(), y);
    }

    #[test]
    fn string_coordinates_round_trip(x in coord(), y in coord()) {
        let p = Point::new(x.to_string(), Value::from(y.to_string())).unwrap();
        prop_assert_eq!(p.x(), x);
        prop_assert_eq!(p.y(), y);
    }

    #[test]
    fn distance_is_symmetric(ax in coord(), ay in coord(), bx in coord(), by in coord()) {
        let a = Point::new(ax, ay).unwrap();
        let b = Point::new(bx, by).unwrap();
        prop_assert_eq!(a.distance_to(&b), b.distance_to(&a));
    }

    #[test]
    fn distance_is_zero_iff_equal(ax in coord(), ay in coord(), bx in coord(), by in coord()) {
        let a = Point::new(ax, ay).unwrap();
        let b = Point::new(bx, by).unwrap();
        prop_assert_eq!(a.distance_to(&a), 0.0);
        prop_assert_eq!(a.distance_to(&b) == 0.0, a == b);
    }

    #[test]
    fn display_parses_back(x in coord(), y in coord()) {
        let p = Point::new(x, y).unwrap();
        let shown = p.to_string();
        let inner = shown.trim_start_matches('(').trim_end_matches(')');
        let (sx, sy) = inner.split_once(", ").unwrap();
        prop_assert_eq!(Point::new(sx, sy).unwrap(), p);
    }
}
