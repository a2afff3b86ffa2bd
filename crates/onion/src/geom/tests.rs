use super::*;
use proptest::prelude::*;
use std::cmp::Ordering;

fn pt(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

/// Standard `(a − o) × (b − o)`, positive for a counterclockwise turn.
fn cross(o: Point, a: Point, b: Point) -> i128 {
    let (ax, ay) = (a.x as i128 - o.x as i128, a.y as i128 - o.y as i128);
    let (bx, by) = (b.x as i128 - o.x as i128, b.y as i128 - o.y as i128);
    ax * by - ay * bx
}

#[test]
fn orientation_basic_turns() {
    // Left turn at (1,0) heading up.
    assert_eq!(
        orientation(pt(0, 0), pt(1, 0), pt(1, 1)),
        Orientation::CounterClockwise
    );
    assert_eq!(
        orientation(pt(0, 0), pt(1, 0), pt(1, -1)),
        Orientation::Clockwise
    );
    assert_eq!(
        orientation(pt(0, 0), pt(1, 1), pt(3, 3)),
        Orientation::Collinear
    );
    // Backtracking along the same line is still collinear.
    assert_eq!(
        orientation(pt(0, 0), pt(3, 3), pt(1, 1)),
        Orientation::Collinear
    );
}

#[test]
fn orientation_agrees_with_cross_sign() {
    let (p, q, r) = (pt(2, -1), pt(5, 4), pt(-3, 7));
    let c = cross(p, q, r);
    assert!(c > 0);
    assert_eq!(orientation(p, q, r), Orientation::CounterClockwise);
}

#[test]
fn orientation_extreme_coordinates_do_not_overflow() {
    let m = i32::MAX;
    let n = i32::MIN;
    assert_eq!(
        orientation(pt(n, n), pt(m, n), pt(m, m)),
        Orientation::CounterClockwise
    );
    assert_eq!(
        squared_distance(pt(n, n), pt(m, m)),
        2 * (u32::MAX as i128) * (u32::MAX as i128)
    );
}

#[test]
fn squared_distance_is_symmetric() {
    assert_eq!(squared_distance(pt(0, 0), pt(3, 4)), 25);
    assert_eq!(squared_distance(pt(3, 4), pt(0, 0)), 25);
    assert_eq!(squared_distance(pt(7, 7), pt(7, 7)), 0);
}

#[test]
fn polar_compare_orders_by_angle_then_distance() {
    let pivot = pt(0, 0);
    // Angle 0 before angle 45°.
    assert_eq!(polar_compare(pivot, pt(5, 0), pt(1, 1)), Ordering::Less);
    assert_eq!(polar_compare(pivot, pt(1, 1), pt(5, 0)), Ordering::Greater);
    // Same ray: nearer first.
    assert_eq!(polar_compare(pivot, pt(1, 1), pt(2, 2)), Ordering::Less);
    assert_eq!(polar_compare(pivot, pt(2, 2), pt(1, 1)), Ordering::Greater);
    // Duplicates tie.
    assert_eq!(polar_compare(pivot, pt(2, 2), pt(2, 2)), Ordering::Equal);
    // A copy of the pivot sorts before everything.
    assert_eq!(polar_compare(pivot, pivot, pt(0, 3)), Ordering::Less);
    assert_eq!(polar_compare(pivot, pt(0, 3), pivot), Ordering::Greater);
}

#[test]
fn sorting_by_polar_compare_sweeps_counterclockwise() {
    let pivot = pt(0, 0);
    let mut pts = vec![pt(-1, 1), pt(0, 2), pt(3, 0), pt(1, 1), pt(2, 2), pt(1, 0)];
    pts.sort_by(|a, b| polar_compare(pivot, *a, *b));
    assert_eq!(
        pts,
        vec![pt(1, 0), pt(3, 0), pt(1, 1), pt(2, 2), pt(0, 2), pt(-1, 1)]
    );
}

#[test]
fn orientation_reversed_helpers() {
    assert_eq!(Orientation::Collinear.reversed(), Orientation::Collinear);
    assert_eq!(
        Orientation::Clockwise.reversed(),
        Orientation::CounterClockwise
    );
    assert!(Orientation::CounterClockwise.is_strict_left());
    assert!(!Orientation::Collinear.is_strict_left());
}

#[test]
fn convex_chain_detection() {
    let square = [pt(0, 0), pt(1, 0), pt(1, 1), pt(0, 1)];
    assert!(is_convex_chain(&square, true));
    // Clockwise traversal is rejected.
    let cw = [pt(0, 0), pt(0, 1), pt(1, 1), pt(1, 0)];
    assert!(!is_convex_chain(&cw, true));
    // A collinear midpoint breaks strictness.
    let with_mid = [pt(0, 0), pt(1, 0), pt(2, 0), pt(2, 2)];
    assert!(!is_convex_chain(&with_mid, false));
    // Open chain ignores the closing turn.
    let open = [pt(0, 0), pt(2, 0), pt(2, 2), pt(3, -5)];
    assert!(!is_convex_chain(&open, false));
    let open_ok = [pt(0, 0), pt(2, 0), pt(2, 2), pt(1, 3)];
    assert!(is_convex_chain(&open_ok, false));
    assert!(is_convex_chain(&[pt(1, 1), pt(2, 2)], true));
}

#[test]
fn point_conversions_and_display() {
    let p: Point = (3, -4).into();
    assert_eq!(p, pt(3, -4));
    assert_eq!(Point::from([3, -4]), p);
    assert_eq!(<(i32, i32)>::from(p), (3, -4));
    assert_eq!(p.to_string(), "(3, -4)");
}

fn small_point() -> impl Strategy<Value = Point> {
    (-50i32..50, -50i32..50).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn orientation_reverses_under_triple_reversal(p in small_point(), q in small_point(), r in small_point()) {
        prop_assert_eq!(orientation(p, q, r), orientation(r, q, p).reversed());
    }

    #[test]
    fn orientation_matches_cross_product(p in small_point(), q in small_point(), r in small_point()) {
        let expected = match cross(p, q, r).cmp(&0) {
            Ordering::Greater => Orientation::CounterClockwise,
            Ordering::Less => Orientation::Clockwise,
            Ordering::Equal => Orientation::Collinear,
        };
        prop_assert_eq!(orientation(p, q, r), expected);
    }

    #[test]
    fn polar_compare_is_antisymmetric_above_pivot(
        a in (-50i32..50, 1i32..50),
        b in (-50i32..50, 1i32..50),
    ) {
        let pivot = Point::new(0, 0);
        let (a, b) = (Point::from(a), Point::from(b));
        prop_assert_eq!(polar_compare(pivot, a, b), polar_compare(pivot, b, a).reverse());
    }
}
