use std::cmp::Ordering;

use super::types::{Orientation, Point};

/// Orientation of the ordered triple `(p, q, r)`.
///
/// Evaluates `(q.y − p.y)(r.x − q.x) − (q.x − p.x)(r.y − q.y)` over the
/// consecutive edges `q − p` and `r − q`: zero is collinear, positive is
/// clockwise, negative is counterclockwise.
#[inline]
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let pq = q.wide() - p.wide();
    let qr = r.wide() - q.wide();
    match qr.perp(&pq).cmp(&0) {
        Ordering::Equal => Orientation::Collinear,
        Ordering::Greater => Orientation::Clockwise,
        Ordering::Less => Orientation::CounterClockwise,
    }
}

/// Squared Euclidean distance; only used to break collinear ties.
#[inline]
pub fn squared_distance(p1: Point, p2: Point) -> i128 {
    let d = p2.wide() - p1.wide();
    d.dot(&d)
}

/// Angular order of `p1` and `p2` as seen from `pivot`.
///
/// Counterclockwise from `p1` to `p2` sorts `p1` first. On a common ray the
/// nearer point sorts first. Exact duplicates compare `Equal`.
///
/// For a bottom-left pivot every other point lies in the half-plane
/// `angle ∈ [0, π)`, where this is a total preorder; points coincident with
/// the pivot sort before everything else.
pub fn polar_compare(pivot: Point, p1: Point, p2: Point) -> Ordering {
    match orientation(pivot, p1, p2) {
        Orientation::Collinear => {
            squared_distance(pivot, p1).cmp(&squared_distance(pivot, p2))
        }
        Orientation::CounterClockwise => Ordering::Less,
        Orientation::Clockwise => Ordering::Greater,
    }
}

/// True when every consecutive triple of `points` turns strictly left.
///
/// With `closed`, the two triples wrapping around the closing edge are
/// checked as well. Chains of fewer than three points are trivially convex.
pub fn is_convex_chain(points: &[Point], closed: bool) -> bool {
    let n = points.len();
    if n < 3 {
        return true;
    }
    let open_ok = points
        .windows(3)
        .all(|w| orientation(w[0], w[1], w[2]).is_strict_left());
    if !open_ok || !closed {
        return open_ok;
    }
    orientation(points[n - 2], points[n - 1], points[0]).is_strict_left()
        && orientation(points[n - 1], points[0], points[1]).is_strict_left()
}
