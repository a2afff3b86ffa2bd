//! One hull extraction pass (Graham scan around the bottom-left pivot).

use crate::geom::{orientation, polar_compare, Point};

/// Outcome of one extraction pass over the working set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HullPass {
    /// Hull boundary: pivot first, then scan accretion order.
    pub hull: Vec<Point>,
    /// Points the scan discarded; they stay in the working set.
    pub rest: Vec<Point>,
}

/// Index of the bottommost point, leftmost among ties. `None` if empty.
///
/// On exact duplicates the first occurrence wins.
pub fn select_pivot(points: &[Point]) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .min_by_key(|(_, p)| (p.y, p.x))
        .map(|(i, _)| i)
}

/// Extract the convex hull of `points` and split off the remaining points.
///
/// - One point: it is its own hull.
/// - Otherwise the pivot is moved to the front, the rest is sorted with
///   `polar_compare`, and the scan pops every top that does not make a strict
///   counterclockwise turn towards the incoming point. Collinear boundary
///   points are therefore left for a later pass.
///
/// Returns `None` for an empty working set.
pub fn extract_hull(mut points: Vec<Point>) -> Option<HullPass> {
    let pivot_idx = select_pivot(&points)?;
    points.swap(0, pivot_idx);
    if points.len() == 1 {
        return Some(HullPass {
            hull: points,
            rest: Vec::new(),
        });
    }

    let pivot = points[0];
    points[1..].sort_by(|a, b| polar_compare(pivot, *a, *b));

    let stack = scan(&points);

    let mut on_hull = vec![false; points.len()];
    for &i in &stack {
        on_hull[i] = true;
    }
    let hull = stack.iter().map(|&i| points[i]).collect();
    let rest = points
        .iter()
        .zip(&on_hull)
        .filter(|&(_, &taken)| !taken)
        .map(|(p, _)| *p)
        .collect();
    Some(HullPass { hull, rest })
}

/// Stack scan over `sorted` (pivot at index 0, angularly sorted tail, len ≥ 2).
/// Returns the indices left on the stack, bottom to top.
fn scan(sorted: &[Point]) -> Vec<usize> {
    let mut stack: Vec<usize> = Vec::with_capacity(sorted.len());
    stack.push(0);
    stack.push(1);
    for (i, &p) in sorted.iter().enumerate().skip(2) {
        while stack.len() > 1 {
            let top = sorted[stack[stack.len() - 1]];
            let next_to_top = sorted[stack[stack.len() - 2]];
            if orientation(next_to_top, top, p).is_strict_left() {
                break;
            }
            stack.pop();
        }
        stack.push(i);
    }
    stack
}
