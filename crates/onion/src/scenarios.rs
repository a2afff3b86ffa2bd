//! Fixed inputs with known peelings (regression fixtures and demos).

use crate::geom::Point;

/// Both diagonals of the `0..=9` grid: 20 points forming five nested squares.
///
/// Peels into five 4-point layers, outermost `{(0,0), (9,0), (9,9), (0,9)}`
/// down to `{(4,4), (5,4), (5,5), (4,5)}`.
#[rustfmt::skip]
pub fn nested_diagonals() -> Vec<Point> {
    let raw: [(i32, i32); 20] = [
        (0, 9), (9, 9),
        (1, 8), (8, 8),
        (2, 7), (7, 7),
        (3, 6), (6, 6),
        (4, 5), (5, 5),
        (4, 4), (5, 4),
        (3, 3), (6, 3),
        (2, 2), (7, 2),
        (1, 1), (8, 1),
        (0, 0), (9, 0),
    ];
    raw.into_iter().map(Point::from).collect()
}

/// Corners of the unit square.
pub fn unit_square() -> Vec<Point> {
    vec![
        Point::new(0, 0),
        Point::new(1, 0),
        Point::new(1, 1),
        Point::new(0, 1),
    ]
}
