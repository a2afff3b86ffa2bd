//! Exact 2D geometry kernel.
//!
//! Purpose
//! - Integer points and the three predicates the hull scan needs:
//!   turn orientation, squared distance, and the polar comparator around a
//!   pivot.
//! - All arithmetic is widened to `i128`, so every `i32` input is exact and
//!   no tolerance is involved.
//!
//! Code cross-refs: `peel::extract_hull` (only caller of `polar_compare`).

mod kernel;
mod types;

pub use kernel::{is_convex_chain, orientation, polar_compare, squared_distance};
pub use types::{Orientation, Point};

#[cfg(test)]
mod tests;
