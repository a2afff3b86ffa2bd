//! Curated API for callers (UNSTABLE).
//!
//! Prefer these re-exports for clarity and consistency across binaries,
//! benches and demos.

// Geometry kernel
pub use crate::geom::{
    is_convex_chain, orientation, polar_compare, squared_distance, Orientation, Point,
};
// Peeling
pub use crate::peel::{
    extract_hull, peel, peel_with, select_pivot, HullPass, Layer, PeelCfg, PeelState, Peeler,
    Peeling,
};
// Samplers and fixed inputs
pub use crate::rand::{draw_points_on_circle, draw_points_uniform, ReplayToken, UniformCfg};
pub use crate::scenarios::{nested_diagonals, unit_square};
