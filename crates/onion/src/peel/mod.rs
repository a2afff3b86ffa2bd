//! Onion peeling: repeated hull extraction to a fixed point.
//!
//! Purpose
//! - `extract_hull` runs one Graham-scan pass and splits the working set into
//!   the hull boundary and the discarded points.
//! - `Peeler` drives passes as an iterator (`Extracting` until the working set
//!   is empty, then `Done`); `peel`/`peel_with` collect the layers.
//!
//! Model
//! - Pivot: bottommost point, leftmost among ties, passed explicitly.
//! - Removal is index-based: the scan stack holds indices into the pass's
//!   working order, and the unmarked indices form the next working set.
//! - Collinear boundary points are not on the hull; they end up in a later
//!   layer. Fully collinear inputs peel into segments (2-point layers).
//!
//! Code cross-refs: `geom::{orientation, polar_compare}`.

mod hull;
mod layers;
mod types;

pub use hull::{extract_hull, select_pivot, HullPass};
pub use layers::{peel, peel_with, PeelState, Peeler};
pub use types::{Layer, PeelCfg, Peeling};
