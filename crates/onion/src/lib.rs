//! Onion peeling of planar point sets.
//!
//! The convex hull of the remaining points is extracted (Graham scan around
//! the bottom-left pivot) and removed, pass after pass, until no point is
//! left. Each extracted hull is one layer; the number of passes is the onion
//! depth of the set.
//!
//! API Policy
//! - `geom` and `peel` are the core; `rand` and `scenarios` feed tests,
//!   benches and the CLI.
//! - `api` is the curated surface for callers; breaking changes are allowed
//!   when they improve clarity.

pub mod api;
pub mod geom;
pub mod peel;
pub mod rand;
pub mod scenarios;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{Orientation, Point};
pub use peel::{peel, peel_with, Layer, PeelCfg, Peeling};
