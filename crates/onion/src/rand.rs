//! Reproducible random point sets.
//!
//! Purpose
//! - Feed property tests, benches and the CLI `random` command with integer
//!   point clouds that can be replayed exactly.
//!
//! Model
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so the `index`-th draw of a seed is addressable without drawing the
//!   earlier ones.
//! - Small extents make collinear triples and duplicates likely, which is
//!   what the peeler's degenerate paths need.

use crate::geom::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Uniform sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct UniformCfg {
    pub count: usize,
    /// Coordinates are drawn from `[-extent, extent]`. Negative values act as 0.
    pub extent: i32,
}

impl Default for UniformCfg {
    fn default() -> Self {
        Self {
            count: 100,
            extent: 1000,
        }
    }
}

/// Draw `cfg.count` points uniformly from the square `[-extent, extent]²`.
pub fn draw_points_uniform(cfg: UniformCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let e = cfg.extent.max(0);
    (0..cfg.count)
        .map(|_| Point::new(rng.gen_range(-e..=e), rng.gen_range(-e..=e)))
        .collect()
}

/// Draw `n` points near the circle of the given radius, rounded to the grid.
///
/// Angles are sorted and jittered around a random phase; rounding can make
/// neighbours coincide or line up for small radii.
pub fn draw_points_on_circle(n: usize, radius: i32, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let r = f64::from(radius.max(0));
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    let delta = std::f64::consts::TAU / (n.max(1) as f64);
    (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() - 0.5) * 0.5 * delta;
            let th = phase + (k as f64) * delta + jitter;
            Point::new((th.cos() * r).round() as i32, (th.sin() * r).round() as i32)
        })
        .collect()
}
