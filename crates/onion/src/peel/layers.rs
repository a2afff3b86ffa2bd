use crate::geom::Point;

use super::hull::extract_hull;
use super::types::{Layer, PeelCfg, Peeling};

/// Peeler state between passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PeelState {
    Extracting,
    Done,
}

/// Layer-by-layer driver over an owned working set.
///
/// Each `next()` runs one extraction pass and yields its layer. The working
/// set strictly shrinks per pass, so the iterator ends after at most `n`
/// items.
#[derive(Clone, Debug)]
pub struct Peeler {
    working: Vec<Point>,
    next_index: usize,
}

impl Peeler {
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            working: points.into_iter().collect(),
            next_index: 1,
        }
    }

    #[inline]
    pub fn state(&self) -> PeelState {
        if self.working.is_empty() {
            PeelState::Done
        } else {
            PeelState::Extracting
        }
    }

    /// Points not yet assigned to a layer.
    #[inline]
    pub fn remaining(&self) -> &[Point] {
        &self.working
    }

    #[inline]
    pub fn into_remaining(self) -> Vec<Point> {
        self.working
    }
}

impl Iterator for Peeler {
    type Item = Layer;

    fn next(&mut self) -> Option<Layer> {
        let before = self.working.len();
        let pass = extract_hull(std::mem::take(&mut self.working))?;
        debug_assert!(pass.rest.len() < before, "working set must shrink");
        self.working = pass.rest;
        let layer = Layer {
            index: self.next_index,
            points: pass.hull,
        };
        self.next_index += 1;
        Some(layer)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.working.len();
        (usize::from(n > 0), Some(n))
    }
}

/// Peel `points` until no point remains.
pub fn peel(points: &[Point]) -> Peeling {
    peel_with(points, PeelCfg::default())
}

/// Peel `points`, stopping early if `cfg.max_layers` is reached.
pub fn peel_with(points: &[Point], cfg: PeelCfg) -> Peeling {
    let mut peeler = Peeler::new(points.iter().copied());
    let layers: Vec<Layer> = match cfg.max_layers {
        Some(cap) => peeler.by_ref().take(cap).collect(),
        None => peeler.by_ref().collect(),
    };
    Peeling {
        layers,
        remaining: peeler.into_remaining(),
    }
}
