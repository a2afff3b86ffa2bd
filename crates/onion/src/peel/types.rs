//! Peeling outputs and configuration.
//!
//! - `PeelCfg`: optional cap on the number of extracted layers.
//! - `Layer`: one extracted hull, 1-based index, boundary in scan order.
//! - `Peeling`: all layers of a run plus whatever a cap left unpeeled.

use crate::geom::Point;

/// Peeling configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PeelCfg {
    /// Stop after this many layers. `None` peels to exhaustion.
    pub max_layers: Option<usize>,
}

impl PeelCfg {
    #[inline]
    pub fn with_max_layers(max_layers: usize) -> Self {
        Self {
            max_layers: Some(max_layers),
        }
    }
}

/// One onion layer: the hull boundary extracted by a single pass.
///
/// `points` starts at the pass pivot and follows the scan's accretion order
/// (counterclockwise). A layer always holds at least one point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layer {
    pub index: usize,
    pub points: Vec<Point>,
}

impl Layer {
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }
    /// Boundary points in lexicographic order, for rotation-free comparisons.
    pub fn sorted_points(&self) -> Vec<Point> {
        let mut pts = self.points.clone();
        pts.sort_unstable();
        pts
    }
}

/// Result of a peeling run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Peeling {
    pub layers: Vec<Layer>,
    /// Points left when `PeelCfg::max_layers` stopped the run; empty otherwise.
    pub remaining: Vec<Point>,
}

impl Peeling {
    #[inline]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// True when every input point was assigned to a layer.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Number of points across all layers.
    pub fn peeled_points(&self) -> usize {
        self.layers.iter().map(Layer::len).sum()
    }

    /// 1-based index of the first layer containing `p`.
    pub fn depth_of(&self, p: Point) -> Option<usize> {
        self.layers.iter().find(|l| l.contains(p)).map(|l| l.index)
    }
}
