//! Text and JSON renderings of a peeling.

use onion::{PeelCfg, Peeling, Point};
use serde::Serialize;

#[derive(Serialize)]
pub struct LayerReport {
    pub index: usize,
    pub points: Vec<[i32; 2]>,
}

#[derive(Serialize)]
pub struct PeelReport {
    pub points: usize,
    pub layer_count: usize,
    pub max_layers: Option<usize>,
    pub layers: Vec<LayerReport>,
    pub remaining: Vec<[i32; 2]>,
}

fn xy(p: &Point) -> [i32; 2] {
    [p.x, p.y]
}

impl PeelReport {
    pub fn new(input_len: usize, peeling: &Peeling, cfg: PeelCfg) -> Self {
        Self {
            points: input_len,
            layer_count: peeling.layer_count(),
            max_layers: cfg.max_layers,
            layers: peeling
                .layers
                .iter()
                .map(|l| LayerReport {
                    index: l.index,
                    points: l.points.iter().map(xy).collect(),
                })
                .collect(),
            remaining: peeling.remaining.iter().map(xy).collect(),
        }
    }
}

fn join(points: &[Point]) -> String {
    points
        .iter()
        .map(Point::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line per layer, scan order, then the layer count.
pub fn render_text(peeling: &Peeling) -> String {
    let mut out = String::new();
    for layer in &peeling.layers {
        out.push_str(&format!("Layer {}: {}\n", layer.index, join(&layer.points)));
    }
    if !peeling.is_complete() {
        out.push_str(&format!("Unpeeled: {}\n", join(&peeling.remaining)));
    }
    out.push_str(&format!("Layers: {}\n", peeling.layer_count()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use onion::api::{nested_diagonals, peel, peel_with, unit_square};

    #[test]
    fn text_lists_layers_then_count() {
        let text = render_text(&peel(&nested_diagonals()));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Layer 1: (0, 0) (9, 0) (9, 9) (0, 9)");
        assert_eq!(lines[4], "Layer 5: (4, 4) (5, 4) (5, 5) (4, 5)");
        assert_eq!(lines[5], "Layers: 5");
    }

    #[test]
    fn text_for_empty_input() {
        assert_eq!(render_text(&peel(&[])), "Layers: 0\n");
    }

    #[test]
    fn text_reports_unpeeled_points() {
        let mut input = unit_square();
        input.push(Point::new(0, 0));
        let text = render_text(&peel_with(&input, PeelCfg::with_max_layers(1)));
        assert!(text.contains("Unpeeled: (0, 0)\n"));
        assert!(text.ends_with("Layers: 1\n"));
    }

    #[test]
    fn json_report_shape() {
        let input = unit_square();
        let report = PeelReport::new(input.len(), &peel(&input), PeelCfg::default());
        let v = serde_json::to_value(&report).unwrap();
        assert_eq!(v["points"], 4);
        assert_eq!(v["layer_count"], 1);
        assert_eq!(v["max_layers"], serde_json::Value::Null);
        assert_eq!(v["layers"][0]["index"], 1);
        assert_eq!(v["layers"][0]["points"][2], serde_json::json!([1, 1]));
        assert_eq!(v["remaining"], serde_json::json!([]));
    }
}
