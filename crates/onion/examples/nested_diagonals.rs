//! Peel the nested-diagonals fixture and print every layer.
//!
//! Usage:
//!   cargo run -p onion --example nested_diagonals
//!
//! Prints one line per layer (pivot first, counterclockwise) and the depth.

use onion::api::{nested_diagonals, peel};

fn main() {
    let peeling = peel(&nested_diagonals());
    for layer in &peeling.layers {
        let pts: Vec<String> = layer.points.iter().map(|p| p.to_string()).collect();
        println!("Layer {}: {}", layer.index, pts.join(" "));
    }
    println!("Layers: {}", peeling.layer_count());
}
