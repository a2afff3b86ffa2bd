//! Point input: inline pairs, JSON arrays, or CSV tables with `x`/`y` columns.

use anyhow::{bail, Context, Result};
use onion::Point;
use polars::prelude::*;
use serde::Deserialize;
use std::path::Path;

/// One JSON point: `[x, y]` or `{"x": .., "y": ..}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPoint {
    Pair([i32; 2]),
    Named { x: i32, y: i32 },
}

impl From<RawPoint> for Point {
    fn from(raw: RawPoint) -> Self {
        match raw {
            RawPoint::Pair(xy) => Point::from(xy),
            RawPoint::Named { x, y } => Point::new(x, y),
        }
    }
}

/// Parse `"x,y x,y ..."`; pairs are separated by whitespace or `;`.
pub fn parse_inline(text: &str) -> Result<Vec<Point>> {
    text.split(|c: char| c.is_whitespace() || c == ';')
        .filter(|tok| !tok.is_empty())
        .map(|tok| -> Result<Point> {
            let (x, y) = tok
                .split_once(',')
                .with_context(|| format!("expected `x,y`, got `{tok}`"))?;
            let x = x
                .trim()
                .parse::<i32>()
                .with_context(|| format!("bad x coordinate in `{tok}`"))?;
            let y = y
                .trim()
                .parse::<i32>()
                .with_context(|| format!("bad y coordinate in `{tok}`"))?;
            Ok(Point::new(x, y))
        })
        .collect()
}

/// Parse a JSON array of points.
pub fn parse_json(text: &str) -> Result<Vec<Point>> {
    let raw: Vec<RawPoint> =
        serde_json::from_str(text).context("expected a JSON array of [x, y] or {x, y}")?;
    Ok(raw.into_iter().map(Point::from).collect())
}

/// Read a CSV file with integer `x` and `y` columns.
pub fn read_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()?
        .select([col("x"), col("y")])
        .collect()
        .with_context(|| format!("reading x/y columns from {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_csv_shape");
    let xs = integer_column(&df, "x")?;
    let ys = integer_column(&df, "y")?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| -> Result<Point> {
            match xy {
                (Some(x), Some(y)) => Ok(Point::new(x, y)),
                _ => bail!("row {row}: missing or non-integer coordinate"),
            }
        })
        .collect()
}

/// Column `name` as `i32`. Non-integer dtypes (floats, strings) are rejected
/// instead of truncated; out-of-range integers become nulls and fail per row.
fn integer_column(df: &DataFrame, name: &str) -> Result<Int32Chunked> {
    let column = df.column(name)?;
    if !column.dtype().is_integer() {
        bail!(
            "column `{name}` must hold integers, found {}",
            column.dtype()
        );
    }
    Ok(column.cast(&DataType::Int32)?.i32()?.clone())
}

/// Load points from a file, dispatching on the extension.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => read_csv(path),
        Some("json") => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            parse_json(&text).with_context(|| format!("parsing {}", path.display()))
        }
        _ => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            parse_inline(&text).with_context(|| format!("parsing {}", path.display()))
        }
    }
}
