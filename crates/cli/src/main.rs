use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use onion::api::{
    draw_points_uniform, nested_diagonals, peel_with, PeelCfg, Point, ReplayToken, UniformCfg,
};
use provenance::PeelSummary;
use render::PeelReport;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;
mod render;

#[derive(Parser)]
#[command(name = "onion")]
#[command(about = "Onion peeling of planar point sets")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Action {
    /// Peel points given inline (`--points "x,y x,y"`) or read from a .json/.csv file
    Peel {
        #[arg(long, conflicts_with = "input", required_unless_present = "input")]
        points: Option<String>,
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Stop after this many layers
        #[arg(long)]
        max_layers: Option<usize>,
        /// Also write the JSON report here, with a provenance sidecar
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Peel the built-in nested-diagonals scenario
    Demo {
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Peel a reproducible uniform random cloud
    Random {
        #[arg(long, default_value_t = 100)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Coordinates are drawn from [-extent, extent]
        #[arg(long, default_value_t = 1000)]
        extent: i32,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        #[arg(long)]
        max_layers: Option<usize>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Peel {
            points,
            input,
            format,
            max_layers,
            out,
        } => {
            let (pts, source) = match (points, input) {
                (Some(text), _) => (input::parse_inline(&text)?, None),
                (None, Some(path)) => (input::read_points(&path)?, Some(path)),
                (None, None) => anyhow::bail!("one of --points or --input is required"),
            };
            let cfg = PeelCfg { max_layers };
            let report = run(&pts, cfg, format)?;
            if let Some(out) = out {
                write_report(&out, &report, source.as_deref())?;
            }
            Ok(())
        }
        Action::Demo { format } => {
            run(&nested_diagonals(), PeelCfg::default(), format).map(|_| ())
        }
        Action::Random {
            n,
            seed,
            index,
            extent,
            format,
            max_layers,
        } => {
            tracing::info!(n, seed, index, extent, "random");
            let pts = draw_points_uniform(
                UniformCfg { count: n, extent },
                ReplayToken::new(seed, index),
            );
            run(&pts, PeelCfg { max_layers }, format).map(|_| ())
        }
        Action::Report => report(),
    }
}

/// Peel `pts`, print in `format`, and return the report.
fn run(pts: &[Point], cfg: PeelCfg, format: Format) -> Result<PeelReport> {
    let peeling = peel_with(pts, cfg);
    tracing::info!(
        points = pts.len(),
        layers = peeling.layer_count(),
        unpeeled = peeling.remaining.len(),
        "peel"
    );
    let report = PeelReport::new(pts.len(), &peeling, cfg);
    match format {
        Format::Text => print!("{}", render::render_text(&peeling)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(report)
}

/// Write `report` as JSON to `out`, plus its provenance sidecar.
fn write_report(out: &Path, report: &PeelReport, source: Option<&Path>) -> Result<()> {
    tracing::info!(out = %out.display(), "write_report");
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(report)?)
        .with_context(|| format!("writing {}", out.display()))?;
    provenance::write_sidecar(out, "peel", source, PeelSummary::from(report))?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": onion::VERSION,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
