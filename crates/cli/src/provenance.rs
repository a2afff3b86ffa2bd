//! Provenance sidecars for written peel reports.
//!
//! `layers.json` gets a `layers.provenance.json` next to it recording the
//! code revision, the callsite, where the points came from, and a summary of
//! the peeling (input size, depth, cap, completeness).

use anyhow::{Context, Result};
use serde::Serialize;
use std::panic::Location;
use std::path::{Path, PathBuf};

use crate::render::PeelReport;

/// Peeling outcome recorded in the sidecar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PeelSummary {
    pub points: usize,
    pub layer_count: usize,
    pub max_layers: Option<usize>,
    /// Size of the outermost layer, if any.
    pub hull_size: Option<usize>,
    pub unpeeled: usize,
    pub complete: bool,
}

impl From<&PeelReport> for PeelSummary {
    fn from(report: &PeelReport) -> Self {
        Self {
            points: report.points,
            layer_count: report.layer_count,
            max_layers: report.max_layers,
            hull_size: report.layers.first().map(|l| l.points.len()),
            unpeeled: report.remaining.len(),
            complete: report.remaining.is_empty(),
        }
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    version: &'static str,
    callsite: Callsite,
    command: &'a str,
    input: Option<String>,
    summary: PeelSummary,
    output: String,
}

/// Write the sidecar for `artifact` and return its path.
#[track_caller]
pub fn write_sidecar(
    artifact: &Path,
    command: &str,
    input: Option<&Path>,
    summary: PeelSummary,
) -> Result<PathBuf> {
    let caller = Location::caller();
    let doc = Sidecar {
        code_rev: current_git_rev(),
        version: onion::VERSION,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        command,
        input: input.map(|p| p.display().to_string()),
        summary,
        output: artifact.display().to_string(),
    };
    let path = sidecar_path(artifact);
    std::fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(sidecar = %path.display(), "provenance");
    Ok(path)
}

/// `dir/name.ext` → `dir/name.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// Revision from `GIT_COMMIT` (runtime first, then build time), else `unknown`.
pub fn current_git_rev() -> String {
    std::env::var("GIT_COMMIT")
        .ok()
        .or_else(|| option_env!("GIT_COMMIT").map(str::to_string))
        .filter(|rev| !rev.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
