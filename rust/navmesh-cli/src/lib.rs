use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::info;

use navmesh_core::{MeshStats, NavOptions, PathResult, Point, Winding};

pub mod config;
pub mod document;

use config::Config;
use document::MeshDocument;

#[derive(Parser, Debug)]
#[command(name = "navmesh-cli", version, about = "Find a path across a 2D triangle navmesh")]
pub struct Args {
    /// Mesh document (JSON)
    #[arg(long = "mesh", value_name = "PATH")]
    pub mesh: PathBuf,

    /// Start position
    #[arg(long = "from", value_name = "X,Y", value_parser = parse_point, required_unless_present = "stats")]
    pub from: Option<Point>,

    /// Goal position
    #[arg(long = "to", value_name = "X,Y", value_parser = parse_point, required_unless_present = "stats")]
    pub to: Option<Point>,

    /// Coordinate convention, overrides the document and NAVMESH_WINDING
    #[arg(long = "winding", value_enum)]
    pub winding: Option<WindingArg>,

    #[arg(long = "funnel-epsilon", value_name = "EPS")]
    pub funnel_epsilon: Option<f64>,

    /// Emit logs as JSON lines on stderr
    #[arg(long = "json-logs")]
    pub json_logs: bool,

    /// Print mesh statistics instead of running a query
    #[arg(long = "stats")]
    pub stats: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindingArg {
    YUp,
    YDown,
}

impl From<WindingArg> for Winding {
    fn from(w: WindingArg) -> Self {
        match w {
            WindingArg::YUp => Winding::YUp,
            WindingArg::YDown => Winding::YDown,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Report {
    Path(PathResult),
    Stats(MeshStats),
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok([x, y])
}

/// Document options, then environment, then flags; later wins.
pub fn resolve_options(base: &NavOptions, cfg: &Config, args: &Args) -> NavOptions {
    let mut opts = base.clone();
    if let Some(w) = cfg.winding { opts.winding = w; }
    if let Some(eps) = cfg.funnel_epsilon { opts.funnel_epsilon = eps; }
    if let Some(w) = args.winding { opts.winding = w.into(); }
    if let Some(eps) = args.funnel_epsilon { opts.funnel_epsilon = eps; }
    opts
}

pub fn run(args: &Args, cfg: &Config) -> Result<Report> {
    let doc = MeshDocument::load(&args.mesh)?;
    let options = resolve_options(&doc.options, cfg, args);
    let nav = doc.build(options).with_context(|| format!("failed to build navmesh from {:?}", args.mesh))?;

    let stats = nav.graph().stats();
    info!(triangles = stats.triangles, internal_edges = stats.internal_edges, boundary_edges = stats.boundary_edges, "navmesh ready");
    if args.stats {
        return Ok(Report::Stats(stats));
    }

    let (Some(from), Some(to)) = (args.from, args.to) else {
        anyhow::bail!("--from and --to are required unless --stats is given");
    };
    let result = nav.find_path(from, to);
    info!(status = ?result.status, waypoints = result.waypoints.len(), length = result.length, "query done");
    Ok(Report::Path(result))
}
