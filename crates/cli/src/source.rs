//! Where a path comes from: an inline waypoint string or a CSV table.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use polars::prelude::*;
use smoothpath::cfg::DEFAULT_RESOLUTION;
use smoothpath::{parse_waypoints, SmoothPath, Vec3, Waypoint};

/// Path selection shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Comma-separated `x,y,z,...` waypoint components
    #[arg(
        long,
        conflicts_with = "csv",
        required_unless_present = "csv",
        allow_hyphen_values = true
    )]
    pub waypoints: Option<String>,
    /// CSV file with columns x,y,z and optional roll (radians)
    #[arg(long)]
    pub csv: Option<PathBuf>,
    /// Close the path back onto its first waypoint
    #[arg(long)]
    pub looped: bool,
    /// Distance-table samples per segment (0 disables distance units)
    #[arg(long, default_value_t = DEFAULT_RESOLUTION)]
    pub resolution: usize,
}

impl PathArgs {
    pub fn load(&self) -> Result<SmoothPath> {
        let waypoints = match (&self.waypoints, &self.csv) {
            (Some(s), _) => parse_waypoints(s).context("parsing --waypoints")?,
            (None, Some(csv)) => read_waypoints_csv(csv)?,
            (None, None) => bail!("one of --waypoints or --csv is required"),
        };
        tracing::info!(
            waypoints = waypoints.len(),
            looped = self.looped,
            resolution = self.resolution,
            "path loaded"
        );
        Ok(SmoothPath::new(waypoints, self.looped).with_resolution(self.resolution))
    }
}

fn f64_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column {name:?}"))?
        .cast(&DataType::Float64)?;
    series
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.with_context(|| format!("null {name:?} in row {row}")))
        .collect()
}

/// Read waypoints from a CSV with a header row. A missing `roll` column means zero roll.
pub fn read_waypoints_csv(path: &Path) -> Result<Vec<Waypoint>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("reading {}", path.display()))?;
    let xs = f64_column(&df, "x")?;
    let ys = f64_column(&df, "y")?;
    let zs = f64_column(&df, "z")?;
    let rolls = if df.column("roll").is_ok() {
        f64_column(&df, "roll")?
    } else {
        vec![0.0; df.height()]
    };
    tracing::debug!(rows = df.height(), cols = df.width(), "waypoint csv read");
    Ok((0..df.height())
        .map(|i| Waypoint::new(Vec3::new(xs[i], ys[i], zs[i]), rolls[i]))
        .collect())
}
