use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use smoothpath::{PositionUnits, SmoothPath};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod provenance;
mod sample;
mod source;

use source::PathArgs;

#[derive(Parser)]
#[command(name = "smoothpath-cli")]
#[command(about = "Inspect, sample, and convert positions on smooth spline paths")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print a JSON summary of the path and its distance table
    Report {
        #[command(flatten)]
        path: PathArgs,
    },
    /// Sample evenly spaced positions and write them as CSV
    Sample {
        #[command(flatten)]
        path: PathArgs,
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, value_enum, default_value_t = Units::Normalized)]
        units: Units,
        #[arg(long)]
        out: PathBuf,
    },
    /// Convert one position between path units, distance, and normalized
    Convert {
        #[command(flatten)]
        path: PathArgs,
        #[arg(long, allow_negative_numbers = true)]
        value: f64,
        #[arg(long, value_enum, default_value_t = Units::Path)]
        from: Units,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum Units {
    Path,
    Distance,
    Normalized,
}

impl From<Units> for PositionUnits {
    fn from(u: Units) -> Self {
        match u {
            Units::Path => PositionUnits::PathUnits,
            Units::Distance => PositionUnits::Distance,
            Units::Normalized => PositionUnits::Normalized,
        }
    }
}

#[derive(Serialize, Debug)]
struct Report {
    version: &'static str,
    waypoints: usize,
    looped: bool,
    resolution: usize,
    min_pos: f64,
    max_pos: f64,
    path_length: f64,
    samples: usize,
    pos_step_size: f64,
    distance_step_size: f64,
}

#[derive(Serialize, Debug, PartialEq)]
struct Conversion {
    value: f64,
    from: Units,
    path: f64,
    distance: f64,
    normalized: f64,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Report { path } => report(&path),
        Action::Sample {
            path,
            count,
            units,
            out,
        } => sample(&path, count, units, out),
        Action::Convert { path, value, from } => convert(&path, value, from),
    }
}

fn build_report(p: &SmoothPath) -> Report {
    p.ensure_caches();
    let info = p.cache_info();
    Report {
        version: smoothpath::VERSION,
        waypoints: info.waypoint_count,
        looped: info.looped,
        resolution: info.resolution,
        min_pos: p.min_pos(),
        max_pos: p.max_pos(),
        path_length: p.path_length(),
        samples: info.samples,
        pos_step_size: info.pos_step_size,
        distance_step_size: info.distance_step_size,
    }
}

fn report(args: &PathArgs) -> Result<()> {
    let p = args.load()?;
    println!("{}", serde_json::to_string_pretty(&build_report(&p))?);
    Ok(())
}

fn sample(args: &PathArgs, count: usize, units: Units, out: PathBuf) -> Result<()> {
    let p = args.load()?;
    p.ensure_caches();
    let mut df = sample::sample_frame(&p, units.into(), count)?;
    sample::write_csv(&mut df, &out)?;
    tracing::info!(rows = df.height(), out = %out.display(), "samples written");
    let params = serde_json::json!({
        "waypoints": args.waypoints,
        "csv": args.csv,
        "looped": args.looped,
        "resolution": args.resolution,
        "count": count,
        "units": units,
    });
    provenance::write_sidecar(&out, params)?;
    Ok(())
}

fn build_conversion(p: &SmoothPath, value: f64, from: Units) -> Conversion {
    let native = p.standardize_pos(p.to_native_path_units(value, from.into()));
    Conversion {
        value,
        from,
        path: native,
        distance: p.from_native_path_units(native, PositionUnits::Distance),
        normalized: p.from_native_path_units(native, PositionUnits::Normalized),
    }
}

fn convert(args: &PathArgs, value: f64, from: Units) -> Result<()> {
    let p = args.load()?;
    let c = build_conversion(&p, value, from);
    tracing::debug!(?c, "converted");
    println!("{}", serde_json::to_string_pretty(&c)?);
    Ok(())
}
