//! Walk a surveyed camera track at constant speed and print timings.
//!
//! Purpose
//! - Give a reproducible data point for "how long does a cache rebuild cost and
//!   how fast are per-frame queries afterwards" on a realistic seven-point track.
//! - Show the unit-aware query surface end to end.
//!
//! Run: `cargo run -p smoothpath --example survey_walk --release`

use std::time::Instant;

use smoothpath::{PositionUnits, SmoothPath};

const SURVEY: &str = "0,0,0,-3.440392,0,-2.898927,1.447635,0,-7.49635,8.594374,0,-1.949572,\
                      3.946407,0,4.45786,-4.752399,0,6.805671,-11.723,0,2.915641";

fn main() {
    let path = SmoothPath::parse(SURVEY, true).expect("survey waypoints parse");

    let build_start = Instant::now();
    path.ensure_caches();
    let build_ms = build_start.elapsed().as_secs_f64() * 1e3;
    let info = path.cache_info();

    let frames = 240;
    let len = path.path_length();
    let query_start = Instant::now();
    let mut worst_step: f64 = 0.0;
    let mut prev = path.evaluate_position_at_unit(0.0, PositionUnits::Distance);
    for i in 1..=frames {
        let d = len * i as f64 / frames as f64;
        let p = path.evaluate_position_at_unit(d, PositionUnits::Distance);
        let _q = path.evaluate_orientation_at_unit(d, PositionUnits::Distance);
        worst_step = worst_step.max((p - prev).norm());
        prev = p;
    }
    let query_us = query_start.elapsed().as_secs_f64() * 1e6 / frames as f64;

    println!(
        "waypoints={} looped={} samples={} length={len:.6}",
        info.waypoint_count, info.looped, info.samples
    );
    println!(
        "nominal_step={:.6} worst_step={worst_step:.6}",
        len / frames as f64
    );
    println!("build_time_ms={build_ms:.3}");
    println!("query_time_us={query_us:.3}");
}
