//! Smooth paths through waypoints.
//!
//! Purpose
//! - Evaluate position, tangent, and orientation at any raw path position of a
//!   C² cubic Bezier spline through the waypoints, open or looped.
//! - Convert between raw positions, arc-length distance, and normalized [0,1]
//!   positions through a resampled distance table.
//!
//! Why this design
//! - Handles and distance tables are derived values held in `OnceLock` cells:
//!   built on first use from `&self`, dropped wholesale by any `&mut self` mutator.
//!   A path that went through `ensure_caches()` can be shared across threads as is.
//! - Out-of-range positions are never errors; they are wrapped (looped) or clamped.
//!
//! Code cross-refs: `control::smooth_control_points`, `cache::DistanceCache`,
//! `bezier::{bezier3,bezier_tangent3,bezier1}`, `vecmath::look_rotation`.

mod search;
mod smooth;
mod types;

pub use smooth::SmoothPath;
pub use types::{CacheInfo, PositionUnits, Waypoint};

#[cfg(test)]
mod tests;
