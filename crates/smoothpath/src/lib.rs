//! Smooth 3D spline paths through waypoints.
//!
//! Layers, leaves first:
//! - `vecmath`: `nalgebra` vector/quaternion aliases and small helpers.
//! - `bezier`: cubic segment evaluation and general-degree Bernstein curves.
//! - `control`: C² tangent handles via a per-channel tridiagonal solve.
//! - `cache`: arc-length resampling tables (position ↔ distance).
//! - `path`: `SmoothPath`, the public query object.
//! - `parse`: waypoint lists from comma-separated decimals.
//!
//! All evaluation is synchronous and allocation-light; the only mutable state
//! is the per-path cache, rebuilt lazily after a mutation.

pub mod bezier;
pub mod cache;
pub mod cfg;
pub mod control;
pub mod parse;
pub mod path;
pub mod vecmath;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use parse::{parse_waypoints, ParseError};
pub use path::{CacheInfo, PositionUnits, SmoothPath, Waypoint};
pub use vecmath::{Quat, Vec2, Vec3, Vec4};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::bezier::{BezierCurve, BezierCurve2, BezierCurve3};
    pub use crate::parse::{parse_waypoints, ParseError};
    pub use crate::path::{CacheInfo, PositionUnits, SmoothPath, Waypoint};
    pub use crate::vecmath::{Quat, Vec2, Vec3, Vec4};
}
