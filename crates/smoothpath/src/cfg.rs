//! Tolerance and sampling defaults for path evaluation (internal).
//!
//! Policy
//! - Defaults are fixed constants; per-path sampling density is the only knob
//!   exposed at runtime (`SmoothPath::set_resolution`).

/// Distance-cache samples per segment for a freshly constructed path.
pub const DEFAULT_RESOLUTION: usize = 20;
/// Below this length a path counts as degenerate for unit conversions.
pub(crate) const LENGTH_EPS: f64 = 1e-5;
/// Squared chord length under which a segment is treated as a single point.
pub(crate) const SEGMENT_EPS_SQ: f64 = 1e-12;
/// Per-component threshold under which a tangent has no usable direction.
pub(crate) const TANGENT_EPS: f64 = 1e-6;
/// Maximum number of knots borrowed from each end when wrapping a looped path.
pub(crate) const LOOP_MARGIN: usize = 4;
