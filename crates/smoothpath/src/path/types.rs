//! Value types for smooth paths: waypoints, position units, cache snapshots.

use crate::vecmath::{Vec3, Vec4};

/// A knot the path passes through, with a roll angle (radians) about the path tangent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Waypoint {
    pub position: Vec3,
    pub roll: f64,
}

impl Waypoint {
    #[inline]
    pub fn new(position: Vec3, roll: f64) -> Self {
        Self { position, roll }
    }
    #[inline]
    pub fn from_xyz(x: f64, y: f64, z: f64) -> Self {
        Self::new(Vec3::new(x, y, z), 0.0)
    }
    /// Pack as a 4-channel knot `(x, y, z, roll)`.
    #[inline]
    pub fn to_knot(&self) -> Vec4 {
        Vec4::new(self.position.x, self.position.y, self.position.z, self.roll)
    }
    #[inline]
    pub fn from_knot(k: &Vec4) -> Self {
        Self::new(k.xyz(), k.w)
    }
}

/// How a scalar position along a path is measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PositionUnits {
    /// Raw position: integer part selects the segment, fraction is the Bezier parameter.
    #[default]
    PathUnits,
    /// Arc length from the start of the path.
    Distance,
    /// Arc length divided by total length, in [0,1].
    Normalized,
}

/// Snapshot of a path's derived state; does not trigger a rebuild.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CacheInfo {
    pub waypoint_count: usize,
    pub looped: bool,
    pub resolution: usize,
    pub controls_ready: bool,
    pub distances_ready: bool,
    pub cached_sample_steps: usize,
    pub samples: usize,
    pub path_length: f64,
    pub pos_step_size: f64,
    pub distance_step_size: f64,
}
