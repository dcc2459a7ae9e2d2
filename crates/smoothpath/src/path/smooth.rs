//! `SmoothPath`: waypoints + looped flag + lazily built handle and distance caches.

use std::sync::OnceLock;

use crate::bezier::{bezier1, bezier3, bezier_tangent3};
use crate::cache::DistanceCache;
use crate::cfg::{DEFAULT_RESOLUTION, LENGTH_EPS};
use crate::control::{smooth_control_points, ControlPoints};
use crate::parse::{parse_waypoints, ParseError};
use crate::vecmath::{almost_zero, look_rotation, roll_around_forward, Quat, Vec3, Vec4};

use super::types::{CacheInfo, PositionUnits, Waypoint};

/// Smooth C² path through a sequence of waypoints.
///
/// Invariants:
/// - `controls` and `distances` are caches derived from `(waypoints, looped)` and
///   `(waypoints, looped, resolution)`; every mutator resets what it affects.
/// - Raw position domain is `[0, N-1]` open and `[0, N]` looped.
#[derive(Clone, Debug)]
pub struct SmoothPath {
    waypoints: Vec<Waypoint>,
    looped: bool,
    resolution: usize,
    controls: OnceLock<ControlPoints>,
    distances: OnceLock<DistanceCache>,
}

impl Default for SmoothPath {
    fn default() -> Self {
        Self::new(Vec::new(), false)
    }
}

impl SmoothPath {
    pub fn new(waypoints: Vec<Waypoint>, looped: bool) -> Self {
        Self {
            waypoints,
            looped,
            resolution: DEFAULT_RESOLUTION,
            controls: OnceLock::new(),
            distances: OnceLock::new(),
        }
    }

    /// Build from a `"x,y,z,x,y,z,..."` string (roll 0).
    pub fn parse(input: &str, looped: bool) -> Result<Self, ParseError> {
        Ok(Self::new(parse_waypoints(input)?, looped))
    }

    #[inline]
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.set_resolution(resolution);
        self
    }

    #[inline]
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }
    #[inline]
    pub fn looped(&self) -> bool {
        self.looped
    }
    #[inline]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn set_waypoints(&mut self, waypoints: Vec<Waypoint>) {
        self.waypoints = waypoints;
        self.invalidate();
    }

    pub fn push_waypoint(&mut self, waypoint: Waypoint) {
        self.waypoints.push(waypoint);
        self.invalidate();
    }

    pub fn set_looped(&mut self, looped: bool) {
        if self.looped != looped {
            self.looped = looped;
            self.invalidate();
        }
    }

    /// Distance-cache samples per segment. 0 disables arc-length conversions.
    pub fn set_resolution(&mut self, resolution: usize) {
        if self.resolution != resolution {
            self.resolution = resolution;
            // handles do not depend on the sampling density
            self.distances = OnceLock::new();
            tracing::trace!(resolution, "distance cache invalidated");
        }
    }

    fn invalidate(&mut self) {
        self.controls = OnceLock::new();
        self.distances = OnceLock::new();
        tracing::trace!(
            waypoints = self.waypoints.len(),
            looped = self.looped,
            "path caches invalidated"
        );
    }

    fn controls(&self) -> &ControlPoints {
        self.controls.get_or_init(|| {
            let knots: Vec<Vec4> = self.waypoints.iter().map(Waypoint::to_knot).collect();
            let cp = smooth_control_points(&knots, self.looped);
            tracing::debug!(
                waypoints = knots.len(),
                looped = self.looped,
                "control points rebuilt"
            );
            cp
        })
    }

    fn distance_cache(&self) -> &DistanceCache {
        self.distances.get_or_init(|| {
            let cache = DistanceCache::build(
                self.min_pos(),
                self.max_pos(),
                self.resolution,
                |pos| self.evaluate_local_position(pos),
            );
            tracing::debug!(
                resolution = self.resolution,
                samples = cache.samples(),
                length = cache.path_length,
                "distance cache rebuilt"
            );
            cache
        })
    }

    /// Build both caches now, e.g. before sharing `&self` across threads.
    pub fn ensure_caches(&self) {
        self.controls();
        self.distance_cache();
    }

    /// Tangent handles `(c1, c2)`, one per waypoint.
    pub fn control_points(&self) -> (Vec<Waypoint>, Vec<Waypoint>) {
        let cp = self.controls();
        (
            cp.c1.iter().map(Waypoint::from_knot).collect(),
            cp.c2.iter().map(Waypoint::from_knot).collect(),
        )
    }

    pub fn cache_info(&self) -> CacheInfo {
        let mut info = CacheInfo {
            waypoint_count: self.waypoints.len(),
            looped: self.looped,
            resolution: self.resolution,
            controls_ready: self.controls.get().is_some(),
            distances_ready: false,
            ..CacheInfo::default()
        };
        if let Some(cache) = self.distances.get() {
            info.distances_ready = true;
            info.cached_sample_steps = cache.cached_sample_steps;
            info.samples = cache.samples();
            info.path_length = cache.path_length;
            info.pos_step_size = cache.pos_step_size;
            info.distance_step_size = cache.distance_step_size;
        }
        info
    }

    #[inline]
    pub fn min_pos(&self) -> f64 {
        0.0
    }

    /// `N-1` for an open path, `N` for a looped one, 0 with fewer than two waypoints.
    pub fn max_pos(&self) -> f64 {
        let count = self.waypoints.len();
        if count < 2 {
            return 0.0;
        }
        if self.looped {
            count as f64
        } else {
            (count - 1) as f64
        }
    }

    pub fn min_unit(&self, units: PositionUnits) -> f64 {
        match units {
            PositionUnits::PathUnits => self.min_pos(),
            PositionUnits::Distance | PositionUnits::Normalized => 0.0,
        }
    }

    pub fn max_unit(&self, units: PositionUnits) -> f64 {
        match units {
            PositionUnits::PathUnits => self.max_pos(),
            PositionUnits::Distance => self.path_length(),
            PositionUnits::Normalized => 1.0,
        }
    }

    /// Arc length of the whole path (0 when resolution is 0).
    pub fn path_length(&self) -> f64 {
        if self.resolution < 1 {
            return 0.0;
        }
        self.distance_cache().path_length
    }

    /// Wrap into `[0, max_pos)` when looped, otherwise clamp into `[min_pos, max_pos]`.
    pub fn standardize_pos(&self, pos: f64) -> f64 {
        let max = self.max_pos();
        if self.looped && max > 0.0 {
            return pos.rem_euclid(max);
        }
        pos.clamp(self.min_pos(), max)
    }

    /// Wrap or clamp a distance into `[0, path_length]`.
    pub fn standardize_path_distance(&self, distance: f64) -> f64 {
        let length = self.path_length();
        if length <= 0.0 {
            return 0.0;
        }
        let distance = if self.looped {
            distance.rem_euclid(length)
        } else {
            distance
        };
        distance.clamp(0.0, length)
    }

    pub fn standardize_unit(&self, pos: f64, units: PositionUnits) -> f64 {
        match units {
            PositionUnits::PathUnits => self.standardize_pos(pos),
            PositionUnits::Distance => self.standardize_path_distance(pos),
            PositionUnits::Normalized => {
                let length = self.path_length();
                if length < LENGTH_EPS {
                    return 0.0;
                }
                self.standardize_path_distance(pos * length) / length
            }
        }
    }

    /// Standardized position and the waypoint indices of the segment containing it.
    fn bounding_indices(&self, pos: f64) -> (f64, usize, usize) {
        let n = self.waypoints.len();
        if n < 2 {
            return (0.0, 0, 0);
        }
        let mut pos = self.standardize_pos(pos);
        let mut a = pos.floor() as usize;
        if a >= n {
            // rem_euclid can round up to max_pos for tiny negative inputs
            pos -= self.max_pos();
            a = 0;
        }
        let mut b = a + 1;
        if b == n {
            if self.looped {
                b = 0;
            } else {
                a -= 1;
                b -= 1;
            }
        }
        (pos, a, b)
    }

    /// Point on the path at raw position `pos`. Empty paths return the origin.
    pub fn evaluate_local_position(&self, pos: f64) -> Vec3 {
        if self.waypoints.is_empty() {
            return Vec3::zeros();
        }
        let (pos, a, b) = self.bounding_indices(pos);
        if a == b {
            return self.waypoints[a].position;
        }
        let cp = self.controls();
        bezier3(
            pos - a as f64,
            self.waypoints[a].position,
            cp.c1[a].xyz(),
            cp.c2[a].xyz(),
            self.waypoints[b].position,
        )
    }

    /// Derivative of the path with respect to raw position. Zero with fewer than two waypoints.
    pub fn evaluate_local_tangent(&self, pos: f64) -> Vec3 {
        if self.waypoints.len() < 2 {
            return Vec3::zeros();
        }
        let (pos, a, b) = self.bounding_indices(pos);
        let cp = self.controls();
        bezier_tangent3(
            pos - a as f64,
            self.waypoints[a].position,
            cp.c1[a].xyz(),
            cp.c2[a].xyz(),
            self.waypoints[b].position,
        )
    }

    /// Look rotation along the tangent (up = +Y), rolled by the interpolated roll.
    ///
    /// Identity when the path is empty or the tangent is near zero.
    pub fn evaluate_local_orientation(&self, pos: f64) -> Quat {
        if self.waypoints.is_empty() {
            return Quat::identity();
        }
        let (t, a, b) = self.bounding_indices(pos);
        let roll = if a == b {
            self.waypoints[a].roll
        } else {
            let cp = self.controls();
            bezier1(
                t - a as f64,
                self.waypoints[a].roll,
                cp.c1[a].w,
                cp.c2[a].w,
                self.waypoints[b].roll,
            )
        };
        let fwd = self.evaluate_local_tangent(pos);
        if almost_zero(&fwd) {
            return Quat::identity();
        }
        roll_around_forward(look_rotation(fwd, Vec3::y()), roll)
    }

    /// Raw position → `units`.
    pub fn from_native_path_units(&self, pos: f64, units: PositionUnits) -> f64 {
        if units == PositionUnits::PathUnits {
            return pos;
        }
        let length = self.path_length();
        if self.resolution < 1 || length < LENGTH_EPS {
            return 0.0;
        }
        let pos = self.standardize_pos(pos) - self.min_pos();
        let distance = self.distance_cache().distance_at(pos);
        match units {
            PositionUnits::Normalized => distance / length,
            _ => distance,
        }
    }

    /// `units` → raw position.
    pub fn to_native_path_units(&self, pos: f64, units: PositionUnits) -> f64 {
        if units == PositionUnits::PathUnits {
            return pos;
        }
        let length = self.path_length();
        if self.resolution < 1 || length < LENGTH_EPS {
            return self.min_pos();
        }
        let distance = match units {
            PositionUnits::Normalized => pos * length,
            _ => pos,
        };
        let distance = self.standardize_path_distance(distance);
        self.min_pos() + self.distance_cache().pos_at(distance)
    }

    pub fn evaluate_position_at_unit(&self, pos: f64, units: PositionUnits) -> Vec3 {
        self.evaluate_local_position(self.to_native_path_units(pos, units))
    }

    pub fn evaluate_tangent_at_unit(&self, pos: f64, units: PositionUnits) -> Vec3 {
        self.evaluate_local_tangent(self.to_native_path_units(pos, units))
    }

    pub fn evaluate_orientation_at_unit(&self, pos: f64, units: PositionUnits) -> Quat {
        self.evaluate_local_orientation(self.to_native_path_units(pos, units))
    }
}
