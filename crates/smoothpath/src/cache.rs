//! Arc-length resampling tables.
//!
//! Purpose
//! - Map raw path positions to travelled distance and back without a closed form
//!   for the arc length of a cubic.
//!
//! Model
//! - Sample the path every `1/resolution` raw units from `min_pos` to `max_pos`;
//!   the running sum of chord lengths is `pos_to_distance`.
//! - Walk uniform distance steps of `path_length/(samples-1)` and invert the
//!   forward table by linear interpolation into `distance_to_pos`.
//! - Both tables hold positions *relative to* `min_pos`.
//!
//! The cache is an immutable value: `SmoothPath` builds a fresh one after any
//! change to waypoints, looped flag, or resolution and never edits it in place.

use crate::cfg::LENGTH_EPS;
use crate::vecmath::{lerp, Vec3};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DistanceCache {
    /// Cumulative distance at each raw-position sample. Non-decreasing.
    pub pos_to_distance: Vec<f64>,
    /// Raw position (relative to `min_pos`) at each uniform distance sample.
    pub distance_to_pos: Vec<f64>,
    /// Resolution the tables were built with (0 = not built).
    pub cached_sample_steps: usize,
    pub path_length: f64,
    pub pos_step_size: f64,
    pub distance_step_size: f64,
    /// `max_pos - min_pos` at build time.
    pub span: f64,
}

impl DistanceCache {
    /// Resample `eval` over `[min_pos, max_pos]` with `resolution` samples per unit.
    ///
    /// A resolution of 0 yields an empty cache with zero length.
    pub fn build<F>(min_pos: f64, max_pos: f64, resolution: usize, mut eval: F) -> Self
    where
        F: FnMut(f64) -> Vec3,
    {
        if resolution < 1 {
            return Self::default();
        }
        let span = (max_pos - min_pos).max(0.0);
        let pos_step = 1.0 / resolution as f64;
        let samples = (span / pos_step).round() as usize + 1;

        let mut pos_to_distance = vec![0.0; samples];
        let mut length = 0.0;
        let mut p0 = eval(min_pos);
        for (i, slot) in pos_to_distance.iter_mut().enumerate().skip(1) {
            let p = eval(min_pos + i as f64 * pos_step);
            length += (p - p0).norm();
            p0 = p;
            *slot = length;
        }

        let mut distance_to_pos = vec![0.0; samples];
        let mut distance_step = 0.0;
        if samples > 1 {
            distance_step = length / (samples - 1) as f64;
            let mut pos_index = 1;
            for (i, slot) in distance_to_pos.iter_mut().enumerate().skip(1) {
                let distance = i as f64 * distance_step;
                let mut d = pos_to_distance[pos_index];
                while d < distance && pos_index < samples - 1 {
                    pos_index += 1;
                    d = pos_to_distance[pos_index];
                }
                let d0 = pos_to_distance[pos_index - 1];
                let delta = d - d0;
                *slot = if delta.abs() > LENGTH_EPS {
                    let t = (distance - d0) / delta;
                    pos_step * (t + (pos_index - 1) as f64)
                } else {
                    pos_step * (pos_index - 1) as f64
                };
            }
        }

        Self {
            pos_to_distance,
            distance_to_pos,
            cached_sample_steps: resolution,
            path_length: length,
            pos_step_size: pos_step,
            distance_step_size: distance_step,
            span,
        }
    }

    #[inline]
    pub fn samples(&self) -> usize {
        self.pos_to_distance.len()
    }

    /// Distance travelled at raw position `pos` (relative to `min_pos`, already standardized).
    pub fn distance_at(&self, pos: f64) -> f64 {
        if self.samples() < 2 || self.pos_step_size <= 0.0 {
            return 0.0;
        }
        let d = (pos / self.pos_step_size).max(0.0);
        let i = d.floor() as usize;
        if i >= self.samples() - 1 {
            return self.path_length;
        }
        lerp(self.pos_to_distance[i], self.pos_to_distance[i + 1], d - i as f64)
    }

    /// Raw position (relative to `min_pos`) at standardized `distance`.
    pub fn pos_at(&self, distance: f64) -> f64 {
        if self.samples() < 2 || self.distance_step_size <= 0.0 {
            return 0.0;
        }
        let d = (distance / self.distance_step_size).max(0.0);
        let i = d.floor() as usize;
        if i >= self.distance_to_pos.len() - 1 {
            return self.span;
        }
        lerp(self.distance_to_pos[i], self.distance_to_pos[i + 1], d - i as f64)
    }
}
