//! Closest-point search along a path (coarse-to-fine chord sampling).

use crate::vecmath::{closest_point_on_segment, Vec3};

use super::smooth::SmoothPath;

/// Upper bound on samples per segment for the closest-point search.
const MAX_SEARCH_STEPS: usize = 100;

impl SmoothPath {
    /// Raw position of the path point closest to `p`.
    ///
    /// - `start_segment`: segment to centre the search on (also the fallback result).
    /// - `search_radius`: segments to scan on each side; `None` scans the whole path.
    /// - `steps_per_segment`: chord samples per segment, clamped to [1, 100]. With more
    ///   than one step, two refinement passes follow around the best chord.
    pub fn find_closest_point(
        &self,
        p: Vec3,
        start_segment: usize,
        search_radius: Option<usize>,
        steps_per_segment: usize,
    ) -> f64 {
        let seg = start_segment as f64;
        let mut start = self.min_pos();
        let mut end = self.max_pos();
        if let Some(radius) = search_radius {
            if self.looped() {
                let half = ((end - start) / 2.0).floor().max(0.0) as usize;
                let r = radius.min(half) as f64;
                start = seg - r;
                end = seg + r + 1.0;
            } else {
                let r = radius as f64;
                start = (seg - r).max(self.min_pos());
                end = (seg + r + 1.0).min(self.max_pos());
            }
        }

        let (lo, hi) = (start, end);
        let steps = steps_per_segment.clamp(1, MAX_SEARCH_STEPS);
        let mut step = 1.0 / steps as f64;
        let mut best_pos = seg;
        let mut best_dist = f64::MAX;
        let passes = if steps == 1 { 1 } else { 3 };
        for _ in 0..passes {
            let count = ((end - start) / step + 1e-9).floor().max(0.0) as usize;
            let mut v0 = self.evaluate_local_position(start);
            for k in 1..=count {
                let f = start + k as f64 * step;
                let v = self.evaluate_local_position(f);
                let t = closest_point_on_segment(&p, &v0, &v);
                let d = (p - v0.lerp(&v, t)).norm_squared();
                if d < best_dist {
                    best_dist = d;
                    best_pos = f - (1.0 - t) * step;
                }
                v0 = v;
            }
            // refine around the best chord without leaving the search window
            start = (best_pos - step).max(lo);
            end = (best_pos + step).min(hi);
            step /= steps as f64;
        }
        tracing::trace!(best_pos, best_dist, "closest point");
        self.standardize_pos(best_pos)
    }
}
