//! Bezier evaluation.
//!
//! - Cubic segment helpers (`bezier3`, `bezier_tangent3`, `bezier1`, `bezier_tangent1`)
//!   used by `SmoothPath`; the parameter is clamped to [0,1].
//! - `BezierCurve<D>`: standalone curve of arbitrary degree via Bernstein blending.
//!   The parameter is *not* clamped, so values outside [0,1] extrapolate.

use nalgebra::SVector;

use crate::vecmath::clamp01;

/// Cubic Bezier point for control polygon `p0, p1, p2, p3` at `t ∈ [0,1]`.
#[inline]
pub fn bezier3<const D: usize>(
    t: f64,
    p0: SVector<f64, D>,
    p1: SVector<f64, D>,
    p2: SVector<f64, D>,
    p3: SVector<f64, D>,
) -> SVector<f64, D> {
    let t = clamp01(t);
    let d = 1.0 - t;
    p0 * (d * d * d) + p1 * (3.0 * d * d * t) + p2 * (3.0 * d * t * t) + p3 * (t * t * t)
}

/// Derivative of `bezier3` with respect to `t`.
#[inline]
pub fn bezier_tangent3<const D: usize>(
    t: f64,
    p0: SVector<f64, D>,
    p1: SVector<f64, D>,
    p2: SVector<f64, D>,
    p3: SVector<f64, D>,
) -> SVector<f64, D> {
    let t = clamp01(t);
    let d = 1.0 - t;
    p0 * (-3.0 * d * d)
        + p1 * (3.0 * d * d - 6.0 * d * t)
        + p2 * (6.0 * d * t - 3.0 * t * t)
        + p3 * (3.0 * t * t)
}

/// Scalar cubic Bezier (one channel, e.g. roll).
#[inline]
pub fn bezier1(t: f64, p0: f64, p1: f64, p2: f64, p3: f64) -> f64 {
    let t = clamp01(t);
    let d = 1.0 - t;
    d * d * d * p0 + 3.0 * d * d * t * p1 + 3.0 * d * t * t * p2 + t * t * t * p3
}

#[inline]
pub fn bezier_tangent1(t: f64, p0: f64, p1: f64, p2: f64, p3: f64) -> f64 {
    let t = clamp01(t);
    (-3.0 * p0 + 9.0 * p1 - 9.0 * p2 + 3.0 * p3) * t * t
        + (6.0 * p0 - 12.0 * p1 + 6.0 * p2) * t
        - 3.0 * p0
        + 3.0 * p1
}

/// Binomial coefficient `C(n, k)` as `f64`; zero when `k > n`.
///
/// Exact while the result fits the 53-bit mantissa, and finite up to `n ≈ 1020`.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let mut c = 1.0;
    for i in 0..k {
        c *= (n - i) as f64 / (i + 1) as f64;
    }
    c
}

/// Bernstein basis polynomial `B(n, i, t) = C(n, i) tⁱ (1-t)ⁿ⁻ⁱ`.
#[inline]
pub fn bernstein(n: usize, i: usize, t: f64) -> f64 {
    binomial(n, i) * t.powi(i as i32) * (1.0 - t).powi((n - i) as i32)
}

/// Bezier curve of degree `control_points.len() - 1` in `D` dimensions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BezierCurve<const D: usize> {
    pub control_points: Vec<SVector<f64, D>>,
}

pub type BezierCurve2 = BezierCurve<2>;
pub type BezierCurve3 = BezierCurve<3>;

impl<const D: usize> BezierCurve<D> {
    #[inline]
    pub fn new(control_points: Vec<SVector<f64, D>>) -> Self {
        Self { control_points }
    }

    #[inline]
    pub fn degree(&self) -> Option<usize> {
        self.control_points.len().checked_sub(1)
    }

    /// `P(t) = Σ B(n, i, t) · P[i]`. Empty curves evaluate to the origin.
    pub fn interpolate(&self, t: f64) -> SVector<f64, D> {
        let Some(n) = self.degree() else {
            return SVector::zeros();
        };
        self.control_points
            .iter()
            .enumerate()
            .fold(SVector::zeros(), |acc, (i, p)| acc + p * bernstein(n, i, t))
    }
}
