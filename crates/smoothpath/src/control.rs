//! Smooth tangent handles for a knot sequence (Bezier form of a natural cubic spline).
//!
//! Purpose
//! - Given knots `k[0..N]`, compute per-knot handles `c1[i]` (leaving `k[i]`) and
//!   `c2[i]` (arriving at `k[i+1]`) so that the cubic segments
//!   `(k[i], c1[i], c2[i], k[i+1])` are C² at every internal knot.
//!
//! Model
//! - Each of the four channels of `Vec4` (x, y, z, roll) is solved independently
//!   as a tridiagonal system of size `N-1` (Thomas algorithm).
//! - Ends are "natural" (zero second derivative).
//! - Looped paths wrap up to `LOOP_MARGIN` knots from each end around the
//!   sequence, solve the open problem, and keep the middle. This approximates
//!   periodic continuity; it is not an exact periodic solve.
//!
//! Code cross-refs: `SmoothPath` (consumer), `bezier::bezier3`.

use crate::cfg::LOOP_MARGIN;
use crate::vecmath::Vec4;

/// Handle arrays, one entry per knot.
///
/// Invariant: `c1.len() == c2.len() == knots.len()`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ControlPoints {
    pub c1: Vec<Vec4>,
    pub c2: Vec<Vec4>,
}

impl ControlPoints {
    #[inline]
    pub fn len(&self) -> usize {
        self.c1.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.c1.is_empty()
    }
}

/// Handles for an open (`looped == false`) or closed knot sequence. Never fails.
pub fn smooth_control_points(knots: &[Vec4], looped: bool) -> ControlPoints {
    if looped {
        looped_control_points(knots)
    } else {
        unlooped_control_points(knots)
    }
}

fn unlooped_control_points(knot: &[Vec4]) -> ControlPoints {
    let num = knot.len();
    let mut c1 = vec![Vec4::zeros(); num];
    let mut c2 = vec![Vec4::zeros(); num];
    match num {
        0 => return ControlPoints { c1, c2 },
        1 => {
            c1[0] = knot[0];
            c2[0] = knot[0];
            return ControlPoints { c1, c2 };
        }
        2 => {
            c1[0] = knot[0].lerp(&knot[1], 1.0 / 3.0);
            c2[0] = knot[0].lerp(&knot[1], 2.0 / 3.0);
            return ControlPoints { c1, c2 };
        }
        _ => {}
    }

    let n = num - 1;
    let mut a = vec![0.0; n];
    let mut b = vec![0.0; n];
    let mut c = vec![0.0; n];
    let mut r = vec![0.0; n];
    for axis in 0..4 {
        // linear into the first segment
        a[0] = 0.0;
        b[0] = 2.0;
        c[0] = 1.0;
        r[0] = knot[0][axis] + 2.0 * knot[1][axis];

        for i in 1..n - 1 {
            a[i] = 1.0;
            b[i] = 4.0;
            c[i] = 1.0;
            r[i] = 4.0 * knot[i][axis] + 2.0 * knot[i + 1][axis];
        }

        // linear out of the last segment
        a[n - 1] = 2.0;
        b[n - 1] = 7.0;
        c[n - 1] = 0.0;
        r[n - 1] = 8.0 * knot[n - 1][axis] + knot[n][axis];

        let x = solve_tridiagonal(&a, &mut b, &c, &mut r);
        for (i, xi) in x.iter().enumerate() {
            c1[i][axis] = *xi;
        }
        for i in 0..n - 1 {
            c2[i][axis] = 2.0 * knot[i + 1][axis] - x[i + 1];
        }
        c2[n - 1][axis] = 0.5 * (knot[n][axis] + x[n - 1]);
    }
    ControlPoints { c1, c2 }
}

fn looped_control_points(knot: &[Vec4]) -> ControlPoints {
    let num = knot.len();
    if num < 2 {
        return unlooped_control_points(knot);
    }
    let margin = LOOP_MARGIN.min(num - 1);
    let mut extended = Vec::with_capacity(num + 2 * margin);
    extended.extend_from_slice(&knot[num - margin..]);
    extended.extend_from_slice(knot);
    extended.extend_from_slice(&knot[..margin]);

    let wide = unlooped_control_points(&extended);
    ControlPoints {
        c1: wide.c1[margin..margin + num].to_vec(),
        c2: wide.c2[margin..margin + num].to_vec(),
    }
}

/// Thomas algorithm for `a[i] x[i-1] + b[i] x[i] + c[i] x[i+1] = r[i]`.
///
/// `a[0]` and `c[n-1]` are ignored. `b` and `r` are overwritten by the forward
/// sweep. Assumes a diagonally dominant system (no pivoting).
pub(crate) fn solve_tridiagonal(a: &[f64], b: &mut [f64], c: &[f64], r: &mut [f64]) -> Vec<f64> {
    let n = b.len();
    debug_assert!(a.len() == n && c.len() == n && r.len() == n);
    if n == 0 {
        return Vec::new();
    }
    for i in 1..n {
        let m = a[i] / b[i - 1];
        b[i] -= m * c[i - 1];
        r[i] -= m * r[i - 1];
    }
    let mut x = vec![0.0; n];
    x[n - 1] = r[n - 1] / b[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = (r[i] - c[i] * x[i + 1]) / b[i];
    }
    x
}
