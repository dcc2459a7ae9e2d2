//! Vector and rotation helpers on top of `nalgebra`.
//!
//! - `Vec2`/`Vec3`/`Vec4`: plain `f64` column vectors. `Vec4` also serves as a
//!   4-channel knot (x, y, z, roll) so the control-point solver runs once per channel.
//! - `Quat`: unit quaternion; built with `axis_angle` or `look_rotation`.
//!
//! Conventions
//! - Forward is +Z and up is +Y, so `look_rotation(f, up)` maps +Z onto `f`.
//! - Angles are radians.

use nalgebra::{Unit, UnitQuaternion, Vector2, Vector3, Vector4};

use crate::cfg::TANGENT_EPS;

pub type Vec2 = Vector2<f64>;
pub type Vec3 = Vector3<f64>;
pub type Vec4 = Vector4<f64>;
pub type Quat = UnitQuaternion<f64>;

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[inline]
pub fn clamp01(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

/// True if every component is within `1e-6` of zero.
#[inline]
pub fn almost_zero(v: &Vec3) -> bool {
    v.iter().all(|c| c.abs() < TANGENT_EPS)
}

/// Rotation of `angle` radians about `axis` (normalized here). A zero axis yields identity.
pub fn axis_angle(axis: Vec3, angle: f64) -> Quat {
    match Unit::try_new(axis, 0.0) {
        Some(axis) => UnitQuaternion::from_axis_angle(&axis, angle),
        None => Quat::identity(),
    }
}

/// Rotation that maps +Z onto `forward` while keeping +Y as close to `up` as possible.
///
/// Falls back to the shortest arc from +Z when `forward` is parallel to `up`,
/// and to identity when `forward` is zero.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    let norm = forward.norm();
    if !norm.is_finite() || norm <= 0.0 {
        return Quat::identity();
    }
    let fwd = forward / norm;
    if fwd.cross(&up).norm_squared() > 1e-12 {
        return UnitQuaternion::face_towards(&fwd, &up);
    }
    UnitQuaternion::rotation_between(&Vec3::z(), &fwd)
        .unwrap_or_else(|| UnitQuaternion::from_axis_angle(&Vec3::y_axis(), std::f64::consts::PI))
}

/// Apply a roll of `angle` radians about the local forward axis of `q`.
#[inline]
pub fn roll_around_forward(q: Quat, angle: f64) -> Quat {
    q * axis_angle(Vec3::z(), angle)
}

/// Parameter in [0,1] of the point on segment `s0→s1` closest to `p`.
/// Degenerate segments return 0.
pub fn closest_point_on_segment(p: &Vec3, s0: &Vec3, s1: &Vec3) -> f64 {
    let v = s1 - s0;
    let len2 = v.norm_squared();
    if len2 < crate::cfg::SEGMENT_EPS_SQ {
        return 0.0;
    }
    clamp01((p - s0).dot(&v) / len2)
}
