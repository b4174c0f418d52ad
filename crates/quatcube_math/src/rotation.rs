//! Rotation operators built on [`Quaternion`]
//!
//! - [`rotate_vector`] is where a vector actually gets transformed.
//! - [`compose_rotation`] accumulates incremental rotations.
//! - [`slerp`] / [`slerp_shortest`] interpolate between orientations.

use crate::{Quaternion, Vec3};

/// Above this cosine the two orientations are too close for the sine-based
/// formula to stay stable, so [`slerp`] falls back to normalized lerp.
pub const SLERP_LINEAR_THRESHOLD: f32 = 0.9995;

/// Rotate `v` by the unit quaternion `q`
///
/// Computes `q * (0, v) * conjugate(q)` and returns the vector part.
#[inline]
pub fn rotate_vector(v: Vec3, q: Quaternion) -> Vec3 {
    q.rotate(v)
}

/// Apply a rotation of `radians` around `axis` after the existing rotation `q`
///
/// Returns `from_axis_angle(axis, radians) * q`. The result is not
/// renormalized; callers normalize once per frame.
#[inline]
pub fn compose_rotation(q: Quaternion, radians: f32, axis: Vec3) -> Quaternion {
    Quaternion::from_axis_angle(axis, radians) * q
}

/// Spherical linear interpolation from `q1` to `q2`
///
/// Returns the orientation `t` of the way along the arc. `t = 0` gives `q1`
/// and `t = 1` gives `q2`, both normalized.
///
/// When `dot(q1, q2) < 0` the arc runs the long way around the 4D sphere.
/// No sign flip is applied here; see [`slerp_shortest`].
/// When `q2` is exactly `-q1` the arc has no defined plane and the result
/// is NaN.
pub fn slerp(q1: Quaternion, q2: Quaternion, t: f32) -> Quaternion {
    let q1 = q1.normalize();
    let q2 = q2.normalize();

    let cos_theta0 = q1.dot(&q2);
    if cos_theta0 > SLERP_LINEAR_THRESHOLD {
        return (q1 + t * (q2 - q1)).normalize();
    }

    // Rounding can push the cosine just past -1
    let theta = t * cos_theta0.max(-1.0).acos();
    let ortho = (q2 - cos_theta0 * q1).normalize();
    theta.cos() * q1 + theta.sin() * ortho
}

/// Slerp along the shorter of the two arcs between `q1` and `q2`
///
/// `q` and `-q` are the same 3D rotation, so `q2` is negated when the two
/// quaternions are more than 90° apart in 4D.
pub fn slerp_shortest(q1: Quaternion, q2: Quaternion, t: f32) -> Quaternion {
    if q1.dot(&q2) < 0.0 {
        slerp(q1, -q2, t)
    } else {
        slerp(q1, q2, t)
    }
}

/// Rotation angle (radians) between two unit quaternions
///
/// `2 * acos(dot)`, with the dot product clamped into the domain of acos.
pub fn angle_between(q1: Quaternion, q2: Quaternion) -> f32 {
    2.0 * q1.dot(&q2).clamp(-1.0, 1.0).acos()
}
