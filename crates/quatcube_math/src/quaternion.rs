//! Quaternion for representing 3D orientations
//!
//! A quaternion is stored as a scalar part `w` and a vector part `im`.
//! Only unit quaternions represent rotations. Sums, differences and scaled
//! quaternions show up during interpolation and must be normalized before
//! they are used to rotate anything.

use crate::Vec3;

/// Quaternion with scalar part `w` and vector (imaginary) part `im`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quaternion {
    /// Scalar component
    pub w: f32,
    /// Vector component (i, j, k)
    pub im: Vec3,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// Identity quaternion (no rotation)
    pub const IDENTITY: Self = Self {
        w: 1.0,
        im: Vec3::ZERO,
    };

    /// Create a quaternion from its scalar and vector parts
    #[inline]
    pub const fn new(w: f32, im: Vec3) -> Self {
        Self { w, im }
    }

    /// The "no rotation" element: `identity() * q == q`
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Embed a vector as a pure quaternion `(0, v)`
    #[inline]
    pub const fn pure(v: Vec3) -> Self {
        Self { w: 0.0, im: v }
    }

    /// Create a rotation of `radians` around `axis`
    ///
    /// Uses the half-angle form `(cos(θ/2), sin(θ/2) * axis)` required by the
    /// sandwich product in [`Quaternion::rotate`]. The axis is normalized when
    /// it is not already unit length. A zero axis has no direction and the
    /// result is not finite.
    pub fn from_axis_angle(axis: Vec3, radians: f32) -> Self {
        let half = radians * 0.5;
        let len_sq = axis.length_squared();
        let axis = if (len_sq - 1.0).abs() > 1e-6 {
            axis / len_sq.sqrt()
        } else {
            axis
        };

        Self {
            w: half.cos(),
            im: half.sin() * axis,
        }
    }

    /// Recover the (axis, angle) pair of a rotation quaternion
    ///
    /// The angle is in `[0, 2π]`. Near-identity rotations have no meaningful
    /// axis; those report the X axis.
    pub fn to_axis_angle(&self) -> (Vec3, f32) {
        let q = self.normalize();
        let angle = 2.0 * q.w.clamp(-1.0, 1.0).acos();
        let s = (1.0 - q.w * q.w).max(0.0).sqrt();
        if s < 1e-6 {
            (Vec3::X, angle)
        } else {
            (q.im / s, angle)
        }
    }

    /// 4D dot product
    ///
    /// Assumes unit quaternions when used as the cosine of the angle between
    /// two orientations. Not enforced.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.w * other.w + self.im.dot(other.im)
    }

    /// Squared norm
    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.w * self.w + self.im.dot(self.im)
    }

    /// Norm (magnitude)
    #[inline]
    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Scale to unit norm
    ///
    /// The zero quaternion has no direction: normalizing it yields NaN
    /// components. Callers never normalize zero.
    #[inline]
    pub fn normalize(&self) -> Self {
        *self / self.norm()
    }

    /// Conjugate `(w, -im)`; the inverse of a unit quaternion
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self {
            w: self.w,
            im: -self.im,
        }
    }

    /// Check that every component is finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.w.is_finite() && self.im.is_finite()
    }

    /// Rotate a vector using the sandwich product: v' = q * (0, v) * q̄
    ///
    /// `self` must be unit-norm. A non-unit quaternion scales the vector
    /// instead of purely rotating it.
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        (*self * Self::pure(v) * self.conjugate()).im
    }
}

// Operator overloads

/// Hamilton product. Non-commutative: in `a * b`, `b` is applied first.
impl std::ops::Mul for Quaternion {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        Self {
            w: self.w * other.w - self.im.dot(other.im),
            im: self.w * other.im + other.w * self.im + self.im.cross(other.im),
        }
    }
}

impl std::ops::Mul<f32> for Quaternion {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self {
            w: self.w * scalar,
            im: self.im * scalar,
        }
    }
}

impl std::ops::Mul<Quaternion> for f32 {
    type Output = Quaternion;
    #[inline]
    fn mul(self, q: Quaternion) -> Quaternion {
        q * self
    }
}

impl std::ops::Add for Quaternion {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            w: self.w + other.w,
            im: self.im + other.im,
        }
    }
}

impl std::ops::Sub for Quaternion {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            w: self.w - other.w,
            im: self.im - other.im,
        }
    }
}

impl std::ops::Neg for Quaternion {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            w: -self.w,
            im: -self.im,
        }
    }
}

/// Caller guarantees a non-zero divisor.
impl std::ops::Div<f32> for Quaternion {
    type Output = Self;
    #[inline]
    fn div(self, divisor: f32) -> Self {
        Self {
            w: self.w / divisor,
            im: self.im / divisor,
        }
    }
}
