use std::ops::{Add, Mul, Neg};

use super::vec3::Vec3;

/// Damping applied to angular velocity before it is folded into an orientation.
pub const SPIN_DAMPING: f64 = 0.1;

/// A quaternion representing a rotation in 3D space.
///
/// Stored as (x, y, z, w) where w is the scalar part.
/// Kept normalized by every integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Quat {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    /// Identity quaternion (no rotation)
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a new quaternion from components
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Pure quaternion (zero scalar part) from a vector
    #[inline]
    pub const fn from_vector(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z, 0.0)
    }

    /// Creates a quaternion from a rotation axis and angle (in radians)
    #[inline]
    pub fn from_axis_angle(axis: Vec3, angle: f64) -> Self {
        let half_angle = angle * 0.5;
        let (s, c) = half_angle.sin_cos();
        let axis = axis.normalize();
        Self::new(axis.x * s, axis.y * s, axis.z * s, c)
    }

    /// Returns the squared length of the quaternion
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Returns the length of the quaternion
    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Returns a normalized quaternion; a zero quaternion becomes the identity
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len > 0.0 {
            let inv_len = 1.0 / len;
            Self::new(
                self.x * inv_len,
                self.y * inv_len,
                self.z * inv_len,
                self.w * inv_len,
            )
        } else {
            Self::IDENTITY
        }
    }

    /// Returns the conjugate (inverse rotation for unit quaternions)
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Dot product of two quaternions
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Rotates a vector by this quaternion
    #[inline]
    pub fn rotate_vec(self, v: Vec3) -> Vec3 {
        let qv = Vec3::new(self.x, self.y, self.z);
        let uv = qv.cross(v);
        let uuv = qv.cross(uv);
        v + (uv * self.w + uuv) * 2.0
    }

    /// Advances the orientation by a damped angular velocity.
    ///
    /// This is the cheap additive update `q + (ω' * q)` with
    /// `ω' = angular_velocity * SPIN_DAMPING * dt`, followed by a
    /// renormalization. It only approximates the exponential map and
    /// under-rotates on purpose; callers that need exact rotation should
    /// compose `from_axis_angle` instead.
    #[inline]
    pub fn integrate_additive(self, angular_velocity: Vec3, dt: f64) -> Self {
        let spin = Self::from_vector(angular_velocity * (SPIN_DAMPING * dt));
        (self + spin * self).normalize()
    }
}

impl Add for Quat {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl Mul for Quat {
    type Output = Self;

    /// Hamilton product (combines rotations)
    #[inline]
    fn mul(self, other: Self) -> Self {
        Self::new(
            self.w * other.x + self.x * other.w + self.y * other.z - self.z * other.y,
            self.w * other.y - self.x * other.z + self.y * other.w + self.z * other.x,
            self.w * other.z + self.x * other.y - self.y * other.x + self.z * other.w,
            self.w * other.w - self.x * other.x - self.y * other.y - self.z * other.z,
        )
    }
}

impl Neg for Quat {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}
