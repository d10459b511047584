// Copyright 2022, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! Math types used across the tracker display core.

use std::ops::Mul;

/// A 3D vector of 64-bit floats
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vec3 { x, y, z }
    }

    /// Squared length of the vector.
    pub fn magnitude2(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn dot(&self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

impl Default for Vec3 {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }
}

impl From<cgmath::Vector3<f64>> for Vec3 {
    fn from(v: cgmath::Vector3<f64>) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for cgmath::Vector3<f64> {
    fn from(v: Vec3) -> Self {
        cgmath::Vector3::new(v.x, v.y, v.z)
    }
}

/// A (typically unit) quaternion corresponding to a rotation.
///
/// The rotation algebra is defined for unit quaternions only; callers are
/// responsible for supplying normalized values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quat {
    pub s: f64,
    pub v: Vec3,
}

impl Quat {
    /// Create from scalar part and vector part.
    pub fn from_sv(s: f64, v: Vec3) -> Quat {
        Quat { s, v }
    }

    /// Create from all four coefficients: mind the order!
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Quat {
        Quat {
            s: w,
            v: Vec3::new(x, y, z),
        }
    }

    /// Return an identity rotation
    pub fn identity() -> Quat {
        Quat {
            s: 1.0,
            v: Vec3::new(0.0, 0.0, 0.0),
        }
    }

    pub fn x(&self) -> f64 {
        self.v.x
    }

    pub fn y(&self) -> f64 {
        self.v.y
    }

    pub fn z(&self) -> f64 {
        self.v.z
    }

    pub fn w(&self) -> f64 {
        self.s
    }

    pub fn conjugate(&self) -> Quat {
        Quat {
            s: self.s,
            v: Vec3::new(-self.v.x, -self.v.y, -self.v.z),
        }
    }

    /// Multiplicative inverse.
    ///
    /// For unit quaternions this equals the conjugate.
    pub fn inverse(&self) -> Quat {
        let m2 = self.magnitude2();
        let c = self.conjugate();
        Quat {
            s: c.s / m2,
            v: Vec3::new(c.v.x / m2, c.v.y / m2, c.v.z / m2),
        }
    }

    pub fn dot(&self, other: Quat) -> f64 {
        self.s * other.s + self.v.dot(other.v)
    }

    /// Squared magnitude; 1 for a normalized quaternion.
    pub fn magnitude2(&self) -> f64 {
        self.dot(*self)
    }

    pub fn normalize(&self) -> Quat {
        let m = self.magnitude2().sqrt();
        Quat {
            s: self.s / m,
            v: Vec3::new(self.v.x / m, self.v.y / m, self.v.z / m),
        }
    }

    /// Extract intrinsic X-Y-Z Euler angles, in degrees.
    ///
    /// Matches the rotation-matrix extraction used by the display layer's 3D
    /// engine, including the guard at the ±90° pitch singularity.
    pub fn to_euler_degrees(&self) -> EulerDegrees {
        let (x, y, z, w) = (self.v.x, self.v.y, self.v.z, self.s);
        let x2 = x + x;
        let y2 = y + y;
        let z2 = z + z;
        let xx = x * x2;
        let xy = x * y2;
        let xz = x * z2;
        let yy = y * y2;
        let yz = y * z2;
        let zz = z * z2;
        let wx = w * x2;
        let wy = w * y2;
        let wz = w * z2;

        let m11 = 1.0 - (yy + zz);
        let m12 = xy - wz;
        let m13 = xz + wy;
        let m22 = 1.0 - (xx + zz);
        let m23 = yz - wx;
        let m32 = yz + wx;
        let m33 = 1.0 - (xx + yy);

        let ey = m13.max(-1.0).min(1.0).asin();
        let (ex, ez) = if m13.abs() < 0.999_999_9 {
            ((-m23).atan2(m33), (-m12).atan2(m11))
        } else {
            // Gimbal lock: roll folds into yaw.
            (m32.atan2(m22), 0.0)
        };
        EulerDegrees {
            x: ex.to_degrees(),
            y: ey.to_degrees(),
            z: ez.to_degrees(),
        }
    }
}

impl Mul for Quat {
    type Output = Quat;

    /// Hamilton product: `a * b` composes rotation `b` first, then `a`.
    fn mul(self, rhs: Quat) -> Quat {
        Quat {
            s: self.s * rhs.s - self.v.dot(rhs.v),
            v: Vec3::new(
                self.s * rhs.v.x + rhs.s * self.v.x + self.v.y * rhs.v.z - self.v.z * rhs.v.y,
                self.s * rhs.v.y + rhs.s * self.v.y + self.v.z * rhs.v.x - self.v.x * rhs.v.z,
                self.s * rhs.v.z + rhs.s * self.v.z + self.v.x * rhs.v.y - self.v.y * rhs.v.x,
            ),
        }
    }
}

impl Default for Quat {
    fn default() -> Self {
        Quat::identity()
    }
}

impl From<cgmath::Quaternion<f64>> for Quat {
    fn from(q: cgmath::Quaternion<f64>) -> Self {
        Quat {
            s: q.s,
            v: q.v.into(),
        }
    }
}

impl From<Quat> for cgmath::Quaternion<f64> {
    fn from(q: Quat) -> Self {
        cgmath::Quaternion::from_sv(q.s, q.v.into())
    }
}

/// Euler angles in degrees, in the display layer's axis order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerDegrees {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
