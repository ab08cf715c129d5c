use crate::error::{MathError, Result};
use crate::{util, Mat4, Scalar, Vec3, Vec4};
use core::ops::Mul;

/// Quaternion `xi + yj + zk + w`.
///
/// Represents a rotation when unit-length. The type does not enforce unit
/// norm: the Euler-angle and axis-angle extractors expect a normalized
/// quaternion and only guard the `w > 1` case. Angles in and out are degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat<S> {
    pub x: S,
    pub y: S,
    pub z: S,
    pub w: S,
}

impl<S: Scalar> Quat<S> {
    pub const ID: Self = Self { x: S::ZERO, y: S::ZERO, z: S::ZERO, w: S::ONE };

    #[inline]
    pub fn new(x: S, y: S, z: S, w: S) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub fn from_vec(v: Vec3<S>, w: S) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Euler angles in degrees: pitch, yaw, roll.
    pub fn from_euler_angles(x_rot: S, y_rot: S, z_rot: S) -> Self {
        let (shx, chx) = (x_rot * S::HALF).to_radians().sin_cos();
        let (shy, chy) = (y_rot * S::HALF).to_radians().sin_cos();
        let (shz, chz) = (z_rot * S::HALF).to_radians().sin_cos();
        Self::new(
            chy * shx * chz + shy * chx * shz,
            shy * chx * chz - chy * shx * shz,
            chy * chx * shz - shy * shx * chz,
            chy * chx * chz + shy * shx * shz,
        )
    }

    /// Rotation of `angle` degrees around `axis`. A zero axis gives [`Self::ID`].
    pub fn from_axis(axis: Vec3<S>, angle: S) -> Self {
        let d = axis.length();
        if d == S::ZERO {
            return Self::ID;
        }
        let (sin, cos) = (angle * S::HALF).to_radians().sin_cos();
        Self::from_vec(axis * (sin / d), cos).normalize()
    }

    /// Rotation whose matrix has the orthonormal `vx`, `vy`, `vz` as rows.
    pub fn from_axes(vx: Vec3<S>, vy: Vec3<S>, vz: Vec3<S>) -> Self {
        // Branch on the largest of trace / diagonal so the divisor stays large.
        let t = vx.x + vy.y + vz.z;
        let half = S::HALF;
        if t >= S::ZERO {
            let s = (t + S::ONE).sqrt();
            let w = half * s;
            let s = half / s;
            Self::new((vz.y - vy.z) * s, (vx.z - vz.x) * s, (vy.x - vx.y) * s, w)
        } else if vx.x > vy.y && vx.x > vz.z {
            let s = (S::ONE + vx.x - vy.y - vz.z).sqrt();
            let x = half * s;
            let s = half / s;
            Self::new(x, (vy.x + vx.y) * s, (vx.z + vz.x) * s, (vz.y - vy.z) * s)
        } else if vy.y > vz.z {
            let s = (S::ONE + vy.y - vx.x - vz.z).sqrt();
            let y = half * s;
            let s = half / s;
            Self::new((vy.x + vx.y) * s, y, (vz.y + vy.z) * s, (vx.z - vz.x) * s)
        } else {
            let s = (S::ONE + vz.z - vx.x - vy.y).sqrt();
            let z = half * s;
            let s = half / s;
            Self::new((vx.z + vz.x) * s, (vz.y + vy.z) * s, z, (vy.x - vx.y) * s)
        }
    }

    pub fn from_axes_normalized(vx: Vec3<S>, vy: Vec3<S>, vz: Vec3<S>) -> Self {
        Self::from_axes(vx.normalize(), vy.normalize(), vz.normalize())
    }

    /// Rotation taking direction `v1` onto `v2`. Both should be unit length.
    pub fn from_cross(v1: Vec3<S>, v2: Vec3<S>) -> Self {
        let dot = util::clamp(v1.dot(v2), S::NEG_ONE, S::ONE);
        Self::from_axis(v1.cross(v2), dot.acos().to_degrees())
    }

    /// Rotation part of a matrix that contains no scaling.
    pub fn from_matrix(m: &Mat4<S>) -> Self {
        let (vx, vy, vz) = rows(m);
        Self::from_axes(vx, vy, vz)
    }

    pub fn from_matrix_normalized(m: &Mat4<S>) -> Self {
        let (vx, vy, vz) = rows(m);
        Self::from_axes_normalized(vx, vy, vz)
    }

    pub fn is_identity(&self) -> bool {
        util::is_zero(self.x)
            && util::is_zero(self.y)
            && util::is_zero(self.z)
            && util::is_equal(self.w, S::ONE)
    }

    pub fn is_identity_within(&self, tolerance: S) -> bool {
        util::is_zero_within(self.x, tolerance)
            && util::is_zero_within(self.y, tolerance)
            && util::is_zero_within(self.z, tolerance)
            && util::is_equal_within(self.w, S::ONE, tolerance)
    }

    /// Unit quaternion; near-zero and already-unit inputs are returned as is.
    pub fn normalize(&self) -> Self {
        let l = self.length();
        if util::is_zero(l) || l == S::ONE {
            return *self;
        }
        Self::new(self.x / l, self.y / l, self.z / l, self.w / l)
    }

    #[inline]
    pub fn length(&self) -> S {
        util::length4(self.x, self.y, self.z, self.w)
    }

    #[inline]
    pub fn dot(&self, q: &Self) -> S {
        util::dot4(self.x, self.y, self.z, self.w, q.x, q.y, q.z, q.w)
    }

    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn add(&self, q: &Self) -> Self {
        Self::new(self.x + q.x, self.y + q.y, self.z + q.z, self.w + q.w)
    }

    /// Hamilton product `self * q`.
    pub fn post_multiply(&self, q: &Self) -> Self {
        Self::new(
            self.w * q.x + self.x * q.w + self.y * q.z - self.z * q.y,
            self.w * q.y + self.y * q.w + self.z * q.x - self.x * q.z,
            self.w * q.z + self.z * q.w + self.x * q.y - self.y * q.x,
            self.w * q.w - self.x * q.x - self.y * q.y - self.z * q.z,
        )
    }

    #[inline]
    pub fn pre_multiply(&self, q: &Self) -> Self {
        q.post_multiply(self)
    }

    /// Falls back to a linear blend when `1 - dot <= 0.1`. Not renormalized.
    pub fn slerp(&self, end: &Self, alpha: S) -> Self {
        let dot = self.dot(end);
        let mut scale0 = S::ONE - alpha;
        let mut scale1 = alpha;
        if S::ONE - dot > S::from_f64(0.1) {
            let angle = dot.acos();
            let inv_sin = angle.sin().recip();
            scale0 = ((S::ONE - alpha) * angle).sin() * inv_sin;
            scale1 = (alpha * angle).sin() * inv_sin;
        }
        Self::new(
            scale0 * self.x + scale1 * end.x,
            scale0 * self.y + scale1 * end.y,
            scale0 * self.z + scale1 * end.z,
            scale0 * self.w + scale1 * end.w,
        )
    }

    /// Blends `qs` with equal weights `1/n`:
    /// `(..((q1^w * q2)^w * q3)^w ..)`, normalized. `None` for an empty slice.
    pub fn slerp_many(qs: &[Self]) -> Option<Self> {
        let (first, rest) = qs.split_first()?;
        let w = S::from_f64(qs.len() as f64).recip();
        let blended = rest.iter().fold(first.exp(w), |acc, q| acc.post_multiply(q).exp(w));
        Some(blended.normalize())
    }

    pub fn slerp_weighted(qs: &[Self], weights: &[S]) -> Result<Self> {
        if qs.len() != weights.len() {
            return Err(MathError::LengthMismatch { left: qs.len(), right: weights.len() });
        }
        let mut pairs = qs.iter().zip(weights);
        let (first, w0) = pairs.next().ok_or(MathError::Empty)?;
        let blended = pairs.fold(first.exp(*w0), |acc, (q, w)| acc.post_multiply(q).exp(*w));
        Ok(blended.normalize())
    }

    /// `self^alpha` for real `alpha`, normalized.
    pub fn exp(&self, alpha: S) -> Self {
        let norm = self.length();
        let norm_exp = norm.powf(alpha);
        // clamp keeps acos finite when rounding pushes |w| just past the norm
        let theta = util::clamp(self.w / norm, S::NEG_ONE, S::ONE).acos();
        let coeff = if theta.abs() < S::from_f64(0.001) {
            norm_exp * alpha / norm
        } else {
            norm_exp * (alpha * theta).sin() / (norm * theta.sin())
        };
        Self::new(self.x * coeff, self.y * coeff, self.z * coeff, norm_exp * (alpha * theta).cos())
            .normalize()
    }

    /// Pitch in degrees, in `[-90, 90]`. Expects a unit quaternion.
    pub fn x_rotation(&self) -> S {
        let pole = self.gimbal_pole();
        let rad = if pole == 0 {
            util::clamp(S::TWO * (self.w * self.x - self.z * self.y), S::NEG_ONE, S::ONE).asin()
        } else {
            pole_sign::<S>(pole) * S::PI * S::HALF
        };
        rad.to_degrees()
    }

    pub fn y_rotation(&self) -> S {
        if self.gimbal_pole() != 0 {
            return S::ZERO;
        }
        let num = S::TWO * (self.y * self.w + self.x * self.z);
        let den = S::ONE - S::TWO * (self.y * self.y + self.x * self.x);
        num.atan2(den).to_degrees()
    }

    pub fn z_rotation(&self) -> S {
        let pole = self.gimbal_pole();
        let rad = if pole == 0 {
            let num = S::TWO * (self.w * self.z + self.y * self.x);
            let den = S::ONE - S::TWO * (self.x * self.x + self.z * self.z);
            num.atan2(den)
        } else {
            pole_sign::<S>(pole) * S::TWO * self.y.atan2(self.w)
        };
        rad.to_degrees()
    }

    /// +1 at the north pole, -1 at the south pole, 0 away from gimbal lock.
    pub fn gimbal_pole(&self) -> i32 {
        let t = self.y * self.x + self.z * self.w;
        let limit = S::from_f64(0.499);
        if t > limit {
            1
        } else if t < -limit {
            -1
        } else {
            0
        }
    }

    /// Rotation angle in degrees. Does not normalize, except when `w > 1`.
    pub fn angle(&self) -> S {
        let w = if self.w > S::ONE { self.w / self.length() } else { self.w };
        (S::TWO * w.acos()).to_degrees()
    }

    /// Axis in xyz and angle in degrees in w.
    pub fn axis_angle(&self) -> Vec4<S> {
        let q = if self.w > S::ONE { *self } else { self.normalize() };
        let angle = (S::TWO * self.w.acos()).to_degrees();
        let s = (S::ONE - q.w * q.w).sqrt();
        if s < S::ROUNDING_ERROR {
            Vec4::new(q.x, q.y, q.z, angle)
        } else {
            Vec4::new(q.x / s, q.y / s, q.z / s, angle)
        }
    }

    pub fn angle_around(&self, axis: Vec3<S>) -> S {
        let d = self.xyz().dot(axis);
        let l = util::length4(axis.x * d, axis.y * d, axis.z * d, self.w);
        if util::is_zero(l) {
            return S::ZERO;
        }
        (S::TWO * (self.w / l).acos()).to_degrees()
    }

    /// Splits into `(swing, twist)` with `self = swing * twist`, where
    /// `twist` rotates around the unit `axis`.
    pub fn swing_twist(&self, axis: Vec3<S>) -> (Self, Self) {
        let d = self.xyz().dot(axis);
        let twist = Self::from_vec(axis * d, self.w).normalize();
        let swing = twist.conjugate().pre_multiply(self);
        (swing, twist)
    }

    pub fn transform(&self, v: Vec3<S>) -> Vec3<S> {
        self.conjugate()
            .pre_multiply(&Self::from_vec(v, S::ZERO))
            .pre_multiply(self)
            .xyz()
    }

    #[inline]
    pub fn xyz(&self) -> Vec3<S> {
        Vec3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn to_array(&self) -> [S; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

fn rows<S: Scalar>(m: &Mat4<S>) -> (Vec3<S>, Vec3<S>, Vec3<S>) {
    (
        Vec3::new(m.m00, m.m01, m.m02),
        Vec3::new(m.m10, m.m11, m.m12),
        Vec3::new(m.m20, m.m21, m.m22),
    )
}

fn pole_sign<S: Scalar>(pole: i32) -> S {
    if pole > 0 { S::ONE } else { S::NEG_ONE }
}

impl<S: Scalar> Default for Quat<S> {
    fn default() -> Self { Self::ID }
}

impl<S: Scalar> From<Mat4<S>> for Quat<S> {
    fn from(m: Mat4<S>) -> Self { Self::from_matrix(&m) }
}

impl<S: Scalar> Mul for Quat<S> {
    type Output = Self;
    #[inline] fn mul(self, rhs: Self) -> Self { self.post_multiply(&rhs) }
}

impl<S: Scalar> Mul<Vec3<S>> for Quat<S> {
    type Output = Vec3<S>;
    #[inline] fn mul(self, rhs: Vec3<S>) -> Vec3<S> { self.transform(rhs) }
}

impl<S: Scalar> core::fmt::Display for Quat<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Q[{}, {}, {}, {}]", self.x, self.y, self.z, self.w)
    }
}
