use crate::{util, Scalar, Vec4};
use alloc::vec::Vec;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// 3D vector. Equality is exact per component.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3<S> {
    pub x: S,
    pub y: S,
    pub z: S,
}

impl<S: Scalar> Vec3<S> {
    pub const ZERO: Self = Self { x: S::ZERO, y: S::ZERO, z: S::ZERO };
    pub const ONE: Self = Self { x: S::ONE, y: S::ONE, z: S::ONE };
    pub const X: Self = Self { x: S::ONE, y: S::ZERO, z: S::ZERO };
    pub const Y: Self = Self { x: S::ZERO, y: S::ONE, z: S::ZERO };
    pub const Z: Self = Self { x: S::ZERO, y: S::ZERO, z: S::ONE };
    pub const X_NEG: Self = Self { x: S::NEG_ONE, y: S::ZERO, z: S::ZERO };
    pub const Y_NEG: Self = Self { x: S::ZERO, y: S::NEG_ONE, z: S::ZERO };
    pub const Z_NEG: Self = Self { x: S::ZERO, y: S::ZERO, z: S::NEG_ONE };

    #[inline]
    pub fn new(x: S, y: S, z: S) -> Self { Self { x, y, z } }

    #[inline]
    pub fn splat(v: S) -> Self { Self::new(v, v, v) }

    #[inline]
    pub fn length(self) -> S {
        util::length3(self.x, self.y, self.z)
    }

    #[inline]
    pub fn distance(self, v: Self) -> S {
        (v - self).length()
    }

    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn add(self, v: Self) -> Self {
        Self::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }

    #[inline]
    pub fn subtract(self, v: Self) -> Self {
        Self::new(self.x - v.x, self.y - v.y, self.z - v.z)
    }

    #[inline]
    pub fn scale(self, s: S) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    #[inline]
    pub fn negate(self) -> Self {
        self.scale(S::NEG_ONE)
    }

    /// Returns `self` unchanged when the length is ~0 or exactly one.
    pub fn normalize(self) -> Self {
        let l = self.length();
        if util::is_zero(l) || l == S::ONE {
            return self;
        }
        Self::new(self.x / l, self.y / l, self.z / l)
    }

    #[inline]
    pub fn dot(self, v: Self) -> S {
        util::dot3(self.x, self.y, self.z, v.x, v.y, v.z)
    }

    #[inline]
    pub fn cross(self, v: Self) -> Self {
        Self::new(
            self.y * v.z - self.z * v.y,
            self.z * v.x - self.x * v.z,
            self.x * v.y - self.y * v.x,
        )
    }

    #[inline]
    pub fn extend(self, w: S) -> Vec4<S> {
        Vec4::new(self.x, self.y, self.z, w)
    }

    #[inline]
    pub fn to_array(self) -> [S; 3] {
        [self.x, self.y, self.z]
    }

    /// Concatenates the components of `vectors` into one flat xyz buffer.
    pub fn flatten(vectors: &[Self]) -> Vec<S> {
        let mut out = Vec::with_capacity(vectors.len() * 3);
        for v in vectors {
            out.extend_from_slice(&v.to_array());
        }
        out
    }
}

impl<S: Scalar> Default for Vec3<S> {
    fn default() -> Self { Self::ZERO }
}

impl<S: Scalar> From<[S; 3]> for Vec3<S> {
    fn from(a: [S; 3]) -> Self { Self::new(a[0], a[1], a[2]) }
}

impl<S: Scalar> From<Vec3<S>> for [S; 3] {
    fn from(v: Vec3<S>) -> Self { v.to_array() }
}

impl<S: Scalar> From<Vec4<S>> for Vec3<S> {
    fn from(v: Vec4<S>) -> Self { v.truncate() }
}

impl<S: Scalar> Add for Vec3<S> {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self { Vec3::add(self, rhs) }
}

impl<S: Scalar> Sub for Vec3<S> {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self { self.subtract(rhs) }
}

impl<S: Scalar> Neg for Vec3<S> {
    type Output = Self;
    #[inline] fn neg(self) -> Self { self.negate() }
}

impl<S: Scalar> Mul<S> for Vec3<S> {
    type Output = Self;
    #[inline] fn mul(self, rhs: S) -> Self { self.scale(rhs) }
}

impl<S: Scalar> Div<S> for Vec3<S> {
    type Output = Self;
    #[inline] fn div(self, rhs: S) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl<S: Scalar> AddAssign for Vec3<S> {
    #[inline] fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

impl<S: Scalar> SubAssign for Vec3<S> {
    #[inline] fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}

impl<S: Scalar> MulAssign<S> for Vec3<S> {
    #[inline] fn mul_assign(&mut self, rhs: S) { *self = *self * rhs; }
}

// Scalar * Vec3 (commutative)
impl Mul<Vec3<f64>> for f64 {
    type Output = Vec3<f64>;
    #[inline] fn mul(self, rhs: Vec3<f64>) -> Vec3<f64> { rhs * self }
}

impl Mul<Vec3<f32>> for f32 {
    type Output = Vec3<f32>;
    #[inline] fn mul(self, rhs: Vec3<f32>) -> Vec3<f32> { rhs * self }
}

impl<S: Scalar> core::fmt::Display for Vec3<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_product() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn cross_product() {
        let x = Vec3::new(1.0_f32, 0.0, 0.0);
        let y = Vec3::new(0.0_f32, 1.0, 0.0);
        let z = x.cross(y);
        assert_eq!(z, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(z, Vec3::Z);
        // Anti-commutative
        assert_eq!(y.cross(x), -z);
    }

    #[test]
    fn constants_compare_structurally() {
        assert_eq!(Vec3::<f32>::ZERO, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(Vec3::<f64>::Y_NEG, Vec3::Y.negate());
        assert_eq!(Vec3::<f32>::ONE, Vec3::splat(1.0));
    }

    #[test]
    fn normalize() {
        let v = Vec3::new(1.0, 2.0, 2.0);
        let n = v.normalize();
        assert!((n.length() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_degenerate_is_identity() {
        let tiny = Vec3::new(1e-7_f32, 0.0, 0.0);
        assert_eq!(tiny.normalize(), tiny);
        assert_eq!(Vec3::<f32>::ZERO.normalize(), Vec3::ZERO);
        // already unit: returned untouched
        assert_eq!(Vec3::<f32>::Z.normalize(), Vec3::Z);
        let n = Vec3::<f32>::ZERO.normalize();
        assert_eq!(n.dot(Vec3::X), 0.0);
        assert_eq!(n.cross(Vec3::X), Vec3::ZERO);
    }

    #[test]
    fn scalar_mul_commutative() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v * 2.0, 2.0 * v);
        assert_eq!(v.scale(2.0), v * 2.0);
    }

    #[test]
    fn distance() {
        let a = Vec3::new(1.0_f32, 2.0, 3.0);
        let b = Vec3::new(3.0, 5.0, 9.0);
        assert_eq!(a.distance(b), 7.0);
    }

    #[test]
    fn flatten_and_truncate() {
        let flat = Vec3::flatten(&[Vec3::new(1.0_f32, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)]);
        assert_eq!(flat, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let v: Vec3<f32> = Vec4::new(1.0, 2.0, 3.0, 4.0).into();
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    }
}
