use crate::{util, Scalar, Vec3};
use alloc::vec::Vec;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// 4D vector (homogeneous coordinates, or axis + angle for
/// [`Quat::axis_angle`](crate::Quat::axis_angle)).
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec4<S> {
    pub x: S,
    pub y: S,
    pub z: S,
    pub w: S,
}

impl<S: Scalar> Vec4<S> {
    pub const ZERO: Self = Self { x: S::ZERO, y: S::ZERO, z: S::ZERO, w: S::ZERO };
    pub const ONE: Self = Self { x: S::ONE, y: S::ONE, z: S::ONE, w: S::ONE };
    pub const X: Self = Self { x: S::ONE, y: S::ZERO, z: S::ZERO, w: S::ZERO };
    pub const Y: Self = Self { x: S::ZERO, y: S::ONE, z: S::ZERO, w: S::ZERO };
    pub const Z: Self = Self { x: S::ZERO, y: S::ZERO, z: S::ONE, w: S::ZERO };
    pub const W: Self = Self { x: S::ZERO, y: S::ZERO, z: S::ZERO, w: S::ONE };
    pub const X_NEG: Self = Self { x: S::NEG_ONE, y: S::ZERO, z: S::ZERO, w: S::ZERO };
    pub const Y_NEG: Self = Self { x: S::ZERO, y: S::NEG_ONE, z: S::ZERO, w: S::ZERO };
    pub const Z_NEG: Self = Self { x: S::ZERO, y: S::ZERO, z: S::NEG_ONE, w: S::ZERO };
    pub const W_NEG: Self = Self { x: S::ZERO, y: S::ZERO, z: S::ZERO, w: S::NEG_ONE };

    #[inline]
    pub fn new(x: S, y: S, z: S, w: S) -> Self { Self { x, y, z, w } }

    /// Homogeneous point: `(v.x, v.y, v.z, 1)`.
    #[inline]
    pub fn from_point(v: Vec3<S>) -> Self { v.extend(S::ONE) }

    #[inline]
    pub fn length(self) -> S {
        util::length4(self.x, self.y, self.z, self.w)
    }

    #[inline]
    pub fn distance(self, v: Self) -> S {
        (v - self).length()
    }

    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn add(self, v: Self) -> Self {
        Self::new(self.x + v.x, self.y + v.y, self.z + v.z, self.w + v.w)
    }

    #[inline]
    pub fn subtract(self, v: Self) -> Self {
        Self::new(self.x - v.x, self.y - v.y, self.z - v.z, self.w - v.w)
    }

    #[inline]
    pub fn scale(self, s: S) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }

    #[inline]
    pub fn negate(self) -> Self { self.scale(S::NEG_ONE) }

    /// Same degenerate-input policy as [`Vec3::normalize`].
    pub fn normalize(self) -> Self {
        let l = self.length();
        if util::is_zero(l) || l == S::ONE {
            return self;
        }
        Self::new(self.x / l, self.y / l, self.z / l, self.w / l)
    }

    #[inline]
    pub fn dot(self, v: Self) -> S {
        util::dot4(self.x, self.y, self.z, self.w, v.x, v.y, v.z, v.w)
    }

    /// Truncate to Vec3 (drop w)
    #[inline]
    pub fn truncate(self) -> Vec3<S> {
        Vec3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn to_array(self) -> [S; 4] {
        [self.x, self.y, self.z, self.w]
    }

    pub fn flatten(vectors: &[Self]) -> Vec<S> {
        vectors.iter().flat_map(|v| v.to_array()).collect()
    }
}

impl<S: Scalar> Default for Vec4<S> {
    fn default() -> Self { Self::ZERO }
}

impl<S: Scalar> From<[S; 4]> for Vec4<S> {
    fn from(a: [S; 4]) -> Self { Self::new(a[0], a[1], a[2], a[3]) }
}

impl<S: Scalar> Add for Vec4<S> {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self { Vec4::add(self, rhs) }
}

impl<S: Scalar> Sub for Vec4<S> {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self { self.subtract(rhs) }
}

impl<S: Scalar> Neg for Vec4<S> {
    type Output = Self;
    #[inline] fn neg(self) -> Self { self.negate() }
}

impl<S: Scalar> Mul<S> for Vec4<S> {
    type Output = Self;
    #[inline] fn mul(self, rhs: S) -> Self { self.scale(rhs) }
}

impl<S: Scalar> Div<S> for Vec4<S> {
    type Output = Self;
    #[inline] fn div(self, rhs: S) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}

impl<S: Scalar> AddAssign for Vec4<S> {
    #[inline] fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

impl<S: Scalar> SubAssign for Vec4<S> {
    #[inline] fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}

impl<S: Scalar> MulAssign<S> for Vec4<S> {
    #[inline] fn mul_assign(&mut self, rhs: S) { *self = *self * rhs; }
}

impl<S: Scalar> core::fmt::Display for Vec4<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.x, self.y, self.z, self.w)
    }
}
