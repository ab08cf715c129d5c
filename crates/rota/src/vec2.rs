use crate::{util, Scalar};
use alloc::vec::Vec;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// 2D vector. Every operation returns a new value.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<S> {
    pub x: S,
    pub y: S,
}

impl<S: Scalar> Vec2<S> {
    pub const ZERO: Self = Self { x: S::ZERO, y: S::ZERO };
    pub const ONE: Self = Self { x: S::ONE, y: S::ONE };
    pub const X: Self = Self { x: S::ONE, y: S::ZERO };
    pub const Y: Self = Self { x: S::ZERO, y: S::ONE };
    pub const X_NEG: Self = Self { x: S::NEG_ONE, y: S::ZERO };
    pub const Y_NEG: Self = Self { x: S::ZERO, y: S::NEG_ONE };

    #[inline]
    pub fn new(x: S, y: S) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn length(self) -> S {
        util::length2(self.x, self.y)
    }

    #[inline]
    pub fn distance(self, v: Self) -> S {
        (v - self).length()
    }

    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn add(self, v: Self) -> Self {
        Self::new(self.x + v.x, self.y + v.y)
    }

    #[inline]
    pub fn subtract(self, v: Self) -> Self {
        Self::new(self.x - v.x, self.y - v.y)
    }

    #[inline]
    pub fn scale(self, s: S) -> Self {
        Self::new(self.x * s, self.y * s)
    }

    #[inline]
    pub fn negate(self) -> Self {
        self.scale(S::NEG_ONE)
    }

    /// Unit vector in the same direction. Near-zero and already-unit vectors
    /// are returned unchanged.
    pub fn normalize(self) -> Self {
        let l = self.length();
        if util::is_zero(l) || l == S::ONE {
            return self;
        }
        Self::new(self.x / l, self.y / l)
    }

    #[inline]
    pub fn dot(self, v: Self) -> S {
        util::dot2(self.x, self.y, v.x, v.y)
    }

    #[inline]
    pub fn to_array(self) -> [S; 2] {
        [self.x, self.y]
    }

    /// Concatenates the components of `vectors` into one flat buffer.
    pub fn flatten(vectors: &[Self]) -> Vec<S> {
        vectors.iter().flat_map(|v| v.to_array()).collect()
    }
}

impl<S: Scalar> Default for Vec2<S> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<S: Scalar> From<[S; 2]> for Vec2<S> {
    fn from(a: [S; 2]) -> Self {
        Self::new(a[0], a[1])
    }
}

impl<S: Scalar> Add for Vec2<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Vec2::add(self, rhs)
    }
}

impl<S: Scalar> Sub for Vec2<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl<S: Scalar> Neg for Vec2<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.negate()
    }
}

impl<S: Scalar> Mul<S> for Vec2<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: S) -> Self {
        self.scale(rhs)
    }
}

impl<S: Scalar> Div<S> for Vec2<S> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: S) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl<S: Scalar> AddAssign for Vec2<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<S: Scalar> SubAssign for Vec2<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<S: Scalar> MulAssign<S> for Vec2<S> {
    #[inline]
    fn mul_assign(&mut self, rhs: S) {
        *self = *self * rhs;
    }
}

impl<S: Scalar> core::fmt::Display for Vec2<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_product() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a.dot(b), 11.0);
    }

    #[test]
    fn normalize() {
        let v = Vec2::new(3.0, 4.0);
        let n = v.normalize();
        assert!((n.length() - 1.0).abs() < 1e-10);
        assert_eq!(Vec2::<f32>::ZERO.normalize(), Vec2::ZERO);
    }

    #[test]
    fn distance_and_negate() {
        let a = Vec2::new(1.0_f32, 1.0);
        let b = Vec2::new(4.0, 5.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.negate(), Vec2::new(-1.0, -1.0));
        assert_eq!(Vec2::<f32>::X.negate(), Vec2::X_NEG);
    }

    #[test]
    fn flatten_row_major() {
        let flat = Vec2::flatten(&[Vec2::new(1.0_f32, 2.0), Vec2::new(3.0, 4.0)]);
        assert_eq!(flat, [1.0, 2.0, 3.0, 4.0]);
    }
}
