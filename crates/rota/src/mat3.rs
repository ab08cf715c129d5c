use crate::error::{check_xyz, Result};
use crate::{Mat4, Scalar, Vec3};
use alloc::vec;
use alloc::vec::Vec;
use core::ops::Mul;

/// 3x3 matrix, column-major storage.
///
/// Fields are named `m{row}{col}` and declared column by column, so the
/// memory layout (and [`to_array`](Self::to_array)) is column-major. The
/// matrix holds data only: determinant, inverse and transpose are computed
/// on every call.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3<S> {
    pub m00: S,
    pub m10: S,
    pub m20: S,
    pub m01: S,
    pub m11: S,
    pub m21: S,
    pub m02: S,
    pub m12: S,
    pub m22: S,
}

impl<S: Scalar> Mat3<S> {
    pub const ZERO: Self = Self {
        m00: S::ZERO, m10: S::ZERO, m20: S::ZERO,
        m01: S::ZERO, m11: S::ZERO, m21: S::ZERO,
        m02: S::ZERO, m12: S::ZERO, m22: S::ZERO,
    };

    pub const ID: Self = Self {
        m00: S::ONE,  m10: S::ZERO, m20: S::ZERO,
        m01: S::ZERO, m11: S::ONE,  m21: S::ZERO,
        m02: S::ZERO, m12: S::ZERO, m22: S::ONE,
    };

    /// Construct from elements in row-major argument order.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub fn new(
        m00: S, m01: S, m02: S,
        m10: S, m11: S, m12: S,
        m20: S, m21: S, m22: S,
    ) -> Self {
        Self { m00, m10, m20, m01, m11, m21, m02, m12, m22 }
    }

    #[inline]
    pub fn from_cols(c0: Vec3<S>, c1: Vec3<S>, c2: Vec3<S>) -> Self {
        Self::new(
            c0.x, c1.x, c2.x,
            c0.y, c1.y, c2.y,
            c0.z, c1.z, c2.z,
        )
    }

    /// From nine values in column-major order.
    pub fn from_array(m: [S; 9]) -> Self {
        Self {
            m00: m[0], m10: m[1], m20: m[2],
            m01: m[3], m11: m[4], m21: m[5],
            m02: m[6], m12: m[7], m22: m[8],
        }
    }

    /// Column-major, matching the field declaration order.
    pub fn to_array(&self) -> [S; 9] {
        [
            self.m00, self.m10, self.m20,
            self.m01, self.m11, self.m21,
            self.m02, self.m12, self.m22,
        ]
    }

    /// `self * mat`
    #[inline]
    pub fn post_multiply(&self, mat: &Self) -> Self {
        Self::multiply(self, mat)
    }

    /// `mat * self`
    #[inline]
    pub fn pre_multiply(&self, mat: &Self) -> Self {
        Self::multiply(mat, self)
    }

    #[inline]
    pub fn transform(&self, v: Vec3<S>) -> Vec3<S> {
        Vec3::new(
            self.m00 * v.x + self.m01 * v.y + self.m02 * v.z,
            self.m10 * v.x + self.m11 * v.y + self.m12 * v.z,
            self.m20 * v.x + self.m21 * v.y + self.m22 * v.z,
        )
    }

    /// Transforms a flat xyz buffer into a freshly allocated one.
    pub fn transform_array(&self, xyz: &[S]) -> Result<Vec<S>> {
        let mut out = vec![S::ZERO; xyz.len()];
        self.transform_array_into(xyz, &mut out)?;
        Ok(out)
    }

    /// Transforms a flat xyz buffer into `out`. Elements of `out` past the
    /// input length are left untouched.
    pub fn transform_array_into(&self, xyz: &[S], out: &mut [S]) -> Result<()> {
        check_xyz(xyz.len(), out.len())?;
        for (src, dst) in xyz.chunks_exact(3).zip(out.chunks_exact_mut(3)) {
            let v = self.transform(Vec3::new(src[0], src[1], src[2]));
            dst.copy_from_slice(&v.to_array());
        }
        Ok(())
    }

    pub fn transpose(&self) -> Self {
        Self::new(
            self.m00, self.m10, self.m20,
            self.m01, self.m11, self.m21,
            self.m02, self.m12, self.m22,
        )
    }

    pub fn determinant(&self) -> S {
        self.m00 * self.m11 * self.m22
            + self.m01 * self.m12 * self.m20
            + self.m02 * self.m10 * self.m21
            - self.m00 * self.m12 * self.m21
            - self.m01 * self.m10 * self.m22
            - self.m02 * self.m11 * self.m20
    }

    /// Inverse via the adjugate. `None` only when the determinant is exactly
    /// zero; near-singular matrices still invert, with large entries.
    pub fn inverse(&self) -> Option<Self> {
        let d = self.determinant();
        if d == S::ZERO {
            return None;
        }
        let m = self;
        Some(Self {
            m00: (m.m11 * m.m22 - m.m21 * m.m12) / d,
            m10: (m.m20 * m.m12 - m.m10 * m.m22) / d,
            m20: (m.m10 * m.m21 - m.m20 * m.m11) / d,
            m01: (m.m21 * m.m02 - m.m01 * m.m22) / d,
            m11: (m.m00 * m.m22 - m.m20 * m.m02) / d,
            m21: (m.m20 * m.m01 - m.m00 * m.m21) / d,
            m02: (m.m01 * m.m12 - m.m11 * m.m02) / d,
            m12: (m.m10 * m.m02 - m.m00 * m.m12) / d,
            m22: (m.m00 * m.m11 - m.m10 * m.m01) / d,
        })
    }

    /// `a * b`
    pub fn multiply(a: &Self, b: &Self) -> Self {
        Self::new(
            a.m00 * b.m00 + a.m01 * b.m10 + a.m02 * b.m20,
            a.m00 * b.m01 + a.m01 * b.m11 + a.m02 * b.m21,
            a.m00 * b.m02 + a.m01 * b.m12 + a.m02 * b.m22,
            a.m10 * b.m00 + a.m11 * b.m10 + a.m12 * b.m20,
            a.m10 * b.m01 + a.m11 * b.m11 + a.m12 * b.m21,
            a.m10 * b.m02 + a.m11 * b.m12 + a.m12 * b.m22,
            a.m20 * b.m00 + a.m21 * b.m10 + a.m22 * b.m20,
            a.m20 * b.m01 + a.m21 * b.m11 + a.m22 * b.m21,
            a.m20 * b.m02 + a.m21 * b.m12 + a.m22 * b.m22,
        )
    }

    /// Product of all matrices, grouped from the right:
    /// `[a, b, c]` gives `a * (b * c)`. An empty slice gives [`Self::ID`].
    pub fn multiply_all(mats: &[Self]) -> Self {
        match mats.split_last() {
            None => Self::ID,
            Some((last, rest)) => rest.iter().rev().fold(*last, |acc, m| Self::multiply(m, &acc)),
        }
    }

    /// Rotation of `angle` degrees around `axis` (Rodrigues). The axis is
    /// normalized unless its length is exactly 0 or 1.
    pub fn rotate(angle: S, axis: Vec3<S>) -> Self {
        Self::rotate_xyz(angle, axis.x, axis.y, axis.z)
    }

    pub fn rotate_xyz(angle: S, x: S, y: S, z: S) -> Self {
        let (mut x, mut y, mut z) = (x, y, z);
        let l = crate::util::length3(x, y, z);
        if l != S::ZERO && l != S::ONE {
            x = x / l;
            y = y / l;
            z = z / l;
        }
        let (s, c) = angle.to_radians().sin_cos();
        let ic = S::ONE - c;
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (xs, ys, zs) = (x * s, y * s, z * s);
        Self::new(
            x * x * ic + c, xy * ic - zs,   xz * ic + ys,
            xy * ic + zs,   y * y * ic + c, yz * ic - xs,
            xz * ic - ys,   yz * ic + xs,   z * z * ic + c,
        )
    }

    /// Non-uniform scale matrix
    pub fn scale(sx: S, sy: S, sz: S) -> Self {
        Self::new(
            sx,      S::ZERO, S::ZERO,
            S::ZERO, sy,      S::ZERO,
            S::ZERO, S::ZERO, sz,
        )
    }

    pub fn from_scale(s: Vec3<S>) -> Self {
        Self::scale(s.x, s.y, s.z)
    }
}

impl<S: Scalar> Default for Mat3<S> {
    fn default() -> Self { Self::ID }
}

/// Upper-left 3x3 block.
impl<S: Scalar> From<Mat4<S>> for Mat3<S> {
    fn from(m: Mat4<S>) -> Self {
        Self::new(
            m.m00, m.m01, m.m02,
            m.m10, m.m11, m.m12,
            m.m20, m.m21, m.m22,
        )
    }
}

impl<S: Scalar> Mul for Mat3<S> {
    type Output = Self;
    #[inline] fn mul(self, rhs: Self) -> Self { Self::multiply(&self, &rhs) }
}

impl<S: Scalar> Mul<Vec3<S>> for Mat3<S> {
    type Output = Vec3<S>;
    #[inline] fn mul(self, rhs: Vec3<S>) -> Vec3<S> { self.transform(rhs) }
}

impl<S: Scalar> core::fmt::Display for Mat3<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        writeln!(f, "[{}, {}, {}]", self.m00, self.m01, self.m02)?;
        writeln!(f, "[{}, {}, {}]", self.m10, self.m11, self.m12)?;
        write!(f, "[{}, {}, {}]", self.m20, self.m21, self.m22)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Mat3<f64>, b: Mat3<f64>, tol: f64) -> bool {
        a.to_array().iter().zip(b.to_array()).all(|(x, y)| (x - y).abs() < tol)
    }

    #[test]
    fn row_major_args_column_major_storage() {
        let m = Mat3::new(
            1.0, 2.0, 3.0,
            4.0, 5.0, 6.0,
            7.0, 8.0, 9.0,
        );
        assert_eq!(m.m01, 2.0);
        assert_eq!(m.m10, 4.0);
        assert_eq!(m.to_array(), [1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0]);
        assert_eq!(Mat3::from_array(m.to_array()), m);
    }

    #[test]
    fn determinant_and_transpose() {
        let m = Mat3::new(
            2.0, 0.0, 1.0,
            1.0, 3.0, 2.0,
            1.0, 1.0, 2.0,
        );
        assert_eq!(m.determinant(), 6.0);
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose().determinant(), m.determinant());
    }

    #[test]
    fn integer_singular_matrix_has_no_inverse() {
        // third row is (first + second) / 3
        let m = Mat3::<f64>::new(
            2.0, 0.0, 1.0,
            1.0, 3.0, 2.0,
            1.0, 1.0, 1.0,
        );
        assert_eq!(m.determinant(), 0.0);
        assert_eq!(m.inverse(), None);
    }

    #[test]
    fn inverse_roundtrip() {
        let m = Mat3::rotate(30.0, Vec3::new(1.0, 2.0, 3.0)) * Mat3::scale(2.0, 3.0, 4.0);
        let inv = m.inverse().unwrap();
        assert!(approx(m * inv, Mat3::ID, 1e-12));
        assert!(approx(inv * m, Mat3::ID, 1e-12));
    }

    #[test]
    fn singular_is_none() {
        assert_eq!(Mat3::<f32>::ZERO.inverse(), None);
        assert_eq!(Mat3::<f32>::scale(1.0, 0.0, 1.0).inverse(), None);
    }

    #[test]
    fn near_singular_still_inverts() {
        // determinant 1e-9 is far below the 1e-6 vector tolerance, yet the
        // inverse is still produced
        let m = Mat3::<f64>::scale(1.0, 1.0, 1e-9);
        assert!(crate::util::is_zero(m.determinant()));
        let inv = m.inverse().unwrap();
        assert!((inv.m22 - 1e9).abs() < 1e-3);
    }

    #[test]
    fn rotate_y() {
        let m = Mat3::<f64>::rotate(90.0, Vec3::Y);
        let v = m.transform(Vec3::X);
        assert!(v.x.abs() < 1e-12);
        assert!(v.y.abs() < 1e-12);
        assert!((v.z + 1.0).abs() < 1e-12);
    }

    #[test]
    fn rotate_unnormalized_axis() {
        let a = Mat3::<f64>::rotate(40.0, Vec3::new(0.0, 0.0, 5.0));
        let b = Mat3::<f64>::rotate(40.0, Vec3::Z);
        assert!(approx(a, b, 1e-12));
    }

    #[test]
    fn multiply_all_right_associative() {
        let a = Mat3::<f64>::rotate(10.0, Vec3::X);
        let b = Mat3::<f64>::rotate(20.0, Vec3::Y);
        let c = Mat3::<f64>::scale(1.0, 2.0, 3.0);
        assert_eq!(Mat3::multiply_all(&[a, b, c]), Mat3::multiply(&a, &Mat3::multiply(&b, &c)));
        assert_eq!(Mat3::multiply_all(&[a]), a);
        assert_eq!(Mat3::<f64>::multiply_all(&[]), Mat3::ID);
        assert_eq!(a.post_multiply(&b), a * b);
        assert_eq!(a.pre_multiply(&b), b * a);
    }

    #[test]
    fn transform_array() {
        let m = Mat3::<f32>::scale(2.0, 3.0, 4.0);
        let out = m.transform_array(&[1.0, 1.0, 1.0, 0.5, 0.0, -1.0]).unwrap();
        assert_eq!(out, [2.0, 3.0, 4.0, 1.0, 0.0, -4.0]);
        assert!(m.transform_array(&[]).unwrap().is_empty());
        assert!(m.transform_array(&[1.0, 2.0]).is_err());
    }

    #[test]
    fn from_mat4_block() {
        let m4 = Mat4::<f32>::translate(5.0, 6.0, 7.0) * Mat4::scale(2.0, 3.0, 4.0);
        assert_eq!(Mat3::from(m4), Mat3::scale(2.0, 3.0, 4.0));
    }
}
