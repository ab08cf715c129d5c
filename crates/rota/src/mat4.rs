use crate::error::{check_xyz, MathError, Result};
use crate::{Mat3, Quat, Scalar, Vec3, Vec4};
use alloc::vec;
use alloc::vec::Vec;
use core::ops::Mul;

/// 4x4 matrix, column-major storage.
///
/// Used for homogeneous transforms and camera/projection matrices. Like
/// [`Mat3`], fields are `m{row}{col}` declared column by column.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4<S> {
    pub m00: S,
    pub m10: S,
    pub m20: S,
    pub m30: S,
    pub m01: S,
    pub m11: S,
    pub m21: S,
    pub m31: S,
    pub m02: S,
    pub m12: S,
    pub m22: S,
    pub m32: S,
    pub m03: S,
    pub m13: S,
    pub m23: S,
    pub m33: S,
}

impl<S: Scalar> Mat4<S> {
    #[rustfmt::skip]
    pub const ZERO: Self = Self {
        m00: S::ZERO, m10: S::ZERO, m20: S::ZERO, m30: S::ZERO,
        m01: S::ZERO, m11: S::ZERO, m21: S::ZERO, m31: S::ZERO,
        m02: S::ZERO, m12: S::ZERO, m22: S::ZERO, m32: S::ZERO,
        m03: S::ZERO, m13: S::ZERO, m23: S::ZERO, m33: S::ZERO,
    };

    #[rustfmt::skip]
    pub const ID: Self = Self {
        m00: S::ONE,  m10: S::ZERO, m20: S::ZERO, m30: S::ZERO,
        m01: S::ZERO, m11: S::ONE,  m21: S::ZERO, m31: S::ZERO,
        m02: S::ZERO, m12: S::ZERO, m22: S::ONE,  m32: S::ZERO,
        m03: S::ZERO, m13: S::ZERO, m23: S::ZERO, m33: S::ONE,
    };

    /// Construct from elements in row-major argument order.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub fn new(
        m00: S, m01: S, m02: S, m03: S,
        m10: S, m11: S, m12: S, m13: S,
        m20: S, m21: S, m22: S, m23: S,
        m30: S, m31: S, m32: S, m33: S,
    ) -> Self {
        Self {
            m00, m10, m20, m30,
            m01, m11, m21, m31,
            m02, m12, m22, m32,
            m03, m13, m23, m33,
        }
    }

    #[inline]
    pub fn from_cols(c0: Vec4<S>, c1: Vec4<S>, c2: Vec4<S>, c3: Vec4<S>) -> Self {
        Self::from_array([
            c0.x, c0.y, c0.z, c0.w,
            c1.x, c1.y, c1.z, c1.w,
            c2.x, c2.y, c2.z, c2.w,
            c3.x, c3.y, c3.z, c3.w,
        ])
    }

    /// From sixteen values in column-major order.
    pub fn from_array(m: [S; 16]) -> Self {
        Self {
            m00: m[0], m10: m[1], m20: m[2], m30: m[3],
            m01: m[4], m11: m[5], m21: m[6], m31: m[7],
            m02: m[8], m12: m[9], m22: m[10], m32: m[11],
            m03: m[12], m13: m[13], m23: m[14], m33: m[15],
        }
    }

    /// Column-major, ready for upload as a uniform.
    pub fn to_array(&self) -> [S; 16] {
        [
            self.m00, self.m10, self.m20, self.m30,
            self.m01, self.m11, self.m21, self.m31,
            self.m02, self.m12, self.m22, self.m32,
            self.m03, self.m13, self.m23, self.m33,
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

    /// `M * v`, no perspective divide.
    #[inline]
    pub fn transform_vec4(&self, v: Vec4<S>) -> Vec4<S> {
        Vec4::new(
            self.m00 * v.x + self.m01 * v.y + self.m02 * v.z + self.m03 * v.w,
            self.m10 * v.x + self.m11 * v.y + self.m12 * v.z + self.m13 * v.w,
            self.m20 * v.x + self.m21 * v.y + self.m22 * v.z + self.m23 * v.w,
            self.m30 * v.x + self.m31 * v.y + self.m32 * v.z + self.m33 * v.w,
        )
    }

    /// Transforms `(v, 1)` and divides by the resulting w.
    #[inline]
    pub fn transform(&self, v: Vec3<S>) -> Vec3<S> {
        let r = self.transform_vec4(Vec4::from_point(v));
        Vec3::new(r.x / r.w, r.y / r.w, r.z / r.w)
    }

    /// Transforms a flat xyz buffer (with perspective divide) into a new buffer.
    pub fn transform_array(&self, xyz: &[S]) -> Result<Vec<S>> {
        let mut out = vec![S::ZERO; xyz.len()];
        self.transform_array_into(xyz, &mut out)?;
        Ok(out)
    }

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
            self.m00, self.m10, self.m20, self.m30,
            self.m01, self.m11, self.m21, self.m31,
            self.m02, self.m12, self.m22, self.m32,
            self.m03, self.m13, self.m23, self.m33,
        )
    }

    /// Full Leibniz expansion (24 terms).
    #[rustfmt::skip]
    pub fn determinant(&self) -> S {
        let Self { m00, m10, m20, m30, m01, m11, m21, m31, m02, m12, m22, m32, m03, m13, m23, m33 } = *self;
        m30 * m21 * m12 * m03 - m20 * m31 * m12 * m03 - m30 * m11 * m22 * m03
            + m10 * m31 * m22 * m03 + m20 * m11 * m32 * m03 - m10 * m21 * m32 * m03
            - m30 * m21 * m02 * m13 + m20 * m31 * m02 * m13 + m30 * m01 * m22 * m13
            - m00 * m31 * m22 * m13 - m20 * m01 * m32 * m13 + m00 * m21 * m32 * m13
            + m30 * m11 * m02 * m23 - m10 * m31 * m02 * m23 - m30 * m01 * m12 * m23
            + m00 * m31 * m12 * m23 + m10 * m01 * m32 * m23 - m00 * m11 * m32 * m23
            - m20 * m11 * m02 * m33 + m10 * m21 * m02 * m33 + m20 * m01 * m12 * m33
            - m00 * m21 * m12 * m33 - m10 * m01 * m22 * m33 + m00 * m11 * m22 * m33
    }

    /// Inverse by cofactors. `None` only when the determinant is exactly zero.
    #[rustfmt::skip]
    pub fn inverse(&self) -> Option<Self> {
        let d = self.determinant();
        if d == S::ZERO {
            return None;
        }
        let Self { m00, m10, m20, m30, m01, m11, m21, m31, m02, m12, m22, m32, m03, m13, m23, m33 } = *self;
        Some(Self {
            m00: (m12 * m23 * m31 - m13 * m22 * m31 + m13 * m21 * m32 - m11 * m23 * m32 - m12 * m21 * m33 + m11 * m22 * m33) / d,
            m01: (m03 * m22 * m31 - m02 * m23 * m31 - m03 * m21 * m32 + m01 * m23 * m32 + m02 * m21 * m33 - m01 * m22 * m33) / d,
            m02: (m02 * m13 * m31 - m03 * m12 * m31 + m03 * m11 * m32 - m01 * m13 * m32 - m02 * m11 * m33 + m01 * m12 * m33) / d,
            m03: (m03 * m12 * m21 - m02 * m13 * m21 - m03 * m11 * m22 + m01 * m13 * m22 + m02 * m11 * m23 - m01 * m12 * m23) / d,
            m10: (m13 * m22 * m30 - m12 * m23 * m30 - m13 * m20 * m32 + m10 * m23 * m32 + m12 * m20 * m33 - m10 * m22 * m33) / d,
            m11: (m02 * m23 * m30 - m03 * m22 * m30 + m03 * m20 * m32 - m00 * m23 * m32 - m02 * m20 * m33 + m00 * m22 * m33) / d,
            m12: (m03 * m12 * m30 - m02 * m13 * m30 - m03 * m10 * m32 + m00 * m13 * m32 + m02 * m10 * m33 - m00 * m12 * m33) / d,
            m13: (m02 * m13 * m20 - m03 * m12 * m20 + m03 * m10 * m22 - m00 * m13 * m22 - m02 * m10 * m23 + m00 * m12 * m23) / d,
            m20: (m11 * m23 * m30 - m13 * m21 * m30 + m13 * m20 * m31 - m10 * m23 * m31 - m11 * m20 * m33 + m10 * m21 * m33) / d,
            m21: (m03 * m21 * m30 - m01 * m23 * m30 - m03 * m20 * m31 + m00 * m23 * m31 + m01 * m20 * m33 - m00 * m21 * m33) / d,
            m22: (m01 * m13 * m30 - m03 * m11 * m30 + m03 * m10 * m31 - m00 * m13 * m31 - m01 * m10 * m33 + m00 * m11 * m33) / d,
            m23: (m03 * m11 * m20 - m01 * m13 * m20 - m03 * m10 * m21 + m00 * m13 * m21 + m01 * m10 * m23 - m00 * m11 * m23) / d,
            m30: (m12 * m21 * m30 - m11 * m22 * m30 - m12 * m20 * m31 + m10 * m22 * m31 + m11 * m20 * m32 - m10 * m21 * m32) / d,
            m31: (m01 * m22 * m30 - m02 * m21 * m30 + m02 * m20 * m31 - m00 * m22 * m31 - m01 * m20 * m32 + m00 * m21 * m32) / d,
            m32: (m02 * m11 * m30 - m01 * m12 * m30 - m02 * m10 * m31 + m00 * m12 * m31 + m01 * m10 * m32 - m00 * m11 * m32) / d,
            m33: (m01 * m12 * m20 - m02 * m11 * m20 + m02 * m10 * m21 - m00 * m12 * m21 - m01 * m10 * m22 + m00 * m11 * m22) / d,
        })
    }

    /// `a * b`
    pub fn multiply(a: &Self, b: &Self) -> Self {
        let col = |x: S, y: S, z: S, w: S| a.transform_vec4(Vec4::new(x, y, z, w));
        Self::from_cols(
            col(b.m00, b.m10, b.m20, b.m30),
            col(b.m01, b.m11, b.m21, b.m31),
            col(b.m02, b.m12, b.m22, b.m32),
            col(b.m03, b.m13, b.m23, b.m33),
        )
    }

    /// Right-grouped product: `[a, b, c]` gives `a * (b * c)`; empty gives [`Self::ID`].
    pub fn multiply_all(mats: &[Self]) -> Self {
        match mats.split_last() {
            None => Self::ID,
            Some((last, rest)) => rest.iter().rev().fold(*last, |acc, m| Self::multiply(m, &acc)),
        }
    }

    /// Translation matrix
    pub fn translate(tx: S, ty: S, tz: S) -> Self {
        Self::new(
            S::ONE,  S::ZERO, S::ZERO, tx,
            S::ZERO, S::ONE,  S::ZERO, ty,
            S::ZERO, S::ZERO, S::ONE,  tz,
            S::ZERO, S::ZERO, S::ZERO, S::ONE,
        )
    }

    pub fn from_translation(t: Vec3<S>) -> Self {
        Self::translate(t.x, t.y, t.z)
    }

    /// Rotation of `angle` degrees around `axis`, see [`Mat3::rotate`].
    pub fn rotate(angle: S, axis: Vec3<S>) -> Self {
        Mat3::rotate(angle, axis).into()
    }

    pub fn rotate_xyz(angle: S, x: S, y: S, z: S) -> Self {
        Mat3::rotate_xyz(angle, x, y, z).into()
    }

    /// Non-uniform scale matrix
    pub fn scale(sx: S, sy: S, sz: S) -> Self {
        Self::new(
            sx,      S::ZERO, S::ZERO, S::ZERO,
            S::ZERO, sy,      S::ZERO, S::ZERO,
            S::ZERO, S::ZERO, sz,      S::ZERO,
            S::ZERO, S::ZERO, S::ZERO, S::ONE,
        )
    }

    pub fn from_scale(s: Vec3<S>) -> Self {
        Self::scale(s.x, s.y, s.z)
    }

    /// Right-handed view matrix for a camera at `position` looking at `target`.
    pub fn look_at(position: Vec3<S>, target: Vec3<S>, up: Vec3<S>) -> Self {
        let up = up.normalize();
        let f = (target - position).normalize();
        let s = f.cross(up).normalize();
        let u = s.cross(f);
        let t = position.negate();
        Self::new(
            s.x,  s.y,  s.z,  s.dot(t),
            u.x,  u.y,  u.z,  u.dot(t),
            -f.x, -f.y, -f.z, -f.dot(t),
            S::ZERO, S::ZERO, S::ZERO, S::ONE,
        )
    }

    /// Frustum projection. `far = S::INFINITY` selects the infinite far plane.
    pub fn perspective(left: S, right: S, bottom: S, top: S, near: S, far: S) -> Self {
        let (m22, m23) = depth_terms(near, far, far - near);
        Self::new(
            S::TWO * near / (right - left), S::ZERO, (right + left) / (right - left), S::ZERO,
            S::ZERO, S::TWO * near / (top - bottom), (top + bottom) / (top - bottom), S::ZERO,
            S::ZERO, S::ZERO, m22, m23,
            S::ZERO, S::ZERO, S::NEG_ONE, S::ZERO,
        )
    }

    /// Symmetric projection from a vertical field of view in degrees.
    ///
    /// Fails when `far == near`, the field of view has zero sine, or the
    /// aspect ratio is zero. `far = S::INFINITY` selects the infinite far plane.
    pub fn perspective_fov(fov: S, aspect: S, near: S, far: S) -> Result<Self> {
        let radians = (fov * S::HALF).to_radians();
        let (sine, cosine) = radians.sin_cos();
        let delta_z = far - near;
        if delta_z == S::ZERO || sine == S::ZERO || aspect == S::ZERO {
            tracing::warn!(
                fov = fov.to_f64(),
                aspect = aspect.to_f64(),
                near = near.to_f64(),
                far = far.to_f64(),
                "rejected perspective projection"
            );
            return Err(MathError::InvalidProjection {
                fov: fov.to_f64(),
                aspect: aspect.to_f64(),
                near: near.to_f64(),
                far: far.to_f64(),
            });
        }
        let cotangent = cosine / sine;
        let (m22, m23) = depth_terms(near, far, delta_z);
        Ok(Self::new(
            cotangent / aspect, S::ZERO, S::ZERO, S::ZERO,
            S::ZERO, cotangent, S::ZERO, S::ZERO,
            S::ZERO, S::ZERO, m22, m23,
            S::ZERO, S::ZERO, S::NEG_ONE, S::ZERO,
        ))
    }

    /// Orthographic projection mapping the box onto `[-1, 1]^3`.
    pub fn ortho(left: S, right: S, bottom: S, top: S, near: S, far: S) -> Self {
        let dx = right - left;
        let dy = top - bottom;
        let dz = far - near;
        Self::new(
            S::TWO / dx, S::ZERO, S::ZERO, -(right + left) / dx,
            S::ZERO, S::TWO / dy, S::ZERO, -(top + bottom) / dy,
            S::ZERO, S::ZERO, -S::TWO / dz, -(far + near) / dz,
            S::ZERO, S::ZERO, S::ZERO, S::ONE,
        )
    }
}

// (m22, m23) of a perspective matrix
fn depth_terms<S: Scalar>(near: S, far: S, delta_z: S) -> (S, S) {
    if far >= S::INFINITY {
        (S::NEG_ONE, -S::TWO * near)
    } else {
        (-(far + near) / delta_z, -S::TWO * far * near / delta_z)
    }
}

impl<S: Scalar> Default for Mat4<S> {
    fn default() -> Self { Self::ID }
}

/// Embeds the 3x3 block, last row and column from the identity.
impl<S: Scalar> From<Mat3<S>> for Mat4<S> {
    fn from(m: Mat3<S>) -> Self {
        Self::new(
            m.m00, m.m01, m.m02, S::ZERO,
            m.m10, m.m11, m.m12, S::ZERO,
            m.m20, m.m21, m.m22, S::ZERO,
            S::ZERO, S::ZERO, S::ZERO, S::ONE,
        )
    }
}

/// Rotation matrix of a (unit) quaternion.
impl<S: Scalar> From<Quat<S>> for Mat4<S> {
    fn from(q: Quat<S>) -> Self {
        let (xx, xy, xz, xw) = (q.x * q.x, q.x * q.y, q.x * q.z, q.x * q.w);
        let (yy, yz, yw) = (q.y * q.y, q.y * q.z, q.y * q.w);
        let (zz, zw) = (q.z * q.z, q.z * q.w);
        let two = S::TWO;
        Self::new(
            S::ONE - two * (yy + zz), two * (xy - zw), two * (xz + yw), S::ZERO,
            two * (xy + zw), S::ONE - two * (xx + zz), two * (yz - xw), S::ZERO,
            two * (xz - yw), two * (yz + xw), S::ONE - two * (xx + yy), S::ZERO,
            S::ZERO, S::ZERO, S::ZERO, S::ONE,
        )
    }
}

impl<S: Scalar> Mul for Mat4<S> {
    type Output = Self;
    #[inline] fn mul(self, rhs: Self) -> Self { Self::multiply(&self, &rhs) }
}

impl<S: Scalar> Mul<Vec4<S>> for Mat4<S> {
    type Output = Vec4<S>;
    #[inline] fn mul(self, rhs: Vec4<S>) -> Vec4<S> { self.transform_vec4(rhs) }
}

impl<S: Scalar> core::fmt::Display for Mat4<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        writeln!(f, "[{}, {}, {}, {}]", self.m00, self.m01, self.m02, self.m03)?;
        writeln!(f, "[{}, {}, {}, {}]", self.m10, self.m11, self.m12, self.m13)?;
        writeln!(f, "[{}, {}, {}, {}]", self.m20, self.m21, self.m22, self.m23)?;
        write!(f, "[{}, {}, {}, {}]", self.m30, self.m31, self.m32, self.m33)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_mat_eq(a: &Mat4<f64>, b: &Mat4<f64>, tol: f64) {
        for (i, (x, y)) in a.to_array().iter().zip(b.to_array()).enumerate() {
            assert!((x - y).abs() < tol, "mismatch at {}: {} vs {}", i, x, y);
        }
    }

    #[test]
    fn translation() {
        let m = Mat4::translate(10.0, 20.0, 30.0);
        assert_eq!(m.transform(Vec3::new(1.0, 2.0, 3.0)), Vec3::new(11.0, 22.0, 33.0));
        assert_eq!(&m.to_array()[12..15], &[10.0, 20.0, 30.0]);
    }

    #[test]
    fn rotate_y_quarter_turn() {
        let v = Mat4::<f32>::rotate(90.0, Vec3::Y).transform(Vec3::new(1.0, 0.0, 0.0));
        assert!(v.x.abs() < 1e-6);
        assert!(v.y.abs() < 1e-6);
        assert!((v.z + 1.0).abs() < 1e-6);
    }

    #[test]
    fn vec3_transform_divides_by_w() {
        let mut m = Mat4::<f64>::ID;
        m.m33 = 2.0;
        assert_eq!(m.transform(Vec3::new(2.0, 4.0, 6.0)), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m * Vec4::new(2.0, 4.0, 6.0, 1.0), Vec4::new(2.0, 4.0, 6.0, 2.0));
    }

    #[test]
    fn inverse_roundtrip() {
        let m = Mat4::multiply_all(&[
            Mat4::translate(1.0, 2.0, 3.0),
            Mat4::rotate(33.0, Vec3::new(1.0, 1.0, 0.0)),
            Mat4::scale(2.0, 0.5, 3.0),
        ]);
        let mi = m.inverse().unwrap();
        assert_mat_eq(&(m * mi), &Mat4::ID, 1e-10);
        assert!((m.determinant() - 3.0).abs() < 1e-10);
    }

    #[test]
    fn inverse_requires_exact_zero_determinant() {
        assert!(Mat4::<f32>::ZERO.inverse().is_none());
        assert!(Mat4::<f32>::scale(1.0, 1.0, 0.0).inverse().is_none());
        // tiny but nonzero determinant is accepted
        let m = Mat4::<f32>::scale(1e-4, 1e-4, 1.0);
        assert!(m.determinant() != 0.0);
        assert!(m.determinant() < f32::ROUNDING_ERROR);
        assert!(m.inverse().is_some());
    }

    #[test]
    fn compose() {
        let t = Mat4::translate(1.0, 0.0, 0.0);
        let r = Mat4::rotate(90.0, Vec3::Z);
        // Rotate then translate
        let p = (t * r).transform(Vec3::new(1.0, 0.0, 0.0));
        assert!((p.x - 1.0).abs() < 1e-10);
        assert!((p.y - 1.0).abs() < 1e-10);
        assert_eq!(t.post_multiply(&r), t * r);
        assert_eq!(t.pre_multiply(&r), r * t);
    }

    #[test]
    fn multiply_all_matches_nested() {
        let a = Mat4::<f64>::rotate(15.0, Vec3::X);
        let b = Mat4::translate(0.0, 1.0, 2.0);
        let c = Mat4::scale(2.0, 2.0, 2.0);
        let d = Mat4::rotate(-70.0, Vec3::Z);
        let nested = Mat4::multiply(&a, &Mat4::multiply(&b, &Mat4::multiply(&c, &d)));
        assert_eq!(Mat4::multiply_all(&[a, b, c, d]), nested);
    }

    #[test]
    fn perspective_infinite_far() {
        let m = Mat4::<f32>::perspective(-1.0, 1.0, -1.0, 1.0, 0.5, f32::INFINITY);
        assert_eq!(m.m22, -1.0);
        assert_eq!(m.m23, -1.0);
        assert_eq!(m.m32, -1.0);
        assert_eq!(m.m33, 0.0);

        let m = Mat4::<f32>::perspective_fov(60.0, 1.5, 0.1, f32::INFINITY).unwrap();
        assert_eq!(m.m22, -1.0);
        assert_eq!(m.m23, -0.2);
    }

    #[test]
    fn perspective_finite_far() {
        let (n, f) = (1.0_f64, 11.0);
        let m = Mat4::perspective(-2.0, 2.0, -1.0, 1.0, n, f);
        assert_eq!(m.m00, 0.5);
        assert_eq!(m.m11, 1.0);
        assert_eq!(m.m22, -1.2);
        assert_eq!(m.m23, -2.2);
        // near plane maps to z = -1, far plane to z = +1
        assert!((m.transform(Vec3::new(0.0, 0.0, -n)).z + 1.0).abs() < 1e-12);
        assert!((m.transform(Vec3::new(0.0, 0.0, -f)).z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn perspective_fov_rejects_degenerate() {
        assert!(Mat4::<f32>::perspective_fov(60.0, 1.0, 1.0, 1.0).is_err());
        assert!(Mat4::<f32>::perspective_fov(0.0, 1.0, 0.1, 10.0).is_err());
        assert_eq!(
            Mat4::<f32>::perspective_fov(60.0, 0.0, 0.1, 10.0),
            Err(MathError::InvalidProjection { fov: 60.0, aspect: 0.0, near: 0.1_f32 as f64, far: 10.0 })
        );
        let m = Mat4::<f64>::perspective_fov(90.0, 2.0, 1.0, 3.0).unwrap();
        assert!((m.m11 - 1.0).abs() < 1e-12);
        assert!((m.m00 - 0.5).abs() < 1e-12);
    }

    #[test]
    fn ortho_maps_box_to_cube() {
        let m = Mat4::<f64>::ortho(-2.0, 4.0, 0.0, 2.0, 1.0, 5.0);
        let lo = m.transform(Vec3::new(-2.0, 0.0, -1.0));
        let hi = m.transform(Vec3::new(4.0, 2.0, -5.0));
        assert!((lo - Vec3::new(-1.0, -1.0, -1.0)).length() < 1e-12);
        assert!((hi - Vec3::ONE).length() < 1e-12);
    }

    #[test]
    fn look_at_moves_eye_to_origin() {
        let eye = Vec3::new(0.0, 0.0, 5.0);
        let m = Mat4::<f64>::look_at(eye, Vec3::ZERO, Vec3::Y);
        assert_mat_eq(&m, &Mat4::translate(0.0, 0.0, -5.0), 1e-12);

        let m = Mat4::<f64>::look_at(Vec3::new(3.0, 2.0, 1.0), Vec3::new(-1.0, 0.5, 2.0), Vec3::Y);
        let p = m.transform(Vec3::new(3.0, 2.0, 1.0));
        assert!(p.length() < 1e-12);
        // target lies on the -z axis in view space
        let t = m.transform(Vec3::new(-1.0, 0.5, 2.0));
        assert!(t.x.abs() < 1e-12 && t.y.abs() < 1e-12 && t.z < 0.0);
    }

    #[test]
    fn from_mat3_and_quat() {
        let r3 = Mat3::<f64>::rotate(40.0, Vec3::new(0.0, 1.0, 1.0));
        let r4 = Mat4::from(r3);
        assert_eq!(r4, Mat4::rotate(40.0, Vec3::new(0.0, 1.0, 1.0)));
        assert_eq!(Mat3::from(r4), r3);

        let q = Quat::from_axis(Vec3::new(0.0, 1.0, 1.0), 40.0);
        assert_mat_eq(&Mat4::from(q), &r4, 1e-12);
    }

    #[test]
    fn transform_array_into_buffer() {
        let m = Mat4::<f32>::translate(1.0, 0.0, 0.0);
        let mut out = [9.0_f32; 7];
        m.transform_array_into(&[0.0, 0.0, 0.0, 1.0, 1.0, 1.0], &mut out).unwrap();
        assert_eq!(out, [1.0, 0.0, 0.0, 2.0, 1.0, 1.0, 9.0]);
        assert_eq!(
            m.transform_array_into(&[0.0; 6], &mut [0.0; 3]),
            Err(MathError::BufferTooSmall { needed: 6, got: 3 })
        );
    }
}
