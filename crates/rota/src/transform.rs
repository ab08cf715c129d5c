use crate::error::{MathError, Result};
use crate::{Mat3, Mat4, Scalar, Vec3};
use alloc::vec::Vec;
use core::cell::Cell;

/// Model transform composed from origin, translation, rotation and scale.
///
/// ```text
/// vertex = T(translation) * Rx * Ry * Rz * S(scale) * T(-origin)
/// normal = (Rx * Ry * Rz * S(scale))^-1 transposed
/// ```
///
/// Rotation is a vector of Euler angles in degrees, applied as separate
/// X, Y, Z axis rotations in that order. Both matrices are cached and
/// rebuilt on the first read after a setter touched one of their inputs.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform<S: Scalar> {
    origin: Vec3<S>,
    translation: Vec3<S>,
    rotation: Vec3<S>,
    scale: Vec3<S>,
    #[cfg_attr(feature = "serde", serde(skip))]
    vertex: Cell<Option<Mat4<S>>>,
    #[cfg_attr(feature = "serde", serde(skip))]
    normal: Cell<Option<Mat3<S>>>,
}

impl<S: Scalar> Transform<S> {
    pub fn new() -> Self {
        Self {
            origin: Vec3::ZERO,
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            vertex: Cell::new(None),
            normal: Cell::new(None),
        }
    }

    #[inline]
    pub fn origin(&self) -> Vec3<S> {
        self.origin
    }

    /// Pivot for rotation and scale.
    pub fn set_origin(&mut self, origin: Vec3<S>) {
        self.origin = origin;
        self.vertex.set(None);
    }

    #[inline]
    pub fn translation(&self) -> Vec3<S> {
        self.translation
    }

    pub fn set_translation(&mut self, translation: Vec3<S>) {
        self.translation = translation;
        self.vertex.set(None);
    }

    /// Euler angles in degrees.
    #[inline]
    pub fn rotation(&self) -> Vec3<S> {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Vec3<S>) {
        self.rotation = rotation;
        self.invalidate();
    }

    #[inline]
    pub fn scale(&self) -> Vec3<S> {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Vec3<S>) {
        self.scale = scale;
        self.invalidate();
    }

    fn invalidate(&self) {
        self.vertex.set(None);
        self.normal.set(None);
    }

    pub fn vertex_transform(&self) -> Mat4<S> {
        if let Some(m) = self.vertex.get() {
            return m;
        }
        tracing::trace!("rebuilding vertex transform");
        let r = self.rotation;
        let m = Mat4::multiply_all(&[
            Mat4::from_translation(self.translation),
            Mat4::rotate(r.x, Vec3::X),
            Mat4::rotate(r.y, Vec3::Y),
            Mat4::rotate(r.z, Vec3::Z),
            Mat4::from_scale(self.scale),
            Mat4::from_translation(self.origin.negate()),
        ]);
        self.vertex.set(Some(m));
        m
    }

    /// Inverse transpose of the rotation-scale block, `None` if that block is
    /// singular (a zero scale component).
    pub fn normal_transform(&self) -> Option<Mat3<S>> {
        if let Some(m) = self.normal.get() {
            return Some(m);
        }
        tracing::trace!("rebuilding normal transform");
        let r = self.rotation;
        let rs = Mat3::multiply_all(&[
            Mat3::rotate(r.x, Vec3::X),
            Mat3::rotate(r.y, Vec3::Y),
            Mat3::rotate(r.z, Vec3::Z),
            Mat3::from_scale(self.scale),
        ]);
        let Some(inv) = rs.inverse() else {
            tracing::debug!(scale = %self.scale, "normal transform is singular");
            return None;
        };
        let m = inv.transpose();
        self.normal.set(Some(m));
        Some(m)
    }

    /// Applies the vertex transform to a flat xyz buffer.
    pub fn transform_vertices(&self, xyz: &[S]) -> Result<Vec<S>> {
        self.vertex_transform().transform_array(xyz)
    }

    /// Applies the normal transform to a flat xyz buffer. Results are not
    /// renormalized.
    pub fn transform_normals(&self, xyz: &[S]) -> Result<Vec<S>> {
        self.normal_transform()
            .ok_or(MathError::SingularMatrix)?
            .transform_array(xyz)
    }
}

impl<S: Scalar> Default for Transform<S> {
    fn default() -> Self { Self::new() }
}

impl<S: Scalar> core::fmt::Display for Transform<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.vertex_transform(), f)
    }
}
