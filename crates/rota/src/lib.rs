//! rota: geometry kernel for real-time graphics and rigid-body simulation
//!
//! Value types for vectors, column-major matrices and quaternions, plus a
//! cached TRS model transform. Everything is generic over `Scalar` (f32 or
//! f64); the f32 instantiation matches what a GPU uniform expects.
//!
//! # Conventions
//! - Angles passed to builders and returned by extractors are degrees
//! - Matrices are column-major in memory; `new` takes row-major arguments
//! - `transform` on a 3-vector through a `Mat4` divides by w
//! - Approximate comparisons use an absolute tolerance of 1e-6 (see [`util`])
//! - `#[repr(C)]` value types for GPU upload (`bytemuck` feature)

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod error;
mod mat3;
mod mat4;
mod quat;
mod scalar;
mod transform;
pub mod util;
mod vec2;
mod vec3;
mod vec4;

pub use error::{MathError, Result};
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use quat::Quat;
pub use scalar::Scalar;
pub use transform::Transform;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

// Bytemuck impls for concrete f32/f64 types (generic structs can't derive Pod)
#[cfg(feature = "bytemuck")]
mod bytemuck_impls {
    use super::*;

    macro_rules! impl_pod {
        ($($t:ident),*) => {
            $(
                // SAFETY: All fields are the same float type, #[repr(C)], no padding
                unsafe impl bytemuck::Zeroable for $t<f32> {}
                unsafe impl bytemuck::Pod for $t<f32> {}
                unsafe impl bytemuck::Zeroable for $t<f64> {}
                unsafe impl bytemuck::Pod for $t<f64> {}
            )*
        };
    }

    impl_pod!(Vec2, Vec3, Vec4, Mat3, Mat4, Quat);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_are_plain_values() {
        assert_eq!(Vec3::<f32>::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Mat4::<f64>::ID * Mat4::ID, Mat4::ID);
        assert_eq!(Mat3::<f32>::default(), Mat3::ID);
        assert_eq!(Quat::<f64>::default(), Quat::ID);
    }

    #[test]
    fn to_array_follows_field_order() {
        let m = Mat4::<f32>::translate(1.0, 2.0, 3.0);
        let a = m.to_array();
        assert_eq!(&a[12..15], &[1.0, 2.0, 3.0]);
        assert_eq!(Mat4::from_array(a), m);
        assert_eq!(Quat::new(1.0_f32, 2.0, 3.0, 4.0).to_array(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[cfg(feature = "bytemuck")]
    #[test]
    fn pod_cast_matches_to_array() {
        let m = Mat4::<f32>::rotate(30.0, Vec3::Z);
        let bytes: &[f32] = bytemuck::cast_slice(core::slice::from_ref(&m));
        assert_eq!(bytes, &m.to_array()[..]);
    }
}
