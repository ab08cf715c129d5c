use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Trait for the floating point types the kernel is generic over.
///
/// Implemented for f32 and f64. The f32 instantiation is the one meant for
/// GPU upload; f64 is used where simulation state is decoded.
pub trait Scalar:
    Copy
    + Clone
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Default
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const NEG_ONE: Self;
    const TWO: Self;
    const HALF: Self;
    const PI: Self;
    const EPSILON: Self;
    const INFINITY: Self;
    /// Absolute tolerance used by `is_zero`/`is_equal` and vector normalization.
    const ROUNDING_ERROR: Self;
    const DEG_TO_RAD: Self;
    const RAD_TO_DEG: Self;

    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    fn sin_cos(self) -> (Self, Self);
    fn powf(self, p: Self) -> Self;
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn recip(self) -> Self;

    fn from_f64(v: f64) -> Self;
    fn to_f64(self) -> f64;

    #[inline]
    fn to_radians(self) -> Self {
        self * Self::DEG_TO_RAD
    }

    #[inline]
    fn to_degrees(self) -> Self {
        self * Self::RAD_TO_DEG
    }
}

// In std mode, use inherent float methods. In no_std, use libm.
#[cfg(feature = "std")]
mod float_ops {
    macro_rules! inherent {
        ($($name:ident => $method:ident),* $(,)?) => {
            $(
                ::paste::paste! {
                    #[inline(always)]
                    pub fn [<$name _f32>](x: f32) -> f32 { x.$method() }
                    #[inline(always)]
                    pub fn [<$name _f64>](x: f64) -> f64 { x.$method() }
                }
            )*
        };
    }

    inherent!(sqrt => sqrt, abs => abs, sin => sin, cos => cos, asin => asin, acos => acos);

    #[inline(always)]
    pub fn atan2_f32(y: f32, x: f32) -> f32 {
        y.atan2(x)
    }
    #[inline(always)]
    pub fn atan2_f64(y: f64, x: f64) -> f64 {
        y.atan2(x)
    }
    #[inline(always)]
    pub fn sin_cos_f32(x: f32) -> (f32, f32) {
        x.sin_cos()
    }
    #[inline(always)]
    pub fn sin_cos_f64(x: f64) -> (f64, f64) {
        x.sin_cos()
    }
    #[inline(always)]
    pub fn powf_f32(x: f32, p: f32) -> f32 {
        x.powf(p)
    }
    #[inline(always)]
    pub fn powf_f64(x: f64, p: f64) -> f64 {
        x.powf(p)
    }
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
mod float_ops {
    #[inline(always)]
    pub fn sqrt_f32(x: f32) -> f32 {
        libm::sqrtf(x)
    }
    #[inline(always)]
    pub fn sqrt_f64(x: f64) -> f64 {
        libm::sqrt(x)
    }
    #[inline(always)]
    pub fn abs_f32(x: f32) -> f32 {
        libm::fabsf(x)
    }
    #[inline(always)]
    pub fn abs_f64(x: f64) -> f64 {
        libm::fabs(x)
    }
    #[inline(always)]
    pub fn sin_f32(x: f32) -> f32 {
        libm::sinf(x)
    }
    #[inline(always)]
    pub fn sin_f64(x: f64) -> f64 {
        libm::sin(x)
    }
    #[inline(always)]
    pub fn cos_f32(x: f32) -> f32 {
        libm::cosf(x)
    }
    #[inline(always)]
    pub fn cos_f64(x: f64) -> f64 {
        libm::cos(x)
    }
    #[inline(always)]
    pub fn asin_f32(x: f32) -> f32 {
        libm::asinf(x)
    }
    #[inline(always)]
    pub fn asin_f64(x: f64) -> f64 {
        libm::asin(x)
    }
    #[inline(always)]
    pub fn acos_f32(x: f32) -> f32 {
        libm::acosf(x)
    }
    #[inline(always)]
    pub fn acos_f64(x: f64) -> f64 {
        libm::acos(x)
    }
    #[inline(always)]
    pub fn atan2_f32(y: f32, x: f32) -> f32 {
        libm::atan2f(y, x)
    }
    #[inline(always)]
    pub fn atan2_f64(y: f64, x: f64) -> f64 {
        libm::atan2(y, x)
    }
    #[inline(always)]
    pub fn sin_cos_f32(x: f32) -> (f32, f32) {
        libm::sincosf(x)
    }
    #[inline(always)]
    pub fn sin_cos_f64(x: f64) -> (f64, f64) {
        libm::sincos(x)
    }
    #[inline(always)]
    pub fn powf_f32(x: f32, p: f32) -> f32 {
        libm::powf(x, p)
    }
    #[inline(always)]
    pub fn powf_f64(x: f64, p: f64) -> f64 {
        libm::pow(x, p)
    }
}

macro_rules! impl_scalar_float {
    ($t:ty, $suffix:ident, $pi:expr, $eps:expr, $inf:expr) => {
        ::paste::paste! {
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const NEG_ONE: Self = -1.0;
            const TWO: Self = 2.0;
            const HALF: Self = 0.5;
            const PI: Self = $pi;
            const EPSILON: Self = $eps;
            const INFINITY: Self = $inf;
            const ROUNDING_ERROR: Self = 0.000001;
            const DEG_TO_RAD: Self = $pi / 180.0;
            const RAD_TO_DEG: Self = 180.0 / $pi;

            #[inline] fn sqrt(self) -> Self { float_ops::[<sqrt_ $suffix>](self) }
            #[inline] fn abs(self) -> Self { float_ops::[<abs_ $suffix>](self) }
            #[inline] fn sin(self) -> Self { float_ops::[<sin_ $suffix>](self) }
            #[inline] fn cos(self) -> Self { float_ops::[<cos_ $suffix>](self) }
            #[inline] fn asin(self) -> Self { float_ops::[<asin_ $suffix>](self) }
            #[inline] fn acos(self) -> Self { float_ops::[<acos_ $suffix>](self) }
            #[inline] fn atan2(self, other: Self) -> Self { float_ops::[<atan2_ $suffix>](self, other) }
            #[inline] fn sin_cos(self) -> (Self, Self) { float_ops::[<sin_cos_ $suffix>](self) }
            #[inline] fn powf(self, p: Self) -> Self { float_ops::[<powf_ $suffix>](self, p) }

            #[inline] fn min(self, other: Self) -> Self { if self < other { self } else { other } }
            #[inline] fn max(self, other: Self) -> Self { if self > other { self } else { other } }
            #[inline] fn recip(self) -> Self { 1.0 as $t / self }

            #[inline] fn from_f64(v: f64) -> Self { v as $t }
            #[inline] fn to_f64(self) -> f64 { self as f64 }
        }
        }
    };
}

impl_scalar_float!(f32, f32, core::f32::consts::PI, f32::EPSILON, f32::INFINITY);
impl_scalar_float!(f64, f64, core::f64::consts::PI, f64::EPSILON, f64::INFINITY);
