//! Scalar helpers shared by the vector, matrix and quaternion code.
//!
//! Tolerances are absolute, not relative: [`is_zero`] and [`is_equal`] compare
//! against [`FLOAT_ROUNDING_ERROR`] regardless of the magnitude of the inputs.

use crate::Scalar;

/// Default absolute tolerance for single precision comparisons.
pub const FLOAT_ROUNDING_ERROR: f32 = 0.000001;

/// Linearly rescales `value` from `[source_min, source_max]` to `[target_min, target_max]`.
///
/// A source range of zero width maps everything to zero.
pub fn map<S: Scalar>(value: S, source_min: S, source_max: S, target_min: S, target_max: S) -> S {
    let width = source_max - source_min;
    if width == S::ZERO {
        return S::ZERO;
    }
    (value - source_min) * (target_max - target_min) / width + target_min
}

/// Bounds `value` into `[min, max]`. If `min > max`, `min` wins.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    let upper = if max < value { max } else { value };
    if min > upper { min } else { upper }
}

/// True if `|value| <= 1e-6`.
#[inline]
pub fn is_zero<S: Scalar>(value: S) -> bool {
    value.abs() <= S::ROUNDING_ERROR
}

#[inline]
pub fn is_zero_within<S: Scalar>(value: S, tolerance: S) -> bool {
    value.abs() <= tolerance
}

/// True if `|a - b| <= 1e-6`.
#[inline]
pub fn is_equal<S: Scalar>(a: S, b: S) -> bool {
    (a - b).abs() <= S::ROUNDING_ERROR
}

#[inline]
pub fn is_equal_within<S: Scalar>(a: S, b: S, tolerance: S) -> bool {
    (a - b).abs() <= tolerance
}

#[inline]
pub fn length2<S: Scalar>(x: S, y: S) -> S {
    (x * x + y * y).sqrt()
}

#[inline]
pub fn length3<S: Scalar>(x: S, y: S, z: S) -> S {
    (x * x + y * y + z * z).sqrt()
}

#[inline]
pub fn length4<S: Scalar>(x: S, y: S, z: S, w: S) -> S {
    (x * x + y * y + z * z + w * w).sqrt()
}

#[inline]
pub fn dot2<S: Scalar>(ax: S, ay: S, bx: S, by: S) -> S {
    ax * bx + ay * by
}

#[inline]
pub fn dot3<S: Scalar>(ax: S, ay: S, az: S, bx: S, by: S, bz: S) -> S {
    ax * bx + ay * by + az * bz
}

#[allow(clippy::too_many_arguments)]
#[inline]
pub fn dot4<S: Scalar>(ax: S, ay: S, az: S, aw: S, bx: S, by: S, bz: S, bw: S) -> S {
    ax * bx + ay * by + az * bz + aw * bw
}

/// Power-of-two test. Zero and negative numbers are never powers of two.
#[inline]
pub fn is_power_of_two(n: i32) -> bool {
    n > 0 && (n & (n - 1)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_rescales_linearly() {
        assert_eq!(map(5.0_f32, 0.0, 10.0, 0.0, 100.0), 50.0);
        assert_eq!(map(0.0_f64, -1.0, 1.0, 10.0, 20.0), 15.0);
    }

    #[test]
    fn map_zero_width_source_is_zero() {
        assert_eq!(map(3.0_f32, 2.0, 2.0, -5.0, 5.0), 0.0);
    }

    #[test]
    fn clamp_ints_and_floats() {
        assert_eq!(clamp(5, 0, 3), 3);
        assert_eq!(clamp(-2, 0, 3), 0);
        assert_eq!(clamp(1.5_f32, -1.0, 1.0), 1.0);
        assert_eq!(clamp(0.25_f64, -1.0, 1.0), 0.25);
        // inverted bounds: the lower bound is applied last
        assert_eq!(clamp(5, 3, 0), 3);
    }

    #[test]
    fn tolerance_is_absolute() {
        assert!(is_zero(0.0000009_f32));
        assert!(!is_zero(0.000002_f32));
        assert!(is_equal(1000.0_f64, 1000.0000005));
        assert!(!is_equal(1000.0_f64, 1000.00001));
        assert!(is_zero_within(0.05_f32, 0.1));
        assert!(is_equal_within(1.0_f32, 1.05, 0.1));
    }

    #[test]
    fn lengths_and_dots() {
        assert_eq!(length2(3.0_f32, 4.0), 5.0);
        assert_eq!(length3(2.0_f64, 3.0, 6.0), 7.0);
        assert_eq!(length4(1.0_f64, 1.0, 1.0, 1.0), 2.0);
        assert_eq!(dot2(1.0_f32, 2.0, 3.0, 4.0), 11.0);
        assert_eq!(dot3(1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0), 32.0);
        assert_eq!(dot4(1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0), 70.0);
    }

    #[test]
    fn power_of_two() {
        assert!(is_power_of_two(1));
        assert!(is_power_of_two(1024));
        assert!(!is_power_of_two(0));
        assert!(!is_power_of_two(-4));
        assert!(!is_power_of_two(12));
        assert!(is_power_of_two(1 << 30));
    }
}
