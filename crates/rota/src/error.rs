//! Error type for the few kernel operations that can reject their input.

use core::fmt;

/// Errors reported by kernel operations.
///
/// Most degenerate inputs are tolerated silently (zero-length normalize,
/// zero-width `map`, near-parallel slerp). Matrix inversion reports
/// singularity through `Option`. This type covers the rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    /// Perspective projection with zero depth range, zero field of view or zero aspect.
    InvalidProjection { fov: f64, aspect: f64, near: f64, far: f64 },
    /// A matrix needed for the operation has no inverse.
    SingularMatrix,
    /// Flat xyz buffer whose length is not a multiple of 3.
    BufferLength { len: usize },
    /// Output buffer shorter than the input.
    BufferTooSmall { needed: usize, got: usize },
    /// Paired inputs of different lengths.
    LengthMismatch { left: usize, right: usize },
    /// Operation needs at least one element.
    Empty,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidProjection { fov, aspect, near, far } => write!(
                f,
                "illegal projection arguments (fovy={fov} aspect={aspect} near={near} far={far})"
            ),
            Self::SingularMatrix => write!(f, "matrix is singular"),
            Self::BufferLength { len } => {
                write!(f, "xyz buffer length {len} is not a multiple of 3")
            }
            Self::BufferTooSmall { needed, got } => {
                write!(f, "output buffer too small: need {needed}, got {got}")
            }
            Self::LengthMismatch { left, right } => {
                write!(f, "length mismatch: {left} vs {right}")
            }
            Self::Empty => write!(f, "empty input"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MathError {}

pub type Result<T> = core::result::Result<T, MathError>;

/// Checks a flat xyz input against an output buffer length.
pub(crate) fn check_xyz(len: usize, out: usize) -> Result<()> {
    if len % 3 != 0 {
        return Err(MathError::BufferLength { len });
    }
    if out < len {
        return Err(MathError::BufferTooSmall { needed: len, got: out });
    }
    Ok(())
}
