//! Error types for the Level-3 kernels.
//!
//! Every kernel validates its whole argument list before touching an output
//! buffer. A rejected call surfaces as [`BlasError::InvalidArgument`] and leaves
//! all buffers exactly as the caller passed them.

use std::fmt;

/// Names the matrix operand an argument error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    A,
    B,
    C,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operand::A => "a",
            Operand::B => "b",
            Operand::C => "c",
        };
        f.write_str(name)
    }
}

/// The argument constraint a rejected call violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArgument {
    #[error("bad side")]
    BadSide,
    #[error("bad uplo")]
    BadUplo,
    #[error("bad transpose")]
    BadTranspose,
    #[error("bad diag")]
    BadDiag,
    #[error("m < 0")]
    MLessThanZero,
    #[error("n < 0")]
    NLessThanZero,
    #[error("k < 0")]
    KLessThanZero,
    /// Leading dimension smaller than the columns the operand exposes.
    #[error("ld{operand} ({ld}) must be >= {min}")]
    BadLeadingDimension {
        operand: Operand,
        ld: isize,
        min: usize,
    },
    /// Backing buffer cannot hold the logical extents at the given leading dimension.
    #[error("{operand} has length {len}, need at least {required}")]
    BufferTooShort {
        operand: Operand,
        len: usize,
        required: usize,
    },
}

/// Errors that can occur during Level-3 operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BlasError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
}

/// Result type alias for kernel calls.
pub type Result<T> = std::result::Result<T, BlasError>;

/// Creates a leading-dimension error for `operand`.
pub(crate) fn bad_ld(operand: Operand, ld: isize, min: usize) -> BlasError {
    InvalidArgument::BadLeadingDimension { operand, ld, min }.into()
}

/// Creates a short-buffer error for `operand`.
pub(crate) fn too_short(operand: Operand, len: usize, required: usize) -> BlasError {
    InvalidArgument::BufferTooShort {
        operand,
        len,
        required,
    }
    .into()
}
