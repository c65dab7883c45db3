//! Orientation flags for the Level-3 routines.
//!
//! The discriminants follow the CBLAS enumeration so that the raw integer
//! surface in [`crate::cblas`] can decode them with `TryFrom<u32>`. Each flag
//! also decodes from the single-character codes of the Fortran interface.

use std::ops::Range;

use crate::error::{BlasError, InvalidArgument};

/// Transpose operation applied to the triangular or general operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Transpose {
    NoTrans = 111,
    Trans = 112,
    /// Numerically identical to `Trans` for real data.
    ConjTrans = 113,
}

/// Which triangle of a square operand is stored and read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Uplo {
    Upper = 121,
    Lower = 122,
}

/// Whether the triangular operand has an implicit unit diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Diag {
    NonUnit = 131,
    Unit = 132,
}

/// Whether the triangular or symmetric operand multiplies from the left or right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Side {
    Left = 141,
    Right = 142,
}

impl Transpose {
    /// `true` for `Trans` and `ConjTrans`.
    #[inline(always)]
    pub fn is_transposed(self) -> bool {
        !matches!(self, Transpose::NoTrans)
    }
}

impl Uplo {
    /// Column range of row `i` strictly off the diagonal inside this triangle
    /// of an `n x n` matrix: `i+1..n` for `Upper`, `0..i` for `Lower`.
    #[inline(always)]
    pub fn off_diagonal(self, i: usize, n: usize) -> Range<usize> {
        match self {
            Uplo::Upper => i + 1..n,
            Uplo::Lower => 0..i,
        }
    }

    /// Column range of row `i` on or inside this triangle of an `n x n`
    /// matrix: `i..n` for `Upper`, `0..i+1` for `Lower`.
    #[inline(always)]
    pub fn row_span(self, i: usize, n: usize) -> Range<usize> {
        match self {
            Uplo::Upper => i..n,
            Uplo::Lower => 0..i + 1,
        }
    }

    /// Offset of the symmetric entry `(i, j)` inside the stored triangle.
    ///
    /// Swapping the indices into the stored half is how the symmetric routines
    /// reach entries of the unstored half without dereferencing it.
    #[inline(always)]
    pub fn symmetric_index(self, i: usize, j: usize, ld: usize) -> usize {
        let (lo, hi) = if i <= j { (i, j) } else { (j, i) };
        match self {
            Uplo::Upper => lo * ld + hi,
            Uplo::Lower => hi * ld + lo,
        }
    }

    /// Triangle that `op(A)` occupies when `A` stores this one.
    #[inline(always)]
    pub fn apply(self, trans: Transpose) -> Uplo {
        match (self, trans.is_transposed()) {
            (uplo, false) => uplo,
            (Uplo::Upper, true) => Uplo::Lower,
            (Uplo::Lower, true) => Uplo::Upper,
        }
    }
}

impl Diag {
    /// Diagonal entry `a[i, i]`, or `1.0` without reading `a` when the
    /// diagonal is implicit.
    #[inline(always)]
    pub fn entry(self, a: &[f64], i: usize, ld: usize) -> f64 {
        match self {
            Diag::NonUnit => a[i * ld + i],
            Diag::Unit => 1.0,
        }
    }
}

/// Direction in which a kernel visits rows or columns.
///
/// Triangular solves and multiplies must visit dependency sources before
/// destinations; the direction is decoded once per call from the flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sweep {
    Forward,
    Backward,
}

impl Sweep {
    /// The opposite direction.
    #[inline(always)]
    pub fn reverse(self) -> Sweep {
        match self {
            Sweep::Forward => Sweep::Backward,
            Sweep::Backward => Sweep::Forward,
        }
    }

    /// Indices `0..n` in this direction.
    #[inline(always)]
    pub fn indices(self, n: usize) -> SweepIter {
        SweepIter {
            range: 0..n,
            sweep: self,
        }
    }
}

/// Iterator returned by [`Sweep::indices`].
#[derive(Debug, Clone)]
pub struct SweepIter {
    range: Range<usize>,
    sweep: Sweep,
}

impl Iterator for SweepIter {
    type Item = usize;

    #[inline(always)]
    fn next(&mut self) -> Option<usize> {
        match self.sweep {
            Sweep::Forward => self.range.next(),
            Sweep::Backward => self.range.next_back(),
        }
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl ExactSizeIterator for SweepIter {}

macro_rules! impl_flag_decoding {
    ($flag:ident, $error:ident, [$($variant:ident => $code:literal, $ch:literal);+ $(;)?]) => {
        impl TryFrom<u32> for $flag {
            type Error = BlasError;

            fn try_from(value: u32) -> Result<Self, Self::Error> {
                match value {
                    $($code => Ok($flag::$variant),)+
                    _ => Err(InvalidArgument::$error.into()),
                }
            }
        }

        impl TryFrom<char> for $flag {
            type Error = BlasError;

            fn try_from(value: char) -> Result<Self, Self::Error> {
                match value.to_ascii_uppercase() {
                    $($ch => Ok($flag::$variant),)+
                    _ => Err(InvalidArgument::$error.into()),
                }
            }
        }

        impl From<$flag> for u32 {
            fn from(flag: $flag) -> u32 {
                flag as u32
            }
        }
    };
}

impl_flag_decoding!(Transpose, BadTranspose, [
    NoTrans => 111, 'N';
    Trans => 112, 'T';
    ConjTrans => 113, 'C';
]);
impl_flag_decoding!(Uplo, BadUplo, [Upper => 121, 'U'; Lower => 122, 'L']);
impl_flag_decoding!(Diag, BadDiag, [NonUnit => 131, 'N'; Unit => 132, 'U']);
impl_flag_decoding!(Side, BadSide, [Left => 141, 'L'; Right => 142, 'R']);
