//! Row-major double-precision BLAS routines.
//!
//! The Level-3 kernels ([`dtrsm`], [`dsymm`], [`dsyrk`], [`dsyr2k`],
//! [`dtrmm`]) stream over rows of their operands and run the inner work
//! through the unit-stride Level-1 microkernels in [`axpy`], [`dot`] and
//! [`scal`].

pub mod axpy;
pub mod dot;
pub mod flags;
pub mod matrix;
pub mod scal;
pub mod symm;
pub mod syr2k;
pub mod syrk;
pub mod trmm;
pub mod trsm;

pub(crate) mod validate;

pub use flags::{Diag, Side, Sweep, Transpose, Uplo};
pub use matrix::MatrixShape;
pub use symm::dsymm;
pub use syr2k::dsyr2k;
pub use syrk::dsyrk;
pub use trmm::dtrmm;
pub use trsm::dtrsm;

use crate::error::Result;

/// Elements a strided vector of `n` elements at increment `inc` spans.
#[inline(always)]
pub(crate) fn required_len(n: usize, inc: isize) -> usize {
    if n == 0 {
        0
    } else {
        1 + (n - 1) * inc.unsigned_abs()
    }
}

/// Index of the first element visited; negative increments start at the
/// far end of the vector.
#[inline(always)]
pub(crate) fn start_index(n: usize, inc: isize) -> isize {
    if inc >= 0 {
        0
    } else {
        (1 - n as isize) * inc
    }
}

/// The five double-precision Level-3 operations over row-major buffers.
///
/// Lets callers program against the operation set rather than the free
/// functions, for instance to swap in an instrumented or accelerated
/// implementation.
#[allow(clippy::too_many_arguments)]
pub trait Float64Level3 {
    /// Solves `op(A)·X = alpha·B` (Left) or `X·op(A) = alpha·B` (Right),
    /// overwriting `b` with `X`. See [`dtrsm`].
    fn dtrsm(
        &self,
        side: Side,
        uplo: Uplo,
        trans: Transpose,
        diag: Diag,
        m: usize,
        n: usize,
        alpha: f64,
        a: &[f64],
        lda: usize,
        b: &mut [f64],
        ldb: usize,
    ) -> Result<()>;

    /// `C = alpha·A·B + beta·C` (Left) or `C = alpha·B·A + beta·C` (Right)
    /// with `A` symmetric. See [`dsymm`].
    fn dsymm(
        &self,
        side: Side,
        uplo: Uplo,
        m: usize,
        n: usize,
        alpha: f64,
        a: &[f64],
        lda: usize,
        b: &[f64],
        ldb: usize,
        beta: f64,
        c: &mut [f64],
        ldc: usize,
    ) -> Result<()>;

    /// `C = alpha·A·Aᵀ + beta·C` or `C = alpha·Aᵀ·A + beta·C`. See [`dsyrk`].
    fn dsyrk(
        &self,
        uplo: Uplo,
        trans: Transpose,
        n: usize,
        k: usize,
        alpha: f64,
        a: &[f64],
        lda: usize,
        beta: f64,
        c: &mut [f64],
        ldc: usize,
    ) -> Result<()>;

    /// `C = alpha·A·Bᵀ + alpha·B·Aᵀ + beta·C` or the transposed form. See
    /// [`dsyr2k`].
    fn dsyr2k(
        &self,
        uplo: Uplo,
        trans: Transpose,
        n: usize,
        k: usize,
        alpha: f64,
        a: &[f64],
        lda: usize,
        b: &[f64],
        ldb: usize,
        beta: f64,
        c: &mut [f64],
        ldc: usize,
    ) -> Result<()>;

    /// `B = alpha·op(A)·B` (Left) or `B = alpha·B·op(A)` (Right). See
    /// [`dtrmm`].
    fn dtrmm(
        &self,
        side: Side,
        uplo: Uplo,
        trans: Transpose,
        diag: Diag,
        m: usize,
        n: usize,
        alpha: f64,
        a: &[f64],
        lda: usize,
        b: &mut [f64],
        ldb: usize,
    ) -> Result<()>;
}

/// The crate's own [`Float64Level3`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Implementation;

impl Float64Level3 for Implementation {
    fn dtrsm(
        &self,
        side: Side,
        uplo: Uplo,
        trans: Transpose,
        diag: Diag,
        m: usize,
        n: usize,
        alpha: f64,
        a: &[f64],
        lda: usize,
        b: &mut [f64],
        ldb: usize,
    ) -> Result<()> {
        dtrsm(side, uplo, trans, diag, m, n, alpha, a, lda, b, ldb)
    }

    fn dsymm(
        &self,
        side: Side,
        uplo: Uplo,
        m: usize,
        n: usize,
        alpha: f64,
        a: &[f64],
        lda: usize,
        b: &[f64],
        ldb: usize,
        beta: f64,
        c: &mut [f64],
        ldc: usize,
    ) -> Result<()> {
        dsymm(side, uplo, m, n, alpha, a, lda, b, ldb, beta, c, ldc)
    }

    fn dsyrk(
        &self,
        uplo: Uplo,
        trans: Transpose,
        n: usize,
        k: usize,
        alpha: f64,
        a: &[f64],
        lda: usize,
        beta: f64,
        c: &mut [f64],
        ldc: usize,
    ) -> Result<()> {
        dsyrk(uplo, trans, n, k, alpha, a, lda, beta, c, ldc)
    }

    fn dsyr2k(
        &self,
        uplo: Uplo,
        trans: Transpose,
        n: usize,
        k: usize,
        alpha: f64,
        a: &[f64],
        lda: usize,
        b: &[f64],
        ldb: usize,
        beta: f64,
        c: &mut [f64],
        ldc: usize,
    ) -> Result<()> {
        dsyr2k(uplo, trans, n, k, alpha, a, lda, b, ldb, beta, c, ldc)
    }

    fn dtrmm(
        &self,
        side: Side,
        uplo: Uplo,
        trans: Transpose,
        diag: Diag,
        m: usize,
        n: usize,
        alpha: f64,
        a: &[f64],
        lda: usize,
        b: &mut [f64],
        ldb: usize,
    ) -> Result<()> {
        dtrmm(side, uplo, trans, diag, m, n, alpha, a, lda, b, ldb)
    }
}
