//! CBLAS-style entry points with integer flag codes and signed extents.
//!
//! These accept the raw values a C caller passes (`CblasLeft = 141`,
//! `CblasUpper = 121`, `CblasNoTrans = 111`, `CblasNonUnit = 131`, ...) and
//! `i32` dimensions. Out-of-enum codes and negative extents or leading
//! dimensions are rejected here; the decoded call is then forwarded to the
//! typed kernels in [`crate::linalg::blas`]. Matrices are row-major.

use crate::error::{bad_ld, InvalidArgument, Operand, Result};
use crate::linalg::blas::{self, Diag, Side, Transpose, Uplo};

fn extent(value: i32, err: InvalidArgument) -> Result<usize> {
    usize::try_from(value).map_err(|_| err.into())
}

fn leading_dimension(operand: Operand, ld: i32, min: usize) -> Result<usize> {
    usize::try_from(ld).map_err(|_| bad_ld(operand, ld as isize, min))
}

fn square_dim(side: Side, m: usize, n: usize) -> usize {
    match side {
        Side::Left => m,
        Side::Right => n,
    }
}

fn operand_cols(trans: Transpose, n: usize, k: usize) -> usize {
    if trans.is_transposed() {
        n
    } else {
        k
    }
}

/// [`blas::dtrsm`] over CBLAS flag codes.
#[allow(clippy::too_many_arguments)]
pub fn dtrsm(
    side: u32,
    uplo: u32,
    trans: u32,
    diag: u32,
    m: i32,
    n: i32,
    alpha: f64,
    a: &[f64],
    lda: i32,
    b: &mut [f64],
    ldb: i32,
) -> Result<()> {
    let side = Side::try_from(side)?;
    let uplo = Uplo::try_from(uplo)?;
    let trans = Transpose::try_from(trans)?;
    let diag = Diag::try_from(diag)?;
    let m = extent(m, InvalidArgument::MLessThanZero)?;
    let n = extent(n, InvalidArgument::NLessThanZero)?;
    let ldb = leading_dimension(Operand::B, ldb, n)?;
    let lda = leading_dimension(Operand::A, lda, square_dim(side, m, n))?;

    blas::dtrsm(side, uplo, trans, diag, m, n, alpha, a, lda, b, ldb)
}

/// [`blas::dsymm`] over CBLAS flag codes.
#[allow(clippy::too_many_arguments)]
pub fn dsymm(
    side: u32,
    uplo: u32,
    m: i32,
    n: i32,
    alpha: f64,
    a: &[f64],
    lda: i32,
    b: &[f64],
    ldb: i32,
    beta: f64,
    c: &mut [f64],
    ldc: i32,
) -> Result<()> {
    let side = Side::try_from(side)?;
    let uplo = Uplo::try_from(uplo)?;
    let m = extent(m, InvalidArgument::MLessThanZero)?;
    let n = extent(n, InvalidArgument::NLessThanZero)?;
    let lda = leading_dimension(Operand::A, lda, square_dim(side, m, n))?;
    let ldb = leading_dimension(Operand::B, ldb, n)?;
    let ldc = leading_dimension(Operand::C, ldc, n)?;

    blas::dsymm(side, uplo, m, n, alpha, a, lda, b, ldb, beta, c, ldc)
}

/// [`blas::dsyrk`] over CBLAS flag codes.
#[allow(clippy::too_many_arguments)]
pub fn dsyrk(
    uplo: u32,
    trans: u32,
    n: i32,
    k: i32,
    alpha: f64,
    a: &[f64],
    lda: i32,
    beta: f64,
    c: &mut [f64],
    ldc: i32,
) -> Result<()> {
    let uplo = Uplo::try_from(uplo)?;
    let trans = Transpose::try_from(trans)?;
    let n = extent(n, InvalidArgument::NLessThanZero)?;
    let k = extent(k, InvalidArgument::KLessThanZero)?;
    let lda = leading_dimension(Operand::A, lda, operand_cols(trans, n, k))?;
    let ldc = leading_dimension(Operand::C, ldc, n)?;

    blas::dsyrk(uplo, trans, n, k, alpha, a, lda, beta, c, ldc)
}

/// [`blas::dsyr2k`] over CBLAS flag codes.
#[allow(clippy::too_many_arguments)]
pub fn dsyr2k(
    uplo: u32,
    trans: u32,
    n: i32,
    k: i32,
    alpha: f64,
    a: &[f64],
    lda: i32,
    b: &[f64],
    ldb: i32,
    beta: f64,
    c: &mut [f64],
    ldc: i32,
) -> Result<()> {
    let uplo = Uplo::try_from(uplo)?;
    let trans = Transpose::try_from(trans)?;
    let n = extent(n, InvalidArgument::NLessThanZero)?;
    let k = extent(k, InvalidArgument::KLessThanZero)?;
    let cols = operand_cols(trans, n, k);
    let lda = leading_dimension(Operand::A, lda, cols)?;
    let ldb = leading_dimension(Operand::B, ldb, cols)?;
    let ldc = leading_dimension(Operand::C, ldc, n)?;

    blas::dsyr2k(uplo, trans, n, k, alpha, a, lda, b, ldb, beta, c, ldc)
}

/// [`blas::dtrmm`] over CBLAS flag codes.
#[allow(clippy::too_many_arguments)]
pub fn dtrmm(
    side: u32,
    uplo: u32,
    trans: u32,
    diag: u32,
    m: i32,
    n: i32,
    alpha: f64,
    a: &[f64],
    lda: i32,
    b: &mut [f64],
    ldb: i32,
) -> Result<()> {
    let side = Side::try_from(side)?;
    let uplo = Uplo::try_from(uplo)?;
    let trans = Transpose::try_from(trans)?;
    let diag = Diag::try_from(diag)?;
    let m = extent(m, InvalidArgument::MLessThanZero)?;
    let n = extent(n, InvalidArgument::NLessThanZero)?;
    let ldb = leading_dimension(Operand::B, ldb, n)?;
    let lda = leading_dimension(Operand::A, lda, square_dim(side, m, n))?;

    blas::dtrmm(side, uplo, trans, diag, m, n, alpha, a, lda, b, ldb)
}
