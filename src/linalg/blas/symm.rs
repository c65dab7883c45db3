use crate::error::Result;
use crate::linalg::blas::axpy::daxpy_unitary;
use crate::linalg::blas::dot::ddot_unitary;
use crate::linalg::blas::flags::{Side, Uplo};
use crate::linalg::blas::matrix::{row, row_mut, segment};
use crate::linalg::blas::scal::dscal_beta;
use crate::linalg::blas::validate::{self, SymmetricPlan};

/// Multiplies a general matrix by a symmetric one.
///
/// Computes
///
/// ```text
/// C = alpha * A * B + beta * C    if side == Left
/// C = alpha * B * A + beta * C    if side == Right
/// ```
///
/// where `A` is a symmetric `k x k` matrix (`k = m` for `Left`, `k = n` for
/// `Right`) of which only the `uplo` triangle is read, and `B` and `C` are
/// `m x n`.
///
/// `beta == 0` discards the previous contents of `c` without reading them.
/// `alpha == 0` never reads `a` or `b`.
///
/// # Errors
///
/// Returns [`BlasError::InvalidArgument`](crate::error::BlasError) on a bad
/// leading dimension or a short buffer, before writing anything.
///
/// # Examples
///
/// ```
/// use simdly_blas3::linalg::blas::{dsymm, Side, Uplo};
///
/// // A = [[1, 2], [2, 3]], stored upper; B = I
/// let a = [1.0, 2.0, f64::NAN, 3.0];
/// let b = [1.0, 0.0, 0.0, 1.0];
/// let mut c = [0.0; 4];
/// dsymm(Side::Left, Uplo::Upper, 2, 2, 1.0, &a, 2, &b, 2, 0.0, &mut c, 2).unwrap();
/// assert_eq!(c, [1.0, 2.0, 2.0, 3.0]);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn dsymm(
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
    let plan = validate::symmetric(side, uplo, m, n, a.len(), lda, b.len(), ldb, c.len(), ldc)
        .inspect_err(|err| log::debug!("dsymm: rejected: {err}"))?;

    if plan.degenerate {
        return Ok(());
    }
    log::trace!("dsymm: {plan:?} alpha={alpha} beta={beta}");

    if alpha == 0.0 {
        log::debug!("dsymm: alpha == 0, applying beta={beta} only");
        if beta != 1.0 {
            for i in 0..m {
                dscal_beta(beta, row_mut(c, ldc, i, n));
            }
        }
        return Ok(());
    }

    match plan.side {
        Side::Left => multiply_left(&plan, alpha, a, lda, b, ldb, beta, c, ldc),
        Side::Right => multiply_right(&plan, alpha, a, lda, b, ldb, beta, c, ldc),
    }

    Ok(())
}

/// Row `i` of C takes `alpha * A[i, k] * B[k, :]` for every `k`; entries of
/// the unstored triangle are read through their mirror.
#[allow(clippy::too_many_arguments)]
fn multiply_left(
    plan: &SymmetricPlan,
    alpha: f64,
    a: &[f64],
    lda: usize,
    b: &[f64],
    ldb: usize,
    beta: f64,
    c: &mut [f64],
    ldc: usize,
) {
    let (m, n) = (plan.m, plan.n);

    for i in 0..m {
        let c_i = row_mut(c, ldc, i, n);
        dscal_beta(beta, c_i);
        daxpy_unitary(alpha * a[i * lda + i], row(b, ldb, i, n), c_i);

        for k in (0..i).chain(i + 1..m) {
            let tmp = alpha * a[plan.uplo.symmetric_index(i, k, lda)];
            if tmp != 0.0 {
                daxpy_unitary(tmp, row(b, ldb, k, n), c_i);
            }
        }
    }
}

/// Row `i` of C is `alpha * B[i, :] * A`. Column `j` of the stored triangle
/// feeds `C[i, j]` through a dot product and pushes `B[i, j]` into the
/// remaining columns of the row through a scaled accumulate.
#[allow(clippy::too_many_arguments)]
fn multiply_right(
    plan: &SymmetricPlan,
    alpha: f64,
    a: &[f64],
    lda: usize,
    b: &[f64],
    ldb: usize,
    beta: f64,
    c: &mut [f64],
    ldc: usize,
) {
    let (m, n) = (plan.m, plan.n);

    for i in 0..m {
        let b_i = row(b, ldb, i, n);
        let c_i = row_mut(c, ldc, i, n);
        dscal_beta(beta, c_i);

        for j in 0..n {
            let cols = plan.uplo.off_diagonal(j, n);
            let a_j = segment(a, lda, j, cols.clone());
            let tmp = alpha * b_i[j];

            c_i[j] += tmp * a[j * lda + j] + alpha * ddot_unitary(a_j, &b_i[cols.clone()]);
            if tmp != 0.0 {
                daxpy_unitary(tmp, a_j, &mut c_i[cols]);
            }
        }
    }
}
