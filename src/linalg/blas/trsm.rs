use crate::error::Result;
use crate::linalg::blas::axpy::daxpy_unitary;
use crate::linalg::blas::dot::ddot_unitary;
use crate::linalg::blas::flags::{Diag, Side, Transpose, Uplo};
use crate::linalg::blas::matrix::{row_mut, row_pair_mut, segment};
use crate::linalg::blas::scal::{dscal_unitary, dzero_unitary};
use crate::linalg::blas::validate::{self, TriangularOp, TriangularPlan};

/// Solves a triangular system with a matrix right-hand side, in place.
///
/// Computes `X` such that
///
/// ```text
/// op(A) * X = alpha * B    if side == Left
/// X * op(A) = alpha * B    if side == Right
/// ```
///
/// where `A` is an upper or lower triangular `k x k` matrix (`k = m` for
/// `Left`, `k = n` for `Right`), `B` and `X` are `m x n`, and `op(A)` is
/// `A` or `Aᵀ`. All matrices are row-major. `X` overwrites `b`.
///
/// Only the `uplo` triangle of `a` is read. With `Diag::Unit` the diagonal
/// is taken as 1 and never read. The solve performs no invertibility check:
/// a zero pivot under `Diag::NonUnit` yields infinities or NaN in `b`.
///
/// With `alpha == 0` the result is exactly zero and neither `a` nor the
/// previous contents of `b` are read.
///
/// # Errors
///
/// Returns [`BlasError::InvalidArgument`](crate::error::BlasError) if a
/// leading dimension is smaller than the columns its operand exposes or a
/// buffer is too short for its extents. Nothing is written in that case.
///
/// # Examples
///
/// ```
/// use simdly_blas3::linalg::blas::{dtrsm, Diag, Side, Transpose, Uplo};
///
/// // A = [[1, 0], [3, 1]], unit lower triangular
/// let a = [1.0, 0.0, 3.0, 1.0];
/// let mut b = [2.0, 4.0, 5.0, 6.0];
/// dtrsm(Side::Left, Uplo::Lower, Transpose::NoTrans, Diag::Unit, 2, 2, 1.0, &a, 2, &mut b, 2)
///     .unwrap();
/// assert_eq!(b, [2.0, 4.0, -1.0, -6.0]);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn dtrsm(
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
    let plan = validate::triangular(
        TriangularOp::Solve,
        side,
        uplo,
        trans,
        diag,
        m,
        n,
        a.len(),
        lda,
        b.len(),
        ldb,
    )
    .inspect_err(|err| log::debug!("dtrsm: rejected: {err}"))?;

    if plan.degenerate {
        return Ok(());
    }
    log::trace!("dtrsm: {plan:?} alpha={alpha}");

    if alpha == 0.0 {
        log::debug!("dtrsm: alpha == 0, zero-filling b");
        for i in 0..m {
            dzero_unitary(row_mut(b, ldb, i, n));
        }
        return Ok(());
    }

    match (plan.side, plan.trans.is_transposed()) {
        (Side::Left, false) => solve_left(&plan, alpha, a, lda, b, ldb),
        (Side::Left, true) => solve_left_transposed(&plan, alpha, a, lda, b, ldb),
        (Side::Right, false) => solve_right(&plan, alpha, a, lda, b, ldb),
        (Side::Right, true) => solve_right_transposed(&plan, alpha, a, lda, b, ldb),
    }

    Ok(())
}

/// `A * X = alpha * B`: substitution over rows of B, each row resolved
/// against the already-solved rows in its own row of A.
fn solve_left(plan: &TriangularPlan, alpha: f64, a: &[f64], lda: usize, b: &mut [f64], ldb: usize) {
    let (m, n) = (plan.m, plan.n);

    for i in plan.sweep.indices(m) {
        if alpha != 1.0 {
            dscal_unitary(alpha, row_mut(b, ldb, i, n));
        }
        for k in plan.uplo.off_diagonal(i, m) {
            let a_ik = a[i * lda + k];
            if a_ik != 0.0 {
                let (b_i, x_k) = row_pair_mut(b, ldb, n, i, k);
                daxpy_unitary(-a_ik, x_k, b_i);
            }
        }
        if plan.diag == Diag::NonUnit {
            dscal_unitary(1.0 / a[i * lda + i], row_mut(b, ldb, i, n));
        }
    }
}

/// `Aᵀ * X = alpha * B`: each solved row of X is eliminated from the
/// pending rows using the stored row of A, then scaled by `alpha`.
fn solve_left_transposed(
    plan: &TriangularPlan,
    alpha: f64,
    a: &[f64],
    lda: usize,
    b: &mut [f64],
    ldb: usize,
) {
    let (m, n) = (plan.m, plan.n);

    for k in plan.sweep.indices(m) {
        if plan.diag == Diag::NonUnit {
            dscal_unitary(1.0 / a[k * lda + k], row_mut(b, ldb, k, n));
        }
        for i in plan.uplo.off_diagonal(k, m) {
            let a_ki = a[k * lda + i];
            if a_ki != 0.0 {
                let (b_i, x_k) = row_pair_mut(b, ldb, n, i, k);
                daxpy_unitary(-a_ki, x_k, b_i);
            }
        }
        if alpha != 1.0 {
            dscal_unitary(alpha, row_mut(b, ldb, k, n));
        }
    }
}

/// `X * A = alpha * B`: per row of B, every resolved entry is pushed into
/// the pending entries through the stored row of A.
fn solve_right(plan: &TriangularPlan, alpha: f64, a: &[f64], lda: usize, b: &mut [f64], ldb: usize) {
    let n = plan.n;

    for i in 0..plan.m {
        let b_i = row_mut(b, ldb, i, n);
        if alpha != 1.0 {
            dscal_unitary(alpha, b_i);
        }
        for k in plan.sweep.indices(n) {
            if b_i[k] == 0.0 {
                continue;
            }
            if plan.diag == Diag::NonUnit {
                b_i[k] /= a[k * lda + k];
            }
            let x_k = b_i[k];
            let cols = plan.uplo.off_diagonal(k, n);
            daxpy_unitary(-x_k, segment(a, lda, k, cols.clone()), &mut b_i[cols]);
        }
    }
}

/// `X * Aᵀ = alpha * B`: per row of B, each entry is one dot product
/// against the already-resolved entries.
fn solve_right_transposed(
    plan: &TriangularPlan,
    alpha: f64,
    a: &[f64],
    lda: usize,
    b: &mut [f64],
    ldb: usize,
) {
    let n = plan.n;

    for i in 0..plan.m {
        let b_i = row_mut(b, ldb, i, n);
        for j in plan.sweep.indices(n) {
            let cols = plan.uplo.off_diagonal(j, n);
            let mut x_j = alpha * b_i[j] - ddot_unitary(segment(a, lda, j, cols.clone()), &b_i[cols]);
            if plan.diag == Diag::NonUnit {
                x_j /= a[j * lda + j];
            }
            b_i[j] = x_j;
        }
    }
}
