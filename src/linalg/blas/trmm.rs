use crate::error::Result;
use crate::linalg::blas::axpy::daxpy_unitary;
use crate::linalg::blas::dot::ddot_unitary;
use crate::linalg::blas::flags::{Diag, Side, Transpose, Uplo};
use crate::linalg::blas::matrix::{row_mut, row_pair_mut, segment};
use crate::linalg::blas::scal::{dscal_unitary, dzero_unitary};
use crate::linalg::blas::validate::{self, TriangularOp, TriangularPlan};

/// Multiplies a general matrix by a triangular one, in place.
///
/// Computes
///
/// ```text
/// B = alpha * op(A) * B    if side == Left
/// B = alpha * B * op(A)    if side == Right
/// ```
///
/// where `A` is an upper or lower triangular `k x k` matrix (`k = m` for
/// `Left`, `k = n` for `Right`), `B` is `m x n` and `op(A)` is `A` or
/// `Aᵀ`. Only the `uplo` triangle of `a` is read; with `Diag::Unit` the
/// diagonal is taken as 1. With `alpha == 0` the result is exactly zero.
///
/// # Errors
///
/// Returns [`BlasError::InvalidArgument`](crate::error::BlasError) on a bad
/// leading dimension or a short buffer, before writing anything.
#[allow(clippy::too_many_arguments)]
pub fn dtrmm(
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
        TriangularOp::Multiply,
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
    .inspect_err(|err| log::debug!("dtrmm: rejected: {err}"))?;

    if plan.degenerate {
        return Ok(());
    }
    log::trace!("dtrmm: {plan:?} alpha={alpha}");

    if alpha == 0.0 {
        log::debug!("dtrmm: alpha == 0, zero-filling b");
        for i in 0..m {
            dzero_unitary(row_mut(b, ldb, i, n));
        }
        return Ok(());
    }

    match (plan.side, plan.trans.is_transposed()) {
        (Side::Left, false) => multiply_left(&plan, alpha, a, lda, b, ldb),
        (Side::Left, true) => multiply_left_transposed(&plan, alpha, a, lda, b, ldb),
        (Side::Right, false) => multiply_right(&plan, alpha, a, lda, b, ldb),
        (Side::Right, true) => multiply_right_transposed(&plan, alpha, a, lda, b, ldb),
    }

    Ok(())
}

// Every sweep visits a row or column before any row or column that still
// needs its original value has been overwritten.

fn multiply_left(plan: &TriangularPlan, alpha: f64, a: &[f64], lda: usize, b: &mut [f64], ldb: usize) {
    let (m, n) = (plan.m, plan.n);

    for i in plan.sweep.indices(m) {
        let scale = alpha * plan.diag.entry(a, i, lda);
        if scale != 1.0 {
            dscal_unitary(scale, row_mut(b, ldb, i, n));
        }
        for k in plan.uplo.off_diagonal(i, m) {
            let tmp = alpha * a[i * lda + k];
            if tmp != 0.0 {
                let (b_i, b_k) = row_pair_mut(b, ldb, n, i, k);
                daxpy_unitary(tmp, b_k, b_i);
            }
        }
    }
}

fn multiply_left_transposed(
    plan: &TriangularPlan,
    alpha: f64,
    a: &[f64],
    lda: usize,
    b: &mut [f64],
    ldb: usize,
) {
    let (m, n) = (plan.m, plan.n);

    for k in plan.sweep.indices(m) {
        for i in plan.uplo.off_diagonal(k, m) {
            let tmp = alpha * a[k * lda + i];
            if tmp != 0.0 {
                let (b_i, b_k) = row_pair_mut(b, ldb, n, i, k);
                daxpy_unitary(tmp, b_k, b_i);
            }
        }
        let scale = alpha * plan.diag.entry(a, k, lda);
        if scale != 1.0 {
            dscal_unitary(scale, row_mut(b, ldb, k, n));
        }
    }
}

fn multiply_right(plan: &TriangularPlan, alpha: f64, a: &[f64], lda: usize, b: &mut [f64], ldb: usize) {
    let n = plan.n;

    for i in 0..plan.m {
        let b_i = row_mut(b, ldb, i, n);
        for k in plan.sweep.indices(n) {
            let tmp = alpha * b_i[k];
            if tmp == 0.0 {
                continue;
            }
            b_i[k] = tmp * plan.diag.entry(a, k, lda);
            let cols = plan.uplo.off_diagonal(k, n);
            daxpy_unitary(tmp, segment(a, lda, k, cols.clone()), &mut b_i[cols]);
        }
    }
}

fn multiply_right_transposed(
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
            let cross = ddot_unitary(segment(a, lda, j, cols.clone()), &b_i[cols]);
            b_i[j] = alpha * (b_i[j] * plan.diag.entry(a, j, lda) + cross);
        }
    }
}
