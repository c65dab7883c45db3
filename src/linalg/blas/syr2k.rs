use crate::error::Result;
use crate::linalg::blas::axpy::daxpy_unitary;
use crate::linalg::blas::dot::ddot_unitary;
use crate::linalg::blas::flags::{Transpose, Uplo};
use crate::linalg::blas::matrix::{row, segment, segment_mut};
use crate::linalg::blas::scal::dscal_beta;
use crate::linalg::blas::syrk::{accumulate, scale_triangle};
use crate::linalg::blas::validate::{self, RankPlan};

/// Performs a symmetric rank-2k update.
///
/// Computes
///
/// ```text
/// C = alpha * A * Bᵀ + alpha * B * Aᵀ + beta * C    if trans == NoTrans
/// C = alpha * Aᵀ * B + alpha * Bᵀ * A + beta * C    otherwise
/// ```
///
/// where `C` is an `n x n` symmetric matrix and `A`, `B` are `n x k`
/// (`NoTrans`) or `k x n`. Only the `uplo` triangle of `c` is read or
/// written. The two cross products are summed before the single `beta`
/// update of each entry.
///
/// `beta == 0` overwrites the triangle without reading it. With
/// `alpha == 0` or `k == 0` only the `beta` scaling applies.
///
/// # Errors
///
/// Returns [`BlasError::InvalidArgument`](crate::error::BlasError) on a bad
/// leading dimension or a short buffer, before writing anything.
#[allow(clippy::too_many_arguments)]
pub fn dsyr2k(
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
    let plan = validate::rank_update(
        uplo,
        trans,
        n,
        k,
        a.len(),
        lda,
        Some((b.len(), ldb)),
        c.len(),
        ldc,
    )
    .inspect_err(|err| log::debug!("dsyr2k: rejected: {err}"))?;

    if plan.degenerate {
        return Ok(());
    }
    log::trace!("dsyr2k: {plan:?} alpha={alpha} beta={beta}");

    if alpha == 0.0 || k == 0 {
        log::debug!("dsyr2k: empty product, applying beta={beta} only");
        scale_triangle(&plan, beta, c, ldc);
        return Ok(());
    }

    if plan.trans.is_transposed() {
        update_transposed(&plan, alpha, a, lda, b, ldb, beta, c, ldc);
    } else {
        update(&plan, alpha, a, lda, b, ldb, beta, c, ldc);
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn update(
    plan: &RankPlan,
    alpha: f64,
    a: &[f64],
    lda: usize,
    b: &[f64],
    ldb: usize,
    beta: f64,
    c: &mut [f64],
    ldc: usize,
) {
    let (n, k) = (plan.n, plan.k);

    for i in 0..n {
        let a_i = row(a, lda, i, k);
        let b_i = row(b, ldb, i, k);
        for j in plan.uplo.row_span(i, n) {
            let cross = ddot_unitary(a_i, row(b, ldb, j, k)) + ddot_unitary(b_i, row(a, lda, j, k));
            accumulate(&mut c[i * ldc + j], beta, alpha * cross);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn update_transposed(
    plan: &RankPlan,
    alpha: f64,
    a: &[f64],
    lda: usize,
    b: &[f64],
    ldb: usize,
    beta: f64,
    c: &mut [f64],
    ldc: usize,
) {
    let n = plan.n;

    for i in 0..n {
        let cols = plan.uplo.row_span(i, n);
        let c_i = segment_mut(c, ldc, i, cols.clone());
        dscal_beta(beta, c_i);

        for l in 0..plan.k {
            let tmp1 = alpha * b[l * ldb + i];
            let tmp2 = alpha * a[l * lda + i];
            if tmp1 != 0.0 {
                daxpy_unitary(tmp1, segment(a, lda, l, cols.clone()), c_i);
            }
            if tmp2 != 0.0 {
                daxpy_unitary(tmp2, segment(b, ldb, l, cols.clone()), c_i);
            }
        }
    }
}
