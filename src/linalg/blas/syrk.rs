use crate::error::Result;
use crate::linalg::blas::axpy::daxpy_unitary;
use crate::linalg::blas::dot::ddot_unitary;
use crate::linalg::blas::flags::{Transpose, Uplo};
use crate::linalg::blas::matrix::{row, segment, segment_mut};
use crate::linalg::blas::scal::dscal_beta;
use crate::linalg::blas::validate::{self, RankPlan};

/// Performs a symmetric rank-k update.
///
/// Computes
///
/// ```text
/// C = alpha * A * Aᵀ + beta * C    if trans == NoTrans
/// C = alpha * Aᵀ * A + beta * C    otherwise
/// ```
///
/// where `C` is an `n x n` symmetric matrix and `A` is `n x k` (`NoTrans`)
/// or `k x n`. Only the `uplo` triangle of `c` is read or written; the other
/// triangle is left exactly as it was.
///
/// `beta == 0` overwrites the triangle without reading it. With
/// `alpha == 0` or `k == 0` only the `beta` scaling applies and `a` is not
/// read.
///
/// # Errors
///
/// Returns [`BlasError::InvalidArgument`](crate::error::BlasError) on a bad
/// leading dimension or a short buffer, before writing anything.
///
/// # Examples
///
/// ```
/// use simdly_blas3::linalg::blas::{dsyrk, Transpose, Uplo};
///
/// let a = [1.0, 2.0, 3.0, 4.0];
/// let mut c = [0.0, 0.0, -1.0, 0.0];
/// dsyrk(Uplo::Upper, Transpose::NoTrans, 2, 2, 1.0, &a, 2, 0.0, &mut c, 2).unwrap();
/// assert_eq!(c, [5.0, 11.0, -1.0, 25.0]);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn dsyrk(
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
    let plan = validate::rank_update(uplo, trans, n, k, a.len(), lda, None, c.len(), ldc)
        .inspect_err(|err| log::debug!("dsyrk: rejected: {err}"))?;

    if plan.degenerate {
        return Ok(());
    }
    log::trace!("dsyrk: {plan:?} alpha={alpha} beta={beta}");

    if alpha == 0.0 || k == 0 {
        log::debug!("dsyrk: empty product, applying beta={beta} only");
        scale_triangle(&plan, beta, c, ldc);
        return Ok(());
    }

    if plan.trans.is_transposed() {
        update_transposed(&plan, alpha, a, lda, beta, c, ldc);
    } else {
        update(&plan, alpha, a, lda, beta, c, ldc);
    }

    Ok(())
}

/// Applies `beta` to the declared triangle of C.
pub(crate) fn scale_triangle(plan: &RankPlan, beta: f64, c: &mut [f64], ldc: usize) {
    if beta == 1.0 {
        return;
    }
    for i in 0..plan.n {
        dscal_beta(beta, segment_mut(c, ldc, i, plan.uplo.row_span(i, plan.n)));
    }
}

/// `c_ij = beta * c_ij + value`, without reading `c_ij` when `beta == 0`.
#[inline(always)]
pub(crate) fn accumulate(c_ij: &mut f64, beta: f64, value: f64) {
    *c_ij = if beta == 0.0 { value } else { beta * *c_ij + value };
}

fn update(plan: &RankPlan, alpha: f64, a: &[f64], lda: usize, beta: f64, c: &mut [f64], ldc: usize) {
    let (n, k) = (plan.n, plan.k);

    for i in 0..n {
        let a_i = row(a, lda, i, k);
        for j in plan.uplo.row_span(i, n) {
            let value = alpha * ddot_unitary(a_i, row(a, lda, j, k));
            accumulate(&mut c[i * ldc + j], beta, value);
        }
    }
}

fn update_transposed(
    plan: &RankPlan,
    alpha: f64,
    a: &[f64],
    lda: usize,
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
            let tmp = alpha * a[l * lda + i];
            if tmp != 0.0 {
                daxpy_unitary(tmp, segment(a, lda, l, cols.clone()), c_i);
            }
        }
    }
}
