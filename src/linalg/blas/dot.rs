use crate::linalg::blas::{required_len, start_index};

/// Computes the dot product of two contiguous slices.
///
/// Sums `x[i] * y[i]` over `x.len()` elements; `y` must be at least as long.
/// This is the inner product microkernel behind the transposed Right-side
/// triangular routines, the symmetric Right-side multiply and the rank
/// updates.
///
/// # Panics
///
/// Panics if `y.len() < x.len()`.
///
/// # Examples
///
/// ```
/// use simdly_blas3::linalg::blas::dot::ddot_unitary;
///
/// assert_eq!(ddot_unitary(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
/// ```
#[inline]
pub fn ddot_unitary(x: &[f64], y: &[f64]) -> f64 {
    assert!(
        y.len() >= x.len(),
        "ddot_unitary: y length {} is shorter than x length {}",
        y.len(),
        x.len()
    );

    #[cfg(avx2)]
    {
        // SAFETY: cfg(avx2) is only set by build.rs when the host CPU has AVX2,
        // and the length precondition was asserted above.
        unsafe { crate::simd::avx2::vector::dot(x, y) }
    }

    #[cfg(not(avx2))]
    {
        x.iter().zip(y.iter()).map(|(x_i, y_i)| x_i * y_i).sum()
    }
}

/// Computes the dot product of two strided double-precision vectors.
///
/// This mirrors the BLAS `ddot` routine. Returns `0.0` if `n` is 0.
/// The unit-stride case is forwarded to [`ddot_unitary`].
///
/// # Panics
///
/// Panics if `n > 1` and either increment is zero, or if either slice is too
/// short for `n` elements at its increment.
pub fn ddot(n: usize, dx: &[f64], incx: isize, dy: &[f64], incy: isize) -> f64 {
    if n == 0 {
        return 0.0;
    }

    if n > 1 && (incx == 0 || incy == 0) {
        panic!("ddot: incx and incy must be non-zero if n > 1.");
    }

    let req_dx_len = required_len(n, incx);
    let req_dy_len = required_len(n, incy);

    if dx.len() < req_dx_len {
        panic!(
            "ddot: dx slice length {} is insufficient for n={} and incx={}. Required: {}",
            dx.len(),
            n,
            incx,
            req_dx_len
        );
    }
    if dy.len() < req_dy_len {
        panic!(
            "ddot: dy slice length {} is insufficient for n={} and incy={}. Required: {}",
            dy.len(),
            n,
            incy,
            req_dy_len
        );
    }

    if incx == 1 && incy == 1 {
        return ddot_unitary(&dx[..n], &dy[..n]);
    }

    let mut ix = start_index(n, incx);
    let mut iy = start_index(n, incy);
    let mut dtemp = 0.0;

    for _ in 0..n {
        dtemp += dx[ix as usize] * dy[iy as usize];
        ix += incx;
        iy += incy;
    }

    dtemp
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_ddot_unitary_matches_scalar() {
        let x: Vec<f64> = (0..19).map(|i| (i as f64) * 0.25 - 2.0).collect();
        let y: Vec<f64> = (0..19).map(|i| 1.0 / (i as f64 + 1.0)).collect();
        let expected: f64 = x.iter().zip(&y).map(|(a, b)| a * b).sum();
        assert!((ddot_unitary(&x, &y) - expected).abs() < EPSILON);
    }

    #[test]
    fn test_ddot_unitary_uses_x_length() {
        assert_eq!(ddot_unitary(&[2.0], &[3.0, 100.0]), 6.0);
        assert_eq!(ddot_unitary(&[], &[3.0]), 0.0);
    }

    #[test]
    #[should_panic(expected = "ddot_unitary: y length 1 is shorter than x length 2")]
    fn test_ddot_unitary_short_y() {
        ddot_unitary(&[1.0, 2.0], &[1.0]);
    }

    #[test]
    fn test_ddot_n_zero() {
        assert_eq!(ddot(0, &[10.0, 20.0], 1, &[1.0, 2.0], 1), 0.0);
    }

    #[test]
    fn test_ddot_strided_positive_incs() {
        let dx = vec![1.0, 0.0, 2.0, 0.0, 3.0];
        let dy = vec![10.0, 0.0, 0.0, 5.0, 0.0, 0.0, 2.0];
        // (1*10) + (2*5) + (3*2)
        assert!((ddot(3, &dx, 2, &dy, 3) - 26.0).abs() < EPSILON);
    }

    #[test]
    fn test_ddot_strided_dx_rev_dy_fwd() {
        let dx = vec![10.0, 20.0, 30.0];
        let dy = vec![1.0, 2.0, 3.0];
        // (30*1) + (20*2) + (10*3)
        assert!((ddot(3, &dx, -1, &dy, 1) - 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_ok_inc_zero_n_one() {
        assert!((ddot(1, &[10.0], 0, &[1.0], 0) - 10.0).abs() < EPSILON);
    }

    #[test]
    #[should_panic(expected = "incx and incy must be non-zero if n > 1")]
    fn test_panic_incx_zero() {
        ddot(2, &[10.0, 20.0, 30.0], 0, &[1.0, 2.0, 3.0], 1);
    }
}
