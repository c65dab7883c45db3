use crate::linalg::blas::{required_len, start_index};

/// Computes `y[i] += alpha * x[i]` over contiguous slices.
///
/// This is the scaled-accumulate microkernel the Level-3 routines run their
/// row updates through. It processes `y.len()` elements; `x` must be at least
/// as long. With AVX2 available it runs four lanes at a time.
///
/// # Panics
///
/// Panics if `x.len() < y.len()`.
///
/// # Examples
///
/// ```
/// use simdly_blas3::linalg::blas::axpy::daxpy_unitary;
///
/// let x = [1.0, 2.0, 3.0];
/// let mut y = [10.0, 10.0, 10.0];
/// daxpy_unitary(2.0, &x, &mut y);
/// assert_eq!(y, [12.0, 14.0, 16.0]);
/// ```
#[inline]
pub fn daxpy_unitary(alpha: f64, x: &[f64], y: &mut [f64]) {
    assert!(
        x.len() >= y.len(),
        "daxpy_unitary: x length {} is shorter than y length {}",
        x.len(),
        y.len()
    );

    #[cfg(avx2)]
    {
        // SAFETY: cfg(avx2) is only set by build.rs when the host CPU has AVX2,
        // and the length precondition was asserted above.
        unsafe { crate::simd::avx2::vector::axpy(alpha, x, y) }
    }

    #[cfg(not(avx2))]
    {
        y.iter_mut()
            .zip(x.iter())
            .for_each(|(y_i, x_i)| *y_i += alpha * x_i);
    }
}

/// Computes `dy = da * dx + dy` over `n` strided elements.
///
/// This mirrors the BLAS `daxpy` routine. Negative increments walk the
/// vector backward from its `n`-th element. The unit-stride case is
/// forwarded to [`daxpy_unitary`].
///
/// # Panics
///
/// Panics if `n > 1` and either increment is zero, or if either slice is too
/// short for `n` elements at its increment.
pub fn daxpy(n: usize, da: f64, dx: &[f64], incx: isize, dy: &mut [f64], incy: isize) {
    if n == 0 || da == 0.0 {
        return;
    }

    if n > 1 && (incx == 0 || incy == 0) {
        panic!("daxpy: incx and incy must be non-zero if n > 1.");
    }

    let req_dx_len = required_len(n, incx);
    let req_dy_len = required_len(n, incy);

    if dx.len() < req_dx_len {
        panic!(
            "daxpy: dx slice length {} is insufficient for n={} and incx={}. Required: {}",
            dx.len(),
            n,
            incx,
            req_dx_len
        );
    }
    if dy.len() < req_dy_len {
        panic!(
            "daxpy: dy slice length {} is insufficient for n={} and incy={}. Required: {}",
            dy.len(),
            n,
            incy,
            req_dy_len
        );
    }

    if incx == 1 && incy == 1 {
        daxpy_unitary(da, &dx[..n], &mut dy[..n]);
        return;
    }

    let mut ix = start_index(n, incx);
    let mut iy = start_index(n, incy);

    for _ in 0..n {
        dy[iy as usize] += da * dx[ix as usize];
        ix += incx;
        iy += incy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn assert_f64_vec_eq(a: &[f64], b: &[f64], tol: f64) {
        assert_eq!(a.len(), b.len(), "Vector lengths differ");
        for (i, (val_a, val_b)) in a.iter().zip(b.iter()).enumerate() {
            assert!(
                (val_a - val_b).abs() < tol,
                "Mismatch at index {i}: {val_a} != {val_b} (within tolerance {tol})"
            );
        }
    }

    #[test]
    fn test_daxpy_unitary_long_row() {
        let x: Vec<f64> = (0..37).map(|i| i as f64).collect();
        let mut y: Vec<f64> = (0..37).map(|i| -(i as f64)).collect();
        daxpy_unitary(3.0, &x, &mut y);
        let expected: Vec<f64> = (0..37).map(|i| 2.0 * i as f64).collect();
        assert_f64_vec_eq(&y, &expected, EPSILON);
    }

    #[test]
    fn test_daxpy_unitary_uses_y_length() {
        let x = [1.0, 1.0, 1.0, 1.0];
        let mut y = [0.0, 0.0];
        daxpy_unitary(-1.0, &x, &mut y);
        assert_eq!(y, [-1.0, -1.0]);
    }

    #[test]
    fn test_daxpy_unitary_empty() {
        let mut y: [f64; 0] = [];
        daxpy_unitary(5.0, &[], &mut y);
    }

    #[test]
    #[should_panic(expected = "daxpy_unitary: x length 1 is shorter than y length 2")]
    fn test_daxpy_unitary_short_x() {
        let mut y = [0.0, 0.0];
        daxpy_unitary(1.0, &[1.0], &mut y);
    }

    #[test]
    fn test_daxpy_da_zero_skips_x() {
        let mut dy = vec![1.0, 2.0, 3.0];
        let dx = vec![f64::NAN, f64::INFINITY, 1.0];
        daxpy(3, 0.0, &dx, 1, &mut dy, 1);
        assert_eq!(dy, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_daxpy_contiguous_prefix() {
        let mut dy = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let dx = vec![10.0, 20.0, 30.0, 40.0, 50.0];
        daxpy(3, 0.5, &dx, 1, &mut dy, 1);
        assert_f64_vec_eq(&dy, &[6.0, 12.0, 18.0, 4.0, 5.0], EPSILON);
    }

    #[test]
    fn test_daxpy_strided_both_rev() {
        // dy elements used: dy[4], dy[2], dy[0]; dx elements used: dx[2], dx[1], dx[0]
        let mut dy = vec![1.0, 0.0, 2.0, 0.0, 3.0];
        let dx = vec![10.0, 20.0, 30.0];
        daxpy(3, 1.0, &dx, -1, &mut dy, -2);
        assert_f64_vec_eq(&dy, &[11.0, 0.0, 22.0, 0.0, 33.0], EPSILON);
    }

    #[test]
    #[should_panic(expected = "dx slice length 3 is insufficient for n=3 and incx=2. Required: 5")]
    fn test_panic_dx_too_short_strided() {
        let mut dy = vec![1.0, 0.0, 2.0, 0.0, 3.0];
        let dx = vec![10.0, 20.0, 30.0];
        daxpy(3, 1.0, &dx, 2, &mut dy, 1);
    }

    #[test]
    #[should_panic(expected = "incx and incy must be non-zero if n > 1")]
    fn test_panic_incy_zero() {
        let mut dy = vec![1.0, 2.0, 3.0];
        let dx = vec![10.0, 20.0, 30.0];
        daxpy(2, 1.0, &dx, 1, &mut dy, 0);
    }
}
