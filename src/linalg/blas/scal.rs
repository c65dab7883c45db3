/// Scales a contiguous slice in place: `x[i] *= alpha`.
///
/// Used by the triangular routines to apply `alpha`, the diagonal and the
/// reciprocal pivot to whole rows of the output.
///
/// # Examples
///
/// ```
/// use simdly_blas3::linalg::blas::scal::dscal_unitary;
///
/// let mut x = [1.0, -2.0, 4.0];
/// dscal_unitary(0.5, &mut x);
/// assert_eq!(x, [0.5, -1.0, 2.0]);
/// ```
#[inline]
pub fn dscal_unitary(alpha: f64, x: &mut [f64]) {
    #[cfg(avx2)]
    {
        // SAFETY: cfg(avx2) is only set by build.rs when the host CPU has AVX2.
        unsafe { crate::simd::avx2::vector::scal(alpha, x) }
    }

    #[cfg(not(avx2))]
    {
        x.iter_mut().for_each(|val| *val *= alpha);
    }
}

/// Overwrites a contiguous slice with exact zeros.
///
/// Zero-filling never reads the previous contents, so NaN or Inf already in
/// the output cannot survive an `alpha == 0` / `beta == 0` short-circuit.
#[inline]
pub fn dzero_unitary(x: &mut [f64]) {
    x.fill(0.0);
}

/// Applies the accumulation scale `beta` to an output slice.
///
/// `beta == 0` zero-fills without reading, `beta == 1` leaves the slice
/// untouched, anything else scales in place.
#[inline]
pub fn dscal_beta(beta: f64, x: &mut [f64]) {
    if beta == 0.0 {
        dzero_unitary(x);
    } else if beta != 1.0 {
        dscal_unitary(beta, x);
    }
}
