//! AVX2 unit-stride vector microkernels.
//!
//! These are the inner loops of every Level-3 kernel: scaled accumulate,
//! dot product and in-place scaling over contiguous `f64` slices. Each walks
//! its slices in [`LANE_COUNT`]-wide chunks and finishes the tail with a
//! masked partial load/store.

use crate::simd::avx2::f64x4::{F64x4, LANE_COUNT};
use crate::simd::traits::SimdStore;

/// `y[i] += alpha * x[i]` over `y.len()` elements.
///
/// # Safety
///
/// The CPU must support AVX2 and `x.len() >= y.len()`.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn axpy(alpha: f64, x: &[f64], y: &mut [f64]) {
    debug_assert!(x.len() >= y.len());

    let scale = F64x4::splat(alpha);

    for (idx, y_chunk) in y.chunks_mut(LANE_COUNT).enumerate() {
        let i = idx * LANE_COUNT;
        let x_chunk = F64x4::from(&x[i..i + y_chunk.len()]);
        let y_vec = F64x4::from(&*y_chunk);
        let sum = y_vec + scale * x_chunk;

        sum.store_at(y_chunk.as_mut_ptr());
    }
}

/// `sum(x[i] * y[i])` over `x.len()` elements.
///
/// # Safety
///
/// The CPU must support AVX2 and `y.len() >= x.len()`.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn dot(x: &[f64], y: &[f64]) -> f64 {
    debug_assert!(y.len() >= x.len());

    let mut acc = F64x4::zeros();

    for (idx, x_chunk) in x.chunks(LANE_COUNT).enumerate() {
        let i = idx * LANE_COUNT;
        let x_vec = F64x4::from(x_chunk);
        let y_vec = F64x4::from(&y[i..i + x_chunk.len()]);
        // Keep the accumulator full width; partial lanes are zero.
        acc = F64x4 {
            size: LANE_COUNT,
            ..(acc + x_vec * y_vec)
        };
    }

    acc.reduce_sum()
}

/// `x[i] *= alpha` over `x.len()` elements.
///
/// # Safety
///
/// The CPU must support AVX2.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn scal(alpha: f64, x: &mut [f64]) {
    let scale = F64x4::splat(alpha);

    for x_chunk in x.chunks_mut(LANE_COUNT) {
        let product = F64x4::from(&*x_chunk) * scale;
        product.store_at(x_chunk.as_mut_ptr());
    }
}
