//! AVX2 4-lane f64 SIMD vector.
//!
//! `F64x4` wraps the `__m256d` register and tracks how many lanes are valid so
//! that row tails shorter than four elements can be loaded and stored with
//! masked moves instead of a scalar epilogue.
//!
//! All methods are `#[inline(always)]`; they are meant to be inlined into the
//! `#[target_feature(enable = "avx2")]` microkernels in [`super::vector`].

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, Mul};

use crate::simd::traits::{Alignment, SimdLoad, SimdStore};

/// AVX2 memory alignment requirement in bytes.
pub(crate) const AVX_ALIGNMENT: usize = 32;

/// Number of f64 elements in a 256-bit register.
pub(crate) const LANE_COUNT: usize = 4;

/// AVX2 SIMD vector containing 4 packed f64 values.
#[derive(Copy, Clone, Debug)]
pub struct F64x4 {
    /// Number of valid elements in the vector (1-4)
    pub size: usize,
    /// AVX2 256-bit register holding 4 packed f64 values
    pub elements: __m256d,
}

#[inline(always)]
unsafe fn partial_mask(size: usize) -> __m256i {
    match size {
        1 => _mm256_setr_epi64x(-1, 0, 0, 0),
        2 => _mm256_setr_epi64x(-1, -1, 0, 0),
        3 => _mm256_setr_epi64x(-1, -1, -1, 0),
        _ => unreachable!("Size must be < {LANE_COUNT}"),
    }
}

impl F64x4 {
    /// Broadcasts `value` to all four lanes.
    #[inline(always)]
    pub fn splat(value: f64) -> Self {
        Self {
            size: LANE_COUNT,
            elements: unsafe { _mm256_set1_pd(value) },
        }
    }

    /// All-zero vector.
    #[inline(always)]
    pub fn zeros() -> Self {
        Self {
            size: LANE_COUNT,
            elements: unsafe { _mm256_setzero_pd() },
        }
    }

    /// Sum of the valid lanes. Masked-off lanes are zero after a partial load,
    /// so all four lanes are added.
    #[inline(always)]
    pub fn reduce_sum(&self) -> f64 {
        let mut lanes = [0.0f64; LANE_COUNT];
        unsafe { _mm256_storeu_pd(lanes.as_mut_ptr(), self.elements) };
        (lanes[0] + lanes[1]) + (lanes[2] + lanes[3])
    }
}

impl Alignment<f64> for F64x4 {
    #[inline(always)]
    fn is_aligned(ptr: *const f64) -> bool {
        (ptr as usize) % AVX_ALIGNMENT == 0
    }
}

impl From<&[f64]> for F64x4 {
    /// Loads the first four elements of `slice`, or all of them with the
    /// remaining lanes zeroed when the slice is shorter.
    #[inline(always)]
    fn from(slice: &[f64]) -> Self {
        debug_assert!(!slice.is_empty(), "data pointer can't be NULL");

        match slice.len().cmp(&LANE_COUNT) {
            std::cmp::Ordering::Less => unsafe { Self::load_partial(slice.as_ptr(), slice.len()) },
            std::cmp::Ordering::Equal | std::cmp::Ordering::Greater => unsafe {
                Self::load(slice.as_ptr(), LANE_COUNT)
            },
        }
    }
}

impl SimdLoad<f64> for F64x4 {
    type Output = Self;

    #[inline(always)]
    unsafe fn load(ptr: *const f64, size: usize) -> Self::Output {
        debug_assert!(size == LANE_COUNT, "Size must be == {LANE_COUNT}");
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        match F64x4::is_aligned(ptr) {
            true => Self::load_aligned(ptr),
            false => Self::load_unaligned(ptr),
        }
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f64) -> Self::Output {
        Self {
            elements: _mm256_load_pd(ptr),
            size: LANE_COUNT,
        }
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f64) -> Self::Output {
        Self {
            elements: _mm256_loadu_pd(ptr),
            size: LANE_COUNT,
        }
    }

    #[inline(always)]
    unsafe fn load_partial(ptr: *const f64, size: usize) -> Self::Output {
        debug_assert!(size < LANE_COUNT, "Size must be < {LANE_COUNT}");
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        Self {
            elements: _mm256_maskload_pd(ptr, partial_mask(size)),
            size,
        }
    }
}

impl SimdStore<f64> for F64x4 {
    #[inline(always)]
    unsafe fn store_at(&self, ptr: *mut f64) {
        debug_assert!(self.size <= LANE_COUNT, "Size must be <= {LANE_COUNT}");
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        match self.size.cmp(&LANE_COUNT) {
            std::cmp::Ordering::Less => self.store_at_partial(ptr),
            std::cmp::Ordering::Equal => match F64x4::is_aligned(ptr) {
                true => self.store_aligned_at(ptr),
                false => self.store_unaligned_at(ptr),
            },
            std::cmp::Ordering::Greater => unreachable!("Size cannot exceed LANE_COUNT"),
        }
    }

    #[inline(always)]
    unsafe fn store_aligned_at(&self, ptr: *mut f64) {
        _mm256_store_pd(ptr, self.elements)
    }

    #[inline(always)]
    unsafe fn store_unaligned_at(&self, ptr: *mut f64) {
        _mm256_storeu_pd(ptr, self.elements)
    }

    #[inline(always)]
    unsafe fn store_at_partial(&self, ptr: *mut f64) {
        debug_assert!(self.size < LANE_COUNT, "Size must be < {LANE_COUNT}");
        _mm256_maskstore_pd(ptr, partial_mask(self.size), self.elements);
    }
}

impl Add for F64x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            size: self.size.min(rhs.size),
            elements: unsafe { _mm256_add_pd(self.elements, rhs.elements) },
        }
    }
}

impl Mul for F64x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            size: self.size.min(rhs.size),
            elements: unsafe { _mm256_mul_pd(self.elements, rhs.elements) },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract_elements(vec: &F64x4) -> [f64; LANE_COUNT] {
        let mut out = [0.0f64; LANE_COUNT];
        unsafe { vec.store_unaligned_at(out.as_mut_ptr()) };
        out
    }

    #[test]
    fn test_from_slice_full() {
        let data = [1.0, 2.0, 3.0, 4.0];
        let vec = F64x4::from(data.as_slice());
        assert_eq!(vec.size, LANE_COUNT);
        assert_eq!(extract_elements(&vec), data);
    }

    #[test]
    fn test_from_slice_partial_zero_fills() {
        let data = [1.5, -2.5, 3.5];
        let vec = F64x4::from(data.as_slice());
        assert_eq!(vec.size, 3);
        assert_eq!(extract_elements(&vec), [1.5, -2.5, 3.5, 0.0]);
    }

    #[test]
    fn test_partial_store_leaves_tail() {
        let vec = F64x4::splat(7.0);
        let mut out = [0.0, 0.0, -1.0, -1.0];
        let partial = F64x4 { size: 2, ..vec };
        unsafe { partial.store_at(out.as_mut_ptr()) };
        assert_eq!(out, [7.0, 7.0, -1.0, -1.0]);
    }

    #[test]
    fn test_arithmetic_and_reduce() {
        let a = F64x4::from([1.0, 2.0, 3.0, 4.0].as_slice());
        let b = F64x4::from([10.0, 20.0, 30.0, 40.0].as_slice());
        assert_eq!(extract_elements(&(a + b)), [11.0, 22.0, 33.0, 44.0]);
        assert_eq!((a * b).reduce_sum(), 300.0);
        assert_eq!(F64x4::zeros().reduce_sum(), 0.0);
    }
}
