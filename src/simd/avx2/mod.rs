//! AVX2 SIMD implementations for 256-bit `f64` operations.
//!
//! Only compiled when the build system detects AVX2 on the build host. The
//! microkernels in [`vector`] carry `#[target_feature(enable = "avx2")]`, so
//! they are sound to call whenever this module exists.

pub mod f64x4;

pub(crate) mod vector;
