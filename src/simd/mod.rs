//! Architecture-specific vector code.
//!
//! `build.rs` sets `cfg(avx2)` when the build host supports AVX2; otherwise
//! the microkernels in [`crate::linalg::blas`] use their portable scalar loops.

#[cfg(avx2)]
pub mod avx2;

pub mod traits;
