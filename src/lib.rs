//! Row-major double-precision BLAS Level-3 kernels.
//!
//! ```
//! use simdly_blas3::{dsyrk, Transpose, Uplo};
//!
//! let a = [1.0, 2.0, 3.0, 4.0];
//! let mut c = [0.0; 4];
//! dsyrk(Uplo::Lower, Transpose::NoTrans, 2, 2, 1.0, &a, 2, 0.0, &mut c, 2)?;
//! assert_eq!(c, [5.0, 0.0, 11.0, 25.0]);
//! # Ok::<(), simdly_blas3::BlasError>(())
//! ```

pub mod cblas;
pub mod error;
pub mod linalg;
pub mod simd;

pub use error::{BlasError, InvalidArgument, Operand, Result};
pub use linalg::blas::{
    dsymm, dsyr2k, dsyrk, dtrmm, dtrsm, Diag, Float64Level3, Implementation, Side, Transpose,
    Uplo,
};
