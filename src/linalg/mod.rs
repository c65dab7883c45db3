pub mod blas;
