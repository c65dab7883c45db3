//! Shared fixtures for the Level-3 integration tests.
//!
//! Reference results are computed densely with `ndarray`. Operands are packed
//! into row-major buffers with a leading dimension wider than the logical
//! column count, the gap filled with [`PAD`] so stray writes are visible.
//! Triangles a kernel must not read are filled with NaN.

#![allow(dead_code)]

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simdly_blas3::{Diag, Side, Transpose, Uplo};

pub const PAD: f64 = -999.25;

pub const SIDES: [Side; 2] = [Side::Left, Side::Right];
pub const UPLOS: [Uplo; 2] = [Uplo::Upper, Uplo::Lower];
pub const TRANSPOSES: [Transpose; 3] = [Transpose::NoTrans, Transpose::Trans, Transpose::ConjTrans];
pub const DIAGS: [Diag; 2] = [Diag::NonUnit, Diag::Unit];

/// Extents exercising empty-free shapes with and without SIMD tails.
pub const SHAPES: [(usize, usize); 5] = [(1, 1), (2, 3), (4, 4), (5, 9), (11, 6)];

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Array2<f64> {
    Array2::from_shape_fn((rows, cols), |_| rng.random_range(-1.0..1.0))
}

/// Dense triangular matrix with zeros outside `uplo` and a diagonal kept
/// away from zero so solves stay well conditioned.
pub fn triangular_matrix(rng: &mut StdRng, n: usize, uplo: Uplo, diag: Diag) -> Array2<f64> {
    Array2::from_shape_fn((n, n), |(i, j)| {
        let stored = match uplo {
            Uplo::Upper => j > i,
            Uplo::Lower => j < i,
        };
        if i == j {
            match diag {
                Diag::Unit => 1.0,
                Diag::NonUnit => rng.random_range(2.0..3.0) * if rng.random_bool(0.5) { 1.0 } else { -1.0 },
            }
        } else if stored {
            rng.random_range(-0.5..0.5)
        } else {
            0.0
        }
    })
}

pub fn symmetric_matrix(rng: &mut StdRng, n: usize) -> Array2<f64> {
    let upper = random_matrix(rng, n, n);
    Array2::from_shape_fn((n, n), |(i, j)| if i <= j { upper[[i, j]] } else { upper[[j, i]] })
}

/// `op(a)` as a dense matrix.
pub fn op(a: &Array2<f64>, trans: Transpose) -> Array2<f64> {
    match trans {
        Transpose::NoTrans => a.clone(),
        Transpose::Trans | Transpose::ConjTrans => a.t().to_owned(),
    }
}

/// Packs `m` row-major with leading dimension `ld`, padding with [`PAD`].
pub fn pack(m: &Array2<f64>, ld: usize) -> Vec<f64> {
    let (rows, cols) = m.dim();
    assert!(ld >= cols);
    let mut buf = vec![PAD; rows * ld];
    for i in 0..rows {
        for j in 0..cols {
            buf[i * ld + j] = m[[i, j]];
        }
    }
    buf
}

/// Packs a square triangular or symmetric operand with the unstored
/// triangle set to NaN, plus the diagonal when it is implicit.
pub fn pack_poisoned(m: &Array2<f64>, ld: usize, uplo: Uplo, diag: Diag) -> Vec<f64> {
    let mut buf = pack(m, ld);
    let n = m.nrows();
    for i in 0..n {
        for j in 0..n {
            let unstored = match uplo {
                Uplo::Upper => j < i,
                Uplo::Lower => j > i,
            };
            if unstored || (i == j && diag == Diag::Unit) {
                buf[i * ld + j] = f64::NAN;
            }
        }
    }
    buf
}

pub fn unpack(buf: &[f64], rows: usize, cols: usize, ld: usize) -> Array2<f64> {
    Array2::from_shape_fn((rows, cols), |(i, j)| buf[i * ld + j])
}

pub fn in_triangle(uplo: Uplo, i: usize, j: usize) -> bool {
    match uplo {
        Uplo::Upper => j >= i,
        Uplo::Lower => j <= i,
    }
}

pub fn assert_close(actual: &Array2<f64>, expected: &Array2<f64>, tol: f64, context: &str) {
    assert_eq!(actual.dim(), expected.dim(), "{context}: shape mismatch");
    for ((idx, x), y) in actual.indexed_iter().zip(expected.iter()) {
        assert!(
            (x - y).abs() <= tol * (1.0 + y.abs()),
            "{context}: mismatch at {idx:?}: {x} != {y}"
        );
    }
}

/// Asserts every element between the logical columns and the leading
/// dimension still holds [`PAD`].
pub fn assert_padding_intact(buf: &[f64], rows: usize, cols: usize, ld: usize, context: &str) {
    for i in 0..rows {
        for j in cols..ld {
            assert_eq!(buf[i * ld + j], PAD, "{context}: padding overwritten at ({i}, {j})");
        }
    }
}
