//! Property tests for the scalar short-circuits, zero extents and the
//! undeclared-triangle contract.

mod common;

use common::*;
use proptest::prelude::*;
use simdly_blas3::{dsymm, dsyr2k, dsyrk, dtrmm, dtrsm, Diag, Side, Transpose, Uplo};

fn side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Left), Just(Side::Right)]
}

fn uplo() -> impl Strategy<Value = Uplo> {
    prop_oneof![Just(Uplo::Upper), Just(Uplo::Lower)]
}

fn transpose() -> impl Strategy<Value = Transpose> {
    prop_oneof![
        Just(Transpose::NoTrans),
        Just(Transpose::Trans),
        Just(Transpose::ConjTrans)
    ]
}

fn diag() -> impl Strategy<Value = Diag> {
    prop_oneof![Just(Diag::NonUnit), Just(Diag::Unit)]
}

/// Values that would poison any arithmetic they reach.
fn poison() -> impl Strategy<Value = f64> {
    prop_oneof![Just(f64::NAN), Just(f64::INFINITY), Just(f64::NEG_INFINITY)]
}

fn bits(buf: &[f64]) -> Vec<u64> {
    buf.iter().map(|x| x.to_bits()).collect()
}

/// Overwrites the triangle outside `uplo` (and the diagonal for a unit
/// operand) with `value`.
fn fill_unstored(buf: &mut [f64], n: usize, ld: usize, uplo: Uplo, diag: Diag, value: f64) {
    for i in 0..n {
        for j in 0..n {
            if !in_triangle(uplo, i, j) || (i == j && diag == Diag::Unit) {
                buf[i * ld + j] = value;
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// alpha == 0 and beta == 0 leave exact zeros, whatever the operands hold.
    #[test]
    fn prop_alpha_beta_zero_gives_exact_zero(
        m in 1usize..9,
        n in 1usize..9,
        side in side(),
        uplo in uplo(),
        trans in transpose(),
        diag in diag(),
        bad in poison(),
    ) {
        let k = if side == Side::Left { m } else { n };
        let a = vec![bad; k * k];
        let b = vec![bad; m * n];

        let mut out = vec![bad; m * n];
        dtrsm(side, uplo, trans, diag, m, n, 0.0, &a, k, &mut out, n).unwrap();
        prop_assert!(out.iter().all(|&x| x == 0.0));

        let mut out = vec![bad; m * n];
        dtrmm(side, uplo, trans, diag, m, n, 0.0, &a, k, &mut out, n).unwrap();
        prop_assert!(out.iter().all(|&x| x == 0.0));

        let mut out = vec![bad; m * n];
        dsymm(side, uplo, m, n, 0.0, &a, k, &b, n, 0.0, &mut out, n).unwrap();
        prop_assert!(out.iter().all(|&x| x == 0.0));

        let a_rank = vec![bad; m * n];
        let mut c = vec![bad; m * m];
        let lda = if trans == Transpose::NoTrans { n } else { m };
        dsyrk(uplo, trans, m, n, 0.0, &a_rank, lda, 0.0, &mut c, m).unwrap();
        for i in 0..m {
            for j in 0..m {
                if in_triangle(uplo, i, j) {
                    prop_assert_eq!(c[i * m + j], 0.0);
                } else {
                    prop_assert!(c[i * m + j].is_nan() || c[i * m + j].is_infinite());
                }
            }
        }

        let mut c = vec![bad; m * m];
        dsyr2k(uplo, trans, m, n, 0.0, &a_rank, lda, &a_rank, lda, 0.0, &mut c, m).unwrap();
        for i in 0..m {
            for j in uplo.row_span(i, m) {
                prop_assert_eq!(c[i * m + j], 0.0);
            }
        }
    }

    /// alpha == 0 and beta == 1 leave the output bit-for-bit unchanged.
    #[test]
    fn prop_alpha_zero_beta_one_is_identity(
        m in 1usize..9,
        n in 1usize..9,
        seed in any::<u64>(),
        side in side(),
        uplo in uplo(),
        trans in transpose(),
        bad in poison(),
    ) {
        let mut rng = rng(seed);
        let k = if side == Side::Left { m } else { n };
        let a = vec![bad; m.max(n) * m.max(n)];
        let b = vec![bad; m * n];

        let mut c = pack(&random_matrix(&mut rng, m, n), n);
        c[0] = bad;
        let before = bits(&c);
        dsymm(side, uplo, m, n, 0.0, &a, k, &b, n, 1.0, &mut c, n).unwrap();
        prop_assert_eq!(bits(&c), before);

        let mut c = pack(&random_matrix(&mut rng, m, m), m);
        let before = bits(&c);
        let lda = if trans == Transpose::NoTrans { n } else { m };
        dsyrk(uplo, trans, m, n, 0.0, &a, lda, 1.0, &mut c, m).unwrap();
        prop_assert_eq!(bits(&c), before.clone());
        dsyr2k(uplo, trans, m, n, 0.0, &a, lda, &a, lda, 1.0, &mut c, m).unwrap();
        prop_assert_eq!(bits(&c), before);
    }

    /// A zero extent is a no-op for every kernel.
    #[test]
    fn prop_zero_extent_is_noop(
        n in 0usize..6,
        side in side(),
        uplo in uplo(),
        trans in transpose(),
        diag in diag(),
        alpha in -2.0f64..2.0,
        beta in -2.0f64..2.0,
    ) {
        let mut out = vec![f64::NAN, 1.0, -3.5, 7.0];
        let before = bits(&out);
        let ld = n.max(1);

        dtrsm(side, uplo, trans, diag, 0, n, alpha, &[], ld, &mut out, ld).unwrap();
        dtrsm(side, uplo, trans, diag, n, 0, alpha, &[], ld, &mut out, ld).unwrap();
        dtrmm(side, uplo, trans, diag, 0, n, alpha, &[], ld, &mut out, ld).unwrap();
        dsymm(side, uplo, n, 0, alpha, &[], ld, &[], ld, beta, &mut out, ld).unwrap();
        dsyrk(uplo, trans, 0, n, alpha, &[], ld, beta, &mut out, ld).unwrap();
        dsyr2k(uplo, trans, 0, n, alpha, &[], ld, &[], ld, beta, &mut out, ld).unwrap();

        prop_assert_eq!(bits(&out), before);
    }

    /// Changing the unstored triangle of A never changes a triangular result.
    #[test]
    fn prop_triangular_ignores_unstored_triangle(
        m in 1usize..10,
        n in 1usize..10,
        seed in any::<u64>(),
        side in side(),
        uplo in uplo(),
        trans in transpose(),
        diag in diag(),
        junk in -1e6f64..1e6,
    ) {
        let mut rng = rng(seed);
        let k = if side == Side::Left { m } else { n };
        let a = pack(&triangular_matrix(&mut rng, k, uplo, diag), k);
        let b = pack(&random_matrix(&mut rng, m, n), n);

        let mut clean = a.clone();
        fill_unstored(&mut clean, k, k, uplo, diag, 0.0);
        let mut dirty = a;
        fill_unstored(&mut dirty, k, k, uplo, diag, junk);

        let mut solved_clean = b.clone();
        let mut solved_dirty = b.clone();
        dtrsm(side, uplo, trans, diag, m, n, 1.25, &clean, k, &mut solved_clean, n).unwrap();
        dtrsm(side, uplo, trans, diag, m, n, 1.25, &dirty, k, &mut solved_dirty, n).unwrap();
        prop_assert_eq!(bits(&solved_clean), bits(&solved_dirty));

        let mut product_clean = b.clone();
        let mut product_dirty = b;
        dtrmm(side, uplo, trans, diag, m, n, -0.5, &clean, k, &mut product_clean, n).unwrap();
        dtrmm(side, uplo, trans, diag, m, n, -0.5, &dirty, k, &mut product_dirty, n).unwrap();
        prop_assert_eq!(bits(&product_clean), bits(&product_dirty));
    }

    /// Changing the unstored triangle of a symmetric A never changes C.
    #[test]
    fn prop_symmetric_ignores_unstored_triangle(
        m in 1usize..10,
        n in 1usize..10,
        seed in any::<u64>(),
        side in side(),
        uplo in uplo(),
        bad in poison(),
    ) {
        let mut rng = rng(seed);
        let k = if side == Side::Left { m } else { n };
        let a = pack(&symmetric_matrix(&mut rng, k), k);
        let b = pack(&random_matrix(&mut rng, m, n), n);
        let c = pack(&random_matrix(&mut rng, m, n), n);

        let mut poisoned = a.clone();
        fill_unstored(&mut poisoned, k, k, uplo, Diag::NonUnit, bad);

        let mut c_clean = c.clone();
        let mut c_dirty = c;
        dsymm(side, uplo, m, n, 0.75, &a, k, &b, n, -1.0, &mut c_clean, n).unwrap();
        dsymm(side, uplo, m, n, 0.75, &poisoned, k, &b, n, -1.0, &mut c_dirty, n).unwrap();
        prop_assert_eq!(bits(&c_clean), bits(&c_dirty));
    }
}
