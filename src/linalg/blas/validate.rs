//! Argument validation and plan decoding for the Level-3 routines.
//!
//! Every check runs before a kernel writes anything. A successful check
//! returns a plan: the decoded flags, the extents, the sweep direction the
//! loops must follow, and whether the call is a zero-extent no-op.
//!
//! Leading dimensions are always checked. Buffer lengths are only checked
//! when the call will touch the buffers, so a zero-extent call accepts
//! empty slices.

use crate::error::{Operand, Result};
use crate::linalg::blas::flags::{Diag, Side, Sweep, Transpose, Uplo};
use crate::linalg::blas::matrix::MatrixShape;

/// Which triangular routine a plan is decoded for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TriangularOp {
    Solve,
    Multiply,
}

/// Decoded call of `dtrsm` or `dtrmm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TriangularPlan {
    pub side: Side,
    pub uplo: Uplo,
    pub trans: Transpose,
    pub diag: Diag,
    pub m: usize,
    pub n: usize,
    /// Order in which rows (Left) or columns (Right) of B are resolved.
    pub sweep: Sweep,
    pub degenerate: bool,
}

/// Decoded call of `dsymm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SymmetricPlan {
    pub side: Side,
    pub uplo: Uplo,
    pub m: usize,
    pub n: usize,
    pub degenerate: bool,
}

/// Decoded call of `dsyrk` or `dsyr2k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RankPlan {
    pub uplo: Uplo,
    pub trans: Transpose,
    pub n: usize,
    pub k: usize,
    pub degenerate: bool,
}

/// Direction a triangular solve walks B.
///
/// Left side: forward when `op(A)` is lower, so row `i` only depends on rows
/// above it. Right side: forward when `op(A)` is upper, so column `j` only
/// depends on columns before it. A multiply needs original values where a
/// solve needs resolved ones, so it walks the other way.
fn triangular_sweep(op: TriangularOp, side: Side, uplo: Uplo, trans: Transpose) -> Sweep {
    let op_uplo = uplo.apply(trans);
    let solve = match (side, op_uplo) {
        (Side::Left, Uplo::Lower) | (Side::Right, Uplo::Upper) => Sweep::Forward,
        (Side::Left, Uplo::Upper) | (Side::Right, Uplo::Lower) => Sweep::Backward,
    };
    match op {
        TriangularOp::Solve => solve,
        TriangularOp::Multiply => solve.reverse(),
    }
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn triangular(
    op: TriangularOp,
    side: Side,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    m: usize,
    n: usize,
    a_len: usize,
    lda: usize,
    b_len: usize,
    ldb: usize,
) -> Result<TriangularPlan> {
    let b_shape = MatrixShape::new(m, n, ldb);
    let ka = match side {
        Side::Left => m,
        Side::Right => n,
    };
    let a_shape = MatrixShape::new(ka, ka, lda);

    b_shape.check_ld(Operand::B)?;
    a_shape.check_ld(Operand::A)?;

    let degenerate = m == 0 || n == 0;
    if !degenerate {
        a_shape.check_len(Operand::A, a_len)?;
        b_shape.check_len(Operand::B, b_len)?;
    }

    Ok(TriangularPlan {
        side,
        uplo,
        trans,
        diag,
        m,
        n,
        sweep: triangular_sweep(op, side, uplo, trans),
        degenerate,
    })
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn symmetric(
    side: Side,
    uplo: Uplo,
    m: usize,
    n: usize,
    a_len: usize,
    lda: usize,
    b_len: usize,
    ldb: usize,
    c_len: usize,
    ldc: usize,
) -> Result<SymmetricPlan> {
    let ka = match side {
        Side::Left => m,
        Side::Right => n,
    };
    let a_shape = MatrixShape::new(ka, ka, lda);
    let b_shape = MatrixShape::new(m, n, ldb);
    let c_shape = MatrixShape::new(m, n, ldc);

    a_shape.check_ld(Operand::A)?;
    b_shape.check_ld(Operand::B)?;
    c_shape.check_ld(Operand::C)?;

    let degenerate = m == 0 || n == 0;
    if !degenerate {
        a_shape.check_len(Operand::A, a_len)?;
        b_shape.check_len(Operand::B, b_len)?;
        c_shape.check_len(Operand::C, c_len)?;
    }

    Ok(SymmetricPlan {
        side,
        uplo,
        m,
        n,
        degenerate,
    })
}

/// Validates a rank-k (`b == None`) or rank-2k update. `b` carries the
/// length and leading dimension of the second operand.
#[allow(clippy::too_many_arguments)]
pub(crate) fn rank_update(
    uplo: Uplo,
    trans: Transpose,
    n: usize,
    k: usize,
    a_len: usize,
    lda: usize,
    b: Option<(usize, usize)>,
    c_len: usize,
    ldc: usize,
) -> Result<RankPlan> {
    let c_shape = MatrixShape::new(n, n, ldc);
    let operand_shape = |ld| match trans {
        Transpose::NoTrans => MatrixShape::new(n, k, ld),
        Transpose::Trans | Transpose::ConjTrans => MatrixShape::new(k, n, ld),
    };
    let a_shape = operand_shape(lda);

    c_shape.check_ld(Operand::C)?;
    a_shape.check_ld(Operand::A)?;
    if let Some((_, ldb)) = b {
        operand_shape(ldb).check_ld(Operand::B)?;
    }

    let degenerate = n == 0;
    if !degenerate {
        a_shape.check_len(Operand::A, a_len)?;
        if let Some((b_len, ldb)) = b {
            operand_shape(ldb).check_len(Operand::B, b_len)?;
        }
        c_shape.check_len(Operand::C, c_len)?;
    }

    Ok(RankPlan {
        uplo,
        trans,
        n,
        k,
        degenerate,
    })
}
