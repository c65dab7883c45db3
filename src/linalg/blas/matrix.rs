//! Row-major matrix views over borrowed flat buffers.
//!
//! A view is just a logical `rows x cols` extent plus the leading dimension
//! (stride between consecutive rows). The kernels borrow the caller's buffer
//! for one call and never own it.

use std::ops::Range;

use crate::error::{bad_ld, too_short, Operand, Result};

/// Logical extent of a row-major operand inside its backing buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixShape {
    pub rows: usize,
    pub cols: usize,
    pub ld: usize,
}

impl MatrixShape {
    pub fn new(rows: usize, cols: usize, ld: usize) -> Self {
        Self { rows, cols, ld }
    }

    /// Elements a buffer needs to back this view: `(rows-1)*ld + cols`, or 0
    /// when either extent is 0. `None` when the count overflows `usize`.
    pub fn required_len(&self) -> Option<usize> {
        if self.rows == 0 || self.cols == 0 {
            return Some(0);
        }
        (self.rows - 1)
            .checked_mul(self.ld)
            .and_then(|offset| offset.checked_add(self.cols))
    }

    /// Checks the leading dimension covers every stored column.
    pub(crate) fn check_ld(&self, operand: Operand) -> Result<()> {
        if self.ld < self.cols {
            return Err(bad_ld(operand, self.ld as isize, self.cols));
        }
        Ok(())
    }

    /// Checks a buffer of `len` elements can back this view.
    ///
    /// An extent too large to address is reported as needing `usize::MAX`
    /// elements, which no slice of `f64` can hold.
    pub(crate) fn check_len(&self, operand: Operand, len: usize) -> Result<()> {
        let required = self.required_len().unwrap_or(usize::MAX);
        if len < required {
            return Err(too_short(operand, len, required));
        }
        Ok(())
    }
}

/// Row `i` of a row-major buffer, `len` elements long.
#[inline(always)]
pub(crate) fn row(buf: &[f64], ld: usize, i: usize, len: usize) -> &[f64] {
    &buf[i * ld..i * ld + len]
}

/// Mutable row `i` of a row-major buffer, `len` elements long.
#[inline(always)]
pub(crate) fn row_mut(buf: &mut [f64], ld: usize, i: usize, len: usize) -> &mut [f64] {
    &mut buf[i * ld..i * ld + len]
}

/// Columns `cols` of row `i`.
#[inline(always)]
pub(crate) fn segment(buf: &[f64], ld: usize, i: usize, cols: Range<usize>) -> &[f64] {
    &buf[i * ld + cols.start..i * ld + cols.end]
}

/// Mutable columns `cols` of row `i`.
#[inline(always)]
pub(crate) fn segment_mut(buf: &mut [f64], ld: usize, i: usize, cols: Range<usize>) -> &mut [f64] {
    &mut buf[i * ld + cols.start..i * ld + cols.end]
}

/// Splits out row `dst` for writing and a distinct row `src` for reading
/// from the same buffer.
///
/// This is how the in-place triangular routines fold one row of B into
/// another without a temporary copy.
#[inline(always)]
pub(crate) fn row_pair_mut(
    buf: &mut [f64],
    ld: usize,
    len: usize,
    dst: usize,
    src: usize,
) -> (&mut [f64], &[f64]) {
    debug_assert_ne!(dst, src, "row_pair_mut: rows must differ");

    if dst < src {
        let (head, tail) = buf.split_at_mut(src * ld);
        (&mut head[dst * ld..dst * ld + len], &tail[..len])
    } else {
        let (head, tail) = buf.split_at_mut(dst * ld);
        (&mut tail[..len], &head[src * ld..src * ld + len])
    }
}
