/* ************************************************************************ **
** This file is part of trexc-shim, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Layout, Scalar};

/// Case-insensitive comparison of LAPACK option characters.
#[inline]
pub fn lsame(a: u8, b: u8) -> bool
{ a.eq_ignore_ascii_case(&b) }

// LAPACK dimensions arrive as signed ints; negative means "no elements" here
// and is left for the kernel to complain about.
#[inline]
fn extent(x: i32) -> usize
{ x.max(0) as usize }

/// Transposes an `m x n` matrix stored in `layout` into the opposite layout.
///
/// `input` has leading dimension `ldin` in `layout`, and `output` receives
/// the same logical matrix with leading dimension `ldout` in
/// `layout.transposed()`. Row/column counts are clipped to the leading
/// dimensions, so a too-small `ld` copies a truncated matrix rather than
/// walking off the end of a row.
///
/// # Panics
///
/// Panics if either slice is shorter than its declared geometry requires.
pub fn ge_trans<T: Copy>(
    layout: Layout,
    m: i32,
    n: i32,
    input: &[T],
    ldin: i32,
    output: &mut [T],
    ldout: i32,
) {
    // (x, y) are the (minor, major) extents of the *output*.
    let (x, y) = match layout {
        Layout::ColMajor => (extent(n), extent(m)),
        Layout::RowMajor => (extent(m), extent(n)),
    };
    let (ldin, ldout) = (extent(ldin), extent(ldout));

    for i in 0..y.min(ldin) {
        for j in 0..x.min(ldout) {
            output[i * ldout + j] = input[j * ldin + i];
        }
    }
}

/// Reports whether any logical element of an `m x n` matrix is NaN.
///
/// Padding between the matrix and its leading dimension is never read.
pub fn ge_nancheck<T: Scalar>(layout: Layout, m: i32, n: i32, a: &[T], lda: i32) -> bool {
    let (m, n, lda) = (extent(m), extent(n), extent(lda));
    match layout {
        Layout::ColMajor => {
            (0..n).any(|j| (0..m.min(lda)).any(|i| a[i + j * lda].is_nan()))
        },
        Layout::RowMajor => {
            (0..m).any(|i| (0..n.min(lda)).any(|j| a[i * lda + j].is_nan()))
        },
    }
}
