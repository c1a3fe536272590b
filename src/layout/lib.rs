/* ************************************************************************ **
** This file is part of trexc-shim, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Storage-order vocabulary shared by the trexc-shim crates.
//!
//! Everything here works on flat slices with an explicit leading dimension,
//! the way LAPACKE does, so that it can sit directly between a caller's
//! buffers and a column-major Fortran kernel.

#[macro_use]
extern crate failure;
extern crate num_traits;

#[macro_use]
mod c_enum_macros;

pub use crate::scalar::Scalar;
mod scalar;

pub use crate::view::{MatrixView, ViewError, required_len};
mod view;

pub use crate::trans::{ge_trans, ge_nancheck, lsame};
mod trans;

pub const LAPACK_ROW_MAJOR: i32 = 101;
pub const LAPACK_COL_MAJOR: i32 = 102;

c_enums!{
    /// Storage order of a dense matrix.
    ///
    /// The discriminants are the CBLAS/LAPACKE codes, so `layout as i32`
    /// is what a raw entry point expects.
    [pub] enum Layout {
        RowMajor = 101,
        ColMajor = 102,
    }
}

impl Layout {
    /// The other storage order.
    pub fn transposed(self) -> Layout
    { match self {
        Layout::RowMajor => Layout::ColMajor,
        Layout::ColMajor => Layout::RowMajor,
    }}

    /// Offset of element `(i, j)` in a buffer with leading dimension `ld`.
    #[inline(always)]
    pub fn index(self, i: usize, j: usize, ld: usize) -> usize
    { match self {
        Layout::RowMajor => i * ld + j,
        Layout::ColMajor => j * ld + i,
    }}

    /// The dimension that the leading dimension must cover.
    #[inline(always)]
    pub fn minor_dim(self, rows: usize, cols: usize) -> usize
    { match self {
        Layout::RowMajor => cols,
        Layout::ColMajor => rows,
    }}
}

impl From<Layout> for i32 {
    fn from(layout: Layout) -> i32 { layout as i32 }
}
