/* ************************************************************************ **
** This file is part of trexc-shim, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Shim, TrexcKernel, ScratchAlloc, Xerbla, TrexcError, routine_name};

use ::ndarray::{Array2, ShapeBuilder};
use ::std::convert::TryFrom;
use ::trexc_shim_layout::{Layout, Scalar};

const ARG_IFST: i32 = 8;
const ARG_ILST: i32 = 9;

// The order in which `a` is stored contiguously without padding, if any.
fn contiguous_layout<T>(a: &Array2<T>) -> Option<Layout> {
    if a.is_standard_layout() {
        Some(Layout::RowMajor)
    } else if a.t().is_standard_layout() {
        Some(Layout::ColMajor)
    } else {
        None
    }
}

// Rearranges `a` in memory (the logical matrix is unchanged) so that it is
// contiguous in `layout`.
fn make_contiguous<T: Clone>(a: &mut Array2<T>, layout: Layout) {
    if contiguous_layout(a) == Some(layout) {
        return;
    }
    let dim = a.raw_dim();
    let rearranged = match layout {
        Layout::RowMajor => Array2::from_shape_vec(dim, a.iter().cloned().collect()),
        Layout::ColMajor => Array2::from_shape_vec(dim.f(), a.t().iter().cloned().collect()),
    };
    *a = rearranged.expect("(BUG) element count doesn't match shape?!");
}

impl<K, A: ScratchAlloc, X: Xerbla> Shim<K, A, X> {
    /// Moves the diagonal block of the Schur form `t` that starts at row
    /// `ifst` so that it starts at row `ilst`, updating the Schur vectors
    /// in `q` if given.  Indices are 0-based.
    ///
    /// On success, returns the row where the block ended up, which can
    /// differ from `ilst` by one when 2x2 blocks are involved.
    ///
    /// Arrays stored in C order go through the row-major path and arrays in
    /// Fortran order go straight to the kernel.  Anything else (and a `q`
    /// whose order differs from `t`'s) is rearranged in memory first.
    pub fn reorder_schur<T: Scalar>(
        &self,
        t: &mut Array2<T>,
        q: Option<&mut Array2<T>>,
        ifst: usize,
        ilst: usize,
    ) -> Result<usize, TrexcError>
    where K: TrexcKernel<T>,
    {
        let (rows, cols) = t.dim();
        let q_dim = q.as_ref().map(|q| q.dim());
        let square = rows == cols && q_dim.map_or(true, |d| d == (rows, cols));
        let n = match (square, i32::try_from(rows)) {
            (true, Ok(n)) => n,
            _ => return Err(TrexcError::Shape { t: (rows, cols), q: q_dim }),
        };

        // the kernel skips its index checks when n = 0, so do them here
        let bad_index = |position| TrexcError::IllegalArgument {
            routine: routine_name::<T>("trexc"),
            position,
        };
        if ifst >= rows { return Err(bad_index(ARG_IFST)); }
        if ilst >= rows { return Err(bad_index(ARG_ILST)); }

        let layout = contiguous_layout(t).unwrap_or(Layout::RowMajor);
        make_contiguous(t, layout);

        let ld = n.max(1);
        let to_kernel_index = |i: usize| {
            i.checked_add(1).and_then(|i| i32::try_from(i).ok()).unwrap_or(i32::max_value())
        };
        let (mut ifst, mut ilst) = (to_kernel_index(ifst), to_kernel_index(ilst));

        let t_data = t.as_slice_memory_order_mut().expect("(BUG) not contiguous!!");
        let info = match q {
            Some(q) => {
                make_contiguous(q, layout);
                let q_data = q.as_slice_memory_order_mut().expect("(BUG) not contiguous!!");
                self.trexc(layout.into(), b'V', n, t_data, ld, q_data, ld, &mut ifst, &mut ilst)
            },
            None => self.trexc(layout.into(), b'N', n, t_data, ld, &mut [], ld, &mut ifst, &mut ilst),
        };

        match info {
            // with well-formed arrays, these can only come from the NaN scan
            -4 | -6 if self.settings.nancheck => Err(TrexcError::NanInput { position: -info }),
            _ => {
                TrexcError::from_info(&routine_name::<T>("trexc"), info, ilst)?;
                Ok((ilst - 1) as usize)
            },
        }
    }
}
