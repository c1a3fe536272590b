/* ************************************************************************ **
** This file is part of trexc-shim, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::Layout;

/// Number of elements a buffer must hold to store a `rows x cols` matrix
/// with leading dimension `ld`.
///
/// The last row (or column) only needs to be as long as the matrix itself,
/// so this is *not* simply `ld * major`.
pub fn required_len(layout: Layout, rows: usize, cols: usize, ld: usize) -> usize {
    let (major, minor) = match layout {
        Layout::RowMajor => (rows, cols),
        Layout::ColMajor => (cols, rows),
    };
    match (major, minor) {
        (0, _) | (_, 0) => 0,
        _ => ld * (major - 1) + minor,
    }
}

#[derive(Debug, Fail, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[fail(display = "leading dimension {} is smaller than {}", ld, min)]
    LeadingDim { ld: usize, min: usize },
    #[fail(display = "buffer of length {} cannot hold {} elements", len, required)]
    Extent { len: usize, required: usize },
}

/// A borrowed dense matrix: a slice, its storage order, its logical
/// shape, and the stride between consecutive rows or columns.
#[derive(Debug, Copy, Clone)]
pub struct MatrixView<'a, T> {
    data: &'a [T],
    layout: Layout,
    rows: usize,
    cols: usize,
    ld: usize,
}

impl<'a, T: Copy> MatrixView<'a, T> {
    /// Checks that `ld` covers the minor dimension and that `data` is
    /// long enough to hold every addressed element.
    pub fn new(
        layout: Layout,
        rows: usize,
        cols: usize,
        data: &'a [T],
        ld: usize,
    ) -> Result<Self, ViewError> {
        let min = layout.minor_dim(rows, cols);
        if ld < min {
            return Err(ViewError::LeadingDim { ld, min });
        }
        let required = required_len(layout, rows, cols, ld);
        if data.len() < required {
            return Err(ViewError::Extent { len: data.len(), required });
        }
        Ok(MatrixView { data, layout, rows, cols, ld })
    }

    pub fn layout(&self) -> Layout { self.layout }
    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }
    pub fn ld(&self) -> usize { self.ld }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        assert!(i < self.rows && j < self.cols, "index ({}, {}) out of bounds", i, j);
        self.data[self.layout.index(i, j, self.ld)]
    }

    /// Logical elements in row-major order, skipping padding.
    pub fn iter(&self) -> impl Iterator<Item=T> + '_ {
        (0..self.rows).flat_map(move |i| (0..self.cols).map(move |j| self.get(i, j)))
    }

    /// Copies the logical elements into a fresh, unpadded buffer in `layout`.
    pub fn to_vec_in(&self, layout: Layout) -> Vec<T> {
        let mut out = Vec::with_capacity(self.rows * self.cols);
        match layout {
            Layout::RowMajor => out.extend(self.iter()),
            Layout::ColMajor => {
                for j in 0..self.cols {
                    out.extend((0..self.rows).map(|i| self.get(i, j)));
                }
            },
        }
        out
    }
}
