/* ************************************************************************ **
** This file is part of trexc-shim, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{LAPACK_WORK_MEMORY_ERROR, LAPACK_TRANSPOSE_MEMORY_ERROR};

/// A nonzero status code from one of the entry points, decoded.
#[derive(Debug, Fail, Clone, PartialEq, Eq)]
pub enum TrexcError {
    #[fail(display = "Wrong parameter {} in {}", position, routine)]
    IllegalArgument { routine: String, position: i32 },

    #[fail(display = "argument {} contains NaN", position)]
    NanInput { position: i32 },

    #[fail(display = "Not enough memory to transpose matrix")]
    TransposeMemory,

    #[fail(display = "Not enough memory to allocate work array")]
    WorkMemory,

    /// The kernel refused a swap because the blocks were too close
    /// (the reordering problem is very ill-conditioned).  `T` may have
    /// been partially reordered; `ilst` is the 1-based row where the
    /// moving block ended up.
    #[fail(display = "adjacent blocks too close to swap; block left at row {}", ilst)]
    SwapRejected { ilst: i32 },

    #[fail(display = "T and Q must be square and of equal size (T: {:?}, Q: {:?})", t, q)]
    Shape { t: (usize, usize), q: Option<(usize, usize)> },
}

impl TrexcError {
    /// Interprets the status returned by `routine`.
    ///
    /// `ilst` is only consulted for the kernel's "too close to swap" code.
    pub fn from_info(routine: &str, info: i32, ilst: i32) -> Result<(), TrexcError>
    { match info {
        0 => Ok(()),
        LAPACK_TRANSPOSE_MEMORY_ERROR => Err(TrexcError::TransposeMemory),
        LAPACK_WORK_MEMORY_ERROR => Err(TrexcError::WorkMemory),
        info if info < 0 => Err(TrexcError::IllegalArgument {
            routine: routine.to_string(),
            position: -info,
        }),
        _ => Err(TrexcError::SwapRejected { ilst }),
    }}
}
