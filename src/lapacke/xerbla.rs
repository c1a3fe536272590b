/* ************************************************************************ **
** This file is part of trexc-shim, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{LAPACK_WORK_MEMORY_ERROR, LAPACK_TRANSPOSE_MEMORY_ERROR};

/// Receives every error the adapter detects on its own.
///
/// Named after LAPACK's error handler.  Purely observational: reporting
/// never changes the status returned to the caller.  Errors that the
/// kernel itself returns are *not* reported here.
pub trait Xerbla {
    fn report(&self, routine: &str, info: i32);
}

impl<'a, X: Xerbla + ?Sized> Xerbla for &'a X {
    fn report(&self, routine: &str, info: i32) { (**self).report(routine, info) }
}

/// Writes reports to the `log` facade at error level.
#[derive(Debug, Copy, Clone, Default)]
pub struct LogXerbla;

impl Xerbla for LogXerbla {
    fn report(&self, routine: &str, info: i32) {
        match info {
            LAPACK_WORK_MEMORY_ERROR => {
                error!("Not enough memory to allocate work array in {}", routine);
            },
            LAPACK_TRANSPOSE_MEMORY_ERROR => {
                error!("Not enough memory to transpose matrix in {}", routine);
            },
            info if info < 0 => error!("Wrong parameter {} in {}", -info, routine),
            _ => {},
        }
    }
}
