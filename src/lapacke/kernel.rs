/* ************************************************************************ **
** This file is part of trexc-shim, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

/// A column-major implementation of `?trexc`.
///
/// The argument list is the Fortran one, and `info` is written the way
/// LAPACK writes it: `-i` names the `i`th argument *of this signature*
/// (`compq` = 1, ..., `work` = 9), and the adapter shifts it to match its
/// own.  `q` is only referenced when `compq` is `'V'`.
///
/// Implementations must not assume that `q` or `work` are any longer than
/// the arguments say they need to be.
pub trait TrexcKernel<T> {
    #[allow(clippy::too_many_arguments)]
    fn trexc(
        &self,
        compq: u8,
        n: i32,
        t: &mut [T],
        ldt: i32,
        q: &mut [T],
        ldq: i32,
        ifst: &mut i32,
        ilst: &mut i32,
        work: &mut [T],
        info: &mut i32,
    );
}

impl<'a, T, K: TrexcKernel<T> + ?Sized> TrexcKernel<T> for &'a K {
    fn trexc(
        &self,
        compq: u8,
        n: i32,
        t: &mut [T],
        ldt: i32,
        q: &mut [T],
        ldq: i32,
        ifst: &mut i32,
        ilst: &mut i32,
        work: &mut [T],
        info: &mut i32,
    ) { (**self).trexc(compq, n, t, ldt, q, ldq, ifst, ilst, work, info) }
}
