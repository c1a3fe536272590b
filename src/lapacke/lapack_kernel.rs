/* ************************************************************************ **
** This file is part of trexc-shim, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Binding to the Fortran `strexc`/`dtrexc` from whatever LAPACK
//! `lapack-src` links in.

use crate::{Shim, TrexcKernel};

use ::trexc_shim_layout::{Layout, lsame, required_len};

/// The reference kernel.
///
/// Fortran trusts its array arguments completely, so before crossing over
/// this checks that every slice is as long as the other arguments claim,
/// and reports a short one as LAPACK would report a bad argument.
#[derive(Debug, Copy, Clone, Default)]
pub struct LapackKernel;

// Is `a` too short for an `n x n` column-major matrix with leading dimension `ld`?
// (bad `n`/`ld` themselves are left for LAPACK to reject)
fn too_short<T>(n: i32, a: &[T], ld: i32) -> bool {
    if n < 0 || ld < n.max(1) {
        return false;
    }
    let (n, ld) = (n as usize, ld as usize);
    a.len() < required_len(Layout::ColMajor, n, n, ld)
}

macro_rules! impl_lapack_kernel {
    ($($T:ty => $trexc:path;)+) => {$(
        impl TrexcKernel<$T> for LapackKernel {
            fn trexc(
                &self,
                compq: u8,
                n: i32,
                t: &mut [$T],
                ldt: i32,
                q: &mut [$T],
                ldq: i32,
                ifst: &mut i32,
                ilst: &mut i32,
                work: &mut [$T],
                info: &mut i32,
            ) {
                *info = 0;
                if too_short(n, t, ldt) {
                    *info = -3;
                } else if lsame(compq, b'v') && too_short(n, q, ldq) {
                    *info = -5;
                } else if (work.len() as i64) < i64::from(n) {
                    *info = -9;
                }
                if *info != 0 {
                    return;
                }
                unsafe { $trexc(compq, n, t, ldt, q, ldq, ifst, ilst, work, info) }
            }
        }
    )+};
}

impl_lapack_kernel!{
    f32 => ::lapack::strexc;
    f64 => ::lapack::dtrexc;
}

impl Shim<LapackKernel> {
    /// A shim over the linked LAPACK, with default scratch and logging.
    pub fn lapack() -> Self { Shim::new(LapackKernel) }
}

macro_rules! free_functions {
    ($($T:ty => [$high:ident, $work:ident];)+) => {$(
        /// LAPACKE-compatible entry point backed by [`LapackKernel`].
        #[allow(clippy::too_many_arguments)]
        pub fn $high(
            matrix_layout: i32,
            compq: u8,
            n: i32,
            t: &mut [$T],
            ldt: i32,
            q: &mut [$T],
            ldq: i32,
            ifst: &mut i32,
            ilst: &mut i32,
        ) -> i32 {
            Shim::lapack().trexc(matrix_layout, compq, n, t, ldt, q, ldq, ifst, ilst)
        }

        /// LAPACKE-compatible entry point backed by [`LapackKernel`].
        #[allow(clippy::too_many_arguments)]
        pub fn $work(
            matrix_layout: i32,
            compq: u8,
            n: i32,
            t: &mut [$T],
            ldt: i32,
            q: &mut [$T],
            ldq: i32,
            ifst: &mut i32,
            ilst: &mut i32,
            work: &mut [$T],
        ) -> i32 {
            Shim::lapack().trexc_work(matrix_layout, compq, n, t, ldt, q, ldq, ifst, ilst, work)
        }
    )+};
}

free_functions!{
    f32 => [strexc, strexc_work];
    f64 => [dtrexc, dtrexc_work];
}
