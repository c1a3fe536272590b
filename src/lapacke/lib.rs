/* ************************************************************************ **
** This file is part of trexc-shim, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! A LAPACKE-style front end for `?trexc`, the routine that moves a diagonal
//! block of a real Schur form `T` to another position.
//!
//! The Fortran kernel only understands column-major storage.  `Shim` accepts
//! either order: column-major input is handed straight through, and
//! row-major input is transposed into scratch, run through the kernel, and
//! transposed back.  Everything the adapter touches besides the caller's
//! buffers (the kernel, scratch allocation, and error reporting) is injected,
//! so the whole thing can be exercised without linking LAPACK.
//!
//! Status codes follow LAPACKE: `0` is success, `-i` blames the `i`th
//! argument of the entry point that returned it, positive values come from
//! the kernel, and two sentinels report allocation failure.

#![deny(unused_must_use)]

#[macro_use] extern crate failure;
#[macro_use] extern crate log;
extern crate ndarray;
extern crate trexc_shim_config;
extern crate trexc_shim_layout;
#[cfg(feature = "lapack-kernel")] extern crate lapack;
#[cfg(feature = "lapack-kernel")] extern crate lapack_src;
#[cfg(feature = "lapack-kernel")] extern crate lapacke;

use ::log::Level;
use ::trexc_shim_config::Settings;
use ::trexc_shim_layout::Scalar;

pub const API_TRACE_TARGET: &'static str = concat!(module_path!(), "::kernel_api");
pub const API_TRACE_LEVEL: Level = Level::Trace;

macro_rules! api_trace {
    ($($t:tt)*) => { log!(target: crate::API_TRACE_TARGET, crate::API_TRACE_LEVEL, $($t)*) };
}

/// Status returned when the workspace for the high-level entry point
/// could not be allocated.
pub const LAPACK_WORK_MEMORY_ERROR: i32 = -1010;
/// Status returned when a row-major call could not allocate its
/// column-major scratch copies.
pub const LAPACK_TRANSPOSE_MEMORY_ERROR: i32 = -1011;

pub use crate::kernel::TrexcKernel;
mod kernel;

pub use crate::xerbla::{Xerbla, LogXerbla};
mod xerbla;

pub use crate::scratch::{ScratchAlloc, HeapScratch, Scratch};
mod scratch;

pub use crate::error::TrexcError;
mod error;

mod trexc;
mod array;

pub mod testing;

#[cfg(feature = "lapack-kernel")]
pub use crate::lapack_kernel::{LapackKernel, strexc, dtrexc, strexc_work, dtrexc_work};
#[cfg(feature = "lapack-kernel")]
mod lapack_kernel;

/// Name under which a routine reports errors, e.g. `LAPACKE_dtrexc_work`.
pub fn routine_name<T: Scalar>(stem: &str) -> String
{ format!("LAPACKE_{}{}", T::PREFIX, stem) }

/// The adapter, bundled with its collaborators.
///
/// Holds no per-call state, so one `Shim` can serve any number of calls,
/// including concurrent ones when its parts are `Sync`.
#[derive(Debug, Clone, Default)]
pub struct Shim<K, A = HeapScratch, X = LogXerbla> {
    /// Column-major kernel that does the actual reordering.
    pub kernel: K,
    /// Source of transpose buffers and workspace.
    pub scratch: A,
    /// Where validation and allocation failures are reported.
    pub xerbla: X,
    pub settings: Settings,
}

impl<K> Shim<K> {
    pub fn new(kernel: K) -> Self {
        Shim {
            kernel,
            scratch: HeapScratch,
            xerbla: LogXerbla,
            settings: Settings::default(),
        }
    }
}

impl<K, A, X> Shim<K, A, X> {
    pub fn with_scratch<A2>(self, scratch: A2) -> Shim<K, A2, X> {
        let Shim { kernel, scratch: _, xerbla, settings } = self;
        Shim { kernel, scratch, xerbla, settings }
    }

    pub fn with_xerbla<X2>(self, xerbla: X2) -> Shim<K, A, X2> {
        let Shim { kernel, scratch, xerbla: _, settings } = self;
        Shim { kernel, scratch, xerbla, settings }
    }

    pub fn with_settings(self, settings: Settings) -> Self
    { Shim { settings, ..self } }
}
