/* ************************************************************************ **
** This file is part of trexc-shim, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use ::std::ops::{Deref, DerefMut};
use ::trexc_shim_layout::Scalar;

/// Hands out zero-filled scratch buffers and hears about their release.
///
/// Failure is reported with `None` rather than by aborting, so that the
/// adapter can turn it into a status code.
pub trait ScratchAlloc {
    fn try_alloc<T: Scalar>(&self, len: usize) -> Option<Vec<T>>;

    /// Called when a buffer of `len` elements obtained from `try_alloc`
    /// goes out of scope.
    fn released(&self, _len: usize) {}
}

/// Allocates from the global heap.
#[derive(Debug, Copy, Clone, Default)]
pub struct HeapScratch;

impl ScratchAlloc for HeapScratch {
    fn try_alloc<T: Scalar>(&self, len: usize) -> Option<Vec<T>> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(len).ok()?;
        buf.resize(len, T::zero());
        Some(buf)
    }
}

/// A call-scoped buffer that tells its allocator when it is dropped.
///
/// Zero-length scratch is never requested from the allocator at all.
pub struct Scratch<'a, T, A: ScratchAlloc> {
    buf: Vec<T>,
    // None for the zero-length case
    owner: Option<&'a A>,
}

impl<'a, T: Scalar, A: ScratchAlloc> Scratch<'a, T, A> {
    pub fn acquire(alloc: &'a A, len: usize) -> Option<Self> {
        if len == 0 {
            return Some(Scratch::empty());
        }
        let buf = alloc.try_alloc(len)?;
        debug_assert_eq!(buf.len(), len);
        Some(Scratch { buf, owner: Some(alloc) })
    }

    pub fn empty() -> Self
    { Scratch { buf: Vec::new(), owner: None } }
}

impl<'a, T, A: ScratchAlloc> Drop for Scratch<'a, T, A> {
    fn drop(&mut self) {
        if let Some(owner) = self.owner {
            owner.released(self.buf.len());
        }
    }
}

impl<'a, T, A: ScratchAlloc> Deref for Scratch<'a, T, A> {
    type Target = [T];

    fn deref(&self) -> &[T] { &self.buf }
}

impl<'a, T, A: ScratchAlloc> DerefMut for Scratch<'a, T, A> {
    fn deref_mut(&mut self) -> &mut [T] { &mut self.buf }
}
