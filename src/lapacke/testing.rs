/* ************************************************************************ **
** This file is part of trexc-shim, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Stand-ins for the adapter's collaborators, for use in tests.
//!
//! None of these do real numerical work.  `PermutationKernel` is
//! layout-sensitive enough to catch a transpose going the wrong way,
//! which is all the adapter needs from a kernel.

use crate::{TrexcKernel, Xerbla, ScratchAlloc};

use ::std::sync::Mutex;
use ::std::sync::atomic::{AtomicUsize, Ordering};
use ::trexc_shim_layout::{Scalar, lsame};

fn lock<T>(mutex: &Mutex<T>) -> ::std::sync::MutexGuard<'_, T>
{ mutex.lock().unwrap_or_else(|e| e.into_inner()) }

/// Argument checks performed by LAPACK's `?trexc`, in its order.
/// Returns the kernel-relative `info`.
pub fn check_kernel_args(compq: u8, n: i32, ldt: i32, ldq: i32, ifst: i32, ilst: i32) -> i32 {
    let wantq = lsame(compq, b'v');
    if !wantq && !lsame(compq, b'n') {
        -1
    } else if n < 0 {
        -2
    } else if ldt < n.max(1) {
        -4
    } else if ldq < 1 || (wantq && ldq < n.max(1)) {
        -6
    } else if n > 0 && (ifst < 1 || ifst > n) {
        -7
    } else if n > 0 && (ilst < 1 || ilst > n) {
        -8
    } else {
        0
    }
}

/// Moves diagonal entry `ifst` to position `ilst` by a chain of adjacent
/// symmetric row/column swaps, applying the same column swaps to `Q`.
///
/// This is a similarity transform by a permutation, so it is a fair
/// imitation of `?trexc` on a diagonal `T`; on anything else it happily
/// destroys the triangular structure.  Column-major, like the real thing.
#[derive(Debug, Default)]
pub struct PermutationKernel {
    calls: AtomicUsize,
}

impl PermutationKernel {
    pub fn new() -> Self { Default::default() }

    /// How many times the kernel has been entered.
    pub fn calls(&self) -> usize { self.calls.load(Ordering::SeqCst) }
}

impl<T: Scalar> TrexcKernel<T> for PermutationKernel {
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
        _work: &mut [T],
        info: &mut i32,
    ) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *info = check_kernel_args(compq, n, ldt, ldq, *ifst, *ilst);
        if *info != 0 || n <= 1 {
            return;
        }

        let wantq = lsame(compq, b'v');
        let (n, ldt, ldq) = (n as usize, ldt as usize, ldq as usize);
        let dest = *ilst as usize - 1;
        let mut k = *ifst as usize - 1;
        while k != dest {
            let next = if dest > k { k + 1 } else { k - 1 };
            for j in 0..n {
                t.swap(k + j * ldt, next + j * ldt);
            }
            for i in 0..n {
                t.swap(i + k * ldt, i + next * ldt);
            }
            if wantq {
                for i in 0..n {
                    q.swap(i + k * ldq, i + next * ldq);
                }
            }
            k = next;
        }
    }
}

/// Validates nothing, touches nothing, and returns a preset `info`.
#[derive(Debug, Default)]
pub struct FixedStatusKernel {
    pub info: i32,
    calls: AtomicUsize,
}

impl FixedStatusKernel {
    pub fn new(info: i32) -> Self
    { FixedStatusKernel { info, calls: AtomicUsize::new(0) } }

    pub fn calls(&self) -> usize { self.calls.load(Ordering::SeqCst) }
}

impl<T> TrexcKernel<T> for FixedStatusKernel {
    fn trexc(
        &self,
        _compq: u8,
        _n: i32,
        _t: &mut [T],
        _ldt: i32,
        _q: &mut [T],
        _ldq: i32,
        _ifst: &mut i32,
        _ilst: &mut i32,
        _work: &mut [T],
        info: &mut i32,
    ) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *info = self.info;
    }
}

/// Remembers every report, in order.
#[derive(Debug, Default)]
pub struct RecordingXerbla {
    reports: Mutex<Vec<(String, i32)>>,
}

impl RecordingXerbla {
    pub fn new() -> Self { Default::default() }

    pub fn reports(&self) -> Vec<(String, i32)> { lock(&self.reports).clone() }
}

impl Xerbla for RecordingXerbla {
    fn report(&self, routine: &str, info: i32) {
        lock(&self.reports).push((routine.to_string(), info));
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScratchEvent {
    Alloc(usize),
    Fail(usize),
    Release(usize),
}

/// Heap-backed scratch that logs what happens to it and can be told
/// to refuse one particular request.
#[derive(Debug, Default)]
pub struct CountingScratch {
    /// 0-based index of the request to refuse.
    pub fail_at: Option<usize>,
    requests: AtomicUsize,
    events: Mutex<Vec<ScratchEvent>>,
}

impl CountingScratch {
    pub fn new() -> Self { Default::default() }

    pub fn failing_at(index: usize) -> Self
    { CountingScratch { fail_at: Some(index), ..Default::default() } }

    pub fn events(&self) -> Vec<ScratchEvent> { lock(&self.events).clone() }

    /// Buffers handed out and not yet released.
    pub fn outstanding(&self) -> usize {
        self.events().iter().fold(0, |acc, event| match *event {
            ScratchEvent::Alloc(_) => acc + 1,
            ScratchEvent::Release(_) => acc - 1,
            ScratchEvent::Fail(_) => acc,
        })
    }
}

impl ScratchAlloc for CountingScratch {
    fn try_alloc<T: Scalar>(&self, len: usize) -> Option<Vec<T>> {
        let index = self.requests.fetch_add(1, Ordering::SeqCst);
        if self.fail_at == Some(index) {
            lock(&self.events).push(ScratchEvent::Fail(len));
            return None;
        }
        lock(&self.events).push(ScratchEvent::Alloc(len));
        Some(vec![T::zero(); len])
    }

    fn released(&self, len: usize) {
        lock(&self.events).push(ScratchEvent::Release(len));
    }
}
