/* ************************************************************************ **
** This file is part of trexc-shim, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Shim, TrexcKernel, ScratchAlloc, Scratch, Xerbla, routine_name};
use crate::{LAPACK_WORK_MEMORY_ERROR, LAPACK_TRANSPOSE_MEMORY_ERROR};

use ::trexc_shim_layout::{Layout, MatrixView, ViewError, Scalar, ge_trans, ge_nancheck, lsame};

// 1-based positions in the entry points' own argument lists.
const ARG_LAYOUT: i32 = 1;
const ARG_T: i32 = 4;
const ARG_LDT: i32 = 5;
const ARG_Q: i32 = 6;
const ARG_LDQ: i32 = 7;

#[inline]
fn extent(x: i32) -> usize
{ x.max(0) as usize }

// Can `a` hold an `n x n` matrix with leading dimension `ld`?
// A leading dimension below `n` is somebody else's error to report.
fn fits<T: Scalar>(layout: Layout, n: i32, a: &[T], ld: i32) -> bool {
    match MatrixView::new(layout, extent(n), extent(n), a, extent(ld)) {
        Ok(_) | Err(ViewError::LeadingDim { .. }) => true,
        Err(ViewError::Extent { .. }) => false,
    }
}

fn has_nan<T: Scalar>(layout: Layout, n: i32, a: &[T], ld: i32) -> bool {
    match MatrixView::new(layout, extent(n), extent(n), a, extent(ld)) {
        Ok(_) => ge_nancheck(layout, n, n, a, ld),
        // left for trexc_work to reject
        Err(_) => false,
    }
}

impl<K, A: ScratchAlloc, X: Xerbla> Shim<K, A, X> {
    /// Middle-level entry point: `?trexc` for either storage order, with a
    /// caller-supplied workspace of at least `n` elements.
    ///
    /// `matrix_layout` is `101` (row-major) or `102` (column-major).  `t`
    /// (and `q`, when `compq` is `'V'`) are `n x n` with the given leading
    /// dimensions, in that order.  `ifst` and `ilst` are 1-based and are
    /// updated by the kernel.
    ///
    /// Returns the LAPACK status.  Errors found here (bad layout, leading
    /// dimension, or buffer length, and failed scratch allocation) are
    /// reported to the `Xerbla`; errors from the kernel are only shifted
    /// by one position to account for `matrix_layout`.
    ///
    /// A row-major call copies `T` (and `Q`) into column-major scratch and
    /// back.  Nothing the caller owns is written until the kernel returns.
    #[allow(clippy::too_many_arguments)]
    pub fn trexc_work<T: Scalar>(
        &self,
        matrix_layout: i32,
        compq: u8,
        n: i32,
        t: &mut [T],
        ldt: i32,
        q: &mut [T],
        ldq: i32,
        ifst: &mut i32,
        ilst: &mut i32,
        work: &mut [T],
    ) -> i32
    where K: TrexcKernel<T>,
    {
        let fail = |info: i32| {
            self.xerbla.report(&routine_name::<T>("trexc_work"), info);
            info
        };

        let layout = match Layout::from_int(matrix_layout) {
            Some(layout) => layout,
            None => return fail(-ARG_LAYOUT),
        };
        let wantq = lsame(compq, b'v');

        if layout == Layout::RowMajor {
            if wantq && ldq < n {
                return fail(-ARG_LDQ);
            }
            if ldt < n {
                return fail(-ARG_LDT);
            }
        }
        if !fits(layout, n, t, ldt) {
            return fail(-ARG_T);
        }
        if wantq && !fits(layout, n, q, ldq) {
            return fail(-ARG_Q);
        }

        match layout {
            Layout::ColMajor => self.call_kernel(compq, n, t, ldt, q, ldq, ifst, ilst, work),
            Layout::RowMajor => {
                match self.trexc_row_major(compq, wantq, n, t, ldt, q, ldq, ifst, ilst, work) {
                    LAPACK_TRANSPOSE_MEMORY_ERROR => fail(LAPACK_TRANSPOSE_MEMORY_ERROR),
                    info => info,
                }
            },
        }
    }

    /// High-level entry point: like `trexc_work`, but allocates the
    /// workspace itself and, if `settings.nancheck` is on, refuses input
    /// containing NaN (status `-4` for `T`, `-6` for `Q`, not reported).
    #[allow(clippy::too_many_arguments)]
    pub fn trexc<T: Scalar>(
        &self,
        matrix_layout: i32,
        compq: u8,
        n: i32,
        t: &mut [T],
        ldt: i32,
        q: &mut [T],
        ldq: i32,
        ifst: &mut i32,
        ilst: &mut i32,
    ) -> i32
    where K: TrexcKernel<T>,
    {
        let routine = routine_name::<T>("trexc");

        let layout = match Layout::from_int(matrix_layout) {
            Some(layout) => layout,
            None => {
                self.xerbla.report(&routine, -ARG_LAYOUT);
                return -ARG_LAYOUT;
            },
        };
        let wantq = lsame(compq, b'v');

        if self.settings.nancheck {
            if has_nan(layout, n, t, ldt) {
                return -ARG_T;
            }
            if wantq && has_nan(layout, n, q, ldq) {
                return -ARG_Q;
            }
        }

        let info = match Scratch::<T, A>::acquire(&self.scratch, extent(n)) {
            None => LAPACK_WORK_MEMORY_ERROR,
            Some(mut work) => {
                self.trexc_work(matrix_layout, compq, n, t, ldt, q, ldq, ifst, ilst, &mut work)
            },
        };
        if info == LAPACK_WORK_MEMORY_ERROR {
            self.xerbla.report(&routine, info);
        }
        info
    }

    // Returns LAPACK_TRANSPOSE_MEMORY_ERROR without reporting it; by then
    // every scratch buffer obtained here has been released.
    #[allow(clippy::too_many_arguments)]
    fn trexc_row_major<T: Scalar>(
        &self,
        compq: u8,
        wantq: bool,
        n: i32,
        t: &mut [T],
        ldt: i32,
        q: &mut [T],
        ldq: i32,
        ifst: &mut i32,
        ilst: &mut i32,
        work: &mut [T],
    ) -> i32
    where K: TrexcKernel<T>,
    {
        let ld_tmp = n.max(1);
        let len = match (ld_tmp as usize).checked_mul(extent(n)) {
            Some(len) => len,
            None => return LAPACK_TRANSPOSE_MEMORY_ERROR,
        };

        let mut t_tmp: Scratch<'_, T, A> = match Scratch::acquire(&self.scratch, len) {
            Some(buf) => buf,
            None => return LAPACK_TRANSPOSE_MEMORY_ERROR,
        };
        let mut q_tmp: Scratch<'_, T, A> = if wantq {
            match Scratch::acquire(&self.scratch, len) {
                Some(buf) => buf,
                None => return LAPACK_TRANSPOSE_MEMORY_ERROR, // drops t_tmp
            }
        } else {
            Scratch::empty()
        };

        ge_trans(Layout::RowMajor, n, n, t, ldt, &mut t_tmp, ld_tmp);
        if wantq {
            ge_trans(Layout::RowMajor, n, n, q, ldq, &mut q_tmp, ld_tmp);
        }

        let info = self.call_kernel(compq, n, &mut t_tmp, ld_tmp, &mut q_tmp, ld_tmp, ifst, ilst, work);

        ge_trans(Layout::ColMajor, n, n, &t_tmp, ld_tmp, t, ldt);
        if wantq {
            ge_trans(Layout::ColMajor, n, n, &q_tmp, ld_tmp, q, ldq);
        }

        drop(q_tmp);
        drop(t_tmp);
        info
    }

    #[allow(clippy::too_many_arguments)]
    fn call_kernel<T: Scalar>(
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
    ) -> i32
    where K: TrexcKernel<T>,
    {
        let mut info = 0;
        api_trace!(
            "{}trexc(compq={:?}, n={}, ldt={}, ldq={}, ifst={}, ilst={})",
            T::PREFIX, compq as char, n, ldt, ldq, ifst, ilst,
        );
        self.kernel.trexc(compq, n, t, ldt, q, ldq, ifst, ilst, work, &mut info);
        api_trace!("{}trexc -> info={}, ifst={}, ilst={}", T::PREFIX, info, ifst, ilst);

        // the kernel numbers its arguments from compq; ours start at matrix_layout
        if info < 0 { info - 1 } else { info }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{PermutationKernel, FixedStatusKernel, RecordingXerbla, CountingScratch, ScratchEvent};
    use ::trexc_shim_config::Settings;
    use ::trexc_shim_layout::{LAPACK_ROW_MAJOR, LAPACK_COL_MAJOR};
    use ::rand::Rng;

    type TestShim<K = PermutationKernel> = Shim<K, CountingScratch, RecordingXerbla>;

    fn shim() -> TestShim
    { with_kernel(PermutationKernel::new()) }

    fn with_kernel<K>(kernel: K) -> TestShim<K> {
        let _ = ::env_logger::try_init();
        Shim::new(kernel)
            .with_scratch(CountingScratch::new())
            .with_xerbla(RecordingXerbla::new())
    }

    fn reported(routine: &str, info: i32) -> Vec<(String, i32)>
    { vec![(routine.to_string(), info)] }

    // [[1 2 3]
    //  [0 4 5]
    //  [0 0 6]]
    fn upper3() -> Vec<f64>
    { vec![1.0, 2.0, 3.0, 0.0, 4.0, 5.0, 0.0, 0.0, 6.0] }

    fn eye(n: usize) -> Vec<f64> {
        let mut out = vec![0.0; n * n];
        for i in 0..n {
            out[i * n + i] = 1.0;
        }
        out
    }

    #[test]
    fn bad_layout_touches_nothing() {
        let shim = shim();
        let (mut t, mut q) = (upper3(), eye(3));
        let (mut ifst, mut ilst) = (1, 3);
        let info = shim.trexc_work(0, b'V', 3, &mut t, 3, &mut q, 3, &mut ifst, &mut ilst, &mut [0.0; 3]);

        assert_eq!(info, -1);
        assert_eq!(shim.xerbla.reports(), reported("LAPACKE_dtrexc_work", -1));
        assert_eq!((t, q, ifst, ilst), (upper3(), eye(3), 1, 3));
        assert_eq!(shim.kernel.calls(), 0);
        assert!(shim.scratch.events().is_empty());
    }

    #[test]
    fn row_major_ldt_too_small() {
        let shim = shim();
        let (mut t, mut q) = (upper3(), eye(3));
        let (mut ifst, mut ilst) = (1, 3);
        let info = shim.trexc_work(LAPACK_ROW_MAJOR, b'V', 3, &mut t, 2, &mut q, 3, &mut ifst, &mut ilst, &mut [0.0; 3]);

        assert_eq!(info, -5);
        assert_eq!(shim.xerbla.reports(), reported("LAPACKE_dtrexc_work", -5));
        assert_eq!((t, q, ifst, ilst), (upper3(), eye(3), 1, 3));
        assert_eq!(shim.kernel.calls(), 0);
        assert!(shim.scratch.events().is_empty());
    }

    #[test]
    fn row_major_ldq_too_small() {
        let shim = shim();
        let (mut t, mut q) = (upper3(), eye(3));
        let (mut ifst, mut ilst) = (1, 3);
        let info = shim.trexc_work(LAPACK_ROW_MAJOR, b'v', 3, &mut t, 3, &mut q, 2, &mut ifst, &mut ilst, &mut [0.0; 3]);

        assert_eq!(info, -7);
        assert_eq!(shim.xerbla.reports(), reported("LAPACKE_dtrexc_work", -7));
        assert_eq!((t, q, ifst, ilst), (upper3(), eye(3), 1, 3));
        assert!(shim.scratch.events().is_empty());
    }

    #[test]
    fn row_major_without_q_ignores_ldq() {
        let shim = shim();
        let mut t = upper3();
        let mut q = vec![-1.0];
        let (mut ifst, mut ilst) = (1, 3);
        let info = shim.trexc_work(LAPACK_ROW_MAJOR, b'N', 3, &mut t, 3, &mut q, 1, &mut ifst, &mut ilst, &mut [0.0; 3]);

        assert_eq!(info, 0);
        // entry 1 moved to the bottom: rows/cols reordered as (2, 3, 1)
        assert_eq!(t, vec![4.0, 5.0, 0.0, 0.0, 6.0, 0.0, 2.0, 3.0, 1.0]);
        assert_eq!(q, vec![-1.0]);
        assert!(shim.xerbla.reports().is_empty());
        assert_eq!(shim.scratch.events(), vec![ScratchEvent::Alloc(9), ScratchEvent::Release(9)]);
    }

    #[test]
    fn row_major_releases_in_reverse_order() {
        let shim = shim();
        let (mut t, mut q) = (upper3(), eye(3));
        let (mut ifst, mut ilst) = (3, 1);
        let info = shim.trexc_work(LAPACK_ROW_MAJOR, b'V', 3, &mut t, 3, &mut q, 3, &mut ifst, &mut ilst, &mut [0.0; 3]);

        assert_eq!(info, 0);
        assert_eq!(shim.scratch.events(), vec![
            ScratchEvent::Alloc(9),
            ScratchEvent::Alloc(9),
            ScratchEvent::Release(9),
            ScratchEvent::Release(9),
        ]);
        // the last basis vector moved to the front
        assert_eq!(&q[..], &[0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0][..]);
    }

    #[test]
    fn zero_dimension_allocates_nothing() {
        let shim = shim();
        let mut t = vec![7.0; 2];
        let mut q = vec![8.0; 2];
        let (mut ifst, mut ilst) = (1, 1);
        let info = shim.trexc_work(LAPACK_ROW_MAJOR, b'V', 0, &mut t, 1, &mut q, 1, &mut ifst, &mut ilst, &mut []);

        assert_eq!(info, 0);
        assert_eq!((t, q, ifst, ilst), (vec![7.0; 2], vec![8.0; 2], 1, 1));
        assert!(shim.scratch.events().is_empty());
        assert!(shim.xerbla.reports().is_empty());
    }

    #[test]
    fn negative_dimension_is_the_kernels_to_report() {
        let shim = shim();
        for &layout in &[LAPACK_ROW_MAJOR, LAPACK_COL_MAJOR] {
            let info = shim.trexc_work::<f64>(layout, b'N', -1, &mut [], 1, &mut [], 1, &mut 1, &mut 1, &mut []);
            assert_eq!(info, -3);
        }
        assert!(shim.xerbla.reports().is_empty());
        assert!(shim.scratch.events().is_empty());
    }

    #[test]
    fn kernel_errors_are_shifted_not_reported() {
        for &layout in &[LAPACK_ROW_MAJOR, LAPACK_COL_MAJOR] {
            let shim = with_kernel(FixedStatusKernel::new(-7));
            let mut t = upper3();
            let info = shim.trexc_work(layout, b'N', 3, &mut t, 3, &mut [], 1, &mut 1, &mut 9, &mut [0.0; 3]);
            assert_eq!(info, -8);
            assert_eq!(t, upper3());
            assert!(shim.xerbla.reports().is_empty());
            assert_eq!(shim.kernel.calls(), 1);
        }
    }

    #[test]
    fn kernel_positive_status_passes_through() {
        let shim = with_kernel(FixedStatusKernel::new(1));
        let info = shim.trexc_work(LAPACK_ROW_MAJOR, b'N', 3, &mut upper3(), 3, &mut [], 1, &mut 1, &mut 2, &mut [0.0; 3]);
        assert_eq!(info, 1);
        assert!(shim.xerbla.reports().is_empty());
    }

    #[test]
    fn column_major_is_passed_straight_through() {
        let shim = shim();
        // column-major upper3 is the row-major lower triangle
        let mut t = vec![1.0, 0.0, 0.0, 2.0, 4.0, 0.0, 3.0, 5.0, 6.0];
        let (mut ifst, mut ilst) = (1, 2);
        let info = shim.trexc_work(LAPACK_COL_MAJOR, b'N', 3, &mut t, 3, &mut [], 1, &mut ifst, &mut ilst, &mut [0.0; 3]);

        assert_eq!(info, 0);
        assert_eq!(t, vec![4.0, 2.0, 0.0, 0.0, 1.0, 0.0, 5.0, 3.0, 6.0]);
        assert!(shim.scratch.events().is_empty());
    }

    #[test]
    fn transpose_scratch_failure_for_t() {
        let shim = shim().with_scratch(CountingScratch::failing_at(0));
        let (mut t, mut q) = (upper3(), eye(3));
        let info = shim.trexc_work(LAPACK_ROW_MAJOR, b'V', 3, &mut t, 3, &mut q, 3, &mut 1, &mut 3, &mut [0.0; 3]);

        assert_eq!(info, LAPACK_TRANSPOSE_MEMORY_ERROR);
        assert_eq!(shim.scratch.events(), vec![ScratchEvent::Fail(9)]);
        assert_eq!(shim.xerbla.reports(), reported("LAPACKE_dtrexc_work", LAPACK_TRANSPOSE_MEMORY_ERROR));
        assert_eq!((t, q), (upper3(), eye(3)));
        assert_eq!(shim.kernel.calls(), 0);
    }

    #[test]
    fn transpose_scratch_failure_for_q_releases_t() {
        let shim = shim().with_scratch(CountingScratch::failing_at(1));
        let (mut t, mut q) = (upper3(), eye(3));
        let info = shim.trexc_work(LAPACK_ROW_MAJOR, b'V', 3, &mut t, 3, &mut q, 3, &mut 1, &mut 3, &mut [0.0; 3]);

        assert_eq!(info, LAPACK_TRANSPOSE_MEMORY_ERROR);
        assert_eq!(shim.scratch.events(), vec![
            ScratchEvent::Alloc(9),
            ScratchEvent::Fail(9),
            ScratchEvent::Release(9),
        ]);
        assert_eq!(shim.scratch.outstanding(), 0);
        assert_eq!(shim.xerbla.reports(), reported("LAPACKE_dtrexc_work", LAPACK_TRANSPOSE_MEMORY_ERROR));
        assert_eq!((t, q), (upper3(), eye(3)));
        assert_eq!(shim.kernel.calls(), 0);
    }

    #[test]
    fn short_buffers_are_rejected() {
        let shim = shim();
        let mut short = vec![0.0; 8];
        let info = shim.trexc_work(LAPACK_ROW_MAJOR, b'N', 3, &mut short, 3, &mut [], 1, &mut 1, &mut 1, &mut [0.0; 3]);
        assert_eq!(info, -4);

        let mut t = upper3();
        let info = shim.trexc_work(LAPACK_COL_MAJOR, b'V', 3, &mut t, 3, &mut short, 3, &mut 1, &mut 1, &mut [0.0; 3]);
        assert_eq!(info, -6);

        assert_eq!(shim.xerbla.reports(), vec![
            ("LAPACKE_dtrexc_work".to_string(), -4),
            ("LAPACKE_dtrexc_work".to_string(), -6),
        ]);
        assert_eq!(shim.kernel.calls(), 0);
    }

    #[test]
    fn same_block_twice_is_a_fixed_point() {
        let shim = shim();
        let (mut t, mut q) = (upper3(), eye(3));
        for _ in 0..2 {
            let (mut ifst, mut ilst) = (2, 2);
            let info = shim.trexc_work(LAPACK_ROW_MAJOR, b'V', 3, &mut t, 3, &mut q, 3, &mut ifst, &mut ilst, &mut [0.0; 3]);
            assert_eq!(info, 0);
            assert_eq!((ifst, ilst), (2, 2));
        }
        assert_eq!((t, q), (upper3(), eye(3)));
    }

    #[test]
    fn row_and_column_major_agree() {
        let shim = shim();
        let mut rng = ::rand::thread_rng();
        for _ in 0..50 {
            let n = rng.gen_range(1..7);
            let ld = n + rng.gen_range(0..3);
            let ifst = rng.gen_range(1..=n) as i32;
            let ilst = rng.gen_range(1..=n) as i32;
            let mut t_row: Vec<f64> = (0..n * ld).map(|_| rng.gen()).collect();
            let mut q_row: Vec<f64> = (0..n * ld).map(|_| rng.gen()).collect();

            let mut t_col = MatrixView::new(Layout::RowMajor, n, n, &t_row, ld).unwrap().to_vec_in(Layout::ColMajor);
            let mut q_col = MatrixView::new(Layout::RowMajor, n, n, &q_row, ld).unwrap().to_vec_in(Layout::ColMajor);

            let (mut ifst_row, mut ilst_row) = (ifst, ilst);
            let (mut ifst_col, mut ilst_col) = (ifst, ilst);
            let mut work = vec![0.0; n];
            let (n, ld) = (n as i32, ld as i32);
            let info_row = shim.trexc_work(LAPACK_ROW_MAJOR, b'V', n, &mut t_row, ld, &mut q_row, ld, &mut ifst_row, &mut ilst_row, &mut work);
            let info_col = shim.trexc_work(LAPACK_COL_MAJOR, b'V', n, &mut t_col, n, &mut q_col, n, &mut ifst_col, &mut ilst_col, &mut work);
            assert_eq!((info_row, info_col), (0, 0));
            assert_eq!((ifst_row, ilst_row), (ifst_col, ilst_col));

            let (n, ld) = (n as usize, ld as usize);
            let row = |a: &[f64]| MatrixView::new(Layout::RowMajor, n, n, a, ld).unwrap().to_vec_in(Layout::ColMajor);
            assert_eq!(row(&t_row), t_col);
            assert_eq!(row(&q_row), q_col);
        }
        assert_eq!(shim.scratch.outstanding(), 0);
    }

    #[test]
    fn row_major_leaves_padding_alone() {
        let shim = shim();
        // 2x2 row-major with ld = 3; the padding column holds sentinels
        let mut t = vec![1.0, 2.0, -9.0, 0.0, 3.0, -9.0];
        let info = shim.trexc_work(LAPACK_ROW_MAJOR, b'N', 2, &mut t, 3, &mut [], 1, &mut 1, &mut 2, &mut [0.0; 2]);
        assert_eq!(info, 0);
        assert_eq!(t, vec![3.0, 0.0, -9.0, 2.0, 1.0, -9.0]);
    }

    #[test]
    fn single_precision() {
        let shim = shim();
        let mut t = vec![1.0f32, 2.0, 0.0, 3.0];
        let info = shim.trexc_work(LAPACK_ROW_MAJOR, b'N', 2, &mut t, 2, &mut [], 1, &mut 1, &mut 2, &mut [0.0; 2]);
        assert_eq!(info, 0);
        assert_eq!(t, vec![3.0, 0.0, 2.0, 1.0]);

        let info = shim.trexc_work(7, b'N', 2, &mut t, 2, &mut [], 1, &mut 1, &mut 2, &mut [0.0; 2]);
        assert_eq!(info, -1);
        assert_eq!(shim.xerbla.reports(), reported("LAPACKE_strexc_work", -1));
    }

    #[test]
    fn high_level_bad_layout() {
        let shim = shim();
        let info = shim.trexc(-1, b'N', 3, &mut upper3(), 3, &mut [], 1, &mut 1, &mut 1);
        assert_eq!(info, -1);
        assert_eq!(shim.xerbla.reports(), reported("LAPACKE_dtrexc", -1));
    }

    #[test]
    fn high_level_nancheck() {
        let nan = ::std::f64::NAN;
        let shim = shim();
        let mut t = upper3();
        t[5] = nan;
        let info = shim.trexc(LAPACK_ROW_MAJOR, b'N', 3, &mut t, 3, &mut [], 1, &mut 1, &mut 2);
        assert_eq!(info, -4);

        let mut q = eye(3);
        q[1] = nan;
        let info = shim.trexc(LAPACK_COL_MAJOR, b'V', 3, &mut upper3(), 3, &mut q, 3, &mut 1, &mut 2);
        assert_eq!(info, -6);

        // Q is not looked at unless it will be updated
        let info = shim.trexc(LAPACK_COL_MAJOR, b'N', 3, &mut upper3(), 3, &mut q, 3, &mut 1, &mut 2);
        assert_eq!(info, 0);

        // NaN rejection is silent
        assert!(shim.xerbla.reports().is_empty());
        assert_eq!(shim.kernel.calls(), 1);
    }

    #[test]
    fn high_level_nancheck_disabled() {
        let shim = shim().with_settings(Settings { nancheck: false });
        let mut t = upper3();
        t[0] = ::std::f64::NAN;
        let info = shim.trexc(LAPACK_ROW_MAJOR, b'N', 3, &mut t, 3, &mut [], 1, &mut 1, &mut 1);
        assert_eq!(info, 0);
        assert_eq!(shim.kernel.calls(), 1);
    }

    #[test]
    fn high_level_allocates_work_then_transposes() {
        let shim = shim();
        let (mut t, mut q) = (upper3(), eye(3));
        let info = shim.trexc(LAPACK_ROW_MAJOR, b'V', 3, &mut t, 3, &mut q, 3, &mut 1, &mut 3);
        assert_eq!(info, 0);
        assert_eq!(t, vec![4.0, 5.0, 0.0, 0.0, 6.0, 0.0, 2.0, 3.0, 1.0]);
        assert_eq!(shim.scratch.events(), vec![
            ScratchEvent::Alloc(3),
            ScratchEvent::Alloc(9),
            ScratchEvent::Alloc(9),
            ScratchEvent::Release(9),
            ScratchEvent::Release(9),
            ScratchEvent::Release(3),
        ]);
    }

    #[test]
    fn high_level_work_failure() {
        let shim = shim().with_scratch(CountingScratch::failing_at(0));
        let mut t = upper3();
        let info = shim.trexc(LAPACK_ROW_MAJOR, b'N', 3, &mut t, 3, &mut [], 1, &mut 1, &mut 3);
        assert_eq!(info, LAPACK_WORK_MEMORY_ERROR);
        assert_eq!(t, upper3());
        assert_eq!(shim.xerbla.reports(), reported("LAPACKE_dtrexc", LAPACK_WORK_MEMORY_ERROR));
        assert_eq!(shim.kernel.calls(), 0);
    }

    #[test]
    fn high_level_forwards_work_errors_under_work_name() {
        let shim = shim();
        let info = shim.trexc(LAPACK_ROW_MAJOR, b'N', 3, &mut upper3(), 2, &mut [], 1, &mut 1, &mut 3);
        assert_eq!(info, -5);
        assert_eq!(shim.xerbla.reports(), reported("LAPACKE_dtrexc_work", -5));
    }
}
