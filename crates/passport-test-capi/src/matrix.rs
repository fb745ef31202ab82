//! Matrix reduction ops, in both physical encodings.
//!
//! Each family exists twice: `sumMat*` reads one flat row-major buffer
//! addressed `cells[y*cols + x]`, `sumMat*PtrPtr` reads an array of row
//! pointers addressed `rows[y][x]`. The two are independent code paths
//! (flat indexing vs. per-row slices) that must agree by test, and both
//! accumulate in row-major order so float rounding is identical.
//!
//! The narrow integer families (S, B) widen their accumulator to `int`
//! so the returned total survives; the other families accumulate in
//! their own width.

use libc::{c_double, c_float, c_int, c_longlong};

use passport_test_core::reduce::{sum_matrix_flat, sum_matrix_rows, Accumulate};

use crate::clamp_len;

macro_rules! impl_sum_matrix {
    ($suffix:ident, $elem:ty, $acc:ty) => {
        paste::paste! {
            #[doc = concat!(
                "Row-major sum over a flat `rows * cols` buffer of `",
                stringify!($elem), "`. Null or empty input returns 0."
            )]
            #[no_mangle]
            pub extern "C" fn [<sumMat $suffix>](
                rows: c_int,
                cols: c_int,
                mat: *const $elem,
            ) -> $acc {
                let (rows, cols) = (clamp_len(rows as i64), clamp_len(cols as i64));
                if mat.is_null() || rows == 0 || cols == 0 {
                    return <$acc as Accumulate>::ZERO;
                }
                let cells = unsafe { std::slice::from_raw_parts(mat, rows * cols) };
                sum_matrix_flat::<$elem, $acc>(cells, rows, cols)
            }

            #[doc = concat!(
                "Row-major sum over `rows` row pointers of `cols` `",
                stringify!($elem), "` each. Null rows contribute 0."
            )]
            #[no_mangle]
            pub extern "C" fn [<sumMat $suffix PtrPtr>](
                rows: c_int,
                cols: c_int,
                mat: *const *const $elem,
            ) -> $acc {
                let (rows, cols) = (clamp_len(rows as i64), clamp_len(cols as i64));
                if mat.is_null() || rows == 0 || cols == 0 {
                    return <$acc as Accumulate>::ZERO;
                }
                let row_ptrs = unsafe { std::slice::from_raw_parts(mat, rows) };
                let row_slices = row_ptrs
                    .iter()
                    .filter(|p| !p.is_null())
                    .map(|&p| unsafe { std::slice::from_raw_parts(p, cols) });
                sum_matrix_rows::<$elem, $acc, _>(row_slices)
            }
        }
    };
}

impl_sum_matrix!(D, c_double, c_double);
impl_sum_matrix!(F, c_float, c_float);
impl_sum_matrix!(L, c_longlong, c_longlong);
impl_sum_matrix!(I, c_int, c_int);
impl_sum_matrix!(S, i16, c_int);
impl_sum_matrix!(B, i8, c_int);
