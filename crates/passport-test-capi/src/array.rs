//! Array reduction ops.
//!
//! A null buffer pointer is a defined sentinel returning the additive
//! identity, not an error. That is the opposite of the scalar write-through
//! helpers. The per-family count widths (`int` for most, `long long`,
//! `short`, and `char` for the L/S/B families) are part of the original
//! signatures and preserved.

use libc::{c_double, c_float, c_int, c_longlong, c_short};

use passport_test_core::reduce::{sum_slice, sum_slice_pair, Accumulate};

use crate::clamp_len;

macro_rules! impl_sum_array {
    ($suffix:ident, $elem:ty, $count:ty) => {
        paste::paste! {
            #[doc = concat!(
                "Sum `count` elements of `", stringify!($elem),
                "`. Null buffer or non-positive count returns 0."
            )]
            #[no_mangle]
            pub extern "C" fn [<sumArr $suffix>](arr: *const $elem, count: $count) -> $elem {
                let len = clamp_len(count as i64);
                if arr.is_null() || len == 0 {
                    return <$elem as Accumulate>::ZERO;
                }
                let xs = unsafe { std::slice::from_raw_parts(arr, len) };
                sum_slice::<$elem, $elem>(xs)
            }
        }
    };
}

impl_sum_array!(D, c_double, c_int);
impl_sum_array!(F, c_float, c_int);
impl_sum_array!(L, c_longlong, c_longlong);
impl_sum_array!(I, c_int, c_int);
impl_sum_array!(S, i16, c_short);
impl_sum_array!(B, i8, i8);

/// Sum of element-wise sums of two double buffers of equal length.
///
/// Either buffer may be null; a null side contributes nothing.
#[no_mangle]
pub extern "C" fn sumArrDD(arr: *const c_double, arr2: *const c_double, count: c_int) -> c_double {
    let len = clamp_len(count as i64);
    if len == 0 {
        return 0.0;
    }

    let a = (!arr.is_null()).then(|| unsafe { std::slice::from_raw_parts(arr, len) });
    let b = (!arr2.is_null()).then(|| unsafe { std::slice::from_raw_parts(arr2, len) });

    match (a, b) {
        (Some(a), Some(b)) => sum_slice_pair::<c_double, c_double>(a, b),
        (Some(a), None) => sum_slice::<c_double, c_double>(a),
        (None, Some(b)) => sum_slice::<c_double, c_double>(b),
        (None, None) => 0.0,
    }
}
