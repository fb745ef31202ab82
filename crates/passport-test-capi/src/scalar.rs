//! Scalar ops and scalar write-through helpers.
//!
//! Unlike the array reductions, the `read*` family does not tolerate a
//! null output pointer: the original library's undefined behavior is
//! upgraded to a [`PT_NULL_POINTER`] status here. The status return is
//! ABI-compatible with the original `void` signature for callers that
//! ignore it.

use libc::{c_double, c_int};

use crate::{StatusCode, PT_NULL_POINTER, PT_SUCCESS};

/// Add two doubles.
#[no_mangle]
pub extern "C" fn sumD(d1: c_double, d2: c_double) -> c_double {
    d1 + d2
}

/// Write `set` through `out` as a double.
///
/// Takes an `int` and converts, unlike the rest of the family: an
/// original-surface asymmetry that callers depend on.
#[no_mangle]
pub extern "C" fn readD(out: *mut c_double, set: c_int) -> StatusCode {
    if out.is_null() {
        return PT_NULL_POINTER;
    }
    unsafe { *out = set as c_double };
    PT_SUCCESS
}

macro_rules! impl_read_scalar {
    ($suffix:ident, $ty:ty) => {
        paste::paste! {
            #[doc = concat!("Write `set` through `out` as `", stringify!($ty), "`.")]
            #[no_mangle]
            pub extern "C" fn [<read $suffix>](out: *mut $ty, set: $ty) -> StatusCode {
                if out.is_null() {
                    return PT_NULL_POINTER;
                }
                unsafe { *out = set };
                PT_SUCCESS
            }
        }
    };
}

impl_read_scalar!(F, f32);
impl_read_scalar!(L, i64);
impl_read_scalar!(I, i32);
impl_read_scalar!(S, i16);
impl_read_scalar!(B, i8);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sum_two_doubles() {
        assert_relative_eq!(sumD(4.0, 5.0), 9.0);
    }

    #[test]
    fn read_double_converts_from_int() {
        let mut v = 0.0f64;
        assert_eq!(readD(&mut v, 7), PT_SUCCESS);
        assert_eq!(v, 7.0);
    }

    #[test]
    fn read_family_writes_through() {
        let mut f = 0.0f32;
        assert_eq!(readF(&mut f, 5.0), PT_SUCCESS);
        assert_eq!(f, 5.0);

        let mut l = 0i64;
        assert_eq!(readL(&mut l, 5), PT_SUCCESS);
        assert_eq!(l, 5);

        let mut i = 0i32;
        assert_eq!(readI(&mut i, 5), PT_SUCCESS);
        assert_eq!(i, 5);

        let mut s = 0i16;
        assert_eq!(readS(&mut s, 5), PT_SUCCESS);
        assert_eq!(s, 5);

        let mut b = 0i8;
        assert_eq!(readB(&mut b, 5), PT_SUCCESS);
        assert_eq!(b, 5);
    }

    #[test]
    fn null_out_ref_is_an_error_not_a_crash() {
        assert_eq!(readD(std::ptr::null_mut(), 1), PT_NULL_POINTER);
        assert_eq!(readL(std::ptr::null_mut(), 1), PT_NULL_POINTER);
        assert_eq!(readB(std::ptr::null_mut(), 1), PT_NULL_POINTER);
    }
}
