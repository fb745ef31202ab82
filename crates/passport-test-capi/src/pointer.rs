//! Pointer write-through helpers.
//!
//! These exist so host marshallers can verify that raw addresses survive
//! a round trip through the boundary unmodified.

use std::ffi::c_void;
use std::ptr;

use libc::c_longlong;

use crate::{StatusCode, PT_NULL_POINTER, PT_SUCCESS};

/// Write the raw value `set` through `out` as a pointer.
#[no_mangle]
pub extern "C" fn readPointer(out: *mut *mut c_void, set: c_longlong) -> StatusCode {
    if out.is_null() {
        return PT_NULL_POINTER;
    }
    unsafe { *out = set as usize as *mut c_void };
    PT_SUCCESS
}

/// Write `value` through `out` and return it. Null `out` returns null
/// and writes nothing.
#[no_mangle]
pub extern "C" fn getPointer(out: *mut *mut c_void, value: *mut c_void) -> *mut c_void {
    if out.is_null() {
        return ptr::null_mut();
    }
    unsafe { *out = value };
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_pointer_writes_raw_address() {
        let mut p: *mut c_void = ptr::null_mut();
        assert_eq!(readPointer(&mut p, 5), PT_SUCCESS);
        assert_eq!(p as usize, 5);
    }

    #[test]
    fn read_pointer_null_out() {
        assert_eq!(readPointer(ptr::null_mut(), 5), PT_NULL_POINTER);
    }

    #[test]
    fn get_pointer_round_trips() {
        let mut target = 0u64;
        let addr = &mut target as *mut u64 as *mut c_void;

        let mut p: *mut c_void = ptr::null_mut();
        let ret = getPointer(&mut p, addr);
        assert_eq!(p, addr);
        assert_eq!(ret, addr);
    }

    #[test]
    fn get_pointer_null_out_returns_null() {
        let mut target = 0u64;
        let addr = &mut target as *mut u64 as *mut c_void;
        assert!(getPointer(ptr::null_mut(), addr).is_null());
    }
}
