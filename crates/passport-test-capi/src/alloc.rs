//! Allocation ops: buffers allocated here, owned by the caller, and
//! returned through `freeMemory` exactly once.
//!
//! Every allocation goes through `libc::malloc` and is recorded in the
//! core registry with its byte size. `freeMemory` consumes the record
//! before calling `libc::free`, which turns double release and
//! foreign-pointer release into checked failures that leave the memory
//! untouched.

use std::ffi::{c_char, c_void, CStr};
use std::ptr;

use libc::{c_double, c_int, c_longlong};

use passport_test_core::{registry, text};

use crate::{error_status, StatusCode, PT_SUCCESS};

/// Allocate a null-terminated copy of `src`. Ownership transfers to the
/// caller; release with `freeMemory`. Null `src` returns null.
///
/// The copy is `strlen(src) + 1` bytes, content plus terminator. (The
/// original C library omitted the terminator byte from the allocation;
/// that defect is corrected here.)
#[no_mangle]
pub extern "C" fn mallocString(src: *const c_char) -> *mut c_char {
    if src.is_null() {
        return ptr::null_mut();
    }

    let bytes = unsafe { CStr::from_ptr(src) }.to_bytes();
    let total = bytes.len() + 1;

    let copy = unsafe { libc::malloc(total) } as *mut c_char;
    if copy.is_null() {
        return ptr::null_mut();
    }

    unsafe {
        ptr::copy_nonoverlapping(bytes.as_ptr(), copy as *mut u8, bytes.len());
        *copy.add(bytes.len()) = 0;
    }

    registry::register(copy as usize, total);
    copy
}

/// Allocate `count` doubles initialized to `0, 1, ..., count-1` and
/// transfer ownership to the caller. `count <= 0` returns null.
#[no_mangle]
pub extern "C" fn mallocDoubles(count: c_int) -> *mut c_double {
    if count <= 0 {
        return ptr::null_mut();
    }
    let len = count as usize;
    let bytes = len * std::mem::size_of::<c_double>();

    let buf = unsafe { libc::malloc(bytes) } as *mut c_double;
    if buf.is_null() {
        return ptr::null_mut();
    }

    let out = unsafe { std::slice::from_raw_parts_mut(buf, len) };
    text::fill_sequence(out);

    registry::register(buf as usize, bytes);
    buf
}

/// Release a buffer previously returned by an allocation entry point.
///
/// Null is a no-op returning `PT_SUCCESS`. A pointer that is not a live
/// allocation of this library returns `PT_INVALID_HANDLE` and is not
/// freed.
#[no_mangle]
pub extern "C" fn freeMemory(handle: *mut c_void) -> StatusCode {
    if handle.is_null() {
        return PT_SUCCESS;
    }

    match registry::release(handle as usize) {
        Ok(_) => {
            unsafe { libc::free(handle) };
            PT_SUCCESS
        }
        Err(err) => error_status(&err),
    }
}

/// Total bytes currently live across all allocation entry points.
/// Host-side leak tests assert this is balanced.
#[no_mangle]
pub extern "C" fn allocatedBytes() -> c_longlong {
    registry::live_bytes() as c_longlong
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PT_INVALID_HANDLE;
    use std::ffi::CString;
    use std::sync::{Mutex, MutexGuard, PoisonError};

    // The registry is process-wide, so tests that assert on byte totals
    // must not interleave with other allocating tests.
    static ALLOC_LOCK: Mutex<()> = Mutex::new(());

    fn serialize() -> MutexGuard<'static, ()> {
        ALLOC_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[test]
    fn malloc_string_copies_and_terminates() {
        let _guard = serialize();
        let src = CString::new("abc").unwrap();
        let copy = mallocString(src.as_ptr());
        assert!(!copy.is_null());
        assert_ne!(copy as *const c_char, src.as_ptr());

        let read = unsafe { CStr::from_ptr(copy) };
        assert_eq!(read.to_bytes(), b"abc");

        // Independent storage: mutating the copy leaves the source alone.
        unsafe { *copy = b'x' as c_char };
        assert_eq!(src.as_bytes(), b"abc");

        assert_eq!(freeMemory(copy as *mut c_void), PT_SUCCESS);
    }

    #[test]
    fn malloc_string_null_and_empty() {
        let _guard = serialize();
        assert!(mallocString(ptr::null()).is_null());

        let empty = CString::new("").unwrap();
        let copy = mallocString(empty.as_ptr());
        assert!(!copy.is_null());
        assert_eq!(unsafe { CStr::from_ptr(copy) }.to_bytes(), b"");
        assert_eq!(freeMemory(copy as *mut c_void), PT_SUCCESS);
    }

    #[test]
    fn malloc_doubles_is_index_sequence() {
        let _guard = serialize();
        let buf = mallocDoubles(5);
        assert!(!buf.is_null());
        let xs = unsafe { std::slice::from_raw_parts(buf, 5) };
        assert_eq!(xs, [0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(freeMemory(buf as *mut c_void), PT_SUCCESS);
    }

    #[test]
    fn malloc_doubles_rejects_non_positive_counts() {
        assert!(mallocDoubles(0).is_null());
        assert!(mallocDoubles(-4).is_null());
    }

    #[test]
    fn double_release_is_a_checked_failure() {
        let _guard = serialize();
        let buf = mallocDoubles(3) as *mut c_void;
        assert_eq!(freeMemory(buf), PT_SUCCESS);
        assert_eq!(freeMemory(buf), PT_INVALID_HANDLE);
    }

    #[test]
    fn foreign_pointer_release_is_a_checked_failure() {
        let mut local = 0u64;
        let foreign = &mut local as *mut u64 as *mut c_void;
        assert_eq!(freeMemory(foreign), PT_INVALID_HANDLE);
    }

    #[test]
    fn null_release_is_a_no_op() {
        assert_eq!(freeMemory(ptr::null_mut()), PT_SUCCESS);
    }

    #[test]
    fn allocated_bytes_balances() {
        let _guard = serialize();
        let before = allocatedBytes();
        let buf = mallocDoubles(8);
        assert_eq!(allocatedBytes(), before + 64);
        assert_eq!(freeMemory(buf as *mut c_void), PT_SUCCESS);
        assert_eq!(allocatedBytes(), before);
    }
}
