//! String queries and caller-buffer string ops.
//!
//! Everything here operates on caller-owned memory; nothing is
//! allocated or retained. See `alloc.rs` for the ownership-transferring
//! string copy.

use std::ffi::{c_char, CStr};
use std::ptr;

use libc::c_int;

use passport_test_core::reduce::sum_slice;
use passport_test_core::text::FILL_TEXT;

use crate::clamp_len;

/// Length of a null-terminated string. Null returns -1.
#[no_mangle]
pub extern "C" fn cstringLength(s: *const c_char) -> c_int {
    if s.is_null() {
        return -1;
    }
    unsafe { CStr::from_ptr(s) }.to_bytes().len() as c_int
}

/// Swap entries `i` and `j` of a caller-owned array of C strings, in
/// place. Returns the summed lengths of the two strings, or -1 if the
/// array, either entry, or either index is invalid.
///
/// The caller guarantees both indices are within the array; the surface
/// has no length to check them against.
#[no_mangle]
pub extern "C" fn swapStrings(strings: *mut *mut c_char, i: c_int, j: c_int) -> c_int {
    if strings.is_null() || i < 0 || j < 0 {
        return -1;
    }

    let (pi, pj) = unsafe { (strings.add(i as usize), strings.add(j as usize)) };
    let (si, sj) = unsafe { (*pi, *pj) };
    if si.is_null() || sj.is_null() {
        return -1;
    }

    let total = cstringLength(si) + cstringLength(sj);
    unsafe {
        *pi = sj;
        *pj = si;
    }
    total
}

/// Write `"hello world"` (null-terminated) into the caller's buffer and
/// return its length. Returns -1 without writing if the buffer is null
/// or cannot hold the text plus terminator.
#[no_mangle]
pub extern "C" fn fillChars(buf: *mut c_char, size: c_int) -> c_int {
    let text = FILL_TEXT.as_bytes();
    if buf.is_null() || clamp_len(size as i64) < text.len() + 1 {
        return -1;
    }

    unsafe {
        ptr::copy_nonoverlapping(text.as_ptr(), buf as *mut u8, text.len());
        *buf.add(text.len()) = 0;
    }
    text.len() as c_int
}

/// Sum `byte_count / 2` UTF-16 code units. Null is the empty-input
/// sentinel, like the other array reductions.
#[no_mangle]
pub extern "C" fn passChars(chars: *const u16, byte_count: c_int) -> c_int {
    let units = clamp_len(byte_count as i64) / 2;
    if chars.is_null() || units == 0 {
        return 0;
    }
    let xs = unsafe { std::slice::from_raw_parts(chars, units) };
    sum_slice::<u16, i32>(xs)
}
