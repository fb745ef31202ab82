//! C-compatible FFI test-fixture surface.
//!
//! This crate builds `libpassport_test`, the native side of a
//! cross-language binding test suite. Every exported function is a
//! short, single-purpose operation; the contract worth caring about is
//! the boundary itself: which side owns each buffer, how lengths travel
//! out-of-band, and how struct layouts and callback pointers cross.
//!
//! ## Conventions
//!
//! - Raw `(pointer, length)` pairs become slices exactly once, at the
//!   entry point; the logic in `passport-test-core` never re-derives a
//!   length from a pointer.
//! - Array-reduction entry points treat a null buffer as a defined
//!   empty-input sentinel returning the additive identity. Scalar
//!   write-through entry points do NOT tolerate null and report
//!   [`PT_NULL_POINTER`] instead; this asymmetry is part of the fixture
//!   contract.
//! - Buffers returned by the allocation entry points are owned by the
//!   caller and must be passed to `freeMemory` exactly once. Double
//!   release and foreign pointers are checked failures, not UB.
//! - Callback pointers are only ever used within the call that received
//!   them, and run under `catch_unwind` so no panic crosses the
//!   boundary.

// C API requires unsafe operations with raw pointers
#![allow(clippy::not_unsafe_ptr_arg_deref)]
#![allow(non_snake_case)]

mod alloc;
mod array;
mod callback;
mod matrix;
mod pointer;
mod record;
mod scalar;
mod string;
mod types;

pub use alloc::*;
pub use array::*;
pub use callback::*;
pub use matrix::*;
pub use pointer::*;
pub use record::*;
pub use scalar::*;
pub use string::*;
pub use types::*;

use passport_test_core::Error;
use std::ffi::c_char;

/// Status code type for the C surface.
pub type StatusCode = libc::c_int;

pub const PT_SUCCESS: StatusCode = 0;
pub const PT_NULL_POINTER: StatusCode = -1;
pub const PT_INVALID_ARGUMENT: StatusCode = -2;
pub const PT_INVALID_HANDLE: StatusCode = -3;
pub const PT_INTERNAL_ERROR: StatusCode = -4;

pub(crate) fn error_status(err: &Error) -> StatusCode {
    match err {
        Error::NullPointer => PT_NULL_POINTER,
        Error::InvalidArgument(_) => PT_INVALID_ARGUMENT,
        Error::ForeignHandle | Error::DoubleRelease => PT_INVALID_HANDLE,
    }
}

/// Clamp a possibly-negative element count to a usable length.
/// Non-positive counts mean "empty" everywhere on this surface.
pub(crate) fn clamp_len(count: i64) -> usize {
    if count > 0 {
        count as usize
    } else {
        0
    }
}

/// Get a human-readable message for a status code.
///
/// The returned string is static and must not be freed.
#[no_mangle]
pub extern "C" fn passport_status_message(status: StatusCode) -> *const c_char {
    let msg = match status {
        PT_SUCCESS => "Success\0",
        PT_NULL_POINTER => "Null pointer\0",
        PT_INVALID_ARGUMENT => "Invalid argument\0",
        PT_INVALID_HANDLE => "Pointer is not a live allocation of this library\0",
        PT_INTERNAL_ERROR => "Internal error\0",
        _ => "Unknown error\0",
    };

    msg.as_ptr() as *const c_char
}

/// Get the version of this library as a static string.
#[no_mangle]
pub extern "C" fn passport_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}
