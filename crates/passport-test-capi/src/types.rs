//! `#[repr(C)]` record types shared with foreign callers.
//!
//! Field order and widths are the binary contract: host-side marshallers
//! describe these exact layouts, so the layout tests below pin sizes and
//! offsets rather than trusting the compiler silently.

use std::ffi::c_char;

/// Fixed-layout record passed by reference.
///
/// `repr(C)` inserts 4 bytes of padding after `s_int` and after
/// `s_float`, matching the host-side layout descriptions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassingRecord {
    pub s_int: i32,
    pub s_long: i64,
    pub s_float: f32,
    pub s_double: f64,
}

impl PassingRecord {
    /// Sum of the four fields converted to `f64`.
    pub(crate) fn field_sum(&self) -> f64 {
        self.s_int as f64 + self.s_long as f64 + self.s_float as f64 + self.s_double
    }
}

/// Record with an embedded [`PassingRecord`], a pointer to a second,
/// independently-owned one, and a pointer to a caller-owned mutable
/// C string. The embedded and pointed-to records are distinct storage.
#[repr(C)]
#[derive(Debug)]
pub struct ComplexRecord {
    pub id: i32,
    pub record: PassingRecord,
    pub record_ptr: *mut PassingRecord,
    pub name: *mut c_char,
}

/// Record mixing fixed inline arrays with two variable-length sections,
/// each described by its own `(pointer, count)` pair. The counts are
/// authoritative; they need not match the inline array sizes.
#[repr(C)]
#[derive(Debug)]
pub struct ArrayRecord {
    pub s_double: [f64; 5],
    pub s_long: [i64; 8],
    pub s_double_ptr_count: i64,
    pub s_double_ptr: *mut f64,
    pub s_long_ptr_count: i64,
    pub s_long_ptr: *mut i64,
}
