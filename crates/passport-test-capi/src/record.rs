//! Struct-passing ops.
//!
//! All three entry points take a pointer to a caller-owned record; the
//! caller sees every in-place mutation after the call returns. Totals
//! are computed from the pre-mutation contents. Bodies run under
//! `catch_unwind` so nothing unwinds across the boundary; a panic
//! surfaces as the 0.0 sentinel.

use std::ffi::CStr;
use std::panic::{catch_unwind, AssertUnwindSafe};

use libc::c_double;

use passport_test_core::text::ascii_upper_in_place;

use crate::clamp_len;
use crate::types::{ArrayRecord, ComplexRecord, PassingRecord};

/// Sum of the record's four fields as a double. Side-effect free.
/// Null record returns 0.0.
#[no_mangle]
pub extern "C" fn passStruct(rec: *const PassingRecord) -> c_double {
    if rec.is_null() {
        return 0.0;
    }
    let result = catch_unwind(AssertUnwindSafe(|| unsafe { (*rec).field_sum() }));
    result.unwrap_or(0.0)
}

/// Sum both the embedded and the pointed-to record, then mutate in
/// place: upper-case the `name` bytes, `id += 10`, embedded
/// `s_int += 10`, pointed-to `s_int += 20`.
///
/// The embedded and pointed-to records are distinct storage, so the two
/// `s_int` increments never land on the same field. Null record returns
/// 0.0 untouched; a null `record_ptr` or `name` skips that part only.
#[no_mangle]
pub extern "C" fn passComplex(rec: *mut ComplexRecord) -> c_double {
    if rec.is_null() {
        return 0.0;
    }

    let result = catch_unwind(AssertUnwindSafe(|| unsafe {
        let rec = &mut *rec;

        let mut total = rec.record.field_sum();
        if !rec.record_ptr.is_null() {
            total += (*rec.record_ptr).field_sum();
        }

        if !rec.name.is_null() {
            let len = CStr::from_ptr(rec.name).to_bytes().len();
            let bytes = std::slice::from_raw_parts_mut(rec.name as *mut u8, len);
            ascii_upper_in_place(bytes);
        }

        rec.id = rec.id.wrapping_add(10);
        rec.record.s_int = rec.record.s_int.wrapping_add(10);
        if !rec.record_ptr.is_null() {
            let pointed = &mut *rec.record_ptr;
            pointed.s_int = pointed.s_int.wrapping_add(20);
        }

        total
    }));

    result.unwrap_or(0.0)
}

/// Total of both inline arrays and both pointed-to sections, then copy
/// between inline and pointed-to storage.
///
/// The copy directions differ and are contractual: pointed-to doubles
/// overwrite the inline double array (up to `min(5, count)`), while the
/// inline long array overwrites the pointed-to long section (up to
/// `min(8, count)`). Null record returns 0.0; a null section pointer
/// contributes nothing and its copy is skipped.
#[no_mangle]
pub extern "C" fn passStructWithArrays(rec: *mut ArrayRecord) -> c_double {
    if rec.is_null() {
        return 0.0;
    }

    let result = catch_unwind(AssertUnwindSafe(|| unsafe {
        let rec = &mut *rec;

        let d_len = clamp_len(rec.s_double_ptr_count);
        let l_len = clamp_len(rec.s_long_ptr_count);
        let d_section = (!rec.s_double_ptr.is_null() && d_len > 0)
            .then(|| std::slice::from_raw_parts_mut(rec.s_double_ptr, d_len));
        let l_section = (!rec.s_long_ptr.is_null() && l_len > 0)
            .then(|| std::slice::from_raw_parts_mut(rec.s_long_ptr, l_len));

        let mut total: f64 = rec.s_double.iter().sum();
        total += rec.s_long.iter().map(|&x| x as f64).sum::<f64>();
        if let Some(ds) = &d_section {
            total += ds.iter().sum::<f64>();
        }
        if let Some(ls) = &l_section {
            total += ls.iter().map(|&x| x as f64).sum::<f64>();
        }

        if let Some(ds) = d_section {
            let n = rec.s_double.len().min(ds.len());
            rec.s_double[..n].copy_from_slice(&ds[..n]);
        }
        if let Some(ls) = l_section {
            let n = rec.s_long.len().min(ls.len());
            ls[..n].copy_from_slice(&rec.s_long[..n]);
        }

        total
    }));

    result.unwrap_or(0.0)
}
