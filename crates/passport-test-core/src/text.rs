//! In-place text transforms and buffer fills used by the surface.

/// Payload written by the `fillChars` entry point.
pub const FILL_TEXT: &str = "hello world";

/// Upper-case ASCII lowercase bytes in place.
///
/// The original library shifted every byte by -32 unconditionally,
/// corrupting anything outside `a..=z`; here the shift is guarded so
/// other bytes pass through untouched. Length and termination of the
/// buffer are unchanged either way.
pub fn ascii_upper_in_place(bytes: &mut [u8]) {
    for b in bytes {
        if b.is_ascii_lowercase() {
            *b -= 32;
        }
    }
}

/// Fill a double buffer with its own indices: `0, 1, 2, ...`.
pub fn fill_sequence(out: &mut [f64]) {
    for (i, x) in out.iter_mut().enumerate() {
        *x = i as f64;
    }
}
