//! Safe logic behind the passport test surface.
//!
//! The C surface in `passport-test-capi` converts every raw
//! `(pointer, length)` pair into a slice exactly once, at the boundary;
//! everything in this crate operates on those slices and on plain
//! values. Nothing here touches raw pointers or `unsafe`.

#![forbid(unsafe_code)]

mod error;
pub mod reduce;
pub mod registry;
pub mod text;

pub use error::{Error, Result};
