//! Error type shared by the core logic and the C surface.
//!
//! The surface itself reports failures as integer status codes; this
//! enum is the Rust-side source of truth those codes are mapped from.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A null pointer was passed where a valid reference is required.
    ///
    /// Array-reduction entry points deliberately do NOT produce this:
    /// a null buffer is a defined sentinel meaning "empty" there.
    #[error("null pointer where a valid reference is required")]
    NullPointer,

    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The pointer was never produced by an allocation entry point.
    #[error("pointer was not allocated by this library")]
    ForeignHandle,

    /// The pointer was produced by an allocation entry point but has
    /// already been released.
    #[error("pointer has already been released")]
    DoubleRelease,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
