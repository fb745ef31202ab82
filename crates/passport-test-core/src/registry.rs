//! Registry of live allocations handed across the boundary.
//!
//! Every buffer the surface allocates is recorded here with its byte
//! size; the release entry point consumes the record before freeing.
//! Releasing a pointer that was never recorded, or recorded and already
//! released, is a checked failure instead of undefined behavior.

use std::collections::{HashMap, HashSet};
use std::sync::{LazyLock, Mutex, PoisonError};

use crate::{Error, Result};

#[derive(Default)]
struct State {
    /// Live allocations: address -> byte size.
    live: HashMap<usize, usize>,
    /// Addresses that were live once and have been released since.
    /// Lets a double release be reported as such rather than as a
    /// foreign pointer. An address the allocator reuses is moved back
    /// to `live` on registration.
    released: HashSet<usize>,
}

static STATE: LazyLock<Mutex<State>> = LazyLock::new(|| Mutex::new(State::default()));

fn state() -> std::sync::MutexGuard<'static, State> {
    STATE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Record a freshly-allocated buffer. Ownership is now the caller's.
pub fn register(addr: usize, bytes: usize) {
    let mut st = state();
    st.released.remove(&addr);
    st.live.insert(addr, bytes);
}

/// Consume the record for `addr`, returning its byte size.
///
/// The caller frees the memory only after this succeeds.
pub fn release(addr: usize) -> Result<usize> {
    let mut st = state();
    match st.live.remove(&addr) {
        Some(bytes) => {
            st.released.insert(addr);
            Ok(bytes)
        }
        None if st.released.contains(&addr) => Err(Error::DoubleRelease),
        None => Err(Error::ForeignHandle),
    }
}

/// Total bytes currently live. Host-side leak tests assert this
/// returns to its prior value after balanced alloc/release pairs.
pub fn live_bytes() -> usize {
    state().live.values().sum()
}
