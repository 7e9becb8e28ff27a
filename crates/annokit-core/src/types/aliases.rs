//! Type aliases for shared session state.
//!
//! The annotation engine itself is single-threaded. A host that dispatches
//! pointer events from more than one thread wraps the whole session in a
//! [`ThreadSafe`] so that every press/drag/release step runs inside one
//! critical section: a drag step touches several fields of the active shape
//! and must never interleave with another step.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use annokit_core::types::*;
//!
//! let session: ThreadSafe<AnnotatorState<SvgRenderer>> = thread_safe(state);
//! session.lock().handle_event(event);
//! ```

use parking_lot::Mutex;
use std::sync::Arc;

/// A thread-safe, mutex-protected wrapper for cross-thread sharing.
///
/// Uses `parking_lot::Mutex` for better performance than `std::sync::Mutex`.
pub type ThreadSafe<T> = Arc<Mutex<T>>;

/// Create a new thread-safe value.
pub fn thread_safe<T>(value: T) -> ThreadSafe<T> {
    Arc::new(Mutex::new(value))
}
