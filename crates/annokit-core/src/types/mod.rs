//! Type system utilities and aliases.
//!
//! - [`aliases`]: `Arc<Mutex<T>>` wrapper for sharing a session across threads.

pub mod aliases;

pub use aliases::*;
