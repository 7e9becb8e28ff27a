//! # Annokit Core
//!
//! Core types and constants for Annokit.
//! Provides the error taxonomy shared by the shape model, the export
//! boundary and the image provider, the interaction constants that fix
//! handle geometry, and aliases for sharing a session across threads.

pub mod constants;
pub mod error;
pub mod types;

pub use error::{Error, ExportError, ResourceError, Result, ShapeError};

pub use types::{thread_safe, ThreadSafe};
