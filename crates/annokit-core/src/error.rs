//! Error handling for Annokit
//!
//! Provides error types for every layer of the annotation engine:
//! - Shape errors (vertex/handle indexing)
//! - Export errors (writing annotation files)
//! - Resource errors (loading background images)
//!
//! Geometry that would collapse below its minimum size is never an error:
//! it is clamped in place by the shape model.
//!
//! All error types use `thiserror` for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;

/// Shape error type
///
/// Raised by shape mutations that address a vertex or handle directly.
/// The interaction controller recovers from these locally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// Vertex or handle index out of bounds
    #[error("Index {index} out of range for shape with {len} points")]
    InvalidIndex {
        /// The requested index.
        index: usize,
        /// The number of addressable points.
        len: usize,
    },
}

/// Export error type
///
/// Represents failures of the export sink. These are reported to the caller
/// and never abort the interaction loop.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The annotation file could not be written
    #[error("Failed to write annotations to {path}: {source}")]
    Io {
        /// Destination that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The annotation records could not be serialized
    #[error("Failed to serialize annotations: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Resource error type
///
/// Represents failures of the image provider.
#[derive(Error, Debug, Clone)]
pub enum ResourceError {
    /// Image could not be opened or decoded
    #[error("Unable to load image {path}: {reason}")]
    Unloadable {
        /// The path of the image.
        path: PathBuf,
        /// The reason the image could not be loaded.
        reason: String,
    },
}

/// Main error type for Annokit
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Shape error
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// Export error
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Resource error
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
