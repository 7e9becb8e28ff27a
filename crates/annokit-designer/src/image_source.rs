//! Background image provider.
//!
//! The annotation core never needs pixels, only the image size used to
//! normalize exported bounding boxes and the path used to name the export.

use annokit_core::ResourceError;
use annokit_settings::CanvasSettings;
use std::path::{Path, PathBuf};

pub trait ImageProvider {
    /// Width and height in pixels.
    fn dimensions(&self) -> (u32, u32);
    /// The backing file, `None` for a blank canvas.
    fn source_path(&self) -> Option<&Path>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    path: Option<PathBuf>,
    width: u32,
    height: u32,
}

impl ImageSource {
    /// Reads the image header to obtain its dimensions.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let (width, height) = image::image_dimensions(path).map_err(|e| ResourceError::Unloadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        tracing::debug!("Opened {} ({}x{})", path.display(), width, height);
        Ok(Self {
            path: Some(path.to_path_buf()),
            width,
            height,
        })
    }

    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            path: None,
            width,
            height,
        }
    }

    /// Opens `path`, or falls back to the configured blank canvas when it is
    /// absent or cannot be decoded.
    pub fn open_or_blank(path: Option<&Path>, canvas: &CanvasSettings) -> Self {
        let Some(path) = path else {
            return Self::blank(canvas.blank_width, canvas.blank_height);
        };
        match Self::open(path) {
            Ok(source) => source,
            Err(e) => {
                tracing::warn!("{}; using a blank {}x{} canvas", e, canvas.blank_width, canvas.blank_height);
                Self::blank(canvas.blank_width, canvas.blank_height)
            }
        }
    }

    pub fn is_blank(&self) -> bool {
        self.path.is_none()
    }
}

impl ImageProvider for ImageSource {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn source_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
