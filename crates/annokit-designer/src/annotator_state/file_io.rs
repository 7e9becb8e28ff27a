//! Annotation export for the annotator session.

use annokit_core::ExportError;
use std::path::{Path, PathBuf};

use super::AnnotatorState;
use crate::export::{self, ExportSink, JsonFileSink};
use crate::image_source::ImageProvider;
use crate::renderer::Renderer;

impl<R: Renderer> AnnotatorState<R> {
    /// File name derived from the background image, or the blank-canvas name.
    pub fn export_filename(&self) -> PathBuf {
        export::export_filename(self.image.source_path(), &self.config.export)
    }

    /// Exports into `dir` under [`Self::export_filename`] and returns the
    /// written path.
    pub fn export_annotations(&self, dir: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
        let path = dir.as_ref().join(self.export_filename());
        self.export_to(&path)?;
        Ok(path)
    }

    /// Exports to an explicit path with the configured JSON sink.
    pub fn export_to(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let mut sink = JsonFileSink::from_settings(&self.config.export);
        self.export_with(&mut sink, path.as_ref())
    }

    /// Exports through any sink. Failures leave the session untouched.
    pub fn export_with<S: ExportSink>(&self, sink: &mut S, path: &Path) -> Result<(), ExportError> {
        let records = self.annotations();
        sink.write(&records, path).inspect_err(|e| {
            tracing::warn!("Export failed: {}", e);
        })
    }
}
