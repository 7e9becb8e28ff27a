//! Export sinks for annotation records.

use annokit_core::ExportError;
use annokit_settings::ExportSettings;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::{Path, PathBuf};

use crate::annotation::AnnotationRecord;

/// Destination for a point-in-time export.
pub trait ExportSink {
    fn write(&mut self, records: &[AnnotationRecord], path: &Path) -> Result<(), ExportError>;
}

/// Writes records as a pretty-printed UTF-8 JSON array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonFileSink {
    indent: usize,
}

impl Default for JsonFileSink {
    fn default() -> Self {
        Self::new(4)
    }
}

impl JsonFileSink {
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }

    pub fn from_settings(settings: &ExportSettings) -> Self {
        Self::new(settings.indent)
    }

    pub fn to_json(&self, records: &[AnnotationRecord]) -> Result<String, ExportError> {
        let indent = " ".repeat(self.indent);
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
        records.serialize(&mut ser)?;
        // serde_json only ever emits valid UTF-8.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl ExportSink for JsonFileSink {
    fn write(&mut self, records: &[AnnotationRecord], path: &Path) -> Result<(), ExportError> {
        let json = self.to_json(records)?;
        std::fs::write(path, json).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Exported {} annotations to {}", records.len(), path.display());
        Ok(())
    }
}

/// `<image stem><suffix>` for an image, the configured blank name otherwise.
pub fn export_filename(image_path: Option<&Path>, settings: &ExportSettings) -> PathBuf {
    match image_path.and_then(Path::file_stem) {
        Some(stem) => {
            let mut name = stem.to_os_string();
            name.push(&settings.file_suffix);
            PathBuf::from(name)
        }
        None => PathBuf::from(&settings.blank_filename),
    }
}
