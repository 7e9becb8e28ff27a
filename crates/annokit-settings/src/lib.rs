//! Annokit Settings Crate
//!
//! Handles annotator configuration: shape and handle styles, the blank
//! canvas fallback and export naming, persisted as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{
    CanvasSettings, Config, ExportSettings, HandleSettings, ShapeStyle, StyleSettings,
};
pub use error::{ConfigError, SettingsError, SettingsResult};
