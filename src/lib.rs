//! # Annokit
//!
//! An interactive 2D shape-annotation engine. Users draw rectangles,
//! circles, ellipses, polygons and polylines over an image, then edit them
//! by dragging handles or bodies, rotate rectangles, and export the result
//! as JSON in image pixel coordinates.
//!
//! ## Architecture
//!
//! Annokit is organized as a workspace with multiple crates:
//!
//! 1. **annokit-core** - Error taxonomy, interaction constants, shared-state aliases
//! 2. **annokit-settings** - Styles, handle colors, canvas and export configuration
//! 3. **annokit-designer** - Geometry, shape model, drag controller, export, rendering
//! 4. **annokit** - Headless binary that replays recorded sessions

pub use annokit_core as core;
pub use annokit_designer as designer;
pub use annokit_settings as settings;

pub use annokit_core::{Error, ExportError, ResourceError, Result, ShapeError};

pub use annokit_designer::{
    parse_script, AnnotationRecord, AnnotatorState, DragState, DrawingMode, ImageSource,
    InteractionController, Point, PointerEvent, SessionStep, Shape, SvgRenderer,
};

pub use annokit_settings::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging on stderr with `RUST_LOG` support. Stdout is
/// left free for the binary's own output.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
