//! # Annokit Designer
//!
//! Shape geometry and drag interaction for annotating images with
//! rectangles, circles, ellipses, polygons and polylines.
//!
//! ## Core Components
//!
//! - **Geometry**: centers, rotation, containment and proximity tests
//! - **Model**: the five shape variants with their handle layouts,
//!   hit-testing and mutations
//! - **Interaction**: the drag state machine interpreting press, drag,
//!   release and double-click against the shape collection
//! - **Annotation**: projection of shapes into exportable records
//!
//! Around the core sit the collaborators a host needs: an export sink, an
//! image provider, a renderer and the [`AnnotatorState`] session tying them
//! together.
//!
//! ## Architecture
//!
//! ```text
//! AnnotatorState (host session)
//!   ├── InteractionController (drag state machine)
//!   │     └── Shapes (Rectangle, Circle, Ellipse, Polygon, Polyline)
//!   │           └── Geometry
//!   ├── Renderer (called after each state change)
//!   ├── ImageSource (dimensions for normalization)
//!   └── ExportSink (JSON annotation file)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use annokit_designer::{AnnotatorState, NullRenderer, Point, PointerEvent};
//!
//! let mut state = AnnotatorState::new(Config::default(), NullRenderer);
//! state.handle_event(PointerEvent::Press(Point::new(100.0, 100.0)));
//! state.handle_event(PointerEvent::Drag(Point::new(150.0, 140.0)));
//! state.handle_event(PointerEvent::Release(Point::new(150.0, 140.0)));
//! state.export_annotations("out")?;
//! ```

pub mod annotation;
pub mod annotator_state;
pub mod export;
pub mod geometry;
pub mod image_source;
pub mod interaction;
pub mod model;
pub mod renderer;

pub use annotation::{AnnotationBody, AnnotationRecord};
pub use annotator_state::{parse_script, AnnotatorState, SessionStep};
pub use export::{export_filename, ExportSink, JsonFileSink};
pub use geometry::{Bounds, Extent, Point};
pub use image_source::{ImageProvider, ImageSource};
pub use interaction::{DragState, DrawingMode, InteractionController, PointerEvent};
pub use model::{
    AnnotCircle, AnnotEllipse, AnnotPolygon, AnnotPolyline, AnnotRectangle, AnnotationShape,
    HitResult, Shape, ShapeType,
};
pub use renderer::{NullRenderer, Renderer, SvgRenderer};
