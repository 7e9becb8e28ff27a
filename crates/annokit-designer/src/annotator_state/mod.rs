//! Annotator session state for host integration.
//!
//! Glues the interaction controller to configuration, the background image
//! and a renderer, and redraws after every event that changed state.

mod file_io;

use annokit_settings::Config;
use serde::{Deserialize, Serialize};

use crate::annotation::{self, AnnotationRecord};
use crate::image_source::{ImageProvider, ImageSource};
use crate::interaction::{DragState, DrawingMode, InteractionController, PointerEvent};
use crate::model::Shape;
use crate::renderer::Renderer;

/// One entry of a recorded session: a mode switch or a pointer event.
///
/// ```json
/// [{"mode": "polygon"}, {"kind": "press", "x": 0, "y": 0}]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SessionStep {
    Mode { mode: DrawingMode },
    Pointer(PointerEvent),
}

impl From<PointerEvent> for SessionStep {
    fn from(event: PointerEvent) -> Self {
        SessionStep::Pointer(event)
    }
}

impl From<DrawingMode> for SessionStep {
    fn from(mode: DrawingMode) -> Self {
        SessionStep::Mode { mode }
    }
}

/// Parses a recorded session from its JSON array form.
pub fn parse_script(json: &str) -> serde_json::Result<Vec<SessionStep>> {
    serde_json::from_str(json)
}

/// Annotator session
pub struct AnnotatorState<R: Renderer> {
    config: Config,
    image: ImageSource,
    controller: InteractionController,
    renderer: R,
}

impl<R: Renderer> AnnotatorState<R> {
    /// Creates a session over the configured blank canvas.
    pub fn new(config: Config, renderer: R) -> Self {
        let image = ImageSource::blank(config.canvas.blank_width, config.canvas.blank_height);
        Self::with_image(config, image, renderer)
    }

    pub fn with_image(config: Config, image: ImageSource, renderer: R) -> Self {
        let controller = InteractionController::new(config.styles.clone());
        let mut state = Self {
            config,
            image,
            controller,
            renderer,
        };
        state.redraw();
        state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn image(&self) -> &ImageSource {
        &self.image
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn shapes(&self) -> &[Shape] {
        self.controller.shapes()
    }

    pub fn mode(&self) -> DrawingMode {
        self.controller.mode()
    }

    pub fn drag_state(&self) -> DragState {
        self.controller.state()
    }

    pub fn set_mode(&mut self, mode: DrawingMode) {
        self.controller.set_mode(mode);
        self.redraw();
    }

    /// Feeds one pointer event to the controller, redrawing if it changed
    /// anything. Returns whether it did.
    pub fn handle_event(&mut self, event: PointerEvent) -> bool {
        let changed = self.controller.handle(event);
        if changed {
            self.redraw();
        }
        changed
    }

    /// Applies recorded steps in order and returns how many pointer events
    /// changed state.
    pub fn replay<I>(&mut self, steps: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<SessionStep>,
    {
        let mut changed = 0;
        for step in steps {
            match step.into() {
                SessionStep::Mode { mode } => self.set_mode(mode),
                SessionStep::Pointer(event) => {
                    if self.handle_event(event) {
                        changed += 1;
                    }
                }
            }
        }
        tracing::debug!("Replay finished: {} state changes, {} shapes", changed, self.shapes().len());
        changed
    }

    /// Current annotation records, with normalized boxes when enabled.
    pub fn annotations(&self) -> Vec<AnnotationRecord> {
        let image_size = self
            .config
            .export
            .include_normalized_bbox
            .then(|| self.image.dimensions());
        annotation::project(self.controller.shapes(), image_size)
    }

    fn redraw(&mut self) {
        self.renderer
            .render(self.controller.shapes(), self.controller.active_index());
    }
}
