//! Drag state machine turning pointer gestures into shape mutations.

mod operations;
mod types;

pub use operations::{clamp_live, settle_extent};
pub use types::{DragState, DrawingMode, ParseModeError, PointerEvent};

use annokit_core::constants::ROTATION_HANDLE_INDEX;
use annokit_settings::StyleSettings;
use tracing::{debug, info};

use crate::geometry::{Extent, Point};
use crate::model::{
    AnnotCircle, AnnotEllipse, AnnotPolygon, AnnotPolyline, AnnotRectangle, AnnotationShape,
    HitResult, Shape,
};

/// Owns the shape collection and interprets pointer events against it.
///
/// The active shape is an index into the collection and is only set between
/// the press that starts a gesture and the release or double-click that
/// ends it.
#[derive(Debug, Clone)]
pub struct InteractionController {
    shapes: Vec<Shape>,
    styles: StyleSettings,
    mode: DrawingMode,
    state: DragState,
    active: Option<usize>,
    press_origin: Point,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(StyleSettings::default())
    }
}

impl InteractionController {
    /// Creates an empty controller; `styles` are applied to new shapes.
    pub fn new(styles: StyleSettings) -> Self {
        Self {
            shapes: Vec::new(),
            styles,
            mode: DrawingMode::default(),
            state: DragState::Idle,
            active: None,
            press_origin: Point::default(),
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn into_shapes(self) -> Vec<Shape> {
        self.shapes
    }

    /// Appends an existing shape on top of the collection and returns its index.
    pub fn push_shape(&mut self, shape: impl Into<Shape>) -> usize {
        self.shapes.push(shape.into());
        self.shapes.len() - 1
    }

    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    /// Switches the shape kind for new shapes and abandons any gesture in
    /// progress, including continuous polygon/polyline drawing.
    pub fn set_mode(&mut self, mode: DrawingMode) {
        self.end_gesture();
        self.mode = mode;
        info!("Drawing mode set to {}", mode);
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_shape(&self) -> Option<&Shape> {
        self.active.and_then(|i| self.shapes.get(i))
    }

    fn active_shape_mut(&mut self) -> Option<&mut Shape> {
        self.active.and_then(|i| self.shapes.get_mut(i))
    }

    /// Pointer position of the most recent press.
    pub fn press_origin(&self) -> Point {
        self.press_origin
    }

    /// Dispatches `event` and reports whether any state changed.
    pub fn handle(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Press(p) => self.press(p),
            PointerEvent::Drag(p) => self.drag(p),
            PointerEvent::Release(p) => self.release(p),
            PointerEvent::DoubleClick(p) => self.double_click(p),
        }
    }

    /// Starts a gesture on the topmost shape under `p`, or creates/extends a
    /// shape in the current mode when nothing is hit.
    pub fn press(&mut self, p: Point) -> bool {
        self.press_origin = p;

        let hit = self
            .shapes
            .iter_mut()
            .enumerate()
            .rev()
            .find_map(|(index, shape)| match shape.check_hit(p) {
                HitResult::None => None,
                hit => Some((index, hit)),
            });

        match hit {
            Some((index, hit)) => self.begin_edit(index, hit, p),
            None => self.create_at(p),
        }
        true
    }

    /// Applies the in-progress gesture to the active shape.
    pub fn drag(&mut self, p: Point) -> bool {
        let state = self.state;
        let origin = self.press_origin;
        let Some(shape) = self.active.and_then(|i| self.shapes.get_mut(i)) else {
            return false;
        };

        match state {
            DragState::Idle => return false,
            DragState::CreatingRectangle | DragState::CreatingEllipse | DragState::CreatingCircle => {
                operations::stretch_from(shape, origin, p)
            }
            DragState::DrawingPolygon | DragState::DrawingPolyline => {
                operations::set_last_vertex(shape, p)
            }
            DragState::MovingShape => operations::move_shape(shape, p),
            DragState::ResizingShape => operations::resize_shape(shape, p),
            DragState::MovingVertex => operations::move_vertex(shape, p),
            DragState::RotatingRectangle => {
                if let Shape::Rectangle(rect) = shape {
                    rect.rotate(p.x, p.y);
                }
            }
        }
        true
    }

    /// Ends the gesture. Multi-point drawing stays active across releases.
    pub fn release(&mut self, _p: Point) -> bool {
        if self.state.is_drawing() {
            return false;
        }
        let state = self.state;
        let origin = self.press_origin;
        let Some(shape) = self.active_shape_mut() else {
            self.state = DragState::Idle;
            return false;
        };
        operations::settle(shape, origin);
        debug!("Finished {:?} on {}", state, shape.shape_type());
        self.end_gesture();
        true
    }

    /// Finalizes the polygon or polyline being drawn. A polygon closes only
    /// if it has more than two points.
    pub fn double_click(&mut self, _p: Point) -> bool {
        match self.state {
            DragState::DrawingPolygon => {
                if let Some(Shape::Polygon(poly)) = self.active_shape_mut() {
                    let closed = poly.close();
                    debug!("Polygon finished with {} points, closed: {}", poly.points.len(), closed);
                }
            }
            DragState::DrawingPolyline => {
                if let Some(Shape::Polyline(line)) = self.active_shape_mut() {
                    debug!("Polyline finished with {} points", line.points.len());
                }
            }
            _ => return false,
        }
        self.end_gesture();
        true
    }

    fn begin_edit(&mut self, index: usize, hit: HitResult, p: Point) {
        let Some(shape) = self.shapes.get_mut(index) else {
            return;
        };
        let state = match hit {
            HitResult::Handle(handle) => match shape {
                Shape::Rectangle(rect) if handle == ROTATION_HANDLE_INDEX => {
                    rect.begin_rotation(p);
                    DragState::RotatingRectangle
                }
                Shape::Polygon(_) | Shape::Polyline(_) => DragState::MovingVertex,
                _ => DragState::ResizingShape,
            },
            HitResult::Body | HitResult::None => {
                let anchor = operations::move_anchor(shape, p);
                shape.interaction_mut().drag_anchor = anchor;
                DragState::MovingShape
            }
        };
        debug!("{:?} on {} #{}", state, shape.shape_type(), index);
        self.active = Some(index);
        self.state = state;
    }

    fn create_at(&mut self, p: Point) {
        let one_px = Extent::new(p.x, p.y, p.x + 1.0, p.y + 1.0);
        match self.mode {
            DrawingMode::Rectangle => {
                let rect = AnnotRectangle::new(one_px, self.styles.rectangle.clone());
                self.push_active(rect.into(), DragState::CreatingRectangle);
            }
            DrawingMode::Circle => {
                let circle = AnnotCircle::new(p, 1.0, self.styles.circle.clone());
                self.push_active(circle.into(), DragState::CreatingCircle);
            }
            DrawingMode::Ellipse => {
                let ellipse = AnnotEllipse::new(one_px, self.styles.ellipse.clone());
                self.push_active(ellipse.into(), DragState::CreatingEllipse);
            }
            DrawingMode::Polygon => {
                if let Some(Shape::Polygon(poly)) = self.active_shape_mut() {
                    if !poly.is_closed() {
                        poly.add_point(p);
                        self.state = DragState::DrawingPolygon;
                        return;
                    }
                }
                let poly = AnnotPolygon::new(vec![p], self.styles.polygon.clone());
                self.push_active(poly.into(), DragState::DrawingPolygon);
            }
            DrawingMode::Polyline => {
                if let Some(Shape::Polyline(line)) = self.active_shape_mut() {
                    line.add_point(p);
                    self.state = DragState::DrawingPolyline;
                    return;
                }
                let line = AnnotPolyline::new(vec![p], self.styles.polyline.clone());
                self.push_active(line.into(), DragState::DrawingPolyline);
            }
        }
    }

    fn push_active(&mut self, shape: Shape, state: DragState) {
        debug!("Created {} #{}", shape.shape_type(), self.shapes.len());
        self.active = Some(self.push_shape(shape));
        self.state = state;
    }

    fn end_gesture(&mut self) {
        if let Some(shape) = self.active_shape_mut() {
            shape.clear_active_handle();
        }
        self.active = None;
        self.state = DragState::Idle;
    }
}
