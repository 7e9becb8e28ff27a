use annokit_core::ShapeError;
use annokit_settings::ShapeStyle;

use super::{AnnotationShape, Handles, InteractionState};
use crate::geometry::{near_path, point_in_polygon, Bounds, Point};

/// Multi-point shape drawn vertex by vertex and closed explicitly.
///
/// `is_closed` only ever goes from `false` to `true`, and only once the
/// polygon has more than two vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotPolygon {
    pub points: Vec<Point>,
    pub style: ShapeStyle,
    pub interaction: InteractionState,
    is_closed: bool,
}

impl AnnotPolygon {
    pub fn new(points: Vec<Point>, style: ShapeStyle) -> Self {
        Self {
            points,
            style,
            interaction: InteractionState::default(),
            is_closed: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    pub fn add_point(&mut self, p: Point) {
        self.points.push(p);
    }

    pub fn set_vertex(&mut self, index: usize, x: f64, y: f64) -> Result<(), ShapeError> {
        set_vertex(&mut self.points, index, x, y)
    }

    /// Moves the most recently added vertex. No-op on an empty polygon.
    pub fn set_last_vertex(&mut self, p: Point) {
        if let Some(last) = self.points.last_mut() {
            *last = p;
        }
    }

    pub fn translate_all(&mut self, dx: f64, dy: f64) {
        translate_all(&mut self.points, dx, dy);
    }

    /// Closes the polygon if it has more than two vertices. Returns whether
    /// the polygon is closed afterwards.
    pub fn close(&mut self) -> bool {
        if self.points.len() > 2 {
            self.is_closed = true;
        }
        self.is_closed
    }
}

impl AnnotationShape for AnnotPolygon {
    fn handles(&self) -> Handles {
        Handles::from_slice(&self.points)
    }

    /// Only a closed, filled polygon can be grabbed by its body.
    fn body_contains(&self, p: Point) -> bool {
        if !(self.is_closed && self.style.has_fill()) {
            return false;
        }
        point_in_polygon(p, &self.points) || near_path(p, &self.points, true, self.style.stroke_width / 2.0)
    }

    fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(&self.points)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.translate_all(dx, dy);
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    fn interaction_mut(&mut self) -> &mut InteractionState {
        &mut self.interaction
    }
}

pub(super) fn set_vertex(points: &mut [Point], index: usize, x: f64, y: f64) -> Result<(), ShapeError> {
    let len = points.len();
    let vertex = points
        .get_mut(index)
        .ok_or(ShapeError::InvalidIndex { index, len })?;
    *vertex = Point::new(x, y);
    Ok(())
}

pub(super) fn translate_all(points: &mut [Point], dx: f64, dy: f64) {
    for p in points.iter_mut() {
        *p = p.offset(dx, dy);
    }
}
