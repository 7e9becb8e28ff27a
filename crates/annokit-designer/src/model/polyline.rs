use annokit_core::constants::STROKE_HIT_MARGIN;
use annokit_core::ShapeError;
use annokit_settings::ShapeStyle;

use super::polygon::{set_vertex, translate_all};
use super::{AnnotationShape, Handles, InteractionState};
use crate::geometry::{near_path, Bounds, Point};

/// Open multi-point stroke. Never closed, never filled.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotPolyline {
    pub points: Vec<Point>,
    pub style: ShapeStyle,
    pub interaction: InteractionState,
}

impl AnnotPolyline {
    pub fn new(points: Vec<Point>, mut style: ShapeStyle) -> Self {
        style.fill_color.clear();
        Self {
            points,
            style,
            interaction: InteractionState::default(),
        }
    }

    pub fn add_point(&mut self, p: Point) {
        self.points.push(p);
    }

    pub fn set_vertex(&mut self, index: usize, x: f64, y: f64) -> Result<(), ShapeError> {
        set_vertex(&mut self.points, index, x, y)
    }

    pub fn set_last_vertex(&mut self, p: Point) {
        if let Some(last) = self.points.last_mut() {
            *last = p;
        }
    }

    pub fn translate_all(&mut self, dx: f64, dy: f64) {
        translate_all(&mut self.points, dx, dy);
    }
}

impl AnnotationShape for AnnotPolyline {
    fn handles(&self) -> Handles {
        Handles::from_slice(&self.points)
    }

    fn body_contains(&self, p: Point) -> bool {
        let tolerance = self.style.stroke_width / 2.0 + STROKE_HIT_MARGIN;
        near_path(p, &self.points, false, tolerance)
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
