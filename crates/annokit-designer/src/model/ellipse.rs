use annokit_settings::ShapeStyle;

use super::{AnnotationShape, Handles, InteractionState};
use crate::geometry::{point_in_ellipse, Bounds, Extent, Point};

/// Axis-aligned ellipse inscribed in its extent.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotEllipse {
    pub extent: Extent,
    pub style: ShapeStyle,
    pub interaction: InteractionState,
}

impl AnnotEllipse {
    pub fn new(extent: Extent, style: ShapeStyle) -> Self {
        Self {
            extent: extent.normalized(),
            style,
            interaction: InteractionState::default(),
        }
    }

    pub fn update_extent(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.extent = Extent::new(x1, y1, x2, y2).normalized();
    }
}

impl AnnotationShape for AnnotEllipse {
    fn handles(&self) -> Handles {
        Handles::from_slice(&self.extent.handle_points())
    }

    fn body_contains(&self, p: Point) -> bool {
        point_in_ellipse(p, &self.extent, self.style.stroke_width / 2.0)
    }

    fn bounds(&self) -> Option<Bounds> {
        let e = self.extent.normalized();
        Some(Bounds::new(e.x1, e.y1, e.x2, e.y2))
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.extent = self.extent.translated(dx, dy);
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
