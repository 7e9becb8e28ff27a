use annokit_core::constants::MIN_CIRCLE_RADIUS;
use annokit_settings::ShapeStyle;

use super::{AnnotationShape, Handles, InteractionState};
use crate::geometry::{distance, Bounds, Point};

#[derive(Debug, Clone, PartialEq)]
pub struct AnnotCircle {
    pub center: Point,
    pub radius: f64,
    pub style: ShapeStyle,
    pub interaction: InteractionState,
}

impl AnnotCircle {
    /// Radii below [`MIN_CIRCLE_RADIUS`] are raised to it.
    pub fn new(center: Point, radius: f64, style: ShapeStyle) -> Self {
        Self {
            center,
            radius: clamp_radius(radius),
            style,
            interaction: InteractionState::default(),
        }
    }

    pub fn update_center_radius(&mut self, cx: f64, cy: f64, radius: f64) {
        self.center = Point::new(cx, cy);
        self.radius = clamp_radius(radius);
    }
}

// NaN compares false everywhere, so it falls through to the minimum as well.
fn clamp_radius(radius: f64) -> f64 {
    if radius >= MIN_CIRCLE_RADIUS {
        radius
    } else {
        MIN_CIRCLE_RADIUS
    }
}

impl AnnotationShape for AnnotCircle {
    /// Top, right, bottom, left.
    fn handles(&self) -> Handles {
        let Point { x, y } = self.center;
        let r = self.radius;
        Handles::from_slice(&[
            Point::new(x, y - r),
            Point::new(x + r, y),
            Point::new(x, y + r),
            Point::new(x - r, y),
        ])
    }

    fn body_contains(&self, p: Point) -> bool {
        distance(p, self.center) <= self.radius
    }

    fn bounds(&self) -> Option<Bounds> {
        let Point { x, y } = self.center;
        let r = self.radius;
        Some(Bounds::new(x - r, y - r, x + r, y + r))
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.center = self.center.offset(dx, dy);
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
