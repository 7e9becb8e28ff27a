use annokit_core::constants::ROTATION_HANDLE_OFFSET;
use annokit_settings::ShapeStyle;

use super::{AnnotationShape, Handles, InteractionState};
use crate::geometry::{
    near_path, point_in_polygon, rotate_about, rotated_corners, Bounds, Extent, Point,
};

/// Rotatable rectangle annotation.
///
/// The extent is stored unrotated; `angle` (radians) is applied about the
/// extent's floored center when deriving the body and handles.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotRectangle {
    pub extent: Extent,
    pub angle: f64,
    pub style: ShapeStyle,
    pub interaction: InteractionState,
    /// Angle at the start of the current rotation gesture.
    pub start_angle: f64,
}

impl AnnotRectangle {
    pub fn new(extent: Extent, style: ShapeStyle) -> Self {
        Self {
            extent: extent.normalized(),
            angle: 0.0,
            style,
            interaction: InteractionState::default(),
            start_angle: 0.0,
        }
    }

    pub fn update_extent(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.extent = Extent::new(x1, y1, x2, y2).normalized();
    }

    /// The visible body: extent corners rotated about the center.
    pub fn rotated_corners(&self) -> [Point; 4] {
        rotated_corners(&self.extent, self.angle)
    }

    /// Records the press point and current angle as the rotation reference.
    pub fn begin_rotation(&mut self, anchor: Point) {
        self.interaction.drag_anchor = anchor;
        self.start_angle = self.angle;
    }

    /// Sets the angle to the gesture's start angle plus the angle swept by
    /// the pointer about the center since the press.
    pub fn rotate(&mut self, mouse_x: f64, mouse_y: f64) {
        let c = self.extent.center();
        let anchor = self.interaction.drag_anchor;
        let start = (anchor.y - c.y).atan2(anchor.x - c.x);
        let current = (mouse_y - c.y).atan2(mouse_x - c.x);
        self.angle = self.start_angle + (current - start);
    }

    pub fn angle_degrees(&self) -> f64 {
        self.angle.to_degrees()
    }
}

impl AnnotationShape for AnnotRectangle {
    /// Eight resize handles followed by the rotation handle (index 8), all
    /// rotated with the body.
    fn handles(&self) -> Handles {
        let pivot = self.extent.center();
        let mut handles: Handles = self
            .extent
            .handle_points()
            .iter()
            .map(|p| rotate_about(*p, pivot, self.angle))
            .collect();
        let rotation_handle = Point::new(pivot.x, self.extent.y1 - ROTATION_HANDLE_OFFSET);
        handles.push(rotate_about(rotation_handle, pivot, self.angle));
        handles
    }

    fn body_contains(&self, p: Point) -> bool {
        let corners = self.rotated_corners();
        point_in_polygon(p, &corners) || near_path(p, &corners, true, self.style.stroke_width / 2.0)
    }

    fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(&self.rotated_corners())
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
