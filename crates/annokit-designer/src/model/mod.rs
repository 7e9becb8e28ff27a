use annokit_settings::ShapeStyle;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::geometry::{in_handle_region, Bounds, Point};

mod circle;
mod ellipse;
mod polygon;
mod polyline;
mod rectangle;

pub use circle::AnnotCircle;
pub use ellipse::AnnotEllipse;
pub use polygon::AnnotPolygon;
pub use polyline::AnnotPolyline;
pub use rectangle::AnnotRectangle;

/// Ordered handle positions. Nine inline slots cover every fixed layout
/// (rectangle resize + rotation); polygons spill to the heap.
pub type Handles = SmallVec<[Point; 9]>;

/// Outcome of hit-testing a pointer position against one shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitResult {
    Handle(usize),
    Body,
    None,
}

/// Gesture-scoped state carried by every shape.
///
/// `active_handle` is only meaningful while a drag on the shape is in
/// progress; `drag_anchor` is whatever reference point the current gesture
/// recorded at press time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    pub active_handle: Option<usize>,
    pub drag_anchor: Point,
}

/// Capability set shared by all shape variants.
pub trait AnnotationShape {
    /// Handle positions in hit-test order.
    fn handles(&self) -> Handles;
    /// Whether `p` hits the shape's body (interior or stroke).
    fn body_contains(&self, p: Point) -> bool;
    fn bounds(&self) -> Option<Bounds>;
    fn translate(&mut self, dx: f64, dy: f64);
    fn style(&self) -> &ShapeStyle;
    fn interaction(&self) -> &InteractionState;
    fn interaction_mut(&mut self) -> &mut InteractionState;

    fn active_handle(&self) -> Option<usize> {
        self.interaction().active_handle
    }

    /// Handles first in list order, then the body. Records the hit handle
    /// (or clears it) as a side effect.
    fn check_hit(&mut self, p: Point) -> HitResult {
        let hit = self
            .handles()
            .iter()
            .position(|h| in_handle_region(p, *h));
        self.interaction_mut().active_handle = hit;
        match hit {
            Some(index) => HitResult::Handle(index),
            None if self.body_contains(p) => HitResult::Body,
            None => HitResult::None,
        }
    }

    fn clear_active_handle(&mut self) {
        self.interaction_mut().active_handle = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Rectangle,
    Circle,
    Ellipse,
    Polygon,
    Polyline,
}

impl ShapeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeType::Rectangle => "rectangle",
            ShapeType::Circle => "circle",
            ShapeType::Ellipse => "ellipse",
            ShapeType::Polygon => "polygon",
            ShapeType::Polyline => "polyline",
        }
    }
}

impl std::fmt::Display for ShapeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle(AnnotRectangle),
    Circle(AnnotCircle),
    Ellipse(AnnotEllipse),
    Polygon(AnnotPolygon),
    Polyline(AnnotPolyline),
}

impl AnnotationShape for Shape {
    fn handles(&self) -> Handles {
        match self {
            Shape::Rectangle(s) => s.handles(),
            Shape::Circle(s) => s.handles(),
            Shape::Ellipse(s) => s.handles(),
            Shape::Polygon(s) => s.handles(),
            Shape::Polyline(s) => s.handles(),
        }
    }

    fn body_contains(&self, p: Point) -> bool {
        match self {
            Shape::Rectangle(s) => s.body_contains(p),
            Shape::Circle(s) => s.body_contains(p),
            Shape::Ellipse(s) => s.body_contains(p),
            Shape::Polygon(s) => s.body_contains(p),
            Shape::Polyline(s) => s.body_contains(p),
        }
    }

    fn bounds(&self) -> Option<Bounds> {
        match self {
            Shape::Rectangle(s) => s.bounds(),
            Shape::Circle(s) => s.bounds(),
            Shape::Ellipse(s) => s.bounds(),
            Shape::Polygon(s) => s.bounds(),
            Shape::Polyline(s) => s.bounds(),
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Shape::Rectangle(s) => s.translate(dx, dy),
            Shape::Circle(s) => s.translate(dx, dy),
            Shape::Ellipse(s) => s.translate(dx, dy),
            Shape::Polygon(s) => s.translate(dx, dy),
            Shape::Polyline(s) => s.translate(dx, dy),
        }
    }

    fn style(&self) -> &ShapeStyle {
        match self {
            Shape::Rectangle(s) => s.style(),
            Shape::Circle(s) => s.style(),
            Shape::Ellipse(s) => s.style(),
            Shape::Polygon(s) => s.style(),
            Shape::Polyline(s) => s.style(),
        }
    }

    fn interaction(&self) -> &InteractionState {
        match self {
            Shape::Rectangle(s) => s.interaction(),
            Shape::Circle(s) => s.interaction(),
            Shape::Ellipse(s) => s.interaction(),
            Shape::Polygon(s) => s.interaction(),
            Shape::Polyline(s) => s.interaction(),
        }
    }

    fn interaction_mut(&mut self) -> &mut InteractionState {
        match self {
            Shape::Rectangle(s) => s.interaction_mut(),
            Shape::Circle(s) => s.interaction_mut(),
            Shape::Ellipse(s) => s.interaction_mut(),
            Shape::Polygon(s) => s.interaction_mut(),
            Shape::Polyline(s) => s.interaction_mut(),
        }
    }
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Rectangle(_) => ShapeType::Rectangle,
            Shape::Circle(_) => ShapeType::Circle,
            Shape::Ellipse(_) => ShapeType::Ellipse,
            Shape::Polygon(_) => ShapeType::Polygon,
            Shape::Polyline(_) => ShapeType::Polyline,
        }
    }

    /// Floored extent midpoint for rectangles and ellipses, the stored
    /// center for circles, `None` for point-list shapes.
    pub fn center(&self) -> Option<Point> {
        match self {
            Shape::Rectangle(s) => Some(s.extent.center()),
            Shape::Circle(s) => Some(s.center),
            Shape::Ellipse(s) => Some(s.extent.center()),
            Shape::Polygon(_) | Shape::Polyline(_) => None,
        }
    }

    /// Whether the shape is a point-list shape edited vertex by vertex.
    pub fn is_multi_point(&self) -> bool {
        matches!(self, Shape::Polygon(_) | Shape::Polyline(_))
    }
}

impl From<AnnotRectangle> for Shape {
    fn from(s: AnnotRectangle) -> Self {
        Shape::Rectangle(s)
    }
}

impl From<AnnotCircle> for Shape {
    fn from(s: AnnotCircle) -> Self {
        Shape::Circle(s)
    }
}

impl From<AnnotEllipse> for Shape {
    fn from(s: AnnotEllipse) -> Self {
        Shape::Ellipse(s)
    }
}

impl From<AnnotPolygon> for Shape {
    fn from(s: AnnotPolygon) -> Self {
        Shape::Polygon(s)
    }
}

impl From<AnnotPolyline> for Shape {
    fn from(s: AnnotPolyline) -> Self {
        Shape::Polyline(s)
    }
}
