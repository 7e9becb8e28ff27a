//! Projection of the shape collection into exportable annotation records.
//!
//! Live geometry is real-valued; every coordinate is truncated toward zero
//! here, at the export boundary, and nowhere else.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::model::{AnnotationShape, Shape, ShapeType};

/// One exported shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    /// Zero-based position in the shape collection
    pub id: usize,
    #[serde(rename = "type")]
    pub shape_type: ShapeType,
    pub coordinates: AnnotationBody,
    /// Present for polygons only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_closed: Option<bool>,
    /// `[cx, cy, w, h]` relative to the image size, each in `0..=1`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized_bbox: Option<[f64; 4]>,
}

/// Variant-specific coordinates of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnnotationBody {
    Rectangle {
        x1: i64,
        y1: i64,
        x2: i64,
        y2: i64,
        angle_rad: i64,
        angle_deg: i64,
    },
    Extent {
        x1: i64,
        y1: i64,
        x2: i64,
        y2: i64,
    },
    Circle {
        cx: i64,
        cy: i64,
        radius: i64,
    },
    Points(Vec<[i64; 2]>),
}

impl AnnotationRecord {
    pub fn from_shape(id: usize, shape: &Shape) -> Self {
        let (coordinates, is_closed) = match shape {
            Shape::Rectangle(r) => (
                AnnotationBody::Rectangle {
                    x1: truncate(r.extent.x1),
                    y1: truncate(r.extent.y1),
                    x2: truncate(r.extent.x2),
                    y2: truncate(r.extent.y2),
                    angle_rad: truncate(r.angle),
                    angle_deg: truncate(r.angle_degrees()),
                },
                None,
            ),
            Shape::Circle(c) => (
                AnnotationBody::Circle {
                    cx: truncate(c.center.x),
                    cy: truncate(c.center.y),
                    radius: truncate(c.radius),
                },
                None,
            ),
            Shape::Ellipse(e) => (
                AnnotationBody::Extent {
                    x1: truncate(e.extent.x1),
                    y1: truncate(e.extent.y1),
                    x2: truncate(e.extent.x2),
                    y2: truncate(e.extent.y2),
                },
                None,
            ),
            Shape::Polygon(p) => (truncate_points(&p.points), Some(p.is_closed())),
            Shape::Polyline(l) => (truncate_points(&l.points), None),
        };

        Self {
            id,
            shape_type: shape.shape_type(),
            coordinates,
            is_closed,
            normalized_bbox: None,
        }
    }

    /// Attaches the shape's axis-aligned bounds normalized to an image of
    /// `width` x `height` pixels. Empty shapes and empty images get none.
    pub fn with_normalized_bbox(mut self, shape: &Shape, width: u32, height: u32) -> Self {
        self.normalized_bbox = normalized_bbox(shape, width, height);
        self
    }
}

/// Projects every shape in collection order.
///
/// With `image_size` set, each record also carries a normalized bounding box.
pub fn project(shapes: &[Shape], image_size: Option<(u32, u32)>) -> Vec<AnnotationRecord> {
    shapes
        .iter()
        .enumerate()
        .map(|(id, shape)| {
            let record = AnnotationRecord::from_shape(id, shape);
            match image_size {
                Some((w, h)) => record.with_normalized_bbox(shape, w, h),
                None => record,
            }
        })
        .collect()
}

pub fn normalized_bbox(shape: &Shape, width: u32, height: u32) -> Option<[f64; 4]> {
    if width == 0 || height == 0 {
        return None;
    }
    let b = shape.bounds()?;
    let (w, h) = (f64::from(width), f64::from(height));
    let unit = |v: f64| v.clamp(0.0, 1.0);
    Some([
        unit((b.min_x + b.max_x) / 2.0 / w),
        unit((b.min_y + b.max_y) / 2.0 / h),
        unit(b.width() / w),
        unit(b.height() / h),
    ])
}

fn truncate(v: f64) -> i64 {
    v.trunc() as i64
}

fn truncate_points(points: &[Point]) -> AnnotationBody {
    AnnotationBody::Points(points.iter().map(|p| [truncate(p.x), truncate(p.y)]).collect())
}
