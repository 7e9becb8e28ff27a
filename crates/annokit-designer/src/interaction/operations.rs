//! Per-state shape mutations applied while a gesture is in progress.

use annokit_core::constants::MIN_EXTENT;
use tracing::debug;

use crate::geometry::{distance, Extent, Point};
use crate::model::{AnnotationShape, Shape};

/// Reference point recorded when a body press starts a move: the pointer
/// offset from the extent origin or circle center, or the raw pointer for
/// point-list shapes.
pub(crate) fn move_anchor(shape: &Shape, p: Point) -> Point {
    match shape {
        Shape::Rectangle(s) => Point::new(p.x - s.extent.x1, p.y - s.extent.y1),
        Shape::Ellipse(s) => Point::new(p.x - s.extent.x1, p.y - s.extent.y1),
        Shape::Circle(s) => Point::new(p.x - s.center.x, p.y - s.center.y),
        Shape::Polygon(_) | Shape::Polyline(_) => p,
    }
}

/// Extent-backed shapes recompute their position from the press offset;
/// point-list shapes translate by the delta since the last drag and
/// re-anchor.
pub(crate) fn move_shape(shape: &mut Shape, p: Point) {
    let anchor = shape.interaction().drag_anchor;
    match shape {
        Shape::Rectangle(_) | Shape::Ellipse(_) => {
            if let Some(extent) = extent_mut(shape) {
                let x1 = p.x - anchor.x;
                let y1 = p.y - anchor.y;
                *extent = Extent::new(x1, y1, x1 + extent.width(), y1 + extent.height());
            }
        }
        Shape::Circle(c) => {
            let radius = c.radius;
            c.update_center_radius(p.x - anchor.x, p.y - anchor.y, radius);
        }
        Shape::Polygon(_) | Shape::Polyline(_) => {
            shape.translate(p.x - anchor.x, p.y - anchor.y);
            shape.interaction_mut().drag_anchor = p;
        }
    }
}

/// Drags the active handle of a rectangle, ellipse or circle to `p`.
pub(crate) fn resize_shape(shape: &mut Shape, p: Point) {
    let Some(handle) = shape.active_handle() else {
        return;
    };
    if let Shape::Circle(c) = shape {
        let radius = distance(c.center, p);
        c.update_center_radius(c.center.x, c.center.y, radius);
        return;
    }
    if let Some(extent) = extent_mut(shape) {
        *extent = clamp_live(extent.with_handle_moved(handle, p).normalized(), handle);
    }
}

/// Moves the vertex under the active handle. Out-of-range indices are
/// ignored.
pub(crate) fn move_vertex(shape: &mut Shape, p: Point) {
    let Some(index) = shape.active_handle() else {
        return;
    };
    let result = match shape {
        Shape::Polygon(poly) => poly.set_vertex(index, p.x, p.y),
        Shape::Polyline(line) => line.set_vertex(index, p.x, p.y),
        _ => Ok(()),
    };
    if let Err(e) = result {
        debug!("Ignoring vertex drag: {}", e);
    }
}

/// Stretches the extent from the press origin to `p`.
pub(crate) fn stretch_from(shape: &mut Shape, origin: Point, p: Point) {
    match shape {
        Shape::Rectangle(r) => r.update_extent(origin.x, origin.y, p.x, p.y),
        Shape::Ellipse(e) => e.update_extent(origin.x, origin.y, p.x, p.y),
        Shape::Circle(c) => c.update_center_radius(origin.x, origin.y, distance(origin, p)),
        Shape::Polygon(_) | Shape::Polyline(_) => {}
    }
}

pub(crate) fn set_last_vertex(shape: &mut Shape, p: Point) {
    match shape {
        Shape::Polygon(poly) => poly.set_last_vertex(p),
        Shape::Polyline(line) => line.set_last_vertex(p),
        _ => {}
    }
}

/// Final minimum-size check on release.
pub(crate) fn settle(shape: &mut Shape, origin: Point) {
    if let Some(extent) = extent_mut(shape) {
        *extent = settle_extent(*extent, origin);
    }
}

/// Live clamp while resizing: an edge moved by `handle` is pushed back to
/// `MIN_EXTENT` from the opposite edge, which stays pinned.
pub fn clamp_live(mut e: Extent, handle: usize) -> Extent {
    if e.width() < MIN_EXTENT {
        if matches!(handle, 0 | 3 | 5) {
            e.x1 = e.x2 - MIN_EXTENT;
        } else {
            e.x2 = e.x1 + MIN_EXTENT;
        }
    }
    if e.height() < MIN_EXTENT {
        if matches!(handle, 0 | 1 | 2) {
            e.y1 = e.y2 - MIN_EXTENT;
        } else {
            e.y2 = e.y1 + MIN_EXTENT;
        }
    }
    e
}

/// Release-time clamp. The edge still sitting on the press origin is the
/// one that did not move, so it pins the result.
pub fn settle_extent(mut e: Extent, origin: Point) -> Extent {
    if e.width() < MIN_EXTENT {
        if e.x1 == origin.x {
            e.x2 = e.x1 + MIN_EXTENT;
        } else {
            e.x1 = e.x2 - MIN_EXTENT;
        }
    }
    if e.height() < MIN_EXTENT {
        if e.y1 == origin.y {
            e.y2 = e.y1 + MIN_EXTENT;
        } else {
            e.y1 = e.y2 - MIN_EXTENT;
        }
    }
    e
}

fn extent_mut(shape: &mut Shape) -> Option<&mut Extent> {
    match shape {
        Shape::Rectangle(r) => Some(&mut r.extent),
        Shape::Ellipse(e) => Some(&mut e.extent),
        _ => None,
    }
}
