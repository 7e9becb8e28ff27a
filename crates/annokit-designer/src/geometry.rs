//! Geometry kernel: points, extents and the containment/proximity tests
//! used for hit-testing.
//!
//! Everything here is pure. Angles are radians and are never normalized;
//! trigonometric periodicity takes care of wrap-around.

use annokit_core::constants::HANDLE_HALF;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// Axis-aligned extent `(x1, y1)..(x2, y2)`.
///
/// Shapes store normalized extents (`x1 <= x2`, `y1 <= y2`); an extent under
/// construction may be inverted until passed through [`Extent::normalized`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Extent {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Extent {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn normalized(&self) -> Self {
        Self {
            x1: self.x1.min(self.x2),
            y1: self.y1.min(self.y2),
            x2: self.x1.max(self.x2),
            y2: self.y1.max(self.y2),
        }
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Floored midpoint; the pivot for rotation and mid-edge handles.
    pub fn center(&self) -> Point {
        Point::new(
            ((self.x1 + self.x2) / 2.0).floor(),
            ((self.y1 + self.y2) / 2.0).floor(),
        )
    }

    /// The four corners in order top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x1, self.y1),
            Point::new(self.x2, self.y1),
            Point::new(self.x2, self.y2),
            Point::new(self.x1, self.y2),
        ]
    }

    /// Eight resize handle positions: corners and edge midpoints, row by row.
    ///
    /// ```text
    /// 0 1 2
    /// 3   4
    /// 5 6 7
    /// ```
    pub fn handle_points(&self) -> [Point; 8] {
        let c = self.center();
        [
            Point::new(self.x1, self.y1),
            Point::new(c.x, self.y1),
            Point::new(self.x2, self.y1),
            Point::new(self.x1, c.y),
            Point::new(self.x2, c.y),
            Point::new(self.x1, self.y2),
            Point::new(c.x, self.y2),
            Point::new(self.x2, self.y2),
        ]
    }

    /// Moves the edges controlled by `handle` to `p`. Edges not controlled
    /// by the handle stay put. Unknown handles leave the extent unchanged.
    pub fn with_handle_moved(&self, handle: usize, p: Point) -> Self {
        let mut e = *self;
        match handle {
            0 => {
                e.x1 = p.x;
                e.y1 = p.y;
            }
            1 => e.y1 = p.y,
            2 => {
                e.x2 = p.x;
                e.y1 = p.y;
            }
            3 => e.x1 = p.x,
            4 => e.x2 = p.x,
            5 => {
                e.x1 = p.x;
                e.y2 = p.y;
            }
            6 => e.y2 = p.y,
            7 => {
                e.x2 = p.x;
                e.y2 = p.y;
            }
            _ => {}
        }
        e
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x1 + dx, self.y1 + dy, self.x2 + dx, self.y2 + dy)
    }
}

/// Axis-aligned bounds of a shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Smallest bounds covering all points, `None` for an empty set.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Bounds::new(p.x, p.y, p.x, p.y),
                Some(b) => Bounds::new(
                    b.min_x.min(p.x),
                    b.min_y.min(p.y),
                    b.max_x.max(p.x),
                    b.max_y.max(p.y),
                ),
            })
        })
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Rotates an offset-from-center vector by `angle` radians.
pub fn rotate_point(dx: f64, dy: f64, angle: f64) -> (f64, f64) {
    let (s, c) = angle.sin_cos();
    (dx * c - dy * s, dx * s + dy * c)
}

/// Rotates `p` about `pivot`. A zero angle returns `p` bit for bit.
pub fn rotate_about(p: Point, pivot: Point, angle: f64) -> Point {
    if angle == 0.0 {
        return p;
    }
    let (rx, ry) = rotate_point(p.x - pivot.x, p.y - pivot.y, angle);
    Point::new(pivot.x + rx, pivot.y + ry)
}

/// Corners of `extent` rotated by `angle` about its center, in
/// [`Extent::corners`] order. With `angle == 0` these are the extent corners.
pub fn rotated_corners(extent: &Extent, angle: f64) -> [Point; 4] {
    let pivot = extent.center();
    extent.corners().map(|p| rotate_about(p, pivot, angle))
}

pub fn distance(p: Point, q: Point) -> f64 {
    p.distance_to(&q)
}

/// Square handle hit region of side `HANDLE_SIZE`, edges inclusive. The
/// region stays axis-aligned even when the handle sits on a rotated shape.
pub fn in_handle_region(p: Point, handle: Point) -> bool {
    (handle.x - HANDLE_HALF..=handle.x + HANDLE_HALF).contains(&p.x)
        && (handle.y - HANDLE_HALF..=handle.y + HANDLE_HALF).contains(&p.y)
}

/// Even-odd ray casting test.
pub fn point_in_polygon(p: Point, vertices: &[Point]) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let (vi, vj) = (vertices[i], vertices[j]);
        if ((vi.y > p.y) != (vj.y > p.y)) && (p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x) {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Shortest distance from `p` to the segment `a`-`b`.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq <= f64::EPSILON {
        return p.distance_to(&a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    p.distance_to(&Point::new(a.x + t * dx, a.y + t * dy))
}

/// True when `p` lies within `tolerance` of any edge of the path through
/// `vertices`; `closed` adds the edge from the last vertex back to the first.
pub fn near_path(p: Point, vertices: &[Point], closed: bool, tolerance: f64) -> bool {
    let open_hit = vertices
        .windows(2)
        .any(|w| distance_to_segment(p, w[0], w[1]) <= tolerance);
    if open_hit {
        return true;
    }
    match (closed, vertices.first(), vertices.last()) {
        (true, Some(first), Some(last)) if vertices.len() > 2 => {
            distance_to_segment(p, *last, *first) <= tolerance
        }
        _ => false,
    }
}

/// Containment in the axis-aligned ellipse inscribed in `extent`, grown by
/// `tolerance` on each radius.
pub fn point_in_ellipse(p: Point, extent: &Extent, tolerance: f64) -> bool {
    let rx = extent.width() / 2.0 + tolerance;
    let ry = extent.height() / 2.0 + tolerance;
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }
    let cx = (extent.x1 + extent.x2) / 2.0;
    let cy = (extent.y1 + extent.y2) / 2.0;
    let nx = (p.x - cx) / rx;
    let ny = (p.y - cy) / ry;
    nx * nx + ny * ny <= 1.0
}
