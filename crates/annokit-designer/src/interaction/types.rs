//! Interaction type definitions: DrawingMode, DragState, PointerEvent.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::geometry::Point;

/// Shape kind instantiated by a press that hits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawingMode {
    #[default]
    Rectangle,
    Circle,
    Ellipse,
    Polygon,
    Polyline,
}

impl DrawingMode {
    pub const ALL: [DrawingMode; 5] = [
        DrawingMode::Rectangle,
        DrawingMode::Circle,
        DrawingMode::Ellipse,
        DrawingMode::Polygon,
        DrawingMode::Polyline,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DrawingMode::Rectangle => "rectangle",
            DrawingMode::Circle => "circle",
            DrawingMode::Ellipse => "ellipse",
            DrawingMode::Polygon => "polygon",
            DrawingMode::Polyline => "polyline",
        }
    }
}

impl fmt::Display for DrawingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown drawing mode name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown drawing mode '{0}'")]
pub struct ParseModeError(pub String);

impl FromStr for DrawingMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DrawingMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}

/// The gesture currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    CreatingRectangle,
    CreatingCircle,
    CreatingEllipse,
    DrawingPolygon,
    DrawingPolyline,
    MovingShape,
    ResizingShape,
    RotatingRectangle,
    MovingVertex,
}

impl DragState {
    /// Multi-point drawing states survive release.
    pub fn is_drawing(&self) -> bool {
        matches!(self, DragState::DrawingPolygon | DragState::DrawingPolyline)
    }
}

/// A pointer event in image coordinates.
///
/// Serialized with a `kind` tag so recorded sessions read as
/// `{"kind": "press", "x": 10, "y": 20}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerEvent {
    Press(Point),
    Drag(Point),
    Release(Point),
    DoubleClick(Point),
}

impl PointerEvent {
    pub fn point(&self) -> Point {
        match self {
            PointerEvent::Press(p)
            | PointerEvent::Drag(p)
            | PointerEvent::Release(p)
            | PointerEvent::DoubleClick(p) => *p,
        }
    }
}
