//! Interaction constants shared by the shape model and the controller.

/// Side length of a square handle hit region, in image pixels.
pub const HANDLE_SIZE: f64 = 10.0;

/// Half the handle side; a handle is hit within this distance on each axis.
pub const HANDLE_HALF: f64 = HANDLE_SIZE / 2.0;

/// Distance of the rotation handle above the top edge of a rectangle.
pub const ROTATION_HANDLE_OFFSET: f64 = 20.0;

/// Index of the rotation handle in a rectangle's handle list.
pub const ROTATION_HANDLE_INDEX: usize = 8;

/// Smallest radius a circle may take.
pub const MIN_CIRCLE_RADIUS: f64 = HANDLE_SIZE / 2.0;

/// Smallest width/height a rectangle or ellipse settles to on release.
pub const MIN_EXTENT: f64 = HANDLE_SIZE;

/// Extra tolerance added to half the stroke width when hit-testing polyline strokes.
pub const STROKE_HIT_MARGIN: f64 = 1.0;
