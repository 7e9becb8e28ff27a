//! Rendering contract and a standalone SVG renderer.
//!
//! The interaction core only requires that the host calls a [`Renderer`]
//! after every event that changed state. [`SvgRenderer`] draws each shape's
//! body followed by its handles, as the interactive canvas would.

use annokit_core::constants::{HANDLE_HALF, HANDLE_SIZE, ROTATION_HANDLE_INDEX};
use annokit_settings::{CanvasSettings, HandleSettings, ShapeStyle};
use std::fmt::{self, Write};

use crate::geometry::Point;
use crate::model::{AnnotationShape, Shape};

pub trait Renderer {
    /// Redraws the whole collection. `active` is the index of the shape
    /// under manipulation, if any.
    fn render(&mut self, shapes: &[Shape], active: Option<usize>);
}

/// Renderer that discards every frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _shapes: &[Shape], _active: Option<usize>) {}
}

/// Keeps the most recent frame as an SVG document.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    width: u32,
    height: u32,
    background: String,
    handles: HandleSettings,
    document: String,
    frames: usize,
}

impl SvgRenderer {
    pub fn new(width: u32, height: u32, canvas: &CanvasSettings, handles: HandleSettings) -> Self {
        Self {
            width,
            height,
            background: canvas.background.clone(),
            handles,
            document: String::new(),
            frames: 0,
        }
    }

    /// The last rendered document, empty before the first frame.
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Number of frames rendered so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    fn handle_color(&self, shape: &Shape, index: usize) -> &str {
        if shape.active_handle() == Some(index) {
            return &self.handles.active;
        }
        match shape {
            Shape::Rectangle(_) if index == ROTATION_HANDLE_INDEX => &self.handles.rotation,
            Shape::Polygon(_) => &self.handles.polygon_vertex,
            Shape::Polyline(_) => &self.handles.polyline_vertex,
            _ => &self.handles.normal,
        }
    }

    fn write_shape(&self, out: &mut String, index: usize, shape: &Shape, active: bool) -> fmt::Result {
        let class = if active { " class=\"active\"" } else { "" };
        writeln!(out, "  <g id=\"shape-{}\"{}>", index, class)?;
        match shape {
            Shape::Rectangle(r) => {
                writeln!(out, "    <polygon points=\"{}\"{}/>", points_attr(&r.rotated_corners()), paint(&r.style, true))?;
            }
            Shape::Circle(c) => {
                writeln!(
                    out,
                    "    <circle cx=\"{}\" cy=\"{}\" r=\"{}\"{}/>",
                    c.center.x,
                    c.center.y,
                    c.radius,
                    paint(&c.style, true)
                )?;
            }
            Shape::Ellipse(e) => {
                let ext = e.extent;
                writeln!(
                    out,
                    "    <ellipse cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\"{}/>",
                    (ext.x1 + ext.x2) / 2.0,
                    (ext.y1 + ext.y2) / 2.0,
                    ext.width() / 2.0,
                    ext.height() / 2.0,
                    paint(&e.style, true)
                )?;
            }
            Shape::Polygon(p) if p.points.len() > 1 => {
                let tag = if p.is_closed() { "polygon" } else { "polyline" };
                writeln!(out, "    <{} points=\"{}\"{}/>", tag, points_attr(&p.points), paint(&p.style, p.is_closed()))?;
            }
            Shape::Polyline(l) if l.points.len() > 1 => {
                writeln!(out, "    <polyline points=\"{}\"{}/>", points_attr(&l.points), paint(&l.style, false))?;
            }
            Shape::Polygon(_) | Shape::Polyline(_) => {}
        }
        for (i, h) in shape.handles().iter().enumerate() {
            let color = self.handle_color(shape, i);
            writeln!(
                out,
                "    <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
                h.x - HANDLE_HALF,
                h.y - HANDLE_HALF,
                HANDLE_SIZE,
                HANDLE_SIZE,
                color
            )?;
        }
        out.push_str("  </g>\n");
        Ok(())
    }

    fn write_document(&self, shapes: &[Shape], active: Option<usize>) -> Result<String, fmt::Error> {
        let mut out = String::new();
        writeln!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
            w = self.width,
            h = self.height
        )?;
        writeln!(out, "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>", self.background)?;
        for (i, shape) in shapes.iter().enumerate() {
            self.write_shape(&mut out, i, shape, active == Some(i))?;
        }
        out.push_str("</svg>\n");
        Ok(out)
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, shapes: &[Shape], active: Option<usize>) {
        match self.write_document(shapes, active) {
            Ok(document) => {
                self.document = document;
                self.frames += 1;
            }
            Err(e) => tracing::warn!("Failed to render frame: {}", e),
        }
    }
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn paint(style: &ShapeStyle, filled: bool) -> String {
    let fill = if filled && style.has_fill() { style.fill_color.as_str() } else { "none" };
    format!(
        " stroke=\"{}\" stroke-width=\"{}\" fill=\"{}\"",
        style.stroke_color, style.stroke_width, fill
    )
}
