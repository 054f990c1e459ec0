// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The logical drawing surface: colors, draw commands, and a recorder.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Circle, Line, Point, Rect, Size};

/// An opaque sRGB color.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Color {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
}

impl Color {
    /// Build a color from 8-bit components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A single drawing primitive, as recorded by [`DisplayList`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    /// Erase a rectangle (the full frame in practice).
    Clear {
        /// The erased region.
        rect: Rect,
    },
    /// A filled circle with a stroked outline.
    Circle {
        /// Center and radius.
        circle: Circle,
        /// Fill color.
        fill: Color,
        /// Outline color.
        stroke: Color,
    },
    /// Text centered on a point (both axes).
    Text {
        /// The text to draw.
        text: String,
        /// The center point.
        at: Point,
        /// Text color.
        color: Color,
    },
    /// A straight line segment.
    Line {
        /// Endpoints.
        line: Line,
        /// Stroke color.
        color: Color,
    },
}

/// A logical drawing surface.
///
/// Implementations need exactly the four primitives the renderer emits:
/// clear-rect, filled-circle-with-stroke, centered text, and line. A
/// surface also reports its size so the renderer can clear the full frame
/// and skip drawing entirely when the frame is degenerate.
pub trait Surface {
    /// Current drawable size. Zero or negative dimensions disable drawing.
    fn size(&self) -> Size;

    /// Erase a rectangle.
    fn clear_rect(&mut self, rect: Rect);

    /// Draw a filled circle with a stroked outline.
    fn fill_circle(&mut self, circle: Circle, fill: Color, stroke: Color);

    /// Draw text centered on `at`.
    fn centered_text(&mut self, text: &str, at: Point, color: Color);

    /// Draw a line segment.
    fn line(&mut self, line: Line, color: Color);
}

/// A [`Surface`] that records draw commands instead of rasterizing.
///
/// Useful for tests, headless hosts, and adapters that replay commands
/// against a concrete backend.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    size: Size,
    cmds: Vec<DrawCmd>,
}

impl DisplayList {
    /// Create an empty recorder of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            cmds: Vec::new(),
        }
    }

    /// The recorded commands, in emission order.
    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    /// Drop all recorded commands, keeping the size.
    pub fn reset(&mut self) {
        self.cmds.clear();
    }

    /// Change the drawable size (for example on a host resize).
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }
}

impl Surface for DisplayList {
    fn size(&self) -> Size {
        self.size
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.cmds.push(DrawCmd::Clear { rect });
    }

    fn fill_circle(&mut self, circle: Circle, fill: Color, stroke: Color) {
        self.cmds.push(DrawCmd::Circle {
            circle,
            fill,
            stroke,
        });
    }

    fn centered_text(&mut self, text: &str, at: Point, color: Color) {
        self.cmds.push(DrawCmd::Text {
            text: String::from(text),
            at,
            color,
        });
    }

    fn line(&mut self, line: Line, color: Color) {
        self.cmds.push(DrawCmd::Line { line, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_emission_order() {
        let mut dl = DisplayList::new(Size::new(100.0, 100.0));
        assert!(dl.is_empty());
        dl.clear_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
        dl.fill_circle(
            Circle::new(Point::new(50.0, 50.0), 25.0),
            Color::rgb(0, 0, 0),
            Color::rgb(1, 1, 1),
        );
        dl.centered_text("42", Point::new(50.0, 50.0), Color::rgb(255, 255, 255));
        assert_eq!(dl.len(), 3);
        assert!(matches!(dl.cmds()[0], DrawCmd::Clear { .. }));
        assert!(matches!(dl.cmds()[2], DrawCmd::Text { .. }));
        dl.reset();
        assert!(dl.is_empty());
        assert_eq!(dl.size(), Size::new(100.0, 100.0));
    }
}
