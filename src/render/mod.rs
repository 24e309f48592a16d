// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fabrik-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fabrik and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Drawing backends for build-step diagrams and summary tables.
//!
//! Steps draw through the [`DiagramSink`] primitives in pixel coordinates. Two sinks exist: an
//! SVG document (the shareable diagram) and a unicode [`Canvas`] (the terminal view).

pub mod canvas;
pub mod svg;
pub mod terminal;
pub(crate) mod text;

pub use canvas::{Canvas, CanvasError};
pub use svg::{render_step_svg, SvgDocument, ARROWHEAD_MARKER_ID, BACKGROUND_FILL};
pub use terminal::{render_step_unicode, TerminalSink};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Drawing primitives available to a step's render procedure.
pub trait DiagramSink {
    /// A node footprint, optionally labelled at its centre.
    fn rect(&mut self, rect: Rect, label: Option<&str>);

    /// A link segment. `arrow` ends it with the shared arrowhead marker.
    fn line(&mut self, from: Point, to: Point, arrow: bool);

    fn text(&mut self, at: Point, text: &str);
}
