// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fabrik-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fabrik and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::instructions::BuildStep;

use super::text::{canvas_to_string_trimmed, text_len, truncate_with_ellipsis};
use super::{Canvas, CanvasError, DiagramSink, Point, Rect};

/// Diagram pixels per terminal column.
pub const PX_PER_COL: f64 = 5.0;
/// Diagram pixels per terminal row.
pub const PX_PER_ROW: f64 = 10.0;
/// Largest grid (columns × rows) a step may be drawn on.
pub const MAX_TERMINAL_CELLS: usize = 1 << 20;

/// Draws step diagrams onto a unicode [`Canvas`], scaling pixels down to character cells.
///
/// Coordinates past the canvas edge are pulled back onto it. The first canvas error is kept and
/// returned by [`TerminalSink::finish`].
#[derive(Debug)]
pub struct TerminalSink {
    canvas: Canvas,
    error: Option<CanvasError>,
}

impl TerminalSink {
    pub fn new(width_px: u32, height_px: u32) -> Result<Self, CanvasError> {
        let cols = cells(f64::from(width_px), PX_PER_COL).max(1);
        let rows = cells(f64::from(height_px), PX_PER_ROW).max(1);
        if cols.checked_mul(rows).map_or(true, |area| area > MAX_TERMINAL_CELLS) {
            return Err(CanvasError::AreaOverflow { width: cols, height: rows });
        }
        Ok(Self { canvas: Canvas::new(cols, rows)?, error: None })
    }

    pub fn finish(self) -> Result<Canvas, CanvasError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.canvas),
        }
    }

    fn cell(&self, p: Point) -> (usize, usize) {
        let x = (p.x.max(0.0) / PX_PER_COL).floor() as usize;
        let y = (p.y.max(0.0) / PX_PER_ROW).floor() as usize;
        (x.min(self.canvas.width() - 1), y.min(self.canvas.height() - 1))
    }

    fn record(&mut self, result: Result<(), CanvasError>) {
        if let Err(err) = result {
            self.error.get_or_insert(err);
        }
    }
}

impl DiagramSink for TerminalSink {
    fn rect(&mut self, rect: Rect, label: Option<&str>) {
        let (x0, y0) = self.cell(Point::new(rect.x, rect.y));
        let (x1, y1) = self.cell(Point::new(rect.x + rect.width, rect.y + rect.height));
        let result = self.canvas.draw_box(x0, y0, x1, y1);
        self.record(result);

        let Some(label) = label else {
            return;
        };
        if x1 < x0 + 2 || y1 < y0 + 2 {
            return;
        }
        let inner = x1 - x0 - 1;
        let clipped = truncate_with_ellipsis(label, inner);
        let pad = (inner - text_len(&clipped)) / 2;
        let result = self.canvas.write_str(x0 + 1 + pad, (y0 + y1) / 2, &clipped);
        self.record(result);
    }

    fn line(&mut self, from: Point, to: Point, arrow: bool) {
        let from = self.cell(from);
        let to = self.cell(to);
        let result = self.canvas.draw_route(from, to, arrow);
        self.record(result);
    }

    fn text(&mut self, at: Point, text: &str) {
        let (x, y) = self.cell(at);
        let result = self.canvas.write_str(x, y, text);
        self.record(result);
    }
}

/// Renders one step as trimmed unicode text, for terminals.
pub fn render_step_unicode(step: &dyn BuildStep) -> Result<String, CanvasError> {
    let mut sink = TerminalSink::new(step.width(), step.height())?;
    step.render(&mut sink);
    let canvas = sink.finish()?;
    Ok(canvas_to_string_trimmed(&canvas))
}

fn cells(px: f64, px_per_cell: f64) -> usize {
    (px / px_per_cell).ceil() as usize
}

#[cfg(test)]
mod tests {
    use super::{render_step_unicode, TerminalSink, MAX_TERMINAL_CELLS};
    use crate::render::CanvasError;
    use crate::instructions::BuildStep;
    use crate::render::{DiagramSink, Point, Rect};

    struct Pair;

    impl BuildStep for Pair {
        fn title(&self) -> &str {
            "pair"
        }

        fn width(&self) -> u32 {
            100
        }

        fn height(&self) -> u32 {
            40
        }

        fn render(&self, sink: &mut dyn DiagramSink) {
            sink.rect(Rect::new(0.0, 0.0, 30.0, 20.0), Some("M"));
            sink.rect(Rect::new(60.0, 0.0, 30.0, 20.0), Some("Smelt"));
            sink.line(Point::new(30.0, 10.0), Point::new(55.0, 10.0), true);
        }
    }

    #[test]
    fn canvas_size_follows_step_size() {
        let sink = TerminalSink::new(101, 40).expect("sink");
        let canvas = sink.finish().expect("canvas");
        assert_eq!((canvas.width(), canvas.height()), (21, 4));
    }

    #[test]
    fn renders_boxes_labels_and_arrow() {
        let rendered = render_step_unicode(&Pair).expect("render");
        assert_eq!(
            rendered,
            "┌─────┐     ┌─────┐\n│  M  ├────▶│Smelt│\n└─────┘     └─────┘"
        );
    }

    #[test]
    fn oversized_steps_are_refused_before_allocating() {
        assert!(matches!(
            TerminalSink::new(u32::MAX, 3_000_000_020),
            Err(CanvasError::AreaOverflow { .. })
        ));
        let cols = 1024u32;
        let rows = (MAX_TERMINAL_CELLS / 1024) as u32;
        assert!(TerminalSink::new(cols * 5, rows * 10).is_ok());
        assert!(TerminalSink::new(cols * 5, (rows + 1) * 10).is_err());
    }

    #[test]
    fn out_of_range_points_are_clamped() {
        let mut sink = TerminalSink::new(20, 20).expect("sink");
        sink.line(Point::new(-50.0, 5.0), Point::new(500.0, 5.0), false);
        let canvas = sink.finish().expect("canvas");
        assert_eq!(canvas.to_string(), "────\n    ");
    }
}
