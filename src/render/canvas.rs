// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fabrik-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fabrik and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

pub const BOX_HORIZONTAL: char = '─';
pub const BOX_VERTICAL: char = '│';
pub const BOX_TOP_LEFT: char = '┌';
pub const BOX_TOP_RIGHT: char = '┐';
pub const BOX_BOTTOM_LEFT: char = '└';
pub const BOX_BOTTOM_RIGHT: char = '┘';
pub const BOX_TEE_RIGHT: char = '├';
pub const BOX_TEE_LEFT: char = '┤';
pub const BOX_TEE_DOWN: char = '┬';
pub const BOX_TEE_UP: char = '┴';
pub const BOX_CROSS: char = '┼';

pub const ARROW_RIGHT: char = '▶';
pub const ARROW_LEFT: char = '◀';
pub const ARROW_UP: char = '▲';
pub const ARROW_DOWN: char = '▼';

/// Which neighbours a line-drawing cell connects to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Strokes(u8);

impl Strokes {
    const LEFT: Self = Self(1);
    const RIGHT: Self = Self(2);
    const UP: Self = Self(4);
    const DOWN: Self = Self(8);

    const fn with(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    fn has(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    fn is_empty(self) -> bool {
        self.0 == 0
    }

    fn from_char(ch: char) -> Option<Self> {
        let horizontal = Self::LEFT.with(Self::RIGHT);
        let vertical = Self::UP.with(Self::DOWN);
        Some(match ch {
            BOX_HORIZONTAL => horizontal,
            BOX_VERTICAL => vertical,
            BOX_TOP_LEFT => Self::RIGHT.with(Self::DOWN),
            BOX_TOP_RIGHT => Self::LEFT.with(Self::DOWN),
            BOX_BOTTOM_LEFT => Self::RIGHT.with(Self::UP),
            BOX_BOTTOM_RIGHT => Self::LEFT.with(Self::UP),
            BOX_TEE_RIGHT => vertical.with(Self::RIGHT),
            BOX_TEE_LEFT => vertical.with(Self::LEFT),
            BOX_TEE_DOWN => horizontal.with(Self::DOWN),
            BOX_TEE_UP => horizontal.with(Self::UP),
            BOX_CROSS => horizontal.with(vertical),
            _ => return None,
        })
    }

    fn to_char(self) -> char {
        let (l, r, u, d) =
            (self.has(Self::LEFT), self.has(Self::RIGHT), self.has(Self::UP), self.has(Self::DOWN));
        match (l, r, u, d) {
            (false, false, false, false) => ' ',
            (_, _, false, false) => BOX_HORIZONTAL,
            (false, false, _, _) => BOX_VERTICAL,
            (false, true, false, true) => BOX_TOP_LEFT,
            (true, false, false, true) => BOX_TOP_RIGHT,
            (false, true, true, false) => BOX_BOTTOM_LEFT,
            (true, false, true, false) => BOX_BOTTOM_RIGHT,
            (false, true, true, true) => BOX_TEE_RIGHT,
            (true, false, true, true) => BOX_TEE_LEFT,
            (true, true, false, true) => BOX_TEE_DOWN,
            (true, true, true, false) => BOX_TEE_UP,
            (true, true, true, true) => BOX_CROSS,
        }
    }
}

/// A fixed-size, bounds-checked character grid.
///
/// Plain characters overwrite whatever was there. Box-drawing characters merge with existing
/// strokes, so crossing lines become junctions (`┼`, `├`, `┬`, ...) instead of overwriting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
    strokes: Vec<Strokes>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        Self::new_filled(width, height, ' ')
    }

    pub fn new_filled(width: usize, height: usize, fill: char) -> Result<Self, CanvasError> {
        let len = width.checked_mul(height).ok_or(CanvasError::AreaOverflow { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![fill; len],
            strokes: vec![Strokes::default(); len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Result<char, CanvasError> {
        let idx = self.index_of(x, y)?;
        Ok(self.glyph_at(x, y, idx))
    }

    pub fn set(&mut self, x: usize, y: usize, ch: char) -> Result<(), CanvasError> {
        let idx = self.index_of(x, y)?;
        match Strokes::from_char(ch) {
            Some(strokes) => self.strokes[idx] = self.strokes[idx].with(strokes),
            None => {
                self.cells[idx] = ch;
                self.strokes[idx] = Strokes::default();
            }
        }
        Ok(())
    }

    /// Writes `text` left-to-right from `(x, y)`, clipping at the right edge.
    pub fn write_str(&mut self, x: usize, y: usize, text: &str) -> Result<(), CanvasError> {
        if y >= self.height {
            return Err(self.out_of_bounds(x, y));
        }
        for (col, ch) in (x..self.width).zip(text.chars()) {
            self.set(col, y, ch)?;
        }
        Ok(())
    }

    pub fn draw_hline(&mut self, x0: usize, x1: usize, y: usize) -> Result<(), CanvasError> {
        let (lo, hi) = ordered(x0, x1);
        self.check(hi, y)?;
        for x in lo..=hi {
            self.set(x, y, BOX_HORIZONTAL)?;
        }
        Ok(())
    }

    pub fn draw_vline(&mut self, x: usize, y0: usize, y1: usize) -> Result<(), CanvasError> {
        let (lo, hi) = ordered(y0, y1);
        self.check(x, hi)?;
        for y in lo..=hi {
            self.set(x, y, BOX_VERTICAL)?;
        }
        Ok(())
    }

    /// Draws a single-line box with opposite corners `(x0, y0)` and `(x1, y1)`.
    ///
    /// Nothing is drawn when any part of the box would fall outside the canvas.
    pub fn draw_box(
        &mut self,
        x0: usize,
        y0: usize,
        x1: usize,
        y1: usize,
    ) -> Result<(), CanvasError> {
        let (left, right) = ordered(x0, x1);
        let (top, bottom) = ordered(y0, y1);
        self.check(right, bottom)?;

        if top == bottom {
            return self.draw_hline(left, right, top);
        }
        if left == right {
            return self.draw_vline(left, top, bottom);
        }

        self.draw_hline(left + 1, right - 1, top)?;
        self.draw_hline(left + 1, right - 1, bottom)?;
        self.draw_vline(left, top + 1, bottom - 1)?;
        self.draw_vline(right, top + 1, bottom - 1)?;
        self.set(left, top, BOX_TOP_LEFT)?;
        self.set(right, top, BOX_TOP_RIGHT)?;
        self.set(left, bottom, BOX_BOTTOM_LEFT)?;
        self.set(right, bottom, BOX_BOTTOM_RIGHT)
    }

    /// Draws an orthogonal route from `from` to `to`: horizontal first, then vertical.
    ///
    /// With `arrow`, the last cell is replaced by an arrowhead pointing along the final segment.
    pub fn draw_route(
        &mut self,
        from: (usize, usize),
        to: (usize, usize),
        arrow: bool,
    ) -> Result<(), CanvasError> {
        let (x0, y0) = from;
        let (x1, y1) = to;
        self.check(x0.max(x1), y0.max(y1))?;

        if x0 != x1 {
            self.draw_hline(x0, x1, y0)?;
        }
        if y0 != y1 {
            self.draw_vline(x1, y0, y1)?;
        }
        if x0 == x1 && y0 == y1 {
            self.set(x0, y0, BOX_HORIZONTAL)?;
        }

        if arrow {
            let head = if y0 < y1 {
                ARROW_DOWN
            } else if y0 > y1 {
                ARROW_UP
            } else if x0 <= x1 {
                ARROW_RIGHT
            } else {
                ARROW_LEFT
            };
            self.set(x1, y1, head)?;
        }
        Ok(())
    }

    fn check(&self, x: usize, y: usize) -> Result<(), CanvasError> {
        if self.in_bounds(x, y) {
            Ok(())
        } else {
            Err(self.out_of_bounds(x, y))
        }
    }

    fn out_of_bounds(&self, x: usize, y: usize) -> CanvasError {
        CanvasError::OutOfBounds { x, y, width: self.width, height: self.height }
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, CanvasError> {
        self.check(x, y)?;
        Ok(y * self.width + x)
    }

    fn glyph_at(&self, x: usize, y: usize, idx: usize) -> char {
        let strokes = self.strokes[idx];
        if strokes.is_empty() {
            return self.cells[idx];
        }
        let joined = self.joined_strokes(x, y, strokes);
        if joined.is_empty() {
            strokes.to_char()
        } else {
            joined.to_char()
        }
    }

    /// Keeps only the strokes that actually meet a stroke in the neighbouring cell.
    fn joined_strokes(&self, x: usize, y: usize, strokes: Strokes) -> Strokes {
        let neighbour = |nx: usize, ny: usize, facing: Strokes| {
            self.in_bounds(nx, ny) && self.strokes[ny * self.width + nx].has(facing)
        };

        let mut joined = Strokes::default();
        if strokes.has(Strokes::LEFT) && x > 0 && neighbour(x - 1, y, Strokes::RIGHT) {
            joined = joined.with(Strokes::LEFT);
        }
        if strokes.has(Strokes::RIGHT) && neighbour(x + 1, y, Strokes::LEFT) {
            joined = joined.with(Strokes::RIGHT);
        }
        if strokes.has(Strokes::UP) && y > 0 && neighbour(x, y - 1, Strokes::DOWN) {
            joined = joined.with(Strokes::UP);
        }
        if strokes.has(Strokes::DOWN) && neighbour(x, y + 1, Strokes::UP) {
            joined = joined.with(Strokes::DOWN);
        }
        joined
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        for y in 0..self.height {
            if y > 0 {
                f.write_char('\n')?;
            }
            for x in 0..self.width {
                f.write_char(self.glyph_at(x, y, y * self.width + x))?;
            }
        }
        Ok(())
    }
}

fn ordered(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanvasError {
    #[error("canvas area overflow: {width}*{height}")]
    AreaOverflow { width: usize, height: usize },
    #[error("out of bounds: ({x},{y}) for {width}x{height} canvas")]
    OutOfBounds { x: usize, y: usize, width: usize, height: usize },
}

#[cfg(test)]
mod tests {
    use super::{Canvas, CanvasError};

    #[test]
    fn set_and_get_in_bounds() {
        let mut c = Canvas::new_filled(3, 2, '.').expect("canvas");
        c.set(1, 0, 'X').unwrap();
        assert_eq!(c.get(1, 0).unwrap(), 'X');
        assert_eq!(c.to_string(), ".X.\n...");
    }

    #[test]
    fn set_out_of_bounds_errors() {
        let mut c = Canvas::new(2, 2).expect("canvas");
        let err = c.set(2, 0, 'X').unwrap_err();
        assert_eq!(err, CanvasError::OutOfBounds { x: 2, y: 0, width: 2, height: 2 });
    }

    #[test]
    fn rejects_area_overflow() {
        let err = Canvas::new_filled(usize::MAX, 2, '.').unwrap_err();
        assert_eq!(err, CanvasError::AreaOverflow { width: usize::MAX, height: 2 });
    }

    #[test]
    fn write_str_clips_at_right_edge() {
        let mut c = Canvas::new_filled(4, 1, '.').expect("canvas");
        c.write_str(2, 0, "abcdef").unwrap();
        assert_eq!(c.to_string(), "..ab");
    }

    #[test]
    fn draw_box_draws_corners_and_edges() {
        let mut c = Canvas::new_filled(6, 5, '.').expect("canvas");
        c.draw_box(1, 1, 4, 3).unwrap();
        assert_eq!(c.to_string(), "......\n.┌──┐.\n.│..│.\n.└──┘.\n......");
    }

    #[test]
    fn draw_box_out_of_bounds_draws_nothing() {
        let mut c = Canvas::new_filled(4, 3, '.').expect("canvas");
        let err = c.draw_box(0, 0, 4, 2).unwrap_err();
        assert_eq!(err, CanvasError::OutOfBounds { x: 4, y: 2, width: 4, height: 3 });
        assert_eq!(c.to_string(), "....\n....\n....");
    }

    #[test]
    fn crossing_lines_merge_into_junctions() {
        let mut c = Canvas::new_filled(5, 5, '.').expect("canvas");
        c.draw_hline(0, 4, 2).unwrap();
        c.draw_vline(2, 0, 4).unwrap();
        assert_eq!(c.to_string(), "..│..\n..│..\n──┼──\n..│..\n..│..");

        let mut c = Canvas::new_filled(5, 3, '.').expect("canvas");
        c.draw_box(0, 0, 4, 2).unwrap();
        c.draw_vline(2, 0, 2).unwrap();
        assert_eq!(c.to_string(), "┌─┬─┐\n│.│.│\n└─┴─┘");
    }

    #[test]
    fn draw_route_bends_once_and_ends_in_arrowhead() {
        let mut c = Canvas::new_filled(4, 3, '.').expect("canvas");
        c.draw_route((0, 0), (3, 2), true).unwrap();
        assert_eq!(c.to_string(), "───┐\n...│\n...▼");

        let mut c = Canvas::new_filled(4, 1, '.').expect("canvas");
        c.draw_route((3, 0), (0, 0), true).unwrap();
        assert_eq!(c.to_string(), "◀───");
    }
}
