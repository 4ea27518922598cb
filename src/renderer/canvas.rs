//! Canvas - the fixed-width text buffer an element is painted into.
//!
//! The canvas is a 2D grid of [`Cell`]s with flat row-major storage.
//! Leaves paint through [`Canvas::put_str`], which clips to a rectangle and
//! to the canvas bounds. Wide characters occupy two cells: the glyph and a
//! continuation marker.
//!
//! Serialization ([`Canvas::write_to`]) emits rows separated by `\n` with
//! no trailing newline, trims trailing blank cells, and wraps styled runs
//! in crossterm SGR sequences.

use std::io::{self, Write};

use crate::layout::char_width;
use crate::types::{Rect, TextStyle};

// =============================================================================
// Cell
// =============================================================================

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Nothing painted here.
    #[default]
    Blank,
    /// A character with its style.
    Glyph { ch: char, style: TextStyle },
    /// Second half of a wide character.
    Continuation,
}

// =============================================================================
// Canvas
// =============================================================================

/// A 2D buffer of cells, `width` columns by `height` rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    /// Create a blank canvas.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Blank; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// The full canvas as a rectangle.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Write `text` starting at `(x, y)`, clipped to `clip`.
    ///
    /// Returns the number of columns written. A wide character that would
    /// straddle the clip edge is dropped.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, style: TextStyle, clip: Rect) -> u16 {
        if y < clip.y || y >= clip.bottom() || y >= self.height {
            return 0;
        }

        let right = clip.right().min(self.width);
        let mut col = x;

        for ch in text.chars() {
            let w = char_width(ch);
            if w == 0 {
                continue;
            }
            if col + w > right {
                break;
            }
            if col >= clip.x {
                self.set(col, y, Cell::Glyph { ch, style });
                if w == 2 {
                    self.set(col + 1, y, Cell::Continuation);
                }
            }
            col += w;
        }

        col.saturating_sub(x)
    }

    /// Fill a rectangle's blank cells with spaces in `style` (for backgrounds).
    pub fn fill(&mut self, area: Rect, style: TextStyle) {
        for y in area.y..area.bottom().min(self.height) {
            for x in area.x..area.right().min(self.width) {
                if self.get(x, y) == Some(&Cell::Blank) {
                    self.set(x, y, Cell::Glyph { ch: ' ', style });
                }
            }
        }
    }

    /// Plain text of one row with trailing blanks trimmed (for tests and logs).
    pub fn row_text(&self, y: u16) -> String {
        let mut out = String::new();
        for x in 0..self.trimmed_len(y) {
            match self.cells[self.index(x, y)] {
                Cell::Blank => out.push(' '),
                Cell::Glyph { ch, .. } => out.push(ch),
                Cell::Continuation => {}
            }
        }
        out
    }

    /// All rows as plain text.
    pub fn lines(&self) -> Vec<String> {
        (0..self.height).map(|y| self.row_text(y)).collect()
    }

    /// Columns up to and including the last painted cell of row `y`.
    fn trimmed_len(&self, y: u16) -> u16 {
        (0..self.width)
            .rev()
            .find(|&x| self.cells[self.index(x, y)] != Cell::Blank)
            .map_or(0, |x| x + 1)
    }

    /// Serialize rows to `w`, separated by `\n`, without a trailing newline.
    pub fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
        let mut run = String::new();

        for y in 0..self.height {
            if y > 0 {
                w.write_all(b"\n")?;
            }

            let mut run_style = TextStyle::default();
            for x in 0..self.trimmed_len(y) {
                let (ch, style) = match self.cells[self.index(x, y)] {
                    Cell::Blank => (' ', TextStyle::default()),
                    Cell::Glyph { ch, style } => (ch, style),
                    Cell::Continuation => continue,
                };
                if style != run_style && !run.is_empty() {
                    write_run(w, &run, run_style)?;
                    run.clear();
                }
                run_style = style;
                run.push(ch);
            }

            if !run.is_empty() {
                write_run(w, &run, run_style)?;
                run.clear();
            }
        }

        Ok(())
    }
}

/// Emit one run of equally styled text.
fn write_run<W: Write + ?Sized>(w: &mut W, run: &str, style: TextStyle) -> io::Result<()> {
    if style.is_plain() {
        w.write_all(run.as_bytes())
    } else {
        write!(w, "{}", style.to_content_style().apply(run))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::style::Color;

    fn written(canvas: &Canvas) -> String {
        let mut out = Vec::new();
        canvas.write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_new_canvas_is_blank() {
        let canvas = Canvas::new(4, 2);
        assert_eq!(canvas.get(3, 1), Some(&Cell::Blank));
        assert_eq!(canvas.get(4, 0), None);
        assert_eq!(written(&canvas), "\n");
    }

    #[test]
    fn test_put_str_clips_to_rect() {
        let mut canvas = Canvas::new(10, 1);
        let n = canvas.put_str(2, 0, "hello", TextStyle::default(), Rect::new(2, 0, 3, 1));
        assert_eq!(n, 3);
        assert_eq!(canvas.row_text(0), "  hel");
    }

    #[test]
    fn test_put_str_outside_rows_is_noop() {
        let mut canvas = Canvas::new(10, 1);
        let n = canvas.put_str(0, 1, "x", TextStyle::default(), canvas.bounds());
        assert_eq!(n, 0);
    }

    #[test]
    fn test_wide_char_uses_continuation() {
        let mut canvas = Canvas::new(3, 1);
        canvas.put_str(0, 0, "日本", TextStyle::default(), canvas.bounds());
        assert_eq!(canvas.get(1, 0), Some(&Cell::Continuation));
        // Second glyph would straddle the edge
        assert_eq!(canvas.get(2, 0), Some(&Cell::Blank));
        assert_eq!(canvas.row_text(0), "日");
    }

    #[test]
    fn test_write_trims_trailing_blanks() {
        let mut canvas = Canvas::new(8, 2);
        canvas.put_str(0, 0, "ab", TextStyle::default(), canvas.bounds());
        canvas.put_str(3, 1, "c", TextStyle::default(), canvas.bounds());
        assert_eq!(written(&canvas), "ab\n   c");
    }

    #[test]
    fn test_styled_runs_emit_sgr() {
        let mut canvas = Canvas::new(8, 1);
        let red = TextStyle::new().fg(Color::Red);
        canvas.put_str(0, 0, "ab", red, canvas.bounds());
        canvas.put_str(2, 0, "cd", TextStyle::default(), canvas.bounds());
        let out = written(&canvas);
        assert!(out.starts_with("\x1b["));
        assert!(out.contains("ab"));
        assert!(out.ends_with("cd"));
    }

    #[test]
    fn test_fill_keeps_glyphs() {
        let mut canvas = Canvas::new(4, 1);
        canvas.put_str(0, 0, "x", TextStyle::default(), canvas.bounds());
        canvas.fill(canvas.bounds(), TextStyle::new().bg(Color::Blue));
        assert!(matches!(canvas.get(0, 0), Some(Cell::Glyph { ch: 'x', .. })));
        assert!(matches!(canvas.get(3, 0), Some(Cell::Glyph { ch: ' ', .. })));
    }
}
