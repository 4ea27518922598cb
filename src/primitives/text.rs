//! Text Primitive - Display text with styling and wrapping.
//!
//! The only leaf the crate ships. It measures itself in display cells and
//! paints line by line into the area the layout engine gave it.
//!
//! # Example
//!
//! ```ignore
//! use spark_document::{text, TextWrap};
//!
//! let label = text("Downloading…").bold().wrap(TextWrap::Truncate);
//! ```

use crossterm::style::Color;

use crate::engine::{Context, Element, Leaf};
use crate::layout::{clip_text, max_line_width, string_width, truncate_text, wrap_text};
use crate::renderer::Canvas;
use crate::types::{Attr, Rect, TextStyle, TextWrap};

use super::style::inherited_style;

// =============================================================================
// Text Leaf
// =============================================================================

/// A run of text, possibly spanning several lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text {
    content: String,
    style: Option<TextStyle>,
    wrap: TextWrap,
}

/// Create a text leaf.
pub fn text(content: impl Into<String>) -> Text {
    Text::new(content)
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the whole style. Unset fields still fall through to the
    /// inherited style.
    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn wrap(mut self, wrap: TextWrap) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn fg(self, color: Color) -> Self {
        self.map_style(|s| s.fg(color))
    }

    pub fn bg(self, color: Color) -> Self {
        self.map_style(|s| s.bg(color))
    }

    pub fn attrs(self, attrs: Attr) -> Self {
        self.map_style(|s| s.attrs(attrs))
    }

    pub fn bold(self) -> Self {
        self.attrs(Attr::BOLD)
    }

    pub fn italic(self) -> Self {
        self.attrs(Attr::ITALIC)
    }

    pub fn dim(self) -> Self {
        self.attrs(Attr::DIM)
    }

    fn map_style(mut self, f: impl FnOnce(TextStyle) -> TextStyle) -> Self {
        self.style = Some(f(self.style.unwrap_or_default()));
        self
    }

    /// Own style layered over the one inherited from context.
    fn resolved_style(&self, cx: &Context) -> TextStyle {
        let inherited = inherited_style(cx);
        match self.style {
            Some(own) => own.over(inherited),
            None => inherited,
        }
    }

    /// Lines as painted into `width` columns.
    fn lines(&self, width: u16) -> Vec<String> {
        match self.wrap {
            TextWrap::Wrap => wrap_text(&self.content, width),
            TextWrap::NoWrap => self.content.split('\n').map(|l| clip_text(l, width)).collect(),
            TextWrap::Truncate => self
                .content
                .split('\n')
                .map(|l| truncate_text(l, width))
                .collect(),
        }
    }

    fn hard_line_count(&self) -> u16 {
        if self.content.is_empty() {
            return 0;
        }
        self.content.split('\n').count().min(u16::MAX as usize) as u16
    }
}

impl Leaf for Text {
    fn measure(&self, _cx: &Context, available_width: Option<u16>) -> (u16, u16) {
        if self.content.is_empty() {
            return (0, 0);
        }

        let natural = max_line_width(&self.content);
        match (self.wrap, available_width) {
            (_, None) => (natural, self.hard_line_count()),
            (TextWrap::Wrap, Some(width)) => {
                let lines = wrap_text(&self.content, width);
                let cols = lines.iter().map(|l| string_width(l)).max().unwrap_or(0);
                (cols, lines.len().min(u16::MAX as usize) as u16)
            }
            (TextWrap::NoWrap | TextWrap::Truncate, Some(width)) => {
                (natural.min(width), self.hard_line_count())
            }
        }
    }

    fn paint(&self, cx: &Context, area: Rect, canvas: &mut Canvas) {
        if area.is_empty() {
            return;
        }

        let style = self.resolved_style(cx);
        for (row, line) in self.lines(area.width).iter().take(area.height as usize).enumerate() {
            canvas.put_str(area.x, area.y + row as u16, line, style, area);
        }
        if style.bg.is_some() {
            canvas.fill(area, style);
        }
    }
}

impl From<Text> for Element {
    fn from(text: Text) -> Self {
        Element::leaf(text)
    }
}

impl From<&str> for Element {
    fn from(content: &str) -> Self {
        Text::new(content).into()
    }
}

impl From<String> for Element {
    fn from(content: String) -> Self {
        Text::new(content).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::styled;
    use crate::primitives::STYLE_KEY;
    use crate::renderer::Cell;

    #[test]
    fn test_measure_unconstrained() {
        let t = text("ab\nabcd");
        assert_eq!(t.measure(&Context::new(), None), (4, 2));
        assert_eq!(text("").measure(&Context::new(), None), (0, 0));
    }

    #[test]
    fn test_measure_wraps_to_width() {
        let t = text("hello world");
        assert_eq!(t.measure(&Context::new(), Some(5)), (5, 3));
        // Min-content: widest character
        assert_eq!(t.measure(&Context::new(), Some(0)), (1, 11));
    }

    #[test]
    fn test_measure_truncate_keeps_one_line() {
        let t = text("hello world").wrap(TextWrap::Truncate);
        assert_eq!(t.measure(&Context::new(), Some(6)), (6, 1));
    }

    #[test]
    fn test_paint_truncate() {
        let t = text("hello world").wrap(TextWrap::Truncate);
        let mut canvas = Canvas::new(6, 1);
        t.paint(&Context::new(), canvas.bounds(), &mut canvas);
        assert_eq!(canvas.row_text(0), "hello…");
    }

    #[test]
    fn test_paint_respects_area_height() {
        let t = text("a\nb\nc");
        let mut canvas = Canvas::new(3, 3);
        t.paint(&Context::new(), Rect::new(1, 1, 2, 2), &mut canvas);
        assert_eq!(canvas.lines(), vec!["", " a", " b"]);
    }

    #[test]
    fn test_own_style_over_inherited() {
        let cx = Context::new().with_value(STYLE_KEY, TextStyle::new().fg(Color::Red).bold());
        let t = text("x").fg(Color::Blue);
        let mut canvas = Canvas::new(1, 1);
        t.paint(&cx, canvas.bounds(), &mut canvas);

        match canvas.get(0, 0) {
            Some(Cell::Glyph { style, .. }) => {
                assert_eq!(style.fg, Some(Color::Blue));
                assert!(style.attrs.contains(Attr::BOLD));
            }
            other => panic!("unexpected cell {other:?}"),
        }
    }

    #[test]
    fn test_str_into_element_is_leaf() {
        assert!(matches!(Element::from("hi"), Element::Leaf(_)));
        assert!(matches!(styled(TextStyle::new(), "hi"), Element::Context { .. }));
    }
}
