//! Core types shared by the layout, component and renderer modules.
//!
//! These are plain value types: no rendering logic lives here.

use crossterm::style::{Attribute, Color, ContentStyle};

// =============================================================================
// Dimension
// =============================================================================

/// A size along one axis, in terminal cells.
///
/// ```
/// use spark_document::types::Dimension;
///
/// let width = Dimension::Cells(50);       // 50 columns
/// let half = Dimension::Percent(50.0);    // half the parent
/// let auto = Dimension::Auto;             // content-determined
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dimension {
    /// Size from content.
    #[default]
    Auto,
    /// Absolute size in terminal cells.
    Cells(u16),
    /// Percentage of parent size (0-100).
    Percent(f32),
}

impl From<u16> for Dimension {
    fn from(value: u16) -> Self {
        if value == 0 {
            Self::Auto
        } else {
            Self::Cells(value)
        }
    }
}

// =============================================================================
// Edges
// =============================================================================

/// Per-side spacing in cells (margin, padding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Edges {
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn all(n: u16) -> Self {
        Self::new(n, n, n, n)
    }

    /// Vertical and horizontal shorthand, like CSS `margin: 1 2`.
    pub const fn symmetric(vertical: u16, horizontal: u16) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }
}

// =============================================================================
// Flex Enums
// =============================================================================

/// Flex direction for container layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexDirection {
    #[default]
    Column,
    Row,
    ColumnReverse,
    RowReverse,
}

/// Flex wrap behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexWrap {
    #[default]
    NoWrap,
    Wrap,
}

/// Justify content (main axis alignment).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JustifyContent {
    #[default]
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// Align items (cross axis alignment).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignItems {
    #[default]
    Stretch,
    FlexStart,
    Center,
    FlexEnd,
}

/// Text wrap mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextWrap {
    /// Break onto the next line when the width runs out.
    #[default]
    Wrap,
    /// One line per hard newline, clipped at the node edge.
    NoWrap,
    /// One line per hard newline, cut with an ellipsis.
    Truncate,
}

// =============================================================================
// Text Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK = 1 << 4;
        const INVERSE = 1 << 5;
        const HIDDEN = 1 << 6;
        const STRIKETHROUGH = 1 << 7;
    }
}

impl Attr {
    const TABLE: [(Attr, Attribute); 8] = [
        (Attr::BOLD, Attribute::Bold),
        (Attr::DIM, Attribute::Dim),
        (Attr::ITALIC, Attribute::Italic),
        (Attr::UNDERLINE, Attribute::Underlined),
        (Attr::BLINK, Attribute::SlowBlink),
        (Attr::INVERSE, Attribute::Reverse),
        (Attr::HIDDEN, Attribute::Hidden),
        (Attr::STRIKETHROUGH, Attribute::CrossedOut),
    ];

    /// The crossterm attributes matching the set flags.
    pub fn attributes(self) -> impl Iterator<Item = Attribute> {
        Self::TABLE
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, attr)| attr)
    }
}

// =============================================================================
// Text Style
// =============================================================================

/// Foreground, background and attributes for a run of text.
///
/// Unset colors fall through to whatever style encloses the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub attrs: Attr,
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn attrs(mut self, attrs: Attr) -> Self {
        self.attrs |= attrs;
        self
    }

    pub fn bold(self) -> Self {
        self.attrs(Attr::BOLD)
    }

    pub fn italic(self) -> Self {
        self.attrs(Attr::ITALIC)
    }

    pub fn underline(self) -> Self {
        self.attrs(Attr::UNDERLINE)
    }

    pub fn dim(self) -> Self {
        self.attrs(Attr::DIM)
    }

    /// Layer `self` over `base`: set colors win, attributes accumulate.
    pub fn over(self, base: TextStyle) -> TextStyle {
        TextStyle {
            fg: self.fg.or(base.fg),
            bg: self.bg.or(base.bg),
            attrs: self.attrs | base.attrs,
        }
    }

    pub fn is_plain(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_empty()
    }

    /// Convert to the crossterm style used when serializing cells.
    pub fn to_content_style(self) -> ContentStyle {
        let mut style = ContentStyle::new();
        style.foreground_color = self.fg;
        style.background_color = self.bg;
        for attr in self.attrs.attributes() {
            style.attributes.set(attr);
        }
        style
    }
}

// =============================================================================
// Geometry
// =============================================================================

/// An absolute rectangle on the canvas, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }
}

/// Terminal extents as reported by a size probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TerminalSize {
    pub rows: u16,
    pub cols: u16,
}

impl TerminalSize {
    pub const fn new(rows: u16, cols: u16) -> Self {
        Self { rows, cols }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_from_zero_is_auto() {
        assert_eq!(Dimension::from(0u16), Dimension::Auto);
        assert_eq!(Dimension::from(12u16), Dimension::Cells(12));
    }

    #[test]
    fn test_attr_to_crossterm() {
        let attrs: Vec<_> = (Attr::BOLD | Attr::UNDERLINE).attributes().collect();
        assert_eq!(attrs, vec![Attribute::Bold, Attribute::Underlined]);
        assert_eq!(Attr::NONE.attributes().count(), 0);
    }

    #[test]
    fn test_style_over() {
        let base = TextStyle::new().fg(Color::Red).bold();
        let own = TextStyle::new().fg(Color::Green).italic();
        let merged = own.over(base);
        assert_eq!(merged.fg, Some(Color::Green));
        assert!(merged.attrs.contains(Attr::BOLD | Attr::ITALIC));
        assert!(TextStyle::default().is_plain());
        assert!(!merged.is_plain());
    }

    #[test]
    fn test_plain_style_converts_to_default() {
        assert_eq!(TextStyle::default().to_content_style(), ContentStyle::new());
    }

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(2, 3, 10, 4);
        assert_eq!(r.right(), 12);
        assert_eq!(r.bottom(), 7);
        assert!(!r.is_empty());
        assert!(Rect::new(0, 0, 0, 3).is_empty());
    }
}
