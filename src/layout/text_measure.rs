//! Text Measurement
//!
//! Utilities for measuring text dimensions in terminal cells.
//!
//! Widths come from `unicode-width`: ASCII is 1 cell, CJK and most emoji
//! are 2 cells, combining marks and control characters are 0 cells.
//! Wrapping is character-wise and honours hard newlines.

use unicode_width::UnicodeWidthChar;

/// Display width of one character in terminal cells.
#[inline]
pub fn char_width(c: char) -> u16 {
    c.width().unwrap_or(0) as u16
}

/// Display width of a string in terminal cells.
///
/// Newlines count as zero; use [`max_line_width`] for multi-line text.
pub fn string_width(s: &str) -> u16 {
    s.chars()
        .fold(0u16, |width, c| width.saturating_add(char_width(c)))
}

/// Width of the widest hard line.
pub fn max_line_width(text: &str) -> u16 {
    text.split('\n').map(string_width).max().unwrap_or(0)
}

/// Wrap text to a given width.
///
/// Every hard newline starts a new line; a trailing newline yields a
/// trailing empty line, like the terminal would show it.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }

    let width = width.max(1);
    let mut lines = Vec::new();

    for hard_line in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0u16;

        for c in hard_line.chars() {
            let w = char_width(c);
            if current_width + w > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(c);
            current_width += w;
        }

        lines.push(current);
    }

    lines
}

/// Truncate text to fit within a given width, adding an ellipsis when cut.
pub fn truncate_text(text: &str, width: u16) -> String {
    if width == 0 {
        return String::new();
    }

    if string_width(text) <= width {
        return text.to_string();
    }

    // Leave room for the ellipsis
    let target = width.saturating_sub(1);
    let mut result = String::new();
    let mut current = 0u16;

    for c in text.chars() {
        let w = char_width(c);
        if current + w > target {
            break;
        }
        result.push(c);
        current += w;
    }

    result.push('…');
    result
}

/// Clip text to `width` cells without any marker.
pub fn clip_text(text: &str, width: u16) -> String {
    let mut result = String::new();
    let mut current = 0u16;
    for c in text.chars() {
        let w = char_width(c);
        if current + w > width {
            break;
        }
        result.push(c);
        current += w;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_width_ascii() {
        assert_eq!(string_width("hello"), 5);
        assert_eq!(string_width(""), 0);
        assert_eq!(string_width("a b c"), 5);
    }

    #[test]
    fn test_string_width_wide() {
        assert_eq!(string_width("日本"), 4);
    }

    #[test]
    fn test_wrap_text_hard_newlines() {
        assert_eq!(wrap_text("a\nb\nc", 10).len(), 3);
        assert_eq!(wrap_text("a\n", 10), vec!["a", ""]);
        assert!(wrap_text("", 10).is_empty());
    }

    #[test]
    fn test_wrap_text() {
        let lines = wrap_text("hello world", 5);
        assert_eq!(lines, vec!["hello", " worl", "d"]);
    }

    #[test]
    fn test_wrap_text_wide_chars_do_not_split() {
        let lines = wrap_text("日本語", 3);
        assert_eq!(lines, vec!["日", "本", "語"]);
    }

    #[test]
    fn test_wrap_zero_width_is_one() {
        assert_eq!(wrap_text("abc", 0), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_max_line_width() {
        assert_eq!(max_line_width("ab\nabcd\n"), 4);
        assert_eq!(max_line_width(""), 0);
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("hello world", 6), "hello…");
        assert_eq!(truncate_text("", 5), "");
        assert_eq!(truncate_text("hello", 4), "hel…");
    }

    #[test]
    fn test_clip_text() {
        assert_eq!(clip_text("hello", 3), "hel");
        assert_eq!(clip_text("日本", 3), "日");
    }
}
