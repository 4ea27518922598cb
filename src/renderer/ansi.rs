//! Terminal control sequences, serialized through crossterm commands.
//!
//! The renderer never writes escape codes by hand; everything goes through
//! crossterm's `queue!` so the byte format stays crossterm's concern.

use std::io::{self, Write};

use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

/// Move up `count` lines, return to column 0 and erase to the end of the screen.
///
/// `count == 0` skips the cursor-up: most terminals read `CSI 0 A` as
/// "up one line".
pub fn erase_lines<W: Write>(w: &mut W, count: u16) -> io::Result<()> {
    if count > 0 {
        queue!(w, MoveUp(count))?;
    }
    queue!(w, MoveToColumn(0), Clear(ClearType::FromCursorDown))
}

/// Line break written after every element.
pub fn line_break<W: Write + ?Sized>(w: &mut W) -> io::Result<()> {
    w.write_all(b"\n")
}

/// Strip CSI sequences from rendered output (for tests and logs).
pub fn strip_csi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // Parameters run until the final byte in 0x40..=0x7E
            for f in chars.by_ref() {
                if ('\x40'..='\x7e').contains(&f) {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Lines moved up by the first cursor-up sequence in `s`, if any.
pub fn parse_cursor_up(s: &str) -> Option<u16> {
    let start = s.find("\x1b[")?;
    let rest = &s[start + 2..];
    let end = rest.find(|c: char| !c.is_ascii_digit())?;
    if rest[end..].starts_with('A') {
        rest[..end].parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn erase(count: u16) -> String {
        let mut out = Vec::new();
        erase_lines(&mut out, count).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_erase_moves_up_then_clears() {
        let out = erase(3);
        assert_eq!(parse_cursor_up(&out), Some(3));
        assert!(out.ends_with("\x1b[J"));
    }

    #[test]
    fn test_erase_zero_never_moves_up() {
        let out = erase(0);
        assert_eq!(parse_cursor_up(&out), None);
        assert!(out.contains("\x1b[J"));
    }

    #[test]
    fn test_erase_into_output_buffer() {
        let mut buf = crate::renderer::OutputBuffer::new();
        erase_lines(&mut buf, 2).unwrap();
        line_break(&mut buf).unwrap();
        let out = buf.as_str();
        assert_eq!(parse_cursor_up(&out), Some(2));
        assert!(out.ends_with("\x1b[J\n"));
    }

    #[test]
    fn test_strip_csi() {
        assert_eq!(strip_csi("\x1b[2A\x1b[1Ghello\x1b[J\n"), "hello\n");
        assert_eq!(strip_csi("\x1b[38;5;9mred\x1b[0m"), "red");
        assert_eq!(strip_csi("plain"), "plain");
    }
}
