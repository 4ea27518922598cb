//! Output buffering.
//!
//! A frame is assembled in memory and written to the sink with a single
//! `write_all` + `flush`, so a slow sink sees one write per frame and the
//! terminal never shows a half-erased region.

use std::io::{self, Write};

/// A buffer that accumulates one frame of output for batch writing.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with default capacity.
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write the buffered frame to `writer` and flush it.
    ///
    /// The buffer is cleared even when the write fails: a failed frame is
    /// dropped, not retried.
    pub fn flush_to<W: Write + ?Sized>(&mut self, writer: &mut W) -> io::Result<()> {
        if self.data.is_empty() {
            return Ok(());
        }
        let result = writer.write_all(&self.data).and_then(|()| writer.flush());
        self.data.clear();
        result
    }

    /// The accumulated data as a string (lossy).
    pub fn as_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }
}

impl Write for OutputBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(()) // Buffering only - real flush via flush_to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl Write for Failing {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_flush_to_moves_bytes() {
        let mut buf = OutputBuffer::new();
        write!(buf, "frame {}", 1).unwrap();
        assert_eq!(buf.as_str(), "frame 1");

        let mut sink = Vec::new();
        buf.flush_to(&mut sink).unwrap();
        assert_eq!(sink, b"frame 1");
        assert!(buf.is_empty());
    }

    #[test]
    fn test_failed_flush_drops_frame() {
        let mut buf = OutputBuffer::new();
        buf.write_all(b"lost").unwrap();
        assert!(buf.flush_to(&mut Failing).is_err());
        assert_eq!(buf.len(), 0);
    }
}
