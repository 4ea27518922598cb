//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use spark_document::renderer::ansi;
use spark_document::{Document, DocumentConfig, Output};

/// In-memory sink whose contents stay readable after the document owns it.
#[derive(Clone, Default)]
pub struct SharedSink(Arc<Mutex<Vec<u8>>>);

impl SharedSink {
    /// Drain everything written so far.
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.0.lock().unwrap());
        String::from_utf8(bytes).unwrap()
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A document with a fixed size writing into a shared sink.
pub fn document(rows: u16, cols: u16) -> (Document, SharedSink) {
    let sink = SharedSink::default();
    let doc = Document::with_config(DocumentConfig::new().with_size(rows, cols));
    doc.set_output(Output::new(sink.clone()));
    (doc, sink)
}

/// Painted text of a frame, escape sequences removed.
pub fn visible(frame: &str) -> String {
    ansi::strip_csi(frame)
}

/// Lines the frame's erase directive moved up over.
pub fn erased(frame: &str) -> u16 {
    ansi::parse_cursor_up(frame).unwrap_or(0)
}
