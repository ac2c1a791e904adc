//! Line-oriented display sink.

use std::io::{self, Write};

use ssn_core::DisplaySink;

/// Writes each shown value as one line.
///
/// `DisplaySink::show` cannot fail, so the first write error is kept
/// and later writes are skipped. Call [`LineSink::finish`] to get it.
pub struct LineSink<W> {
    out: W,
    lines_count: u64,
    error: Option<io::Error>,
}

impl<W: Write> LineSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            lines_count: 0,
            error: None,
        }
    }

    /// Lines written successfully.
    pub fn lines_count(&self) -> u64 {
        self.lines_count
    }

    /// Flush and return the writer, or the first write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> DisplaySink for LineSink<W> {
    fn show(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        match writeln!(self.out, "{text}") {
            Ok(()) => self.lines_count += 1,
            Err(e) => self.error = Some(e),
        }
    }
}
