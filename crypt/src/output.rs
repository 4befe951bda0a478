///
/// Output helper shared by every command handler.
///
/// Commands write exactly one line to stdout: either a token or the
/// success marker. Diagnostics never go through here; they are logged to
/// stderr.
///

use std::io::{self, Write};

/// Marker printed when a check succeeds.
pub const SUCCESS_MARKER: &str = "[OK]";

pub struct Output<'a> {
    writer: &'a mut dyn Write,
}

impl<'a> Output<'a> {
    pub fn new(writer: &'a mut dyn Write) -> Self {
        Self { writer }
    }

    /// Write `text` followed by a newline.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()
    }

    /// Report success with the bare marker.
    pub fn success(&mut self) -> io::Result<()> {
        self.line(SUCCESS_MARKER)
    }
}
