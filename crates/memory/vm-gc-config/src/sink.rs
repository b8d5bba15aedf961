//! Diagnostic sinks
//!
//! Destination for error lines and help text. Lines are passed without a
//! trailing newline; each sink terminates them itself.

use std::io::{self, Write};

/// Write-only destination for human readable diagnostics
pub trait DiagnosticSink {
    /// Write one line of text
    fn write_line(&mut self, line: &str);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn write_line(&mut self, line: &str) {
        (**self).write_line(line);
    }
}

/// Writes diagnostics to the process standard error
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn write_line(&mut self, line: &str) {
        let mut err = io::stderr().lock();
        let _ = writeln!(err, "{line}");
    }
}

/// Adapts any [`io::Write`] into a sink
///
/// Diagnostics are best effort: write errors are dropped.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    inner: W,
}

impl<W: Write> WriterSink<W> {
    /// Wrap `inner`
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Unwrap the writer
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> DiagnosticSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) {
        let _ = writeln!(self.inner, "{line}");
    }
}

/// Collects diagnostics in memory
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BufferSink {
    lines: Vec<String>,
}

impl BufferSink {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written so far
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether nothing has been written
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// All lines joined, each terminated by a newline
    pub fn contents(&self) -> String {
        self.lines.iter().map(|l| format!("{l}\n")).collect()
    }

    /// Drop everything collected so far
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl DiagnosticSink for BufferSink {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_sink() {
        let mut sink = BufferSink::new();
        assert!(sink.is_empty());
        sink.write_line("first");
        sink.write_line("second");
        assert_eq!(sink.lines(), ["first", "second"]);
        assert_eq!(sink.contents(), "first\nsecond\n");
        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_writer_sink() {
        let mut sink = WriterSink::new(Vec::new());
        sink.write_line("Unknown GC option 'x'.");
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out, "Unknown GC option 'x'.\n");
    }

    #[test]
    fn test_forwarding_through_reference() {
        fn emit<S: DiagnosticSink>(mut sink: S) {
            sink.write_line("line");
        }
        let mut buffer = BufferSink::new();
        emit(&mut buffer);
        assert_eq!(buffer.lines(), ["line"]);
    }
}
