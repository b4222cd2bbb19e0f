//! Report sinks

use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::Result;

/// Destination for report lines
pub trait ReportSink {
    /// Write one line (a newline is appended by the sink)
    fn write_line(&mut self, line: &str) -> Result<()>;

    /// Push buffered lines to the underlying destination
    fn flush(&mut self) -> Result<()>;
}

// =============================================================================
// WriterSink
// =============================================================================

/// Sink over any [`Write`] implementation
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Unwrap the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<Stdout> {
    /// Console sink
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl WriterSink<BufWriter<File>> {
    /// File sink; the file is created or truncated
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> ReportSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

// =============================================================================
// MemorySink
// =============================================================================

/// In-memory sink; clones share the same buffer
///
/// Keep one clone to inspect the lines written through another.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Every line written so far, each terminated by `\n`
    pub fn contents(&self) -> String {
        self.lines
            .lock()
            .iter()
            .map(|line| format!("{}\n", line))
            .collect()
    }
}

impl ReportSink for MemorySink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

// =============================================================================
// FanOutSink
// =============================================================================

/// Writes each line to every attached sink, in attach order
#[derive(Default)]
pub struct FanOutSink {
    sinks: Vec<Box<dyn ReportSink>>,
}

impl FanOutSink {
    /// Create a fan-out with no sinks
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a sink (builder style)
    pub fn with(mut self, sink: impl ReportSink + 'static) -> Self {
        self.push(sink);
        self
    }

    /// Attach a sink
    pub fn push(&mut self, sink: impl ReportSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    /// Write a line to every sink
    ///
    /// Stops at the first failing sink.
    pub fn report(&mut self, line: &str) -> Result<()> {
        self.write_line(line)
    }

    /// Number of attached sinks
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Check if no sinks are attached
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl ReportSink for FanOutSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        for sink in &mut self.sinks {
            sink.write_line(line)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        for sink in &mut self.sinks {
            sink.flush()?;
        }
        Ok(())
    }
}
