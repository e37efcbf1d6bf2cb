//! Output destinations.
//!
//! Each record is formatted into one buffer and handed to the destination in a
//! single `write_all`. For the process streams that call holds the stream's
//! lock, so concurrent records never interleave.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use tracing_subscriber::fmt::MakeWriter;

/// Flushing half of a destination, kept by the logger for `sync`.
pub trait Flush: Send + Sync {
    fn flush_sink(&self) -> io::Result<()>;
}

/// A destination usable as one of the two logger pipelines.
pub trait Sink: for<'a> MakeWriter<'a> + Flush + Clone + 'static {}

impl<T> Sink for T where T: for<'a> MakeWriter<'a> + Flush + Clone + 'static {}

/// Process standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl<'a> MakeWriter<'a> for StdoutSink {
    type Writer = io::Stdout;

    fn make_writer(&'a self) -> Self::Writer {
        io::stdout()
    }
}

impl Flush for StdoutSink {
    fn flush_sink(&self) -> io::Result<()> {
        io::stdout().flush()
    }
}

/// Process standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl<'a> MakeWriter<'a> for StderrSink {
    type Writer = io::Stderr;

    fn make_writer(&'a self) -> Self::Writer {
        io::stderr()
    }
}

impl Flush for StderrSink {
    fn flush_sink(&self) -> io::Result<()> {
        io::stderr().flush()
    }
}

/// In-memory destination for capturing output, mostly in tests.
///
/// Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        let buf = self.buf.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Written text split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.lock().unwrap_or_else(PoisonError::into_inner).is_empty()
    }

    pub fn clear(&self) {
        self.buf.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

/// Writer handed out by [`MemorySink`].
#[derive(Debug)]
pub struct MemoryWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Write for MemoryWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut buf = self.buf.lock().unwrap_or_else(PoisonError::into_inner);
        buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for MemorySink {
    type Writer = MemoryWriter;

    fn make_writer(&'a self) -> Self::Writer {
        MemoryWriter {
            buf: Arc::clone(&self.buf),
        }
    }
}

impl Flush for MemorySink {
    fn flush_sink(&self) -> io::Result<()> {
        Ok(())
    }
}
