//! Byte sinks.
//!
//! The engine's only side channel is a caller-supplied sink with a single
//! write operation; it never reads back. Each rendered field is written
//! immediately, with no buffering, retrying, or batching, so a failing
//! write aborts the rest of the call with everything before it delivered.

use crate::error::SinkError;

/// Destination for formatted bytes.
pub trait Sink {
    /// Write all of `bytes`, or fail.
    fn write(&mut self, bytes: &[u8]) -> Result<(), SinkError>;
}

/// In-memory sink; cannot fail.
impl Sink for Vec<u8> {
    fn write(&mut self, bytes: &[u8]) -> Result<(), SinkError> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

/// Adapter over any [`std::io::Write`], e.g. stdout or a file.
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
}

impl<W: std::io::Write> IoSink<W> {
    /// Wrap a writer.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Unwrap the writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: std::io::Write> Sink for IoSink<W> {
    fn write(&mut self, bytes: &[u8]) -> Result<(), SinkError> {
        self.inner.write_all(bytes).map_err(SinkError::from)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
