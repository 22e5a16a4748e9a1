//! Text-line sink glue for rank output.
//!
//! The downstream contract is one formatted line per record plus a line
//! terminator, written to a named destination. Failures propagate as-is;
//! a partially written destination is left untouched (no atomic commit).

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Sink errors
#[derive(Error, Debug)]
pub enum SinkError {
    /// I/O error from the destination resource
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type SinkResult<T> = Result<T, SinkError>;

/// Buffered line-oriented sink over any writable destination.
pub struct TextLineSink<W: Write> {
    writer: BufWriter<W>,
}

impl TextLineSink<File> {
    /// Open a named file destination, truncating existing content.
    pub fn create<P: AsRef<Path>>(path: P) -> SinkResult<Self> {
        Ok(Self::new(File::create(path)?))
    }
}

impl<W: Write> TextLineSink<W> {
    /// Wrap a destination in a buffered line sink.
    pub fn new(inner: W) -> Self {
        Self {
            writer: BufWriter::new(inner),
        }
    }

    /// Write every record as one formatted line, returning the count.
    ///
    /// The formatting function renders a record without the terminator;
    /// the sink appends `\n`.
    pub fn write_records<I, F>(&mut self, records: I, mut format: F) -> SinkResult<u64>
    where
        I: IntoIterator,
        F: FnMut(&I::Item) -> String,
    {
        let mut written = 0u64;
        for record in records {
            self.writer.write_all(format(&record).as_bytes())?;
            self.writer.write_all(b"\n")?;
            written += 1;
        }
        debug!("wrote {} records", written);
        Ok(written)
    }

    /// Flush buffered lines and hand back the destination.
    pub fn finish(self) -> SinkResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| SinkError::Io(e.into_error()))
    }
}
