//! JSON appender for structured logging

use crate::core::{Appender, LogRecord, LoggerError, Result, TimestampFormat};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// JSON-lines appender over any writer
///
/// Each record is rendered into an internal buffer and handed to the writer
/// with a single `write_all`, so a record is never split by a serialization
/// failure. Whether concurrent writers outside this logger can interleave
/// with it depends on the writer itself.
pub struct JsonAppender<W: Write + Send> {
    writer: W,
    timestamp: Option<TimestampFormat>,
    buf: Vec<u8>,
}

impl<W: Write + Send> JsonAppender<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            timestamp: Some(TimestampFormat::default()),
            buf: Vec::with_capacity(256),
        }
    }

    /// Set the format of the `ts` field
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp = Some(format);
        self
    }

    /// Omit the `ts` field
    #[must_use]
    pub fn without_timestamp(mut self) -> Self {
        self.timestamp = None;
        self
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }
}

impl JsonAppender<File> {
    /// Append JSON lines to the file at `path`, creating it if needed.
    ///
    /// The file is unbuffered: each record reaches it as one write.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LoggerError::io_operation(format!("opening {}", path.display()), e))?;
        Ok(Self::new(file))
    }
}

impl<W: Write + Send> Appender for JsonAppender<W> {
    fn name(&self) -> &str {
        "json"
    }

    fn append(&mut self, record: &LogRecord) -> Result<()> {
        self.buf.clear();
        record.write_json(&mut self.buf, self.timestamp.as_ref())?;
        self.buf.push(b'\n');

        self.writer
            .write_all(&self.buf)
            .map_err(|e| LoggerError::io_operation("writing record", e))
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write + Send> Drop for JsonAppender<W> {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}
