//! Appender trait for log output destinations

use super::{error::Result, log_record::LogRecord};

/// A sink for rendered records.
///
/// Implementations must write each record as one unit: either the whole
/// record reaches the underlying writer or none of it does. The logger
/// serializes calls to a single appender, so an appender never sees two
/// records concurrently.
pub trait Appender: Send {
    fn append(&mut self, record: &LogRecord) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
