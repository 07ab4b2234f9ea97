//! Leveled record builder
//!
//! `logger.info()` picks a level, `.field(..)` collects fields, and `.log()`
//! emits. The caller recorded is the code that calls `.log()`, or the first
//! caller above it that is not `#[track_caller]`.

use super::caller::Caller;
use super::log_context::{FieldValue, LogContext};
use super::log_level::LogLevel;
use super::logger::Logger;
use std::panic::Location;

/// Builder for a single record at a fixed level
///
/// # Example
///
/// ```
/// use rust_leveled_logger::{Logger, SharedBuffer};
///
/// let buffer = SharedBuffer::new();
/// let logger = Logger::new(buffer.clone());
///
/// logger.info()
///     .message("Request processed")
///     .field("user_id", 12345)
///     .field("latency_ms", 42.5)
///     .log();
///
/// let record = &buffer.json_lines()[0];
/// assert_eq!(record["msg"], "Request processed");
/// assert_eq!(record["level"], "info");
/// ```
///
/// Helpers that wrap logging keep the reported caller pointing at their own
/// callers by carrying `#[track_caller]`:
///
/// ```
/// use rust_leveled_logger::Logger;
///
/// #[track_caller]
/// fn audit(logger: &Logger, action: &str) {
///     logger.info().field("action", action).log();
/// }
/// # audit(&Logger::new(std::io::sink()), "login");
/// ```
#[must_use = "a record is only written when `log` is called"]
pub struct RecordBuilder<'a> {
    logger: &'a Logger,
    level: LogLevel,
    context: LogContext,
    caller: Option<Caller>,
}

impl<'a> RecordBuilder<'a> {
    pub fn new(logger: &'a Logger, level: LogLevel) -> Self {
        Self {
            logger,
            level,
            context: LogContext::new(),
            caller: None,
        }
    }

    /// Add a structured field to the record
    pub fn field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.context.add_field(key, value);
        self
    }

    /// Add multiple fields from a LogContext
    pub fn fields(mut self, context: LogContext) -> Self {
        self.context.extend(&context);
        self
    }

    /// Shorthand for `.field("msg", msg)`
    pub fn message(self, msg: impl Into<String>) -> Self {
        self.field("msg", msg.into())
    }

    /// Report `caller` instead of the call site
    pub fn caller(mut self, caller: Caller) -> Self {
        self.caller = Some(caller);
        self
    }

    /// Emit the record, attributed to the caller of this method unless a
    /// caller was set explicitly.
    #[track_caller]
    pub fn log(self) {
        let location = Location::caller();
        self.log_at(location);
    }

    /// Emit the record, attributed to `location` unless a caller was set
    /// explicitly.
    pub fn log_at(self, location: &Location<'_>) {
        let caller = match self.caller {
            Some(caller) => caller,
            None => Caller::from_location(location),
        };
        self.logger.emit(self.level, caller, self.context);
    }
}

impl Logger {
    /// Start a record at `level`
    pub fn at(&self, level: LogLevel) -> RecordBuilder<'_> {
        RecordBuilder::new(self, level)
    }

    pub fn debug(&self) -> RecordBuilder<'_> {
        RecordBuilder::new(self, LogLevel::Debug)
    }

    pub fn info(&self) -> RecordBuilder<'_> {
        RecordBuilder::new(self, LogLevel::Info)
    }

    pub fn warn(&self) -> RecordBuilder<'_> {
        RecordBuilder::new(self, LogLevel::Warn)
    }

    pub fn error(&self) -> RecordBuilder<'_> {
        RecordBuilder::new(self, LogLevel::Error)
    }
}
