//! Main logger implementation

use super::{
    appender::Appender,
    caller::Caller,
    error::{LoggerError, Result},
    log_context::{FieldValue, LogContext},
    log_level::LogLevel,
    log_record::LogRecord,
    metrics::LoggerMetrics,
    timestamp::TimestampFormat,
};
use crate::appenders::JsonAppender;
use parking_lot::{Mutex, RwLock};
use std::io::Write;
use std::panic::Location;
use std::sync::Arc;

/// Threshold a logger starts with unless configured otherwise
pub const DEFAULT_MIN_LEVEL: LogLevel = LogLevel::Info;

/// Structured JSON logger with a runtime-adjustable severity threshold.
///
/// Cloning is cheap: clones share the sink, the threshold and the metrics,
/// so a level change made through any clone is seen by all of them.
///
/// # Example
///
/// ```
/// use rust_leveled_logger::{Logger, SharedBuffer};
///
/// let buffer = SharedBuffer::new();
/// let logger = Logger::new(buffer.clone());
///
/// logger.debug().field("hidden", true).log();
/// logger.allow_debug();
/// logger.debug().field("shown", true).log();
///
/// assert_eq!(buffer.lines().len(), 1);
/// ```
#[derive(Clone)]
pub struct Logger {
    min_level: Arc<RwLock<LogLevel>>,
    sink: Arc<Mutex<Box<dyn Appender>>>,
    metrics: Arc<LoggerMetrics>,
    /// Fields added to every record from this logger
    context: Arc<LogContext>,
}

impl Logger {
    /// Logger writing JSON lines to `writer` with the default threshold.
    ///
    /// The writer is used for the lifetime of the logger and its clones.
    #[must_use]
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self::with_appender(JsonAppender::new(writer))
    }

    #[must_use]
    pub fn with_appender<A: Appender + 'static>(appender: A) -> Self {
        Self {
            min_level: Arc::new(RwLock::new(DEFAULT_MIN_LEVEL)),
            sink: Arc::new(Mutex::new(Box::new(appender))),
            metrics: Arc::new(LoggerMetrics::new()),
            context: Arc::new(LogContext::new()),
        }
    }

    /// Child logger that adds `key=value` to every record.
    ///
    /// The child shares the sink, threshold and metrics with `self`.
    #[must_use]
    pub fn with_field<K, V>(&self, key: K, value: V) -> Logger
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let mut context = (*self.context).clone();
        context.add_field(key, value);
        Logger {
            min_level: Arc::clone(&self.min_level),
            sink: Arc::clone(&self.sink),
            metrics: Arc::clone(&self.metrics),
            context: Arc::new(context),
        }
    }

    /// Persistent fields of this logger
    pub fn context(&self) -> &LogContext {
        &self.context
    }

    pub fn set_min_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    pub fn min_level(&self) -> LogLevel {
        *self.min_level.read()
    }

    /// Whether a record at `level` would currently be written
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= *self.min_level.read()
    }

    /// Emit debug records and above
    pub fn allow_debug(&self) {
        self.set_min_level(LogLevel::Debug);
    }

    /// Emit info records and above
    pub fn allow_info(&self) {
        self.set_min_level(LogLevel::Info);
    }

    /// Emit warn records and above
    pub fn allow_warn(&self) {
        self.set_min_level(LogLevel::Warn);
    }

    /// Emit error records only
    pub fn allow_error(&self) {
        self.set_min_level(LogLevel::Error);
    }

    /// Log `fields` at `level`, attributed to the caller of this method.
    #[track_caller]
    pub fn log(&self, level: LogLevel, fields: LogContext) {
        self.emit(level, Caller::from_location(Location::caller()), fields);
    }

    /// Threshold check, record assembly and the write to the sink.
    ///
    /// Sink failures are counted and reported on stderr, never returned.
    pub(crate) fn emit(&self, level: LogLevel, caller: Caller, fields: LogContext) {
        if !self.enabled(level) {
            self.metrics.record_filtered();
            return;
        }

        let record = LogRecord::new(level, caller, fields.layered_over(&self.context));

        let result = {
            let mut sink = self.sink.lock();
            Self::append_isolated(&mut **sink, &record)
        };

        match result {
            Ok(()) => {
                self.metrics.record_logged();
            }
            Err(e) => self.report_failure(&e),
        }
    }

    /// Run the appender, converting a panic into an error so one bad
    /// record cannot take the caller's thread down.
    fn append_isolated(appender: &mut dyn Appender, record: &LogRecord) -> Result<()> {
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            appender.append(record)
        }));

        match outcome {
            Ok(result) => result,
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                Err(LoggerError::appender_panic(appender.name(), panic_msg))
            }
        }
    }

    /// Count a lost record and alert on the first loss and every 1000th.
    fn report_failure(&self, error: &LoggerError) {
        let dropped_count = self.metrics.record_dropped();
        if dropped_count == 0 || (dropped_count + 1) % 1000 == 0 {
            eprintln!(
                "[LOGGER ERROR] Sink failed, {} records dropped so far: {}",
                dropped_count + 1,
                error
            );
        }
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.lock().flush()
    }

    /// Get the number of records lost to sink failures
    pub fn dropped_count(&self) -> u64 {
        self.metrics.dropped_count()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.min_level())
            .field("sink", &self.sink.lock().name())
            .field("context", &self.context)
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_leveled_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .writer(std::io::stderr())
///     .timestamp_format(TimestampFormat::UnixMillis)
///     .field("component", "agent")
///     .build();
///
/// assert!(logger.enabled(LogLevel::Debug));
/// ```
pub struct LoggerBuilder {
    min_level: LogLevel,
    appender: Option<Box<dyn Appender>>,
    writer: Option<Box<dyn Write + Send>>,
    timestamp: Option<TimestampFormat>,
    context: LogContext,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: DEFAULT_MIN_LEVEL,
            appender: None,
            writer: None,
            timestamp: Some(TimestampFormat::default()),
            context: LogContext::new(),
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Write JSON lines to `writer`. Replaces any earlier sink.
    #[must_use = "builder methods return a new value"]
    pub fn writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.writer = Some(Box::new(writer));
        self.appender = None;
        self
    }

    /// Use a custom appender. Replaces any earlier sink; timestamp
    /// settings on the builder do not apply to it.
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appender = Some(Box::new(appender));
        self.writer = None;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp = Some(format);
        self
    }

    /// Omit the `ts` field
    #[must_use = "builder methods return a new value"]
    pub fn without_timestamp(mut self) -> Self {
        self.timestamp = None;
        self
    }

    /// Add a persistent field to every record
    #[must_use = "builder methods return a new value"]
    pub fn field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.context.add_field(key, value);
        self
    }

    /// Build the Logger. Without a sink, records go to `io::sink()`.
    pub fn build(self) -> Logger {
        let appender: Box<dyn Appender> = match (self.appender, self.writer) {
            (Some(appender), _) => appender,
            (None, writer) => {
                let writer = writer.unwrap_or_else(|| Box::new(std::io::sink()));
                let json = JsonAppender::new(writer);
                Box::new(match self.timestamp {
                    Some(format) => json.with_timestamp_format(format),
                    None => json.without_timestamp(),
                })
            }
        };

        Logger {
            min_level: Arc::new(RwLock::new(self.min_level)),
            sink: Arc::new(Mutex::new(appender)),
            metrics: Arc::new(LoggerMetrics::new()),
            context: Arc::new(self.context),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
