//! Core logger types and traits

pub mod appender;
pub mod caller;
pub mod error;
pub mod log_context;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod record_builder;
pub mod timestamp;

pub use appender::Appender;
pub use caller::Caller;
pub use error::{LoggerError, Result};
pub use log_context::{FieldValue, LogContext};
pub use log_level::LogLevel;
pub use log_record::LogRecord;
pub use logger::{Logger, LoggerBuilder, DEFAULT_MIN_LEVEL};
pub use metrics::LoggerMetrics;
pub use record_builder::RecordBuilder;
pub use timestamp::TimestampFormat;
