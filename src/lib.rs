//! # Rust Leveled Logger
//!
//! A small structured logger that writes one JSON object per record and
//! whose severity threshold can be changed at runtime while other threads
//! are logging.
//!
//! ## Features
//!
//! - **Runtime levels**: `allow_debug()`, `allow_info()`, ... from any thread
//! - **Caller tracking**: every record carries the `file:line` of the
//!   application call site, through any number of `#[track_caller]` helpers
//! - **Context loggers**: child loggers with persistent fields
//! - **Agent output forwarding**: glog-style lines from an external agent
//!   become records with the agent's own `file:line` as their caller
//!
//! ```
//! use rust_leveled_logger::prelude::*;
//!
//! let buffer = SharedBuffer::new();
//! let logger = Logger::new(buffer.clone());
//!
//! logger.info().field("foo", "bar").log();
//!
//! let record = &buffer.json_lines()[0];
//! assert!(record["caller"].as_str().unwrap().contains(".rs:"));
//! ```

pub mod appenders;
pub mod core;
pub mod forwarding;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{JsonAppender, SharedBuffer};
    pub use crate::core::{
        Appender, Caller, FieldValue, LogContext, LogLevel, LogRecord, Logger, LoggerBuilder,
        LoggerError, LoggerMetrics, RecordBuilder, Result, TimestampFormat,
    };
    pub use crate::forwarding::{extract_caller, LineForwarder};
}

pub use crate::appenders::{JsonAppender, SharedBuffer};
pub use crate::core::{
    Appender, Caller, FieldValue, LogContext, LogLevel, LogRecord, Logger, LoggerBuilder,
    LoggerError, LoggerMetrics, RecordBuilder, Result, TimestampFormat, DEFAULT_MIN_LEVEL,
};
pub use crate::forwarding::{extract_caller, LineForwarder};
