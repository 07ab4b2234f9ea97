//! Logging macros for key-value records.
//!
//! Each macro expands to a builder chain ending in `.log()`, so the caller
//! recorded is the line the macro is invoked on.
//!
//! # Examples
//!
//! ```
//! use rust_leveled_logger::{info, Logger, SharedBuffer};
//!
//! let buffer = SharedBuffer::new();
//! let logger = Logger::new(buffer.clone());
//!
//! let port = 8080;
//! info!(logger, "msg" => "server started", "port" => port);
//!
//! assert_eq!(buffer.json_lines()[0]["port"], 8080);
//! ```

/// Log key-value pairs at a given level.
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// # let logger = Logger::new(std::io::sink());
/// use rust_leveled_logger::log;
/// log!(logger, LogLevel::Warn, "disk_free_pct" => 4);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $logger.at($level)$(.field($key, $value))*.log()
    };
}

/// Log key-value pairs at debug level.
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// # let logger = Logger::new(std::io::sink());
/// use rust_leveled_logger::debug;
/// debug!(logger, "state" => "initialized");
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Debug $(, $key => $value)*)
    };
}

/// Log key-value pairs at info level.
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Info $(, $key => $value)*)
    };
}

/// Log key-value pairs at warn level.
#[macro_export]
macro_rules! warn {
    ($logger:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Warn $(, $key => $value)*)
    };
}

/// Log key-value pairs at error level.
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// # let logger = Logger::new(std::io::sink());
/// use rust_leveled_logger::error;
/// error!(logger, "msg" => "connect failed", "retry" => 3);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Error $(, $key => $value)*)
    };
}

#[cfg(test)]
mod tests {
    use crate::appenders::SharedBuffer;
    use crate::core::{LogLevel, Logger};

    #[test]
    fn test_log_macro() {
        let buffer = SharedBuffer::new();
        let logger = Logger::new(buffer.clone());

        log!(logger, LogLevel::Info, "a" => 1, "b" => "two",);
        log!(logger, LogLevel::Warn);

        let records = buffer.json_lines();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["b"], "two");
        assert_eq!(records[1]["level"], "warn");
    }

    #[test]
    fn test_level_macros() {
        let buffer = SharedBuffer::new();
        let logger = Logger::new(buffer.clone());

        debug!(logger, "hidden" => true);
        logger.allow_debug();
        debug!(logger, "count" => 5);
        info!(logger, "items" => 100);
        warn!(logger, "retry" => 1);
        error!(logger, "code" => 500);

        let records = buffer.json_lines();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0]["count"], 5);
    }

    #[test]
    fn test_macro_caller_is_invocation_line() {
        let buffer = SharedBuffer::new();
        let logger = Logger::new(buffer.clone());

        let line = line!() + 1;
        info!(logger, "foo" => "bar");

        assert_eq!(buffer.json_lines()[0]["caller"], format!("macros.rs:{}", line));
    }
}
