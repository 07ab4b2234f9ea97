//! Forwarding of another process's output into the logger

use super::extract::extract_caller;
use crate::core::{Caller, LogContext, LogLevel, Logger};
use std::io::{self, Write};

/// Longest unterminated tail held before it is forwarded on its own
pub const MAX_PENDING: usize = 64 * 1024;

/// `io::Write` adapter that turns each line written to it into a record.
///
/// Intended to sit on the stdout or stderr pipe of the external agent.
/// Every complete, non-blank line becomes one record with fields
/// `component`, `stream` and `msg`; its `caller` is the `file:line` token
/// found in the line, or empty when the line carries none. Bytes after the
/// last newline are held until more data arrives, `flush` is called, or the
/// forwarder is dropped. A tail that reaches [`MAX_PENDING`] bytes is
/// forwarded as a record of its own.
///
/// # Example
///
/// ```
/// use rust_leveled_logger::{LineForwarder, Logger, SharedBuffer};
/// use std::io::Write;
///
/// let buffer = SharedBuffer::new();
/// let logger = Logger::new(buffer.clone());
/// logger.allow_debug();
///
/// let mut stderr = LineForwarder::new(logger, "osquery", "stderr");
/// stderr.write_all(b"I1101 19:21:40.292618 84815872 distributed.cpp:133] started\n").unwrap();
///
/// let record = &buffer.json_lines()[0];
/// assert_eq!(record["caller"], "distributed.cpp:133");
/// assert_eq!(record["stream"], "stderr");
/// ```
pub struct LineForwarder {
    logger: Logger,
    component: String,
    stream: String,
    level: LogLevel,
    pending: Vec<u8>,
}

impl LineForwarder {
    /// Forward lines at debug level
    pub fn new(logger: Logger, component: impl Into<String>, stream: impl Into<String>) -> Self {
        Self {
            logger,
            component: component.into(),
            stream: stream.into(),
            level: LogLevel::Debug,
            pending: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    fn forward_line(&self, raw: &[u8]) {
        let text = String::from_utf8_lossy(raw);
        let line = text.trim();
        if line.is_empty() {
            return;
        }

        let caller = Caller::from_token(extract_caller(line).unwrap_or_default());
        let fields = LogContext::new()
            .with_field("component", self.component.as_str())
            .with_field("stream", self.stream.as_str())
            .with_field("msg", line);

        self.logger.emit(self.level, caller, fields);
    }

    fn forward_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let rest = std::mem::take(&mut self.pending);
        self.forward_line(&rest);
    }

    /// Keep an unterminated tail, forwarding it in `MAX_PENDING` pieces
    /// once it grows that large. `pending` stays below `MAX_PENDING`.
    fn hold(&mut self, mut bytes: &[u8]) {
        while self.pending.len() + bytes.len() >= MAX_PENDING {
            let (head, tail) = bytes.split_at(MAX_PENDING - self.pending.len());
            self.pending.extend_from_slice(head);
            self.forward_pending();
            bytes = tail;
        }
        self.pending.extend_from_slice(bytes);
    }
}

impl Write for LineForwarder {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut rest = buf;
        while let Some(pos) = rest.iter().position(|&b| b == b'\n') {
            let (line, tail) = rest.split_at(pos);
            if self.pending.is_empty() {
                self.forward_line(line);
            } else {
                self.pending.extend_from_slice(line);
                self.forward_pending();
            }
            rest = &tail[1..];
        }
        self.hold(rest);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.forward_pending();
        self.logger
            .flush()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    }
}

impl Drop for LineForwarder {
    fn drop(&mut self) {
        self.forward_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::SharedBuffer;

    fn forwarder() -> (LineForwarder, SharedBuffer) {
        let buffer = SharedBuffer::new();
        let logger = Logger::builder()
            .writer(buffer.clone())
            .min_level(LogLevel::Debug)
            .without_timestamp()
            .build();
        (LineForwarder::new(logger, "osquery", "stderr"), buffer)
    }

    #[test]
    fn test_forwards_each_line() {
        let (mut fwd, buffer) = forwarder();

        fwd.write_all(
            b"E1201 08:21:54.254618 84815872 foobar.m:47] Penguin\n\
              E1201 08:21:54.254618 84815872 unknown] Penguin\n\n",
        )
        .unwrap();

        let records = buffer.json_lines();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["caller"], "foobar.m:47");
        assert_eq!(records[0]["component"], "osquery");
        assert_eq!(records[0]["level"], "debug");
        assert_eq!(records[1]["caller"], "");
        assert_eq!(
            records[1]["msg"],
            "E1201 08:21:54.254618 84815872 unknown] Penguin"
        );
    }

    #[test]
    fn test_partial_lines_are_joined() {
        let (mut fwd, buffer) = forwarder();

        fwd.write_all(b"I1101 19:21:40.292618 84815872 dist").unwrap();
        assert!(buffer.is_empty());
        fwd.write_all(b"ributed.cpp:133] Executing\nJust plain").unwrap();
        assert_eq!(buffer.json_lines().len(), 1);

        fwd.flush().unwrap();
        let records = buffer.json_lines();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["caller"], "distributed.cpp:133");
        assert_eq!(records[1]["msg"], "Just plain");
    }

    #[test]
    fn test_threshold_applies() {
        let (fwd, buffer) = forwarder();
        let mut fwd = fwd.with_level(LogLevel::Debug);
        fwd.logger.allow_info();

        fwd.write_all(b"I0101 00:00:00.000000 1 main.cc:9] quiet\n").unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_unterminated_output_is_bounded() {
        let (mut fwd, buffer) = forwarder();
        let chunk = vec![b'a'; 1024];

        for _ in 0..1000 {
            fwd.write_all(&chunk).unwrap();
            assert!(fwd.pending.len() < MAX_PENDING);
        }

        let records = buffer.json_lines();
        assert_eq!(records.len(), 1000 * 1024 / MAX_PENDING);
        for record in &records {
            assert_eq!(record["msg"].as_str().unwrap().len(), MAX_PENDING);
        }

        fwd.write_all(b"\n").unwrap();
        let records = buffer.json_lines();
        assert_eq!(records.len(), 1000 * 1024 / MAX_PENDING + 1);
        assert_eq!(
            records.last().unwrap()["msg"].as_str().unwrap().len(),
            1000 * 1024 % MAX_PENDING
        );
    }

    #[test]
    fn test_drop_forwards_remainder() {
        let (mut fwd, buffer) = forwarder();
        fwd.write_all(b"no newline at end").unwrap();
        drop(fwd);
        assert_eq!(buffer.json_lines()[0]["msg"], "no newline at end");
    }
}
