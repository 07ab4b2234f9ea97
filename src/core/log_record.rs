//! A single structured record on its way to the sink

use super::caller::Caller;
use super::log_context::LogContext;
use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use chrono::{DateTime, Utc};
use serde::ser::{SerializeMap, Serializer};

/// Keys the logger writes itself. Fields with these names are skipped.
pub const RESERVED_KEYS: [&str; 3] = ["caller", "level", "ts"];

#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: LogLevel,
    pub caller: Caller,
    pub timestamp: DateTime<Utc>,
    /// Persistent fields followed by call fields
    pub fields: LogContext,
}

impl LogRecord {
    pub fn new(level: LogLevel, caller: Caller, fields: LogContext) -> Self {
        Self {
            level,
            caller,
            timestamp: Utc::now(),
            fields,
        }
    }

    /// Serialize as one JSON object: `caller`, fields, `level`, then `ts`
    /// when a timestamp format is given.
    pub fn to_json(&self, timestamp: Option<&TimestampFormat>) -> serde_json::Result<String> {
        let mut buf = Vec::with_capacity(128);
        self.write_json(&mut buf, timestamp)?;
        // serde_json only emits UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Serialize into `buf` without a trailing newline.
    pub fn write_json(
        &self,
        buf: &mut Vec<u8>,
        timestamp: Option<&TimestampFormat>,
    ) -> serde_json::Result<()> {
        let mut ser = serde_json::Serializer::new(buf);
        let mut map = ser.serialize_map(None)?;
        map.serialize_entry("caller", &self.caller)?;
        for (key, value) in self.fields.iter() {
            if RESERVED_KEYS.contains(&key) {
                continue;
            }
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry("level", &self.level)?;
        if let Some(format) = timestamp {
            map.serialize_entry("ts", &format.to_json_value(&self.timestamp))?;
        }
        map.end()
    }
}
