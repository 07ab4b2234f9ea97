//! Caller identity attached to every record
//!
//! The caller is resolved from `std::panic::Location` rather than by
//! unwinding the stack. Every layer between application code and the final
//! emit is `#[track_caller]`, so the location handed to the record is always
//! the outermost call site that is not itself marked as a logging helper.

use serde::{Serialize, Serializer};
use std::fmt;
use std::panic::Location;
use std::path::Path;

/// `file:line` token identifying where a record came from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Caller(String);

impl Caller {
    /// Caller of the function this is invoked from.
    #[track_caller]
    #[must_use]
    pub fn here() -> Self {
        Self::from_location(Location::caller())
    }

    /// Render a source location as `basename:line`.
    #[must_use]
    pub fn from_location(location: &Location<'_>) -> Self {
        let file = location.file();
        let base = Path::new(file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(file);
        Caller(format!("{}:{}", base, location.line()))
    }

    /// Use a caller token obtained elsewhere, e.g. parsed from another
    /// process's output. An empty token is allowed.
    #[must_use]
    pub fn from_token(token: impl Into<String>) -> Self {
        Caller(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Caller {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
