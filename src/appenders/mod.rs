//! Appender implementations

pub mod json;
pub mod memory;

pub use json::JsonAppender;
pub use memory::SharedBuffer;

pub use crate::core::Appender;
