//! Handling of output produced by the external host-monitoring agent

pub mod extract;
pub mod line_forwarder;

pub use extract::extract_caller;
pub use line_forwarder::{LineForwarder, MAX_PENDING};
