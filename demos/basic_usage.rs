//! Basic logger usage example
//!
//! Demonstrates leveled JSON logging to stderr, runtime level changes and
//! forwarding of an external agent's output.
//!
//! Run with: cargo run --example basic_usage

use rust_leveled_logger::prelude::*;
use std::io::Write;

#[track_caller]
fn report_progress(logger: &Logger, step: u32) {
    logger.debug().field("step", step).log();
}

fn main() -> Result<()> {
    let logger = Logger::builder()
        .writer(std::io::stderr())
        .field("service", "demo")
        .build();

    // 1. Default threshold is info; debug calls are dropped
    logger.info().message("starting").log();
    report_progress(&logger, 1);

    // 2. Raise verbosity at runtime
    logger.allow_debug();
    report_progress(&logger, 2);

    // 3. Agent output becomes records carrying the agent's own caller
    let mut agent_stderr = LineForwarder::new(logger.with_field("pid", 4242), "osquery", "stderr");
    writeln!(
        agent_stderr,
        "I1101 19:21:40.292618 84815872 distributed.cpp:133] Executing distributed query"
    )?;
    agent_stderr.flush()?;

    logger.allow_info();
    logger.info().message("done").log();
    logger.flush()
}
