//! Concurrency stress tests
//!
//! These tests verify:
//! - Level changes racing with logging threads do not crash or corrupt output
//! - Every record reaches the sink as one complete JSON line
//! - Counters add up under contention

use rust_leveled_logger::appenders::SharedBuffer;
use rust_leveled_logger::core::log_level::LogLevel;
use rust_leveled_logger::core::logger::Logger;
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_concurrent_logging() {
    // Change the level while several threads are logging.
    let logger = Logger::new(std::io::sink());
    let mut handles = vec![];

    for i in 0..10 {
        let logger = logger.clone();
        handles.push(thread::spawn(move || {
            for j in 0..10 {
                logger.info().field("i", i).field("j", j).log();
            }
        }));
    }

    let flipper = logger.clone();
    handles.push(thread::spawn(move || {
        for _ in 0..10 {
            flipper.allow_debug();
            flipper.allow_info();
        }
    }));

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    assert_eq!(logger.metrics().total_logged(), 100);
}

#[test]
fn test_records_never_interleave() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 250;

    let buffer = SharedBuffer::new();
    let logger = Logger::new(buffer.clone());
    logger.allow_debug();
    let barrier = Arc::new(Barrier::new(THREADS + 2));
    let mut handles = vec![];

    for t in 0..THREADS {
        let logger = logger.clone();
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            let padding = "x".repeat(64 * (t + 1));
            for n in 0..PER_THREAD {
                logger
                    .info()
                    .field("thread", t)
                    .field("n", n)
                    .field("padding", padding.as_str())
                    .log();
            }
        }));
    }

    // Level flips between levels that always admit info
    {
        let logger = logger.clone();
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            for _ in 0..1000 {
                logger.allow_debug();
                logger.allow_info();
            }
        }));
    }

    barrier.wait();
    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let lines = buffer.lines();
    assert_eq!(lines.len(), THREADS * PER_THREAD);
    for line in &lines {
        let record: serde_json::Value =
            serde_json::from_str(line).unwrap_or_else(|e| panic!("corrupt record {:?}: {}", line, e));
        assert_eq!(record["level"], "info");
    }
    assert_eq!(logger.dropped_count(), 0);
}

#[test]
fn test_threshold_races_are_memory_safe() {
    const WRITERS: usize = 10;
    const FLIPPERS: usize = 10;
    const PER_THREAD: usize = 200;

    let buffer = SharedBuffer::new();
    let logger = Logger::new(buffer.clone());
    let mut handles = vec![];

    for _ in 0..WRITERS {
        let logger = logger.clone();
        handles.push(thread::spawn(move || {
            for n in 0..PER_THREAD {
                logger.debug().field("n", n).log();
                logger.info().field("n", n).log();
            }
        }));
    }

    for f in 0..FLIPPERS {
        let logger = logger.clone();
        handles.push(thread::spawn(move || {
            for i in 0..100 {
                match (f + i) % 4 {
                    0 => logger.allow_debug(),
                    1 => logger.allow_info(),
                    2 => logger.allow_warn(),
                    _ => logger.allow_error(),
                }
            }
        }));
    }

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let metrics = logger.metrics();
    let lines = buffer.lines();
    assert_eq!(
        metrics.total_logged() + metrics.filtered_count(),
        (WRITERS * PER_THREAD * 2) as u64
    );
    assert_eq!(lines.len() as u64, metrics.total_logged());
    for line in lines {
        let record: serde_json::Value = serde_json::from_str(&line).expect("valid JSON record");
        let level: LogLevel = record["level"].as_str().unwrap().parse().unwrap();
        assert!(level <= LogLevel::Info);
    }
}

#[test]
fn test_rapid_burst_logging() {
    let buffer = SharedBuffer::new();
    let logger = Logger::builder()
        .writer(buffer.clone())
        .min_level(LogLevel::Debug)
        .without_timestamp()
        .build();

    for i in 0..10_000 {
        logger.debug().field("i", i).log();
    }

    assert_eq!(buffer.lines().len(), 10_000);
    assert_eq!(logger.metrics().drop_rate(), 0.0);
}
