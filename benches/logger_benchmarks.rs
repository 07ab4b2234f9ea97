//! Criterion benchmarks for rust_leveled_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_leveled_logger::prelude::*;

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_sync_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("sync_logging");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::new(std::io::sink());
    logger.allow_debug();

    group.bench_function("no_fields", |b| {
        b.iter(|| {
            logger.info().log();
        });
    });

    group.bench_function("three_fields", |b| {
        b.iter(|| {
            logger
                .info()
                .field("user_id", black_box(12345))
                .field("latency_ms", black_box(42.5))
                .message(black_box("Request processed"))
                .log();
        });
    });

    let child = logger.with_field("component", "osquery").with_field("service", "agent");
    group.bench_function("context_logger", |b| {
        b.iter(|| {
            child.debug().field("n", black_box(1)).log();
        });
    });

    group.finish();
}

// ============================================================================
// Concurrent Logging Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    let logger = Logger::new(std::io::sink());

    group.bench_function("multi_thread_4", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let logger = logger.clone();
                    std::thread::spawn(move || {
                        logger.info().message(black_box("Concurrent message")).log();
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.bench_function("level_flip_contention", |b| {
        b.iter(|| {
            let flipper = logger.clone();
            let handle = std::thread::spawn(move || {
                for _ in 0..100 {
                    flipper.allow_debug();
                    flipper.allow_info();
                }
            });
            for _ in 0..100 {
                logger.info().log();
            }
            handle.join().unwrap();
        });
    });

    group.finish();
}

// ============================================================================
// Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::new(std::io::sink());
    logger.allow_warn();

    group.bench_function("below_threshold", |b| {
        b.iter(|| {
            logger.debug().message(black_box("This should be filtered")).log();
        });
    });

    group.bench_function("above_threshold", |b| {
        b.iter(|| {
            logger.error().message(black_box("This should be logged")).log();
        });
    });

    group.finish();
}

// ============================================================================
// Caller Extraction Benchmarks
// ============================================================================

fn bench_extract_caller(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_caller");
    group.throughput(Throughput::Elements(1));

    let good = "I1101 19:21:40.292618 84815872 distributed.cpp:133] Executing distributed query";
    let bad = "Just plain bad";

    group.bench_function("well_formed", |b| {
        b.iter(|| black_box(extract_caller(black_box(good))));
    });

    group.bench_function("malformed", |b| {
        b.iter(|| black_box(extract_caller(black_box(bad))));
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_sync_logging,
    bench_concurrent_logging,
    bench_level_filtering,
    bench_extract_caller
);

criterion_main!(benches);
