//! Criterion benchmarks for rust_logger_facade

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use rust_logger_facade::prelude::*;
use rust_logger_facade::{format_message, BackendKind, Record};
use std::sync::Arc;

fn details() -> Vec<Detail> {
    vec![
        Detail::string("user", "alice"),
        Detail::int("attempt", 3),
        Detail::string("path", "/var/lib/data"),
    ]
}

// ============================================================================
// Backend Logging Benchmarks
// ============================================================================

fn bench_backend_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("backend_logging");
    group.throughput(Throughput::Elements(1));

    let memory = MemorySink::new();
    let backends: Vec<(&str, Arc<dyn Backend>)> = vec![
        ("icon", Arc::new(IconBackend::with_sink(Sink::from(memory.clone())))),
        ("pretty", Arc::new(PrettyBackend::with_sink(Sink::from(memory.clone())))),
        (
            "structured",
            Arc::new(StructuredBackend::with_sink(Sink::from(memory.clone()))),
        ),
        ("none", Arc::new(NoneBackend::new())),
    ];
    let details = details();

    for (name, backend) in &backends {
        group.bench_function(*name, |b| {
            // Clearing between batches keeps the capture buffer bounded
            b.iter_batched(
                || memory.clear(),
                |_| backend.info(black_box("Request handled"), black_box(&details)),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

// ============================================================================
// Concurrent Logging Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    let memory = MemorySink::new();
    let logger: Arc<dyn Backend> = Arc::new(IconBackend::with_sink(Sink::from(memory.clone())));

    group.bench_function("multi_thread_4", |b| {
        b.iter_batched(
            || memory.clear(),
            |_| {
                let handles: Vec<_> = (0..4)
                    .map(|_| {
                        let logger = Arc::clone(&logger);
                        std::thread::spawn(move || {
                            logger.info(black_box("Concurrent message"), &[]);
                        })
                    })
                    .collect();

                for handle in handles {
                    handle.join().unwrap();
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ============================================================================
// Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let memory = MemorySink::new();
    let console = IconBackend::with_sink(Sink::from(memory.clone())).with_level(Level::Warning);
    let structured = StructuredBackend::with_sink(Sink::from(memory.clone()));
    structured.set_level("warn").unwrap();

    group.bench_function("console_below_threshold", |b| {
        b.iter(|| console.debug(black_box("This should be filtered"), &[]));
    });

    group.bench_function("structured_below_threshold", |b| {
        b.iter(|| structured.debug(black_box("This should be filtered"), &[]));
    });

    group.bench_function("level_parse", |b| {
        b.iter(|| Level::parse(black_box("WARNING")));
    });

    group.finish();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    group.throughput(Throughput::Elements(1));

    let details = details();

    group.bench_function("format_message", |b| {
        b.iter(|| format_message(black_box("Request handled"), black_box(&details)));
    });

    group.bench_function("record_to_json", |b| {
        let ctx = TracingContext::new_root();
        b.iter(|| {
            let record = Record::new("info", black_box("Request handled"), &details)
                .with_tracing(Some(&ctx));
            black_box(record.to_json().unwrap())
        });
    });

    group.finish();
}

// ============================================================================
// Selection Benchmarks
// ============================================================================

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");

    group.bench_function("resolve_alias", |b| {
        b.iter(|| BackendKind::resolve(black_box("Emoji")));
    });

    group.bench_function("build_structured", |b| {
        b.iter(|| black_box(BackendKind::Structured.build()));
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_backend_logging,
    bench_concurrent_logging,
    bench_level_filtering,
    bench_formatting,
    bench_selection
);

criterion_main!(benches);
