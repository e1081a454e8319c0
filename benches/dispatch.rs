//! Benchmarks for failhook.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use failhook::{AssertInfo, CollectingHandler, CountingHandler, DebugHandler, HandlerRegistry};
use std::sync::Arc;

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    let info = AssertInfo::new("vector.h", 42, "i < size()", "index out of range");
    group.bench_function("render_short", |b| b.iter(|| black_box(&info).render()));

    let long_message = "x".repeat(4096);
    let long = AssertInfo::new(
        "src/collections/btree/node.rs",
        1234,
        "len <= CAPACITY",
        &long_message,
    );
    group.bench_function("render_4kb_message", |b| b.iter(|| black_box(&long).render()));

    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    let info = AssertInfo::new("vector.h", 42, "i < size()", "index out of range");

    fn noop(_info: &AssertInfo<'_>) {}

    let registry = HandlerRegistry::new();
    registry.set_debug_function(noop);
    group.bench_function("registry_function", |b| {
        b.iter(|| registry.report(black_box(&info)))
    });

    let counting = Arc::new(CountingHandler::new(noop as failhook::DebugFunction));
    registry.set_shared_handler(counting.clone());
    group.bench_function("registry_counting_handler", |b| {
        b.iter(|| registry.report(black_box(&info)))
    });

    let collector = CollectingHandler::new();
    group.bench_function("direct_collect_and_drain", |b| {
        b.iter(|| {
            for _ in 0..100 {
                collector.handle(black_box(&info));
            }
            black_box(collector.drain());
        })
    });

    group.finish();
}

criterion_group!(benches, bench_render, bench_dispatch);
criterion_main!(benches);
