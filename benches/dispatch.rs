use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use feature_gate::{FeatureGate, MemoryBackend, RecordingLogger};
use tracing::Level;

fn work(n: u64) -> u64 {
    n.wrapping_mul(31).wrapping_add(7)
}

fn bench_dispatch(c: &mut Criterion) {
    let backend = MemoryBackend::with_features([("on", true), ("off", false)]);
    // Only errors are recorded so the buffer does not grow while iterating.
    let logger = RecordingLogger::new(Level::ERROR);
    let gate = FeatureGate::new(Arc::new(backend), Arc::new(logger));

    let active = gate.feature("on").expect("feature exists").wrap(work);
    let fallback = gate
        .feature_with_default("off", |n: u64| n)
        .expect("feature exists")
        .wrap(work);

    let mut group = c.benchmark_group("dispatch");

    group.bench_function("direct", |b| b.iter(|| work(black_box(42))));
    group.bench_function("gated_active", |b| b.iter(|| active.call(black_box(42))));
    group.bench_function("gated_default", |b| b.iter(|| fallback.call(black_box(42))));
    group.bench_function("is_active", |b| b.iter(|| gate.is_active(black_box("on"))));

    group.finish();
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
