//! Benchmark tests for registry lookup and notification fan-out.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vincular_core::{BindableSource, BindingContext, Record, SharedSource, Value};

fn source_with_text() -> SharedSource {
    Record::new()
        .with("Text", Value::text("hello"))
        .into_source()
}

fn bench_registry_lookup_hit(c: &mut Criterion) {
    let ctx = BindingContext::new();
    let source = source_with_text();
    ctx.get_path(&source, "Text").expect("Text resolves");

    c.bench_function("registry_lookup_hit", |b| {
        b.iter(|| ctx.get_path(black_box(&source), "Text").expect("cached"))
    });
}

fn bench_registry_lookup_row(c: &mut Criterion) {
    let ctx = BindingContext::new();
    let source = source_with_text();
    let _ = ctx.get(&source);

    c.bench_function("registry_lookup_row", |b| {
        b.iter(|| ctx.get(black_box(&source)))
    });
}

fn bench_fan_out_16_subscribers(c: &mut Criterion) {
    let ctx = BindingContext::new();
    let source = source_with_text();
    let manager = ctx.get_path(&source, "Text").expect("Text resolves");
    for _ in 0..16 {
        manager.on_current_changed(|value| {
            black_box(value);
        });
    }

    c.bench_function("fan_out_16_subscribers", |b| {
        b.iter(|| source.set("Text", black_box(Value::text("changed"))))
    });
}

criterion_group!(
    benches,
    bench_registry_lookup_hit,
    bench_registry_lookup_row,
    bench_fan_out_16_subscribers,
);
criterion_main!(benches);
