//! Formatting benchmarks.
//!
//! Covers the three render paths: literal passthrough, numeric conversion
//! under flags, and string width/precision handling.

use criterion::{Criterion, criterion_group, criterion_main};
use frankenprintf_core::{Arg, sprintf};

fn bench_literal_passthrough(c: &mut Criterion) {
    c.bench_function("literal_passthrough", |b| {
        b.iter(|| {
            sprintf(
                criterion::black_box(b"the quick brown fox jumps over the lazy dog"),
                &[],
            )
        });
    });
}

fn bench_numeric_flags(c: &mut Criterion) {
    let args = [
        Arg::Int(-123_456),
        Arg::Uint(0xbeef),
        Arg::Ptr(0xdead_beef),
    ];
    c.bench_function("numeric_flags", |b| {
        b.iter(|| sprintf(criterion::black_box(b"%+08d %#x %p"), &args));
    });
}

fn bench_string_width(c: &mut Criterion) {
    let args = [Arg::Str(Some(b"formatted output"))];
    c.bench_function("string_width", |b| {
        b.iter(|| sprintf(criterion::black_box(b"%-20.8s|"), &args));
    });
}

criterion_group!(
    benches,
    bench_literal_passthrough,
    bench_numeric_flags,
    bench_string_width
);
criterion_main!(benches);
