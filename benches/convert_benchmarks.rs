//! Benchmarks for the value conversion layer.
//!
//! ```bash
//! cargo bench --bench convert_benchmarks
//! ```

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use hello_addon::read::{as_i32, as_str_utf8, as_str_utf16, as_u64, as_u64_bigint};
use hello_addon::write::{from_str_utf8, from_u64_bigint};
use hello_addon::{BigInt, Value};
use std::hint::black_box;

fn bench_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("numbers");

    let number = Value::Number(-123_456.75);
    group.bench_function("as_i32", |b| b.iter(|| as_i32(black_box(&number))));
    group.bench_function("as_u64_number", |b| b.iter(|| as_u64(black_box(&number))));

    let big = Value::BigInt(BigInt::from_u64(u64::MAX - 7));
    group.bench_function("as_u64_bigint", |b| b.iter(|| as_u64_bigint(black_box(&big))));
    group.bench_function("from_u64_bigint", |b| {
        b.iter(|| from_u64_bigint(black_box(u64::MAX - 7)))
    });

    let wide = Value::BigInt(BigInt::from_words(false, vec![u64::MAX; 4]));
    group.bench_function("as_u64_bigint_lossy", |b| {
        b.iter(|| as_u64_bigint(black_box(&wide)).is_err())
    });

    group.finish();
}

fn bench_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("strings");

    for (label, text) in [
        ("ascii_64", "a".repeat(64)),
        ("ascii_4k", "a".repeat(4096)),
        ("mixed_4k", "h\u{e9}llo \u{1F30D} ".repeat(4096 / 12)),
    ] {
        group.throughput(Throughput::Bytes(text.len() as u64));
        let value = from_str_utf8(&text);

        group.bench_function(format!("from_str_utf8/{label}"), |b| {
            b.iter(|| from_str_utf8(black_box(&text)))
        });
        group.bench_function(format!("as_str_utf8/{label}"), |b| {
            b.iter(|| as_str_utf8(black_box(&value)))
        });
        group.bench_function(format!("as_str_utf16/{label}"), |b| {
            b.iter(|| as_str_utf16(black_box(&value)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_numbers, bench_strings);
criterion_main!(benches);
