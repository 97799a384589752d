use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rotalog::level::Level;
use rotalog::{DateBucket, parse_size};
use std::str::FromStr;

fn bench_parse_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_size");

    group.bench_function("plain_bytes", |b| {
        b.iter(|| parse_size(black_box("500")));
    });

    group.bench_function("with_unit", |b| {
        b.iter(|| parse_size(black_box("10MB")));
    });

    group.bench_function("fractional", |b| {
        b.iter(|| parse_size(black_box("1.5GB")));
    });

    group.bench_function("invalid", |b| {
        b.iter(|| parse_size(black_box("bogus")));
    });

    group.finish();
}

fn bench_level_from_str(c: &mut Criterion) {
    let mut group = c.benchmark_group("Level::from_str");

    group.bench_function("valid_info", |b| {
        b.iter(|| Level::from_str(black_box("info")));
    });

    group.bench_function("invalid", |b| {
        b.iter(|| Level::from_str(black_box("critical")));
    });

    group.finish();
}

fn bench_bucket_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("DateBucket");

    group.bench_function("day_now", |b| {
        b.iter(|| black_box(DateBucket::Day).now());
    });

    group.bench_function("hour_now", |b| {
        b.iter(|| black_box(DateBucket::Hour).now());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_size,
    bench_level_from_str,
    bench_bucket_format,
);
criterion_main!(benches);
