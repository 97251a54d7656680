//! 工具函数性能基准测试

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use linkdo::utils::url_validator::validate_url;
use linkdo::utils::{SHORT_ID_LENGTH, generate_random_code, is_valid_short_id};

// ============== generate_random_code 基准测试 ==============

fn bench_generate_random_code(c: &mut Criterion) {
    let mut group = c.benchmark_group("utils/generate_random_code");

    for length in [SHORT_ID_LENGTH, 16, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, &len| {
            b.iter(|| generate_random_code(black_box(len)));
        });
    }

    group.finish();
}

// ============== is_valid_short_id 基准测试 ==============

fn bench_is_valid_short_id(c: &mut Criterion) {
    let mut group = c.benchmark_group("utils/is_valid_short_id");

    group.bench_function("valid", |b| {
        b.iter(|| assert!(is_valid_short_id(black_box("aZ3x9Q"))));
    });

    group.bench_function("invalid_chars", |b| {
        b.iter(|| assert!(!is_valid_short_id(black_box("ab-_!?"))));
    });

    group.finish();
}

// ============== validate_url 基准测试 ==============

fn bench_validate_url(c: &mut Criterion) {
    let mut group = c.benchmark_group("utils/validate_url");

    let long_url = format!("https://example.com/{}", "segment/".repeat(200));
    let cases = [
        ("short", "https://example.com"),
        ("query", "https://example.com/search?q=rust&page=2#top"),
        ("long", long_url.as_str()),
    ];

    for (name, url) in cases {
        group.bench_with_input(BenchmarkId::new("valid", name), url, |b, url| {
            b.iter(|| assert!(validate_url(black_box(url)).is_ok()));
        });
    }

    group.bench_function("invalid_scheme", |b| {
        b.iter(|| assert!(validate_url(black_box("javascript:alert(1)")).is_err()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_generate_random_code,
    bench_is_valid_short_id,
    bench_validate_url
);
criterion_main!(benches);
