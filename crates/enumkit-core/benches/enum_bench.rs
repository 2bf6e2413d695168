//! # Enumeration Benchmarks
//!
//! Throughput of the enumeration helpers over growing inputs.
//!
//! Run with: `cargo bench -p enumkit-core`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use enumkit_core::{Grid, enumerate, enumerate2d, lines_of, map_of, pairs_of, read_lines};
use std::collections::HashMap;
use std::hint::black_box;
use std::io::Cursor;

/// Text of `count` lines alternating LF and CRLF breaks.
fn mixed_text(count: usize) -> String {
    let mut text = String::new();
    for i in 0..count {
        text.push_str("some line content ");
        text.push_str(&i.to_string());
        text.push_str(if i % 2 == 0 { "\n" } else { "\r\n" });
    }
    text
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("lines");

    for size in [100, 1000, 10000].iter() {
        let text = mixed_text(*size);

        group.bench_with_input(BenchmarkId::new("lines_of", size), &text, |b, text| {
            b.iter(|| black_box(lines_of(text).count()));
        });

        group.bench_with_input(BenchmarkId::new("read_lines", size), &text, |b, text| {
            b.iter(|| black_box(read_lines(Cursor::new(text.as_bytes())).count()));
        });
    }

    group.finish();
}

fn bench_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("mapping");

    for size in [100, 1000, 10000].iter() {
        let map: HashMap<u64, u64> = (0..*size as u64).map(|i| (i, i * 2)).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &map, |b, map| {
            b.iter(|| black_box(map_of(Some(pairs_of(map))).len()));
        });
    }

    group.finish();
}

fn bench_indexed(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexed");

    for size in [100, 1000].iter() {
        let data: Vec<u64> = (0..(*size * *size) as u64).collect();
        let grid = Grid::from_fn(*size, *size, |r, c| (r ^ c) as u64);

        group.bench_with_input(BenchmarkId::new("enumerate", size), &data, |b, data| {
            b.iter(|| black_box(enumerate(data).map(|(i, v)| i as u64 ^ v).sum::<u64>()));
        });

        group.bench_with_input(BenchmarkId::new("enumerate2d", size), &grid, |b, grid| {
            b.iter(|| {
                black_box(
                    enumerate2d(grid)
                        .map(|(r, c, v)| (r ^ c) as u64 ^ v)
                        .sum::<u64>(),
                )
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lines, bench_mapping, bench_indexed);
criterion_main!(benches);
