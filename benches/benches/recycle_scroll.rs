// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Vec2;
use understory_recycle_scroll::{
    Padding, PrefixSumGeometry, ScrollAxis, ScrollCalculator, ScrollFrame,
};

fn calculator(len: usize) -> ScrollCalculator<PrefixSumGeometry> {
    let frame = ScrollFrame::new(ScrollAxis::Vertical, 800.0);
    // Uneven row heights so the resolver cannot shortcut anything.
    let lengths = (0..len).map(|i| 18.0 + (i % 13) as f64 * 3.0);
    ScrollCalculator::new(PrefixSumGeometry::from_lengths(frame, lengths))
}

fn bench_offset_scroll_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("recycle_scroll/offset_sweep");

    // One frame per 17px of travel across the whole list, with and without preload.
    for len in [1_000usize, 10_000, 100_000] {
        let mut calc = calculator(len);
        let count = calc.instance_count(true).unwrap();
        let total = calc.content_size().height;
        let steps = (total / 17.0) as u64;
        group.throughput(Throughput::Elements(steps));

        for preload in [false, true] {
            let id = if preload { "preload" } else { "plain" };
            group.bench_function(BenchmarkId::new(id, len), |b| {
                b.iter(|| {
                    let mut y = 0.0;
                    while y < total {
                        let padding = calc.offset(count, Vec2::new(0.0, y), preload).unwrap();
                        black_box(padding);
                        y += 17.0;
                    }
                });
            });
        }
    }

    group.finish();
}

fn bench_rolling_long_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("recycle_scroll/rolling");

    // A padding jump that crosses `distance` rows in one call (e.g. a scrollbar drag).
    for distance in [16usize, 256, 4_096] {
        let calc = calculator(10_000);
        let jump = distance as f64 * 18.0;
        let from = Padding::ZERO;
        let to = Padding::new(jump, 0.0, 0.0, 0.0);
        group.throughput(Throughput::Elements(distance as u64));

        group.bench_with_input(BenchmarkId::new("forward", distance), &to, |b, to| {
            b.iter(|| black_box(calc.rolling(from, *to, 0).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("backward", distance), &to, |b, to| {
            b.iter(|| black_box(calc.rolling(*to, from, 9_000).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_offset_scroll_sweep, bench_rolling_long_walk);
criterion_main!(benches);
