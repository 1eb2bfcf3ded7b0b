// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use slipway_model::interval::Interval;
use slipway_model::options::{PackOptions, Strategy};
use slipway_pack::pack::pack;
use std::hint::black_box;

/// Deterministic random instance: `size` intervals with starts in
/// `0..10_000` and durations in `0..500`.
fn build_instance(size: usize, seed: u64) -> Vec<Interval<usize, i64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|id| {
            let start = rng.random_range(0..10_000i64);
            let len = rng.random_range(0..500i64);
            Interval::new(id, start, start + len)
        })
        .collect()
}

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack_greedy");
    let options = PackOptions::new();

    for &size in &[100usize, 1_000, 5_000] {
        let intervals = build_instance(size, 0xBEEF);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &intervals, |b, input| {
            b.iter(|| pack(black_box(input), &options));
        });
    }

    group.finish();
}

fn bench_minimal_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack_minimal_search");
    let options = PackOptions::new().with_strategy(Strategy::Optimized);

    // The search is cubic in the worst case; keep instances small.
    for &size in &[50usize, 100, 200] {
        let intervals = build_instance(size, 0xBEEF);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &intervals, |b, input| {
            b.iter(|| pack(black_box(input), &options));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_greedy, bench_minimal_search);
criterion_main!(benches);
