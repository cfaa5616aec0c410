//! Benchmarks for the set operations of rangeset

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rangeset::gcollections::ops::*;
use rangeset::{Interval, IntervalSet};

/// number of intervals in each benchmarked operand
const COUNT: usize = 1000;

/// `[k*step .. k*step + width)` for k in 0..COUNT
fn build_comb(offset: f64, step: f64, width: f64) -> IntervalSet {
  (0..COUNT)
    .map(|k| {
      let lb = offset + k as f64 * step;
      Interval::new(lb, lb + width).expect("width is positive")
    })
    .collect()
}

fn bench_from_intervals(c: &mut Criterion) {
  let mut raw: Vec<Interval> = build_comb(0.0, 2.0, 1.5).iter().cloned().collect();
  raw.reverse();

  c.bench_function("from_intervals", |b| {
    b.iter(|| IntervalSet::from_intervals(black_box(raw.iter().cloned())))
  });
}

fn bench_binary_ops(c: &mut Criterion) {
  let a = build_comb(0.0, 2.0, 1.0);
  let b = build_comb(0.5, 2.0, 1.0);

  c.bench_function("union", |bench| bench.iter(|| black_box(&a).union(black_box(&b))));
  c.bench_function("intersection", |bench| {
    bench.iter(|| black_box(&a).intersection(black_box(&b)))
  });
  c.bench_function("difference", |bench| {
    bench.iter(|| black_box(&a).difference(black_box(&b)))
  });
  c.bench_function("complement", |bench| bench.iter(|| black_box(&a).complement()));
}

fn bench_contains(c: &mut Criterion) {
  let a = build_comb(0.0, 2.0, 1.0);

  c.bench_function("contains", |bench| {
    bench.iter(|| {
      (0..COUNT)
        .filter(|k| a.contains(&black_box(*k as f64 * 2.0 + 0.5)))
        .count()
    })
  });
}

fn bench_cannonade(c: &mut Criterion) {
  let wall = IntervalSet::new(0.0, 20.0).expect("valid wall");
  let targets: Vec<f64> = (0..200).map(|k| (k * 7919 % 2000) as f64 / 100.0).collect();

  c.bench_function("cannonade", |bench| {
    bench.iter(|| {
      targets.iter().fold(wall.clone(), |remaining, t| {
        let hole = Interval::new(t - 0.5, t + 0.5).expect("valid hole");
        remaining.difference(&hole)
      })
    })
  });
}

criterion_group!(
  benches,
  bench_from_intervals,
  bench_binary_ops,
  bench_contains,
  bench_cannonade
);
criterion_main!(benches);
