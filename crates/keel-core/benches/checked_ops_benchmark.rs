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
use keel_core::checked::CheckedResult;
use keel_core::dispatch::Binary;
use keel_core::num::operand::Ranged;
use keel_core::num::ops::checked_arithmetic::{checked_add, checked_mul};
use keel_core::promotion::{AutomaticPromotion, Lp64};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

const OPERANDS: usize = 4096;

fn random_pairs(seed: u64) -> Vec<(i16, i16)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..OPERANDS).map(|_| (rng.r#gen(), rng.r#gen())).collect()
}

fn bench_native_checked_ops(c: &mut Criterion) {
    let pairs = random_pairs(42);
    let mut group = c.benchmark_group("native_checked_ops");
    group.throughput(Throughput::Elements(OPERANDS as u64));

    group.bench_function("checked_add_i16", |b| {
        b.iter(|| {
            for &(x, y) in &pairs {
                black_box(checked_add(black_box(x), black_box(y)));
            }
        })
    });
    group.bench_function("checked_mul_i16", |b| {
        b.iter(|| {
            for &(x, y) in &pairs {
                black_box(checked_mul(black_box(x), black_box(y)));
            }
        })
    });
    group.bench_function("wrapping_mul_i16_baseline", |b| {
        b.iter(|| {
            for &(x, y) in &pairs {
                black_box(black_box(x).wrapping_mul(black_box(y)));
            }
        })
    });
    group.finish();
}

/// The automatic policy proves the product fits and skips the check; the
/// native policy keeps the product in `i32` and checks every operation.
fn bench_elided_vs_checked(c: &mut Criterion) {
    type Small = Ranged<i16, -1000, 1000>;

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let pairs: Vec<(i16, i16)> = (0..OPERANDS)
        .map(|_| (rng.gen_range(-1000..=1000), rng.gen_range(-1000..=1000)))
        .collect();

    let mut group = c.benchmark_group("dispatch_mul");
    group.throughput(Throughput::Elements(OPERANDS as u64));

    group.bench_with_input(BenchmarkId::new("elided", "automatic"), &pairs, |b, pairs| {
        b.iter(|| {
            for &(x, y) in pairs {
                black_box(Binary::<AutomaticPromotion, Small, Small>::mul::<i32>(
                    CheckedResult::Value(black_box(x)),
                    CheckedResult::Value(black_box(y)),
                ));
            }
        })
    });
    group.bench_with_input(BenchmarkId::new("checked", "lp64"), &pairs, |b, pairs| {
        b.iter(|| {
            for &(x, y) in pairs {
                black_box(Binary::<Lp64, i16, i16>::mul::<i16>(
                    CheckedResult::Value(black_box(x)),
                    CheckedResult::Value(black_box(y)),
                ));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_native_checked_ops, bench_elided_vs_checked);
criterion_main!(benches);
