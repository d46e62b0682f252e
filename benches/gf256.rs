//! Benchmarks comparing the two GF(2^8) arithmetic engines
//!
//! Each group times one element operation on both the direct
//! polynomial-arithmetic engine and the logarithm-table engine over the
//! same batch of seeded random operands.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gf256::{Backend, Gf256};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const ENGINES: [(&str, Backend); 2] = [("direct", Backend::Direct), ("table", Backend::Table)];

fn operand_pairs(backend: Backend, nonzero_divisor: bool) -> Vec<(Gf256, Gf256)> {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    (0..256)
        .map(|_| {
            let a = rng.gen_range(0..256u16);
            let b = if nonzero_divisor {
                rng.gen_range(1..256u16)
            } else {
                rng.gen_range(0..256u16)
            };
            (
                Gf256::new(a, backend).unwrap(),
                Gf256::new(b, backend).unwrap(),
            )
        })
        .collect()
}

fn bench_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("gf256_addition");

    for (name, backend) in ENGINES {
        let operands = operand_pairs(backend, false);
        group.bench_function(name, |b| {
            b.iter(|| {
                for &(x, y) in &operands {
                    black_box(x.add(black_box(y)).unwrap());
                }
            });
        });
    }

    group.finish();
}

fn bench_subtraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("gf256_subtraction");

    for (name, backend) in ENGINES {
        let operands = operand_pairs(backend, false);
        group.bench_function(name, |b| {
            b.iter(|| {
                for &(x, y) in &operands {
                    black_box(x.sub(black_box(y)).unwrap());
                }
            });
        });
    }

    group.finish();
}

fn bench_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("gf256_multiplication");

    for (name, backend) in ENGINES {
        let operands = operand_pairs(backend, false);
        group.bench_function(name, |b| {
            b.iter(|| {
                for &(x, y) in &operands {
                    black_box(x.mul(black_box(y)).unwrap());
                }
            });
        });
    }

    group.finish();
}

fn bench_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("gf256_division");

    for (name, backend) in ENGINES {
        let operands = operand_pairs(backend, true);
        group.bench_function(name, |b| {
            b.iter(|| {
                for &(x, y) in &operands {
                    black_box(x.div(black_box(y)).unwrap());
                }
            });
        });
    }

    group.finish();
}

fn bench_inversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("gf256_inversion");

    for (name, backend) in ENGINES {
        let operands = operand_pairs(backend, true);
        group.bench_function(name, |b| {
            b.iter(|| {
                for &(_, y) in &operands {
                    black_box(black_box(y).invert().unwrap());
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_addition,
    bench_subtraction,
    bench_multiplication,
    bench_division,
    bench_inversion
);
criterion_main!(benches);
