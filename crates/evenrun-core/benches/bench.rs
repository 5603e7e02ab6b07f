use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use evenrun_core::{longest_even_run, longest_even_run_batched};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub fn gen_random_ints(count: usize, key_max: i64) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    (0..count).map(|_| rng.gen_range(-key_max..key_max)).collect()
}

/// 偶数占多数，形成较长的偶数段
pub fn gen_mostly_even(count: usize) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    (0..count)
        .map(|_| if rng.gen_bool(0.95) { rng.gen_range(0..1000i64) * 2 } else { 1 })
        .collect()
}

fn bench_engines(c: &mut Criterion) {
    let mut group = c.benchmark_group("longest_even_run");
    for size in [100usize, 10_000, 1_000_000] {
        for (name, input) in [("random", gen_random_ints(size, 1_000_000)), ("mostly_even", gen_mostly_even(size))] {
            group.bench_with_input(BenchmarkId::new(format!("linear/{name}"), size), &input, |b, v| {
                b.iter(|| longest_even_run(v))
            });
            group.bench_with_input(BenchmarkId::new(format!("runs/{name}"), size), &input, |b, v| {
                b.iter(|| longest_even_run_batched(v))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_engines);
criterion_main!(benches);
