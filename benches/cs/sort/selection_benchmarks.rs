use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dac_algos::cs::sort::{select_with, MedianOfMedians, RandomPivot};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn bench_selection(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let data: Vec<u64> = (0..10_000).map(|_| rng.gen()).collect();
    let median_rank = data.len() / 2;

    let mut group = c.benchmark_group("select_median_10k");
    group.bench_function("randomized", |b| {
        b.iter(|| {
            let mut arr = data.clone();
            select_with(
                black_box(&mut arr),
                median_rank,
                &mut RandomPivot::with_seed(7),
            )
        })
    });
    group.bench_function("deterministic", |b| {
        b.iter(|| {
            let mut arr = data.clone();
            select_with(black_box(&mut arr), median_rank, &mut MedianOfMedians::new())
        })
    });
    group.finish();
}

criterion_group!(benches, bench_selection);
criterion_main!(benches);
