use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dac_algos::cs::sort::{sort_with, RandomPivot};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn bench_quicksort(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let random: Vec<u64> = (0..10_000).map(|_| rng.gen()).collect();
    let sorted: Vec<u64> = (0..10_000).collect();
    let reversed: Vec<u64> = (0..10_000).rev().collect();

    let mut group = c.benchmark_group("quicksort_10k");
    for (name, data) in [
        ("random", &random),
        ("sorted", &sorted),
        ("reversed", &reversed),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut arr = data.clone();
                sort_with(black_box(&mut arr), &mut RandomPivot::with_seed(7));
                arr
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_quicksort);
criterion_main!(benches);
