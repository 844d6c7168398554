use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::{criterion_group, criterion_main};
use rand::prelude::SliceRandom;
use rand::prelude::StdRng;
use rand::Rng;
use rand::SeedableRng;

use sorted_list::{insert_in_order, insert_in_order_by};

fn throughput_by_batch_size(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut values: Vec<u64> = (0..10_000).map(|_| rng.gen()).collect();
    values.shuffle(&mut rng);

    let configs = [10, 100, 1_000, 10_000];

    let mut group = c.benchmark_group("sorted_list::insert::by_batch_size");
    for c in configs.iter() {
        group.throughput(Throughput::Elements(*c as u64));
        group.bench_with_input(BenchmarkId::from_parameter(c), c, |b, c| {
            let batch = &values[..*c];
            b.iter(|| {
                let mut vec = Vec::with_capacity(batch.len());
                for v in batch {
                    insert_in_order(&mut vec, *v);
                }
                vec
            });
        });
    }
    group.finish();

    // Baseline: push everything, sort once at the end.
    let mut group = c.benchmark_group("sorted_list::push_then_sort::by_batch_size");
    for c in configs.iter() {
        group.throughput(Throughput::Elements(*c as u64));
        group.bench_with_input(BenchmarkId::from_parameter(c), c, |b, c| {
            let batch = &values[..*c];
            b.iter(|| {
                let mut vec: Vec<u64> = batch.to_vec();
                vec.sort_unstable();
                vec
            });
        });
    }
    group.finish();
}

fn throughput_by_insert_position(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let base: Vec<u64> = {
        let mut v: Vec<u64> = (0..10_000).map(|_| rng.gen()).collect();
        v.sort_unstable();
        v
    };

    // front / middle / back of an already filled list
    let configs = [
        ("front", u64::MIN),
        ("middle", base[base.len() / 2]),
        ("back", u64::MAX),
    ];

    let mut group = c.benchmark_group("sorted_list::insert::by_position");
    for (name, value) in configs.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(name), value, |b, value| {
            b.iter(|| {
                let mut vec = base.clone();
                insert_in_order(&mut vec, *value);
                vec
            });
        });
    }
    group.finish();

    let mut group = c.benchmark_group("sorted_list::insert_by::by_position");
    for (name, value) in configs.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(name), value, |b, value| {
            b.iter(|| {
                let mut vec = base.clone();
                insert_in_order_by(&mut vec, u64::cmp, *value);
                vec
            });
        });
    }
    group.finish();
}

criterion_group!(benches, throughput_by_batch_size, throughput_by_insert_position);
criterion_main!(benches);
