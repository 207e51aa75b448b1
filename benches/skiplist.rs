use criterion::{
    black_box,
    criterion_group,
    criterion_main,
    BatchSize,
    BenchmarkId,
    Criterion,
};
use rand::{
    rngs::SmallRng,
    Rng,
    SeedableRng,
};
use skiplist_algo::{
    SkipList,
    SkipListConfig,
};

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn seeded_list(size: usize) -> SkipList<u64> {
    let mut config = SkipListConfig::new();
    config.set_seed(Some(0xDEADBEEF));
    let mut list = config.build().unwrap();
    let mut rng = SmallRng::seed_from_u64(size as u64);
    for _ in 0..size {
        list.insert(rng.gen());
    }
    list
}

pub fn insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("SkipList::insert()");
    for size in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = SmallRng::seed_from_u64(42);
            b.iter_batched(
                || seeded_list(size),
                |mut list| {
                    list.insert(rng.gen::<u64>());
                    list
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

pub fn search(c: &mut Criterion) {
    let mut group = c.benchmark_group("SkipList::search()");
    for size in SIZES {
        let list = seeded_list(size);
        let keys: Vec<u64> = list.iter().copied().collect();
        let mut rng = SmallRng::seed_from_u64(7);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let key = keys[rng.gen_range(0..keys.len())];
                black_box(list.search(&key).is_some())
            })
        });
    }
    group.finish();
}

pub fn insert_delete_churn(c: &mut Criterion) {
    let mut list = seeded_list(10_000);
    let mut rng = SmallRng::seed_from_u64(99);
    c.bench_function("SkipList insert+delete", |b| {
        b.iter(|| {
            let value = rng.gen::<u64>();
            list.insert(value);
            black_box(list.delete(&value))
        })
    });
}

criterion_group!(benches, insert, search, insert_delete_churn);
criterion_main!(benches);
