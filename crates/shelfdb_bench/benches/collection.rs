//! Collection store benchmarks: load, write, and identifier-addressed
//! mutations at several collection sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use shelfdb_bench::utils::sample_notes;
use shelfdb_core::{Collection, Entity};
use shelfdb_testkit::Note;
use tempfile::TempDir;
use tokio::runtime::Runtime;

const COUNTS: [usize; 3] = [10, 100, 1000];

/// Writes `count` notes to a fresh collection file and returns the
/// loaded collection plus its backing temp dir.
fn seeded(rt: &Runtime, count: usize) -> (TempDir, Collection<Note>) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(format!("{}.json", Note::NAME));
    std::fs::File::create(&path).unwrap();

    let collection = rt.block_on(async {
        let mut collection = Collection::<Note>::load(&path).await.unwrap();
        collection.append(sample_notes(count));
        collection.write().await.unwrap();
        collection
    });

    (temp_dir, collection)
}

fn bench_load(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("collection_load");

    for count in COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let (_temp_dir, collection) = seeded(&rt, count);
            let path = collection.path().to_path_buf();

            b.iter(|| {
                let loaded = rt
                    .block_on(Collection::<Note>::load(black_box(&path)))
                    .unwrap();
                black_box(loaded.len());
            });
        });
    }

    group.finish();
}

fn bench_write(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("collection_write");

    for count in COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let (_temp_dir, collection) = seeded(&rt, count);

            b.iter(|| {
                rt.block_on(collection.write()).unwrap();
            });
        });
    }

    group.finish();
}

fn bench_update(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("collection_update");

    for count in COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let (_temp_dir, mut collection) = seeded(&rt, count);
            // Worst case: the last record.
            let target = collection.iter().last().unwrap().clone();
            let id = target.entity_id();

            b.iter(|| {
                let hit = collection.update(black_box(id), target.clone());
                black_box(hit);
            });
        });
    }

    group.finish();
}

fn bench_to_map(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("collection_to_map");

    for count in COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let (_temp_dir, collection) = seeded(&rt, count);

            b.iter(|| {
                let map = collection.to_map();
                black_box(map.len());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_load, bench_write, bench_update, bench_to_map);
criterion_main!(benches);
