//! Storage layer benchmarks: whole-file read and write across the
//! buffer tier breakpoints.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shelfdb_bench::utils::patterned_bytes;
use shelfdb_storage::{read_file, write_file};
use tempfile::TempDir;
use tokio::runtime::Runtime;

/// One size per buffer tier.
const SIZES: [usize; 3] = [4 * 1024, 256 * 1024, 2 * 1024 * 1024];

fn bench_write(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("storage_write");
    group.sample_size(50);

    for size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join("bench.json");
            let data = patterned_bytes(size);

            b.iter(|| {
                rt.block_on(write_file(black_box(&path), black_box(&data), None))
                    .unwrap();
            });
        });
    }

    group.finish();
}

fn bench_read(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("storage_read");
    group.sample_size(50);

    for size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join("bench.json");
            let data = patterned_bytes(size);
            rt.block_on(write_file(&path, &data, None)).unwrap();

            b.iter(|| {
                let bytes = rt.block_on(read_file(black_box(&path), None)).unwrap();
                black_box(bytes);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_write, bench_read);
criterion_main!(benches);
