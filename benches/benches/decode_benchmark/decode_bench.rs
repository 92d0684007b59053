use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ss_benchmark::synthetic_capture;
use ss_core::{compute_index, decode, SampleFilter};

const RECORDS: usize = 10_000;

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for (name, sample_type) in [("ht20", 1u8), ("ht40", 2), ("ath10k", 3), ("ath11k", 4)] {
        let buf = synthetic_capture(sample_type, RECORDS).expect("synthetic capture");
        group.throughput(Throughput::Bytes(buf.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &buf, |b, buf| {
            b.iter(|| decode(black_box(buf)))
        });
    }

    group.finish();
}

fn bench_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("index");
    let filter = SampleFilter::default();

    for (name, sample_type) in [("ht20", 1u8), ("ht40", 2), ("ath10k", 3)] {
        let buf = synthetic_capture(sample_type, RECORDS).expect("synthetic capture");
        let (records, _) = decode(&buf);
        group.throughput(Throughput::Elements(records.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &records, |b, records| {
            b.iter(|| compute_index(black_box(records), &filter))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decode, bench_index);
criterion_main!(benches);
