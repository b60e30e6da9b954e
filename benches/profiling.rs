//! Benchmarks for the profiling hot paths
//!
//! Segmentation is arithmetic only; k-mer counting dominates a profiling
//! run, so both are tracked here across realistic contig sizes.
//!
//! Run with: cargo bench --bench profiling

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use splitprof::operations::kmer::KmerCounter;
use splitprof::operations::segment;
use splitprof::profile::{ContigProfiler, NullProgress, ProfilerConfig};
use splitprof::{Contig, GeneInterval};

/// Generate a deterministic DNA sequence
fn generate_sequence(len: usize) -> Vec<u8> {
    (0..len)
        .map(|i| [b'A', b'C', b'G', b'T'][(i * 7 + i / 5) % 4])
        .collect()
}

fn bench_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment");

    for &contig_length in &[10_000usize, 1_000_000, 100_000_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(contig_length),
            &contig_length,
            |b, &length| {
                b.iter(|| segment(black_box(length), black_box(20_000)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_kmer_frequency(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmer_frequency");

    // Typical split lengths
    for &len in &[1_000usize, 20_000, 100_000] {
        let sequence = generate_sequence(len);
        let counter = KmerCounter::new(4).unwrap();

        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("k4", len), &sequence, |b, seq| {
            b.iter(|| counter.frequency(black_box(seq)));
        });
    }

    // Order sweep at a fixed length
    let sequence = generate_sequence(20_000);
    for k in [2usize, 4, 6, 8] {
        let counter = KmerCounter::new(k).unwrap();
        group.bench_with_input(BenchmarkId::new("k_sweep", k), &sequence, |b, seq| {
            b.iter(|| counter.frequency(black_box(seq)));
        });
    }

    group.finish();
}

fn bench_batch_profile(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_profile");
    group.sample_size(20);

    let contigs: Vec<Contig> = (0..100)
        .map(|i| Contig::new(format!("contig_{}", i), generate_sequence(50_000 + i * 10)))
        .collect();
    let genes: Vec<GeneInterval> = (0..1_000)
        .map(|i| {
            let contig = format!("contig_{}", i % 100);
            let start = (i * 37) % 45_000;
            GeneInterval::new(format!("gene_{}", i), contig, start, start + 900)
                .with_taxonomy(["alpha", "beta", "gamma"][i % 3])
        })
        .collect();

    let sequential = ContigProfiler::new(ProfilerConfig { split_length: 20_000, kmer_size: 4 })
        .unwrap();
    group.bench_function("sequential", |b| {
        b.iter(|| sequential.profile(black_box(&contigs), black_box(&genes), &NullProgress));
    });

    let parallel = ContigProfiler::new(ProfilerConfig { split_length: 20_000, kmer_size: 4 })
        .unwrap()
        .with_parallel(4);
    group.bench_function("parallel_4t", |b| {
        b.iter(|| parallel.profile(black_box(&contigs), black_box(&genes), &NullProgress));
    });

    group.finish();
}

criterion_group!(benches, bench_segment, bench_kmer_frequency, bench_batch_profile);
criterion_main!(benches);
