//! Performance benchmarks for the Huffman codec.
//!
//! Measures encode/decode throughput across data patterns with very
//! different symbol distributions (uniform, skewed text, pseudo-random).

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use huffarc_huffman::codec::{decode, encode};
use std::hint::black_box;

/// Generate test data patterns for benchmarking
mod test_data {
    /// Uniform data - single symbol, 1 bit per byte after encoding
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    /// Text-like data - skewed, realistic distribution
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. ";
        let mut data = Vec::with_capacity(size);
        while data.len() < size {
            let remaining = size - data.len();
            let chunk_size = remaining.min(text.len());
            data.extend_from_slice(&text[..chunk_size]);
        }
        data
    }

    /// Pseudo-random data - near-flat distribution, worst case
    pub fn random(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for size in [4 * 1024, 64 * 1024] {
        for (name, data) in [
            ("uniform", test_data::uniform(size)),
            ("text", test_data::text_like(size)),
            ("random", test_data::random(size)),
        ] {
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(
                BenchmarkId::new(name, size),
                &data,
                |b, data| b.iter(|| encode(black_box(data)).unwrap()),
            );
        }
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for size in [4 * 1024, 64 * 1024] {
        for (name, data) in [
            ("text", test_data::text_like(size)),
            ("random", test_data::random(size)),
        ] {
            let (payload, tree) = encode(&data).unwrap();
            let tree = tree.unwrap();

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::new(name, size), &payload, |b, payload| {
                b.iter(|| decode(black_box(payload), &tree, data.len() as u64).unwrap())
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
