//! Throughput benchmarks for oxiarith-codec.
//!
//! Covers encode/decode of the symbol-level coder and the full byte-level
//! compress/decompress path on several data patterns.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxiarith_codec::{
    ArithmeticDecoder, ArithmeticEncoder, CoderConfig, compress, decompress, symbols_with_eof,
};
use std::hint::black_box;

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<u8>;

mod test_data {
    /// All bytes identical (lowest entropy)
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    /// Pseudo-random bytes (highest entropy)
    pub fn random(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// English-like text
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. \
                     How vexingly quick daft zebras jump! ";
        text.iter().copied().cycle().take(size).collect()
    }
}

const PATTERNS: [(&str, PatternGenerator); 3] = [
    ("uniform", test_data::uniform),
    ("random", test_data::random),
    ("text", test_data::text_like),
];

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let encoder = ArithmeticEncoder::new(CoderConfig::DEFAULT).unwrap();

    for (name, generate) in PATTERNS {
        for size in [1024, 16 * 1024] {
            let symbols = symbols_with_eof(&generate(size));
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::new(name, size), &symbols, |b, symbols| {
                b.iter(|| encoder.encode(black_box(symbols)).unwrap())
            });
        }
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    let encoder = ArithmeticEncoder::new(CoderConfig::DEFAULT).unwrap();
    let decoder = ArithmeticDecoder::new(CoderConfig::DEFAULT).unwrap();

    for (name, generate) in PATTERNS {
        for size in [1024, 16 * 1024] {
            let symbols = symbols_with_eof(&generate(size));
            let (bits, model) = encoder.encode(&symbols).unwrap();
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::new(name, size), &bits, |b, bits| {
                b.iter(|| decoder.decode(black_box(bits), &model).unwrap())
            });
        }
    }

    group.finish();
}

fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip");
    let data = test_data::text_like(64 * 1024);
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("text_64k", |b| {
        b.iter(|| {
            let compressed = compress(black_box(&data), CoderConfig::DEFAULT).unwrap();
            decompress(&compressed, CoderConfig::DEFAULT).unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_roundtrip);
criterion_main!(benches);
