//! Benchmarks for the predictor and the block transforms.
//!
//! Run with: `cargo bench`
//! Compare with baseline: `cargo bench -- --save-baseline main`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use canopus::{Predictor, PredictorConfig, TextCodec, TextCodecConfig, Transform};

fn sample_text(len: usize) -> Vec<u8> {
    b"the quick brown fox jumps over the lazy dog, and the dog did not mind. "
        .iter()
        .cycle()
        .take(len)
        .copied()
        .collect()
}

fn bench_predictor(c: &mut Criterion) {
    let data = sample_text(1 << 16);

    let mut group = c.benchmark_group("predictor");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("update_64k_text", |b| {
        let cfg = PredictorConfig::new().block_size(1 << 16).size(1 << 16);
        let mut p = Predictor::new(&cfg);
        b.iter(|| {
            for &byte in data.iter() {
                for i in (0..=7).rev() {
                    p.update(i32::from(byte >> i) & 1);
                }
            }
            black_box(p.get())
        })
    });
    group.finish();
}

fn bench_text_codec(c: &mut Criterion) {
    let data = sample_text(1 << 16);

    let mut group = c.benchmark_group("textcodec");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("forward_64k", |b| {
        let mut codec = TextCodec::new(&TextCodecConfig::new().size(data.len()));
        let mut dst = vec![0u8; codec.max_encoded_len(data.len())];
        b.iter(|| {
            let (_, written) = codec.forward(&data, &mut dst).unwrap();
            black_box(written)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_predictor, bench_text_codec);
criterion_main!(benches);
