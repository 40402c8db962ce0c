// benches/digest.rs
use bytekit::{digest, hmac, DigestAlgorithm, KeyMaterial};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

fn bench_digest(c: &mut Criterion) {
    let mut group = c.benchmark_group("digest");

    for &size in &[64usize, 1024, 64 * 1024, 1024 * 1024] {
        let input = vec![0x41u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        for alg in DigestAlgorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(alg.name(), format_size(size)),
                &input,
                |b, input| b.iter(|| digest(black_box(input), alg)),
            );
        }
    }

    group.finish();
}

fn bench_hmac(c: &mut Criterion) {
    let mut group = c.benchmark_group("hmac");
    let key = KeyMaterial::text("benchmark-key");
    let input = vec![0x41u8; 64 * 1024];
    group.throughput(Throughput::Bytes(input.len() as u64));

    for alg in DigestAlgorithm::ALL {
        group.bench_function(alg.name(), |b| {
            b.iter(|| hmac(black_box(&input), &key, alg).unwrap())
        });
    }

    group.finish();
}

fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{}MiB", bytes / (1024 * 1024))
    } else if bytes >= 1024 {
        format!("{}KiB", bytes / 1024)
    } else {
        format!("{bytes}B")
    }
}

criterion_group!(benches, bench_digest, bench_hmac);
criterion_main!(benches);
