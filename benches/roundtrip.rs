// benches/roundtrip.rs
use bytekit::{
    decode_base64, decode_percent, decrypt, encode_base64, encode_percent, encrypt, KeyMaterial,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

fn bench_aes_cbc_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("aes_cbc_roundtrip");
    let iv = KeyMaterial::hex("000102030405060708090a0b0c0d0e0f");

    for (label, key) in [
        ("aes128", "0123456789abcdef"),
        ("aes256", "0123456789abcdef0123456789abcdef"),
    ] {
        let key = KeyMaterial::text(key);
        for &size in &[16usize, 1024, 1024 * 1024] {
            let input = vec![0x41u8; size];
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::new(label, size), &input, |b, input| {
                b.iter(|| {
                    let ciphertext = encrypt(black_box(input), &key, &iv).unwrap();
                    decrypt(black_box(&ciphertext), &key, &iv).unwrap()
                });
            });
        }
    }

    group.finish();
}

fn bench_codecs(c: &mut Criterion) {
    let mut group = c.benchmark_group("codecs");
    let binary: Vec<u8> = (0..64 * 1024).map(|i| (i % 256) as u8).collect();
    let text = "query value with spaces/slashes & unicode é ".repeat(1024);

    group.throughput(Throughput::Bytes(binary.len() as u64));
    group.bench_function("base64", |b| {
        b.iter(|| decode_base64(&encode_base64(black_box(&binary))).unwrap())
    });

    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("percent", |b| {
        b.iter(|| decode_percent(&encode_percent(black_box(&text))).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_aes_cbc_roundtrip, bench_codecs);
criterion_main!(benches);
