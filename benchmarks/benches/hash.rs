// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{
    BenchmarkGroup, Criterion, Throughput, black_box, criterion_group, criterion_main,
    measurement::WallTime,
};

use rampart_hash::{
    HashEngine, Md5, Sha1, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256,
};

const SIZES: [usize; 5] = [64, 256, 1024, 4096, 16384];

fn bench_engine<E: HashEngine>(group: &mut BenchmarkGroup<'_, WallTime>, name: &str) {
    for size in SIZES.iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(format!("{} {} bytes", name, size), size, |b, &size| {
            let data = vec![0x5au8; size];
            let mut engine = E::default();

            b.iter(|| {
                engine.add(black_box(&data));
                engine.calculate().expect("calculate failed");
                black_box(engine.hash().expect("hash failed"));
            });
        });
    }
}

fn benchmark_hashes(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash");

    bench_engine::<Md5>(&mut group, "md5");
    bench_engine::<Sha1>(&mut group, "sha1");
    bench_engine::<Sha224>(&mut group, "sha224");
    bench_engine::<Sha256>(&mut group, "sha256");
    bench_engine::<Sha384>(&mut group, "sha384");
    bench_engine::<Sha512>(&mut group, "sha512");
    bench_engine::<Sha512_224>(&mut group, "sha512_224");
    bench_engine::<Sha512_256>(&mut group, "sha512_256");

    group.finish();
}

fn benchmark_chunked_sha256(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha256_chunked");
    let data = vec![0xa5u8; 16384];
    group.throughput(Throughput::Bytes(data.len() as u64));

    // Odd chunk sizes force the accumulator to copy through its buffer
    for chunk in [1usize, 7, 63, 64, 1000].iter() {
        group.bench_with_input(format!("{} byte chunks", chunk), chunk, |b, &chunk| {
            let mut engine = Sha256::new();

            b.iter(|| {
                for piece in data.chunks(chunk) {
                    engine.add(black_box(piece));
                }
                engine.calculate().expect("calculate failed");
            });
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_hashes, benchmark_chunked_sha256);
criterion_main!(benches);
