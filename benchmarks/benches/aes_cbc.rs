// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use rampart_aes::{Aes128, Aes256, AesVariant, CbcDecrypt, CbcEncrypt};

const SIZES: [usize; 5] = [64, 256, 1024, 4096, 16384];

fn encrypt_once<V: AesVariant>(key: &V::Key, iv: &[u8; 16], data: &[u8]) -> Vec<u8> {
    let mut enc = CbcEncrypt::<V>::new();
    enc.set_key(key);
    enc.set_iv(iv);
    enc.add(data).expect("add failed");
    enc.calculate().expect("calculate failed");
    enc.get_data().expect("get_data failed").to_vec()
}

fn bench_encrypt<V: AesVariant>(c: &mut Criterion, name: &str, key: &V::Key) {
    let mut group = c.benchmark_group(format!("{}_cbc_encrypt", name));
    let iv = [0u8; 16];

    for size in SIZES.iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(format!("{} bytes", size), size, |b, &size| {
            let data = vec![0u8; size];
            let mut enc = CbcEncrypt::<V>::new();

            b.iter(|| {
                // calculate wipes the schedule, so every message rekeys
                enc.set_key(black_box(key));
                enc.set_iv(black_box(&iv));
                enc.add(black_box(&data)).expect("add failed");
                enc.calculate().expect("calculate failed");
                black_box(enc.get_data().expect("get_data failed"));
            });
        });
    }
    group.finish();
}

fn bench_decrypt<V: AesVariant>(c: &mut Criterion, name: &str, key: &V::Key) {
    let mut group = c.benchmark_group(format!("{}_cbc_decrypt", name));
    let iv = [0u8; 16];

    for size in SIZES.iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(format!("{} bytes", size), size, |b, &size| {
            let ciphertext = encrypt_once::<V>(key, &iv, &vec![0u8; size]);
            let mut dec = CbcDecrypt::<V>::new();

            b.iter(|| {
                dec.set_key(black_box(key));
                dec.set_iv(black_box(&iv));
                dec.add(black_box(&ciphertext)).expect("add failed");
                dec.calculate().expect("calculate failed");
                black_box(dec.get_data().expect("get_data failed"));
            });
        });
    }
    group.finish();
}

fn benchmark_aes128_cbc(c: &mut Criterion) {
    let key = [0x2bu8; 16];
    bench_encrypt::<Aes128>(c, "aes128", &key);
    bench_decrypt::<Aes128>(c, "aes128", &key);
}

fn benchmark_aes256_cbc(c: &mut Criterion) {
    let key = [0x60u8; 32];
    bench_encrypt::<Aes256>(c, "aes256", &key);
    bench_decrypt::<Aes256>(c, "aes256", &key);
}

criterion_group!(benches, benchmark_aes128_cbc, benchmark_aes256_cbc);
criterion_main!(benches);
