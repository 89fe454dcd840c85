// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use rampart_hash::{Hmac, Sha1, Sha256, Sha512};

macro_rules! bench_hmac {
    ($fn_name:ident, $group:literal, $engine:ty) => {
        fn $fn_name(c: &mut Criterion) {
            let mut group = c.benchmark_group($group);

            for size in [64, 256, 1024, 4096].iter() {
                group.throughput(Throughput::Bytes(*size as u64));
                group.bench_with_input(format!("{} bytes", size), size, |b, &size| {
                    let key = b"benchmark-hmac-key";
                    let data = vec![0u8; size];
                    let mut mac = Hmac::<$engine>::new(key).expect("new failed");

                    b.iter(|| {
                        mac.add(black_box(&data));
                        mac.calculate().expect("calculate failed");
                        black_box(mac.hash().expect("hash failed"));
                    });
                });
            }
            group.finish();
        }
    };
}

bench_hmac!(benchmark_hmac_sha1, "hmac_sha1", Sha1);
bench_hmac!(benchmark_hmac_sha256, "hmac_sha256", Sha256);
bench_hmac!(benchmark_hmac_sha512, "hmac_sha512", Sha512);

fn benchmark_hmac_rekey(c: &mut Criterion) {
    c.bench_function("hmac_sha256 set_hmac (long key)", |b| {
        let long_key = [0xaau8; 131];
        let mut mac = Hmac::<Sha256>::new(b"initial").expect("new failed");

        b.iter(|| {
            mac.set_hmac(black_box(&long_key)).expect("set_hmac failed");
        });
    });
}

criterion_group!(
    benches,
    benchmark_hmac_sha1,
    benchmark_hmac_sha256,
    benchmark_hmac_sha512,
    benchmark_hmac_rekey
);
criterion_main!(benches);
