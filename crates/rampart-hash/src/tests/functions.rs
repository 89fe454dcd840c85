// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{HashEngine, HexCase, Sha512_256};

#[test]
fn test_one_shot_hex_matches_published_abc() {
    let cases: [(fn(&[u8], HexCase) -> Result<String, crate::CryptoError>, &str); 8] = [
        (crate::md5_hex, "900150983cd24fb0d6963f7d28e17f72"),
        (crate::sha1_hex, "a9993e364706816aba3e25717850c26c9cd0d89d"),
        (crate::sha224_hex, "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"),
        (crate::sha256_hex, "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"),
        (
            crate::sha384_hex,
            "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7",
        ),
        (
            crate::sha512_hex,
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
        ),
        (crate::sha512_224_hex, "4634270f707b6a54daae7530460842e20e37ed265ceee9a43e8924aa"),
        (
            crate::sha512_256_hex,
            "53048e2681941ef99b2e29b76b4c7dabe4c2d0c634fc6d46e0e2f13107e7af23",
        ),
    ];

    for (hex_fn, expected) in cases {
        assert_eq!(hex_fn(b"abc", HexCase::Lower).expect("Failed to hash"), expected);
        assert_eq!(
            hex_fn(b"abc", HexCase::Upper).expect("Failed to hash"),
            expected.to_ascii_uppercase()
        );
    }
}

#[test]
fn test_one_shot_matches_streaming() {
    let data = [0x42u8; 300];

    let mut engine = Sha512_256::new();
    engine.add(&data[..7]);
    engine.add(&data[7..]);
    engine.calculate().expect("Failed to calculate()");

    assert_eq!(
        crate::sha512_256(&data).expect("Failed to hash"),
        engine.digest().expect("Failed to digest()")
    );
    assert_eq!(
        crate::md5(b"").expect("Failed to hash"),
        [
            0xd4, 0x1d, 0x8c, 0xd9, 0x8f, 0x00, 0xb2, 0x04, 0xe9, 0x80, 0x09, 0x98, 0xec, 0xf8, 0x42,
            0x7e
        ]
    );
}
