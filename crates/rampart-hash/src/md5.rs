// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! MD5 per RFC 1321

use rampart_core::BitLength64;
use rampart_util::{load_u32_le, store_u32_le};
use rampart_zero::{FastZeroizable, RampartZero};

use crate::engine::md_engine;

/// Initial chaining values A, B, C, D per RFC 1321 Section 3.3
const IV: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

/// T[i] = floor(2^32 * abs(sin(i + 1))) per RFC 1321 Section 3.4
const T: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee, 0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be, 0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa, 0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed, 0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c, 0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05, 0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039, 0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1, 0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

/// Per-round left rotations, one row per round group
const S: [[u32; 4]; 4] = [[7, 12, 17, 22], [5, 9, 14, 20], [4, 11, 16, 23], [6, 10, 15, 21]];

/// MD5 compression state.
#[derive(RampartZero)]
pub(crate) struct Md5State {
    // Chaining values A, B, C, D
    h: [u32; 4],
    // Message words X[0..15] (little-endian)
    x: [u32; 16],
    // Working variables
    wv: [u32; 4],
}

impl Md5State {
    pub(crate) fn new(iv: &[u32; 4]) -> Self {
        Self {
            h: *iv,
            x: [0; 16],
            wv: [0; 4],
        }
    }

    pub(crate) fn restart(&mut self, iv: &[u32; 4]) {
        self.fast_zeroize();
        self.h = *iv;
    }

    /// Four rounds of 16 operations per RFC 1321 Section 3.4
    pub(crate) fn compress(&mut self, block: &[u8; 64]) {
        load_u32_le(block, &mut self.x);
        self.wv = self.h;

        for i in 0..64 {
            let [a, b, c, d] = self.wv;

            let (f, k) = match i / 16 {
                0 => ((b & c) | (!b & d), i),
                1 => ((d & b) | (!d & c), (5 * i + 1) % 16),
                2 => (b ^ c ^ d, (3 * i + 5) % 16),
                _ => (c ^ (b | !d), (7 * i) % 16),
            };

            let rotated = a
                .wrapping_add(f)
                .wrapping_add(T[i])
                .wrapping_add(self.x[k])
                .rotate_left(S[i / 16][i % 4]);

            self.wv = [d, b.wrapping_add(rotated), b, c];
        }

        for (h, v) in self.h.iter_mut().zip(self.wv.iter()) {
            *h = h.wrapping_add(*v);
        }

        self.x.fast_zeroize();
        self.wv.fast_zeroize();
    }

    /// Writes A, B, C, D low-order byte first.
    pub(crate) fn export(&self, out: &mut [u8]) {
        store_u32_le(&self.h, out);
    }
}

md_engine! {
    /// Streaming MD5.
    ///
    /// MD5 is broken for collision resistance; it is kept for legacy
    /// checksums and HMAC-MD5 interoperability.
    ///
    /// ```
    /// use rampart_hash::{HashEngine, HexCase, Md5};
    ///
    /// let mut md5 = Md5::new();
    /// md5.add(b"abc");
    /// md5.calculate()?;
    ///
    /// assert_eq!(md5.get_hash_hex(HexCase::Lower)?, "900150983cd24fb0d6963f7d28e17f72");
    /// # Ok::<(), rampart_hash::CryptoError>(())
    /// ```
    Md5 {
        state: Md5State,
        iv: IV,
        block: 64,
        hash: 16,
        length: BitLength64 => to_le_bytes,
    }
}
