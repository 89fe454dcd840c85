// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-1 per FIPS 180-4 Section 6.1

use rampart_core::BitLength64;
use rampart_util::{load_u32_be, store_u32_be};
use rampart_zero::{FastZeroizable, RampartZero};

use crate::engine::md_engine;

const IV: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// Round constants, one per group of 20 rounds
const K: [u32; 4] = [0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xca62c1d6];

#[derive(RampartZero)]
pub(crate) struct Sha1State {
    h: [u32; 5],
    // Message schedule W[0..79]
    w: [u32; 80],
    wv: [u32; 5],
}

impl Sha1State {
    pub(crate) fn new(iv: &[u32; 5]) -> Self {
        Self {
            h: *iv,
            w: [0; 80],
            wv: [0; 5],
        }
    }

    pub(crate) fn restart(&mut self, iv: &[u32; 5]) {
        self.fast_zeroize();
        self.h = *iv;
    }

    pub(crate) fn compress(&mut self, block: &[u8; 64]) {
        load_u32_be(block, &mut self.w[..16]);
        for t in 16..80 {
            self.w[t] = (self.w[t - 3] ^ self.w[t - 8] ^ self.w[t - 14] ^ self.w[t - 16]).rotate_left(1);
        }

        self.wv = self.h;

        for t in 0..80 {
            let [a, b, c, d, e] = self.wv;

            let f = match t / 20 {
                0 => (b & c) | (!b & d),
                2 => (b & c) | (b & d) | (c & d),
                _ => b ^ c ^ d,
            };

            let temp = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(K[t / 20])
                .wrapping_add(self.w[t]);

            self.wv = [temp, a, b.rotate_left(30), c, d];
        }

        for (h, v) in self.h.iter_mut().zip(self.wv.iter()) {
            *h = h.wrapping_add(*v);
        }

        self.w.fast_zeroize();
        self.wv.fast_zeroize();
    }

    pub(crate) fn export(&self, out: &mut [u8]) {
        store_u32_be(&self.h, out);
    }
}

md_engine! {
    /// Streaming SHA-1 (20-byte digest).
    ///
    /// SHA-1 collisions are practical; prefer SHA-256 for anything new.
    Sha1 {
        state: Sha1State,
        iv: IV,
        block: 64,
        hash: 20,
        length: BitLength64 => to_be_bytes,
    }
}
