// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-224 and SHA-256 per RFC 6234 Section 6.2

use rampart_core::BitLength64;
use rampart_util::{load_u32_be, store_u32_be};
use rampart_zero::{FastZeroizable, RampartZero};

use crate::engine::md_engine;

/// SHA-256 constants K per RFC 6234 Section 5.1
const K256: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

/// Initial hash values H(0) for SHA-256 per RFC 6234 Section 6.2.1
const H0_256: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// Initial hash values H(0) for SHA-224 per RFC 6234 Section 6.1
const H0_224: [u32; 8] = [
    0xc1059ed8, 0x367cd507, 0x3070dd17, 0xf70e5939, 0xffc00b31, 0x68581511, 0x64f98fa7, 0xbefa4fa4,
];

#[inline(always)]
fn bsig0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
fn bsig1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
fn ssig0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
fn ssig1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Compression state shared by SHA-224 and SHA-256.
#[derive(RampartZero)]
pub(crate) struct Sha256State {
    // Hash state H(i) per RFC 6234 Section 6.2.1
    h: [u32; 8],

    // Message schedule W[0..63]
    w: [u32; 64],

    // Working variables per RFC 6234 Section 6.2.2
    wv: [u32; 8],
}

impl Sha256State {
    pub(crate) fn new(iv: &[u32; 8]) -> Self {
        Self {
            h: *iv,
            w: [0; 64],
            wv: [0; 8],
        }
    }

    pub(crate) fn restart(&mut self, iv: &[u32; 8]) {
        self.fast_zeroize();
        self.h = *iv;
    }

    /// Per RFC 6234 Section 6.2.2
    pub(crate) fn compress(&mut self, block: &[u8; 64]) {
        // W[0..15] from block (big-endian)
        load_u32_be(block, &mut self.w[..16]);

        // W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
        for t in 16..64 {
            self.w[t] = ssig1(self.w[t - 2])
                .wrapping_add(self.w[t - 7])
                .wrapping_add(ssig0(self.w[t - 15]))
                .wrapping_add(self.w[t - 16]);
        }

        self.wv = self.h;

        for t in 0..64 {
            let [a, b, c, d, e, f, g, h] = self.wv;

            // T1 = h + Σ1(e) + CH(e,f,g) + K[t] + W[t]
            let t1 = h
                .wrapping_add(bsig1(e))
                .wrapping_add((e & f) ^ (!e & g))
                .wrapping_add(K256[t])
                .wrapping_add(self.w[t]);

            // T2 = Σ0(a) + MAJ(a,b,c)
            let t2 = bsig0(a).wrapping_add((a & b) ^ (a & c) ^ (b & c));

            self.wv = [t1.wrapping_add(t2), a, b, c, d.wrapping_add(t1), e, f, g];
        }

        for (h, v) in self.h.iter_mut().zip(self.wv.iter()) {
            *h = h.wrapping_add(*v);
        }

        self.w.fast_zeroize();
        self.wv.fast_zeroize();
    }

    /// Writes as many big-endian words as fit in `out`; SHA-224 stops after H6.
    pub(crate) fn export(&self, out: &mut [u8]) {
        store_u32_be(&self.h, out);
    }
}

md_engine! {
    /// Streaming SHA-256 (32-byte digest).
    ///
    /// ```
    /// use rampart_hash::{HashEngine, Sha256};
    ///
    /// let mut sha = Sha256::new();
    /// sha.add(b"a");
    /// sha.add(b"bc");
    /// sha.calculate()?;
    ///
    /// assert_eq!(sha.digest()?[..4], [0xba, 0x78, 0x16, 0xbf]);
    /// # Ok::<(), rampart_hash::CryptoError>(())
    /// ```
    Sha256 {
        state: Sha256State,
        iv: H0_256,
        block: 64,
        hash: 32,
        length: BitLength64 => to_be_bytes,
    }
}

md_engine! {
    /// Streaming SHA-224 (28-byte digest).
    Sha224 {
        state: Sha256State,
        iv: H0_224,
        block: 64,
        hash: 28,
        length: BitLength64 => to_be_bytes,
    }
}
