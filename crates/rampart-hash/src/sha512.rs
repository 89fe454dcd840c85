// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-384, SHA-512, SHA-512/224 and SHA-512/256.
//!
//! All four share the SHA-512 compression function (RFC 6234 Section 6.4)
//! and differ only in H(0) and output truncation (FIPS 180-4 Section 5.3).

use rampart_core::BitLength128;
use rampart_util::{load_u64_be, store_u64_be};
use rampart_zero::{FastZeroizable, RampartZero};

use crate::engine::md_engine;

/// SHA-512 constants K per RFC 6234 Section 5.2
const K512: [u64; 80] = [
    0x428a2f98d728ae22, 0x7137449123ef65cd, 0xb5c0fbcfec4d3b2f, 0xe9b5dba58189dbbc,
    0x3956c25bf348b538, 0x59f111f1b605d019, 0x923f82a4af194f9b, 0xab1c5ed5da6d8118,
    0xd807aa98a3030242, 0x12835b0145706fbe, 0x243185be4ee4b28c, 0x550c7dc3d5ffb4e2,
    0x72be5d74f27b896f, 0x80deb1fe3b1696b1, 0x9bdc06a725c71235, 0xc19bf174cf692694,
    0xe49b69c19ef14ad2, 0xefbe4786384f25e3, 0x0fc19dc68b8cd5b5, 0x240ca1cc77ac9c65,
    0x2de92c6f592b0275, 0x4a7484aa6ea6e483, 0x5cb0a9dcbd41fbd4, 0x76f988da831153b5,
    0x983e5152ee66dfab, 0xa831c66d2db43210, 0xb00327c898fb213f, 0xbf597fc7beef0ee4,
    0xc6e00bf33da88fc2, 0xd5a79147930aa725, 0x06ca6351e003826f, 0x142929670a0e6e70,
    0x27b70a8546d22ffc, 0x2e1b21385c26c926, 0x4d2c6dfc5ac42aed, 0x53380d139d95b3df,
    0x650a73548baf63de, 0x766a0abb3c77b2a8, 0x81c2c92e47edaee6, 0x92722c851482353b,
    0xa2bfe8a14cf10364, 0xa81a664bbc423001, 0xc24b8b70d0f89791, 0xc76c51a30654be30,
    0xd192e819d6ef5218, 0xd69906245565a910, 0xf40e35855771202a, 0x106aa07032bbd1b8,
    0x19a4c116b8d2d0c8, 0x1e376c085141ab53, 0x2748774cdf8eeb99, 0x34b0bcb5e19b48a8,
    0x391c0cb3c5c95a63, 0x4ed8aa4ae3418acb, 0x5b9cca4f7763e373, 0x682e6ff3d6b2b8a3,
    0x748f82ee5defb2fc, 0x78a5636f43172f60, 0x84c87814a1f0ab72, 0x8cc702081a6439ec,
    0x90befffa23631e28, 0xa4506cebde82bde9, 0xbef9a3f7b2c67915, 0xc67178f2e372532b,
    0xca273eceea26619c, 0xd186b8c721c0c207, 0xeada7dd6cde0eb1e, 0xf57d4f7fee6ed178,
    0x06f067aa72176fba, 0x0a637dc5a2c898a6, 0x113f9804bef90dae, 0x1b710b35131c471b,
    0x28db77f523047d84, 0x32caab7b40c72493, 0x3c9ebe0a15c9bebc, 0x431d67c49c100d4c,
    0x4cc5d4becb3e42b6, 0x597f299cfc657e2a, 0x5fcb6fab3ad6faec, 0x6c44198c4a475817,
];

/// H(0) for SHA-512 per RFC 6234 Section 6.4.1
const H0_512: [u64; 8] = [
    0x6a09e667f3bcc908, 0xbb67ae8584caa73b, 0x3c6ef372fe94f82b, 0xa54ff53a5f1d36f1,
    0x510e527fade682d1, 0x9b05688c2b3e6c1f, 0x1f83d9abfb41bd6b, 0x5be0cd19137e2179,
];

/// H(0) for SHA-384 per RFC 6234 Section 6.3
const H0_384: [u64; 8] = [
    0xcbbb9d5dc1059ed8, 0x629a292a367cd507, 0x9159015a3070dd17, 0x152fecd8f70e5939,
    0x67332667ffc00b31, 0x8eb44a8768581511, 0xdb0c2e0d64f98fa7, 0x47b5481dbefa4fa4,
];

/// H(0) for SHA-512/224 per FIPS 180-4 Section 5.3.6.1
const H0_512_224: [u64; 8] = [
    0x8c3d37c819544da2, 0x73e1996689dcd4d6, 0x1dfab7ae32ff9c82, 0x679dd514582f9fcf,
    0x0f6d2b697bd44da8, 0x77e36f7304c48942, 0x3f9d85a86a1d36c8, 0x1112e6ad91d692a1,
];

/// H(0) for SHA-512/256 per FIPS 180-4 Section 5.3.6.2
const H0_512_256: [u64; 8] = [
    0x22312194fc2bf72c, 0x9f555fa3c84c64c2, 0x2393b86b6f53b151, 0x963877195940eabd,
    0x96283ee2a88effe3, 0xbe5e1e2553863992, 0x2b0199fc2c85b8aa, 0x0eb72ddc81c52ca2,
];

#[inline(always)]
fn bsig0(x: u64) -> u64 {
    x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39)
}

#[inline(always)]
fn bsig1(x: u64) -> u64 {
    x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41)
}

#[inline(always)]
fn ssig0(x: u64) -> u64 {
    x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7)
}

#[inline(always)]
fn ssig1(x: u64) -> u64 {
    x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6)
}

/// Compression state shared by the SHA-512 family.
#[derive(RampartZero)]
pub(crate) struct Sha512State {
    h: [u64; 8],
    w: [u64; 80],
    wv: [u64; 8],
    // Full big-endian export before truncation
    out: [u8; 64],
}

impl Sha512State {
    pub(crate) fn new(iv: &[u64; 8]) -> Self {
        Self {
            h: *iv,
            w: [0; 80],
            wv: [0; 8],
            out: [0; 64],
        }
    }

    pub(crate) fn restart(&mut self, iv: &[u64; 8]) {
        self.fast_zeroize();
        self.h = *iv;
    }

    /// Per RFC 6234 Section 6.4.2
    pub(crate) fn compress(&mut self, block: &[u8; 128]) {
        load_u64_be(block, &mut self.w[..16]);

        for t in 16..80 {
            self.w[t] = ssig1(self.w[t - 2])
                .wrapping_add(self.w[t - 7])
                .wrapping_add(ssig0(self.w[t - 15]))
                .wrapping_add(self.w[t - 16]);
        }

        self.wv = self.h;

        for t in 0..80 {
            let [a, b, c, d, e, f, g, h] = self.wv;

            let t1 = h
                .wrapping_add(bsig1(e))
                .wrapping_add((e & f) ^ (!e & g))
                .wrapping_add(K512[t])
                .wrapping_add(self.w[t]);
            let t2 = bsig0(a).wrapping_add((a & b) ^ (a & c) ^ (b & c));

            self.wv = [t1.wrapping_add(t2), a, b, c, d.wrapping_add(t1), e, f, g];
        }

        for (h, v) in self.h.iter_mut().zip(self.wv.iter()) {
            *h = h.wrapping_add(*v);
        }

        self.w.fast_zeroize();
        self.wv.fast_zeroize();
    }

    /// Copies the leftmost `out.len()` bytes of the big-endian state.
    ///
    /// Truncation is byte-wise, so SHA-512/224 ends halfway through H3.
    pub(crate) fn export(&mut self, out: &mut [u8]) {
        store_u64_be(&self.h, &mut self.out);
        let n = core::cmp::min(out.len(), self.out.len());
        out[..n].copy_from_slice(&self.out[..n]);
        self.out.fast_zeroize();
    }
}

md_engine! {
    /// Streaming SHA-512 (64-byte digest).
    Sha512 {
        state: Sha512State,
        iv: H0_512,
        block: 128,
        hash: 64,
        length: BitLength128 => to_be_bytes,
    }
}

md_engine! {
    /// Streaming SHA-384 (48-byte digest).
    Sha384 {
        state: Sha512State,
        iv: H0_384,
        block: 128,
        hash: 48,
        length: BitLength128 => to_be_bytes,
    }
}

md_engine! {
    /// Streaming SHA-512/224 (28-byte digest).
    #[allow(non_camel_case_types)]
    Sha512_224 {
        state: Sha512State,
        iv: H0_512_224,
        block: 128,
        hash: 28,
        length: BitLength128 => to_be_bytes,
    }
}

md_engine! {
    /// Streaming SHA-512/256 (32-byte digest).
    #[allow(non_camel_case_types)]
    Sha512_256 {
        state: Sha512State,
        iv: H0_512_256,
        block: 128,
        hash: 32,
        length: BitLength128 => to_be_bytes,
    }
}
