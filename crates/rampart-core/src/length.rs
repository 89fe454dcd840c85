// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message length counters, kept in bits.

use rampart_zero::RampartZero;

/// 64-bit message length in bits, wrapping modulo 2^64.
///
/// Used by MD5, SHA-1 and SHA-224/256.
#[derive(RampartZero, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BitLength64 {
    bits: u64,
}

impl BitLength64 {
    /// Counts `n` more message bytes.
    #[inline(always)]
    pub fn add_bytes(&mut self, n: usize) {
        self.bits = self.bits.wrapping_add((n as u64).wrapping_shl(3));
    }

    /// Current length in bits.
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Big-endian length field (SHA family).
    pub fn to_be_bytes(&self) -> [u8; 8] {
        self.bits.to_be_bytes()
    }

    /// Little-endian length field (MD5).
    pub fn to_le_bytes(&self) -> [u8; 8] {
        self.bits.to_le_bytes()
    }
}

/// 128-bit message length in bits as two 64-bit words with carry.
///
/// Used by the SHA-384/512 family.
///
/// ```
/// use rampart_core::BitLength128;
///
/// let mut len = BitLength128::default();
/// len.add_bytes(usize::MAX);
/// len.add_bytes(1);
///
/// // (2^64 - 1 + 1) bytes = 2^67 bits
/// assert_eq!(len.words(), (8, 0));
/// ```
#[derive(RampartZero, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BitLength128 {
    high: u64,
    low: u64,
}

impl BitLength128 {
    /// Counts `n` more message bytes.
    ///
    /// The low word receives `n << 3`; the three bits shifted out of `n` and
    /// any carry out of the low word go to the high word.
    #[inline(always)]
    pub fn add_bytes(&mut self, n: usize) {
        let n = n as u64;
        let (low, carry) = self.low.overflowing_add(n << 3);

        self.low = low;
        self.high = self
            .high
            .wrapping_add(n >> 61)
            .wrapping_add(carry as u64);
    }

    /// `(high, low)` words.
    pub fn words(&self) -> (u64, u64) {
        (self.high, self.low)
    }

    /// Big-endian 16-byte length field.
    pub fn to_be_bytes(&self) -> [u8; 16] {
        let mut out = [0u8; 16];
        out[..8].copy_from_slice(&self.high.to_be_bytes());
        out[8..].copy_from_slice(&self.low.to_be_bytes());
        out
    }
}
