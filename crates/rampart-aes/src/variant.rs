// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Key-size markers.

mod sealed {
    pub trait Sealed {}
}

/// An AES key size.
///
/// Implemented only by [`Aes128`], [`Aes192`] and [`Aes256`].
pub trait AesVariant: sealed::Sealed {
    /// Key length in bytes (Nk * 4).
    const KEY_LEN: usize;

    /// Number of rounds (Nr).
    const ROUNDS: usize;

    /// Fixed-size key type, `[u8; KEY_LEN]`.
    type Key: AsRef<[u8]>;
}

/// AES-128: 16-byte key, 10 rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aes128;

/// AES-192: 24-byte key, 12 rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aes192;

/// AES-256: 32-byte key, 14 rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aes256;

macro_rules! impl_variant {
    ($ty:ty, $key_len:expr, $rounds:expr) => {
        impl sealed::Sealed for $ty {}

        impl AesVariant for $ty {
            const KEY_LEN: usize = $key_len;
            const ROUNDS: usize = $rounds;
            type Key = [u8; $key_len];
        }
    };
}

impl_variant!(Aes128, 16, 10);
impl_variant!(Aes192, 24, 12);
impl_variant!(Aes256, 32, 14);
