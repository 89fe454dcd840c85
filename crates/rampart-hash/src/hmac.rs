// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC per RFC 2104, generic over any [`HashEngine`].

use alloc::string::String;
use alloc::vec::Vec;

use rampart_core::{CryptoError, HashEngine};
use rampart_util::{HexCase, constant_time_eq, encode_hex};
use rampart_zero::{FastZeroizable, RampartZero, ZeroizeOnDropSentinel};

/// Largest block size among the supported engines (SHA-512 family).
const MAX_BLOCK_LEN: usize = 128;
/// Largest digest size among the supported engines (SHA-512).
const MAX_HASH_LEN: usize = 64;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Streaming HMAC over the engine `E`.
///
/// The key is bound at construction, so message bytes can never reach the
/// engine before the inner pad. After [`calculate`](Self::calculate), the next
/// [`add`](Self::add) restarts the MAC under the same key.
///
/// ```
/// use rampart_hash::{HexCase, Hmac, Sha256};
///
/// let mut mac = Hmac::<Sha256>::new(b"key")?;
/// mac.add(b"The quick brown fox jumps over the lazy dog");
/// mac.calculate()?;
///
/// assert_eq!(
///     mac.get_hash_hex(HexCase::Lower)?,
///     "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
/// );
/// # Ok::<(), rampart_hash::CryptoError>(())
/// ```
#[derive(RampartZero)]
#[fast_zeroize(drop)]
pub struct Hmac<E: HashEngine> {
    engine: E,
    /// K0: the key (or its digest) zero-padded to the engine block size
    key_block: [u8; MAX_BLOCK_LEN],
    /// K0 ⊕ ipad or K0 ⊕ opad, wiped right after use
    pad: [u8; MAX_BLOCK_LEN],
    /// Inner digest H((K0 ⊕ ipad) || text)
    inner: [u8; MAX_HASH_LEN],
    finalized: bool,
    __sentinel: ZeroizeOnDropSentinel,
}

impl<E: HashEngine> core::fmt::Debug for Hmac<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Hmac")
            .field("key_block", &"[REDACTED]")
            .field("finalized", &self.finalized)
            .finish_non_exhaustive()
    }
}

impl<E: HashEngine> Hmac<E> {
    /// Creates a MAC keyed with `key`.
    ///
    /// # Errors
    ///
    /// Propagates engine errors while hashing a key longer than the block.
    pub fn new(key: &[u8]) -> Result<Self, CryptoError> {
        let mut mac = Self {
            engine: E::default(),
            key_block: [0u8; MAX_BLOCK_LEN],
            pad: [0u8; MAX_BLOCK_LEN],
            inner: [0u8; MAX_HASH_LEN],
            finalized: false,
            __sentinel: ZeroizeOnDropSentinel::default(),
        };

        mac.set_hmac(key)?;
        Ok(mac)
    }

    /// Re-keys the MAC and discards any message bytes absorbed so far.
    ///
    /// Keys longer than the engine block are replaced by their digest. The
    /// previous key block is wiped first.
    ///
    /// # Errors
    ///
    /// Propagates engine errors while hashing a long key.
    pub fn set_hmac(&mut self, key: &[u8]) -> Result<(), CryptoError> {
        const { assert!(E::BLOCK_LEN <= MAX_BLOCK_LEN && E::HASH_LEN <= MAX_HASH_LEN) };

        // Prevent stale-bytes window
        self.key_block.fast_zeroize();
        self.finalized = false;

        if key.len() > E::BLOCK_LEN {
            self.engine.reset();
            self.engine.add(key);
            self.engine.calculate()?;
            self.engine.get_hash(&mut self.key_block)?;
        } else {
            self.key_block[..key.len()].copy_from_slice(key);
        }

        self.restart();
        Ok(())
    }

    /// Resets the engine and feeds K0 ⊕ ipad.
    fn restart(&mut self) {
        self.engine.reset();
        self.feed_pad(IPAD);
        self.finalized = false;
    }

    fn feed_pad(&mut self, byte: u8) {
        let n = E::BLOCK_LEN;
        for (p, k) in self.pad[..n].iter_mut().zip(self.key_block[..n].iter()) {
            *p = k ^ byte;
        }
        self.engine.add(&self.pad[..n]);
        self.pad.fast_zeroize();
    }

    /// Absorbs message bytes.
    pub fn add(&mut self, data: &[u8]) {
        if self.finalized {
            self.restart();
        }
        self.engine.add(data);
    }

    /// Completes the inner and outer hashes.
    ///
    /// Calling it again without an intervening [`add`](Self::add) yields the
    /// MAC of the empty message.
    ///
    /// # Errors
    ///
    /// Propagates engine errors; the inner digest is wiped either way.
    pub fn calculate(&mut self) -> Result<(), CryptoError> {
        if self.finalized {
            self.restart();
        }

        let result = self.finish();
        self.inner.fast_zeroize();

        if result.is_err() {
            self.restart();
        }
        result
    }

    fn finish(&mut self) -> Result<(), CryptoError> {
        // Inner: H((K0 ⊕ ipad) || text)
        self.engine.calculate()?;
        self.engine.get_hash(&mut self.inner)?;

        // Outer: H((K0 ⊕ opad) || inner)
        self.engine.reset();
        self.feed_pad(OPAD);
        self.engine.add(&self.inner[..E::HASH_LEN]);
        self.engine.calculate()?;

        self.finalized = true;
        Ok(())
    }

    /// `true` once [`calculate`](Self::calculate) has completed and no
    /// [`add`](Self::add) has followed.
    pub fn is_calculated(&self) -> bool {
        self.finalized
    }

    /// MAC length in bytes; equal to the engine digest length.
    pub fn digest_len(&self) -> usize {
        E::HASH_LEN
    }

    /// Borrowed MAC bytes.
    ///
    /// # Errors
    ///
    /// [`CryptoError::NotYetComputed`] before `calculate`.
    pub fn hash(&self) -> Result<&[u8], CryptoError> {
        if !self.finalized {
            return Err(CryptoError::NotYetComputed);
        }
        self.engine.hash()
    }

    /// Copies the MAC into `out[..digest_len()]`.
    ///
    /// # Errors
    ///
    /// [`CryptoError::NotYetComputed`] before `calculate`,
    /// [`CryptoError::LengthMismatch`] if `out` is too short.
    pub fn get_hash(&self, out: &mut [u8]) -> Result<(), CryptoError> {
        let mac = self.hash()?;
        let dst = out.get_mut(..mac.len()).ok_or(CryptoError::LengthMismatch)?;
        dst.copy_from_slice(mac);
        Ok(())
    }

    /// MAC as an owned vector.
    pub fn get_hash_vec(&self) -> Result<Vec<u8>, CryptoError> {
        Ok(self.hash()?.to_vec())
    }

    /// MAC rendered as hex.
    pub fn get_hash_hex(&self, case: HexCase) -> Result<String, CryptoError> {
        Ok(encode_hex(self.hash()?, case))
    }

    /// Constant-time comparison of the computed MAC against `expected`.
    ///
    /// # Errors
    ///
    /// [`CryptoError::NotYetComputed`] before `calculate`.
    pub fn verify(&self, expected: &[u8]) -> Result<bool, CryptoError> {
        Ok(constant_time_eq(self.hash()?, expected))
    }
}
