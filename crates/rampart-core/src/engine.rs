// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming digest interface.

use alloc::string::String;
use alloc::vec::Vec;

use rampart_util::{HexCase, encode_hex};
use rampart_zero::{FastZeroizable, ZeroizationProbe};

use crate::error::CryptoError;

/// A streaming hash engine.
///
/// Lifecycle: `add` any number of times, `calculate` once, then read the
/// digest. Calling `add` on a finalized engine restarts it from the initial
/// vector before absorbing the new bytes. Calling `calculate` twice in a row
/// restarts and yields the digest of the empty message.
pub trait HashEngine: Default + FastZeroizable + ZeroizationProbe {
    /// Input block size in bytes.
    const BLOCK_LEN: usize;

    /// Digest size in bytes.
    const HASH_LEN: usize;

    /// Restarts from the initial vector, wiping buffered input and any digest.
    fn reset(&mut self);

    /// Absorbs `data`.
    fn add(&mut self, data: &[u8]);

    /// Pads, processes the final block(s) and stores the digest.
    ///
    /// # Errors
    ///
    /// [`CryptoError::InternalInvariantViolation`] if input remains buffered
    /// after padding.
    fn calculate(&mut self) -> Result<(), CryptoError>;

    /// `true` once `calculate` has completed and no `add` has followed.
    fn is_calculated(&self) -> bool;

    /// Borrowed digest bytes.
    ///
    /// # Errors
    ///
    /// [`CryptoError::NotYetComputed`] before `calculate`.
    fn hash(&self) -> Result<&[u8], CryptoError>;

    /// Copies the digest into `out[..HASH_LEN]`.
    ///
    /// # Errors
    ///
    /// [`CryptoError::NotYetComputed`] before `calculate`,
    /// [`CryptoError::LengthMismatch`] if `out` is shorter than the digest.
    fn get_hash(&self, out: &mut [u8]) -> Result<(), CryptoError> {
        let hash = self.hash()?;
        let dst = out
            .get_mut(..hash.len())
            .ok_or(CryptoError::LengthMismatch)?;

        dst.copy_from_slice(hash);
        Ok(())
    }

    /// Digest as an owned vector.
    fn get_hash_vec(&self) -> Result<Vec<u8>, CryptoError> {
        Ok(self.hash()?.to_vec())
    }

    /// Digest rendered as hex, 2 characters per byte.
    fn get_hash_hex(&self, case: HexCase) -> Result<String, CryptoError> {
        Ok(encode_hex(self.hash()?, case))
    }
}
