// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors reported by hash engines, HMAC and the AES-CBC streams.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CryptoError {
    /// Result requested before `calculate` completed.
    #[error("result requested before calculate")]
    NotYetComputed,

    /// AES `add`/`calculate` without both key and IV set.
    #[error("key and IV must be set before processing data")]
    MissingKeyMaterial,

    /// Decrypted padding is malformed, or too few bytes to hold it.
    #[error("invalid padding")]
    InvalidPadding,

    /// Data is not a multiple of the block size, or an output slice is too short.
    #[error("length mismatch")]
    LengthMismatch,

    /// More than 15 extra padding blocks requested.
    #[error("extra padding blocks must be in 0..=15")]
    InvalidPaddingConfig,

    /// Bytes left buffered after finalization. Indicates a bug in this crate.
    #[error("internal invariant violated: residual buffered bytes after finalization")]
    InternalInvariantViolation,
}
