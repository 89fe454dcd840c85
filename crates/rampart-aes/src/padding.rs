// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Block padding schemes.
//!
//! | Scheme   | Pad byte         | Pad length                               |
//! |----------|------------------|------------------------------------------|
//! | PKCS#7   | pad length       | `16 - len % 16`                          |
//! | RFC 2246 | pad length - 1   | `16 - len % 16 + 16 * extra_blocks`      |
//!
//! RFC 2246 (TLS 1.0, Section 6.2.3.2) allows up to 255 bytes of padding to
//! hide the message length; extra blocks are capped at 15 so the final pad
//! byte always fits.

use rampart_core::CryptoError;

use crate::consts::BLOCK_LEN;

/// Which padding rule applies when padding is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddingScheme {
    /// RFC 5652 Section 6.3.
    #[default]
    Pkcs7,
    /// TLS 1.0 block-cipher padding.
    Rfc2246,
}

/// Padding configuration of a CBC stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    enabled: bool,
    scheme: PaddingScheme,
    extra_blocks: u8,
}

impl Default for Padding {
    /// PKCS#7, enabled, no extra blocks.
    fn default() -> Self {
        Self {
            enabled: true,
            scheme: PaddingScheme::Pkcs7,
            extra_blocks: 0,
        }
    }
}

impl Padding {
    /// Largest accepted number of extra RFC 2246 blocks.
    pub const MAX_EXTRA_BLOCKS: usize = 15;

    /// Builds a configuration.
    ///
    /// `extra_blocks` only affects RFC 2246 encryption.
    ///
    /// # Errors
    ///
    /// [`CryptoError::InvalidPaddingConfig`] if `extra_blocks` exceeds
    /// [`MAX_EXTRA_BLOCKS`](Self::MAX_EXTRA_BLOCKS).
    pub fn new(enabled: bool, use_pkcs7: bool, extra_blocks: usize) -> Result<Self, CryptoError> {
        if extra_blocks > Self::MAX_EXTRA_BLOCKS {
            return Err(CryptoError::InvalidPaddingConfig);
        }

        Ok(Self {
            enabled,
            scheme: if use_pkcs7 {
                PaddingScheme::Pkcs7
            } else {
                PaddingScheme::Rfc2246
            },
            extra_blocks: extra_blocks as u8,
        })
    }

    /// No padding: input must be block-aligned.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// `true` when padding is applied on encrypt and stripped on decrypt.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Active scheme.
    pub fn scheme(&self) -> PaddingScheme {
        self.scheme
    }

    /// Extra RFC 2246 blocks.
    pub fn extra_blocks(&self) -> usize {
        self.extra_blocks as usize
    }

    /// Writes the padding for a message whose unprocessed tail is
    /// `tail_len` bytes into `out` and returns its length.
    ///
    /// `out` must hold `BLOCK_LEN * (MAX_EXTRA_BLOCKS + 1)` bytes.
    pub(crate) fn fill(&self, tail_len: usize, out: &mut [u8]) -> usize {
        let base = BLOCK_LEN - tail_len % BLOCK_LEN;

        let (len, byte) = match self.scheme {
            PaddingScheme::Pkcs7 => (base, base as u8),
            PaddingScheme::Rfc2246 => {
                let len = base + BLOCK_LEN * self.extra_blocks();
                (len, (len - 1) as u8)
            }
        };

        out[..len].fill(byte);
        len
    }

    /// Length of `plaintext` once padding is removed.
    ///
    /// # Errors
    ///
    /// [`CryptoError::InvalidPadding`] if the last byte is out of range for
    /// the scheme, or `plaintext` is too short to hold the padding.
    pub(crate) fn unpadded_len(&self, plaintext: &[u8]) -> Result<usize, CryptoError> {
        let last = *plaintext.last().ok_or(CryptoError::InvalidPadding)? as usize;

        let pad_len = match self.scheme {
            PaddingScheme::Pkcs7 => {
                if last == 0 || last > BLOCK_LEN {
                    return Err(CryptoError::InvalidPadding);
                }
                last
            }
            PaddingScheme::Rfc2246 => last + 1,
        };

        plaintext
            .len()
            .checked_sub(pad_len)
            .ok_or(CryptoError::InvalidPadding)
    }
}
