// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming AES (FIPS-197) in CBC mode.
//!
//! - Key sizes: [`Aes128`], [`Aes192`], [`Aes256`]
//! - Streams: [`CbcEncrypt`] and [`CbcDecrypt`], with aliases such as
//!   [`Aes256Encrypt`]
//! - Padding: PKCS#7 (default), RFC 2246 with optional extra blocks, or none
//!
//! Each message needs `set_key` and `set_iv`; `calculate` wipes the round
//! keys and chaining value whether it succeeds or not, and so does `reset`.
//! Plaintext and ciphertext buffers are wiped on `reset` and on drop.
//!
//! ## Example
//!
//! ```
//! use rampart_aes::{Aes256Decrypt, Aes256Encrypt};
//!
//! let key = [0x42u8; 32];
//! let iv = [0x24u8; 16];
//!
//! let mut enc = Aes256Encrypt::new();
//! enc.set_key(&key);
//! enc.set_iv(&iv);
//! enc.add(b"secret ")?;
//! enc.add(b"message")?;
//! enc.calculate()?;
//!
//! let mut dec = Aes256Decrypt::new();
//! dec.set_key(&key);
//! dec.set_iv(&iv);
//! dec.add(enc.get_data()?)?;
//! dec.calculate()?;
//!
//! assert_eq!(dec.get_data()?, b"secret message");
//! # Ok::<(), rampart_aes::CryptoError>(())
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod cbc;
mod consts;
mod key_schedule;
mod output;
mod padding;
mod variant;

pub use cbc::{
    Aes128Decrypt, Aes128Encrypt, Aes192Decrypt, Aes192Encrypt, Aes256Decrypt, Aes256Encrypt,
    CbcDecrypt, CbcEncrypt,
};
pub use consts::BLOCK_LEN;
pub use padding::{Padding, PaddingScheme};
pub use rampart_core::CryptoError;
pub use variant::{Aes128, Aes192, Aes256, AesVariant};
