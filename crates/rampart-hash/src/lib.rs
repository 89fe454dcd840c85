// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming message digests and HMAC with zeroized state.
//!
//! | Engine         | Block | Digest |
//! |----------------|-------|--------|
//! | [`Md5`]        | 64    | 16     |
//! | [`Sha1`]       | 64    | 20     |
//! | [`Sha224`]     | 64    | 28     |
//! | [`Sha256`]     | 64    | 32     |
//! | [`Sha384`]     | 128   | 48     |
//! | [`Sha512`]     | 128   | 64     |
//! | [`Sha512_224`] | 128   | 28     |
//! | [`Sha512_256`] | 128   | 32     |
//!
//! Every engine implements [`HashEngine`]; [`Hmac`] wraps any of them.
//! Compression state, buffered input and the length counter are wiped after
//! `calculate` and on drop.
//!
//! ## Example
//!
//! ```
//! use rampart_hash::{HashEngine, HexCase, Sha512};
//!
//! let mut sha = Sha512::new();
//! sha.add(b"abc");
//! sha.calculate()?;
//!
//! let hex = sha.get_hash_hex(HexCase::Upper)?;
//! assert!(hex.starts_with("DDAF35A1"));
//! # Ok::<(), rampart_hash::CryptoError>(())
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod engine;
mod functions;
mod hmac;
mod md5;
mod sha1;
mod sha256;
mod sha512;

pub use functions::{
    md5, md5_hex, sha1, sha1_hex, sha224, sha224_hex, sha256, sha256_hex, sha384, sha384_hex, sha512,
    sha512_224, sha512_224_hex, sha512_256, sha512_256_hex, sha512_hex,
};
pub use hmac::Hmac;
pub use md5::Md5;
pub use rampart_core::{CryptoError, HashEngine, HexCase};
pub use sha1::Sha1;
pub use sha256::{Sha224, Sha256};
pub use sha512::{Sha384, Sha512, Sha512_224, Sha512_256};
