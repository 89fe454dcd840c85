// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Streaming digests, HMAC and AES-CBC that wipe what they touch.</em></p>
//!
//! ---
//!
//! Rampart bundles a small set of classic primitives behind one streaming
//! interface. Every engine buffers input in fixed-size blocks, produces its
//! result on `calculate`, and overwrites its working state when it is done
//! or dropped.
//!
//! # Features
//!
//! - **Hashes**: MD5, SHA-1, SHA-224, SHA-256, SHA-384, SHA-512, SHA-512/224,
//!   SHA-512/256
//! - **HMAC** over any of the above
//! - **AES-128/192/256 in CBC mode** with PKCS#7 or RFC 2246 padding
//! - **`SecretBuffer`** for owned key material
//! - **`no_std`** with `alloc`
//!
//! # Quick Start
//!
//! ```rust
//! use rampart::aes::{Aes128Decrypt, Aes128Encrypt};
//! use rampart::hash::{HashEngine, HexCase, Hmac, Sha256};
//! use rampart::secret::SecretBuffer;
//!
//! // Streaming digest
//! let mut sha = Sha256::new();
//! sha.add(b"ab");
//! sha.add(b"c");
//! sha.calculate()?;
//! assert_eq!(
//!     sha.get_hash_hex(HexCase::Lower)?,
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//!
//! // HMAC
//! let mut mac = Hmac::<Sha256>::new(b"key")?;
//! mac.add(b"The quick brown fox jumps over the lazy dog");
//! mac.calculate()?;
//! assert_eq!(mac.hash()?.len(), 32);
//!
//! // AES-CBC
//! let key = [0x2b; 16];
//!
//! let mut enc = Aes128Encrypt::new();
//! enc.set_key(&key);
//! enc.set_iv(&[0u8; 16]);
//! enc.add(b"attack at dawn")?;
//! enc.calculate()?;
//!
//! let mut dec = Aes128Decrypt::new();
//! dec.set_key(&key);
//! dec.set_iv(&[0u8; 16]);
//! dec.add(enc.get_data()?)?;
//! dec.calculate()?;
//! assert_eq!(dec.get_data()?, b"attack at dawn");
//!
//! // Owned key material, wiped on free and on drop
//! let mut secret = SecretBuffer::create(32);
//! secret.as_mut_slice().fill(0x42);
//! secret.free();
//! assert!(secret.is_empty());
//! # Ok::<(), rampart::CryptoError>(())
//! ```
//!
//! # Lifecycle
//!
//! All engines follow the same cycle: `add` any number of times, then
//! `calculate`, then read the result. Reading before `calculate` returns
//! [`CryptoError::NotYetComputed`]. Calling `add` on a finished engine starts
//! a new message.
//!
//! AES streams additionally need `set_key` and `set_iv` before every
//! message, because `calculate` wipes the round keys and chaining value on
//! success and on failure alike. `reset` wipes them too.
//!
//! # License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]

pub use rampart_aes as aes;
pub use rampart_hash as hash;
pub use rampart_secret as secret;
pub use rampart_util as util;
pub use rampart_zero as zero;

pub use rampart_core::{
    BitLength64, BitLength128, BlockAccumulator, CryptoError, HashEngine, HexCase,
};
