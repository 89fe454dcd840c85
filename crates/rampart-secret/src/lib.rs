// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Owned heap storage for key material.
//!
//! [`SecretBuffer`] holds a fixed-size zeroed region. Every way the region
//! can go away (explicit [`free`](SecretBuffer::free), [`recreate`](SecretBuffer::recreate)
//! or drop) overwrites each byte with a volatile store before the memory is
//! returned to the allocator.
//!
//! ```rust
//! use rampart_secret::SecretBuffer;
//!
//! let mut key = SecretBuffer::create(32);
//! key.as_mut_slice().copy_from_slice(&[0x42; 32]);
//! assert_eq!(key.len(), 32);
//!
//! key.free();
//! assert!(key.is_empty());
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod region;
mod secret_buffer;

pub use secret_buffer::SecretBuffer;
