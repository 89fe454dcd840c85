// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Building blocks shared by the rampart hash engines and block cipher.
//!
//! - [`BlockAccumulator`]: fixed-size block buffering with a caller-supplied
//!   block transform, including Merkle-Damgard finalization
//! - [`BitLength64`] / [`BitLength128`]: message length counters in bits
//! - [`HashEngine`]: the streaming interface every digest implements
//! - [`CryptoError`]: the single error type of the workspace

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod accumulator;
mod engine;
mod error;
mod length;

pub use accumulator::BlockAccumulator;
pub use engine::HashEngine;
pub use error::CryptoError;
pub use length::{BitLength64, BitLength128};
pub use rampart_util::HexCase;
