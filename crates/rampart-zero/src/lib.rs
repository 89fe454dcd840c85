// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # rampart-zero
//!
//! Zeroization traits, the drop sentinel and `#[derive(RampartZero)]`.
//!
//! Re-exports [`rampart_zero_core`] and [`rampart_zero_derive`].
//!
//! ```rust
//! use rampart_zero::{AssertZeroizeOnDrop, RampartZero, ZeroizeOnDropSentinel};
//!
//! #[derive(RampartZero)]
//! #[fast_zeroize(drop)]
//! struct Pending {
//!     block: [u8; 64],
//!     filled: usize,
//!     __sentinel: ZeroizeOnDropSentinel,
//! }
//!
//! let pending = Pending {
//!     block: [0x36; 64],
//!     filled: 64,
//!     __sentinel: ZeroizeOnDropSentinel::default(),
//! };
//!
//! pending.assert_zeroize_on_drop();
//! ```

#![cfg_attr(not(test), no_std)]

pub use rampart_zero_core::*;
pub use rampart_zero_derive::*;
