// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # rampart-zero-core
//!
//! Zeroization traits and the drop sentinel used by every rampart state type.
//!
//! Hash engines, MAC states, cipher schedules and secret buffers implement
//! [`FastZeroizable`] and wipe themselves on drop. [`ZeroizeOnDropSentinel`]
//! lets tests observe that the wipe actually ran.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

pub mod assert;
pub mod collections;

mod primitives;
mod traits;
mod zeroize_on_drop_sentinel;

pub use assert::assert_zeroize_on_drop;
pub use traits::{AssertZeroizeOnDrop, FastZeroizable, FastZeroize, ZeroizationProbe, ZeroizeMetadata};
pub use zeroize_on_drop_sentinel::ZeroizeOnDropSentinel;
