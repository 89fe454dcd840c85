// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Core traits for systematic zeroization.

use super::zeroize_on_drop_sentinel::ZeroizeOnDropSentinel;

/// Runtime check that a value has been zeroized.
///
/// # Example
///
/// ```rust
/// use rampart_zero_core::{FastZeroizable, ZeroizationProbe};
///
/// let mut chaining = [0x67452301u32, 0xEFCDAB89, 0x98BADCFE, 0x10325476];
/// assert!(!chaining.is_zeroized());
///
/// chaining.fast_zeroize();
/// assert!(chaining.is_zeroized());
/// ```
pub trait ZeroizationProbe {
    /// Returns `true` if every byte of the value is zero.
    fn is_zeroized(&self) -> bool;
}

/// Types that carry a [`ZeroizeOnDropSentinel`] and can prove they wipe on drop.
///
/// Usually derived with `#[derive(RampartZero)]`.
pub trait AssertZeroizeOnDrop {
    /// Clones the internal sentinel so its state outlives the value.
    fn clone_sentinel(&self) -> ZeroizeOnDropSentinel;

    /// Drops `self` and asserts that zeroization ran.
    ///
    /// # Panics
    ///
    /// Panics if the value was dropped without being zeroized.
    fn assert_zeroize_on_drop(self);
}

/// Compile-time zeroization strategy for a type.
///
/// Not dyn-compatible; use [`FastZeroizable`] for trait objects.
pub trait ZeroizeMetadata {
    /// `true` when all-zero is a valid bit pattern and the value may be wiped
    /// with a single memset.
    const CAN_BE_BULK_ZEROIZED: bool;
}

/// Types that can be zeroized in place.
///
/// This trait is dyn-compatible so heterogeneous fields can be wiped through
/// `&mut dyn FastZeroizable`.
pub trait FastZeroizable {
    /// Overwrites all sensitive data with zeros.
    fn fast_zeroize(&mut self);
}

/// Combined trait: metadata plus runtime zeroization.
pub trait FastZeroize: ZeroizeMetadata + FastZeroizable {}

impl<T: ZeroizeMetadata + FastZeroizable> FastZeroize for T {}
