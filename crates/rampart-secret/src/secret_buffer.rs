// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use rampart_zero::{FastZeroizable, RampartZero, ZeroizeOnDropSentinel};

use crate::region::Region;

/// Exclusively owned key material, wiped before every release.
///
/// - **No `Clone`**: the bytes live in exactly one place
/// - **Redacted `Debug`**: only the length is printed
/// - **Wipe on drop**: the generated `Drop` runs the same volatile wipe as
///   [`free`](SecretBuffer::free)
///
/// ```rust
/// use rampart_secret::SecretBuffer;
///
/// let mut iv = SecretBuffer::create(16);
/// iv.as_mut_slice()[0] = 0xff;
///
/// iv.recreate(24);
/// assert_eq!(iv.as_slice(), &[0u8; 24]);
/// ```
#[derive(RampartZero)]
#[fast_zeroize(drop)]
pub struct SecretBuffer {
    region: Region,
    __sentinel: ZeroizeOnDropSentinel,
}

impl SecretBuffer {
    /// Creates an empty buffer that owns no memory.
    pub fn new() -> Self {
        Self {
            region: Region::empty(),
            __sentinel: ZeroizeOnDropSentinel::default(),
        }
    }

    /// Allocates `size` zeroed bytes.
    pub fn create(size: usize) -> Self {
        Self {
            region: Region::zeroed(size),
            __sentinel: ZeroizeOnDropSentinel::default(),
        }
    }

    /// Wipes and releases the current region, then allocates `size` zeroed
    /// bytes in its place.
    pub fn recreate(&mut self, size: usize) {
        self.free();
        self.region = Region::zeroed(size);
    }

    /// Wipes every byte with a volatile store and releases the memory.
    ///
    /// Calling it again, or on a buffer that never held memory, does nothing.
    pub fn free(&mut self) {
        self.region.fast_zeroize();
        // The wiped region is dropped here
        self.region = Region::empty();
    }

    /// Number of bytes held.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.region.as_slice().len()
    }

    /// `true` when no memory is held.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read access to the bytes.
    #[inline(always)]
    pub fn as_slice(&self) -> &[u8] {
        self.region.as_slice()
    }

    /// Write access to the bytes. The length cannot change through it.
    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        self.region.as_mut_slice()
    }

    #[cfg(test)]
    pub(crate) fn region(&self) -> &Region {
        &self.region
    }
}

impl Default for SecretBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SecretBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretBuffer")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
