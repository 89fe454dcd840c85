// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use rampart_zero::{FastZeroizable, RampartZero, ZeroizeOnDropSentinel};

/// Growable byte buffer that never leaves copies behind.
///
/// `Vec::extend_from_slice` may reallocate and free the old region without
/// wiping it. Here growth copies into a fresh allocation and wipes the old
/// one before it is released.
#[derive(RampartZero)]
#[fast_zeroize(drop)]
pub(crate) struct OutputBuffer {
    bytes: Vec<u8>,
    __sentinel: ZeroizeOnDropSentinel,
}

impl OutputBuffer {
    pub(crate) fn new() -> Self {
        Self {
            bytes: Vec::new(),
            __sentinel: ZeroizeOnDropSentinel::default(),
        }
    }

    #[inline(always)]
    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Capacity rounds up to the next power of two.
    #[cold]
    #[inline(never)]
    fn grow_to(&mut self, min_capacity: usize) {
        let mut grown = Vec::with_capacity(min_capacity.next_power_of_two());
        grown.extend_from_slice(&self.bytes);

        let mut old = core::mem::replace(&mut self.bytes, grown);
        old.fast_zeroize();
    }

    pub(crate) fn extend(&mut self, data: &[u8]) {
        let needed = self.bytes.len() + data.len();
        if self.bytes.capacity() < needed {
            self.grow_to(needed);
        }
        self.bytes.extend_from_slice(data);
    }

    /// Wipes the bytes past `len` and shortens the buffer.
    pub(crate) fn truncate(&mut self, len: usize) {
        if let Some(tail) = self.bytes.get_mut(len..) {
            tail.fast_zeroize();
        }
        self.bytes.truncate(len);
    }

    /// Wipes the whole allocation and empties the buffer.
    pub(crate) fn clear(&mut self) {
        self.bytes.fast_zeroize();
        self.bytes.clear();
    }

    #[cfg(test)]
    pub(crate) fn raw(&self) -> &Vec<u8> {
        &self.bytes
    }
}
