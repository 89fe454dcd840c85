// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec;
use alloc::vec::Vec;

use rampart_zero::{FastZeroizable, ZeroizationProbe, ZeroizeMetadata};

/// Fixed-length heap region whose wipe is a per-byte volatile store.
///
/// Never grows, so no stale copy is ever left behind by a reallocation.
pub(crate) struct Region(Vec<u8>);

impl Region {
    pub(crate) fn empty() -> Self {
        Self(Vec::new())
    }

    pub(crate) fn zeroed(size: usize) -> Self {
        Self(vec![0u8; size])
    }

    #[inline(always)]
    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.0
    }

    #[inline(always)]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.0
    }

    #[cfg(test)]
    pub(crate) fn raw(&self) -> &Vec<u8> {
        &self.0
    }
}

impl ZeroizeMetadata for Region {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl FastZeroizable for Region {
    fn fast_zeroize(&mut self) {
        rampart_util::volatile_wipe(&mut self.0);
    }
}

impl ZeroizationProbe for Region {
    fn is_zeroized(&self) -> bool {
        rampart_util::is_slice_zeroized(&self.0)
    }
}
