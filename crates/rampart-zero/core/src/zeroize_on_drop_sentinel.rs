// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::sync::Arc;
use core::ptr;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::{FastZeroizable, ZeroizeMetadata};

/// Shared flag recording whether its owner was zeroized.
///
/// Starts pristine. `fast_zeroize()` flips it, and every clone observes the
/// flip, so a test can keep a clone, drop the owner and inspect the result.
/// Dropping the sentinel itself never flips it.
///
/// ```rust
/// use rampart_zero_core::{FastZeroizable, ZeroizeOnDropSentinel};
///
/// let mut sentinel = ZeroizeOnDropSentinel::default();
/// let observer = sentinel.clone();
///
/// assert!(!observer.is_zeroized());
/// sentinel.fast_zeroize();
/// assert!(observer.is_zeroized());
/// ```
#[derive(Clone, Debug)]
pub struct ZeroizeOnDropSentinel(Arc<AtomicBool>);

impl PartialEq for ZeroizeOnDropSentinel {
    fn eq(&self, other: &Self) -> bool {
        self.0.load(Ordering::Relaxed) == other.0.load(Ordering::Relaxed)
    }
}

impl Eq for ZeroizeOnDropSentinel {}

impl ZeroizeOnDropSentinel {
    /// Resets the sentinel to the pristine (not zeroized) state.
    pub fn reset(&mut self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once the owner has been zeroized.
    pub fn is_zeroized(&self) -> bool {
        !self.0.load(Ordering::Relaxed)
    }
}

impl Default for ZeroizeOnDropSentinel {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl ZeroizeMetadata for ZeroizeOnDropSentinel {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl FastZeroizable for ZeroizeOnDropSentinel {
    fn fast_zeroize(&mut self) {
        // SAFETY: the pointer comes from a live AtomicBool owned by the Arc
        unsafe {
            ptr::write_volatile(self.0.as_ptr(), false);
        }
    }
}
