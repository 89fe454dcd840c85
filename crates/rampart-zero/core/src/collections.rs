// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Trait implementations for slices, arrays and `Vec<T>`.

use alloc::vec::Vec;

use core::sync::atomic::{Ordering, compiler_fence};

use super::traits::{FastZeroizable, ZeroizationProbe, ZeroizeMetadata};

/// Zeroizes a slice either with one memset or element by element.
///
/// `fast = true` forces the memset path regardless of
/// `T::CAN_BE_BULK_ZEROIZED`; exposed to the crate so tests can drive both
/// paths.
#[inline(always)]
pub(crate) fn slice_fast_zeroize<T: FastZeroizable>(slice: &mut [T], fast: bool) {
    if fast {
        rampart_util::fast_zeroize_slice(slice);
    } else {
        for elem in slice.iter_mut() {
            elem.fast_zeroize();
        }
    }
    compiler_fence(Ordering::SeqCst);
}

/// Returns `true` if every element reports itself as zeroized.
#[inline(always)]
pub fn all_zeroized<'a, T, I>(iter: I) -> bool
where
    T: ZeroizationProbe + 'a,
    I: IntoIterator<Item = &'a T>,
{
    iter.into_iter().all(|elem| elem.is_zeroized())
}

// [T]

impl<T> ZeroizeMetadata for [T]
where
    T: ZeroizeMetadata,
{
    const CAN_BE_BULK_ZEROIZED: bool = T::CAN_BE_BULK_ZEROIZED;
}

impl<T> FastZeroizable for [T]
where
    T: FastZeroizable + ZeroizeMetadata,
{
    fn fast_zeroize(&mut self) {
        slice_fast_zeroize(self, T::CAN_BE_BULK_ZEROIZED);
    }
}

impl<T: ZeroizationProbe> ZeroizationProbe for [T] {
    fn is_zeroized(&self) -> bool {
        all_zeroized(self)
    }
}

// [T; N]

impl<T: ZeroizeMetadata, const N: usize> ZeroizeMetadata for [T; N] {
    const CAN_BE_BULK_ZEROIZED: bool = T::CAN_BE_BULK_ZEROIZED;
}

impl<T: ZeroizeMetadata + FastZeroizable, const N: usize> FastZeroizable for [T; N] {
    #[inline(always)]
    fn fast_zeroize(&mut self) {
        slice_fast_zeroize(self, T::CAN_BE_BULK_ZEROIZED);
    }
}

impl<T: ZeroizationProbe, const N: usize> ZeroizationProbe for [T; N] {
    fn is_zeroized(&self) -> bool {
        all_zeroized(self)
    }
}

// Vec<T>

/// Zeroizes a Vec: memset over the whole allocation for bulk types,
/// element by element plus spare capacity otherwise.
#[inline(always)]
pub(crate) fn vec_fast_zeroize<T: FastZeroizable>(vec: &mut Vec<T>, fast: bool) {
    if fast {
        rampart_util::fast_zeroize_vec(vec);
    } else {
        for elem in vec.iter_mut() {
            elem.fast_zeroize();
        }
        rampart_util::zeroize_spare_capacity(vec);
    }
    compiler_fence(Ordering::SeqCst);
}

impl<T: ZeroizeMetadata> ZeroizeMetadata for Vec<T> {
    // ptr/len/capacity must survive
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl<T: ZeroizeMetadata + FastZeroizable> FastZeroizable for Vec<T> {
    #[inline(always)]
    fn fast_zeroize(&mut self) {
        vec_fast_zeroize(self, T::CAN_BE_BULK_ZEROIZED);
    }
}

impl<T: ZeroizationProbe> ZeroizationProbe for Vec<T> {
    /// Elements and spare capacity must both be zero.
    ///
    /// Only meaningful after `fast_zeroize()`: fresh spare capacity is
    /// uninitialized.
    fn is_zeroized(&self) -> bool {
        all_zeroized(self.iter()) && rampart_util::is_spare_capacity_zeroized(self)
    }
}
