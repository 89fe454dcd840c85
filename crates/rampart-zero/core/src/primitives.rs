// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Trait implementations for scalar types.

use crate::traits::{FastZeroizable, ZeroizationProbe, ZeroizeMetadata};

macro_rules! impl_scalar_zeroize {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl ZeroizeMetadata for $ty {
                const CAN_BE_BULK_ZEROIZED: bool = true;
            }

            impl FastZeroizable for $ty {
                #[inline(always)]
                fn fast_zeroize(&mut self) {
                    rampart_util::zeroize_primitive(self);
                }
            }

            impl ZeroizationProbe for $ty {
                #[inline(always)]
                fn is_zeroized(&self) -> bool {
                    *self == $zero
                }
            }
        )*
    };
}

impl_scalar_zeroize!(
    u8 => 0,
    u16 => 0,
    u32 => 0,
    u64 => 0,
    u128 => 0,
    usize => 0,
    i8 => 0,
    i16 => 0,
    i32 => 0,
    i64 => 0,
    i128 => 0,
    isize => 0,
    bool => false,
);
