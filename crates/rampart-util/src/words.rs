// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Word/byte codecs for block transforms.
//!
//! Loaders fill as many words as both sides allow; the block transforms
//! always pass exactly matching lengths.

/// Generates a `load_*` (bytes to words) and `store_*` (words to bytes) pair.
macro_rules! impl_word_codec {
    ($type:ty, $size:expr, $shift:ident, $fn_load:ident, $fn_store:ident, $order:literal) => {
        #[doc = concat!("Decodes ", $order, " `", stringify!($type), "` words from `src` into `dst`.")]
        #[inline(always)]
        pub fn $fn_load(src: &[u8], dst: &mut [$type]) {
            for (word, chunk) in dst.iter_mut().zip(src.chunks_exact($size)) {
                let mut w: $type = 0;
                for (i, &byte) in chunk.iter().enumerate() {
                    w |= (byte as $type) << $shift(i);
                }
                *word = w;
            }
        }

        #[doc = concat!("Encodes `", stringify!($type), "` words from `src` into `dst` as ", $order, " bytes.")]
        #[inline(always)]
        pub fn $fn_store(src: &[$type], dst: &mut [u8]) {
            for (&word, chunk) in src.iter().zip(dst.chunks_exact_mut($size)) {
                for (i, byte) in chunk.iter_mut().enumerate() {
                    *byte = (word >> $shift(i)) as u8;
                }
            }
        }
    };
}

#[inline(always)]
const fn be32(i: usize) -> u32 {
    (8 * (3 - i)) as u32
}

#[inline(always)]
const fn le32(i: usize) -> u32 {
    (8 * i) as u32
}

#[inline(always)]
const fn be64(i: usize) -> u32 {
    (8 * (7 - i)) as u32
}

impl_word_codec!(u32, 4, be32, load_u32_be, store_u32_be, "big-endian");
impl_word_codec!(u32, 4, le32, load_u32_le, store_u32_le, "little-endian");
impl_word_codec!(u64, 8, be64, load_u64_be, store_u64_be, "big-endian");
