// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte utilities shared by the rampart crates.
//!
//! - Zeroization helpers that the optimizer cannot elide
//! - Constant-time comparison
//! - Hex rendering and parsing
//! - Big/little-endian word codecs used by the hash compression functions

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod hex;
mod words;

use alloc::vec::Vec;
use core::sync::atomic::{Ordering, compiler_fence};

pub use hex::{HexCase, encode_hex, encode_hex_into, hex_to_bytes};
pub use words::{load_u32_be, load_u32_le, load_u64_be, store_u32_be, store_u32_le, store_u64_be};

/// Constant-time equality comparison for byte slices.
///
/// Returns `true` if slices are equal, `false` otherwise.
/// Lengths are not secret: slices of different length compare unequal
/// immediately.
///
/// # Example
///
/// ```
/// use rampart_util::constant_time_eq;
///
/// assert!(constant_time_eq(&[1, 2, 3], &[1, 2, 3]));
/// assert!(!constant_time_eq(&[1, 2, 3], &[1, 2, 4]));
/// ```
#[inline(never)]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let diff = a
        .iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y));

    // Volatile read keeps the fold from being turned into an early-exit memcmp
    // SAFETY: `diff` is a live, initialized and aligned local.
    unsafe { core::ptr::read_volatile(&diff) == 0 }
}

/// Verifies that a slice is zeroized.
///
/// # Example
///
/// ```
/// use rampart_util::is_slice_zeroized;
///
/// assert!(is_slice_zeroized(&[0u8; 10]));
/// assert!(!is_slice_zeroized(&[0u8, 1, 0, 0]));
/// ```
#[inline(always)]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Zeroizes a single primitive value using volatile write.
///
/// Works for all primitive types where all-zeros is a valid representation
/// (integers, `bool`, floats, `char`).
///
/// # Example
///
/// ```
/// use rampart_util::zeroize_primitive;
///
/// let mut x = 42u32;
/// zeroize_primitive(&mut x);
/// assert_eq!(x, 0);
/// ```
#[inline(always)]
pub fn zeroize_primitive<T: Copy>(val: &mut T) {
    // SAFETY: callers only use this for primitives where all-zero is valid
    unsafe {
        core::ptr::write_volatile(val, core::mem::zeroed());
    }
}

/// Fast bulk zeroization that can be vectorized.
///
/// Uses `write_bytes` (memset) + volatile read to prevent the optimizer
/// from removing the zeroization.
///
/// # Example
///
/// ```
/// use rampart_util::fast_zeroize_slice;
///
/// let mut words = [0xDEADBEEFu32; 16];
/// fast_zeroize_slice(&mut words);
/// assert!(words.iter().all(|&w| w == 0));
/// ```
#[inline(always)]
pub fn fast_zeroize_slice<T>(slice: &mut [T]) {
    if slice.is_empty() {
        return;
    }

    let byte_len = core::mem::size_of_val(slice);
    // SAFETY: `byte_len` covers exactly the borrowed slice, which is non-empty.
    unsafe {
        core::ptr::write_bytes(slice.as_mut_ptr() as *mut u8, 0, byte_len);
        core::ptr::read_volatile(slice.as_ptr() as *const u8);
    }
    compiler_fence(Ordering::SeqCst);
}

/// Fast bulk zeroization of a Vec including spare capacity.
///
/// Zeroizes the **entire allocation** (from index 0 to capacity), so bytes
/// left behind by `truncate()` or `clear()` are wiped as well.
///
/// # Example
///
/// ```
/// use rampart_util::fast_zeroize_vec;
///
/// let mut vec = vec![0xFFu8; 64];
/// vec.truncate(8);
/// fast_zeroize_vec(&mut vec);
/// assert!(vec.iter().all(|&b| b == 0));
/// ```
#[inline(always)]
pub fn fast_zeroize_vec<T>(vec: &mut Vec<T>) {
    if vec.capacity() == 0 {
        return;
    }

    let byte_len = vec.capacity() * core::mem::size_of::<T>();
    // SAFETY: the allocation is valid for `capacity` elements, which is non-zero.
    unsafe {
        core::ptr::write_bytes(vec.as_mut_ptr() as *mut u8, 0, byte_len);
        core::ptr::read_volatile(vec.as_ptr() as *const u8);
    }
    compiler_fence(Ordering::SeqCst);
}

/// Zeroizes only the spare capacity of a Vec, leaving active elements untouched.
#[inline(always)]
pub fn zeroize_spare_capacity<T>(vec: &mut Vec<T>) {
    let spare = vec.capacity() - vec.len();
    if spare == 0 {
        return;
    }

    let byte_len = spare * core::mem::size_of::<T>();
    // SAFETY: `len..capacity` lies inside the allocation and is non-empty.
    unsafe {
        let spare_ptr = vec.as_mut_ptr().add(vec.len()) as *mut u8;
        core::ptr::write_bytes(spare_ptr, 0, byte_len);
        core::ptr::read_volatile(spare_ptr);
    }
}

/// Checks if the spare capacity of a `Vec<T>` is fully zeroized.
///
/// Reads the region between `len` and `capacity` at the byte level without
/// constructing any `T` values.
#[inline(never)]
pub fn is_spare_capacity_zeroized<T>(vec: &Vec<T>) -> bool {
    let len = vec.len();
    let cap = vec.capacity();

    if cap == len {
        return true;
    }

    let len_bytes = len * core::mem::size_of::<T>();
    let cap_bytes = cap * core::mem::size_of::<T>();

    // SAFETY: the allocation is valid for `capacity` elements and we only read
    unsafe {
        let spare_ptr = vec.as_ptr().cast::<u8>().add(len_bytes);
        core::slice::from_raw_parts(spare_ptr, cap_bytes - len_bytes)
            .iter()
            .all(|&b| b == 0)
    }
}

/// Verifies that a `Vec<u8>` is fully zeroized, including spare capacity.
///
/// Only available in tests and with the `test-utils` feature.
#[cfg(any(test, feature = "test-utils"))]
#[inline(never)]
pub fn is_vec_fully_zeroized(vec: &Vec<u8>) -> bool {
    let base = vec.as_ptr();

    (0..vec.capacity()).all(|i| unsafe { *base.add(i) == 0 })
}

/// Wipes a byte region one volatile store at a time.
///
/// Every byte is written through [`core::ptr::write_volatile`] and the loop is
/// followed by a sequentially-consistent compiler fence, so the stores survive
/// even when the region is released right afterwards. This is the wipe used
/// for raw key material before deallocation.
///
/// # Example
///
/// ```
/// use rampart_util::{is_slice_zeroized, volatile_wipe};
///
/// let mut key = [0xA5u8; 32];
/// volatile_wipe(&mut key);
/// assert!(is_slice_zeroized(&key));
/// ```
#[inline(never)]
pub fn volatile_wipe(bytes: &mut [u8]) {
    for byte in bytes.iter_mut() {
        // SAFETY: `byte` is a valid, aligned, exclusive reference
        unsafe { core::ptr::write_volatile(byte, 0) };
    }
    compiler_fence(Ordering::SeqCst);
}
