// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.


/// Decodes a hex literal into a fixed-size array.
pub(crate) fn arr<const N: usize>(hex: &str) -> [u8; N] {
    let bytes = rampart_util::hex_to_bytes(hex).expect("Failed to decode hex");
    <[u8; N]>::try_from(bytes.as_slice()).expect("Failed to convert to array")
}

/// Decodes a hex literal into a vector.
pub(crate) fn bytes(hex: &str) -> Vec<u8> {
    rampart_util::hex_to_bytes(hex).expect("Failed to decode hex")
}
