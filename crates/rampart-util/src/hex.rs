// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hex rendering and parsing.

use alloc::string::String;
use alloc::vec::Vec;

const LOWER: &[u8; 16] = b"0123456789abcdef";
const UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Letter case used when rendering hex digits.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HexCase {
    /// `0-9a-f`
    #[default]
    Lower,
    /// `0-9A-F`
    Upper,
}

impl HexCase {
    #[inline(always)]
    fn alphabet(self) -> &'static [u8; 16] {
        match self {
            HexCase::Lower => LOWER,
            HexCase::Upper => UPPER,
        }
    }
}

/// Appends the hex rendering of `bytes` to `out`, 2 characters per byte.
pub fn encode_hex_into(bytes: &[u8], case: HexCase, out: &mut String) {
    let alphabet = case.alphabet();
    out.reserve(bytes.len() * 2);

    for &b in bytes {
        out.push(alphabet[(b >> 4) as usize] as char);
        out.push(alphabet[(b & 0x0f) as usize] as char);
    }
}

/// Renders `bytes` as hex, 2 characters per byte.
///
/// # Example
///
/// ```
/// use rampart_util::{HexCase, encode_hex};
///
/// assert_eq!(encode_hex(&[0xde, 0xad, 0xbe, 0xef], HexCase::Lower), "deadbeef");
/// assert_eq!(encode_hex(&[0xde, 0xad, 0xbe, 0xef], HexCase::Upper), "DEADBEEF");
/// ```
pub fn encode_hex(bytes: &[u8], case: HexCase) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    encode_hex_into(bytes, case, &mut out);
    out
}

#[inline(always)]
fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parses a hexadecimal string into bytes.
///
/// Accepts both letter cases. Returns `None` on odd length or on any
/// character outside `0-9a-fA-F`.
///
/// # Example
///
/// ```
/// use rampart_util::hex_to_bytes;
///
/// assert_eq!(hex_to_bytes("deadBEEF"), Some(vec![0xde, 0xad, 0xbe, 0xef]));
/// assert_eq!(hex_to_bytes("abc"), None);
/// ```
pub fn hex_to_bytes(hex: &str) -> Option<Vec<u8>> {
    let raw = hex.as_bytes();

    if raw.len() % 2 != 0 {
        return None;
    }

    raw.chunks_exact(2)
        .map(|pair| Some((nibble(pair[0])? << 4) | nibble(pair[1])?))
        .collect()
}
