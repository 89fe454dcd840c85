// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! One-shot digests.

use alloc::string::String;

use rampart_core::{CryptoError, HashEngine};
use rampart_util::{HexCase, encode_hex};
use rampart_zero::FastZeroizable;

use crate::md5::Md5;
use crate::sha1::Sha1;
use crate::sha256::{Sha224, Sha256};
use crate::sha512::{Sha384, Sha512, Sha512_224, Sha512_256};

macro_rules! one_shot {
    ($engine:ty, $len:expr, $raw:ident, $hex:ident, $label:literal) => {
        #[doc = concat!($label, " of `data`.")]
        ///
        /// # Errors
        ///
        /// Only on an internal invariant violation inside the engine.
        pub fn $raw(data: &[u8]) -> Result<[u8; $len], CryptoError> {
            let mut engine = <$engine>::new();
            engine.add(data);
            engine.calculate()?;
            engine.digest()
        }

        #[doc = concat!($label, " of `data` rendered as hex.")]
        ///
        /// # Errors
        ///
        /// Only on an internal invariant violation inside the engine.
        pub fn $hex(data: &[u8], case: HexCase) -> Result<String, CryptoError> {
            let mut digest = $raw(data)?;
            let hex = encode_hex(&digest, case);
            digest.fast_zeroize();
            Ok(hex)
        }
    };
}

one_shot!(Md5, 16, md5, md5_hex, "MD5");
one_shot!(Sha1, 20, sha1, sha1_hex, "SHA-1");
one_shot!(Sha224, 28, sha224, sha224_hex, "SHA-224");
one_shot!(Sha256, 32, sha256, sha256_hex, "SHA-256");
one_shot!(Sha384, 48, sha384, sha384_hex, "SHA-384");
one_shot!(Sha512, 64, sha512, sha512_hex, "SHA-512");
one_shot!(Sha512_224, 28, sha512_224, sha512_224_hex, "SHA-512/224");
one_shot!(Sha512_256, 32, sha512_256, sha512_256_hex, "SHA-512/256");
