// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming lifecycle shared by every Merkle-Damgard engine.
//!
//! Each algorithm provides a compression state with `new(iv)`,
//! `restart(iv)`, `compress(block)` and `export(out)`; the macro below wraps
//! it with the block accumulator, the length counter and the digest buffer.

/// Declares a public engine type and implements [`HashEngine`] for it.
///
/// [`HashEngine`]: rampart_core::HashEngine
macro_rules! md_engine {
    (
        $(#[$meta:meta])*
        $name:ident {
            state: $state:ty,
            iv: $iv:expr,
            block: $block:expr,
            hash: $hash:expr,
            length: $length:ty => $length_bytes:ident $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(::rampart_zero::RampartZero)]
        #[fast_zeroize(drop)]
        pub struct $name {
            state: $state,
            pending: ::rampart_core::BlockAccumulator<$block>,
            length: $length,
            digest: [u8; $hash],
            finalized: bool,
            __sentinel: ::rampart_zero::ZeroizeOnDropSentinel,
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("buffered", &self.pending.len())
                    .field("finalized", &self.finalized)
                    .finish_non_exhaustive()
            }
        }

        impl $name {
            /// Creates an engine at the algorithm's initial vector.
            pub fn new() -> Self {
                Self {
                    state: <$state>::new(&$iv),
                    pending: ::rampart_core::BlockAccumulator::new(),
                    length: <$length>::default(),
                    digest: [0u8; $hash],
                    finalized: false,
                    __sentinel: ::rampart_zero::ZeroizeOnDropSentinel::default(),
                }
            }

            /// Digest as a fixed-size array.
            ///
            /// # Errors
            ///
            /// [`CryptoError::NotYetComputed`](::rampart_core::CryptoError::NotYetComputed)
            /// before `calculate`.
            pub fn digest(&self) -> Result<[u8; $hash], ::rampart_core::CryptoError> {
                if !self.finalized {
                    return Err(::rampart_core::CryptoError::NotYetComputed);
                }
                Ok(self.digest)
            }
        }

        impl ::rampart_core::HashEngine for $name {
            const BLOCK_LEN: usize = $block;
            const HASH_LEN: usize = $hash;

            fn reset(&mut self) {
                use ::rampart_zero::FastZeroizable;

                self.state.restart(&$iv);
                self.pending.clear();
                self.length.fast_zeroize();
                self.digest.fast_zeroize();
                self.finalized = false;
            }

            fn add(&mut self, data: &[u8]) {
                if self.finalized {
                    self.reset();
                }

                self.length.add_bytes(data.len());
                self.pending.add(data, |block| self.state.compress(block));
            }

            fn calculate(&mut self) -> Result<(), ::rampart_core::CryptoError> {
                use ::rampart_zero::FastZeroizable;

                if self.finalized {
                    self.reset();
                }

                let mut length = self.length.$length_bytes();
                self.pending
                    .finish_merkle_damgard(&length, |block| self.state.compress(block));
                length.fast_zeroize();

                if !self.pending.is_empty() {
                    self.reset();
                    return Err(::rampart_core::CryptoError::InternalInvariantViolation);
                }

                self.state.export(&mut self.digest);
                self.state.fast_zeroize();
                self.length.fast_zeroize();
                self.finalized = true;

                Ok(())
            }

            fn is_calculated(&self) -> bool {
                self.finalized
            }

            fn hash(&self) -> Result<&[u8], ::rampart_core::CryptoError> {
                if !self.finalized {
                    return Err(::rampart_core::CryptoError::NotYetComputed);
                }
                Ok(&self.digest)
            }
        }
    };
}

pub(crate) use md_engine;
