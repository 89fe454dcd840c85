// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming CBC encryption and decryption (NIST SP 800-38A Section 6.2).

use core::marker::PhantomData;

use rampart_core::{BlockAccumulator, CryptoError};
use rampart_zero::{FastZeroizable, RampartZero, ZeroizeOnDropSentinel};

use crate::consts::BLOCK_LEN;
use crate::key_schedule::KeySchedule;
use crate::output::OutputBuffer;
use crate::padding::Padding;
use crate::variant::AesVariant;

const PAD_SCRATCH_LEN: usize = BLOCK_LEN * (Padding::MAX_EXTRA_BLOCKS + 1);

/// State shared by both directions.
#[derive(RampartZero)]
pub(crate) struct CbcCore {
    schedule: KeySchedule,
    // IV, then the previous ciphertext block
    chain: [u8; BLOCK_LEN],
    work: [u8; BLOCK_LEN],
    pending: BlockAccumulator<BLOCK_LEN>,
    output: OutputBuffer,
    pad: [u8; PAD_SCRATCH_LEN],
    #[fast_zeroize(skip)]
    padding: Padding,
    key_set: bool,
    iv_set: bool,
    finalized: bool,
}

impl CbcCore {
    fn new() -> Self {
        Self {
            schedule: KeySchedule::new(),
            chain: [0u8; BLOCK_LEN],
            work: [0u8; BLOCK_LEN],
            pending: BlockAccumulator::new(),
            output: OutputBuffer::new(),
            pad: [0u8; PAD_SCRATCH_LEN],
            padding: Padding::default(),
            key_set: false,
            iv_set: false,
            finalized: false,
        }
    }

    fn set_key(&mut self, key: &[u8], rounds: usize) {
        self.schedule.expand(key, rounds);
        self.key_set = true;
    }

    fn set_iv(&mut self, iv: &[u8; BLOCK_LEN]) {
        self.chain.copy_from_slice(iv);
        self.iv_set = true;
    }

    fn wipe_key_material(&mut self) {
        self.schedule.fast_zeroize();
        self.chain.fast_zeroize();
        self.work.fast_zeroize();
        self.pad.fast_zeroize();
        self.pending.clear();
        self.key_set = false;
        self.iv_set = false;
    }

    /// Abandons the message: wipes key material, buffered input and output.
    fn reset(&mut self) {
        self.wipe_key_material();
        self.output.clear();
        self.finalized = false;
    }

    /// Quiet restart after a finished message, then the key material check.
    fn begin(&mut self) -> Result<(), CryptoError> {
        if self.finalized {
            // Key material is already gone; only the old output remains
            self.output.clear();
            self.finalized = false;
        }

        if !(self.key_set && self.iv_set) {
            return Err(CryptoError::MissingKeyMaterial);
        }

        Ok(())
    }

    /// Wipes key material whatever the outcome; a failed message leaves no
    /// output behind.
    fn finish(&mut self, result: Result<(), CryptoError>) -> Result<(), CryptoError> {
        self.wipe_key_material();

        match result {
            Ok(()) => {
                self.finalized = true;
                Ok(())
            }
            Err(err) => {
                self.output.clear();
                self.finalized = false;
                Err(err)
            }
        }
    }

    fn data(&self) -> Result<&[u8], CryptoError> {
        if !self.finalized {
            return Err(CryptoError::NotYetComputed);
        }
        Ok(self.output.as_slice())
    }

    #[cfg(test)]
    pub(crate) fn key_material_is_zeroized(&self) -> bool {
        use rampart_zero::ZeroizationProbe;

        self.schedule.is_zeroized() && self.chain.is_zeroized() && !self.key_set && !self.iv_set
    }

    #[cfg(test)]
    pub(crate) fn output(&self) -> &OutputBuffer {
        &self.output
    }
}

/// C_i = E(K, P_i ⊕ C_{i-1}); the chain value becomes C_i.
fn encrypt_block(
    schedule: &mut KeySchedule,
    chain: &mut [u8; BLOCK_LEN],
    output: &mut OutputBuffer,
    block: &[u8; BLOCK_LEN],
) {
    for (c, p) in chain.iter_mut().zip(block.iter()) {
        *c ^= p;
    }
    schedule.encrypt_block(chain);
    output.extend(chain);
}

/// P_i = D(K, C_i) ⊕ C_{i-1}; the chain value becomes C_i.
fn decrypt_block(
    schedule: &mut KeySchedule,
    chain: &mut [u8; BLOCK_LEN],
    work: &mut [u8; BLOCK_LEN],
    output: &mut OutputBuffer,
    block: &[u8; BLOCK_LEN],
) {
    work.copy_from_slice(block);
    schedule.decrypt_block(work);
    for (w, c) in work.iter_mut().zip(chain.iter()) {
        *w ^= c;
    }
    output.extend(work);
    chain.copy_from_slice(block);
    work.fast_zeroize();
}

/// Shared surface of [`CbcEncrypt`] and [`CbcDecrypt`].
macro_rules! cbc_stream {
    ($name:ident) => {
        impl<V: AesVariant> Default for $name<V> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<V: AesVariant> core::fmt::Debug for $name<V> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("key_bits", &(V::KEY_LEN * 8))
                    .field("key_set", &self.core.key_set)
                    .field("iv_set", &self.core.iv_set)
                    .field("padding", &self.core.padding)
                    .field("finalized", &self.core.finalized)
                    .finish_non_exhaustive()
            }
        }

        impl<V: AesVariant> $name<V> {
            /// Creates a stream with PKCS#7 padding and no key or IV.
            pub fn new() -> Self {
                Self {
                    core: CbcCore::new(),
                    _variant: PhantomData,
                    __sentinel: ZeroizeOnDropSentinel::default(),
                }
            }

            /// Expands `key` into the round-key schedule.
            ///
            /// The schedule is wiped by every `calculate`, so the key must be
            /// set again for each message.
            pub fn set_key(&mut self, key: &V::Key) {
                self.core.set_key(key.as_ref(), V::ROUNDS);
            }

            /// Seeds the chaining value. Required again for each message.
            pub fn set_iv(&mut self, iv: &[u8; BLOCK_LEN]) {
                self.core.set_iv(iv);
            }

            /// Configures padding.
            ///
            /// `use_pkcs7 = false` selects RFC 2246; `extra_blocks` adds that
            /// many whole blocks of RFC 2246 padding on encryption.
            ///
            /// # Errors
            ///
            /// [`CryptoError::InvalidPaddingConfig`] if `extra_blocks > 15`;
            /// the previous configuration stays in place.
            pub fn set_padding(
                &mut self,
                enabled: bool,
                use_pkcs7: bool,
                extra_blocks: usize,
            ) -> Result<(), CryptoError> {
                self.core.padding = Padding::new(enabled, use_pkcs7, extra_blocks)?;
                Ok(())
            }

            /// Current padding configuration.
            pub fn padding(&self) -> Padding {
                self.core.padding
            }

            /// `true` once a `calculate` has succeeded and no `add` or
            /// `reset` has followed.
            pub fn is_calculated(&self) -> bool {
                self.core.finalized
            }

            /// Output of the last successful `calculate`.
            ///
            /// # Errors
            ///
            /// [`CryptoError::NotYetComputed`] before a successful `calculate`.
            pub fn get_data(&self) -> Result<&[u8], CryptoError> {
                self.core.data()
            }

            /// Abandons the current message.
            ///
            /// Wipes the round keys, chaining value, buffered input and
            /// output; `set_key` and `set_iv` are required again.
            pub fn reset(&mut self) {
                self.core.reset();
            }

            #[cfg(test)]
            pub(crate) fn core(&self) -> &CbcCore {
                &self.core
            }
        }
    };
}

/// Streaming AES-CBC encryption.
///
/// ```
/// use rampart_aes::Aes128Encrypt;
///
/// let mut enc = Aes128Encrypt::new();
/// enc.set_key(&[0x2b; 16]);
/// enc.set_iv(&[0u8; 16]);
/// enc.add(b"attack at dawn")?;
/// enc.calculate()?;
///
/// // 14 bytes of plaintext pad to one block
/// assert_eq!(enc.get_data()?.len(), 16);
/// # Ok::<(), rampart_aes::CryptoError>(())
/// ```
#[derive(RampartZero)]
#[fast_zeroize(drop)]
pub struct CbcEncrypt<V: AesVariant> {
    core: CbcCore,
    #[fast_zeroize(skip)]
    _variant: PhantomData<V>,
    __sentinel: ZeroizeOnDropSentinel,
}

cbc_stream!(CbcEncrypt);

impl<V: AesVariant> CbcEncrypt<V> {
    /// Encrypts every complete block of buffered input.
    ///
    /// # Errors
    ///
    /// [`CryptoError::MissingKeyMaterial`] if key or IV is not set.
    pub fn add(&mut self, data: &[u8]) -> Result<(), CryptoError> {
        self.core.begin()?;

        let core = &mut self.core;
        core.pending.add(data, |block| {
            encrypt_block(&mut core.schedule, &mut core.chain, &mut core.output, block)
        });

        Ok(())
    }

    /// Applies padding, encrypts the final block(s) and wipes the key
    /// schedule.
    ///
    /// # Errors
    ///
    /// - [`CryptoError::MissingKeyMaterial`] if key or IV is not set.
    /// - [`CryptoError::LengthMismatch`] if padding is disabled and the
    ///   input is not block-aligned.
    pub fn calculate(&mut self) -> Result<(), CryptoError> {
        let result = self.core.begin().and_then(|()| self.pad_final());
        self.core.finish(result)
    }

    fn pad_final(&mut self) -> Result<(), CryptoError> {
        let core = &mut self.core;

        if core.padding.is_enabled() {
            let len = core.padding.fill(core.pending.len(), &mut core.pad);
            core.pending.add(&core.pad[..len], |block| {
                encrypt_block(&mut core.schedule, &mut core.chain, &mut core.output, block)
            });
        } else if !core.pending.is_empty() {
            return Err(CryptoError::LengthMismatch);
        }

        if !core.pending.is_empty() {
            return Err(CryptoError::InternalInvariantViolation);
        }

        Ok(())
    }
}

/// Streaming AES-CBC decryption.
///
/// With padding enabled the most recent ciphertext block is held back until
/// `calculate`, which decrypts it and strips the padding.
#[derive(RampartZero)]
#[fast_zeroize(drop)]
pub struct CbcDecrypt<V: AesVariant> {
    core: CbcCore,
    #[fast_zeroize(skip)]
    _variant: PhantomData<V>,
    __sentinel: ZeroizeOnDropSentinel,
}

cbc_stream!(CbcDecrypt);

impl<V: AesVariant> CbcDecrypt<V> {
    /// Decrypts every complete ciphertext block except, when padding is
    /// enabled, the latest one.
    ///
    /// # Errors
    ///
    /// [`CryptoError::MissingKeyMaterial`] if key or IV is not set.
    pub fn add(&mut self, data: &[u8]) -> Result<(), CryptoError> {
        self.core.begin()?;

        let core = &mut self.core;
        let transform = |block: &[u8; BLOCK_LEN]| {
            decrypt_block(
                &mut core.schedule,
                &mut core.chain,
                &mut core.work,
                &mut core.output,
                block,
            )
        };

        if core.padding.is_enabled() {
            core.pending.add_holding_last(data, transform);
        } else {
            core.pending.add(data, transform);
        }

        Ok(())
    }

    /// Decrypts the held block, strips padding and wipes the key schedule.
    ///
    /// # Errors
    ///
    /// - [`CryptoError::MissingKeyMaterial`] if key or IV is not set.
    /// - [`CryptoError::InvalidPadding`] if the padding is malformed or no
    ///   ciphertext was supplied.
    /// - [`CryptoError::LengthMismatch`] if the ciphertext is not
    ///   block-aligned.
    pub fn calculate(&mut self) -> Result<(), CryptoError> {
        let result = self.core.begin().and_then(|()| self.unpad_final());
        self.core.finish(result)
    }

    fn unpad_final(&mut self) -> Result<(), CryptoError> {
        let core = &mut self.core;

        // A block may still be held if padding was switched off mid-message.
        core.pending.flush_held(|block| {
            decrypt_block(
                &mut core.schedule,
                &mut core.chain,
                &mut core.work,
                &mut core.output,
                block,
            )
        });

        if !core.pending.is_empty() {
            return Err(CryptoError::LengthMismatch);
        }

        if core.padding.is_enabled() {
            let len = core.padding.unpadded_len(core.output.as_slice())?;
            core.output.truncate(len);
        }

        Ok(())
    }
}

/// AES-128 CBC encryption.
pub type Aes128Encrypt = CbcEncrypt<crate::Aes128>;
/// AES-128 CBC decryption.
pub type Aes128Decrypt = CbcDecrypt<crate::Aes128>;
/// AES-192 CBC encryption.
pub type Aes192Encrypt = CbcEncrypt<crate::Aes192>;
/// AES-192 CBC decryption.
pub type Aes192Decrypt = CbcDecrypt<crate::Aes192>;
/// AES-256 CBC encryption.
pub type Aes256Encrypt = CbcEncrypt<crate::Aes256>;
/// AES-256 CBC decryption.
pub type Aes256Decrypt = CbcDecrypt<crate::Aes256>;
