// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES key expansion and single-block transforms per FIPS-197.
//!
//! The state is kept as 16 bytes in input order, so byte `r + 4c` holds row
//! `r` of column `c` (FIPS-197 Section 3.4).

use rampart_zero::{FastZeroizable, RampartZero};

use crate::consts::{BLOCK_LEN, INV_SBOX, MAX_SCHEDULE_LEN, RCON, SBOX};

/// Multiplication by x in GF(2^8) modulo x^8 + x^4 + x^3 + x + 1.
#[inline(always)]
fn xtime(a: u8) -> u8 {
    (a << 1) ^ (0x1b & (a >> 7).wrapping_neg())
}

/// GF(2^8) product without data-dependent branches.
#[inline(always)]
fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut p = 0u8;
    for _ in 0..8 {
        p ^= a & (b & 1).wrapping_neg();
        a = xtime(a);
        b >>= 1;
    }
    p
}

/// Expanded round keys plus the scratch used while transforming a block.
///
/// Everything is wiped by [`FastZeroizable::fast_zeroize`]; the CBC streams
/// call it after every `calculate`.
#[derive(RampartZero)]
pub(crate) struct KeySchedule {
    // w[0..4 * (Nr + 1)] as bytes
    round_keys: [u8; MAX_SCHEDULE_LEN],
    rounds: usize,
    // Temp word during expansion
    word: [u8; 4],
    // ShiftRows scratch
    scratch: [u8; BLOCK_LEN],
}

impl KeySchedule {
    pub(crate) fn new() -> Self {
        Self {
            round_keys: [0u8; MAX_SCHEDULE_LEN],
            rounds: 0,
            word: [0u8; 4],
            scratch: [0u8; BLOCK_LEN],
        }
    }

    /// KeyExpansion per FIPS-197 Section 5.2.
    ///
    /// `key` must be 16, 24 or 32 bytes with `rounds` 10, 12 or 14; the CBC
    /// streams guarantee this through `AesVariant`.
    pub(crate) fn expand(&mut self, key: &[u8], rounds: usize) {
        self.fast_zeroize();

        let nk = key.len() / 4;
        let total_words = 4 * (rounds + 1);

        self.rounds = rounds;
        self.round_keys[..key.len()].copy_from_slice(key);

        for i in nk..total_words {
            self.word.copy_from_slice(&self.round_keys[4 * (i - 1)..4 * i]);

            if i % nk == 0 {
                // RotWord, SubWord, Rcon
                self.word.rotate_left(1);
                self.sub_word();
                self.word[0] ^= RCON[i / nk];
            } else if nk > 6 && i % nk == 4 {
                self.sub_word();
            }

            for j in 0..4 {
                self.round_keys[4 * i + j] = self.round_keys[4 * (i - nk) + j] ^ self.word[j];
            }
        }

        self.word.fast_zeroize();
    }

    fn sub_word(&mut self) {
        for b in self.word.iter_mut() {
            *b = SBOX[*b as usize];
        }
    }

    #[inline(always)]
    fn add_round_key(&self, state: &mut [u8; BLOCK_LEN], round: usize) {
        let key = &self.round_keys[round * BLOCK_LEN..(round + 1) * BLOCK_LEN];
        for (s, k) in state.iter_mut().zip(key.iter()) {
            *s ^= k;
        }
    }

    fn shift_rows(&mut self, state: &mut [u8; BLOCK_LEN]) {
        self.scratch.copy_from_slice(state);
        for c in 0..4 {
            for r in 1..4 {
                state[r + 4 * c] = self.scratch[r + 4 * ((c + r) % 4)];
            }
        }
    }

    fn inv_shift_rows(&mut self, state: &mut [u8; BLOCK_LEN]) {
        self.scratch.copy_from_slice(state);
        for c in 0..4 {
            for r in 1..4 {
                state[r + 4 * ((c + r) % 4)] = self.scratch[r + 4 * c];
            }
        }
    }

    /// Cipher per FIPS-197 Section 5.1.
    pub(crate) fn encrypt_block(&mut self, state: &mut [u8; BLOCK_LEN]) {
        self.add_round_key(state, 0);

        for round in 1..=self.rounds {
            for b in state.iter_mut() {
                *b = SBOX[*b as usize];
            }
            self.shift_rows(state);
            if round != self.rounds {
                mix_columns(state);
            }
            self.add_round_key(state, round);
        }

        self.scratch.fast_zeroize();
    }

    /// InvCipher per FIPS-197 Section 5.3.
    pub(crate) fn decrypt_block(&mut self, state: &mut [u8; BLOCK_LEN]) {
        self.add_round_key(state, self.rounds);

        for round in (0..self.rounds).rev() {
            self.inv_shift_rows(state);
            for b in state.iter_mut() {
                *b = INV_SBOX[*b as usize];
            }
            self.add_round_key(state, round);
            if round != 0 {
                inv_mix_columns(state);
            }
        }

        self.scratch.fast_zeroize();
    }
}

fn mix_columns(state: &mut [u8; BLOCK_LEN]) {
    for col in state.chunks_exact_mut(4) {
        let (a0, a1, a2, a3) = (col[0], col[1], col[2], col[3]);
        let all = a0 ^ a1 ^ a2 ^ a3;

        col[0] = a0 ^ all ^ xtime(a0 ^ a1);
        col[1] = a1 ^ all ^ xtime(a1 ^ a2);
        col[2] = a2 ^ all ^ xtime(a2 ^ a3);
        col[3] = a3 ^ all ^ xtime(a3 ^ a0);
    }
}

fn inv_mix_columns(state: &mut [u8; BLOCK_LEN]) {
    for col in state.chunks_exact_mut(4) {
        let (a0, a1, a2, a3) = (col[0], col[1], col[2], col[3]);

        col[0] = gmul(a0, 0x0e) ^ gmul(a1, 0x0b) ^ gmul(a2, 0x0d) ^ gmul(a3, 0x09);
        col[1] = gmul(a0, 0x09) ^ gmul(a1, 0x0e) ^ gmul(a2, 0x0b) ^ gmul(a3, 0x0d);
        col[2] = gmul(a0, 0x0d) ^ gmul(a1, 0x09) ^ gmul(a2, 0x0e) ^ gmul(a3, 0x0b);
        col[3] = gmul(a0, 0x0b) ^ gmul(a1, 0x0d) ^ gmul(a2, 0x09) ^ gmul(a3, 0x0e);
    }
}
