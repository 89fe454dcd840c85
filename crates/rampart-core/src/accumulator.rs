// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-size block buffering shared by every streaming primitive.

use rampart_zero::{FastZeroizable, RampartZero, ZeroizeOnDropSentinel};

/// Collects arbitrary byte slices into `N`-byte blocks.
///
/// Each completed block is handed to a caller-supplied transform exactly once.
/// The sequence of transformed blocks depends only on the concatenation of the
/// bytes passed in, never on how they were split across calls.
///
/// The buffer holds fewer than `N` bytes between calls, except in
/// [`add_holding_last`](Self::add_holding_last) mode where one full block may
/// be held back.
///
/// ```
/// use rampart_core::BlockAccumulator;
///
/// let mut acc = BlockAccumulator::<4>::new();
/// let mut blocks = Vec::new();
///
/// acc.add(b"abc", |b| blocks.push(*b));
/// acc.add(b"defgh", |b| blocks.push(*b));
///
/// assert_eq!(blocks, vec![*b"abcd", *b"efgh"]);
/// assert!(acc.is_empty());
/// ```
#[derive(RampartZero)]
#[fast_zeroize(drop)]
pub struct BlockAccumulator<const N: usize> {
    block: [u8; N],
    filled: usize,
    __sentinel: ZeroizeOnDropSentinel,
}

impl<const N: usize> Default for BlockAccumulator<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> BlockAccumulator<N> {
    /// Block size in bytes.
    pub const BLOCK_LEN: usize = N;

    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self {
            block: [0u8; N],
            filled: 0,
            __sentinel: ZeroizeOnDropSentinel::default(),
        }
    }

    /// Number of bytes currently buffered.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.filled
    }

    /// `true` when nothing is buffered.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    /// `true` when a full block is held back.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.filled == N
    }

    /// Buffered bytes not yet transformed.
    #[inline(always)]
    pub fn pending(&self) -> &[u8] {
        &self.block[..self.filled]
    }

    /// Wipes and empties the buffer.
    pub fn clear(&mut self) {
        self.block.fast_zeroize();
        self.filled = 0;
    }

    /// Runs `transform` on the buffered block and empties the buffer.
    fn flush<F: FnMut(&[u8; N])>(&mut self, transform: &mut F) {
        transform(&self.block);
        self.clear();
    }

    /// Appends `data`, transforming every block that becomes complete.
    ///
    /// Complete blocks found directly in `data` are transformed in place
    /// without passing through the buffer.
    pub fn add<F: FnMut(&[u8; N])>(&mut self, mut data: &[u8], mut transform: F) {
        if self.filled > 0 {
            let take = core::cmp::min(N - self.filled, data.len());

            self.block[self.filled..self.filled + take].copy_from_slice(&data[..take]);
            self.filled += take;
            data = &data[take..];

            if self.filled < N {
                return;
            }

            self.flush(&mut transform);
        }

        let mut chunks = data.chunks_exact(N);
        for chunk in &mut chunks {
            if let Ok(block) = <&[u8; N]>::try_from(chunk) {
                transform(block);
            }
        }

        let rest = chunks.remainder();
        self.block[..rest.len()].copy_from_slice(rest);
        self.filled = rest.len();
    }

    /// Appends `data` like [`add`](Self::add), but keeps the most recent
    /// complete block buffered until more bytes arrive.
    ///
    /// Used where the final block needs special treatment at finalization,
    /// such as CBC decryption with padding.
    pub fn add_holding_last<F: FnMut(&[u8; N])>(&mut self, mut data: &[u8], mut transform: F) {
        while !data.is_empty() {
            if self.filled == N {
                self.flush(&mut transform);
            }

            let take = core::cmp::min(N - self.filled, data.len());

            self.block[self.filled..self.filled + take].copy_from_slice(&data[..take]);
            self.filled += take;
            data = &data[take..];
        }
    }

    /// Transforms the block held back by
    /// [`add_holding_last`](Self::add_holding_last).
    ///
    /// Returns `false`, leaving the buffer untouched, when no full block is
    /// buffered.
    pub fn flush_held<F: FnMut(&[u8; N])>(&mut self, mut transform: F) -> bool {
        if self.filled != N {
            return false;
        }

        self.flush(&mut transform);
        true
    }

    /// Merkle-Damgard finalization.
    ///
    /// Appends the `0x80` terminator, zero-fills until exactly
    /// `length_field.len()` bytes remain before the block boundary (spilling
    /// into a fresh block when the terminator leaves no room), writes
    /// `length_field` and transforms the last block. The buffer is empty and
    /// wiped afterwards.
    ///
    /// `length_field` must be shorter than `N`.
    pub fn finish_merkle_damgard<F: FnMut(&[u8; N])>(&mut self, length_field: &[u8], mut transform: F) {
        let tail = N - length_field.len();

        if self.filled == N {
            self.flush(&mut transform);
        }

        self.block[self.filled] = 0x80;
        self.filled += 1;

        if self.filled > tail {
            self.block[self.filled..].fill(0);
            self.flush(&mut transform);
        }

        self.block[self.filled..tail].fill(0);
        self.block[tail..].copy_from_slice(length_field);
        self.flush(&mut transform);
    }
}
