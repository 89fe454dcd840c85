// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::assert::assert_zeroize_on_drop;
use crate::traits::{AssertZeroizeOnDrop, FastZeroizable};
use crate::zeroize_on_drop_sentinel::ZeroizeOnDropSentinel;

struct Chaining {
    words: [u32; 4],
    __sentinel: ZeroizeOnDropSentinel,
}

impl FastZeroizable for Chaining {
    fn fast_zeroize(&mut self) {
        self.words.fast_zeroize();
        self.__sentinel.fast_zeroize();
    }
}

impl Drop for Chaining {
    fn drop(&mut self) {
        self.fast_zeroize();
    }
}

impl AssertZeroizeOnDrop for Chaining {
    fn clone_sentinel(&self) -> ZeroizeOnDropSentinel {
        self.__sentinel.clone()
    }

    fn assert_zeroize_on_drop(self) {
        assert_zeroize_on_drop(self);
    }
}

#[test]
fn test_assert_zeroize_on_drop_passes_for_wiping_type() {
    let value = Chaining {
        words: [1, 2, 3, 4],
        __sentinel: ZeroizeOnDropSentinel::default(),
    };
    let observer = value.clone_sentinel();

    value.assert_zeroize_on_drop();

    assert!(observer.is_zeroized());
}

#[test]
#[should_panic]
fn test_assert_zeroize_on_drop_panics_for_leaky_type() {
    struct Leaky {
        __sentinel: ZeroizeOnDropSentinel,
    }

    impl AssertZeroizeOnDrop for Leaky {
        fn clone_sentinel(&self) -> ZeroizeOnDropSentinel {
            self.__sentinel.clone()
        }

        fn assert_zeroize_on_drop(self) {
            assert_zeroize_on_drop(self);
        }
    }

    Leaky {
        __sentinel: ZeroizeOnDropSentinel::default(),
    }
    .assert_zeroize_on_drop();
}

#[test]
fn test_sentinel_zeroizes_clone() {
    let mut sentinel = ZeroizeOnDropSentinel::default();
    let sentinel_clone = sentinel.clone();

    assert!(!sentinel_clone.is_zeroized());
    sentinel.fast_zeroize();
    assert!(sentinel_clone.is_zeroized());
}

// Dropping a sentinel must not mark it zeroized, otherwise every owner
// would look wiped.
#[test]
fn test_sentinel_is_not_zeroized_on_drop() {
    let sentinel = ZeroizeOnDropSentinel::default();
    let sentinel_clone = sentinel.clone();

    drop(sentinel);
    assert!(!sentinel_clone.is_zeroized());
}

#[test]
fn test_sentinel_reset() {
    let mut sentinel = ZeroizeOnDropSentinel::default();

    sentinel.fast_zeroize();
    assert!(sentinel.is_zeroized());

    sentinel.reset();
    assert!(!sentinel.is_zeroized());
}

#[test]
fn test_sentinel_partial_eq() {
    let mut a = ZeroizeOnDropSentinel::default();
    let b = ZeroizeOnDropSentinel::default();

    assert_eq!(a, b);
    a.fast_zeroize();
    assert_ne!(a, b);
}
