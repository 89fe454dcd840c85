// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod roundtrip_tests {
    use proptest::prelude::*;
    use rampart_aes::{Aes128, Aes192, Aes256, AesVariant, BLOCK_LEN, CbcDecrypt, CbcEncrypt};

    #[derive(Clone, Copy, Debug)]
    enum Mode {
        Pkcs7,
        Rfc2246(usize),
        Raw,
    }

    impl Mode {
        fn apply(self) -> (bool, bool, usize) {
            match self {
                Mode::Pkcs7 => (true, true, 0),
                Mode::Rfc2246(extra) => (true, false, extra),
                Mode::Raw => (false, true, 0),
            }
        }
    }

    fn mode() -> impl Strategy<Value = Mode> {
        prop_oneof![
            Just(Mode::Pkcs7),
            (0usize..=15).prop_map(Mode::Rfc2246),
            Just(Mode::Raw),
        ]
    }

    fn feed(data: &[u8], cuts: &[usize], mut add: impl FnMut(&[u8])) {
        let mut start = 0;
        for &cut in cuts {
            let end = core::cmp::max(start, cut % (data.len() + 1));
            add(&data[start..end]);
            start = end;
        }
        add(&data[start..]);
    }

    fn roundtrip<V: AesVariant>(
        key: &V::Key,
        iv: &[u8; BLOCK_LEN],
        mode: Mode,
        data: &[u8],
        cuts: &[usize],
    ) -> (Vec<u8>, Vec<u8>) {
        let (enabled, use_pkcs7, extra) = mode.apply();

        let mut enc = CbcEncrypt::<V>::new();
        enc.set_padding(enabled, use_pkcs7, extra).expect("Failed to set_padding()");
        enc.set_key(key);
        enc.set_iv(iv);
        feed(data, cuts, |chunk| enc.add(chunk).expect("Failed to add()"));
        enc.calculate().expect("Failed to calculate()");
        let ct = enc.get_data().expect("Failed to get_data()").to_vec();

        let mut dec = CbcDecrypt::<V>::new();
        dec.set_padding(enabled, use_pkcs7, 0).expect("Failed to set_padding()");
        dec.set_key(key);
        dec.set_iv(iv);
        feed(&ct, cuts, |chunk| dec.add(chunk).expect("Failed to add()"));
        dec.calculate().expect("Failed to calculate()");
        let pt = dec.get_data().expect("Failed to get_data()").to_vec();

        (ct, pt)
    }

    fn expected_ciphertext_len(mode: Mode, len: usize) -> usize {
        match mode {
            Mode::Pkcs7 => (len / BLOCK_LEN + 1) * BLOCK_LEN,
            Mode::Rfc2246(extra) => (len / BLOCK_LEN + 1 + extra) * BLOCK_LEN,
            Mode::Raw => len,
        }
    }

    fn aligned(mode: Mode, mut data: Vec<u8>) -> Vec<u8> {
        if let Mode::Raw = mode {
            data.truncate(data.len() - data.len() % BLOCK_LEN);
        }
        data
    }

    proptest! {
        #[test]
        fn proptest_aes128_roundtrip(
            key in any::<[u8; 16]>(),
            iv in any::<[u8; 16]>(),
            mode in mode(),
            data in proptest::collection::vec(any::<u8>(), 0..100),
            mut cuts in proptest::collection::vec(any::<usize>(), 0..6),
        ) {
            let data = aligned(mode, data);
            cuts.sort_unstable_by_key(|c| c % (data.len() + 1));

            let (ct, pt) = roundtrip::<Aes128>(&key, &iv, mode, &data, &cuts);
            prop_assert_eq!(ct.len(), expected_ciphertext_len(mode, data.len()));
            prop_assert_eq!(pt, data);
        }

        #[test]
        fn proptest_aes192_roundtrip(
            key in any::<[u8; 24]>(),
            iv in any::<[u8; 16]>(),
            mode in mode(),
            data in proptest::collection::vec(any::<u8>(), 0..100),
            mut cuts in proptest::collection::vec(any::<usize>(), 0..6),
        ) {
            let data = aligned(mode, data);
            cuts.sort_unstable_by_key(|c| c % (data.len() + 1));

            let (ct, pt) = roundtrip::<Aes192>(&key, &iv, mode, &data, &cuts);
            prop_assert_eq!(ct.len(), expected_ciphertext_len(mode, data.len()));
            prop_assert_eq!(pt, data);
        }

        #[test]
        fn proptest_aes256_roundtrip(
            key in any::<[u8; 32]>(),
            iv in any::<[u8; 16]>(),
            mode in mode(),
            data in proptest::collection::vec(any::<u8>(), 0..100),
            mut cuts in proptest::collection::vec(any::<usize>(), 0..6),
        ) {
            let data = aligned(mode, data);
            cuts.sort_unstable_by_key(|c| c % (data.len() + 1));

            let (ct, pt) = roundtrip::<Aes256>(&key, &iv, mode, &data, &cuts);
            prop_assert_eq!(ct.len(), expected_ciphertext_len(mode, data.len()));
            prop_assert_eq!(pt, data);
        }

        #[test]
        fn proptest_chunking_does_not_change_ciphertext(
            data in proptest::collection::vec(any::<u8>(), 0..100),
            mut cuts in proptest::collection::vec(any::<usize>(), 0..6),
        ) {
            cuts.sort_unstable_by_key(|c| c % (data.len() + 1));
            let key = [0x11u8; 32];
            let iv = [0x22u8; BLOCK_LEN];

            let (whole, _) = roundtrip::<Aes256>(&key, &iv, Mode::Pkcs7, &data, &[]);
            let (split, _) = roundtrip::<Aes256>(&key, &iv, Mode::Pkcs7, &data, &cuts);
            prop_assert_eq!(whole, split);
        }
    }
}
