// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! RFC 2202 (HMAC-MD5, HMAC-SHA-1) and RFC 4231 (HMAC-SHA-2) test cases.

use rampart_zero::AssertZeroizeOnDrop;

use crate::{
    CryptoError, HashEngine, HexCase, Hmac, Md5, Sha1, Sha224, Sha256, Sha384, Sha512,
};

const HI_THERE: &[u8] = b"Hi There";
const JEFE: &[u8] = b"Jefe";
const WHAT_DO_YA: &[u8] = b"what do ya want for nothing?";
const LARGE_KEY_TEXT: &[u8] = b"Test Using Larger Than Block-Size Key - Hash Key First";

fn mac_hex<E: HashEngine>(key: &[u8], data: &[u8]) -> String {
    let mut mac = Hmac::<E>::new(key).expect("Failed to new()");
    mac.add(data);
    mac.calculate().expect("Failed to calculate()");
    mac.get_hash_hex(HexCase::Lower).expect("Failed to get_hash_hex()")
}

#[test]
fn test_hmac_md5_rfc2202() {
    assert_eq!(mac_hex::<Md5>(&[0x0b; 16], HI_THERE), "9294727a3638bb1c13f48ef8158bfc9d");
    assert_eq!(mac_hex::<Md5>(JEFE, WHAT_DO_YA), "750c783e6ab0b503eaa86e310a5db738");
    assert_eq!(mac_hex::<Md5>(&[0xaa; 16], &[0xdd; 50]), "56be34521d144c88dbb8c733f0e8b3f6");
    assert_eq!(mac_hex::<Md5>(&[0xaa; 80], LARGE_KEY_TEXT), "6b1ab7fe4bd7bf8f0b62e6ce61b9d0cd");
}

#[test]
fn test_hmac_sha1_rfc2202() {
    assert_eq!(
        mac_hex::<Sha1>(&[0x0b; 20], HI_THERE),
        "b617318655057264e28bc0b6fb378c8ef146be00"
    );
    assert_eq!(mac_hex::<Sha1>(JEFE, WHAT_DO_YA), "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79");
    assert_eq!(
        mac_hex::<Sha1>(&[0xaa; 80], LARGE_KEY_TEXT),
        "aa4ae5e15272d00e95705637ce8a3b55ed402112"
    );
}

#[test]
fn test_hmac_sha224_rfc4231() {
    assert_eq!(
        mac_hex::<Sha224>(&[0x0b; 20], HI_THERE),
        "896fb1128abbdf196832107cd49df33f47b4b1169912ba4f53684b22"
    );
    assert_eq!(
        mac_hex::<Sha224>(JEFE, WHAT_DO_YA),
        "a30e01098bc6dbbf45690f3a7e9e6d0f8bbea2a39e6148008fd05e44"
    );
    assert_eq!(
        mac_hex::<Sha224>(&[0xaa; 131], LARGE_KEY_TEXT),
        "95e9a0db962095adaebe9b2d6f0dbce2d499f112f2d2b7273fa6870e"
    );
}

#[test]
fn test_hmac_sha256_rfc4231() {
    assert_eq!(
        mac_hex::<Sha256>(&[0x0b; 20], HI_THERE),
        "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7"
    );
    assert_eq!(
        mac_hex::<Sha256>(JEFE, WHAT_DO_YA),
        "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
    );
    assert_eq!(
        mac_hex::<Sha256>(&[0xaa; 131], LARGE_KEY_TEXT),
        "60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54"
    );
}

#[test]
fn test_hmac_sha384_rfc4231() {
    assert_eq!(
        mac_hex::<Sha384>(&[0x0b; 20], HI_THERE),
        "afd03944d84895626b0825f4ab46907f15f9dadbe4101ec682aa034c7cebc59cfaea9ea9076ede7f4af152e8b2fa9cb6"
    );
    assert_eq!(
        mac_hex::<Sha384>(JEFE, WHAT_DO_YA),
        "af45d2e376484031617f78d2b58a6b1b9c7ef464f5a01b47e42ec3736322445e8e2240ca5e69e2c78b3239ecfab21649"
    );
    assert_eq!(
        mac_hex::<Sha384>(&[0xaa; 131], LARGE_KEY_TEXT),
        "4ece084485813e9088d2c63a041bc5b44f9ef1012a2b588f3cd11f05033ac4c60c2ef6ab4030fe8296248df163f44952"
    );
}

#[test]
fn test_hmac_sha512_rfc4231() {
    assert_eq!(
        mac_hex::<Sha512>(&[0x0b; 20], HI_THERE),
        "87aa7cdea5ef619d4ff0b4241a1d6cb02379f4e2ce4ec2787ad0b30545e17cdedaa833b7d6b8a702038b274eaea3f4e4be9d914eeb61f1702e696c203a126854"
    );
    assert_eq!(
        mac_hex::<Sha512>(JEFE, WHAT_DO_YA),
        "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea2505549758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
    );
    assert_eq!(
        mac_hex::<Sha512>(&[0xaa; 131], LARGE_KEY_TEXT),
        "80b24263c7c1a3ebb71493c1dd7be8b49b46d1f41b4aeec1121b013783f8f3526b56d037e05f2598bd0fd2215d6a1e5295e64f73f63f0aec8b915a985d786598"
    );
}

#[test]
fn test_mac_before_calculate_is_not_yet_computed() {
    let mut mac = Hmac::<Sha256>::new(JEFE).expect("Failed to new()");
    mac.add(WHAT_DO_YA);

    assert_eq!(mac.get_hash_vec(), Err(CryptoError::NotYetComputed));
    assert_eq!(mac.verify(&[0u8; 32]), Err(CryptoError::NotYetComputed));
}

#[test]
fn test_add_after_calculate_restarts_with_same_key() {
    let mut mac = Hmac::<Sha256>::new(JEFE).expect("Failed to new()");
    mac.add(b"first message");
    mac.calculate().expect("Failed to calculate()");

    mac.add(WHAT_DO_YA);
    mac.calculate().expect("Failed to calculate()");

    assert_eq!(
        mac.get_hash_hex(HexCase::Lower).expect("Failed to get_hash_hex()"),
        mac_hex::<Sha256>(JEFE, WHAT_DO_YA)
    );
}

#[test]
fn test_second_calculate_yields_empty_message_mac() {
    let mut mac = Hmac::<Sha1>::new(JEFE).expect("Failed to new()");
    mac.add(WHAT_DO_YA);
    mac.calculate().expect("Failed to calculate()");
    mac.calculate().expect("Failed to calculate()");

    assert_eq!(
        mac.get_hash_hex(HexCase::Lower).expect("Failed to get_hash_hex()"),
        mac_hex::<Sha1>(JEFE, b"")
    );
}

#[test]
fn test_set_hmac_rekeys_and_discards_message() {
    let mut mac = Hmac::<Md5>::new(b"old key").expect("Failed to new()");
    mac.add(b"never authenticated");

    mac.set_hmac(JEFE).expect("Failed to set_hmac()");
    mac.add(WHAT_DO_YA);
    mac.calculate().expect("Failed to calculate()");

    assert_eq!(
        mac.get_hash_hex(HexCase::Lower).expect("Failed to get_hash_hex()"),
        "750c783e6ab0b503eaa86e310a5db738"
    );
}

#[test]
fn test_verify_and_lengths() {
    let mut mac = Hmac::<Sha384>::new(JEFE).expect("Failed to new()");
    mac.add(WHAT_DO_YA);
    mac.calculate().expect("Failed to calculate()");

    let expected = mac.get_hash_vec().expect("Failed to get_hash_vec()");
    assert_eq!(mac.digest_len(), 48);
    assert_eq!(expected.len(), 48);
    assert_eq!(mac.verify(&expected), Ok(true));

    let mut tampered = expected.clone();
    tampered[47] ^= 1;
    assert_eq!(mac.verify(&tampered), Ok(false));
    assert_eq!(mac.verify(&expected[..47]), Ok(false));

    let mut short = [0u8; 47];
    assert_eq!(mac.get_hash(&mut short), Err(CryptoError::LengthMismatch));
}

#[test]
fn test_debug_redacts_key() {
    let mac = Hmac::<Sha256>::new(b"hunter2").expect("Failed to new()");
    let rendered = format!("{mac:?}");

    assert!(rendered.contains("REDACTED"));
    assert!(!rendered.contains("hunter2"));
}

#[test]
fn test_hmac_zeroizes_on_drop() {
    let mut mac = Hmac::<Sha512>::new(&[0xaa; 131]).expect("Failed to new()");
    mac.add(LARGE_KEY_TEXT);
    mac.calculate().expect("Failed to calculate()");
    mac.assert_zeroize_on_drop();
}
