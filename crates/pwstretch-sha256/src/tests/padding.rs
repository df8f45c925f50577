// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use super::expected_digest;
use crate::{DIGEST_LEN, Sha256};

#[test]
fn test_counter_excludes_buffered_bytes() {
    let mut sha = Sha256::new();

    sha.absorb(&[0u8; 63]);
    assert_eq!(sha.bits_processed(), 0);
    assert_eq!(sha.buffered_len(), 63);

    sha.absorb(&[0u8; 1]);
    assert_eq!(sha.bits_processed(), 512);
    assert_eq!(sha.buffered_len(), 0);

    sha.absorb(&[0u8; 130]);
    assert_eq!(sha.bits_processed(), 3 * 512);
    assert_eq!(sha.buffered_len(), 2);
}

#[test]
fn test_buffered_len_stays_below_block_len() {
    let mut sha = Sha256::new();
    for len in [1usize, 7, 63, 64, 65, 127, 128, 200] {
        sha.absorb(&vec![0xEEu8; len]);
        assert!(sha.buffered_len() < 64);
    }
}

#[test]
fn test_working_state_zeroized_after_compression() {
    let mut sha = Sha256::new();
    sha.absorb(&[0x42u8; 64]);
    assert!(sha.working_state_is_zeroized());
}

#[test]
fn test_finish_leaves_hash_state_and_scratch_zeroized() {
    let mut sha = Sha256::new();
    sha.absorb(b"abc");

    let mut out = [0u8; DIGEST_LEN];
    sha.finish_in_place(&mut out);

    assert_eq!(
        out,
        expected_digest("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
    );
    assert!(sha.hash_state_is_zeroized());
    assert!(sha.working_state_is_zeroized());
}

#[test]
fn test_two_byte_length_field() {
    // 200 bytes = 1600 bits = 0x0640, spread over two length bytes
    let mut sha = Sha256::new();
    sha.absorb(&[0xA3u8; 200]);

    let mut out = [0u8; DIGEST_LEN];
    sha.finish_in_place(&mut out);

    assert_eq!(
        out,
        expected_digest("8edfea24cad8f0e6da7fb5ebde442300fdf913be8a3bdfce06557e34d8f4efa3")
    );
    assert!(sha.working_state_is_zeroized());
}

#[test]
fn test_finalize_reset_matches_fresh_context() {
    let mut sha = Sha256::new();
    sha.absorb(b"first message");
    let first = sha.finalize_reset();
    assert_eq!(first, Sha256::digest(b"first message"));

    assert_eq!(sha.bits_processed(), 0);
    assert_eq!(sha.buffered_len(), 0);

    sha.absorb(b"abc");
    assert_eq!(sha.finalize_reset(), Sha256::digest(b"abc"));
    assert_eq!(sha.finalize(), Sha256::digest(b""));
}

#[test]
fn test_clone_forks_prefix() {
    let mut prefix = Sha256::new();
    prefix.absorb(b"passphrase");

    let mut left = prefix.clone();
    left.absorb(b"-salt-1");
    let mut right = prefix;
    right.absorb(b"-salt-2");

    assert_eq!(left.finalize(), Sha256::digest(b"passphrase-salt-1"));
    assert_eq!(right.finalize(), Sha256::digest(b"passphrase-salt-2"));
}

#[test]
fn test_debug_is_redacted() {
    let mut sha = Sha256::new();
    sha.absorb(b"secret");
    assert_eq!(format!("{:?}", sha), "[REDACTED Sha256]");
}

#[test]
#[should_panic(expected = "exceeds 2^64 - 1 bits")]
fn test_counter_overflow_on_absorb_is_fatal() {
    let mut sha = Sha256::new();
    sha.set_bits_processed(u64::MAX - 511);
    sha.absorb(&[0u8; 64]);
}

#[test]
#[should_panic(expected = "exceeds 2^64 - 1 bits")]
fn test_counter_overflow_on_finalize_is_fatal() {
    let mut sha = Sha256::new();
    sha.set_bits_processed(u64::MAX - 7);
    sha.absorb(&[0u8; 1]);
    let _ = sha.finalize();
}
