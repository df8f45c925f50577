// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Iterated SHA-256 key stretching.
//!
//! `stretch(p, n)` applies SHA-256 exactly `n + 1` times: once to the
//! passphrase, then `n` more times to the previous digest. Stored key
//! material depends on this count, so `stretch(p, 0)` is plain `SHA-256(p)`.

use pwstretch_erase::{ScrubGuard, scrub_buffer, scrub_stack};
use pwstretch_sha256::{DIGEST_LEN, Digest, Sha256};

use crate::error::StretchError;

/// Stack depth scrubbed by the entry points after a derivation.
pub const BRIDGE_STACK_SCRUB_DEPTH: usize = 512;

/// Runs the iteration loop over a context that has already absorbed the
/// passphrase material.
fn iterate(mut sha: Sha256, iterations: u32) -> Digest {
    let mut work = [0u8; DIGEST_LEN];

    sha.finalize_reset_into(&mut work);
    for _ in 0..iterations {
        sha.absorb(&work);
        sha.finalize_reset_into(&mut work);
    }

    let digest = Digest::from_bytes(work);
    scrub_buffer(&mut work);
    digest
}

/// Stretches `passphrase` with `iterations + 1` rounds of SHA-256.
///
/// Deterministic and free of side effects beyond scrubbing its own
/// intermediates. No text encoding happens here; callers pass the bytes
/// they want hashed.
///
/// # Example
///
/// ```
/// use pwstretch::{Sha256, stretch};
///
/// assert_eq!(stretch(b"password", 0), Sha256::digest(b"password"));
///
/// let once_more = Sha256::digest(Sha256::digest(b"password").as_bytes());
/// assert_eq!(stretch(b"password", 1), once_more);
/// ```
pub fn stretch(passphrase: &[u8], iterations: u32) -> Digest {
    let mut sha = Sha256::new();
    sha.absorb(passphrase);
    iterate(sha, iterations)
}

/// Stretches `passphrase || salt`, the salted form used by password
/// database headers.
///
/// The concatenation is absorbed in two pieces and never copied into a
/// separate buffer.
///
/// # Example
///
/// ```
/// use pwstretch::{stretch, stretch_salted};
///
/// let salt = [0x11u8; 32];
/// let joined = [b"passphrase".as_slice(), salt.as_slice()].concat();
/// assert_eq!(stretch_salted(b"passphrase", &salt, 2048), stretch(&joined, 2048));
/// ```
pub fn stretch_salted(passphrase: &[u8], salt: &[u8], iterations: u32) -> Digest {
    let mut sha = Sha256::new();
    sha.absorb(passphrase);
    sha.absorb(salt);
    iterate(sha, iterations)
}

/// Entry point for foreign callers: [`stretch`] followed by a stack scrub.
///
/// The stretch frames have been popped by the time the scrub runs, so the
/// scrub frames overwrite the region they used.
#[inline(never)]
pub fn digest(passphrase: &[u8], iterations: u32) -> Digest {
    let digest = stretch(passphrase, iterations);
    scrub_stack(BRIDGE_STACK_SCRUB_DEPTH);
    digest
}

/// Like [`digest`], writing into a caller-owned buffer.
///
/// `out` must be exactly [`DIGEST_LEN`] bytes. On error nothing is derived
/// and `out` is left untouched.
///
/// # Example
///
/// ```
/// use pwstretch::{StretchError, digest_into};
///
/// let mut out = [0u8; 32];
/// digest_into(b"password", 1000, &mut out).expect("Failed to digest_into(..)");
///
/// let mut short = [0u8; 16];
/// assert_eq!(
///     digest_into(b"password", 1000, &mut short),
///     Err(StretchError::OutputLength { expected: 32, actual: 16 })
/// );
/// ```
#[inline(never)]
pub fn digest_into(
    passphrase: &[u8],
    iterations: u32,
    out: &mut [u8],
) -> Result<(), StretchError> {
    let actual = out.len();
    let out: &mut [u8; DIGEST_LEN] = out
        .try_into()
        .map_err(|_| StretchError::OutputLength { expected: DIGEST_LEN, actual })?;

    let digest = stretch(passphrase, iterations);
    out.copy_from_slice(digest.as_bytes());
    drop(digest);

    scrub_stack(BRIDGE_STACK_SCRUB_DEPTH);
    Ok(())
}

/// Full caller discipline in one call: stretch, scrub the passphrase
/// buffer, scrub the stack.
///
/// The passphrase buffer is scrubbed even if the derivation unwinds.
///
/// # Example
///
/// ```
/// use pwstretch::{digest_and_scrub, stretch};
///
/// let mut passphrase = *b"hunter2";
/// let key = digest_and_scrub(&mut passphrase, 10);
///
/// assert_eq!(passphrase, [0u8; 7]);
/// assert_eq!(key, stretch(b"hunter2", 10));
/// ```
#[inline(never)]
pub fn digest_and_scrub(passphrase: &mut [u8], iterations: u32) -> Digest {
    let digest = {
        let guard = ScrubGuard::new(passphrase);
        stretch(&guard, iterations)
    };

    scrub_stack(BRIDGE_STACK_SCRUB_DEPTH);
    digest
}
