// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use pwstretch_erase::{Scrub, scrub_buffer};
use pwstretch_util::constant_time_eq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::DIGEST_LEN;

/// A 32-byte SHA-256 digest.
///
/// Compared by content (in constant time), never by identity. The bytes are
/// zeroized when the value is dropped and `Debug` output is redacted, since
/// a stretched digest is key material.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Digest length in bytes
    pub const LEN: usize = DIGEST_LEN;

    /// Wraps raw digest bytes.
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Borrows the digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    pub(crate) fn zeroed() -> Self {
        Self([0u8; DIGEST_LEN])
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8; DIGEST_LEN] {
        &mut self.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq for Digest {
    fn eq(&self, other: &Self) -> bool {
        constant_time_eq(&self.0, &other.0)
    }
}

impl Eq for Digest {}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest([REDACTED])")
    }
}

/// Lowercase hex, 64 characters.
impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl Scrub for Digest {
    fn scrub(&mut self) {
        scrub_buffer(&mut self.0);
    }
}
