// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming SHA-256 with zeroized working state.
//!
//! Portable implementation per FIPS 180-4. Each [`Sha256`] context is an
//! owned value with no shared state, so independent contexts can run on
//! different threads without synchronization.
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod consts;
mod digest;
mod sha256;
mod word32;

pub use consts::{BLOCK_LEN, DIGEST_LEN};
pub use digest::Digest;
pub use sha256::Sha256;
