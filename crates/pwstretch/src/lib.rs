// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # pwstretch
//!
//! Iterated SHA-256 key stretching for passphrase-protected databases, with
//! best-effort scrubbing of every sensitive intermediate.
//!
//! ## Quick Start
//!
//! ```rust
//! use pwstretch::{digest_and_scrub, stretch_salted};
//!
//! // Salted stretch, as stored in a database header
//! let salt = [0x5Au8; 32];
//! let key = stretch_salted(b"correct horse", &salt, 2048);
//! assert_eq!(key.as_bytes().len(), 32);
//!
//! // Foreign-caller discipline: the passphrase buffer and the stack are
//! // scrubbed before the digest is handed back.
//! let mut passphrase = b"correct horse".to_vec();
//! let _key = digest_and_scrub(&mut passphrase, 2048);
//! assert!(passphrase.iter().all(|&b| b == 0));
//! ```
//!
//! ## What's Included
//!
//! - **Key stretching**: [`stretch`], [`stretch_salted`]
//! - **Entry points**: [`digest`], [`digest_into`], [`digest_and_scrub`]
//! - **Hash engine**: [`Sha256`], [`Digest`] (from `pwstretch-sha256`)
//! - **Scrubbing**: [`scrub_buffer`], [`scrub_stack`], [`Scrub`], [`ScrubGuard`]
//!   (from `pwstretch-erase`)
//!
//! All operations are synchronous and run on the calling thread. There is no
//! global state.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod stretch;

pub use error::StretchError;
pub use stretch::{
    BRIDGE_STACK_SCRUB_DEPTH, digest, digest_and_scrub, digest_into, stretch, stretch_salted,
};

pub use pwstretch_erase::{
    SCRUB_PATTERNS, STACK_FRAME_LEN, Scrub, ScrubGuard, scrub_buffer, scrub_stack,
};
pub use pwstretch_sha256::{BLOCK_LEN, DIGEST_LEN, Digest, Sha256};
