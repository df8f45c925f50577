// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Best-effort scrubbing of sensitive bytes in memory and on the stack.
//!
//! Every scrub overwrites its target three times: `0x55`, then `0xAA`, then
//! `0x00`. Each byte is written with a volatile store and the passes are
//! separated by compiler fences, so the two non-zero passes cannot be
//! folded into the final zero pass by dead-store elimination.
//!
//! This is a pragmatic defense, not certified erasure. Copies left in CPU
//! caches, swapped-out pages, or temporaries the compiler introduced
//! elsewhere are not reached.
//!
//! # Example
//!
//! ```
//! use pwstretch_erase::{scrub_buffer, scrub_stack};
//!
//! let mut passphrase = *b"correct horse battery staple";
//! // ... derive a key from `passphrase` ...
//! scrub_buffer(&mut passphrase);
//! assert!(passphrase.iter().all(|&b| b == 0));
//!
//! // Overwrite the stack region the derivation just used.
//! scrub_stack(512);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod guard;
mod scrub;

pub use guard::ScrubGuard;
pub use scrub::{SCRUB_PATTERNS, STACK_FRAME_LEN, Scrub, scrub_buffer, scrub_stack};
