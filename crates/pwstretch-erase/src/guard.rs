// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! RAII guard that scrubs a borrowed buffer on drop.

use core::fmt;
use core::ops::{Deref, DerefMut};

use crate::scrub::scrub_buffer;

/// Borrows a sensitive buffer and scrubs it when dropped.
///
/// Drop runs on normal return and during unwinding, so the buffer is
/// scrubbed on every exit path of the scope that owns the guard.
///
/// # Example
///
/// ```
/// use pwstretch_erase::ScrubGuard;
///
/// let mut passphrase = *b"hunter2";
/// {
///     let guard = ScrubGuard::new(&mut passphrase);
///     assert_eq!(&guard[..], b"hunter2");
/// }
/// assert_eq!(passphrase, [0u8; 7]);
/// ```
pub struct ScrubGuard<'a> {
    inner: &'a mut [u8],
}

impl<'a> ScrubGuard<'a> {
    /// Wraps `inner`; it is scrubbed when the guard is dropped.
    pub fn new(inner: &'a mut [u8]) -> Self {
        Self { inner }
    }
}

impl fmt::Debug for ScrubGuard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED ScrubGuard]")
    }
}

impl Deref for ScrubGuard<'_> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl DerefMut for ScrubGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.inner
    }
}

impl Drop for ScrubGuard<'_> {
    fn drop(&mut self) {
        scrub_buffer(&mut *self.inner);
    }
}
