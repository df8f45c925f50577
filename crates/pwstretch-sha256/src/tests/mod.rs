// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod padding;

use pwstretch_util::hex_to_bytes;

/// Decodes a 64-character hex digest.
pub(crate) fn expected_digest(hex: &str) -> [u8; 32] {
    let bytes = hex_to_bytes(hex);
    let mut out = [0u8; 32];
    out.copy_from_slice(&bytes);
    out
}
