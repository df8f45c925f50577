// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Key stretching error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StretchError {
    /// Output buffer is not exactly one digest long
    #[error("output buffer must be {expected} bytes, got {actual}")]
    OutputLength {
        /// Required length
        expected: usize,
        /// Length supplied by the caller
        actual: usize,
    },
}
