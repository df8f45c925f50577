// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte-level helpers shared by the pwstretch crates.
//!
//! The big-endian conversions zeroize their source after reading, so a word
//! that has been moved into its destination does not also linger in the
//! scratch slot it came from.

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "test-utils")]
extern crate alloc;

/// Generates `{type}_from_be` and `{type}_to_be` functions for integer types.
macro_rules! impl_be_conversions {
    ($type:ty, $size:expr, $fn_from:ident, $fn_to:ident) => {
        #[doc = concat!("Reads ", stringify!($size), " big-endian bytes into a `", stringify!($type), "`, zeroizing the source bytes.")]
        ///
        /// The value is assembled with shifts so no intermediate byte array
        /// is created on the stack.
        #[inline(always)]
        pub fn $fn_from(dst: &mut $type, bytes: &mut [u8; $size]) {
            *dst = 0;
            for byte in bytes.iter_mut() {
                *dst = (*dst << 8) | (*byte as $type);
                *byte = 0;
            }
        }

        #[doc = concat!("Writes a `", stringify!($type), "` as big-endian bytes, zeroizing the source value.")]
        #[inline(always)]
        pub fn $fn_to(src: &mut $type, bytes: &mut [u8; $size]) {
            for (i, byte) in bytes.iter_mut().enumerate() {
                *byte = (*src >> (8 * ($size - 1 - i))) as u8;
            }
            *src = 0;
        }
    };
}

impl_be_conversions!(u32, 4, u32_from_be, u32_to_be);
impl_be_conversions!(u64, 8, u64_from_be, u64_to_be);

/// Constant-time equality comparison for byte slices.
///
/// Slices of different length compare unequal immediately; the length is
/// not considered secret. For equal lengths every byte pair is visited.
///
/// # Example
///
/// ```
/// use pwstretch_util::constant_time_eq;
///
/// assert!(constant_time_eq(&[1, 2, 3], &[1, 2, 3]));
/// assert!(!constant_time_eq(&[1, 2, 3], &[1, 2, 4]));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let diff = a
        .iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y));

    core::hint::black_box(diff) == 0
}

/// Returns `true` if every byte of the slice is zero.
///
/// # Example
///
/// ```
/// use pwstretch_util::is_slice_zeroized;
///
/// assert!(is_slice_zeroized(&[0u8; 8]));
/// assert!(!is_slice_zeroized(&[0u8, 0, 1]));
/// ```
#[inline(always)]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Parses a hexadecimal string into bytes.
///
/// # Panics
///
/// Panics on odd length or non-hex characters. Test helper only.
///
/// # Example
///
/// ```
/// use pwstretch_util::hex_to_bytes;
///
/// assert_eq!(hex_to_bytes("deadbeef"), vec![0xde, 0xad, 0xbe, 0xef]);
/// ```
#[cfg(feature = "test-utils")]
pub fn hex_to_bytes(hex: &str) -> alloc::vec::Vec<u8> {
    assert!(hex.len() % 2 == 0, "hex string must have even length");

    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("invalid hex digit"))
        .collect()
}
