// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod hex_to_bytes_tests {
    use pwstretch_util::hex_to_bytes;

    #[test]
    fn test_hex_to_bytes_lowercase() {
        assert_eq!(hex_to_bytes("74ba2521"), vec![0x74, 0xba, 0x25, 0x21]);
    }

    #[test]
    fn test_hex_to_bytes_uppercase() {
        assert_eq!(hex_to_bytes("D3"), vec![0xd3]);
    }

    #[test]
    fn test_hex_to_bytes_empty() {
        assert!(hex_to_bytes("").is_empty());
    }

    #[test]
    #[should_panic]
    fn test_hex_to_bytes_odd_length_panics() {
        let _ = hex_to_bytes("abc");
    }

    #[test]
    #[should_panic]
    fn test_hex_to_bytes_invalid_digit_panics() {
        let _ = hex_to_bytes("zz");
    }
}
