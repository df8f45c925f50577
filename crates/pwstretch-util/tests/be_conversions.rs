// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod be_conversions_tests {
    use pwstretch_util::{u32_from_be, u32_to_be, u64_from_be, u64_to_be};

    #[test]
    fn test_u32_from_be() {
        let mut value: u32 = 0xFFFF_FFFF;
        let mut bytes = [0x01, 0x02, 0x03, 0x04];
        u32_from_be(&mut value, &mut bytes);
        assert_eq!(value, 0x0102_0304);
        assert_eq!(bytes, [0, 0, 0, 0]);
    }

    #[test]
    fn test_u32_to_be() {
        let mut value: u32 = 0x0102_0304;
        let mut bytes = [0u8; 4];
        u32_to_be(&mut value, &mut bytes);
        assert_eq!(bytes, [0x01, 0x02, 0x03, 0x04]);
        assert_eq!(value, 0);
    }

    #[test]
    fn test_u32_matches_core_be_layout() {
        let mut value: u32 = 0x6a09_e667;
        let mut bytes = [0u8; 4];
        u32_to_be(&mut value, &mut bytes);
        assert_eq!(bytes, 0x6a09_e667u32.to_be_bytes());
    }

    #[test]
    fn test_u64_from_be() {
        let mut value: u64 = 0;
        let mut bytes = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        u64_from_be(&mut value, &mut bytes);
        assert_eq!(value, 0x0102_0304_0506_0708);
        assert_eq!(bytes, [0; 8]);
    }

    #[test]
    fn test_u64_to_be() {
        let mut value: u64 = 0x0102_0304_0506_0708;
        let mut bytes = [0u8; 8];
        u64_to_be(&mut value, &mut bytes);
        assert_eq!(bytes, [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]);
        assert_eq!(value, 0);
    }

    #[test]
    fn test_u64_to_be_bit_length_field() {
        // 3-byte message, length field as it appears in the final block
        let mut bits: u64 = 24;
        let mut bytes = [0xFFu8; 8];
        u64_to_be(&mut bits, &mut bytes);
        assert_eq!(bytes, [0, 0, 0, 0, 0, 0, 0, 0x18]);
    }
}
