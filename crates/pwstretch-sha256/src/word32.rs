// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Word32 - 32-bit word wrapper for the SHA-256 working state.
//!
//! All operations are in-place so values never travel through unnamed
//! stack temporaries. The mixing functions zeroize their own temporaries
//! before returning.

use pwstretch_util::{u32_from_be, u32_to_be};
use zeroize::Zeroize;

/// 32-bit word with in-place arithmetic.
///
/// `#[repr(transparent)]` keeps the layout identical to `u32`.
#[derive(Clone, Zeroize)]
#[repr(transparent)]
pub(crate) struct Word32(u32);

impl Word32 {
    #[inline(always)]
    pub(crate) const fn new(value: u32) -> Self {
        Self(value)
    }

    #[inline(always)]
    pub(crate) const fn zero() -> Self {
        Self(0)
    }

    #[inline(always)]
    pub(crate) fn copy_from(&mut self, src: &Word32) {
        self.0 = src.0;
    }

    /// Loads a big-endian word, zeroizing `bytes`.
    #[inline(always)]
    pub(crate) fn fill_with_be_bytes(&mut self, bytes: &mut [u8; 4]) {
        u32_from_be(&mut self.0, bytes);
    }

    /// Stores the word as big-endian bytes, zeroizing `self`.
    #[inline(always)]
    pub(crate) fn export_as_be_bytes(&mut self, bytes: &mut [u8; 4]) {
        u32_to_be(&mut self.0, bytes);
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // In-place primitives
    // ═══════════════════════════════════════════════════════════════════════════

    #[inline(always)]
    pub(crate) fn wrapping_add_assign(&mut self, rhs: &Word32) {
        self.0 = self.0.wrapping_add(rhs.0);
    }

    #[inline(always)]
    pub(crate) fn wrapping_add_assign_val(&mut self, rhs: u32) {
        self.0 = self.0.wrapping_add(rhs);
    }

    #[inline(always)]
    fn xor_assign(&mut self, rhs: &Word32) {
        self.0 ^= rhs.0;
    }

    #[inline(always)]
    fn and_assign(&mut self, rhs: &Word32) {
        self.0 &= rhs.0;
    }

    #[inline(always)]
    fn or_assign(&mut self, rhs: &Word32) {
        self.0 |= rhs.0;
    }

    #[inline(always)]
    fn rotate_right_assign(&mut self, n: u32) {
        self.0 = self.0.rotate_right(n);
    }

    #[inline(always)]
    fn shift_right_assign(&mut self, n: u32) {
        self.0 >>= n;
    }

    /// out = ROTR^r1(x) ⊕ ROTR^r2(x) ⊕ ROTR^r3(x)
    #[inline(always)]
    fn set_rotations(out: &mut Word32, x: &Word32, r1: u32, r2: u32, r3: u32) {
        let mut v = Word32::zero();
        out.zeroize();

        for r in [r1, r2, r3] {
            v.copy_from(x);
            v.rotate_right_assign(r);
            out.xor_assign(&v);
        }

        v.zeroize();
    }

    /// out = ROTR^r1(x) ⊕ ROTR^r2(x) ⊕ SHR^s(x)
    #[inline(always)]
    fn set_rotations_shift(out: &mut Word32, x: &Word32, r1: u32, r2: u32, s: u32) {
        let mut v = Word32::zero();
        out.zeroize();

        for r in [r1, r2] {
            v.copy_from(x);
            v.rotate_right_assign(r);
            out.xor_assign(&v);
        }

        v.copy_from(x);
        v.shift_right_assign(s);
        out.xor_assign(&v);

        v.zeroize();
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // SHA-256 functions per FIPS 180-4 Section 4.1.2
    // ═══════════════════════════════════════════════════════════════════════════

    /// Ch(x,y,z) = (x ∧ y) ⊕ (¬x ∧ z), computed as z ⊕ (x ∧ (y ⊕ z))
    #[inline(always)]
    pub(crate) fn set_ch(out: &mut Word32, x: &Word32, y: &Word32, z: &Word32) {
        out.copy_from(y);
        out.xor_assign(z);
        out.and_assign(x);
        out.xor_assign(z);
    }

    /// Maj(x,y,z) = (x ∧ y) ⊕ (x ∧ z) ⊕ (y ∧ z), computed as ((x ∨ y) ∧ z) ∨ (x ∧ y)
    #[inline(always)]
    pub(crate) fn set_maj(out: &mut Word32, x: &Word32, y: &Word32, z: &Word32) {
        let mut xy = Word32::zero();
        xy.copy_from(x);
        xy.and_assign(y);

        out.copy_from(x);
        out.or_assign(y);
        out.and_assign(z);
        out.or_assign(&xy);

        xy.zeroize();
    }

    /// Σ0(x) = ROTR^2(x) ⊕ ROTR^13(x) ⊕ ROTR^22(x)
    #[inline(always)]
    pub(crate) fn set_big_sigma0(out: &mut Word32, x: &Word32) {
        Self::set_rotations(out, x, 2, 13, 22);
    }

    /// Σ1(x) = ROTR^6(x) ⊕ ROTR^11(x) ⊕ ROTR^25(x)
    #[inline(always)]
    pub(crate) fn set_big_sigma1(out: &mut Word32, x: &Word32) {
        Self::set_rotations(out, x, 6, 11, 25);
    }

    /// σ0(x) = ROTR^7(x) ⊕ ROTR^18(x) ⊕ SHR^3(x)
    #[inline(always)]
    pub(crate) fn set_small_sigma0(out: &mut Word32, x: &Word32) {
        Self::set_rotations_shift(out, x, 7, 18, 3);
    }

    /// σ1(x) = ROTR^17(x) ⊕ ROTR^19(x) ⊕ SHR^10(x)
    #[inline(always)]
    pub(crate) fn set_small_sigma1(out: &mut Word32, x: &Word32) {
        Self::set_rotations_shift(out, x, 17, 19, 10);
    }

    /// Raw value, for assertions only
    #[cfg(test)]
    #[inline(always)]
    pub(crate) fn value(&self) -> u32 {
        self.0
    }
}
