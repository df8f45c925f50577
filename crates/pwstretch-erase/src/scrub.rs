// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::mem::MaybeUninit;
use core::sync::atomic::{Ordering, compiler_fence};

/// Byte patterns written by every scrub, in order.
///
/// The last pattern is `0x00`, so a scrubbed buffer reads as all-zero.
pub const SCRUB_PATTERNS: [u8; 3] = [0x55, 0xAA, 0x00];

/// Size of the local buffer each [`scrub_stack`] frame overwrites.
pub const STACK_FRAME_LEN: usize = 32;

/// Runs the three scrub passes over `buffer`.
///
/// `after_pass` observes the buffer once per pattern. Production callers pass
/// a no-op; tests use it to check every byte really saw each pattern.
#[inline(always)]
pub(crate) fn scrub_passes<F>(buffer: &mut [u8], mut after_pass: F)
where
    F: FnMut(u8, &[u8]),
{
    for &pattern in SCRUB_PATTERNS.iter() {
        for byte in buffer.iter_mut() {
            // SAFETY: `byte` is a valid, exclusive reference.
            unsafe { core::ptr::write_volatile(byte, pattern) };
        }
        compiler_fence(Ordering::SeqCst);
        after_pass(pattern, buffer);
    }
}

/// Same three passes over memory that may not be initialized yet.
#[inline(always)]
fn scrub_uninit(slots: &mut [MaybeUninit<u8>]) {
    for &pattern in SCRUB_PATTERNS.iter() {
        for slot in slots.iter_mut() {
            // SAFETY: `slot` is valid for writes; writing a `u8` initializes it.
            unsafe { core::ptr::write_volatile(slot.as_mut_ptr(), pattern) };
        }
        compiler_fence(Ordering::SeqCst);
    }
}

/// Overwrites `buffer` with `0x55`, then `0xAA`, then `0x00`.
///
/// A zero-length buffer is a no-op. After the call every byte is `0x00`.
///
/// Never inlined: the call boundary plus volatile stores keep the writes
/// alive even when `buffer` is dead right after the call.
///
/// # Example
///
/// ```
/// use pwstretch_erase::scrub_buffer;
///
/// let mut key = [0xC3u8; 32];
/// scrub_buffer(&mut key);
/// assert_eq!(key, [0u8; 32]);
/// ```
#[inline(never)]
pub fn scrub_buffer(buffer: &mut [u8]) {
    if buffer.is_empty() {
        return;
    }

    scrub_passes(buffer, |_, _| {});
}

/// Scrubs at least `depth` bytes of stack below the caller's frame.
///
/// Each call places a [`STACK_FRAME_LEN`]-byte buffer in its own frame,
/// scrubs it, and recurses with `depth - STACK_FRAME_LEN` while `depth`
/// exceeds the frame size. `scrub_stack(0)` still scrubs one frame.
///
/// Call it right after returning from code that held key material in locals
/// or spilled registers: the new frames land on the same stack region.
/// Recursion depth is `depth / STACK_FRAME_LEN`, so keep `depth` in the
/// range of a few hundred bytes to a few kilobytes.
#[inline(never)]
pub fn scrub_stack(depth: usize) {
    scrub_stack_frames(depth, &mut |_, _| {});
}

/// Recursive body of [`scrub_stack`]. `after_pass` observes every pass of
/// every frame, in frame order.
#[inline(never)]
pub(crate) fn scrub_stack_frames(depth: usize, after_pass: &mut dyn FnMut(u8, &[u8])) {
    let mut frame = [0u8; STACK_FRAME_LEN];
    scrub_passes(core::hint::black_box(&mut frame), |pattern, bytes| {
        after_pass(pattern, bytes)
    });

    if depth > STACK_FRAME_LEN {
        scrub_stack_frames(depth - STACK_FRAME_LEN, after_pass);
    }

    // Keeps `frame` live across the recursive call, which rules out turning
    // the recursion into a loop that reuses this frame.
    core::hint::black_box(&frame);
}

/// Types whose sensitive bytes can be scrubbed in place.
///
/// Implementations apply the same three-pass pattern as [`scrub_buffer`].
pub trait Scrub {
    /// Scrubs the value in place; afterwards its bytes read as zero.
    fn scrub(&mut self);
}

impl Scrub for [u8] {
    fn scrub(&mut self) {
        scrub_buffer(self);
    }
}

impl<const N: usize> Scrub for [u8; N] {
    fn scrub(&mut self) {
        scrub_buffer(self);
    }
}

/// Scrubs the whole allocation, spare capacity included. Length and
/// capacity are unchanged.
impl Scrub for Vec<u8> {
    fn scrub(&mut self) {
        scrub_buffer(self.as_mut_slice());

        let spare = self.spare_capacity_mut();
        if !spare.is_empty() {
            scrub_uninit(spare);
        }
    }
}
