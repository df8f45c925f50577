// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 per FIPS 180-4 Section 6.2

use core::fmt;

use pwstretch_util::u64_to_be;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{BLOCK_BITS, BLOCK_LEN, DIGEST_LEN, H0, K256, LENGTH_OFFSET};
use crate::digest::Digest;
use crate::word32::Word32;

/// Streaming SHA-256 context.
///
/// Feed bytes with [`absorb`](Self::absorb) in any number of chunks, then
/// call [`finalize`](Self::finalize). The digest depends only on the
/// concatenation of the chunks.
///
/// The message schedule, working variables and round temporaries all live
/// in the struct. They are zeroized after every compression and the whole
/// context is zeroized on drop.
///
/// # Example
///
/// ```
/// use pwstretch_sha256::Sha256;
///
/// let mut sha = Sha256::new();
/// sha.absorb(b"ab");
/// sha.absorb(b"c");
/// assert_eq!(sha.finalize(), Sha256::digest(b"abc"));
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sha256 {
    // Hash state H(i)
    h: [Word32; 8],

    // Message schedule W[0..63]
    w: [Word32; 64],

    // Working variables a..h
    wv: [Word32; 8],

    // Round temporaries
    t1: Word32,
    t2: Word32,
    scratch: Word32,

    // Input buffering
    buffer: [u8; BLOCK_LEN],
    tmp_word: [u8; 4],
    tmp_len: [u8; 8],
    buffered_len: usize,

    // Bits passed through compression, excluding buffered bytes
    bits_processed: u64,
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Sha256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED Sha256]")
    }
}

/// Bit counter overflow: the message exceeds 2^64 - 1 bits.
#[cold]
#[inline(never)]
fn length_overflow() -> ! {
    panic!("SHA-256 message length exceeds 2^64 - 1 bits")
}

impl Sha256 {
    /// Creates a context initialized with H(0).
    pub fn new() -> Self {
        Self {
            h: H0.map(Word32::new),
            w: core::array::from_fn(|_| Word32::zero()),
            wv: core::array::from_fn(|_| Word32::zero()),
            t1: Word32::zero(),
            t2: Word32::zero(),
            scratch: Word32::zero(),
            buffer: [0u8; BLOCK_LEN],
            tmp_word: [0u8; 4],
            tmp_len: [0u8; 8],
            buffered_len: 0,
            bits_processed: 0,
        }
    }

    /// Hashes `data` in one call.
    pub fn digest(data: &[u8]) -> Digest {
        let mut sha = Self::new();
        sha.absorb(data);
        sha.finalize()
    }

    /// Appends `data` to the message.
    ///
    /// Every time the internal buffer reaches a full block it is compressed
    /// and the bit counter advances by 512.
    pub fn absorb(&mut self, data: &[u8]) {
        let mut rest = data;

        while !rest.is_empty() {
            let take = core::cmp::min(BLOCK_LEN - self.buffered_len, rest.len());

            self.buffer[self.buffered_len..self.buffered_len + take]
                .copy_from_slice(&rest[..take]);
            self.buffered_len += take;
            rest = &rest[take..];

            if self.buffered_len == BLOCK_LEN {
                self.compress();
                self.buffer.zeroize();
                self.buffered_len = 0;
                self.bits_processed = match self.bits_processed.checked_add(BLOCK_BITS) {
                    Some(bits) => bits,
                    None => length_overflow(),
                };
            }
        }
    }

    /// Pads the message and returns its digest, consuming the context.
    pub fn finalize(mut self) -> Digest {
        let mut digest = Digest::zeroed();
        self.finish(digest.as_bytes_mut());
        digest
    }

    /// Pads the message and writes its digest into `out`, consuming the context.
    pub fn finalize_into(mut self, out: &mut [u8; DIGEST_LEN]) {
        self.finish(out);
    }

    /// Returns the digest and resets the context to H(0).
    pub fn finalize_reset(&mut self) -> Digest {
        let mut digest = Digest::zeroed();
        self.finalize_reset_into(digest.as_bytes_mut());
        digest
    }

    /// Writes the digest into `out` and resets the context to H(0).
    ///
    /// After the call the context behaves exactly like [`Sha256::new`].
    pub fn finalize_reset_into(&mut self, out: &mut [u8; DIGEST_LEN]) {
        self.finish(out);
        self.reset();
    }

    /// Padding per FIPS 180-4 Section 5.1.1, then output H(N).
    ///
    /// Each word of H is exported through `export_as_be_bytes`, which
    /// zeroizes it, so H is all-zero afterwards. Callers either drop or reset
    /// the context.
    fn finish(&mut self, out: &mut [u8; DIGEST_LEN]) {
        let mut bit_len = match self
            .bits_processed
            .checked_add((self.buffered_len as u64) * 8)
        {
            Some(bits) => bits,
            None => length_overflow(),
        };

        // Append the '1' bit
        self.buffer[self.buffered_len] = 0x80;
        self.buffered_len += 1;

        // No room left for the length field: pad this block out and compress
        if self.buffered_len > LENGTH_OFFSET {
            self.buffer[self.buffered_len..].fill(0);
            self.compress();
            self.buffered_len = 0;
        }

        self.buffer[self.buffered_len..LENGTH_OFFSET].fill(0);
        u64_to_be(&mut bit_len, &mut self.tmp_len);
        self.buffer[LENGTH_OFFSET..].copy_from_slice(&self.tmp_len);
        self.tmp_len.zeroize();
        self.compress();

        self.buffer.zeroize();
        self.buffered_len = 0;

        for (chunk, word) in out.chunks_exact_mut(4).zip(self.h.iter_mut()) {
            word.export_as_be_bytes(&mut self.tmp_word);
            chunk.copy_from_slice(&self.tmp_word);
        }
        self.tmp_word.zeroize();
    }

    fn reset(&mut self) {
        self.zeroize();
        for (word, init) in self.h.iter_mut().zip(H0.iter()) {
            *word = Word32::new(*init);
        }
    }

    /// Compresses `self.buffer` into H per FIPS 180-4 Section 6.2.2.
    fn compress(&mut self) {
        // W[0..15]: the block as big-endian words
        for (t, chunk) in self.buffer.chunks_exact(4).enumerate() {
            self.tmp_word.copy_from_slice(chunk);
            self.w[t].fill_with_be_bytes(&mut self.tmp_word);
        }

        // W[16..63]: W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
        for t in 16..64 {
            let (prev, next) = self.w.split_at_mut(t);
            let wt = &mut next[0];

            Word32::set_small_sigma1(&mut self.scratch, &prev[t - 2]);
            wt.copy_from(&self.scratch);
            wt.wrapping_add_assign(&prev[t - 7]);

            Word32::set_small_sigma0(&mut self.scratch, &prev[t - 15]);
            wt.wrapping_add_assign(&self.scratch);
            wt.wrapping_add_assign(&prev[t - 16]);
        }
        self.scratch.zeroize();

        // a..h = H(i-1)
        for (v, h) in self.wv.iter_mut().zip(self.h.iter()) {
            v.copy_from(h);
        }

        for (k, wt) in K256.iter().zip(self.w.iter_mut()) {
            // T1 = h + Σ1(e) + Ch(e,f,g) + K[t] + W[t]
            self.t1.copy_from(&self.wv[7]);

            Word32::set_big_sigma1(&mut self.scratch, &self.wv[4]);
            self.t1.wrapping_add_assign(&self.scratch);

            Word32::set_ch(&mut self.scratch, &self.wv[4], &self.wv[5], &self.wv[6]);
            self.t1.wrapping_add_assign(&self.scratch);

            self.t1.wrapping_add_assign_val(*k);
            self.t1.wrapping_add_assign(wt);

            // W[t] is not read again
            wt.zeroize();

            // T2 = Σ0(a) + Maj(a,b,c)
            Word32::set_big_sigma0(&mut self.t2, &self.wv[0]);
            Word32::set_maj(&mut self.scratch, &self.wv[0], &self.wv[1], &self.wv[2]);
            self.t2.wrapping_add_assign(&self.scratch);

            // [a..h] -> [h, a, b, c, d, e, f, g], then e = d + T1, a = T1 + T2
            self.wv.rotate_right(1);
            self.wv[4].wrapping_add_assign(&self.t1);
            self.wv[0].copy_from(&self.t1);
            self.wv[0].wrapping_add_assign(&self.t2);
        }

        self.t1.zeroize();
        self.t2.zeroize();
        self.scratch.zeroize();

        // H(i) = H(i-1) + a..h
        for (h, v) in self.h.iter_mut().zip(self.wv.iter_mut()) {
            h.wrapping_add_assign(v);
            v.zeroize();
        }
    }

    /// Runs one compression on a caller-supplied state and block.
    #[cfg(test)]
    pub(crate) fn compress_block(h: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
        let mut sha = Self::new();
        for (word, value) in sha.h.iter_mut().zip(h.iter()) {
            *word = Word32::new(*value);
        }
        sha.buffer.copy_from_slice(block);

        sha.compress();

        for (value, word) in h.iter_mut().zip(sha.h.iter()) {
            *value = word.value();
        }
    }

    #[cfg(test)]
    pub(crate) fn buffered_len(&self) -> usize {
        self.buffered_len
    }

    #[cfg(test)]
    pub(crate) fn bits_processed(&self) -> u64 {
        self.bits_processed
    }

    #[cfg(test)]
    pub(crate) fn set_bits_processed(&mut self, bits: u64) {
        self.bits_processed = bits;
    }

    #[cfg(test)]
    pub(crate) fn working_state_is_zeroized(&self) -> bool {
        self.w.iter().all(|w| w.value() == 0)
            && self.wv.iter().all(|w| w.value() == 0)
            && self.t1.value() == 0
            && self.t2.value() == 0
            && self.scratch.value() == 0
            && self.tmp_word == [0u8; 4]
            && self.tmp_len == [0u8; 8]
    }

    /// Runs the padding and output step without consuming or resetting.
    #[cfg(test)]
    pub(crate) fn finish_in_place(&mut self, out: &mut [u8; DIGEST_LEN]) {
        self.finish(out);
    }

    #[cfg(test)]
    pub(crate) fn hash_state_is_zeroized(&self) -> bool {
        self.h.iter().all(|h| h.value() == 0)
    }
}
