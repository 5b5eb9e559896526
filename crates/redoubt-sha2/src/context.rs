// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The streaming engine: owns chaining state, the partial-block buffer, and
//! the 128-bit bit-length counter; drives the block transform.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::BLOCK_LEN;
use crate::digest::Digest;
use crate::error::HashError;
use crate::transform::compress;
use crate::variant::Variant;

/// Streaming SHA-384/SHA-512 context.
///
/// Created by [`Sha2Context::new`], fed by repeated [`Sha2Context::update`]
/// calls, and consumed by [`Sha2Context::finalize`]. `finalize` takes `self`
/// by value, so a context cannot be reused or finalized twice — the compiler
/// rejects it, with no need for a runtime "already finalized" check.
///
/// Digest depends only on the concatenation of bytes passed to `update`
/// across all calls, never on how the caller chose to split them
/// (chunking invariance) — see the crate-level tests for this property.
///
/// All fields, including the partial-block buffer, are zeroized when the
/// context is dropped, whether by normal consumption in `finalize` or by an
/// early return/panic while the context is still in scope.
#[derive(ZeroizeOnDrop)]
pub struct Sha2Context {
    h: [u64; 8],
    buf: [u8; BLOCK_LEN],
    buf_used: usize,
    bitlen: u128,
    variant: Variant,
}

impl Zeroize for Sha2Context {
    fn zeroize(&mut self) {
        self.h.zeroize();
        self.buf.zeroize();
        self.buf_used.zeroize();
        self.bitlen.zeroize();
        self.variant.zeroize();
    }
}

impl Sha2Context {
    /// Initializes a context for `variant`. Cannot fail.
    pub fn new(variant: Variant) -> Self {
        Self {
            h: variant.iv(),
            buf: [0u8; BLOCK_LEN],
            buf_used: 0,
            bitlen: 0,
            variant,
        }
    }

    /// Appends `data` to the message. Produces the same final digest
    /// regardless of how the total input is partitioned across calls.
    pub fn update(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }

        // 128-bit accumulator: never overflows for any message length a
        // real caller could construct (2^125 bytes is already far beyond
        // FIPS 180-4's defined maximum message length of 2^128 - 1 bits).
        self.bitlen += (data.len() as u128) * 8;

        let mut data = data;

        if self.buf_used > 0 {
            let space = BLOCK_LEN - self.buf_used;
            let take = space.min(data.len());

            self.buf[self.buf_used..self.buf_used + take].copy_from_slice(&data[..take]);
            self.buf_used += take;
            data = &data[take..];

            if self.buf_used == BLOCK_LEN {
                let block = self.buf;
                compress(&mut self.h, &block);
                self.buf_used = 0;
            }
        }

        // Whole blocks, read directly from the caller's slice. Bytes are
        // decoded big-endian one at a time inside `compress` (via
        // `from_be_bytes` on 8-byte sub-slices), so this never depends on
        // the host's pointer alignment.
        while data.len() >= BLOCK_LEN {
            let block: [u8; BLOCK_LEN] = data[..BLOCK_LEN]
                .try_into()
                .expect("length checked by the loop condition");
            compress(&mut self.h, &block);
            data = &data[BLOCK_LEN..];
        }

        if !data.is_empty() {
            self.buf[..data.len()].copy_from_slice(data);
            self.buf_used = data.len();
        }
    }

    /// Pads, processes the final block(s), and returns the digest.
    ///
    /// Consumes `self`: the context is zeroized as part of being dropped at
    /// the end of this call, whatever path is taken to return.
    pub fn finalize(mut self) -> Result<Digest, HashError> {
        // `Variant` is an exhaustive two-value enum reachable only through
        // `new`, so this can never actually fail through the safe API; the
        // `Result` return type documents the abstract contract (FIPS 180-4
        // implementations historically guard against a corrupted tag here).
        let digest_len = self.variant.digest_len();

        // Snapshot taken before any further buffer mutation: `bitlen` is the
        // total bit length accumulated by every `update` call so far.
        let bit_len = self.bitlen;

        self.buf[self.buf_used] = 0x80;
        self.buf_used += 1;

        if self.buf_used > BLOCK_LEN - 16 {
            for byte in &mut self.buf[self.buf_used..BLOCK_LEN] {
                *byte = 0;
            }
            let block = self.buf;
            compress(&mut self.h, &block);
            self.buf_used = 0;
        }

        for byte in &mut self.buf[self.buf_used..BLOCK_LEN - 16] {
            *byte = 0;
        }
        self.buf[BLOCK_LEN - 16..BLOCK_LEN].copy_from_slice(&bit_len.to_be_bytes());

        let block = self.buf;
        compress(&mut self.h, &block);

        let mut bytes = [0u8; crate::consts::MAX_DIGEST_LEN];
        for (i, word) in self.h.iter().enumerate() {
            bytes[i * 8..(i + 1) * 8].copy_from_slice(&word.to_be_bytes());
        }

        Ok(Digest {
            bytes,
            len: digest_len,
        })
    }
}
