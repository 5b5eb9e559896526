// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The SHA-2 (64-bit) block transform, per FIPS 180-4 §6.4.2.
//!
//! Pure function: maps a chaining state and one 128-byte block to a new
//! chaining state. Reads no other context field (no buffer, no bit counter)
//! and has no side effects beyond the caller-visible output.

use core::sync::atomic::{compiler_fence, Ordering};
use zeroize::Zeroize;

use crate::consts::{BLOCK_LEN, K};

#[inline(always)]
const fn rotr(x: u64, n: u32) -> u64 {
    x.rotate_right(n)
}

#[inline(always)]
const fn ch(x: u64, y: u64, z: u64) -> u64 {
    (x & y) ^ (!x & z)
}

#[inline(always)]
const fn maj(x: u64, y: u64, z: u64) -> u64 {
    (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
const fn bsig0(x: u64) -> u64 {
    rotr(x, 28) ^ rotr(x, 34) ^ rotr(x, 39)
}

#[inline(always)]
const fn bsig1(x: u64) -> u64 {
    rotr(x, 14) ^ rotr(x, 18) ^ rotr(x, 41)
}

#[inline(always)]
const fn ssig0(x: u64) -> u64 {
    rotr(x, 1) ^ rotr(x, 8) ^ (x >> 7)
}

#[inline(always)]
const fn ssig1(x: u64) -> u64 {
    rotr(x, 19) ^ rotr(x, 61) ^ (x >> 6)
}

/// Compresses one 128-byte block into the chaining state `h`.
///
/// `h` is updated in place per FIPS 180-4 §6.4.2 step 4 (feed-forward);
/// `block` is read-only and untouched. The message schedule `w` is a local,
/// stack-resident scratch table zeroized before return — it briefly holds
/// input-derived values and nothing about this function's contract requires
/// it to survive past the call.
pub(crate) fn compress(h: &mut [u64; 8], block: &[u8; BLOCK_LEN]) {
    let mut w = [0u64; 80];

    // Step 1: message schedule, FIPS 180-4 §6.4.2 step 1.
    for (t, chunk) in block.chunks_exact(8).enumerate() {
        w[t] = u64::from_be_bytes(chunk.try_into().expect("chunks_exact(8) yields 8 bytes"));
    }
    for t in 16..80 {
        w[t] = ssig1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(ssig0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }

    // Step 2: initialize working variables with the current chaining state.
    let mut a = h[0];
    let mut b = h[1];
    let mut c = h[2];
    let mut d = h[3];
    let mut e = h[4];
    let mut f = h[5];
    let mut g = h[6];
    let mut hh = h[7];

    // Step 3: 80 rounds.
    for t in 0..80 {
        let t1 = hh
            .wrapping_add(bsig1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(K[t])
            .wrapping_add(w[t]);
        let t2 = bsig0(a).wrapping_add(maj(a, b, c));

        hh = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    // Step 4: feed-forward.
    h[0] = h[0].wrapping_add(a);
    h[1] = h[1].wrapping_add(b);
    h[2] = h[2].wrapping_add(c);
    h[3] = h[3].wrapping_add(d);
    h[4] = h[4].wrapping_add(e);
    h[5] = h[5].wrapping_add(f);
    h[6] = h[6].wrapping_add(g);
    h[7] = h[7].wrapping_add(hh);

    w.zeroize();
    compiler_fence(Ordering::SeqCst);
}
