// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Chunking invariance: digest must not depend on how `update` calls
//! partition the message.

use crate::{sha512, Sha2Context, Variant};

fn digest_via_chunks(data: &[u8], chunk_sizes: &[usize]) -> crate::Digest {
    let mut ctx = Sha2Context::new(Variant::Sha512);
    let mut offset = 0;
    let mut i = 0;

    while offset < data.len() {
        let size = chunk_sizes[i % chunk_sizes.len()].max(1);
        let end = (offset + size).min(data.len());
        ctx.update(&data[offset..end]);
        offset = end;
        i += 1;
    }

    ctx.finalize().unwrap()
}

#[test]
fn one_shot_matches_streamed_one_byte_at_a_time() {
    let data: Vec<u8> = (0..300u32).map(|i| (i % 251) as u8).collect();

    let mut ctx = Sha2Context::new(Variant::Sha512);
    for byte in &data {
        ctx.update(core::slice::from_ref(byte));
    }
    let streamed = ctx.finalize().unwrap();

    assert_eq!(&*streamed, &sha512(&data)[..]);
}

#[test]
fn chunking_invariance_across_partitions() {
    let data: Vec<u8> = (0..5000u32).map(|i| (i % 256) as u8).collect();
    let one_shot = sha512(&data);

    for chunk_sizes in [
        &[1usize][..],
        &[7, 13][..],
        &[128][..],
        &[127, 1][..],
        &[129][..],
        &[1000, 1, 50][..],
        &[5000][..],
    ] {
        let streamed = digest_via_chunks(&data, chunk_sizes);
        assert_eq!(&*streamed, &one_shot[..], "chunk sizes {:?} diverged", chunk_sizes);
    }
}

#[test]
fn empty_update_is_a_no_op() {
    let mut ctx = Sha2Context::new(Variant::Sha512);
    ctx.update(b"abc");
    ctx.update(b"");
    ctx.update(&[]);
    let with_empties = ctx.finalize().unwrap();

    assert_eq!(&*with_empties, &sha512(b"abc")[..]);
}

#[test]
fn variant_selects_different_digest_lengths() {
    let ctx384 = Sha2Context::new(Variant::Sha384);
    let ctx512 = Sha2Context::new(Variant::Sha512);

    assert_eq!(ctx384.finalize().unwrap().len(), 48);
    assert_eq!(ctx512.finalize().unwrap().len(), 64);
}
