// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-384/SHA-512 compression and streaming core with secure memory handling
//!
//! Implementation per FIPS 180-4 §5 (padding), §6.4 (SHA-512 and SHA-384).
//! All intermediate compression state is zeroized; the streaming context
//! zeroizes itself on drop.
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod consts;
mod context;
mod digest;
mod error;
mod transform;
mod variant;

pub use context::Sha2Context;
pub use digest::Digest;
pub use error::HashError;
pub use variant::Variant;

/// Computes SHA-512 of `data` in one shot.
///
/// Equivalent to `Sha2Context::new(Variant::Sha512)`, one `update(data)`, then
/// `finalize()`. The internal context is zeroized before this function
/// returns, whether by way of `finalize()`'s consumption or the panic-unwind
/// drop path.
pub fn sha512(data: &[u8]) -> [u8; 64] {
    let mut ctx = Sha2Context::new(Variant::Sha512);
    ctx.update(data);
    let digest = ctx.finalize().expect("Variant::Sha512 is always valid");

    let mut out = [0u8; 64];
    out.copy_from_slice(&digest[..64]);
    out
}

/// Computes SHA-384 of `data` in one shot.
///
/// Equivalent to `Sha2Context::new(Variant::Sha384)`, one `update(data)`, then
/// `finalize()`. The internal context is zeroized before this function
/// returns, whether by way of `finalize()`'s consumption or the panic-unwind
/// drop path.
pub fn sha384(data: &[u8]) -> [u8; 48] {
    let mut ctx = Sha2Context::new(Variant::Sha384);
    ctx.update(data);
    let digest = ctx.finalize().expect("Variant::Sha384 is always valid");

    let mut out = [0u8; 48];
    out.copy_from_slice(&digest[..48]);
    out
}
