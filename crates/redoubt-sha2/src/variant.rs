// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use zeroize::Zeroize;

use crate::consts::{H0_SHA384, H0_SHA512};

/// Selects the SHA-2 variant: initial chaining values and output truncation.
///
/// SHA-384 and SHA-512 share one compression function and one 8-word chaining
/// state (FIPS 180-4 §6.4); they differ only in the initial hash value and in
/// how many of the eight 64-bit words are emitted as the digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// SHA-384: 48-byte (384-bit) truncated digest.
    Sha384,
    /// SHA-512: full 64-byte (512-bit) digest.
    #[default]
    Sha512,
}

impl Variant {
    /// Initial chaining value H(0) for this variant, per FIPS 180-4 §5.3.4/§5.3.5.
    pub(crate) const fn iv(self) -> [u64; 8] {
        match self {
            Variant::Sha384 => H0_SHA384,
            Variant::Sha512 => H0_SHA512,
        }
    }

    /// Digest length in bytes: 48 for SHA-384, 64 for SHA-512.
    pub(crate) const fn digest_len(self) -> usize {
        match self {
            Variant::Sha384 => 48,
            Variant::Sha512 => 64,
        }
    }
}

impl Zeroize for Variant {
    fn zeroize(&mut self) {
        // Not secret data, but the context-level invariant is "every field
        // zeroized on drop" without exceptions; reset to a fixed value so
        // no trace of which variant was in use lingers.
        *self = Variant::Sha512;
    }
}
