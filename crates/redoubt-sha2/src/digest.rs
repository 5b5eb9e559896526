// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ops::Deref;

use crate::consts::MAX_DIGEST_LEN;

/// An owned digest: 48 bytes for SHA-384, 64 for SHA-512.
///
/// Backed by a fixed-size array sized for the larger variant so `finalize`
/// never allocates; `len` records how much of it is the real digest.
/// Digest bytes are not secret (a hash output is not sensitive the way key
/// material is), so `Digest` does not zeroize on drop — only `Sha2Context`,
/// which holds chaining state, does.
#[derive(Clone, Copy)]
pub struct Digest {
    pub(crate) bytes: [u8; MAX_DIGEST_LEN],
    pub(crate) len: usize,
}

impl Deref for Digest {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        self
    }
}

impl PartialEq for Digest {
    fn eq(&self, other: &Self) -> bool {
        self.deref() == other.deref()
    }
}

impl Eq for Digest {}

impl core::fmt::Debug for Digest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Digest").field("len", &self.len).finish()
    }
}
