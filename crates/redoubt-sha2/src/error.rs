// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Hash core error.
///
/// Its one variant is a programmer error, not a data-dependent failure: a
/// well-formed message of any length always produces a digest.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashError {
    /// `finalize` was called on a context whose variant tag does not match
    /// any known IV/truncation table. Cannot occur through the public API
    /// (`Variant` is an exhaustive enum); reachable only if the context was
    /// constructed through unsafe means that corrupted its memory.
    #[error("invalid or corrupted hash variant tag")]
    InvalidVariant,
}
