// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type for ranking operations.
//!
//! Two things can actually go wrong in this crate, and both are caller
//! mistakes rather than internal failures: handing `replace_weights` more
//! weights than there are hits, and asking for key-based ordering when the
//! candidate source is remote. Everything else (empty hit sets, empty
//! criteria lists, missing stored values) has a defined neutral result.

use std::fmt;

/// Error type for ranking operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankingError {
    /// `replace_weights` was given more weights than there are hits.
    ///
    /// The result set is left untouched when this is returned - weights are
    /// applied all-or-nothing.
    TooManyWeights { supplied: usize, hits: usize },
    /// Key-based ordering was requested against a remote candidate source.
    ///
    /// A key maker is arbitrary local code; it cannot be shipped across the
    /// execution boundary to where the stored values live. The caller gets
    /// this error rather than a silently different order.
    RemoteKeyOrdering { policy: &'static str },
}

impl fmt::Display for RankingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankingError::TooManyWeights { supplied, hits } => {
                write!(f, "{} replacement weights for {} hits", supplied, hits)
            }
            RankingError::RemoteKeyOrdering { policy } => {
                write!(
                    f,
                    "{} ordering is not implemented for remote candidate sources",
                    policy
                )
            }
        }
    }
}

impl std::error::Error for RankingError {}
