// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ranked result container.
//!
//! `RankedResults` owns the full ordered candidate set for one request plus
//! the derived numbers callers ask about afterwards: the highest weight any
//! hit attained, and the `[first, first + count)` window the caller actually
//! requested. Ordering is always computed over the full set - the window is
//! extracted at the end, so a small `count` never changes which order the
//! hits land in, only how many are shown.
//!
//! One invariant matters more than the rest: `max_attained` equals the
//! maximum weight over the *current* hits after every mutating operation.
//! It is recomputed, never patched, so a bulk weight replacement that lowers
//! every weight lowers `max_attained` too.

use crate::contracts;
use crate::error::RankingError;
use crate::key::KeyMaker;
use crate::ranking::policy::{compare_by_weight, compare_keyed, RankingPolicy};
use crate::types::Hit;
use crate::values::ValueSource;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Ordered hits for one request, with derived statistics.
#[derive(Debug)]
pub struct RankedResults {
    hits: Vec<Hit>,
    first: usize,
    count: usize,
    max_attained: f64,
    policy: RankingPolicy,
}

impl RankedResults {
    /// Wrap the matcher's candidates, requesting the window
    /// `[first, first + count)` as the visible result.
    ///
    /// The initial order is whatever the matcher produced; call `rank` (or
    /// `sort_by_weight`) to order it. The active policy starts as
    /// `ByWeight`.
    pub fn new(hits: Vec<Hit>, first: usize, count: usize) -> Self {
        let max_attained = max_weight(&hits);
        RankedResults {
            hits,
            first,
            count,
            max_attained,
            policy: RankingPolicy::ByWeight,
        }
    }

    /// All hits in current order.
    pub fn hits(&self) -> &[Hit] {
        &self.hits
    }

    /// The externally visible window, clamped to the hits that exist.
    pub fn window(&self) -> &[Hit] {
        let start = self.first.min(self.hits.len());
        let end = self.first.saturating_add(self.count).min(self.hits.len());
        &self.hits[start..end]
    }

    /// The requested window bounds, as given at construction.
    pub fn window_bounds(&self) -> (usize, usize) {
        (self.first, self.count)
    }

    /// Maximum weight among the current hits (0.0 for an empty set).
    pub fn max_attained(&self) -> f64 {
        self.max_attained
    }

    /// Number of hits in the full set.
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Whether the full set is empty.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Consume the set, returning the hits in current order.
    pub fn into_hits(self) -> Vec<Hit> {
        self.hits
    }

    /// The active ordering policy.
    pub fn policy(&self) -> &RankingPolicy {
        &self.policy
    }

    /// Replace the active policy. The previous policy - and any key maker it
    /// owned - is dropped here and can never be invoked again, whether or
    /// not ranking ever ran under it.
    pub fn set_policy(&mut self, policy: RankingPolicy) {
        self.policy = policy;
    }

    /// Overwrite weights positionally: hit 0 gets `weights[0]`, and so on.
    ///
    /// More weights than hits is an error and leaves the set completely
    /// unmodified. Fewer is fine - trailing hits keep their weights. On
    /// success `max_attained` is recomputed over the full set, even when the
    /// new maximum is lower than anything previously reported.
    pub fn replace_weights(&mut self, weights: &[f64]) -> Result<(), RankingError> {
        if weights.len() > self.hits.len() {
            return Err(RankingError::TooManyWeights {
                supplied: weights.len(),
                hits: self.hits.len(),
            });
        }
        for (hit, &weight) in self.hits.iter_mut().zip(weights) {
            hit.weight = weight;
        }
        self.max_attained = max_weight(&self.hits);
        contracts::check_max_attained(&self.hits, self.max_attained);
        Ok(())
    }

    /// Re-sort by descending weight, doc id breaking ties.
    ///
    /// Alters no weight, and running it twice gives the identical order both
    /// times.
    pub fn sort_by_weight(&mut self) {
        self.hits.sort_by(compare_by_weight);
        contracts::check_weight_sorted(&self.hits);
    }

    /// Order the full hit set under the active policy.
    ///
    /// Key-based policies encode one key per hit up front (in parallel with
    /// the `parallel` feature), then sort on the encoded bytes. Against a
    /// remote source those policies fail with `RemoteKeyOrdering` - the key
    /// maker cannot run where the values live, and a silently different
    /// order would be worse than an error.
    pub fn rank(&mut self, source: &dyn ValueSource) -> Result<(), RankingError> {
        if source.is_remote() && self.policy.keyed().is_some() {
            return Err(RankingError::RemoteKeyOrdering {
                policy: self.policy.name(),
            });
        }
        let ordered = match self.policy.keyed() {
            None => {
                self.sort_by_weight();
                return Ok(());
            }
            Some((maker, order)) => {
                let keys = encode_keys(maker, &self.hits, source);
                let mut decorated: Vec<(Vec<u8>, Hit)> =
                    keys.into_iter().zip(self.hits.iter().copied()).collect();
                decorated.sort_by(|a, b| compare_keyed(order, a, b));
                decorated.into_iter().map(|(_, hit)| hit).collect()
            }
        };
        self.hits = ordered;
        Ok(())
    }
}

/// Encode one key per hit.
#[cfg(feature = "parallel")]
fn encode_keys(maker: &dyn KeyMaker, hits: &[Hit], source: &dyn ValueSource) -> Vec<Vec<u8>> {
    hits.par_iter()
        .map(|hit| maker.encode(hit.doc, source))
        .collect()
}

/// Encode one key per hit.
#[cfg(not(feature = "parallel"))]
fn encode_keys(maker: &dyn KeyMaker, hits: &[Hit], source: &dyn ValueSource) -> Vec<Vec<u8>> {
    hits.iter()
        .map(|hit| maker.encode(hit.doc, source))
        .collect()
}

fn max_weight(hits: &[Hit]) -> f64 {
    // 0.0 for the empty set; otherwise the true maximum, which is allowed
    // to be negative (externally re-scored weights can be anything).
    if hits.is_empty() {
        return 0.0;
    }
    hits.iter()
        .map(|hit| hit.weight)
        .fold(f64::NEG_INFINITY, f64::max)
}
