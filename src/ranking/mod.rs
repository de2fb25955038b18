// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning a bag of hits into a presentation order.
//!
//! The matcher finds candidates; this module decides who comes first. A
//! `RankedResults` owns the hits for one request, exactly one
//! `RankingPolicy` is active at a time, and `rank` orders the whole set
//! before the requested window is extracted.

mod policy;
mod results;

pub use policy::RankingPolicy;
pub use results::RankedResults;

use crate::error::RankingError;
use crate::types::Hit;
use crate::values::ValueSource;

/// Order `hits` under `policy` in one shot.
///
/// Convenience over a full-window `RankedResults` for callers that do not
/// need weight replacement or windowing.
pub fn rank(
    hits: Vec<Hit>,
    policy: RankingPolicy,
    source: &dyn ValueSource,
) -> Result<Vec<Hit>, RankingError> {
    let count = hits.len();
    let mut results = RankedResults::new(hits, 0, count);
    results.set_policy(policy);
    results.rank(source)?;
    Ok(results.into_hits())
}
