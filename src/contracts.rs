// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debug-mode contracts for the ranking invariants.
//!
//! These checks are zero-cost in release builds (`debug_assert!`) and catch
//! invariant drift early during development:
//!
//! 1. `max_attained` always equals the maximum weight over the current hits
//! 2. after a weight sort, weights are non-increasing front to back
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! `max_attained` is recomputed after every mutation rather than patched
//! incrementally; these contracts are what notices if a future change breaks
//! that.

use crate::types::Hit;

/// Check that `max_attained` matches the hits it was derived from.
///
/// # Panics (debug builds only)
/// Panics if any hit's weight exceeds `max_attained`.
#[inline]
pub fn check_max_attained(hits: &[Hit], max_attained: f64) {
    // NaN weights are exempt: they compare false both ways and the maximum
    // fold skips them.
    debug_assert!(
        hits.iter()
            .all(|hit| hit.weight <= max_attained || hit.weight.is_nan()),
        "max_attained {} is below some hit weight",
        max_attained
    );
}

/// Check that hits are ordered by non-increasing weight.
///
/// # Panics (debug builds only)
/// Panics if a later hit has a strictly higher weight than an earlier one.
#[inline]
pub fn check_weight_sorted(hits: &[Hit]) {
    debug_assert!(
        hits.windows(2).all(|pair| {
            pair[0].weight >= pair[1].weight
                || pair[0].weight.is_nan()
                || pair[1].weight.is_nan()
        }),
        "hits not in descending weight order"
    );
}
