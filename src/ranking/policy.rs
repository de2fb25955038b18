// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ordering policies: how a result set decides who comes first.
//!
//! Exactly one policy is active per ranking pass. The key-based policies own
//! their key maker outright - swapping policies moves a new value into the
//! slot and drops the old maker, so a replaced maker can never be invoked
//! again. That ownership rule is load-bearing: a stale key maker called
//! after a swap is the bug the regression tests exist for.
//!
//! Every comparison here is a total order. Weights tie-break to ascending
//! document id so that equal-weight (or NaN-weight) hits still land in one
//! deterministic order.

use std::cmp::Ordering;
use std::fmt;

use crate::key::KeyMaker;
use crate::types::Hit;

/// Ordering strategy for a ranking pass.
#[derive(Default)]
pub enum RankingPolicy {
    /// Descending relevance weight. The default everywhere.
    #[default]
    ByWeight,
    /// Sort key comparison, optionally reversed overall; ties broken by
    /// descending weight.
    ByKey {
        maker: Box<dyn KeyMaker>,
        descending: bool,
    },
    /// Ascending sort key, then descending weight.
    ByKeyThenWeight { maker: Box<dyn KeyMaker> },
    /// Descending weight, then ascending sort key.
    ByWeightThenKey { maker: Box<dyn KeyMaker> },
}

impl RankingPolicy {
    /// Key ordering with `maker`, reversed overall when `descending`.
    pub fn by_key(maker: impl KeyMaker + 'static, descending: bool) -> Self {
        RankingPolicy::ByKey {
            maker: Box::new(maker),
            descending,
        }
    }

    /// Ascending key ordering with `maker`, weight as tiebreak.
    pub fn by_key_then_weight(maker: impl KeyMaker + 'static) -> Self {
        RankingPolicy::ByKeyThenWeight {
            maker: Box::new(maker),
        }
    }

    /// Weight ordering with `maker` keys as tiebreak.
    pub fn by_weight_then_key(maker: impl KeyMaker + 'static) -> Self {
        RankingPolicy::ByWeightThenKey {
            maker: Box::new(maker),
        }
    }

    /// Short name for error messages and logs.
    pub fn name(&self) -> &'static str {
        match self {
            RankingPolicy::ByWeight => "by_weight",
            RankingPolicy::ByKey { .. } => "by_key",
            RankingPolicy::ByKeyThenWeight { .. } => "by_key_then_weight",
            RankingPolicy::ByWeightThenKey { .. } => "by_weight_then_key",
        }
    }

    /// The key maker and comparison shape, if this policy needs keys.
    pub(crate) fn keyed(&self) -> Option<(&dyn KeyMaker, KeyOrder)> {
        match self {
            RankingPolicy::ByWeight => None,
            RankingPolicy::ByKey { maker, descending } => Some((
                maker.as_ref(),
                KeyOrder::Key {
                    descending: *descending,
                },
            )),
            RankingPolicy::ByKeyThenWeight { maker } => {
                Some((maker.as_ref(), KeyOrder::KeyThenWeight))
            }
            RankingPolicy::ByWeightThenKey { maker } => {
                Some((maker.as_ref(), KeyOrder::WeightThenKey))
            }
        }
    }
}

impl fmt::Debug for RankingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Key makers are opaque trait objects; the variant name is the
        // useful part.
        f.write_str(self.name())
    }
}

/// Comparison shape for the key-based policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyOrder {
    Key { descending: bool },
    KeyThenWeight,
    WeightThenKey,
}

/// Compare two hits by descending weight, doc id as the final tiebreak.
pub(crate) fn compare_by_weight(a: &Hit, b: &Hit) -> Ordering {
    match b.weight.partial_cmp(&a.weight) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => a.doc.cmp(&b.doc),
    }
}

/// Compare two (key, hit) pairs under the given comparison shape.
pub(crate) fn compare_keyed(order: KeyOrder, a: &(Vec<u8>, Hit), b: &(Vec<u8>, Hit)) -> Ordering {
    let (a_key, a_hit) = a;
    let (b_key, b_hit) = b;
    match order {
        KeyOrder::Key { descending } => {
            let by_key = if descending {
                b_key.cmp(a_key)
            } else {
                a_key.cmp(b_key)
            };
            match by_key {
                Ordering::Equal => compare_by_weight(a_hit, b_hit),
                ord => ord,
            }
        }
        KeyOrder::KeyThenWeight => match a_key.cmp(b_key) {
            Ordering::Equal => compare_by_weight(a_hit, b_hit),
            ord => ord,
        },
        KeyOrder::WeightThenKey => match b_hit.weight.partial_cmp(&a_hit.weight) {
            Some(ord) if ord != Ordering::Equal => ord,
            _ => match a_key.cmp(b_key) {
                Ordering::Equal => a_hit.doc.cmp(&b_hit.doc),
                ord => ord,
            },
        },
    }
}
