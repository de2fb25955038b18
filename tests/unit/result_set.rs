//! Tests for the ranked result container: weight replacement, weight
//! re-sorting, windowing, and the max_attained bookkeeping.

use ordex::{RankedResults, RankingError};

use crate::common::{doc_order, hit};

#[test]
fn replace_weights_rejects_more_weights_than_hits() {
    let mut results = RankedResults::new(vec![hit(1, 1.5)], 0, 10);
    let before = results.hits().to_vec();

    let err = results.replace_weights(&[-1.0, -2.0]).unwrap_err();
    assert_eq!(
        err,
        RankingError::TooManyWeights {
            supplied: 2,
            hits: 1
        }
    );

    // Nothing moved, nothing was partially applied.
    assert_eq!(results.hits(), &before[..]);
    assert_eq!(results.max_attained(), 1.5);
}

#[test]
fn replace_weights_updates_max_attained_even_downward() {
    let mut results = RankedResults::new(vec![hit(1, 10.0)], 0, 10);
    results.replace_weights(&[-1.0]).unwrap();
    assert_eq!(results.hits()[0].weight, -1.0);
    assert_eq!(results.max_attained(), -1.0);
}

#[test]
fn replace_weights_then_resort_reverses_relevance() {
    let mut results = RankedResults::new(vec![hit(1, 2.0), hit(2, 1.0)], 0, 10);
    results.replace_weights(&[-2.0, -1.0]).unwrap();
    results.sort_by_weight();
    assert_eq!(doc_order(results.hits()), vec![2, 1]);
    assert_eq!(results.hits()[0].weight, -1.0);
    assert_eq!(results.max_attained(), -1.0);
}

#[test]
fn sort_by_weight_is_idempotent() {
    let mut results = RankedResults::new(
        vec![hit(4, 1.0), hit(2, 3.0), hit(3, 1.0), hit(1, 3.0)],
        0,
        10,
    );
    results.sort_by_weight();
    let once = results.hits().to_vec();
    results.sort_by_weight();
    assert_eq!(results.hits(), &once[..]);
    // Equal weights resolved by doc id, so the order is fully determined.
    assert_eq!(doc_order(results.hits()), vec![1, 2, 3, 4]);
}

#[test]
fn sort_by_weight_alters_no_weight() {
    let mut results = RankedResults::new(vec![hit(1, 0.25), hit(2, 0.75)], 0, 10);
    results.sort_by_weight();
    let mut weights: Vec<f64> = results.hits().iter().map(|h| h.weight).collect();
    weights.sort_by(f64::total_cmp);
    assert_eq!(weights, vec![0.25, 0.75]);
}

#[test]
fn window_reflects_requested_bounds() {
    let mut results = RankedResults::new(
        vec![hit(1, 4.0), hit(2, 3.0), hit(3, 2.0), hit(4, 1.0)],
        1,
        2,
    );
    results.sort_by_weight();
    assert_eq!(results.window_bounds(), (1, 2));
    assert_eq!(doc_order(results.window()), vec![2, 3]);
}

#[test]
fn empty_set_is_well_defined() {
    let mut results = RankedResults::new(vec![], 0, 10);
    assert!(results.is_empty());
    assert_eq!(results.max_attained(), 0.0);
    assert!(results.window().is_empty());
    results.sort_by_weight();
    results.replace_weights(&[]).unwrap();
}
