//! Ordering scenarios across policies, directions, and defaults.

use ordex::{rank, MultiSlotKey, RankingPolicy, SortCriterion};

use crate::common::{doc_order, hit, prefix_family, values};

fn by_slots(slots: &[(u32, bool)]) -> MultiSlotKey {
    let mut key = MultiSlotKey::new();
    for &(slot, descending) in slots {
        key.add_criterion(SortCriterion::new(slot, descending));
    }
    key
}

#[test]
fn ascending_key_order_follows_byte_order() {
    let (hits, source) = prefix_family();
    let ordered = rank(
        hits,
        RankingPolicy::by_key(by_slots(&[(0, false)]), false),
        &source,
    )
    .unwrap();
    assert_eq!(doc_order(&ordered), vec![1, 2, 3, 4, 5]);
}

#[test]
fn overall_descending_reverses_the_order() {
    let (hits, source) = prefix_family();
    let ordered = rank(
        hits,
        RankingPolicy::by_key(by_slots(&[(0, false)]), true),
        &source,
    )
    .unwrap();
    assert_eq!(doc_order(&ordered), vec![5, 4, 3, 2, 1]);
}

#[test]
fn per_field_descending_matches_overall_descending_for_one_field() {
    let (hits, source) = prefix_family();
    let ordered = rank(
        hits,
        RankingPolicy::by_key(by_slots(&[(0, true)]), false),
        &source,
    )
    .unwrap();
    assert_eq!(doc_order(&ordered), vec![5, 4, 3, 2, 1]);
}

#[test]
fn double_reversal_cancels_out() {
    let (hits, source) = prefix_family();
    let ordered = rank(
        hits,
        RankingPolicy::by_key(by_slots(&[(0, true)]), true),
        &source,
    )
    .unwrap();
    assert_eq!(doc_order(&ordered), vec![1, 2, 3, 4, 5]);
}

#[test]
fn trailing_never_set_slot_changes_nothing() {
    for secondary_descending in [false, true] {
        let (hits, source) = prefix_family();
        let ordered = rank(
            hits,
            RankingPolicy::by_key(by_slots(&[(0, false), (9, secondary_descending)]), false),
            &source,
        )
        .unwrap();
        assert_eq!(doc_order(&ordered), vec![1, 2, 3, 4, 5]);
    }
}

#[test]
fn missing_values_sort_first_without_a_default() {
    // Docs 2 and 4 have no value in slot 3.
    let source = values(&[(1, 3, b"m"), (3, 3, b"a"), (5, 3, b"z")]);
    let hits = (1..=5).map(|doc| hit(doc, 1.0)).collect();
    let ordered = rank(
        hits,
        RankingPolicy::by_key(by_slots(&[(3, false)]), false),
        &source,
    )
    .unwrap();
    assert_eq!(doc_order(&ordered), vec![2, 4, 3, 1, 5]);
}

#[test]
fn high_default_moves_missing_values_last() {
    let source = values(&[(1, 3, b"m"), (3, 3, b"a"), (5, 3, b"z")]);
    let hits: Vec<_> = (1..=5).map(|doc| hit(doc, 1.0)).collect();

    // "zz" is above every present value, so the docs without one sink to
    // the bottom instead of floating to the top.
    let mut key = MultiSlotKey::new();
    key.add_criterion(SortCriterion::new(3, false).with_default(*b"zz"));
    let ordered = rank(hits, RankingPolicy::by_key(key, false), &source).unwrap();
    assert_eq!(doc_order(&ordered), vec![3, 1, 5, 2, 4]);
}

#[test]
fn high_default_with_overall_descending_floats_them_back_up() {
    let source = values(&[(1, 3, b"m"), (3, 3, b"a"), (5, 3, b"z")]);
    let hits: Vec<_> = (1..=5).map(|doc| hit(doc, 1.0)).collect();

    let mut key = MultiSlotKey::new();
    key.add_criterion(SortCriterion::new(3, false).with_default(*b"zz"));
    let ordered = rank(hits, RankingPolicy::by_key(key, true), &source).unwrap();
    assert_eq!(doc_order(&ordered), vec![2, 4, 5, 1, 3]);
}

#[test]
fn key_then_weight_uses_weight_inside_key_groups() {
    // Two category groups; weights decide inside each group.
    let source = values(&[
        (1, 0, b"news"),
        (2, 0, b"blog"),
        (3, 0, b"news"),
        (4, 0, b"blog"),
    ]);
    let hits = vec![hit(1, 0.2), hit(2, 0.9), hit(3, 0.7), hit(4, 0.1)];
    let ordered = rank(
        hits,
        RankingPolicy::by_key_then_weight(by_slots(&[(0, false)])),
        &source,
    )
    .unwrap();
    // "blog" group first (2 over 4 by weight), then "news" (3 over 1).
    assert_eq!(doc_order(&ordered), vec![2, 4, 3, 1]);
}

#[test]
fn weight_then_key_uses_key_only_for_ties() {
    let source = values(&[
        (1, 0, b"b"),
        (2, 0, b"a"),
        (3, 0, b"c"),
    ]);
    let hits = vec![hit(1, 1.0), hit(2, 1.0), hit(3, 5.0)];
    let ordered = rank(
        hits,
        RankingPolicy::by_weight_then_key(by_slots(&[(0, false)])),
        &source,
    )
    .unwrap();
    // Doc 3 wins on weight outright; the tied pair orders by key a < b.
    assert_eq!(doc_order(&ordered), vec![3, 2, 1]);
}

#[test]
fn window_is_cut_after_full_ordering() {
    let source = values(&[
        (1, 0, b"d"),
        (2, 0, b"b"),
        (3, 0, b"e"),
        (4, 0, b"a"),
        (5, 0, b"c"),
    ]);
    let hits = (1..=5).map(|doc| hit(doc, 1.0)).collect();
    let mut results = ordex::RankedResults::new(hits, 1, 2);
    results.set_policy(RankingPolicy::by_key(by_slots(&[(0, false)]), false));
    results.rank(&source).unwrap();

    // Full order is 4, 2, 5, 1, 3; the visible window is ranks 2 and 3.
    assert_eq!(doc_order(results.hits()), vec![4, 2, 5, 1, 3]);
    assert_eq!(doc_order(results.window()), vec![2, 5]);
}
