// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Composite sort keys: many stored values, one byte string.
//!
//! Multi-field ordering sounds like it needs a comparator, but the match
//! pipeline wants something cheaper: encode each candidate once, then let
//! plain unsigned byte comparison do all the work. Every trick needed for
//! that - mixed ascending/descending fields, missing values, per-field
//! defaults - is baked into the key at encode time by `MultiSlotKey`.
//!
//! The encoding, field by field:
//!
//! - ascending, not last: value with `0x00` escaped to `00 FF`, then a
//!   `00 00` separator
//! - ascending, last: the raw value (nothing follows, nothing to protect)
//! - descending, anywhere: the bytewise complement of the above, terminated
//!   with `FF FF` even in last position
//!
//! Finally the key is truncated back to the last point where an ascending
//! value actually wrote data (or a descending segment ended). Trailing unset
//! ascending fields therefore cost nothing, and the empty document encodes
//! to the empty key.
//!
//! An absent value with no default encodes as empty and so sorts before
//! every present value ascending, after every present value descending.
//! That is defined behavior, not an error.

mod codec;

use serde::{Deserialize, Serialize};

use crate::types::{DocId, SlotId};
use crate::values::ValueSource;

/// One field of a composite ordering: which slot, which direction, and what
/// to substitute when a document has no value there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortCriterion {
    /// The stored-value slot this field reads.
    pub slot: SlotId,
    /// Reverse this field's contribution to the comparison.
    pub descending: bool,
    /// Fallback used when the document has no value in `slot` (or an empty
    /// one - an empty stored value is indistinguishable from no value).
    pub default: Option<Vec<u8>>,
}

impl SortCriterion {
    /// Criterion over `slot` with no default.
    pub fn new(slot: impl Into<SlotId>, descending: bool) -> Self {
        SortCriterion {
            slot: slot.into(),
            descending,
            default: None,
        }
    }

    /// Attach a fallback value for documents with nothing in the slot.
    pub fn with_default(mut self, default: impl Into<Vec<u8>>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// Anything that can derive a sort key for a document.
///
/// `MultiSlotKey` covers stored-value orderings; implement this yourself for
/// anything more exotic. Implementations must be pure: same document, same
/// key, no retained per-call state.
///
/// `Send + Sync` because ranking may encode keys for many candidates in
/// parallel.
pub trait KeyMaker: Send + Sync {
    /// Encode the sort key for `doc`, reading stored values from `source`.
    fn encode(&self, doc: DocId, source: &dyn ValueSource) -> Vec<u8>;
}

/// Key maker over an ordered list of value slots.
///
/// Criteria are compared in insertion order, first criterion most
/// significant. The builder can grow until the ranking pass starts; `encode`
/// itself never mutates, so one `MultiSlotKey` can encode any number of
/// documents.
///
/// ```
/// use ordex::{MemoryValues, MultiSlotKey, KeyMaker, DocId};
///
/// let mut source = MemoryValues::new();
/// source.insert(1, 0, *b"martin");
/// source.insert(2, 0, *b"asimov");
///
/// let mut key = MultiSlotKey::new();
/// key.add_slot(0);
/// assert!(key.encode(DocId(2), &source) < key.encode(DocId(1), &source));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiSlotKey {
    criteria: Vec<SortCriterion>,
}

impl MultiSlotKey {
    /// Key maker with no criteria. Encodes every document to the empty key
    /// until criteria are added.
    pub fn new() -> Self {
        MultiSlotKey::default()
    }

    /// Key maker over the given slots, all ascending, no defaults.
    pub fn from_slots(slots: impl IntoIterator<Item = u32>) -> Self {
        let criteria = slots
            .into_iter()
            .map(|slot| SortCriterion::new(slot, false))
            .collect();
        MultiSlotKey { criteria }
    }

    /// Append an ascending criterion over `slot`.
    pub fn add_slot(&mut self, slot: impl Into<SlotId>) -> &mut Self {
        self.add_criterion(SortCriterion::new(slot, false))
    }

    /// Append a descending criterion over `slot`.
    pub fn add_slot_descending(&mut self, slot: impl Into<SlotId>) -> &mut Self {
        self.add_criterion(SortCriterion::new(slot, true))
    }

    /// Append a fully specified criterion.
    ///
    /// Appending changes the role of the previously last criterion: it
    /// becomes interior and its segment gains the field separator on the
    /// next encode.
    pub fn add_criterion(&mut self, criterion: SortCriterion) -> &mut Self {
        self.criteria.push(criterion);
        self
    }

    /// The criteria, in comparison order.
    pub fn criteria(&self) -> &[SortCriterion] {
        &self.criteria
    }
}

impl KeyMaker for MultiSlotKey {
    fn encode(&self, doc: DocId, source: &dyn ValueSource) -> Vec<u8> {
        let mut key = Vec::new();
        // Everything past this point is trailing separator noise and gets
        // truncated off at the end.
        let mut keep = 0;

        let mut criteria = self.criteria.iter().peekable();
        while let Some(criterion) = criteria.next() {
            let value: &[u8] = match source.value(doc, criterion.slot) {
                Some(stored) if !stored.is_empty() => stored,
                _ => criterion.default.as_deref().unwrap_or(&[]),
            };
            let last = criteria.peek().is_none();

            if criterion.descending {
                codec::push_complemented(&mut key, value);
                key.extend_from_slice(&codec::DESCENDING_TERMINATOR);
                keep = key.len();
            } else if last {
                key.extend_from_slice(value);
                if !value.is_empty() {
                    keep = key.len();
                }
            } else {
                codec::push_escaped(&mut key, value);
                if !value.is_empty() {
                    keep = key.len();
                }
                key.extend_from_slice(&codec::ASCENDING_SEPARATOR);
            }
        }

        key.truncate(keep);
        key
    }
}
