// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of result ordering.
//!
//! A matcher hands us candidates as (document, weight) pairs. Everything in
//! this crate shuffles those pairs around without ever touching the documents
//! themselves - stored values are fetched through `ValueSource` when a sort
//! key needs them.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Hit**: `doc` is identity and never changes; `weight` is the only
//!   mutable part. Re-ranking reorders hits, it never rewrites which
//!   documents they point at.
//! - **DocId / SlotId**: plain `u32` newtypes. Keeping them distinct prevents
//!   the classic bug of indexing a value slot with a document id.

use serde::{Deserialize, Serialize};

// =============================================================================
// NEWTYPES: Type-safe identifiers
// =============================================================================

/// Type-safe document identifier.
///
/// Prevents accidentally passing a value slot where a document ID is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct DocId(pub u32);

impl DocId {
    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for DocId {
    fn from(id: u32) -> Self {
        DocId(id)
    }
}

impl From<DocId> for u32 {
    fn from(id: DocId) -> Self {
        id.0
    }
}

/// Identifier for one stored per-document value field used in sorting.
///
/// Slots are assigned at indexing time; this crate only ever reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct SlotId(pub u32);

impl SlotId {
    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for SlotId {
    fn from(slot: u32) -> Self {
        SlotId(slot)
    }
}

impl From<SlotId> for u32 {
    fn from(slot: SlotId) -> Self {
        slot.0
    }
}

// =============================================================================
// HITS
// =============================================================================

/// One matched document and its relevance weight.
///
/// The matcher produces these; ranking reorders them and may overwrite the
/// weight in bulk (see `RankedResults::replace_weights`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    /// Immutable document identity.
    pub doc: DocId,
    /// Relevance weight. Higher is better; negative is allowed (re-scored
    /// weights from an external learner can be anything).
    pub weight: f64,
}

impl Hit {
    /// Create a hit for `doc` with the given weight.
    pub fn new(doc: impl Into<DocId>, weight: f64) -> Self {
        Hit {
            doc: doc.into(),
            weight,
        }
    }
}
