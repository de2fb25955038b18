// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where stored values come from.
//!
//! Sort keys are built from per-document stored values, but this crate does
//! not own any storage. `ValueSource` is the seam: the caller pre-fetches
//! whatever slots the ranking pass needs and hands us a lookup. Lookups must
//! already be resolved - `value` is called from the encoding hot path and
//! must not block on I/O.
//!
//! `MemoryValues` is the batteries-included implementation for callers that
//! just have the values in hand (and for tests).

use std::collections::{BTreeMap, HashMap};

use crate::types::{DocId, SlotId};

/// Read access to per-document stored values.
///
/// `Sync` because parallel ranking encodes keys for many candidates at once,
/// sharing one source across worker threads.
pub trait ValueSource: Sync {
    /// The stored value of `slot` for `doc`, if any.
    fn value(&self, doc: DocId, slot: SlotId) -> Option<&[u8]>;

    /// Whether the candidate source lives across an execution boundary.
    ///
    /// Key makers are arbitrary local code and cannot be shipped to a remote
    /// backend, so key-based ordering against a remote source is rejected up
    /// front (see `RankingError::RemoteKeyOrdering`).
    fn is_remote(&self) -> bool {
        false
    }
}

/// In-memory value store: pre-fetched slot values for each candidate.
#[derive(Debug, Clone, Default)]
pub struct MemoryValues {
    values: HashMap<DocId, BTreeMap<SlotId, Vec<u8>>>,
}

impl MemoryValues {
    /// Create an empty store.
    pub fn new() -> Self {
        MemoryValues::default()
    }

    /// Set the value of `slot` for `doc`, replacing any previous value.
    pub fn insert(
        &mut self,
        doc: impl Into<DocId>,
        slot: impl Into<SlotId>,
        value: impl Into<Vec<u8>>,
    ) -> &mut Self {
        self.values
            .entry(doc.into())
            .or_default()
            .insert(slot.into(), value.into());
        self
    }
}

impl ValueSource for MemoryValues {
    fn value(&self, doc: DocId, slot: SlotId) -> Option<&[u8]> {
        self.values.get(&doc)?.get(&slot).map(Vec::as_slice)
    }
}
