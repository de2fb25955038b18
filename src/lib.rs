// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering for full-text search.
//!
//! The matcher decides *which* documents you see; this crate decides the
//! *order* you see them in. It covers the three pieces of that job: encoding
//! multi-field orderings into byte-comparable sort keys, maintaining a
//! ranked result set under weight updates and policy changes, and scoring a
//! finished ranking for learning-to-rank evaluation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  values.rs  │────▶│    key/      │────▶│   ranking/   │
//! │ (ValueSource│     │ (MultiSlotKey│     │ (RankedResults
//! │ MemoryValues)     │   KeyMaker)  │     │ RankingPolicy)│
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                                                 │
//!                          ┌──────────────┐       ▼
//!                          │    eval/     │  windowed hits
//!                          │ (err_score)  │  (independent)
//!                          └──────────────┘
//! ```
//!
//! # The sort-key contract
//!
//! For any two documents and the same `MultiSlotKey`, plain byte-wise
//! comparison of the encoded keys reproduces the multi-criterion ordering:
//! criteria in listed order, first most significant, each field ascending or
//! descending independently, missing values first (ascending) or last
//! (descending) unless a per-field default says otherwise.
//!
//! # Usage
//!
//! ```
//! use ordex::{rank, Hit, MemoryValues, MultiSlotKey, RankingPolicy};
//!
//! let mut source = MemoryValues::new();
//! source.insert(1, 0, *b"2021-03-14");
//! source.insert(2, 0, *b"2024-11-02");
//!
//! let hits = vec![Hit::new(1, 0.8), Hit::new(2, 0.3)];
//!
//! // Newest first: descending on the date slot.
//! let mut newest_first = MultiSlotKey::new();
//! newest_first.add_slot_descending(0);
//!
//! let policy = RankingPolicy::by_key(newest_first, false);
//! let ordered = rank(hits, policy, &source).unwrap();
//! assert_eq!(ordered[0].doc.get(), 2);
//! ```

// Module declarations
pub mod contracts;
mod error;
mod eval;
mod key;
mod ranking;
mod types;
mod values;

// Re-exports for public API
pub use error::RankingError;
pub use eval::{err_score, LabeledSample};
pub use key::{KeyMaker, MultiSlotKey, SortCriterion};
pub use ranking::{rank, RankedResults, RankingPolicy};
pub use types::{DocId, Hit, SlotId};
pub use values::{MemoryValues, ValueSource};
