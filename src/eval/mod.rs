// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Offline ranking evaluation.
//!
//! Nothing in here runs during a search. These are the tools for judging a
//! ranking after the fact - feed in a labeled run, get a quality score back.
//! Used by learning-to-rank training loops to compare candidate rankings
//! against human relevance judgments.

mod err;

pub use err::err_score;

use serde::{Deserialize, Serialize};

use crate::types::DocId;

/// One result in a labeled ranking: the document and its human relevance
/// judgment. Position in the containing slice encodes the rank.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabeledSample {
    /// The ranked document.
    pub doc: DocId,
    /// Relevance judgment, non-negative, on whatever scale the assessors
    /// used. Normalized per list before scoring.
    pub label: f64,
}

impl LabeledSample {
    /// Labeled sample for `doc` with the given relevance judgment.
    pub fn new(doc: impl Into<DocId>, label: f64) -> Self {
        LabeledSample {
            doc: doc.into(),
            label,
        }
    }
}
