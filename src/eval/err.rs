// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Expected reciprocal rank: how good is a ranking, really?
//!
//! ERR models a user walking the result list top to bottom under a cascade:
//! at each rank they are satisfied with probability `R(g)` driven by that
//! result's relevance grade, and only continue if not. The score is the
//! expected reciprocal of the rank where they stop, so one great result at
//! rank 1 is worth more than several good ones further down - which is
//! exactly the behavior position-blind metrics miss.
//!
//! # References
//!
//! - **ERR**: Chapelle, Metzler, Zhang, Grinspan (2009): "Expected
//!   Reciprocal Rank for Graded Relevance", CIKM '09.
//!   <http://olivier.chapelle.cc/pub/err.pdf>

use crate::eval::LabeledSample;

/// Top of the grade scale: labels normalize to integer grades `0..=4`.
const TOP_GRADE: f64 = 4.0;

/// `2^TOP_GRADE`, the denominator of the satisfaction probability. A grade-4
/// result satisfies with probability 15/16, a grade-0 result never does.
const SATISFACTION_SCALE: f64 = 16.0;

/// Score a ranking with ERR. Input is in rank order, most relevant expected
/// first; the result is in `[0, 1]`, higher is better.
///
/// Labels are relevance judgments on any non-negative scale; they are
/// normalized against the list's own maximum before grading. An empty input
/// scores `0.0`. So does an all-zero one: rather than dividing by a zero
/// maximum, we take the limit - every grade would be 0, the user is never
/// satisfied, and the expected reciprocal stopping rank is 0.
pub fn err_score(samples: &[LabeledSample]) -> f64 {
    let max_label = samples.iter().map(|s| s.label).fold(0.0, f64::max);
    if max_label <= 0.0 {
        return 0.0;
    }

    let mut continuing = 1.0;
    let mut score = 0.0;
    for (index, sample) in samples.iter().enumerate() {
        let grade = (sample.label * TOP_GRADE / max_label).round();
        let satisfaction = ((2.0_f64).powi(grade as i32) - 1.0) / SATISFACTION_SCALE;
        score += satisfaction * continuing / (index + 1) as f64;
        continuing *= 1.0 - satisfaction;
    }
    score
}
