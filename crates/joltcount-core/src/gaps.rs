//! # Gap Analyzer
//!
//! Consecutive differences between levels, and the two consumers of them:
//! the 1-step/3-step tally and the forced-boundary scan used by the
//! Segment Decomposer.

use crate::primitives::MAX_STEP;
use crate::types::{ChainError, Level, StepTally};

/// Compute the gap sequence of an ascending level sequence.
///
/// `gaps[i] = levels[i + 1] - levels[i]`; length is `levels.len() - 1`.
/// The input must be sorted ascending (the builder guarantees this);
/// out-of-order pairs produce a 0 gap, which [`validate_gaps`] rejects.
#[must_use]
pub fn gap_sequence(levels: &[Level]) -> Vec<u64> {
    levels
        .windows(2)
        .map(|pair| pair[1].saturating_sub(pair[0]))
        .collect()
}

/// Check every gap against the allowed `1..=MAX_STEP` range.
///
/// `gaps` must be the gap sequence of `levels`.
///
/// Returns [`ChainError::UnacceptableStep`] for the first offending pair.
/// A gap of 0 means a duplicate rating; a gap above [`MAX_STEP`] means the
/// chain cannot be bridged at all.
pub fn validate_gaps(levels: &[Level], gaps: &[u64]) -> Result<(), ChainError> {
    for (i, &gap) in gaps.iter().enumerate() {
        if !(1..=MAX_STEP).contains(&gap) {
            return Err(ChainError::UnacceptableStep {
                from: levels[i],
                to: levels[i + 1],
                gap,
            });
        }
    }
    Ok(())
}

/// Tally the 1-jolt and 3-jolt steps of a validated level sequence.
///
/// Gaps of 2 occur but are not recorded; that is the domain's defined
/// answer formula, not an oversight. Fails with
/// [`ChainError::UnacceptableStep`] if any gap falls outside `{1, 2, 3}`.
pub fn tally_gaps(levels: &[Level]) -> Result<StepTally, ChainError> {
    let gaps = gap_sequence(levels);
    validate_gaps(levels, &gaps)?;

    let mut tally = StepTally::default();
    for gap in gaps {
        match gap {
            1 => tally.ones = tally.ones.saturating_add(1),
            3 => tally.threes = tally.threes.saturating_add(1),
            _ => {}
        }
    }
    Ok(tally)
}

/// Positions of forced boundaries: gap indices where the gap equals
/// [`MAX_STEP`].
///
/// Only one arrangement can cross such a gap, so every index returned here
/// is a safe cut point for independent per-segment counting.
#[must_use]
pub fn forced_boundaries(gaps: &[u64]) -> Vec<usize> {
    gaps.iter()
        .enumerate()
        .filter(|&(_, &gap)| gap == MAX_STEP)
        .map(|(i, _)| i)
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
