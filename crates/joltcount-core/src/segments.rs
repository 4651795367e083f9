//! # Segment Decomposer
//!
//! The full counting pipeline. A gap equal to the maximum step is an
//! articulation point: every arrangement of the whole chain must pass
//! through the level on each side of it, so the global path count factors
//! exactly into a product of small per-segment counts. That product is
//! what this module computes - the whole-chain graph is never materialized.

use crate::gaps::{forced_boundaries, gap_sequence, tally_gaps, validate_gaps};
use crate::graph::ReachGraph;
use crate::levels::level_sequence;
use crate::types::{ChainError, Level, StepTally};

/// Count the distinct valid arrangements of a set of adapter ratings.
///
/// Pipeline: derive the level sequence, validate every gap, cut the
/// sequence at forced boundaries, count paths inside each segment with a
/// fresh [`ReachGraph`], and multiply the per-segment counts.
///
/// Fails with [`ChainError::EmptyInput`] on an empty collection, with
/// [`ChainError::UnacceptableStep`] if any gap falls outside `1..=3`, and
/// with [`ChainError::CountOverflow`] if the total leaves the u64 range.
pub fn count_arrangements(ratings: &[Level]) -> Result<u64, ChainError> {
    let levels = level_sequence(ratings)?;
    let gaps = gap_sequence(&levels);
    validate_gaps(&levels, &gaps)?;

    let mut product: u64 = 1;
    let mut start = 0usize;
    for boundary in forced_boundaries(&gaps) {
        product = fold_segment(product, &levels[start..=boundary])?;
        start = boundary + 1;
    }
    // The sink offset guarantees the final gap is forced, so the loop
    // normally consumes everything; a trailing unforced run can only come
    // from a caller-built sequence and is still counted.
    if start + 1 < levels.len() {
        product = fold_segment(product, &levels[start..])?;
    }
    Ok(product)
}

/// Count paths across one segment and fold the result into the running
/// product. The segment graph is dropped as soon as its count is taken.
fn fold_segment(product: u64, segment: &[Level]) -> Result<u64, ChainError> {
    let (Some(&first), Some(&last)) = (segment.first(), segment.last()) else {
        return Ok(product);
    };
    let count = ReachGraph::from_levels(segment).count_paths(first, last)?;
    product.checked_mul(count).ok_or(ChainError::CountOverflow)
}

/// Tally the 1-jolt and 3-jolt steps of a set of adapter ratings.
///
/// Full pipeline through the gap tally: derive the level sequence, then
/// count the gaps of each size. Fails with [`ChainError::EmptyInput`] on an
/// empty collection and [`ChainError::UnacceptableStep`] if any gap falls
/// outside `{1, 2, 3}`.
pub fn tally_step_sizes(ratings: &[Level]) -> Result<StepTally, ChainError> {
    let levels = level_sequence(ratings)?;
    tally_gaps(&levels)
}

// =============================================================================
// TESTS
// =============================================================================
