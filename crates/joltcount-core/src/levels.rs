//! # Level Sequence Builder
//!
//! Turns an unordered collection of adapter ratings into the canonical
//! level sequence: source outlet, sorted ratings, device sink.

use crate::primitives::{SINK_OFFSET, SOURCE_LEVEL};
use crate::types::{ChainError, Level};

/// Derive the canonical level sequence from raw adapter ratings.
///
/// The result is the ratings sorted ascending, with the source level
/// ([`SOURCE_LEVEL`]) prepended and the sink level (`max + `[`SINK_OFFSET`])
/// appended. Length is always `ratings.len() + 2`.
///
/// Returns [`ChainError::EmptyInput`] for an empty collection (the sink
/// would be undefined) and [`ChainError::RatingOutOfRange`] if the maximum
/// rating is too close to `u64::MAX` for a sink to exist above it.
pub fn level_sequence(ratings: &[Level]) -> Result<Vec<Level>, ChainError> {
    let max = ratings.iter().copied().max().ok_or(ChainError::EmptyInput)?;
    let sink = max
        .checked_add(SINK_OFFSET)
        .ok_or(ChainError::RatingOutOfRange(max))?;

    let mut levels = Vec::with_capacity(ratings.len() + 2);
    levels.push(SOURCE_LEVEL);
    levels.extend_from_slice(ratings);
    levels.sort_unstable();
    levels.push(sink);
    Ok(levels)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_rejected() {
        assert_eq!(level_sequence(&[]), Err(ChainError::EmptyInput));
    }

    #[test]
    fn single_adapter() {
        let levels = level_sequence(&[7]).expect("levels");
        assert_eq!(levels, vec![0, 7, 10]);
    }

    #[test]
    fn sorts_and_brackets_ratings() {
        let levels = level_sequence(&[16, 10, 15, 5, 1, 11, 7, 19, 6, 12, 4]).expect("levels");
        assert_eq!(levels.first(), Some(&0));
        assert_eq!(levels.last(), Some(&22));
        assert_eq!(levels.len(), 13);
        assert!(levels.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn near_max_rating_rejected() {
        let result = level_sequence(&[u64::MAX - 1]);
        assert_eq!(result, Err(ChainError::RatingOutOfRange(u64::MAX - 1)));
    }
}
