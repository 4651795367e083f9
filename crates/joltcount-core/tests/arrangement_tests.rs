//! # End-to-End Arrangement Tests
//!
//! The two worked adapter sets from the original puzzle, plus boundary and
//! failure cases, run through the public pipeline operations.

use joltcount_core::{
    ChainError, Level, StepTally, count_arrangements, forced_boundaries, gap_sequence,
    level_sequence, tally_step_sizes,
};

/// The 11-adapter worked example.
const SMALL_EXAMPLE: [Level; 11] = [16, 10, 15, 5, 1, 11, 7, 19, 6, 12, 4];

/// The 31-adapter worked example.
const LARGE_EXAMPLE: [Level; 31] = [
    28, 33, 18, 42, 31, 14, 46, 20, 48, 47, 24, 23, 49, 45, 19, 38, 39, 11, 1, 32, 25, 35, 8, 17,
    7, 9, 4, 2, 34, 10, 3,
];

// =============================================================================
// WORKED EXAMPLES
// =============================================================================

mod worked_examples {
    use super::*;

    #[test]
    fn small_example_tally() {
        let tally = tally_step_sizes(&SMALL_EXAMPLE).expect("tally");
        assert_eq!(tally, StepTally::new(7, 5));
        assert_eq!(tally.product(), 35);
    }

    #[test]
    fn large_example_tally() {
        let tally = tally_step_sizes(&LARGE_EXAMPLE).expect("tally");
        assert_eq!(tally, StepTally::new(22, 10));
        assert_eq!(tally.product(), 220);
    }

    #[test]
    fn small_example_arrangements() {
        assert_eq!(count_arrangements(&SMALL_EXAMPLE), Ok(8));
    }

    #[test]
    fn large_example_arrangements() {
        assert_eq!(count_arrangements(&LARGE_EXAMPLE), Ok(19208));
    }
}

// =============================================================================
// BOUNDARY CASES
// =============================================================================

mod boundaries {
    use super::*;

    #[test]
    fn single_adapter_chain() {
        let levels = level_sequence(&[2]).expect("levels");
        assert_eq!(levels, vec![0, 2, 5]);
        assert_eq!(count_arrangements(&[2]), Ok(1));
    }

    #[test]
    fn fully_forced_chain_has_one_arrangement() {
        // 0 -> 3 -> 6 -> 9 -> 12: every gap is a forced boundary
        assert_eq!(count_arrangements(&[3, 6, 9]), Ok(1));
        let levels = level_sequence(&[3, 6, 9]).expect("levels");
        let gaps = gap_sequence(&levels);
        assert_eq!(forced_boundaries(&gaps).len(), gaps.len());
    }

    #[test]
    fn segments_multiply_independently() {
        // Two dense runs of two 1-steps separated by a forced gap:
        // 0,1,2 | 5,6,7 | sink. Each run admits 2 orderings, total 4.
        assert_eq!(count_arrangements(&[1, 2, 5, 6, 7]), Ok(4));
    }
}

// =============================================================================
// FAILURE MODES
// =============================================================================

mod failures {
    use super::*;

    #[test]
    fn empty_input() {
        assert_eq!(count_arrangements(&[]), Err(ChainError::EmptyInput));
        assert_eq!(tally_step_sizes(&[]), Err(ChainError::EmptyInput));
    }

    #[test]
    fn unbridgeable_gap() {
        let result = tally_step_sizes(&[1, 2, 8]);
        assert_eq!(
            result,
            Err(ChainError::UnacceptableStep {
                from: 2,
                to: 8,
                gap: 6
            })
        );
    }

    #[test]
    fn overflow_on_very_long_dense_run() {
        // A dense run of 1-steps grows the count tribonacci-fashion; by
        // 100 levels it has long left the u64 range.
        let ratings: Vec<Level> = (1..=100).collect();
        assert_eq!(count_arrangements(&ratings), Err(ChainError::CountOverflow));
    }

    #[test]
    fn longest_safe_dense_run_still_counts() {
        let ratings: Vec<Level> = (1..=70).collect();
        let count = count_arrangements(&ratings).expect("fits in u64");
        assert!(count > 0);
    }
}
