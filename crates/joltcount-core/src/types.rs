//! # Core Type Definitions
//!
//! This module contains the types shared across the joltcount engine:
//! - The [`Level`] vertex identifier
//! - The [`StepTally`] result of gap tallying
//! - The [`ChainError`] error enum
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Use integer arithmetic only (no floating-point)
//! - Order deterministically in `BTreeMap`/`BTreeSet`
//! - Use saturating or checked arithmetic for counters

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// LEVEL
// =============================================================================

/// A joltage level: the source outlet, one adapter rating, or the device
/// sink.
///
/// Levels double as vertex identifiers in the reachability graph - vertices
/// are keyed by level value, never by position in the sequence.
pub type Level = u64;

// =============================================================================
// STEP TALLY
// =============================================================================

/// Counts of 1-jolt and 3-jolt steps across a level sequence.
///
/// Gaps of 2 jolts occur in valid chains but are deliberately not recorded:
/// the domain's answer formula multiplies only the 1-step and 3-step counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StepTally {
    /// Number of gaps equal to 1.
    pub ones: u64,
    /// Number of gaps equal to 3.
    pub threes: u64,
}

impl StepTally {
    /// Create a new tally.
    #[must_use]
    pub const fn new(ones: u64, threes: u64) -> Self {
        Self { ones, threes }
    }

    /// The product of the two counts - the domain's tally answer.
    ///
    /// Uses saturating arithmetic; both factors are bounded by the input
    /// length.
    #[must_use]
    pub const fn product(self) -> u64 {
        self.ones.saturating_mul(self.threes)
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Errors that can occur in the joltcount engine.
///
/// - No silent failures
/// - Use `Result<T, ChainError>` for fallible operations
/// - The engine never panics; all failures surface to the caller
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// No adapter ratings were provided; the sink level is undefined.
    #[error("no adapter ratings were provided")]
    EmptyInput,

    /// An adapter rating is too large to derive a sink level above it.
    #[error("adapter rating {0} is too large to derive a sink level")]
    RatingOutOfRange(Level),

    /// A gap between consecutive levels falls outside the allowed 1..=3
    /// range. Fatal: the bounded-step invariant does not hold for this
    /// input.
    #[error("unacceptable step of {gap} jolts between levels {from} and {to}")]
    UnacceptableStep {
        /// The lower level of the offending pair.
        from: Level,
        /// The upper level of the offending pair.
        to: Level,
        /// The gap between them.
        gap: u64,
    },

    /// An arrangement count exceeded the u64 range.
    #[error("arrangement count exceeded the u64 range")]
    CountOverflow,

    /// An I/O error occurred (used by callers that read input files; the
    /// engine itself performs no I/O).
    #[error("I/O error: {0}")]
    Io(String),
}

// =============================================================================
// TESTS
// =============================================================================
