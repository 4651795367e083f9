//! # joltcount-core
//!
//! The deterministic counting engine for joltcount - THE LOGIC.
//!
//! Given a bag of adapter joltage ratings, this crate derives the canonical
//! chain of levels (outlet, sorted adapters, device sink), tallies the step
//! sizes between them, and counts the number of distinct valid arrangements
//! of the chain under the bounded-step rule (no step may exceed 3 jolts).
//!
//! ## Pipeline
//!
//! ```text
//! ratings ──► levels ──► gaps ──┬──► tally (1-steps × 3-steps)
//!                               │
//!                               └──► forced boundaries
//!                                      │ per segment:
//!                                      ▼
//!                               ReachGraph ──► path count ──► product
//! ```
//!
//! A gap of exactly 3 jolts is a forced boundary - only one arrangement can
//! cross it - so the global path count factors into a product of small
//! per-segment counts and the full graph is never built.
//!
//! ## Architectural Constraints
//!
//! - Pure and synchronous: no I/O, no async, no network
//! - Deterministic: `BTreeMap` only, integer arithmetic only
//! - Never panics; every failure is a [`ChainError`]
//!
//! ## Example
//!
//! ```
//! use joltcount_core::{count_arrangements, tally_step_sizes};
//!
//! let ratings = [16, 10, 15, 5, 1, 11, 7, 19, 6, 12, 4];
//! assert_eq!(tally_step_sizes(&ratings).map(|t| t.product()), Ok(35));
//! assert_eq!(count_arrangements(&ratings), Ok(8));
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod gaps;
pub mod graph;
pub mod levels;
pub mod primitives;
pub mod segments;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types
// =============================================================================

pub use types::{ChainError, Level, StepTally};

// =============================================================================
// RE-EXPORTS: Pipeline Stages
// =============================================================================

pub use gaps::{forced_boundaries, gap_sequence, tally_gaps, validate_gaps};
pub use graph::ReachGraph;
pub use levels::level_sequence;
pub use segments::{count_arrangements, tally_step_sizes};

// =============================================================================
// RE-EXPORTS: Constants
// =============================================================================

pub use primitives::{MAX_STEP, SINK_OFFSET, SOURCE_LEVEL};
