//! # Domain Constants
//!
//! Hardcoded constants of the adapter-chain domain.
//!
//! These values define the puzzle's physics: where a chain starts, how far
//! its built-in sink sits above the highest adapter, and the widest step an
//! adapter may bridge. They are compiled into the binary and are immutable
//! at runtime.

use crate::types::Level;

/// The joltage level of the charging outlet every chain starts from.
///
/// The Level Sequence Builder prepends this value before the sorted adapter
/// ratings.
pub const SOURCE_LEVEL: Level = 0;

/// Offset of the built-in device sink above the highest adapter rating.
///
/// The sink level is always `max(ratings) + SINK_OFFSET`, so the final gap
/// of every derived level sequence equals [`MAX_STEP`].
pub const SINK_OFFSET: u64 = 3;

/// The widest step an adapter can bridge.
///
/// - A gap of exactly `MAX_STEP` is a forced boundary: only one arrangement
///   can cross it, which is what lets the Segment Decomposer cut the chain.
/// - Any gap above `MAX_STEP` violates the chain invariant and is rejected
///   as [`ChainError::UnacceptableStep`](crate::ChainError::UnacceptableStep).
pub const MAX_STEP: u64 = 3;
