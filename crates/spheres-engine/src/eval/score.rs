//! Evaluation score type and bounds.

/// A position score in material units. Positive favours Purple.
pub type Score = i32;

/// Worst/initial bound for the search and the full alpha-beta window.
///
/// A node where the side to move has no moves evaluates to `±INFINITY`.
pub const INFINITY: Score = 10_000_000;
