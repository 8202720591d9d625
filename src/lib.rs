//! traitscope: two-stage Likert questionnaire and trait affinity scoring
//!
//! Stage 1 produces a coarse high/low signal, stage 2 a weighted percentage
//! profile over a fixed 26-trait taxonomy. The scoring engine in
//! [`core::scoring`] is pure; everything stateful is injected.

pub mod core;
pub mod types;

// =============================================================================
// SCALE [C]
// =============================================================================

/// Highest Likert value (answers are 0..=4)
pub const LIKERT_MAX: u8 = 4;

/// Number of traits in the taxonomy
pub const TRAIT_COUNT: usize = 26;

// =============================================================================
// SCORING [C] - fixed design constants, not configurable
// =============================================================================

/// Stage-1 mean at or above this is classified `high`
pub const STAGE1_HIGH_THRESHOLD: f64 = 2.4;

/// Number of traits reported as top results
pub const TOP_K: usize = 3;

// =============================================================================
// RESULT ENVELOPE
// =============================================================================

/// Schema version stamped on every envelope; anything else is discarded on load
pub const ENVELOPE_VERSION: u32 = 1;

/// Slot key used in the session store
pub const STORAGE_KEY: &str = "traitscope_result_v1";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
