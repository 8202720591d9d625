//! Score structures produced by the scoring engine

use serde::{Deserialize, Serialize};
use crate::types::TraitId;

/// Coarse stage-1 classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage1Signal {
    /// Mean at or above the threshold
    High,
    /// Mean below the threshold, or no answers
    Low,
}

impl Stage1Signal {
    /// Result-view headline
    pub fn headline(&self) -> &'static str {
        match self {
            Self::High => "Tendencies likely present",
            Self::Low => "Low or unclear",
        }
    }

    /// Result-view follow-up text
    pub fn message(&self) -> &'static str {
        match self {
            Self::High => "A few signals showed up. The full test will give a clearer picture.",
            Self::Low => "Stage 1 alone is not conclusive. The full test can check for hidden tendencies.",
        }
    }
}

impl std::fmt::Display for Stage1Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::High => "high",
            Self::Low => "low",
        };
        write!(f, "{}", name)
    }
}

/// Normalized score for one trait
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitScore {
    #[serde(rename = "trait")]
    pub trait_id: TraitId,
    /// Sum of answer * weight
    #[serde(rename = "sum")]
    pub raw_sum: f64,
    /// Sum of 4 * weight over answered questions (the denominator)
    #[serde(rename = "denom")]
    pub raw_max: f64,
    /// 0-4 scale, derived from `percent`
    #[serde(rename = "avg")]
    pub normalized_avg: f64,
    /// 0-100
    pub percent: u8,
}

impl TraitScore {
    /// Score for a trait no answered question touched
    pub fn zero(trait_id: TraitId) -> Self {
        Self {
            trait_id,
            raw_sum: 0.0,
            raw_max: 0.0,
            normalized_avg: 0.0,
            percent: 0,
        }
    }
}

/// Stage-1 outcome shown before the full test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage1Preview {
    pub signal: Stage1Signal,
    /// Low-confidence top traits from the stage-1 contributions
    pub top3: Vec<TraitScore>,
}
