//! Result envelope: the persisted snapshot of one completed session
//!
//! - Created once, after every stage-2 question is answered
//! - Stamped with a schema version; any other version is discarded on load
//! - `scores` always holds one entry per taxonomy trait

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::types::{AnswerMap, Stage1Signal, TraitScore};

/// A completed scoring session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEnvelope {
    /// Schema version (always 1 when written)
    pub version: u32,
    /// When the session completed
    pub created_at: DateTime<Utc>,
    /// Stage-2 answers the scores were derived from
    pub stage2_answers: AnswerMap,
    /// Stage-1 summary signal
    pub stage1_signal: Stage1Signal,
    /// All 26 trait scores, default order
    pub scores: Vec<TraitScore>,
    /// Top results, at most 3
    pub top3: Vec<TraitScore>,
}

impl ResultEnvelope {
    /// Serialize for the session store
    pub fn to_json(&self) -> Result<String, EnvelopeReason> {
        serde_json::to_string(self).map_err(|_| EnvelopeReason::R203_ENVELOPE_SERIALIZE_ERROR)
    }
}

/// Result of envelope generation
#[derive(Debug, Clone)]
pub struct EnvelopeResult {
    /// The envelope if successful
    pub envelope: Option<ResultEnvelope>,
    /// Reason code
    pub reason: EnvelopeReason,
}

impl EnvelopeResult {
    /// Create success result
    pub fn success(envelope: ResultEnvelope) -> Self {
        Self {
            envelope: Some(envelope),
            reason: EnvelopeReason::R200_ENVELOPE_CREATED,
        }
    }

    /// Create failure result
    pub fn failure(reason: EnvelopeReason) -> Self {
        Self {
            envelope: None,
            reason,
        }
    }

    /// Check if successful
    pub fn is_success(&self) -> bool {
        self.envelope.is_some()
    }
}

/// Reason codes for envelope creation and decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum EnvelopeReason {
    /// Envelope successfully created
    R200_ENVELOPE_CREATED,
    /// Some stage-2 question has no answer
    R201_ENVELOPE_STAGE2_INCOMPLETE,
    /// Stored text is not valid JSON
    R202_ENVELOPE_PARSE_ERROR,
    /// Serialization error
    R203_ENVELOPE_SERIALIZE_ERROR,
    /// Stored version is not the current schema version
    R204_ENVELOPE_VERSION_MISMATCH,
    /// Structure does not match the envelope shape
    R205_ENVELOPE_MALFORMED,
}

impl EnvelopeReason {
    /// Get code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::R200_ENVELOPE_CREATED => "R200_ENVELOPE_CREATED",
            Self::R201_ENVELOPE_STAGE2_INCOMPLETE => "R201_ENVELOPE_STAGE2_INCOMPLETE",
            Self::R202_ENVELOPE_PARSE_ERROR => "R202_ENVELOPE_PARSE_ERROR",
            Self::R203_ENVELOPE_SERIALIZE_ERROR => "R203_ENVELOPE_SERIALIZE_ERROR",
            Self::R204_ENVELOPE_VERSION_MISMATCH => "R204_ENVELOPE_VERSION_MISMATCH",
            Self::R205_ENVELOPE_MALFORMED => "R205_ENVELOPE_MALFORMED",
        }
    }

    /// Get description
    pub fn description(&self) -> &'static str {
        match self {
            Self::R200_ENVELOPE_CREATED => "Result envelope created",
            Self::R201_ENVELOPE_STAGE2_INCOMPLETE => "Not every stage-2 question is answered",
            Self::R202_ENVELOPE_PARSE_ERROR => "Stored result is not valid JSON",
            Self::R203_ENVELOPE_SERIALIZE_ERROR => "Failed to serialize result",
            Self::R204_ENVELOPE_VERSION_MISMATCH => "Stored result has an incompatible version",
            Self::R205_ENVELOPE_MALFORMED => "Stored result has a malformed structure",
        }
    }
}

impl std::fmt::Display for EnvelopeReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}
