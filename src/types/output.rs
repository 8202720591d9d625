//! Output structures for each session step

use colored::Colorize;
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::types::{ReasonCode, ResultEnvelope, SessionState, Stage1Preview};

/// Output of one session step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepOutput {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// State after the step
    pub state: SessionState,
    /// Current question index within the stage
    pub index: usize,
    /// Progress through the stage (0-100)
    pub progress: u8,
    /// Why the step ended where it did
    pub reason: ReasonCode,
    /// Set once stage 1 is finished
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<Stage1Preview>,
    /// Set once stage 2 is finished
    #[serde(skip_serializing_if = "Option::is_none")]
    pub envelope: Option<ResultEnvelope>,
}

impl StepOutput {
    /// Create new output
    pub fn new(state: SessionState, index: usize, progress: u8, reason: ReasonCode) -> Self {
        Self {
            timestamp: Utc::now(),
            state,
            index,
            progress,
            reason,
            preview: None,
            envelope: None,
        }
    }

    /// Was the requested action carried out?
    pub fn accepted(&self) -> bool {
        !matches!(
            self.reason,
            ReasonCode::R100_CONSENT_REQUIRED
                | ReasonCode::R101_ANSWER_REQUIRED
                | ReasonCode::R102_AT_FIRST_QUESTION
                | ReasonCode::R103_ENVELOPE_FAILED
                | ReasonCode::R104_ACTION_NOT_AVAILABLE
        )
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        format!(
            "[{}] {}% | {}",
            self.state,
            self.progress,
            self.reason.description()
        )
        .color(self.state.color())
        .to_string()
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "state={} | index={} | progress={} | reason={}",
            self.state,
            self.index,
            self.progress,
            self.reason.code()
        )
    }
}
