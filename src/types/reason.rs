//! Reason codes for questionnaire session steps

use serde::{Deserialize, Serialize};

/// Reason codes for every session step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum ReasonCode {
    // =========================================================================
    // R100: Consent
    // =========================================================================
    /// Both confirmations given, stage 1 starts
    R100_CONSENT_ACCEPTED,
    /// At least one confirmation missing
    R100_CONSENT_REQUIRED,

    // =========================================================================
    // R101: Answers
    // =========================================================================
    /// Answer stored for the current question
    R101_ANSWER_RECORDED,
    /// Next refused, current question unanswered
    R101_ANSWER_REQUIRED,

    // =========================================================================
    // R102: Navigation
    // =========================================================================
    /// Moved to the next question
    R102_MOVED_NEXT,
    /// Moved to the previous question
    R102_MOVED_PREV,
    /// Prev refused on the first question
    R102_AT_FIRST_QUESTION,

    // =========================================================================
    // R103: Stage transitions
    // =========================================================================
    /// Last stage-1 question answered, preview ready
    R103_STAGE1_COMPLETE,
    /// Stage 1 restarted from the preview
    R103_STAGE1_RETAKE,
    /// Full test started
    R103_STAGE2_STARTED,
    /// Envelope generated and saved
    R103_SESSION_COMPLETE,
    /// Envelope could not be generated
    R103_ENVELOPE_FAILED,

    // =========================================================================
    // R104: Control
    // =========================================================================
    /// Everything except consent cleared
    R104_SESSION_RESET,
    /// Action not valid in the current state
    R104_ACTION_NOT_AVAILABLE,
}

impl ReasonCode {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::R100_CONSENT_ACCEPTED => "R100_CONSENT_ACCEPTED",
            Self::R100_CONSENT_REQUIRED => "R100_CONSENT_REQUIRED",
            Self::R101_ANSWER_RECORDED => "R101_ANSWER_RECORDED",
            Self::R101_ANSWER_REQUIRED => "R101_ANSWER_REQUIRED",
            Self::R102_MOVED_NEXT => "R102_MOVED_NEXT",
            Self::R102_MOVED_PREV => "R102_MOVED_PREV",
            Self::R102_AT_FIRST_QUESTION => "R102_AT_FIRST_QUESTION",
            Self::R103_STAGE1_COMPLETE => "R103_STAGE1_COMPLETE",
            Self::R103_STAGE1_RETAKE => "R103_STAGE1_RETAKE",
            Self::R103_STAGE2_STARTED => "R103_STAGE2_STARTED",
            Self::R103_SESSION_COMPLETE => "R103_SESSION_COMPLETE",
            Self::R103_ENVELOPE_FAILED => "R103_ENVELOPE_FAILED",
            Self::R104_SESSION_RESET => "R104_SESSION_RESET",
            Self::R104_ACTION_NOT_AVAILABLE => "R104_ACTION_NOT_AVAILABLE",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::R100_CONSENT_ACCEPTED => "Consent given",
            Self::R100_CONSENT_REQUIRED => "Both confirmations are required to start",
            Self::R101_ANSWER_RECORDED => "Answer recorded",
            Self::R101_ANSWER_REQUIRED => "Answer this question first",
            Self::R102_MOVED_NEXT => "Next question",
            Self::R102_MOVED_PREV => "Previous question",
            Self::R102_AT_FIRST_QUESTION => "Already at the first question",
            Self::R103_STAGE1_COMPLETE => "Stage 1 finished",
            Self::R103_STAGE1_RETAKE => "Stage 1 restarted",
            Self::R103_STAGE2_STARTED => "Full test started",
            Self::R103_SESSION_COMPLETE => "Result ready",
            Self::R103_ENVELOPE_FAILED => "Result could not be created",
            Self::R104_SESSION_RESET => "Session reset",
            Self::R104_ACTION_NOT_AVAILABLE => "Not available right now",
        }
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}
