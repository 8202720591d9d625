//! Questionnaire session states

use colored::Color;
use serde::{Deserialize, Serialize};

/// Where a respondent is in the two-stage flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionState {
    /// Adult and content consent not yet given
    AwaitingConsent,
    /// Answering the short exploratory set
    Stage1,
    /// Looking at the stage-1 preview
    Stage1Result,
    /// Answering the full scored set
    Stage2,
    /// Envelope generated and saved
    Completed,
}

impl SessionState {
    /// Terminal color for this state
    pub fn color(&self) -> Color {
        match self {
            SessionState::AwaitingConsent => Color::BrightBlack,
            SessionState::Stage1 => Color::Cyan,
            SessionState::Stage1Result => Color::Yellow,
            SessionState::Stage2 => Color::Blue,
            SessionState::Completed => Color::Green,
        }
    }

    /// Is a question currently on screen?
    pub fn is_quiz(&self) -> bool {
        matches!(self, SessionState::Stage1 | SessionState::Stage2)
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SessionState::AwaitingConsent => "AWAITING_CONSENT",
            SessionState::Stage1 => "STAGE1",
            SessionState::Stage1Result => "STAGE1_RESULT",
            SessionState::Stage2 => "STAGE2",
            SessionState::Completed => "COMPLETED",
        };
        write!(f, "{}", name)
    }
}
