//! Likert answers

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use crate::LIKERT_MAX;

/// A single 5-point Likert answer (0..=4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Likert(u8);

impl Likert {
    /// Every valid answer, lowest first
    pub const SCALE: [Likert; 5] = [Likert(0), Likert(1), Likert(2), Likert(3), Likert(4)];

    /// Build from a raw value; `None` outside 0..=4
    pub fn new(value: u8) -> Option<Self> {
        (value <= LIKERT_MAX).then_some(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Answer label shown to respondents
    pub fn label(&self) -> &'static str {
        match self.0 {
            0 => "Strongly disagree",
            1 => "Disagree",
            2 => "Neutral",
            3 => "Agree",
            _ => "Strongly agree",
        }
    }
}

impl TryFrom<u8> for Likert {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Likert::new(value).ok_or_else(|| format!("likert value {} outside 0..={}", value, LIKERT_MAX))
    }
}

impl From<Likert> for u8 {
    fn from(value: Likert) -> u8 {
        value.0
    }
}

impl std::fmt::Display for Likert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Answers keyed by question id. Missing key = unanswered.
pub type AnswerMap = BTreeMap<String, Likert>;
