//! Questions and their trait contributions

use serde::{Deserialize, Serialize};
use crate::types::TraitId;

/// Which questionnaire a question belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Stage {
    /// Short exploratory set
    One,
    /// Full scored set
    Two,
}

impl Stage {
    pub fn number(&self) -> u8 {
        match self {
            Stage::One => 1,
            Stage::Two => 2,
        }
    }
}

impl TryFrom<u8> for Stage {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Stage::One),
            2 => Ok(Stage::Two),
            other => Err(format!("unknown stage {}", other)),
        }
    }
}

impl From<Stage> for u8 {
    fn from(stage: Stage) -> u8 {
        stage.number()
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "stage {}", self.number())
    }
}

/// How an answer feeds one trait
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    #[serde(rename = "trait")]
    pub trait_id: TraitId,
    pub weight: f64,
}

impl Contribution {
    pub fn new(trait_id: TraitId, weight: f64) -> Self {
        Self { trait_id, weight }
    }
}

/// A questionnaire item
///
/// An empty `contributions` list marks a meta question: it is asked but never
/// affects any score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub stage: Stage,
    pub prompt: String,
    #[serde(default)]
    pub contributions: Vec<Contribution>,
}

impl Question {
    /// Create a meta question; add contributions with [`Question::with`]
    pub fn new(id: impl Into<String>, stage: Stage, prompt: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            stage,
            prompt: prompt.into(),
            contributions: Vec::new(),
        }
    }

    /// Append a (trait, weight) contribution
    pub fn with(mut self, trait_id: TraitId, weight: f64) -> Self {
        self.contributions.push(Contribution::new(trait_id, weight));
        self
    }

    /// True when the question never affects scoring
    pub fn is_meta(&self) -> bool {
        self.contributions.is_empty()
    }
}
