//! Result envelope generation and decoding
//!
//! Key invariant: an envelope only exists once every stage-2 question has an
//! answer. Decoding never fails loudly; callers get a reason code and treat
//! the slot as empty.

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::HashSet;
use crate::{ENVELOPE_VERSION, TOP_K, TRAIT_COUNT};
use crate::core::scoring::{aggregate, classify_stage1, select_top};
use crate::types::{AnswerMap, EnvelopeReason, EnvelopeResult, Question, ResultEnvelope};

/// Envelope generator
#[derive(Debug, Default)]
pub struct EnvelopeGenerator;

impl EnvelopeGenerator {
    /// Create new generator
    pub fn new() -> Self {
        Self
    }

    /// Generate an envelope stamped with the current time
    pub fn generate(
        &self,
        stage1_answers: &AnswerMap,
        stage2_answers: &AnswerMap,
        stage2_questions: &[Question],
    ) -> EnvelopeResult {
        self.generate_at(stage1_answers, stage2_answers, stage2_questions, Utc::now())
    }

    /// Generate an envelope with an explicit creation time
    pub fn generate_at(
        &self,
        stage1_answers: &AnswerMap,
        stage2_answers: &AnswerMap,
        stage2_questions: &[Question],
        created_at: DateTime<Utc>,
    ) -> EnvelopeResult {
        let missing = stage2_questions
            .iter()
            .filter(|q| !stage2_answers.contains_key(&q.id))
            .count();
        if missing > 0 {
            tracing::debug!(missing, "stage 2 incomplete, no envelope");
            return EnvelopeResult::failure(EnvelopeReason::R201_ENVELOPE_STAGE2_INCOMPLETE);
        }

        // Keep only answers that belong to the scored question set
        let stage2_answers: AnswerMap = stage2_questions
            .iter()
            .filter_map(|q| stage2_answers.get(&q.id).map(|v| (q.id.clone(), *v)))
            .collect();

        let scores = aggregate(stage2_questions, &stage2_answers);
        let top3 = select_top(&scores);

        EnvelopeResult::success(ResultEnvelope {
            version: ENVELOPE_VERSION,
            created_at,
            stage2_answers,
            stage1_signal: classify_stage1(stage1_answers),
            scores,
            top3,
        })
    }
}

/// Decode stored text into an envelope, checking version and shape
pub fn decode_envelope(raw: &str) -> Result<ResultEnvelope, EnvelopeReason> {
    let value: Value =
        serde_json::from_str(raw).map_err(|_| EnvelopeReason::R202_ENVELOPE_PARSE_ERROR)?;

    let version = value.get("version").and_then(Value::as_u64);
    if version != Some(u64::from(ENVELOPE_VERSION)) {
        return Err(EnvelopeReason::R204_ENVELOPE_VERSION_MISMATCH);
    }

    let envelope: ResultEnvelope =
        serde_json::from_value(value).map_err(|_| EnvelopeReason::R205_ENVELOPE_MALFORMED)?;

    validate_envelope(&envelope)?;
    Ok(envelope)
}

/// Structural checks serde cannot express
pub fn validate_envelope(envelope: &ResultEnvelope) -> Result<(), EnvelopeReason> {
    if envelope.version != ENVELOPE_VERSION {
        return Err(EnvelopeReason::R204_ENVELOPE_VERSION_MISMATCH);
    }

    let traits: HashSet<_> = envelope.scores.iter().map(|s| s.trait_id).collect();
    if envelope.scores.len() != TRAIT_COUNT || traits.len() != TRAIT_COUNT {
        return Err(EnvelopeReason::R205_ENVELOPE_MALFORMED);
    }

    if envelope.top3.len() > TOP_K || envelope.scores.iter().any(|s| s.percent > 100) {
        return Err(EnvelopeReason::R205_ENVELOPE_MALFORMED);
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::question_bank::stage2_questions;
    use crate::types::{Likert, Stage1Signal};

    fn all_answered(value: u8) -> AnswerMap {
        stage2_questions()
            .iter()
            .map(|q| (q.id.clone(), Likert::new(value).unwrap()))
            .collect()
    }

    #[test]
    fn test_generate_complete() {
        let gen = EnvelopeGenerator::new();
        let result = gen.generate(&AnswerMap::new(), &all_answered(4), stage2_questions());

        assert!(result.is_success());
        assert_eq!(result.reason, EnvelopeReason::R200_ENVELOPE_CREATED);
        let env = result.envelope.unwrap();
        assert_eq!(env.version, 1);
        assert_eq!(env.scores.len(), TRAIT_COUNT);
        assert_eq!(env.top3.len(), 3);
        assert_eq!(env.stage1_signal, Stage1Signal::Low);
        assert_eq!(env.stage2_answers.len(), 65);
    }

    #[test]
    fn test_generate_incomplete_fails() {
        let gen = EnvelopeGenerator::new();
        let mut answers = all_answered(2);
        answers.remove("s2-65");

        let result = gen.generate(&AnswerMap::new(), &answers, stage2_questions());
        assert!(!result.is_success());
        assert_eq!(result.reason, EnvelopeReason::R201_ENVELOPE_STAGE2_INCOMPLETE);
    }

    #[test]
    fn test_foreign_answers_dropped() {
        let gen = EnvelopeGenerator::new();
        let mut answers = all_answered(1);
        answers.insert("s1-01".to_string(), Likert::new(4).unwrap());

        let env = gen
            .generate(&AnswerMap::new(), &answers, stage2_questions())
            .envelope
            .unwrap();
        assert!(!env.stage2_answers.contains_key("s1-01"));
    }

    #[test]
    fn test_decode_round_trip() {
        let gen = EnvelopeGenerator::new();
        let env = gen
            .generate(&AnswerMap::new(), &all_answered(3), stage2_questions())
            .envelope
            .unwrap();
        let json = env.to_json().unwrap();
        assert_eq!(decode_envelope(&json), Ok(env));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert_eq!(decode_envelope("{not json"), Err(EnvelopeReason::R202_ENVELOPE_PARSE_ERROR));
        assert_eq!(
            decode_envelope(r#"{"version": 2}"#),
            Err(EnvelopeReason::R204_ENVELOPE_VERSION_MISMATCH)
        );
        assert_eq!(
            decode_envelope(r#"{"version": 1, "scores": []}"#),
            Err(EnvelopeReason::R205_ENVELOPE_MALFORMED)
        );
    }

    #[test]
    fn test_decode_rejects_short_scores() {
        let gen = EnvelopeGenerator::new();
        let mut env = gen
            .generate(&AnswerMap::new(), &all_answered(3), stage2_questions())
            .envelope
            .unwrap();
        env.scores.pop();
        let json = serde_json::to_string(&env).unwrap();
        assert_eq!(decode_envelope(&json), Err(EnvelopeReason::R205_ENVELOPE_MALFORMED));
    }
}
