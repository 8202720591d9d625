//! Scoring engine: stage-1 signal, weighted trait aggregation, top-K
//!
//! All functions are pure. Identical inputs give identical outputs, down to
//! ordering, which callers rely on.

use std::cmp::Ordering;
use std::collections::HashMap;
use crate::{LIKERT_MAX, STAGE1_HIGH_THRESHOLD, TOP_K};
use crate::types::{AnswerMap, Question, Stage1Preview, Stage1Signal, TraitId, TraitScore};

/// Per-trait running totals
#[derive(Debug, Clone, Copy, Default)]
struct Accumulator {
    sum: f64,
    denom: f64,
}

/// Classify stage-1 answers by their unweighted mean
///
/// Trait mappings are ignored on purpose: stage 1 is too short for weighted
/// scores to mean anything.
pub fn classify_stage1(answers: &AnswerMap) -> Stage1Signal {
    if answers.is_empty() {
        return Stage1Signal::Low;
    }

    let sum: f64 = answers.values().map(|v| f64::from(v.value())).sum();
    let mean = sum / answers.len() as f64;

    if mean >= STAGE1_HIGH_THRESHOLD {
        Stage1Signal::High
    } else {
        Stage1Signal::Low
    }
}

/// Aggregate answers into one score per taxonomy trait
///
/// Unanswered and meta questions contribute nothing, not even to the
/// denominator. Always returns 26 entries in default order.
pub fn aggregate(questions: &[Question], answers: &AnswerMap) -> Vec<TraitScore> {
    let mut acc: HashMap<TraitId, Accumulator> = TraitId::ALL
        .iter()
        .map(|t| (*t, Accumulator::default()))
        .collect();

    for q in questions {
        let Some(answer) = answers.get(&q.id) else {
            continue;
        };
        let value = f64::from(answer.value());

        for c in &q.contributions {
            let entry = acc.entry(c.trait_id).or_default();
            entry.sum += value * c.weight;
            entry.denom += f64::from(LIKERT_MAX) * c.weight;
        }
    }

    let mut scores: Vec<TraitScore> = TraitId::ALL
        .iter()
        .map(|t| {
            let a = acc.get(t).copied().unwrap_or_default();
            let percent = to_percent(a.sum, a.denom);
            TraitScore {
                trait_id: *t,
                raw_sum: a.sum,
                raw_max: a.denom,
                normalized_avg: (f64::from(percent) / 100.0) * f64::from(LIKERT_MAX),
                percent,
            }
        })
        .collect();

    scores.sort_by(default_order);
    scores
}

/// Convert a raw sum and denominator to an integer percent
///
/// Zero denominator maps to 0. Rounding is half-up (37.5 -> 38); the value
/// is clamped to [0, 100] first so half-away-from-zero is the same thing.
pub fn to_percent(sum: f64, denom: f64) -> u8 {
    if denom <= 0.0 {
        return 0;
    }
    let raw = (sum / denom) * 100.0;
    if raw.is_nan() {
        return 0;
    }
    raw.clamp(0.0, 100.0).round() as u8
}

/// Default presentation order: percent desc, then trait id asc
pub fn default_order(a: &TraitScore, b: &TraitScore) -> Ordering {
    b.percent
        .cmp(&a.percent)
        .then_with(|| a.trait_id.as_str().cmp(b.trait_id.as_str()))
}

/// Top-K order: percent desc, denominator desc, trait id asc
///
/// A larger denominator means more question weight backed the score.
pub fn top_order(a: &TraitScore, b: &TraitScore) -> Ordering {
    b.percent
        .cmp(&a.percent)
        .then_with(|| b.raw_max.total_cmp(&a.raw_max))
        .then_with(|| a.trait_id.as_str().cmp(b.trait_id.as_str()))
}

/// Top 3 scores; the input is left untouched
pub fn select_top(scores: &[TraitScore]) -> Vec<TraitScore> {
    select_top_k(scores, TOP_K)
}

/// Top `k` scores (fewer if the input is shorter)
pub fn select_top_k(scores: &[TraitScore], k: usize) -> Vec<TraitScore> {
    let mut sorted = scores.to_vec();
    sorted.sort_by(top_order);
    sorted.truncate(k);
    sorted
}

/// Stage-1 signal plus a low-confidence top 3 from the stage-1 mappings
pub fn preview_stage1(questions: &[Question], answers: &AnswerMap) -> Stage1Preview {
    let scores = aggregate(questions, answers);
    Stage1Preview {
        signal: classify_stage1(answers),
        top3: select_top(&scores),
    }
}

// =============================================================================
// TESTS
// =============================================================================
