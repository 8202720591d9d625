//! Integration tests for result envelopes and the session store
//!
//! Tests the full path: answers → EnvelopeGenerator → ResultStore → load

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use traitscope::core::question_bank::stage2_questions;
use traitscope::core::{decode_envelope, EnvelopeGenerator, MemoryStorage, ResultStore, SlotStorage};
use traitscope::types::{AnswerMap, EnvelopeReason, Likert, Stage1Signal};
use traitscope::STORAGE_KEY;

fn full_answers(value: u8) -> AnswerMap {
    stage2_questions()
        .iter()
        .map(|q| (q.id.clone(), Likert::new(value).unwrap()))
        .collect()
}

#[test]
fn test_store_round_trip_preserves_envelope() {
    let created = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    let envelope = EnvelopeGenerator::new()
        .generate_at(&AnswerMap::new(), &full_answers(3), stage2_questions(), created)
        .envelope
        .unwrap();

    let mut store = ResultStore::new(MemoryStorage::new());
    store.save(&envelope);
    let loaded = store.load().unwrap();

    assert_eq!(loaded, envelope);
    assert_eq!(loaded.created_at, created);
    assert_eq!(loaded.stage1_signal, Stage1Signal::Low);
}

#[test]
fn test_stored_json_uses_wire_names() {
    let envelope = EnvelopeGenerator::new()
        .generate(&AnswerMap::new(), &full_answers(2), stage2_questions())
        .envelope
        .unwrap();

    let mut store = ResultStore::new(MemoryStorage::new());
    store.save(&envelope);
    let raw = store.storage().read(STORAGE_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(json["version"], 1);
    assert!(json["createdAt"].is_string());
    assert!(json["stage2Answers"].is_object());
    assert_eq!(json["stage1Signal"], "low");
    assert_eq!(json["scores"].as_array().unwrap().len(), 26);
    assert_eq!(json["top3"].as_array().unwrap().len(), 3);
    assert!(json["top3"][0]["trait"].is_string());
    assert!(json["top3"][0]["percent"].is_u64());
}

#[test]
fn test_incomplete_stage2_generates_nothing() {
    let mut answers = full_answers(4);
    answers.remove("s2-65");

    let result = EnvelopeGenerator::new().generate(&AnswerMap::new(), &answers, stage2_questions());
    assert!(!result.is_success());
    assert_eq!(result.reason, EnvelopeReason::R201_ENVELOPE_STAGE2_INCOMPLETE);
}

#[test]
fn test_future_version_is_discarded() {
    let envelope = EnvelopeGenerator::new()
        .generate(&AnswerMap::new(), &full_answers(1), stage2_questions())
        .envelope
        .unwrap();
    let mut json: serde_json::Value = serde_json::from_str(&envelope.to_json().unwrap()).unwrap();
    json["version"] = serde_json::json!(2);

    assert_eq!(
        decode_envelope(&json.to_string()),
        Err(EnvelopeReason::R204_ENVELOPE_VERSION_MISMATCH)
    );

    let mut store = ResultStore::new(MemoryStorage::new());
    store.storage_mut().write(STORAGE_KEY, json.to_string()).unwrap();
    assert!(store.load().is_none());
}

#[test]
fn test_truncated_payload_is_discarded() {
    let envelope = EnvelopeGenerator::new()
        .generate(&AnswerMap::new(), &full_answers(1), stage2_questions())
        .envelope
        .unwrap();
    let json = envelope.to_json().unwrap();

    let mut store = ResultStore::new(MemoryStorage::new());
    store.storage_mut().write(STORAGE_KEY, json[..json.len() / 2].to_string()).unwrap();
    assert!(store.load().is_none());
    assert!(!store.is_present());
}
