//! Integration tests for the questionnaire session
//!
//! Tests the full path: consent → stage 1 → preview → stage 2 → stored envelope

use pretty_assertions::assert_eq;
use traitscope::core::question_bank::{stage1_questions, stage2_questions};
use traitscope::core::{MemoryStorage, QuestionnaireSession, ResultStore, UnavailableStorage};
use traitscope::types::{Likert, ReasonCode, SessionState, Stage1Signal, TraitId};
use traitscope::{ENVELOPE_VERSION, TOP_K, TRAIT_COUNT};

fn likert(value: u8) -> Likert {
    Likert::new(value).unwrap()
}

fn new_session() -> QuestionnaireSession<MemoryStorage> {
    let mut session = QuestionnaireSession::new(ResultStore::new(MemoryStorage::new()));
    assert!(session.accept_consent(true, true).accepted());
    session
}

/// Answer every remaining question of the current stage with `pick(question id)`
fn answer_stage<S, F>(session: &mut QuestionnaireSession<S>, pick: F)
where
    S: traitscope::core::SlotStorage,
    F: Fn(&str) -> u8,
{
    let stage = session.state();
    while session.state() == stage {
        let id = session.current_question().unwrap().id.clone();
        session.answer(likert(pick(&id)));
        session.next();
    }
}

#[test]
fn test_full_session_flow() {
    let mut session = new_session();
    assert_eq!(session.state(), SessionState::Stage1);
    assert_eq!(session.stage_len(), stage1_questions().len());

    answer_stage(&mut session, |_| 3);
    assert_eq!(session.state(), SessionState::Stage1Result);
    assert_eq!(session.preview().unwrap().signal, Stage1Signal::High);

    assert!(session.start_stage2().accepted());
    assert_eq!(session.stage_len(), stage2_questions().len());

    // Strong agreement on the ownership block only
    answer_stage(&mut session, |id| match id {
        "s2-01" | "s2-02" | "s2-03" | "s2-04" | "s2-05" => 4,
        _ => 0,
    });
    assert_eq!(session.state(), SessionState::Completed);
    assert_eq!(session.progress(), 100);

    let envelope = session.result().expect("result stored on completion");
    assert_eq!(envelope.version, ENVELOPE_VERSION);
    assert_eq!(envelope.stage1_signal, Stage1Signal::High);
    assert_eq!(envelope.scores.len(), TRAIT_COUNT);
    assert_eq!(envelope.top3.len(), TOP_K);
    assert_eq!(envelope.stage2_answers.len(), stage2_questions().len());
    assert_eq!(envelope.top3[0].trait_id, TraitId::Owner);
}

#[test]
fn test_next_requires_answer_on_real_bank() {
    let mut session = new_session();
    let out = session.next();
    assert_eq!(out.reason, ReasonCode::R101_ANSWER_REQUIRED);
    assert_eq!(session.index(), 0);
}

#[test]
fn test_answers_survive_navigation() {
    let mut session = new_session();
    session.answer(likert(1));
    session.next();
    session.answer(likert(4));
    session.prev();

    assert_eq!(session.index(), 0);
    assert_eq!(session.current_answer(), Some(likert(1)));
    session.next();
    assert_eq!(session.current_answer(), Some(likert(4)));
}

#[test]
fn test_retake_keeps_answers_and_recomputes() {
    let mut session = new_session();
    answer_stage(&mut session, |_| 1);
    assert_eq!(session.preview().unwrap().signal, Stage1Signal::Low);

    session.retake_stage1();
    assert_eq!(session.state(), SessionState::Stage1);
    assert_eq!(session.current_answer(), Some(likert(1)));

    answer_stage(&mut session, |_| 4);
    assert_eq!(session.preview().unwrap().signal, Stage1Signal::High);
}

#[test]
fn test_clear_result_starts_over() {
    let mut session = new_session();
    answer_stage(&mut session, |_| 2);
    session.start_stage2();
    answer_stage(&mut session, |_| 2);
    assert!(session.result().is_some());

    let out = session.clear_result();
    assert_eq!(out.reason, ReasonCode::R104_SESSION_RESET);
    assert_eq!(session.state(), SessionState::Stage1);
    assert!(session.result().is_none());
    assert!(session.stage1_answers().is_empty());
    assert!(session.stage2_answers().is_empty());
}

#[test]
fn test_completes_without_storage() {
    let mut session = QuestionnaireSession::new(ResultStore::new(UnavailableStorage));
    session.accept_consent(true, true);
    answer_stage(&mut session, |_| 2);
    session.start_stage2();
    answer_stage(&mut session, |_| 2);

    assert_eq!(session.state(), SessionState::Completed);
    assert!(session.result().is_none());
}
