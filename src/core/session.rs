//! Questionnaire session: drives one respondent through both stages
//!
//! State transitions:
//! - AWAITING_CONSENT → STAGE1: adult and content confirmations both given
//! - STAGE1 → STAGE1_RESULT: next() on the last answered stage-1 question
//! - STAGE1_RESULT → STAGE1: retake_stage1() (answers kept)
//! - STAGE1_RESULT → STAGE2: start_stage2()
//! - STAGE2 → COMPLETED: next() on the last answered stage-2 question;
//!   the envelope is generated and saved to the injected store
//! - any → STAGE1: restart() / clear_result() once consent is given

use crate::core::envelope::EnvelopeGenerator;
use crate::core::question_bank::{stage1_questions, stage2_questions};
use crate::core::scoring::preview_stage1;
use crate::core::store::{ResultStore, SlotStorage};
use crate::types::{
    AnswerMap, Likert, Question, ReasonCode, ResultEnvelope, SessionState, Stage,
    Stage1Preview, StepOutput,
};

/// One respondent's pass through the questionnaire
#[derive(Debug)]
pub struct QuestionnaireSession<S: SlotStorage> {
    /// Current state
    state: SessionState,
    /// Question index within the current stage
    index: usize,
    /// Consent given once, survives restarts
    consent: bool,
    stage1: Vec<Question>,
    stage2: Vec<Question>,
    stage1_answers: AnswerMap,
    stage2_answers: AnswerMap,
    /// Set when stage 1 finishes
    preview: Option<Stage1Preview>,
    generator: EnvelopeGenerator,
    store: ResultStore<S>,
}

impl<S: SlotStorage> QuestionnaireSession<S> {
    /// Session over the built-in question bank
    pub fn new(store: ResultStore<S>) -> Self {
        Self::with_questions(stage1_questions().to_vec(), stage2_questions().to_vec(), store)
    }

    /// Session over custom question sets
    pub fn with_questions(stage1: Vec<Question>, stage2: Vec<Question>, store: ResultStore<S>) -> Self {
        Self {
            state: SessionState::AwaitingConsent,
            index: 0,
            consent: false,
            stage1,
            stage2,
            stage1_answers: AnswerMap::new(),
            stage2_answers: AnswerMap::new(),
            preview: None,
            generator: EnvelopeGenerator::new(),
            store,
        }
    }

    /// Record the adult and content confirmations
    pub fn accept_consent(&mut self, adult: bool, content: bool) -> StepOutput {
        if self.state != SessionState::AwaitingConsent {
            return self.output(ReasonCode::R104_ACTION_NOT_AVAILABLE);
        }
        if !(adult && content) {
            return self.output(ReasonCode::R100_CONSENT_REQUIRED);
        }

        self.consent = true;
        self.enter(SessionState::Stage1);
        tracing::info!("consent given, stage 1 started");
        self.output(ReasonCode::R100_CONSENT_ACCEPTED)
    }

    /// Answer the current question
    pub fn answer(&mut self, value: Likert) -> StepOutput {
        let Some(id) = self.current_question().map(|q| q.id.clone()) else {
            return self.output(ReasonCode::R104_ACTION_NOT_AVAILABLE);
        };

        match self.state {
            SessionState::Stage1 => self.stage1_answers.insert(id, value),
            SessionState::Stage2 => self.stage2_answers.insert(id, value),
            _ => return self.output(ReasonCode::R104_ACTION_NOT_AVAILABLE),
        };
        self.output(ReasonCode::R101_ANSWER_RECORDED)
    }

    /// Advance; finishing a stage triggers its result
    pub fn next(&mut self) -> StepOutput {
        if !self.state.is_quiz() {
            return self.output(ReasonCode::R104_ACTION_NOT_AVAILABLE);
        }

        let len = self.current_questions().len();
        if len > 0 && self.current_answer().is_none() {
            return self.output(ReasonCode::R101_ANSWER_REQUIRED);
        }

        if self.index + 1 < len {
            self.index += 1;
            return self.output(ReasonCode::R102_MOVED_NEXT);
        }

        match self.state {
            SessionState::Stage1 => self.finish_stage1(),
            _ => self.finish_stage2(),
        }
    }

    /// Go back one question; no-op on the first
    pub fn prev(&mut self) -> StepOutput {
        if !self.state.is_quiz() {
            return self.output(ReasonCode::R104_ACTION_NOT_AVAILABLE);
        }
        if self.index == 0 {
            return self.output(ReasonCode::R102_AT_FIRST_QUESTION);
        }
        self.index -= 1;
        self.output(ReasonCode::R102_MOVED_PREV)
    }

    /// From the preview, go back to question 1 of stage 1
    pub fn retake_stage1(&mut self) -> StepOutput {
        if self.state != SessionState::Stage1Result {
            return self.output(ReasonCode::R104_ACTION_NOT_AVAILABLE);
        }
        self.enter(SessionState::Stage1);
        self.output(ReasonCode::R103_STAGE1_RETAKE)
    }

    /// From the preview, start the full test
    pub fn start_stage2(&mut self) -> StepOutput {
        if self.state != SessionState::Stage1Result {
            return self.output(ReasonCode::R104_ACTION_NOT_AVAILABLE);
        }
        self.enter(SessionState::Stage2);
        tracing::info!("stage 2 started");
        self.output(ReasonCode::R103_STAGE2_STARTED)
    }

    /// Drop all answers and start over at stage 1 (consent is kept)
    pub fn restart(&mut self) -> StepOutput {
        self.stage1_answers.clear();
        self.stage2_answers.clear();
        self.preview = None;
        if self.consent {
            self.enter(SessionState::Stage1);
        } else {
            self.enter(SessionState::AwaitingConsent);
        }
        self.output(ReasonCode::R104_SESSION_RESET)
    }

    /// Clear the stored result and start over
    pub fn clear_result(&mut self) -> StepOutput {
        self.store.clear();
        tracing::info!("stored result cleared");
        self.restart()
    }

    fn finish_stage1(&mut self) -> StepOutput {
        let preview = preview_stage1(&self.stage1, &self.stage1_answers);
        tracing::info!(signal = %preview.signal, "stage 1 complete");
        self.preview = Some(preview.clone());
        self.enter(SessionState::Stage1Result);

        let mut out = self.output(ReasonCode::R103_STAGE1_COMPLETE);
        out.preview = Some(preview);
        out
    }

    fn finish_stage2(&mut self) -> StepOutput {
        let result = self
            .generator
            .generate(&self.stage1_answers, &self.stage2_answers, &self.stage2);

        let Some(envelope) = result.envelope else {
            tracing::warn!(reason = result.reason.code(), "envelope not generated");
            return self.output(ReasonCode::R103_ENVELOPE_FAILED);
        };

        self.store.save(&envelope);
        self.enter(SessionState::Completed);
        tracing::info!(
            top = ?envelope.top3.iter().map(|s| s.trait_id.as_str()).collect::<Vec<_>>(),
            "session complete"
        );

        let mut out = self.output(ReasonCode::R103_SESSION_COMPLETE);
        out.envelope = Some(envelope);
        out
    }

    fn enter(&mut self, state: SessionState) {
        self.state = state;
        self.index = 0;
    }

    fn output(&self, reason: ReasonCode) -> StepOutput {
        let out = StepOutput::new(self.state, self.index, self.progress(), reason);
        tracing::trace!("{}", out.to_parseable_string());
        out
    }

    fn current_questions(&self) -> &[Question] {
        match self.state {
            SessionState::Stage1 => &self.stage1,
            SessionState::Stage2 => &self.stage2,
            _ => &[],
        }
    }

    /// Get current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Index within the current stage
    pub fn index(&self) -> usize {
        self.index
    }

    /// Stage being answered, if a question is on screen
    pub fn stage(&self) -> Option<Stage> {
        match self.state {
            SessionState::Stage1 => Some(Stage::One),
            SessionState::Stage2 => Some(Stage::Two),
            _ => None,
        }
    }

    /// Number of questions in the current stage
    pub fn stage_len(&self) -> usize {
        self.current_questions().len()
    }

    /// Question on screen
    pub fn current_question(&self) -> Option<&Question> {
        self.current_questions().get(self.index)
    }

    /// Answer already given to the question on screen
    pub fn current_answer(&self) -> Option<Likert> {
        let q = self.current_question()?;
        match self.state {
            SessionState::Stage1 => self.stage1_answers.get(&q.id).copied(),
            SessionState::Stage2 => self.stage2_answers.get(&q.id).copied(),
            _ => None,
        }
    }

    /// Progress through the current stage (0-100)
    pub fn progress(&self) -> u8 {
        match self.state {
            SessionState::AwaitingConsent => 0,
            SessionState::Stage1Result | SessionState::Completed => 100,
            SessionState::Stage1 | SessionState::Stage2 => {
                let len = self.current_questions().len();
                if len == 0 {
                    return 100;
                }
                (((self.index + 1) as f64 / len as f64) * 100.0).round() as u8
            }
        }
    }

    /// Stage-1 preview, once stage 1 is finished
    pub fn preview(&self) -> Option<&Stage1Preview> {
        self.preview.as_ref()
    }

    pub fn stage1_answers(&self) -> &AnswerMap {
        &self.stage1_answers
    }

    pub fn stage2_answers(&self) -> &AnswerMap {
        &self.stage2_answers
    }

    /// Stored result, if any
    pub fn result(&self) -> Option<ResultEnvelope> {
        self.store.load()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::MemoryStorage;
    use crate::types::{Stage1Signal, TraitId};

    fn likert(v: u8) -> Likert {
        Likert::new(v).unwrap()
    }

    fn small_session() -> QuestionnaireSession<MemoryStorage> {
        let stage1 = vec![
            Question::new("a1", Stage::One, "p").with(TraitId::Switch, 1.0),
            Question::new("a2", Stage::One, "p").with(TraitId::Brat, 1.0),
        ];
        let stage2 = vec![
            Question::new("b1", Stage::Two, "p").with(TraitId::Owner, 1.0),
            Question::new("b2", Stage::Two, "p"),
        ];
        QuestionnaireSession::with_questions(stage1, stage2, ResultStore::new(MemoryStorage::new()))
    }

    fn consented() -> QuestionnaireSession<MemoryStorage> {
        let mut s = small_session();
        s.accept_consent(true, true);
        s
    }

    #[test]
    fn test_initial_state_awaits_consent() {
        let s = small_session();
        assert_eq!(s.state(), SessionState::AwaitingConsent);
        assert!(s.current_question().is_none());
        assert_eq!(s.progress(), 0);
    }

    #[test]
    fn test_consent_requires_both() {
        let mut s = small_session();
        let out = s.accept_consent(true, false);
        assert_eq!(out.reason, ReasonCode::R100_CONSENT_REQUIRED);
        assert!(!out.accepted());
        assert_eq!(s.state(), SessionState::AwaitingConsent);

        let out = s.accept_consent(true, true);
        assert_eq!(out.state, SessionState::Stage1);
    }

    #[test]
    fn test_next_requires_answer() {
        let mut s = consented();
        let out = s.next();
        assert_eq!(out.reason, ReasonCode::R101_ANSWER_REQUIRED);
        assert_eq!(s.index(), 0);
    }

    #[test]
    fn test_prev_at_first_question() {
        let mut s = consented();
        assert_eq!(s.prev().reason, ReasonCode::R102_AT_FIRST_QUESTION);
        s.answer(likert(2));
        s.next();
        assert_eq!(s.index(), 1);
        assert_eq!(s.prev().reason, ReasonCode::R102_MOVED_PREV);
        assert_eq!(s.current_answer(), Some(likert(2)));
    }

    #[test]
    fn test_progress() {
        let mut s = consented();
        assert_eq!(s.progress(), 50);
        s.answer(likert(1));
        s.next();
        assert_eq!(s.progress(), 100);
    }

    #[test]
    fn test_stage1_completion_gives_preview() {
        let mut s = consented();
        s.answer(likert(3));
        s.next();
        s.answer(likert(2));
        let out = s.next();

        assert_eq!(out.reason, ReasonCode::R103_STAGE1_COMPLETE);
        assert_eq!(s.state(), SessionState::Stage1Result);
        let preview = out.preview.unwrap();
        assert_eq!(preview.signal, Stage1Signal::High);
        assert_eq!(preview.top3[0].trait_id, TraitId::Switch);
    }

    #[test]
    fn test_retake_keeps_answers() {
        let mut s = consented();
        s.answer(likert(3));
        s.next();
        s.answer(likert(2));
        s.next();

        assert_eq!(s.retake_stage1().state, SessionState::Stage1);
        assert_eq!(s.index(), 0);
        assert_eq!(s.current_answer(), Some(likert(3)));
    }

    #[test]
    fn test_full_flow_saves_envelope() {
        let mut s = consented();
        for _ in 0..2 {
            s.answer(likert(4));
            s.next();
        }
        assert_eq!(s.start_stage2().state, SessionState::Stage2);

        s.answer(likert(2));
        s.next();
        s.answer(likert(0));
        let out = s.next();

        assert_eq!(out.reason, ReasonCode::R103_SESSION_COMPLETE);
        assert_eq!(s.state(), SessionState::Completed);
        let env = out.envelope.unwrap();
        assert_eq!(env.stage1_signal, Stage1Signal::High);
        assert_eq!(env.top3[0].trait_id, TraitId::Owner);
        assert_eq!(env.top3[0].percent, 50);
        assert_eq!(s.result(), Some(env));
    }

    #[test]
    fn test_actions_outside_state_are_refused() {
        let mut s = consented();
        assert_eq!(s.start_stage2().reason, ReasonCode::R104_ACTION_NOT_AVAILABLE);
        assert_eq!(s.retake_stage1().reason, ReasonCode::R104_ACTION_NOT_AVAILABLE);
        assert_eq!(s.accept_consent(true, true).reason, ReasonCode::R104_ACTION_NOT_AVAILABLE);
    }

    #[test]
    fn test_clear_result_restarts() {
        let mut s = consented();
        for _ in 0..2 {
            s.answer(likert(1));
            s.next();
        }
        s.start_stage2();
        for _ in 0..2 {
            s.answer(likert(1));
            s.next();
        }
        assert!(s.result().is_some());

        let out = s.clear_result();
        assert_eq!(out.reason, ReasonCode::R104_SESSION_RESET);
        assert_eq!(s.state(), SessionState::Stage1);
        assert!(s.result().is_none());
        assert!(s.stage1_answers().is_empty());
    }
}
