//! Core types for traitscope

mod trait_id;
mod answers;
mod question;
mod score;
mod envelope;
mod state;
mod reason;
mod output;

pub use trait_id::TraitId;
pub use answers::{Likert, AnswerMap};
pub use question::{Stage, Contribution, Question};
pub use score::{Stage1Signal, TraitScore, Stage1Preview};
pub use envelope::{ResultEnvelope, EnvelopeResult, EnvelopeReason};
pub use state::SessionState;
pub use reason::ReasonCode;
pub use output::StepOutput;
