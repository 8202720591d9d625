//! Core modules for traitscope

pub mod taxonomy;
pub mod question_bank;
pub mod scoring;
pub mod envelope;
pub mod store;
pub mod session;
pub mod api;

pub use taxonomy::{TraitMeta, TraitDisplay, TRAITS};
pub use scoring::{aggregate, classify_stage1, select_top, select_top_k, preview_stage1};
pub use envelope::{EnvelopeGenerator, decode_envelope};
pub use store::{SlotStorage, StorageError, MemoryStorage, UnavailableStorage, ResultStore};
pub use session::QuestionnaireSession;
pub use api::{create_router, run_server};
