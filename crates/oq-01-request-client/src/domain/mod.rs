//! Domain layer: configuration, wire schema and answer state.

pub mod config;
pub mod state;
pub mod wire;

pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_ENDPOINT, DEFAULT_QA_PATH};
pub use state::{AppState, Completion, Notice, NoticeLevel, RequestTicket, MAX_NOTICES};
pub use wire::{decode_answer, QuestionRequest};
