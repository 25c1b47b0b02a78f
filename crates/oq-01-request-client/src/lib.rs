//! # OQ-01 Request Client
//!
//! Sends a natural-language question to the OntoQA service and keeps the
//! latest answer for the renderer.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): No I/O
//!   - `ClientConfig`: endpoint and timeout, from env or builder
//!   - `decode_answer`: validate-on-receipt of the response body
//!   - `AppState`: the answer slot, guarded by request tickets
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `QuestionApi`: Driving port (inbound API)
//!   - `QaTransport`: Driven port (the network)
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `QuestionService`: Implements `QuestionApi`
//!
//! - **Adapters Layer** (`adapters/`): Concrete transports
//!   - `HttpTransport`: reqwest
//!   - `CannedTransport`: offline demo answers
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: One `submit_question` call sends exactly one request.
//! - **INVARIANT-2**: A failed request never touches the stored answer.
//! - **INVARIANT-3**: A response to an older request never replaces the
//!   answer to a newer one.
//! - **INVARIANT-4**: Bodies that do not match the schema are rejected as
//!   `MalformedResponse`, never half-applied.
//!
//! ## Usage Example
//!
//! ```ignore
//! use oq_01_request_client::{AppState, ClientConfig, HttpTransport, QuestionApi, QuestionService};
//!
//! let service = QuestionService::new(HttpTransport::new(&ClientConfig::from_env())?);
//! let mut state = AppState::new();
//!
//! let ticket = state.begin_request("Who won the World Cup 1930?");
//! let result = service.submit_question(ticket.question()).await;
//! state.complete(ticket, result);
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use adapters::{CannedTransport, HttpTransport};
pub use domain::{
    decode_answer, AppState, ClientConfig, ClientConfigBuilder, Completion, Notice, NoticeLevel,
    QuestionRequest, RequestTicket,
};
pub use error::ClientError;
pub use ports::{QaTransport, QuestionApi, RawResponse};
pub use service::QuestionService;
