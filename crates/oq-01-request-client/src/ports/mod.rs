//! Ports Layer - Trait definitions for hexagonal architecture
//!
//! - `inbound`: What the question flow offers (Driving Ports)
//! - `outbound`: What it needs from the network (Driven Ports)

pub mod inbound;
pub mod outbound;

pub use inbound::QuestionApi;
pub use outbound::{QaTransport, RawResponse};
