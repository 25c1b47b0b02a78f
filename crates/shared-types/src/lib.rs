//! # Shared Types Crate
//!
//! This crate contains the entities exchanged between the request client
//! (`oq-01`) and the tree renderer (`oq-02`).
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `AnswerPayload` and `TreeNode` are defined
//!   here and nowhere else.
//! - **Validated On Receipt**: values of these types only exist after the
//!   client has checked the server response against its schema. Nothing
//!   downstream has to deal with half-formed payloads.
//! - **Immutable Trees**: a `TreeNode` is never mutated after it is built;
//!   layouts are derived from it, not stored in it.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
