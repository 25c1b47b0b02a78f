//! # OntoQA Viewer Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── src/
//! │   ├── fixtures.rs      # Tree and response builders shared by tests and benches
//! │   └── integration/     # Request client + answer state + renderer together
//! └── benches/
//!     └── layout_benchmarks.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p oq-tests
//!
//! # Benchmarks
//! cargo bench -p oq-tests
//! ```

pub mod fixtures;
pub mod integration;
