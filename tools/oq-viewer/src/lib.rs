//! OQ-Viewer: OntoQA question console
//!
//! A TUI front end that sends questions to the OntoQA service and draws the
//! syntax tree of the answer.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  OQ-VIEWER  http://localhost:8080/qa        Answered 12:03:44   │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  QUESTION  > Who won the World Cup 1930?_                       │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ANSWER / TREE (Tab toggles)                                    │
//! │                         S                                       │
//! │                  ┌──────┴──────┐                                │
//! │                 DP:1          VP:1                              │
//! └─────────────────────────────────────────────────────────────────┘
//! │  [Enter] Ask   [Tab] Tree   [F1] Help   [Esc] Quit              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Requests run on their own tasks and report back over a channel; the UI
//! loop is the only writer of [`App`].

pub mod ask;
pub mod domain;
pub mod telemetry;
pub mod ui;

pub use domain::{App, Screen};
