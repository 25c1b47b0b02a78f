//! Domain module - viewer state.

mod app;

pub use app::{App, Screen};
