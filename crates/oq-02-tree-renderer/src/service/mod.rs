//! Service Layer - Orchestration

pub mod renderer;

pub use renderer::TreeRenderer;
