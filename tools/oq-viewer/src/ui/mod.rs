//! UI module - TUI rendering components.
//!
//! - `layout.rs`: Main layout orchestration
//! - `answer_panel.rs`: Answer text, query and notices
//! - `tree_canvas.rs`: Draw surface backed by a braille canvas
//! - `widgets/`: Reusable UI components

mod answer_panel;
mod layout;

pub mod tree_canvas;
pub mod widgets;

pub use layout::render;
