//! Ports Layer - Trait definitions
//!
//! - `inbound`: API offered to the front end (driving port)
//! - `outbound`: drawing target the renderer writes to (driven port)

pub mod inbound;
pub mod outbound;

pub use inbound::TreeRendererApi;
pub use outbound::{DrawCommand, DrawSurface, EdgeCommand, NodeCommand, NodeKind};
