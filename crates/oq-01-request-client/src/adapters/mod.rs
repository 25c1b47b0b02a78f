//! Adapters Layer - Concrete transports
//!
//! - `HttpTransport`: reqwest against a live QA service
//! - `CannedTransport`: fixed response, used by the viewer's demo mode

pub mod canned;
pub mod http_transport;

pub use canned::CannedTransport;
pub use http_transport::HttpTransport;
