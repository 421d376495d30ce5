//! Adapters Layer
//!
//! Inbound adapters drive the application (HTTP API); outbound adapters
//! implement the domain ports (storage, reference data).

pub mod inbound;
pub mod outbound;
