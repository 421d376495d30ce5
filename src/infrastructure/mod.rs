//! Infrastructure Layer
//!
//! Cross-cutting concerns shared by the servers and background tasks.

pub mod shutdown;

pub use shutdown::{shutdown_signal, ShutdownController};
