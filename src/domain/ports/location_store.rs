//! Location Store Port
//!
//! Holds the last known device coordinate per session.

use crate::domain::value_objects::GeoPoint;
use async_trait::async_trait;

/// Opaque identifier of a device session.
pub type SessionId = String;

/// Store for the last known location of each session.
///
/// The store only holds coordinates; it never resolves them.
#[async_trait]
pub trait LocationStore: Send + Sync {
    /// Last stored location for a session, if any.
    async fn get(&self, session: &str) -> Option<GeoPoint>;

    /// Record the latest location for a session.
    async fn set(&self, session: SessionId, point: GeoPoint);

    /// Forget a session's location.
    async fn remove(&self, session: &str);

    /// All sessions with a stored location.
    async fn sessions(&self) -> Vec<SessionId>;

    /// Number of sessions with a stored location.
    async fn count(&self) -> usize;
}
