//! DashMap Location Store
//!
//! Implements LocationStore using DashMap for lock-free concurrent access.

use crate::domain::ports::{LocationStore, SessionId};
use crate::domain::value_objects::GeoPoint;
use crate::infrastructure::ShutdownController;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

/// A stored location and when it was last written.
#[derive(Debug, Clone, Copy)]
pub struct StoredLocation {
    pub point: GeoPoint,
    pub updated_at: Instant,
}

/// DashMap-backed location store.
///
/// Supports periodic garbage collection of sessions that have not
/// reported a location within the TTL.
pub struct DashMapLocationStore {
    locations: Arc<DashMap<SessionId, StoredLocation>>,
}

impl DashMapLocationStore {
    /// Create a new store.
    pub fn new() -> Self {
        Self {
            locations: Arc::new(DashMap::new()),
        }
    }

    /// Start the background garbage collection task.
    ///
    /// Removes sessions whose location is older than the TTL. The task
    /// exits when `shutdown` is triggered.
    pub fn start_gc(
        &self,
        ttl: Duration,
        interval: Duration,
        shutdown: ShutdownController,
    ) -> JoinHandle<()> {
        let locations = self.locations.clone();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = tokio::time::sleep(interval) => {
                        let removed = Self::evict_older_than(&locations, ttl);
                        if removed > 0 {
                            tracing::debug!("location GC removed {} stale sessions", removed);
                        }
                    }
                    _ = shutdown.cancelled() => {
                        tracing::debug!("location GC stopped");
                        break;
                    }
                }
            }
        })
    }

    /// Remove sessions not updated within `ttl`. Returns how many were removed.
    pub fn cleanup_expired(&self, ttl: Duration) -> usize {
        Self::evict_older_than(&self.locations, ttl)
    }

    fn evict_older_than(locations: &DashMap<SessionId, StoredLocation>, ttl: Duration) -> usize {
        let now = Instant::now();
        let before = locations.len();
        locations.retain(|_, stored| now.duration_since(stored.updated_at) <= ttl);
        before.saturating_sub(locations.len())
    }
}

impl Default for DashMapLocationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LocationStore for DashMapLocationStore {
    async fn get(&self, session: &str) -> Option<GeoPoint> {
        self.locations.get(session).map(|e| e.value().point)
    }

    async fn set(&self, session: SessionId, point: GeoPoint) {
        self.locations.insert(
            session,
            StoredLocation {
                point,
                updated_at: Instant::now(),
            },
        );
    }

    async fn remove(&self, session: &str) {
        self.locations.remove(session);
    }

    async fn sessions(&self) -> Vec<SessionId> {
        self.locations.iter().map(|e| e.key().clone()).collect()
    }

    async fn count(&self) -> usize {
        self.locations.len()
    }
}
