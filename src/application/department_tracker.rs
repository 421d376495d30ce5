//! Department Tracker - periodic location poller
//!
//! Owns the "last known department" of every session. On each tick it
//! re-reads the stored device location, resolves it and records the
//! result. The resolver itself stays stateless.

use crate::domain::ports::{GeoResolver, LocationStore};
use crate::domain::value_objects::{GeoPoint, ResolvedDepartment};
use crate::infrastructure::ShutdownController;
use dashmap::DashMap;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// What a session currently displays as its department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "department", rename_all = "snake_case")]
pub enum DepartmentView {
    /// Resolved from the stored location
    Resolved(ResolvedDepartment),
    /// No location known yet; showing the default department
    Default(String),
    /// The stored location could not be resolved
    Unavailable,
}

impl DepartmentView {
    /// Name to display, or None when the location is unavailable.
    pub fn display_name(&self) -> Option<&str> {
        match self {
            Self::Resolved(resolved) => Some(resolved.name()),
            Self::Default(name) => Some(name),
            Self::Unavailable => None,
        }
    }
}

/// Largest usable cache precision. Beyond this the grid key overflows i64
/// for real latitudes and every point would share one key.
pub const MAX_CACHE_PRECISION: u32 = 9;

/// Default number of cached resolutions kept before the cache is reset.
pub const DEFAULT_CACHE_CAPACITY: usize = 10_000;

/// Tracker settings.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Department shown when a session has no location
    pub default_department: String,
    /// Decimal places used to key the resolution cache
    pub cache_precision: u32,
    /// Maximum cached resolutions; 0 disables the cache
    pub cache_capacity: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            default_department: "Dakar".to_string(),
            cache_precision: 3,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

/// Per-session department state, refreshed from the location store.
pub struct DepartmentTracker {
    resolver: Arc<dyn GeoResolver>,
    locations: Arc<dyn LocationStore>,
    config: TrackerConfig,
    views: DashMap<String, DepartmentView>,
    cache: DashMap<(i64, i64), ResolvedDepartment>,
}

impl DepartmentTracker {
    pub fn new(
        resolver: Arc<dyn GeoResolver>,
        locations: Arc<dyn LocationStore>,
        mut config: TrackerConfig,
    ) -> Self {
        if config.cache_precision > MAX_CACHE_PRECISION {
            tracing::warn!(
                "cache precision {} too large, using {}",
                config.cache_precision,
                MAX_CACHE_PRECISION
            );
            config.cache_precision = MAX_CACHE_PRECISION;
        }

        Self {
            resolver,
            locations,
            config,
            views: DashMap::new(),
            cache: DashMap::new(),
        }
    }

    /// Re-derive one session's department from its stored location.
    pub async fn refresh_session(&self, session: &str) -> DepartmentView {
        let view = match self.locations.get(session).await {
            None => DepartmentView::Default(self.config.default_department.clone()),
            Some(point) => match self.resolve_cached(point) {
                Some(resolved) => DepartmentView::Resolved(resolved),
                None => {
                    tracing::warn!("session {} has an unusable location {}", session, point);
                    DepartmentView::Unavailable
                }
            },
        };

        self.views.insert(session.to_string(), view.clone());
        view
    }

    /// Refresh every session that has a stored location.
    ///
    /// Returns the number of sessions refreshed.
    pub async fn refresh_all(&self) -> usize {
        let sessions = self.locations.sessions().await;
        for session in &sessions {
            self.refresh_session(session).await;
        }

        // Drop views for sessions whose location has gone away
        if self.views.len() > sessions.len() {
            self.views.retain(|key, _| sessions.contains(key));
        }

        sessions.len()
    }

    /// Last known view for a session.
    ///
    /// Sessions never refreshed get the default department.
    pub fn department_for(&self, session: &str) -> DepartmentView {
        self.views
            .get(session)
            .map(|v| v.value().clone())
            .unwrap_or_else(|| DepartmentView::Default(self.config.default_department.clone()))
    }

    /// Forget everything about a session.
    pub async fn forget(&self, session: &str) {
        self.locations.remove(session).await;
        self.views.remove(session);
    }

    /// Number of sessions with a recorded view.
    pub fn tracked_sessions(&self) -> usize {
        self.views.len()
    }

    /// Number of cached resolutions.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Start the background polling task.
    ///
    /// The task exits when `shutdown` is triggered.
    pub fn start_polling(
        self: &Arc<Self>,
        interval: Duration,
        shutdown: ShutdownController,
    ) -> JoinHandle<()> {
        let tracker = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let refreshed = tracker.refresh_all().await;
                        tracing::trace!("department poll refreshed {} sessions", refreshed);
                    }
                    _ = shutdown.cancelled() => {
                        tracing::debug!("department polling stopped");
                        break;
                    }
                }
            }
        })
    }

    fn remember(&self, key: (i64, i64), resolved: ResolvedDepartment) {
        let capacity = self.config.cache_capacity;
        if capacity == 0 {
            return;
        }
        if self.cache.len() >= capacity && !self.cache.contains_key(&key) {
            tracing::debug!("resolution cache full ({} entries), resetting", capacity);
            self.cache.clear();
        }
        self.cache.insert(key, resolved);
    }

    fn resolve_cached(&self, point: GeoPoint) -> Option<ResolvedDepartment> {
        if !point.is_finite() {
            return None;
        }

        let key = point.grid_key(self.config.cache_precision);
        if let Some(hit) = self.cache.get(&key) {
            return Some(hit.value().clone());
        }

        match self.resolver.resolve_point(point) {
            Ok(resolved) => {
                self.remember(key, resolved.clone());
                Some(resolved)
            }
            Err(e) => {
                tracing::warn!("department resolution failed: {}", e);
                None
            }
        }
    }
}
