//! Report Repository Port
//!
//! Defines the interface for persisting incident reports.

use crate::domain::entities::Report;
use crate::domain::value_objects::ReportStatus;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository for incident reports.
///
/// Implementations may use SQLite, PostgreSQL, or in-memory storage.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Persist a new report.
    async fn insert(&self, report: &Report) -> anyhow::Result<()>;

    /// Get a report by ID.
    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Report>>;

    /// Get a report by its access code.
    async fn get_by_access_code(&self, code: &str) -> anyhow::Result<Option<Report>>;

    /// Whether an access code is already taken.
    async fn access_code_exists(&self, code: &str) -> anyhow::Result<bool>;

    /// All reports, newest first.
    async fn list_recent(&self) -> anyhow::Result<Vec<Report>>;

    /// Update a report's status. Returns false if the report does not exist.
    async fn update_status(&self, id: Uuid, status: ReportStatus) -> anyhow::Result<bool>;

    /// Set or clear a report's assignee. Returns false if the report does not exist.
    async fn assign(&self, id: Uuid, assignee: Option<String>) -> anyhow::Result<bool>;

    /// Total number of stored reports.
    async fn count(&self) -> anyhow::Result<usize>;
}
