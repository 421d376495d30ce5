//! Report Service - incident submission and follow-up
//!
//! Stamps every new report with its department, hands out access codes,
//! and answers the dashboard's department-level queries.

use crate::domain::entities::{DepartmentCount, Report, StatusCounts};
use crate::domain::ports::{GeoResolver, ReportRepository};
use crate::domain::value_objects::{
    AccessCode, AccessCodeError, GeoPoint, ReportStatus, UNKNOWN_DEPARTMENT, UNKNOWN_LOCATION,
};
use chrono::Utc;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Attempts at drawing an unused access code before giving up.
pub const MAX_CODE_ATTEMPTS: usize = 100;

/// Default number of incidents returned by `recent_for_department`.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// A report as submitted by a citizen.
#[derive(Debug, Clone, Deserialize)]
pub struct NewReport {
    pub kind: String,
    #[serde(default)]
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub reporter_name: Option<String>,
    #[serde(default)]
    pub reporter_phone: Option<String>,
    #[serde(default)]
    pub media_url: Option<String>,
}

/// Filters of the incident list. Empty filters match everything.
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    /// Case-insensitive substring of the department
    pub department: Option<String>,
    /// Exact assignee
    pub assigned_to: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("invalid coordinate ({latitude}, {longitude})")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("invalid access code: {0}")]
    InvalidAccessCode(#[from] AccessCodeError),

    #[error("report not found: {0}")]
    NotFound(String),

    #[error("could not allocate a unique access code")]
    CodeExhausted,

    #[error("storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

/// Report use cases.
pub struct ReportService {
    repo: Arc<dyn ReportRepository>,
    resolver: Arc<dyn GeoResolver>,
}

impl ReportService {
    pub fn new(repo: Arc<dyn ReportRepository>, resolver: Arc<dyn GeoResolver>) -> Self {
        Self { repo, resolver }
    }

    /// Submit a new report.
    ///
    /// The department is resolved once from the report's coordinate and
    /// stored with it. The returned report carries the access code the
    /// reporter needs to follow up.
    pub async fn submit(&self, new: NewReport) -> Result<Report, ReportError> {
        let location = GeoPoint::new(new.latitude, new.longitude);
        let department = self
            .resolver
            .resolve_point(location)
            .map_err(|_| ReportError::InvalidCoordinate {
                latitude: new.latitude,
                longitude: new.longitude,
            })?;

        let access_code = self.allocate_code().await?;
        let now = Utc::now();

        let report = Report {
            id: Uuid::new_v4(),
            kind: new.kind,
            description: new.description,
            location,
            department: department.name().to_string(),
            address: new.address,
            status: ReportStatus::Pending,
            access_code,
            reporter_name: new.reporter_name.filter(|s| !s.trim().is_empty()),
            reporter_phone: new.reporter_phone.filter(|s| !s.trim().is_empty()),
            media_url: new.media_url,
            assigned_to: None,
            created_at: now,
            updated_at: now,
        };

        self.repo.insert(&report).await?;

        tracing::info!(
            "report {} submitted in {} (code {})",
            report.id,
            report.department,
            report.access_code
        );

        Ok(report)
    }

    /// Look a report up by the code handed out at submission.
    pub async fn track(&self, raw_code: &str) -> Result<Report, ReportError> {
        let code = AccessCode::parse(raw_code)?;
        self.repo
            .get_by_access_code(code.as_str())
            .await?
            .ok_or_else(|| ReportError::NotFound(code.to_string()))
    }

    /// Move a report to a new status.
    pub async fn update_status(&self, id: Uuid, status: ReportStatus) -> Result<Report, ReportError> {
        if !self.repo.update_status(id, status).await? {
            return Err(ReportError::NotFound(id.to_string()));
        }

        tracing::info!("report {} is now {}", id, status);

        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| ReportError::NotFound(id.to_string()))
    }

    /// Hand a report to an administrator, or clear the assignment with
    /// `None` (a blank name also clears it).
    pub async fn assign(&self, id: Uuid, assignee: Option<&str>) -> Result<Report, ReportError> {
        let assignee = assignee
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string);

        if !self.repo.assign(id, assignee.clone()).await? {
            return Err(ReportError::NotFound(id.to_string()));
        }

        match &assignee {
            Some(a) => tracing::info!("report {} assigned to {}", id, a),
            None => tracing::info!("report {} unassigned", id),
        }

        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| ReportError::NotFound(id.to_string()))
    }

    /// Newest reports whose department contains `department`.
    ///
    /// An empty filter, or the unknown-location sentinel, returns the
    /// newest reports from everywhere.
    pub async fn recent_for_department(
        &self,
        department: Option<&str>,
        limit: usize,
    ) -> Result<Vec<Report>, ReportError> {
        self.list(&ReportFilter {
            department: department.map(str::to_string),
            assigned_to: None,
            limit: Some(limit),
        })
        .await
    }

    /// Reports assigned to `assignee`, newest first.
    pub async fn assigned_to(&self, assignee: &str) -> Result<Vec<Report>, ReportError> {
        self.list(&ReportFilter {
            assigned_to: Some(assignee.to_string()),
            ..ReportFilter::default()
        })
        .await
    }

    /// Newest reports matching every filter in `filter`.
    ///
    /// The department filter follows `recent_for_department`. Without a
    /// limit every match is returned.
    pub async fn list(&self, filter: &ReportFilter) -> Result<Vec<Report>, ReportError> {
        let department = filter
            .department
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty() && *d != UNKNOWN_LOCATION);
        let assignee = filter
            .assigned_to
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty());

        let reports = self.repo.list_recent().await?;
        Ok(reports
            .into_iter()
            .filter(|r| department.map_or(true, |d| r.matches_department(d)))
            .filter(|r| assignee.map_or(true, |a| r.is_assigned_to(a)))
            .take(filter.limit.unwrap_or(usize::MAX))
            .collect())
    }

    /// Totals per lifecycle status.
    pub async fn statistics_by_status(&self) -> Result<StatusCounts, ReportError> {
        let reports = self.repo.list_recent().await?;
        let mut counts = StatusCounts::default();
        for report in &reports {
            counts.record(report.status);
        }
        Ok(counts)
    }

    /// Number of reports per department, most reported first.
    ///
    /// Each report counts under the department its coordinate resolves to
    /// today, falling back to the stored department, then to
    /// "Département inconnu".
    pub async fn statistics_by_department(&self) -> Result<Vec<DepartmentCount>, ReportError> {
        let reports = self.repo.list_recent().await?;

        let mut counts: HashMap<String, usize> = HashMap::new();
        for report in &reports {
            let name = match self.resolver.resolve_point(report.location) {
                Ok(resolved) => resolved.name().to_string(),
                Err(_) if !report.department.trim().is_empty() => report.department.clone(),
                Err(_) => UNKNOWN_DEPARTMENT.to_string(),
            };
            *counts.entry(name).or_insert(0) += 1;
        }

        let mut stats: Vec<DepartmentCount> = counts
            .into_iter()
            .map(|(department, count)| DepartmentCount { department, count })
            .collect();
        stats.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.department.cmp(&b.department)));

        Ok(stats)
    }

    pub async fn count(&self) -> Result<usize, ReportError> {
        Ok(self.repo.count().await?)
    }

    async fn allocate_code(&self) -> Result<AccessCode, ReportError> {
        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = generate_access_code();
            if !self.repo.access_code_exists(code.as_str()).await? {
                return Ok(code);
            }
        }

        tracing::error!(
            "no free access code after {} attempts",
            MAX_CODE_ATTEMPTS
        );
        Err(ReportError::CodeExhausted)
    }
}

/// Draw a random access code.
pub fn generate_access_code() -> AccessCode {
    AccessCode::generate(&mut rand::thread_rng())
}
