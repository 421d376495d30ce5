//! Domain Entities - Core business objects
//!
//! These entities represent the core concepts of the SenAlert domain.
//! They have no external dependencies and contain only business logic.

use crate::domain::value_objects::{AccessCode, GeoPoint, ReportStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named administrative unit (department) with its reference point.
///
/// Units are loaded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdministrativeUnit {
    /// Department name, unique within a table
    pub name: String,
    /// Reference point (chef-lieu)
    pub location: GeoPoint,
}

impl AdministrativeUnit {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            location: GeoPoint::new(latitude, longitude),
        }
    }
}

/// An incident report submitted by a citizen.
///
/// `department` is stamped once at submission time and never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: Uuid,
    /// Incident category chosen by the reporter
    pub kind: String,
    pub description: String,
    pub location: GeoPoint,
    pub department: String,
    pub address: String,
    pub status: ReportStatus,
    /// Code the reporter uses to follow up
    pub access_code: AccessCode,
    pub reporter_name: Option<String>,
    pub reporter_phone: Option<String>,
    /// Opaque link to an attached photo or recording
    pub media_url: Option<String>,
    /// Administrator handling the report, if any
    #[serde(default)]
    pub assigned_to: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Report {
    /// Whether the report is assigned to exactly `assignee`.
    pub fn is_assigned_to(&self, assignee: &str) -> bool {
        self.assigned_to.as_deref() == Some(assignee)
    }

    /// Case-insensitive containment match on the stored department.
    pub fn matches_department(&self, department: &str) -> bool {
        self.department
            .to_lowercase()
            .contains(&department.to_lowercase())
    }
}

/// Report totals by lifecycle status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

impl StatusCounts {
    /// Count one report with `status`.
    pub fn record(&mut self, status: ReportStatus) {
        self.total += 1;
        match status {
            ReportStatus::Pending => self.pending += 1,
            ReportStatus::InProgress => self.in_progress += 1,
            ReportStatus::Resolved => self.resolved += 1,
        }
    }
}

/// Number of reports attributed to one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentCount {
    pub department: String,
    pub count: usize,
}
