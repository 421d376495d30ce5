//! SenAlert Library
//!
//! Resolves GPS coordinates to Senegalese departments and exposes the
//! incident reporting use cases built on top of that resolution.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use application::{DepartmentTracker, DepartmentView, ReportService};
pub use config::load_config;
pub use domain::entities::{AdministrativeUnit, Report};
pub use domain::error::ResolveError;
pub use domain::ports::{GeoResolver, LocationStore, ReportRepository};
pub use domain::services::{haversine_km, DepartmentResolver, MetroOverride, ResolverSettings};
pub use domain::value_objects::{GeoPoint, ReportStatus, ResolvedDepartment, UNKNOWN_LOCATION};
