//! Application Layer
//!
//! Use cases orchestrating the domain through its ports.

mod department_tracker;
mod report_service;

pub use department_tracker::{
    DepartmentTracker, DepartmentView, TrackerConfig, DEFAULT_CACHE_CAPACITY, MAX_CACHE_PRECISION,
};
pub use report_service::{
    generate_access_code, NewReport, ReportError, ReportFilter, ReportService,
    DEFAULT_RECENT_LIMIT, MAX_CODE_ATTEMPTS,
};
