mod dashmap_location_store;
mod json_unit_loader;
mod sqlite_report_repo;

pub use dashmap_location_store::DashMapLocationStore;
pub use json_unit_loader::load_units_from_file;
pub use sqlite_report_repo::SqliteReportRepository;
