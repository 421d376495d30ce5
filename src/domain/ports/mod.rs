mod geo_resolver;
mod location_store;
mod report_repository;

pub use geo_resolver::GeoResolver;
pub use location_store::{LocationStore, SessionId};
pub use report_repository::ReportRepository;
