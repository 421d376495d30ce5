//! SenAlert - department resolution service
//!
//! This is the composition root that wires together all the components.

use senalert::adapters::inbound::{ApiServer, ApiState};
use senalert::adapters::outbound::{
    load_units_from_file, DashMapLocationStore, SqliteReportRepository,
};
use senalert::application::{DepartmentTracker, ReportService, TrackerConfig};
use senalert::config::load_config;
use senalert::domain::departments::senegal_departments;
use senalert::domain::ports::{GeoResolver, LocationStore};
use senalert::domain::services::DepartmentResolver;
use senalert::infrastructure::{shutdown_signal, ShutdownController};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let cfg = load_config()?;

    // Setup logging
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_span_events(FmtSpan::CLOSE)
        .init();

    tracing::info!("starting SenAlert listen={}", cfg.listen_addr);

    // ===== COMPOSITION ROOT =====

    // 1. Reference table and resolver
    let units = match &cfg.departments_path {
        Some(path) => load_units_from_file(path)?,
        None => senegal_departments(),
    };
    let resolver = DepartmentResolver::new(units, cfg.resolver_settings())?;
    let resolver: Arc<dyn GeoResolver> = Arc::new(resolver);

    // Stops the server and every background task
    let shutdown = ShutdownController::new();

    // 2. Outbound adapters

    // Device locations (DashMap)
    let location_store = Arc::new(DashMapLocationStore::new());
    let gc = location_store.start_gc(
        Duration::from_secs(cfg.session_ttl_secs),
        Duration::from_secs(cfg.session_gc_interval_secs),
        shutdown.clone(),
    );
    let locations: Arc<dyn LocationStore> = location_store;

    // Reports (SQLite)
    let report_repo = Arc::new(SqliteReportRepository::open(&cfg.db_path)?);
    tracing::info!("report database at {}", cfg.db_path);

    // 3. Application services
    let tracker = Arc::new(DepartmentTracker::new(
        resolver.clone(),
        locations.clone(),
        TrackerConfig {
            default_department: cfg.default_department.clone(),
            cache_precision: cfg.cache_precision,
            cache_capacity: cfg.cache_capacity,
        },
    ));
    let poller = tracker.start_polling(
        Duration::from_secs(cfg.poll_interval_secs),
        shutdown.clone(),
    );

    let reports = Arc::new(ReportService::new(report_repo, resolver.clone()));

    // 4. Inbound adapter
    tokio::spawn(shutdown_signal(shutdown.clone()));

    let state = ApiState::new(resolver, locations, tracker, reports);
    let server = ApiServer::new(cfg.listen_addr, state);

    let result = server.run(shutdown.clone()).await;

    // Server errors still stop the background tasks
    shutdown.shutdown();
    if let Err(e) = poller.await {
        tracing::warn!("department poller ended abnormally: {}", e);
    }
    if let Err(e) = gc.await {
        tracing::warn!("location GC ended abnormally: {}", e);
    }

    result
}
