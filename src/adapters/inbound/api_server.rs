//! SenAlert HTTP API
//!
//! JSON endpoints over the department resolver, the session tracker and
//! the report service.

use crate::application::{
    DepartmentTracker, DepartmentView, NewReport, ReportError, ReportFilter, ReportService,
    DEFAULT_RECENT_LIMIT,
};
use crate::domain::entities::{DepartmentCount, Report, StatusCounts};
use crate::domain::error::ResolveError;
use crate::domain::ports::{GeoResolver, LocationStore};
use crate::domain::value_objects::{GeoPoint, ReportStatus, ResolvedDepartment};
use crate::infrastructure::ShutdownController;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

/// Query string of `/api/v1/resolve`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResolveQuery {
    pub lat: f64,
    pub lng: f64,
}

/// Resolution response.
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub department: ResolvedDepartment,
    pub unknown: bool,
}

/// One reference unit.
#[derive(Debug, Serialize)]
pub struct DepartmentEntry {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// List of reference units.
#[derive(Debug, Serialize)]
pub struct DepartmentsResponse {
    pub departments: Vec<DepartmentEntry>,
    pub total: usize,
}

/// A session's current department.
#[derive(Debug, Serialize)]
pub struct SessionDepartmentResponse {
    pub session: String,
    #[serde(flatten)]
    pub view: DepartmentView,
}

/// Location update body.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationUpdate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Filters of the incident list.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportsQuery {
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    /// Defaults to 5, or to no limit when filtering by assignee
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Incident list response.
#[derive(Debug, Serialize)]
pub struct ReportsResponse {
    pub reports: Vec<Report>,
    pub total: usize,
}

/// Status update body.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusUpdate {
    pub status: ReportStatus,
}

/// Assignment body; a missing or null assignee clears the assignment.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignmentUpdate {
    #[serde(default)]
    pub assigned_to: Option<String>,
}

/// Per-department statistics response.
#[derive(Debug, Serialize)]
pub struct StatisticsResponse {
    pub departments: Vec<DepartmentCount>,
    pub total_reports: usize,
}

/// Health response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub reference_units: usize,
    pub tracked_sessions: usize,
    /// None when the report store is unreachable
    pub reports: Option<usize>,
}

/// Error returned by handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Resolve(ResolveError::InvalidCoordinate { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Resolve(ResolveError::Configuration(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Report(ReportError::InvalidCoordinate { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Report(ReportError::InvalidAccessCode(_)) => StatusCode::BAD_REQUEST,
            ApiError::Report(ReportError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Report(ReportError::CodeExhausted) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Report(ReportError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        }

        (
            status,
            Json(serde_json::json!({
                "error": self.to_string()
            })),
        )
            .into_response()
    }
}

/// API Server state.
#[derive(Clone)]
pub struct ApiState {
    pub resolver: Arc<dyn GeoResolver>,
    pub locations: Arc<dyn LocationStore>,
    pub tracker: Arc<DepartmentTracker>,
    pub reports: Arc<ReportService>,
}

impl ApiState {
    pub fn new(
        resolver: Arc<dyn GeoResolver>,
        locations: Arc<dyn LocationStore>,
        tracker: Arc<DepartmentTracker>,
        reports: Arc<ReportService>,
    ) -> Self {
        Self {
            resolver,
            locations,
            tracker,
            reports,
        }
    }
}

/// Build the API router.
pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/departments", get(departments_handler))
        .route("/api/v1/resolve", get(resolve_handler))
        .route("/api/v1/sessions/:id/location", put(update_location_handler))
        .route("/api/v1/sessions/:id/department", get(session_department_handler))
        .route("/api/v1/sessions/:id", axum::routing::delete(forget_session_handler))
        .route(
            "/api/v1/reports",
            get(list_reports_handler).post(submit_report_handler),
        )
        .route("/api/v1/reports/track/:code", get(track_report_handler))
        .route("/api/v1/reports/:id/status", put(update_status_handler))
        .route("/api/v1/reports/:id/assignee", put(assign_handler))
        .route("/api/v1/statistics/departments", get(statistics_handler))
        .route("/api/v1/statistics/status", get(status_statistics_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// HTTP server for the SenAlert API.
pub struct ApiServer {
    listen_addr: String,
    state: ApiState,
}

impl ApiServer {
    pub fn new(listen_addr: String, state: ApiState) -> Self {
        Self { listen_addr, state }
    }

    /// Serve until `shutdown` is triggered, then drain in-flight requests.
    #[cfg_attr(coverage_nightly, coverage(off))]
    pub async fn run(&self, shutdown: ShutdownController) -> anyhow::Result<()> {
        let app = router(self.state.clone());

        let listener = TcpListener::bind(&self.listen_addr).await?;
        tracing::info!("SenAlert API listening on {}", self.listen_addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .await?;

        tracing::info!("SenAlert API stopped");
        Ok(())
    }
}

// Handler functions

async fn health_handler(State(state): State<ApiState>) -> impl IntoResponse {
    let reports = match state.reports.count().await {
        Ok(count) => Some(count),
        Err(e) => {
            tracing::warn!("health check could not count reports: {}", e);
            None
        }
    };

    Json(HealthResponse {
        status: if reports.is_some() { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        reference_units: state.resolver.units().len(),
        tracked_sessions: state.tracker.tracked_sessions(),
        reports,
    })
}

async fn departments_handler(State(state): State<ApiState>) -> impl IntoResponse {
    let departments: Vec<DepartmentEntry> = state
        .resolver
        .units()
        .iter()
        .map(|u| DepartmentEntry {
            name: u.name.clone(),
            latitude: u.location.latitude,
            longitude: u.location.longitude,
        })
        .collect();
    let total = departments.len();
    Json(DepartmentsResponse { departments, total })
}

async fn resolve_handler(
    State(state): State<ApiState>,
    Query(q): Query<ResolveQuery>,
) -> Result<Json<ResolveResponse>, ApiError> {
    let department = state.resolver.resolve(q.lat, q.lng)?;
    Ok(Json(ResolveResponse {
        latitude: q.lat,
        longitude: q.lng,
        unknown: department.is_unknown(),
        department,
    }))
}

async fn update_location_handler(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Json(update): Json<LocationUpdate>,
) -> impl IntoResponse {
    state
        .locations
        .set(id.clone(), GeoPoint::new(update.latitude, update.longitude))
        .await;
    let view = state.tracker.refresh_session(&id).await;

    tracing::debug!("session {} moved, department {:?}", id, view.display_name());

    Json(SessionDepartmentResponse { session: id, view })
}

async fn session_department_handler(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let view = state.tracker.department_for(&id);
    Json(SessionDepartmentResponse { session: id, view })
}

async fn forget_session_handler(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    state.tracker.forget(&id).await;
    StatusCode::NO_CONTENT
}

async fn submit_report_handler(
    State(state): State<ApiState>,
    Json(new): Json<NewReport>,
) -> Result<(StatusCode, Json<Report>), ApiError> {
    let report = state.reports.submit(new).await?;
    Ok((StatusCode::CREATED, Json(report)))
}

async fn list_reports_handler(
    State(state): State<ApiState>,
    Query(q): Query<ReportsQuery>,
) -> Result<Json<ReportsResponse>, ApiError> {
    let limit = match (&q.assigned_to, q.limit) {
        (_, Some(limit)) => Some(limit),
        (Some(_), None) => None,
        (None, None) => Some(DEFAULT_RECENT_LIMIT),
    };
    let reports = state
        .reports
        .list(&ReportFilter {
            department: q.department,
            assigned_to: q.assigned_to,
            limit,
        })
        .await?;
    let total = reports.len();
    Ok(Json(ReportsResponse { reports, total }))
}

async fn track_report_handler(
    State(state): State<ApiState>,
    Path(code): Path<String>,
) -> Result<Json<Report>, ApiError> {
    Ok(Json(state.reports.track(&code).await?))
}

async fn update_status_handler(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
    Json(update): Json<StatusUpdate>,
) -> Result<Json<Report>, ApiError> {
    Ok(Json(state.reports.update_status(id, update.status).await?))
}

async fn assign_handler(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
    Json(update): Json<AssignmentUpdate>,
) -> Result<Json<Report>, ApiError> {
    Ok(Json(
        state
            .reports
            .assign(id, update.assigned_to.as_deref())
            .await?,
    ))
}

async fn status_statistics_handler(
    State(state): State<ApiState>,
) -> Result<Json<StatusCounts>, ApiError> {
    Ok(Json(state.reports.statistics_by_status().await?))
}

async fn statistics_handler(
    State(state): State<ApiState>,
) -> Result<Json<StatisticsResponse>, ApiError> {
    let departments = state.reports.statistics_by_department().await?;
    let total_reports = departments.iter().map(|d| d.count).sum();
    Ok(Json(StatisticsResponse {
        departments,
        total_reports,
    }))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::adapters::outbound::{DashMapLocationStore, SqliteReportRepository};
    use crate::application::TrackerConfig;
    use crate::domain::services::DepartmentResolver;
    use axum::body::Body;
    use axum::http::{Request, StatusCode as HttpStatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn create_test_state() -> ApiState {
        let resolver: Arc<dyn GeoResolver> = Arc::new(DepartmentResolver::senegal().unwrap());
        let locations: Arc<dyn LocationStore> = Arc::new(DashMapLocationStore::new());
        let tracker = Arc::new(DepartmentTracker::new(
            resolver.clone(),
            locations.clone(),
            TrackerConfig::default(),
        ));
        let reports = Arc::new(ReportService::new(
            Arc::new(SqliteReportRepository::in_memory().unwrap()),
            resolver.clone(),
        ));
        ApiState::new(resolver, locations, tracker, reports)
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health_handler() {
        let app = router(create_test_state());

        let response = app.oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["reference_units"], 45);
        assert_eq!(json["reports"], 0);
    }

    #[tokio::test]
    async fn test_departments_handler() {
        let app = router(create_test_state());

        let response = app.oneshot(get_request("/api/v1/departments")).await.unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["total"], 45);
        assert_eq!(json["departments"][0]["name"], "Dakar");
    }

    #[tokio::test]
    async fn test_resolve_handler() {
        let app = router(create_test_state());

        let response = app
            .oneshot(get_request("/api/v1/resolve?lat=12.58&lng=-16.27"))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["department"], "Ziguinchor");
        assert_eq!(json["unknown"], false);
    }

    #[tokio::test]
    async fn test_resolve_handler_unknown() {
        let app = router(create_test_state());

        let response = app
            .oneshot(get_request("/api/v1/resolve?lat=0&lng=-30"))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["department"], "Localisation inconnue");
        assert_eq!(json["unknown"], true);
    }

    #[tokio::test]
    async fn test_resolve_handler_nan_rejected() {
        let app = router(create_test_state());

        let response = app
            .oneshot(get_request("/api/v1/resolve?lat=NaN&lng=10"))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_resolve_handler_missing_params() {
        let app = router(create_test_state());

        let response = app
            .oneshot(get_request("/api/v1/resolve?lat=14.7"))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_session_location_flow() {
        let state = create_test_state();

        let response = router(state.clone())
            .oneshot(get_request("/api/v1/sessions/phone-1/department"))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["state"], "default");
        assert_eq!(json["department"], "Dakar");

        let response = router(state.clone())
            .oneshot(json_request(
                "PUT",
                "/api/v1/sessions/phone-1/location",
                serde_json::json!({"latitude": 16.0179, "longitude": -16.4897}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["session"], "phone-1");
        assert_eq!(json["state"], "resolved");
        assert_eq!(json["department"], "Saint-Louis");

        let response = router(state.clone())
            .oneshot(get_request("/api/v1/sessions/phone-1/department"))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["department"], "Saint-Louis");

        let response = router(state.clone())
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/v1/sessions/phone-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::NO_CONTENT);
        assert_eq!(state.tracker.tracked_sessions(), 0);
    }

    #[tokio::test]
    async fn test_submit_and_track_report() {
        let state = create_test_state();

        let response = router(state.clone())
            .oneshot(json_request(
                "POST",
                "/api/v1/reports",
                serde_json::json!({
                    "kind": "voirie",
                    "description": "route dégradée",
                    "latitude": 14.70,
                    "longitude": -17.45,
                    "address": "Plateau"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::CREATED);

        let json = body_json(response).await;
        assert_eq!(json["department"], "Dakar");
        assert_eq!(json["status"], "en-attente");
        let code = json["access_code"].as_str().unwrap().to_lowercase();

        let response = router(state.clone())
            .oneshot(get_request(&format!("/api/v1/reports/track/{}", code)))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        let tracked = body_json(response).await;
        assert_eq!(tracked["id"], json["id"]);
    }

    #[tokio::test]
    async fn test_submit_report_invalid_coordinate() {
        let app = router(create_test_state());

        // JSON has no NaN; an overflowing literal never reaches the resolver
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/reports")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"kind":"voirie","latitude":1e999,"longitude":-17.45}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_track_invalid_and_missing_codes() {
        let state = create_test_state();

        let response = router(state.clone())
            .oneshot(get_request("/api/v1/reports/track/abc"))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);

        let response = router(state)
            .oneshot(get_request("/api/v1/reports/track/ZZZZ0000"))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_status_handler() {
        let state = create_test_state();
        let report = state
            .reports
            .submit(NewReport {
                kind: "eau".to_string(),
                description: String::new(),
                latitude: 12.58,
                longitude: -16.27,
                address: String::new(),
                reporter_name: None,
                reporter_phone: None,
                media_url: None,
            })
            .await
            .unwrap();

        let response = router(state.clone())
            .oneshot(json_request(
                "PUT",
                &format!("/api/v1/reports/{}/status", report.id),
                serde_json::json!({"status": "resolu"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "resolu");

        let response = router(state)
            .oneshot(json_request(
                "PUT",
                &format!("/api/v1/reports/{}/status", Uuid::new_v4()),
                serde_json::json!({"status": "en-cours"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_reports_and_statistics() {
        let state = create_test_state();
        for (lat, lng) in [(12.58, -16.27), (12.58, -16.27), (14.70, -17.45)] {
            state
                .reports
                .submit(NewReport {
                    kind: "eclairage".to_string(),
                    description: String::new(),
                    latitude: lat,
                    longitude: lng,
                    address: String::new(),
                    reporter_name: None,
                    reporter_phone: None,
                    media_url: None,
                })
                .await
                .unwrap();
        }

        let response = router(state.clone())
            .oneshot(get_request("/api/v1/reports?department=ziguinchor"))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["total"], 2);

        let response = router(state.clone())
            .oneshot(get_request("/api/v1/reports?limit=1"))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["total"], 1);

        let response = router(state)
            .oneshot(get_request("/api/v1/statistics/departments"))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["total_reports"], 3);
        assert_eq!(json["departments"][0]["department"], "Ziguinchor");
        assert_eq!(json["departments"][0]["count"], 2);
    }

    #[tokio::test]
    async fn test_assign_and_filter_by_assignee() {
        let state = create_test_state();
        let mut ids = Vec::new();
        for _ in 0..7 {
            let report = state
                .reports
                .submit(NewReport {
                    kind: "voirie".to_string(),
                    description: String::new(),
                    latitude: 14.70,
                    longitude: -17.45,
                    address: String::new(),
                    reporter_name: None,
                    reporter_phone: None,
                    media_url: None,
                })
                .await
                .unwrap();
            ids.push(report.id);
        }

        for id in &ids[..6] {
            let response = router(state.clone())
                .oneshot(json_request(
                    "PUT",
                    &format!("/api/v1/reports/{}/assignee", id),
                    serde_json::json!({"assigned_to": "agent-2"}),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), HttpStatusCode::OK);
            let json = body_json(response).await;
            assert_eq!(json["assigned_to"], "agent-2");
        }

        // No default limit when listing an assignee's reports
        let response = router(state.clone())
            .oneshot(get_request("/api/v1/reports?assigned_to=agent-2"))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["total"], 6);

        let response = router(state.clone())
            .oneshot(get_request("/api/v1/reports?assigned_to=agent-2&limit=2"))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["total"], 2);

        let response = router(state.clone())
            .oneshot(json_request(
                "PUT",
                &format!("/api/v1/reports/{}/assignee", ids[0]),
                serde_json::json!({}),
            ))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert!(json["assigned_to"].is_null());

        let response = router(state)
            .oneshot(json_request(
                "PUT",
                &format!("/api/v1/reports/{}/assignee", Uuid::new_v4()),
                serde_json::json!({"assigned_to": "agent-2"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_status_statistics_handler() {
        let state = create_test_state();
        let report = state
            .reports
            .submit(NewReport {
                kind: "eau".to_string(),
                description: String::new(),
                latitude: 12.58,
                longitude: -16.27,
                address: String::new(),
                reporter_name: None,
                reporter_phone: None,
                media_url: None,
            })
            .await
            .unwrap();
        state
            .reports
            .update_status(report.id, ReportStatus::Resolved)
            .await
            .unwrap();

        let response = router(state)
            .oneshot(get_request("/api/v1/statistics/status"))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["total"], 1);
        assert_eq!(json["pending"], 0);
        assert_eq!(json["resolved"], 1);
    }

    #[test]
    fn test_api_error_status_codes() {
        let cases: Vec<(ApiError, HttpStatusCode)> = vec![
            (
                ResolveError::InvalidCoordinate {
                    latitude: f64::NAN,
                    longitude: 0.0,
                }
                .into(),
                HttpStatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                ReportError::NotFound("x".to_string()).into(),
                HttpStatusCode::NOT_FOUND,
            ),
            (ReportError::CodeExhausted.into(), HttpStatusCode::SERVICE_UNAVAILABLE),
            (
                ReportError::Storage(anyhow::anyhow!("disk full")).into(),
                HttpStatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}
