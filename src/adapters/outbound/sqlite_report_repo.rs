//! SQLite Report Repository
//!
//! Implements ReportRepository using SQLite for storage.

use crate::domain::entities::Report;
use crate::domain::ports::ReportRepository;
use crate::domain::value_objects::{AccessCode, GeoPoint, ReportStatus};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use parking_lot::Mutex;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::Arc;
use uuid::Uuid;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS reports (
    id             TEXT PRIMARY KEY,
    kind           TEXT NOT NULL,
    description    TEXT NOT NULL,
    latitude       REAL NOT NULL,
    longitude      REAL NOT NULL,
    department     TEXT NOT NULL,
    address        TEXT NOT NULL,
    status         TEXT NOT NULL,
    access_code    TEXT NOT NULL UNIQUE,
    reporter_name  TEXT,
    reporter_phone TEXT,
    media_url      TEXT,
    assigned_to    TEXT,
    created_at     TEXT NOT NULL,
    updated_at     TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_reports_created_at ON reports(created_at);
";

const ASSIGNEE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reports_assigned_to ON reports(assigned_to);";

const COLUMNS: &str = "id, kind, description, latitude, longitude, department, address, status,
     access_code, reporter_name, reporter_phone, media_url, created_at, updated_at, assigned_to";

/// SQLite-backed report repository.
///
/// A single connection is shared behind a mutex; every query runs on the
/// blocking thread pool.
pub struct SqliteReportRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteReportRepository {
    /// Open (or create) the database file and apply the schema.
    pub fn open(db_path: &str) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        Self::with_connection(conn)
    }

    /// In-memory database, mostly for tests.
    pub fn in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Self::migrate(&conn)?;
        conn.execute_batch(ASSIGNEE_INDEX)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Bring databases created before report assignment up to date.
    fn migrate(conn: &Connection) -> Result<()> {
        let columns = {
            let mut stmt = conn.prepare("PRAGMA table_info(reports)")?;
            let names = stmt
                .query_map([], |row| row.get::<_, String>(1))?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            names
        };
        let has_assignee = columns.iter().any(|name| name == "assigned_to");

        if !has_assignee {
            tracing::info!("adding assigned_to column to reports");
            conn.execute("ALTER TABLE reports ADD COLUMN assigned_to TEXT", [])?;
        }
        Ok(())
    }

    async fn with_conn<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
    {
        let conn = self.conn.clone();
        tokio::task::spawn_blocking(move || {
            let guard = conn.lock();
            f(&guard)
        })
        .await?
    }

    /// Convert a SQLite row to a Report entity.
    fn row_to_report(row: &Row) -> rusqlite::Result<Report> {
        let id: String = row.get(0)?;
        let access_code: String = row.get(8)?;
        let created_at: String = row.get(12)?;
        let updated_at: String = row.get(13)?;

        Ok(Report {
            id: Uuid::parse_str(&id).map_err(|e| conversion_error(0, e))?,
            kind: row.get(1)?,
            description: row.get(2)?,
            location: GeoPoint::new(row.get(3)?, row.get(4)?),
            department: row.get(5)?,
            address: row.get(6)?,
            status: ReportStatus::from_str(&row.get::<_, String>(7)?),
            access_code: AccessCode::parse(&access_code).map_err(|e| conversion_error(8, e))?,
            reporter_name: row.get(9)?,
            reporter_phone: row.get(10)?,
            media_url: row.get(11)?,
            assigned_to: row.get(14)?,
            created_at: parse_timestamp(12, &created_at)?,
            updated_at: parse_timestamp(13, &updated_at)?,
        })
    }
}

fn conversion_error<E>(idx: usize, e: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    // Fixed width so lexical order matches chronological order
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(idx: usize, raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| conversion_error(idx, e))
}

#[async_trait]
impl ReportRepository for SqliteReportRepository {
    async fn insert(&self, report: &Report) -> Result<()> {
        let report = report.clone();
        self.with_conn(move |conn| {
            conn.execute(
                &format!(
                    "INSERT INTO reports ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
                    COLUMNS
                ),
                params![
                    report.id.to_string(),
                    report.kind,
                    report.description,
                    report.location.latitude,
                    report.location.longitude,
                    report.department,
                    report.address,
                    report.status.as_str(),
                    report.access_code.as_str(),
                    report.reporter_name,
                    report.reporter_phone,
                    report.media_url,
                    format_timestamp(&report.created_at),
                    format_timestamp(&report.updated_at),
                    report.assigned_to,
                ],
            )?;
            Ok(())
        })
        .await
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Report>> {
        self.with_conn(move |conn| {
            let report = conn
                .query_row(
                    &format!("SELECT {} FROM reports WHERE id = ?1", COLUMNS),
                    params![id.to_string()],
                    Self::row_to_report,
                )
                .optional()?;
            Ok(report)
        })
        .await
    }

    async fn get_by_access_code(&self, code: &str) -> Result<Option<Report>> {
        let code = code.to_string();
        self.with_conn(move |conn| {
            let report = conn
                .query_row(
                    &format!("SELECT {} FROM reports WHERE access_code = ?1", COLUMNS),
                    params![code],
                    Self::row_to_report,
                )
                .optional()?;
            Ok(report)
        })
        .await
    }

    async fn access_code_exists(&self, code: &str) -> Result<bool> {
        let code = code.to_string();
        self.with_conn(move |conn| {
            let count: i64 = conn.query_row(
                "SELECT COUNT(*) FROM reports WHERE access_code = ?1",
                params![code],
                |row| row.get(0),
            )?;
            Ok(count > 0)
        })
        .await
    }

    async fn list_recent(&self) -> Result<Vec<Report>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {} FROM reports ORDER BY created_at DESC, rowid DESC",
                COLUMNS
            ))?;
            let reports = stmt
                .query_map([], Self::row_to_report)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(reports)
        })
        .await
    }

    async fn update_status(&self, id: Uuid, status: ReportStatus) -> Result<bool> {
        let now = format_timestamp(&Utc::now());
        self.with_conn(move |conn| {
            let changed = conn.execute(
                "UPDATE reports SET status = ?1, updated_at = ?2 WHERE id = ?3",
                params![status.as_str(), now, id.to_string()],
            )?;
            Ok(changed > 0)
        })
        .await
    }

    async fn assign(&self, id: Uuid, assignee: Option<String>) -> Result<bool> {
        let now = format_timestamp(&Utc::now());
        self.with_conn(move |conn| {
            let changed = conn.execute(
                "UPDATE reports SET assigned_to = ?1, updated_at = ?2 WHERE id = ?3",
                params![assignee, now, id.to_string()],
            )?;
            Ok(changed > 0)
        })
        .await
    }

    async fn count(&self) -> Result<usize> {
        self.with_conn(|conn| {
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM reports", [], |row| row.get(0))?;
            Ok(count as usize)
        })
        .await
    }
}
