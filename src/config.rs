use crate::application::{DEFAULT_CACHE_CAPACITY, MAX_CACHE_PRECISION};
use crate::domain::services::{MetroOverride, ResolverSettings};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    // HTTP API
    pub listen_addr: String,

    // Storage
    pub db_path: String,
    pub departments_path: Option<String>,

    // Resolver thresholds
    pub unknown_cutoff_km: f64,
    pub metro_radius_km: f64,
    pub metro_enabled: bool,

    // Department tracker
    pub poll_interval_secs: u64,
    pub default_department: String,
    pub cache_precision: u32,
    pub cache_capacity: usize,
    pub session_ttl_secs: u64,
    pub session_gc_interval_secs: u64,

    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            db_path: "senalert.db".to_string(),
            departments_path: None,
            unknown_cutoff_km: ResolverSettings::DEFAULT_UNKNOWN_CUTOFF_KM,
            metro_radius_km: ResolverSettings::DEFAULT_METRO_RADIUS_KM,
            metro_enabled: true,
            poll_interval_secs: 5,
            default_department: "Dakar".to_string(),
            cache_precision: 3,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            session_ttl_secs: 3600,
            session_gc_interval_secs: 60,
            debug: false,
        }
    }
}

impl Config {
    /// Resolver thresholds derived from this configuration.
    pub fn resolver_settings(&self) -> ResolverSettings {
        let metro = self.metro_enabled.then(|| {
            let mut metro = MetroOverride::dakar();
            metro.radius_km = self.metro_radius_km;
            metro
        });

        ResolverSettings {
            unknown_cutoff_km: self.unknown_cutoff_km,
            metro,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("invalid {} value {:?}, using default", key, raw);
            default
        }),
        Err(_) => default,
    }
}

fn flag(key: &str, default: bool) -> bool {
    std::env::var(key)
        .map(|v| v == "1" || v.to_lowercase() == "true")
        .unwrap_or(default)
}

pub fn load_config() -> anyhow::Result<Config> {
    let defaults = Config::default();

    let listen_addr = env_or("SENALERT_LISTEN_ADDR", &defaults.listen_addr);

    let db_path = env_or("SENALERT_DB_PATH", &defaults.db_path);

    let departments_path = std::env::var("SENALERT_DEPARTMENTS_PATH").ok();

    let unknown_cutoff_km = parse_or("SENALERT_UNKNOWN_CUTOFF_KM", defaults.unknown_cutoff_km);
    let metro_radius_km = parse_or("SENALERT_METRO_RADIUS_KM", defaults.metro_radius_km);
    let metro_enabled = flag("SENALERT_METRO_ENABLED", defaults.metro_enabled);

    let poll_interval_secs = parse_or("SENALERT_POLL_INTERVAL_SECS", defaults.poll_interval_secs);

    let default_department = env_or("SENALERT_DEFAULT_DEPARTMENT", &defaults.default_department);

    let cache_precision = parse_or("SENALERT_CACHE_PRECISION", defaults.cache_precision);
    let cache_capacity = parse_or("SENALERT_CACHE_CAPACITY", defaults.cache_capacity);

    let session_ttl_secs = parse_or("SENALERT_SESSION_TTL_SECS", defaults.session_ttl_secs);
    let session_gc_interval_secs = parse_or(
        "SENALERT_SESSION_GC_INTERVAL_SECS",
        defaults.session_gc_interval_secs,
    );

    let debug = std::env::var("DEBUG").is_ok();

    if poll_interval_secs == 0 {
        anyhow::bail!("SENALERT_POLL_INTERVAL_SECS must be at least 1");
    }

    if cache_precision > MAX_CACHE_PRECISION {
        anyhow::bail!(
            "SENALERT_CACHE_PRECISION must be at most {}, got {}",
            MAX_CACHE_PRECISION,
            cache_precision
        );
    }

    Ok(Config {
        listen_addr,
        db_path,
        departments_path,
        unknown_cutoff_km,
        metro_radius_km,
        metro_enabled,
        poll_interval_secs,
        default_department,
        cache_precision,
        cache_capacity,
        session_ttl_secs,
        session_gc_interval_secs,
        debug,
    })
}
