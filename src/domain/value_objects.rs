//! Value Objects - Immutable domain primitives
//!
//! Value objects are identified by their value rather than identity.
//! They are immutable and can be freely shared.

use serde::{Deserialize, Serialize};

/// Name returned when a coordinate is too far from every reference unit.
pub const UNKNOWN_LOCATION: &str = "Localisation inconnue";

/// Department label used when a report carries neither a usable coordinate
/// nor a stored department.
pub const UNKNOWN_DEPARTMENT: &str = "Département inconnu";

/// A geographic coordinate in decimal degrees (WGS84).
///
/// No range validation is performed: `(95.0, 400.0)` is a valid `GeoPoint`
/// that is simply far from everything. Only non-finite values are rejected,
/// and only at resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Both components are finite real numbers.
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Round both components to `decimals` places.
    ///
    /// Returns integer grid coordinates usable as a hash key.
    pub fn grid_key(&self, decimals: u32) -> (i64, i64) {
        let scale = 10f64.powi(decimals as i32);
        (
            (self.latitude * scale).round() as i64,
            (self.longitude * scale).round() as i64,
        )
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}

/// Outcome of resolving a coordinate to a department.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResolvedDepartment {
    /// The coordinate belongs to the named reference unit
    Unit(String),
    /// No reference unit is close enough to trust
    Unknown,
}

impl ResolvedDepartment {
    /// Display name: the unit name or the unknown-location sentinel.
    pub fn name(&self) -> &str {
        match self {
            Self::Unit(name) => name,
            Self::Unknown => UNKNOWN_LOCATION,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl std::fmt::Display for ResolvedDepartment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for ResolvedDepartment {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Lifecycle status of an incident report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportStatus {
    /// Submitted, waiting for triage (en-attente)
    #[serde(rename = "en-attente")]
    Pending,
    /// Assigned and being handled (en-cours)
    #[serde(rename = "en-cours")]
    InProgress,
    /// Closed (resolu)
    #[serde(rename = "resolu")]
    Resolved,
}

impl ReportStatus {
    /// Parse a stored status string.
    ///
    /// Anything unrecognized is treated as pending.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "en-cours" => Self::InProgress,
            "resolu" => Self::Resolved,
            _ => Self::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "en-attente",
            Self::InProgress => "en-cours",
            Self::Resolved => "resolu",
        }
    }

    /// Human-readable description shown next to an incident.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Pending => "En attente de traitement",
            Self::InProgress => "En cours de traitement",
            Self::Resolved => "Problème résolu",
        }
    }
}

impl Default for ReportStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Length of a report access code.
pub const ACCESS_CODE_LEN: usize = 8;

/// Alphabet access codes are drawn from.
pub const ACCESS_CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Code handed to a reporter to track an anonymous report.
///
/// Always eight characters of `A-Z0-9`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessCode(String);

impl AccessCode {
    /// Normalize user input and validate it.
    ///
    /// Whitespace is stripped and letters are uppercased, so `"ab12 cd34"`
    /// parses to `AB12CD34`.
    pub fn parse(input: &str) -> Result<Self, AccessCodeError> {
        let clean: String = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();

        if clean.chars().count() != ACCESS_CODE_LEN {
            return Err(AccessCodeError::Length(clean.chars().count()));
        }
        if !clean
            .bytes()
            .all(|b| ACCESS_CODE_ALPHABET.contains(&b))
        {
            return Err(AccessCodeError::Charset);
        }

        Ok(Self(clean))
    }

    /// Draw a fresh code from the alphabet.
    pub fn generate<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let code = (0..ACCESS_CODE_LEN)
            .map(|_| ACCESS_CODE_ALPHABET[rng.gen_range(0..ACCESS_CODE_ALPHABET.len())] as char)
            .collect();
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccessCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reason an access code was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessCodeError {
    #[error("access code must have exactly 8 characters, got {0}")]
    Length(usize),
    #[error("access code may only contain letters and digits")]
    Charset,
}
