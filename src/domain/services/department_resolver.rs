//! Department Resolver Service
//!
//! Pure domain logic for mapping a coordinate to the nearest department.
//! This service has NO external dependencies - it's pure Rust.

use crate::domain::entities::AdministrativeUnit;
use crate::domain::error::ResolveError;
use crate::domain::ports::GeoResolver;
use crate::domain::services::distance::haversine_km;
use crate::domain::value_objects::{GeoPoint, ResolvedDepartment};
use std::collections::HashSet;

/// Metro override: points this close to the capital or one of its
/// satellites always resolve to the capital.
#[derive(Debug, Clone, PartialEq)]
pub struct MetroOverride {
    /// Name returned inside the metro zone
    pub capital: String,
    /// Units whose reference points also anchor the zone
    pub satellites: Vec<String>,
    /// Strict radius around each anchor, in km
    pub radius_km: f64,
}

impl MetroOverride {
    pub fn new(capital: impl Into<String>, satellites: Vec<String>, radius_km: f64) -> Self {
        Self {
            capital: capital.into(),
            satellites,
            radius_km,
        }
    }

    /// Dakar with Pikine and Guédiawaye, 20 km.
    pub fn dakar() -> Self {
        Self::new(
            "Dakar",
            vec!["Pikine".to_string(), "Guédiawaye".to_string()],
            ResolverSettings::DEFAULT_METRO_RADIUS_KM,
        )
    }
}

/// Tunable thresholds of the resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverSettings {
    /// Nearest matches farther than this (strictly) resolve to the
    /// unknown-location sentinel
    pub unknown_cutoff_km: f64,
    /// Optional capital override
    pub metro: Option<MetroOverride>,
}

impl ResolverSettings {
    pub const DEFAULT_UNKNOWN_CUTOFF_KM: f64 = 50.0;
    pub const DEFAULT_METRO_RADIUS_KM: f64 = 20.0;
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            unknown_cutoff_km: Self::DEFAULT_UNKNOWN_CUTOFF_KM,
            metro: Some(MetroOverride::dakar()),
        }
    }
}

/// Metro zone after validation against the table.
#[derive(Debug, Clone)]
struct MetroZone {
    capital: String,
    anchors: Vec<GeoPoint>,
    radius_km: f64,
}

impl MetroZone {
    fn contains(&self, point: GeoPoint) -> bool {
        self.anchors
            .iter()
            .any(|anchor| haversine_km(point, *anchor) < self.radius_km)
    }
}

/// Nearest-department resolver.
///
/// Resolution works in three steps:
/// 1. Linear haversine scan for the nearest unit (first unit wins ties)
/// 2. Metro override: inside the capital zone, always return the capital
/// 3. Unknown fallback: nearest unit farther than the cutoff yields the sentinel
///
/// The resolver is immutable once built and can be shared freely.
#[derive(Debug, Clone)]
pub struct DepartmentResolver {
    units: Vec<AdministrativeUnit>,
    settings: ResolverSettings,
    metro: Option<MetroZone>,
}

impl DepartmentResolver {
    /// Build a resolver over a reference table.
    ///
    /// Fails with `ResolveError::Configuration` if the table is empty,
    /// contains duplicate names or non-finite coordinates, if a threshold
    /// is not a finite non-negative number, or if a metro name is not in
    /// the table.
    pub fn new(
        units: Vec<AdministrativeUnit>,
        settings: ResolverSettings,
    ) -> Result<Self, ResolveError> {
        if units.is_empty() {
            return Err(ResolveError::Configuration(
                "reference table is empty".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(units.len());
        for unit in &units {
            if !seen.insert(unit.name.as_str()) {
                return Err(ResolveError::Configuration(format!(
                    "duplicate unit name: {}",
                    unit.name
                )));
            }
            if !unit.location.is_finite() {
                return Err(ResolveError::Configuration(format!(
                    "unit {} has a non-finite location",
                    unit.name
                )));
            }
        }

        check_threshold("unknown_cutoff_km", settings.unknown_cutoff_km)?;

        let metro = match &settings.metro {
            Some(metro) => {
                check_threshold("metro radius_km", metro.radius_km)?;
                let anchors = std::iter::once(&metro.capital)
                    .chain(metro.satellites.iter())
                    .map(|name| {
                        units
                            .iter()
                            .find(|u| &u.name == name)
                            .map(|u| u.location)
                            .ok_or_else(|| {
                                ResolveError::Configuration(format!(
                                    "metro unit {} is not in the reference table",
                                    name
                                ))
                            })
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                Some(MetroZone {
                    capital: metro.capital.clone(),
                    anchors,
                    radius_km: metro.radius_km,
                })
            }
            None => None,
        };

        tracing::debug!(
            "department resolver ready: units={} cutoff_km={} metro={:?}",
            units.len(),
            settings.unknown_cutoff_km,
            metro.as_ref().map(|m| m.capital.as_str())
        );

        Ok(Self {
            units,
            settings,
            metro,
        })
    }

    /// Resolver over the built-in Senegal table with default settings.
    pub fn senegal() -> Result<Self, ResolveError> {
        Self::new(
            crate::domain::departments::senegal_departments(),
            ResolverSettings::default(),
        )
    }

    /// Resolve a coordinate to a department.
    pub fn resolve(&self, latitude: f64, longitude: f64) -> Result<ResolvedDepartment, ResolveError> {
        let point = GeoPoint::new(latitude, longitude);
        let (nearest, distance) = self.nearest(point)?;

        if let Some(metro) = &self.metro {
            if metro.contains(point) {
                return Ok(ResolvedDepartment::Unit(metro.capital.clone()));
            }
        }

        if distance > self.settings.unknown_cutoff_km {
            return Ok(ResolvedDepartment::Unknown);
        }

        Ok(ResolvedDepartment::Unit(nearest.name.clone()))
    }

    /// Nearest unit and its distance in km, without any override policy.
    pub fn nearest(&self, point: GeoPoint) -> Result<(&AdministrativeUnit, f64), ResolveError> {
        if !point.is_finite() {
            return Err(ResolveError::InvalidCoordinate {
                latitude: point.latitude,
                longitude: point.longitude,
            });
        }

        // Non-empty is checked in `new`.
        let mut best = &self.units[0];
        let mut best_distance = haversine_km(point, best.location);

        for unit in &self.units[1..] {
            let distance = haversine_km(point, unit.location);
            if distance < best_distance {
                best = unit;
                best_distance = distance;
            }
        }

        Ok((best, best_distance))
    }

    pub fn units(&self) -> &[AdministrativeUnit] {
        &self.units
    }

    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    /// Whether a point falls inside the metro override zone.
    pub fn in_metro_zone(&self, point: GeoPoint) -> bool {
        self.metro.as_ref().is_some_and(|m| m.contains(point))
    }
}

impl GeoResolver for DepartmentResolver {
    fn resolve(&self, latitude: f64, longitude: f64) -> Result<ResolvedDepartment, ResolveError> {
        DepartmentResolver::resolve(self, latitude, longitude)
    }

    fn units(&self) -> &[AdministrativeUnit] {
        DepartmentResolver::units(self)
    }
}

fn check_threshold(name: &str, value: f64) -> Result<(), ResolveError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ResolveError::Configuration(format!(
            "{} must be a finite non-negative number, got {}",
            name, value
        )))
    }
}
