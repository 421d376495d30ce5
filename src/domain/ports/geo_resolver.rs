//! Geo Resolver Port
//!
//! Defines the interface for resolving coordinates to administrative units.

use crate::domain::entities::AdministrativeUnit;
use crate::domain::error::ResolveError;
use crate::domain::value_objects::{GeoPoint, ResolvedDepartment};

/// Resolver for coordinates to department names.
///
/// Implementations are pure and safe to share across tasks. The built-in
/// implementation is `DepartmentResolver`.
pub trait GeoResolver: Send + Sync {
    /// Resolve a latitude/longitude pair.
    ///
    /// Returns `ResolveError::InvalidCoordinate` for non-finite input.
    fn resolve(&self, latitude: f64, longitude: f64) -> Result<ResolvedDepartment, ResolveError>;

    /// Resolve a `GeoPoint`.
    fn resolve_point(&self, point: GeoPoint) -> Result<ResolvedDepartment, ResolveError> {
        self.resolve(point.latitude, point.longitude)
    }

    /// Reference units backing this resolver.
    fn units(&self) -> &[AdministrativeUnit];
}
