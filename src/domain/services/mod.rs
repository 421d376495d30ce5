mod department_resolver;
mod distance;

pub use department_resolver::{DepartmentResolver, MetroOverride, ResolverSettings};
pub use distance::{haversine_km, EARTH_RADIUS_KM};
