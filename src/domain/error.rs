//! Domain errors

/// Failure of the department resolver.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolveError {
    /// Latitude or longitude is NaN or infinite
    #[error("invalid coordinate ({latitude}, {longitude})")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// The reference table or settings cannot produce a working resolver
    #[error("resolver configuration error: {0}")]
    Configuration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ResolveError::InvalidCoordinate {
            latitude: f64::NAN,
            longitude: 10.0,
        };
        assert_eq!(err.to_string(), "invalid coordinate (NaN, 10)");

        let err = ResolveError::Configuration("empty table".to_string());
        assert_eq!(err.to_string(), "resolver configuration error: empty table");
    }
}
