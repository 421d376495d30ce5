mod api_server;

pub use api_server::{router, ApiServer, ApiState};

// Re-export request/response types for integration tests
#[allow(unused_imports)]
pub use api_server::{ApiError, AssignmentUpdate, LocationUpdate, ResolveQuery, StatusUpdate};
