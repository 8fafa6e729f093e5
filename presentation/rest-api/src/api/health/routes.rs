use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

/// Static liveness message
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ApiStatusResponse {
    pub msg: String,
}

/// Liveness probe for load balancers and monitoring tools.
///
/// Never touches the database, so it answers even while storage is down.
pub struct Api;

impl Api {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl Api {
    /// API status
    ///
    /// Returns a static message while the process is serving requests.
    #[oai(path = "/api", method = "get", tag = "ApiTags::Health")]
    async fn status(&self) -> Json<ApiStatusResponse> {
        Json(ApiStatusResponse {
            msg: "From API".to_string(),
        })
    }
}
