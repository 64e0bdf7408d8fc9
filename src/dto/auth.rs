use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Role;

/// Claims inside a session token. The token itself is issued by the external
/// authentication provider; this service only decodes and validates it.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SessionClaims {
    pub sub: String,
    #[serde(default)]
    pub role: Role,
    /// Expiry as a unix timestamp in seconds.
    pub exp: i64,
    /// Shop the session belongs to, present for SHOP sessions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop_id: Option<i64>,
    /// Bearer credential forwarded to the backend by the proxy endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

impl SessionClaims {
    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.exp
    }
}
