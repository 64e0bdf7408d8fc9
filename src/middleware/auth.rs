use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};
use jsonwebtoken::{DecodingKey, Validation, decode};

use crate::{dto::auth::SessionClaims, error::AppError, models::Role, state::AppState};

pub const SESSION_COOKIE: &str = "session";

/// Authenticated session for API handlers. Only sessions carrying a backend
/// bearer credential get this far.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub sub: String,
    pub role: Role,
    pub access_token: String,
}

/// Decode a session token without rejecting on expiry; callers decide what an
/// expired session means for them.
pub fn decode_session(
    token: &str,
    secret: &str,
) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default();
    validation.validate_exp = false;
    let data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;
    Ok(data.claims)
}

/// Pull the session token from the Authorization header or, failing that, the
/// session cookie.
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    if let Some(value) = headers.get(header::AUTHORIZATION) {
        if let Ok(raw) = value.to_str() {
            if let Some(token) = raw.strip_prefix("Bearer ") {
                return Some(token.trim().to_string());
            }
        }
    }

    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = token_from_headers(&parts.headers).ok_or(AppError::Unauthorized)?;
        let claims = decode_session(&token, &state.config.session_secret)
            .map_err(|_| AppError::Unauthorized)?;

        if claims.is_expired(chrono::Utc::now().timestamp()) {
            return Err(AppError::Unauthorized);
        }

        let access_token = claims.access_token.ok_or(AppError::Unauthorized)?;

        Ok(SessionUser {
            sub: claims.sub,
            role: claims.role,
            access_token,
        })
    }
}
