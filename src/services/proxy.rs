use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    middleware::auth::SessionUser,
    state::AppState,
};

/// A backend response relayed as-is: the backend's status, its parsed JSON body.
#[derive(Debug)]
pub struct Relay {
    pub status: StatusCode,
    pub body: Value,
}

impl IntoResponse for Relay {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

pub async fn fetch_orders(state: &AppState, user: &SessionUser) -> AppResult<Relay> {
    let url = format!("{}/api/orders", state.config.backend_base_url);
    let response = state
        .http
        .get(url)
        .bearer_auth(&user.access_token)
        .send()
        .await?;
    relay_json(response, "Failed to fetch orders").await
}

pub async fn create_order(state: &AppState, user: &SessionUser, body: Value) -> AppResult<Relay> {
    let url = format!("{}/api/orders", state.config.backend_base_url);
    let response = state
        .http
        .post(url)
        .bearer_auth(&user.access_token)
        .json(&body)
        .send()
        .await?;
    relay_json(response, "Failed to create order").await
}

/// Relay semantics shared by every proxied resource: a non-success response
/// surfaces the backend's status with its text body, a success response its
/// JSON. The body is never validated or transformed.
async fn relay_json(response: reqwest::Response, fallback: &str) -> AppResult<Relay> {
    let status =
        StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);

    if !status.is_success() {
        let text = response.text().await?;
        let body = if text.is_empty() {
            fallback.to_string()
        } else {
            text
        };
        return Err(AppError::Upstream { status, body });
    }

    let body = response.json::<Value>().await?;
    Ok(Relay { status, body })
}
