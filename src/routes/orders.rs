use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::Value;

use crate::{
    dto::orders::NewOrderPayload, error::AppResult, middleware::auth::SessionUser,
    services::proxy, state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_orders).post(create_order))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "Orders relayed from the backend"),
        (status = 401, description = "Missing or invalid session"),
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn list_orders(State(state): State<AppState>, user: SessionUser) -> AppResult<Response> {
    let relay = proxy::fetch_orders(&state, &user).await?;
    Ok(relay.into_response())
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = NewOrderPayload,
    responses(
        (status = 201, description = "Order created on the backend"),
        (status = 401, description = "Missing or invalid session"),
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    user: SessionUser,
    Json(body): Json<Value>,
) -> AppResult<Response> {
    let relay = proxy::create_order(&state, &user, body).await?;
    Ok((StatusCode::CREATED, Json(relay.body)).into_response())
}
