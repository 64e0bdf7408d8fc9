use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;

use crate::{
    dto::auth::SessionClaims,
    middleware::auth::{decode_session, token_from_headers},
    models::Role,
    state::AppState,
};

/// Paths reachable without a session.
const PUBLIC_PATHS: &[&str] = &["/login", "/register", "/about"];

/// Outcome of the per-request session check on page routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    ToLogin,
    ToLanding(Role),
}

/// Decide what to do with a page request: path plus decoded claims plus clock
/// in, decision out. A session is live only when its expiry is strictly in
/// the future.
pub fn decide(path: &str, claims: Option<&SessionClaims>, now: i64) -> GateDecision {
    let public = PUBLIC_PATHS.contains(&path);
    let live = claims.filter(|c| !c.is_expired(now));

    match (public, live) {
        (false, None) => GateDecision::ToLogin,
        (true, Some(session)) => GateDecision::ToLanding(session.role),
        _ => GateDecision::Allow,
    }
}

/// Middleware applying [`decide`] in front of every page route. Tokens that
/// fail to decode are treated as absent.
pub async fn session_gate(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let claims = token_from_headers(req.headers())
        .and_then(|token| decode_session(&token, &state.config.session_secret).ok());

    match decide(req.uri().path(), claims.as_ref(), Utc::now().timestamp()) {
        GateDecision::Allow => next.run(req).await,
        GateDecision::ToLogin => Redirect::to("/login").into_response(),
        GateDecision::ToLanding(role) => Redirect::to(role.landing_path()).into_response(),
    }
}
