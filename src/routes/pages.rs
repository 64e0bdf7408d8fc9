use axum::{
    Router,
    middleware::from_fn_with_state,
    response::{Html, Redirect},
    routing::get,
};

use crate::{middleware::guard, state::AppState};

/// Page routes sit behind the session gate; the API routes do not.
pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/login", get(login))
        .route("/register", get(register))
        .route("/about", get(about))
        .route("/dashboard", get(dashboard_home))
        .route("/dashboard/admin", get(admin_home))
        .route("/dashboard/admin/orders", get(admin_orders))
        .route("/dashboard/driver", get(driver_home))
        .route("/dashboard/shop", get(shop_home))
        .route("/dashboard/shop/orders", get(shop_orders))
        .layer(from_fn_with_state(state, guard::session_gate))
}

async fn home() -> Redirect {
    Redirect::to("/dashboard")
}

async fn login() -> Html<&'static str> {
    Html("<!doctype html><title>Sign in</title><h1>Sign in</h1>")
}

async fn register() -> Html<&'static str> {
    Html("<!doctype html><title>Register</title><h1>Register</h1>")
}

async fn about() -> Html<&'static str> {
    Html("<!doctype html><title>About</title><h1>About</h1>")
}

async fn dashboard_home() -> Html<&'static str> {
    Html("<!doctype html><title>Dashboard</title><h1>Dashboard</h1>")
}

async fn admin_home() -> Html<&'static str> {
    Html("<!doctype html><title>Admin</title><h1>Admin Dashboard</h1>")
}

async fn admin_orders() -> Html<&'static str> {
    Html("<!doctype html><title>Orders Management</title><h1>Orders Management</h1><p>View all orders</p>")
}

async fn driver_home() -> Html<&'static str> {
    Html("<!doctype html><title>Driver</title><h1>Driver Dashboard</h1>")
}

async fn shop_home() -> Html<&'static str> {
    Html("<!doctype html><title>Shop</title><h1>Shop Dashboard</h1>")
}

async fn shop_orders() -> Html<&'static str> {
    Html("<!doctype html><title>Orders</title><h1>Orders</h1><p>Manage your orders</p>")
}
