mod common;

use std::sync::atomic::Ordering;

use axum::http::StatusCode;
use chrono::Duration;
use serde_json::json;

use dairy_dashboard::{
    dashboard::{
        admin::AdminOrdersView,
        client::ApiClient,
        draft::DraftError,
        shop::{ShopOrdersView, SubmitError},
        table::SortKey,
    },
    models::{OrderStatus, Role},
};

fn sample_orders() -> serde_json::Value {
    json!([
        {
            "id": 1,
            "orderId": "A100",
            "date": "2025-06-01",
            "total": 12.5,
            "status": "pending",
            "payment": "unpaid",
            "shopId": 7
        },
        {
            "id": 2,
            "orderId": "B200",
            "date": "2025-06-02",
            "total": 8.0,
            "status": "approved",
            "payment": "paid",
            "shopId": 7
        }
    ])
}

async fn shop_client(app: &str) -> ApiClient {
    let token = common::mint_token(Role::Shop, Some(7), Duration::hours(1));
    ApiClient::new(app, token)
}

#[tokio::test]
async fn shop_view_is_ready_once_both_fetches_land() -> anyhow::Result<()> {
    let (backend, _hits) = common::spawn_backend(sample_orders()).await;
    let app = common::spawn_app(backend).await;
    let client = shop_client(&app).await;

    let mut view = ShopOrdersView::new(7);
    assert!(!view.is_ready());

    view.load(&client).await;

    assert!(view.is_ready());
    assert!(view.error().is_none());
    assert_eq!(view.products().len(), 3);
    assert_eq!(view.visible_orders().len(), 2);
    Ok(())
}

#[tokio::test]
async fn admin_view_filters_and_sorts_in_place() -> anyhow::Result<()> {
    let (backend, hits) = common::spawn_backend(sample_orders()).await;
    let app = common::spawn_app(backend).await;
    let token = common::mint_token(Role::Admin, None, Duration::hours(1));
    let client = ApiClient::new(&app, token);

    let mut view = AdminOrdersView::new();
    assert!(view.state().is_loading());
    assert!(view.visible_orders().is_empty());

    view.load(&client).await;
    assert!(view.state().is_ready());

    view.browser.set_status_filter(Some(OrderStatus::Pending));
    view.browser.set_search("A1");
    let rows: Vec<&str> = view
        .visible_orders()
        .into_iter()
        .map(|o| o.order_id.as_str())
        .collect();
    assert_eq!(rows, ["A100"]);

    // Browsing never refetches.
    view.browser.set_status_filter(None);
    view.browser.set_search("");
    view.browser.request_sort(SortKey::Total);
    let rows: Vec<&str> = view
        .visible_orders()
        .into_iter()
        .map(|o| o.order_id.as_str())
        .collect();
    assert_eq!(rows, ["B200", "A100"]);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn submitting_a_composed_order_appends_it() -> anyhow::Result<()> {
    let (backend, _hits) = common::spawn_backend(sample_orders()).await;
    let app = common::spawn_app(backend).await;
    let client = shop_client(&app).await;

    let mut view = ShopOrdersView::new(7);
    view.load(&client).await;

    let milk = view
        .products()
        .iter()
        .find(|p| p.name == "Whole Milk")
        .expect("catalog has milk")
        .clone();
    view.draft.add_item(&milk, 2)?;

    let created = view.submit_order(&client).await?;

    assert_eq!(created.order_id, "ORD-101");
    assert_eq!(created.shop_id, 7);
    assert_eq!(created.status, "pending");
    assert_eq!(created.payment, "unpaid");
    assert_eq!(created.total, 7.98);
    assert!(view.draft.is_empty());
    assert_eq!(view.visible_orders().len(), 3);
    Ok(())
}

#[tokio::test]
async fn empty_draft_is_rejected_before_any_request() -> anyhow::Result<()> {
    let (backend, hits) = common::spawn_backend(sample_orders()).await;
    let app = common::spawn_app(backend).await;
    let client = shop_client(&app).await;

    let mut view = ShopOrdersView::new(7);
    view.load(&client).await;
    let before = hits.load(Ordering::SeqCst);

    let err = view.submit_order(&client).await.unwrap_err();

    assert!(matches!(err, SubmitError::Draft(DraftError::Empty)));
    assert_eq!(hits.load(Ordering::SeqCst), before);
    Ok(())
}

#[tokio::test]
async fn failed_fetch_is_terminal_for_the_view() -> anyhow::Result<()> {
    let backend =
        common::spawn_failing_backend(StatusCode::INTERNAL_SERVER_ERROR, "backend exploded").await;
    let app = common::spawn_app(backend).await;
    let client = shop_client(&app).await;

    let mut view = ShopOrdersView::new(7);
    view.load(&client).await;

    assert!(!view.is_ready());
    let message = view.error().expect("terminal error");
    assert!(message.contains("backend exploded"), "got: {message}");
    assert!(view.visible_orders().is_empty());
    Ok(())
}
