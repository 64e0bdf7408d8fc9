use thiserror::Error;

use crate::models::{Order, Product};

use super::{
    client::{ApiClient, ClientError},
    draft::{DraftError, OrderDraft},
    table::OrderBrowser,
    view::ViewState,
};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Draft(#[from] DraftError),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Shop orders page: the order list plus the product catalog, with a draft
/// for composing new orders. `shop_id` comes from the session claims.
#[derive(Debug)]
pub struct ShopOrdersView {
    shop_id: i64,
    orders: ViewState<Vec<Order>>,
    products: ViewState<Vec<Product>>,
    pub browser: OrderBrowser,
    pub draft: OrderDraft,
}

impl ShopOrdersView {
    pub fn new(shop_id: i64) -> Self {
        Self {
            shop_id,
            orders: ViewState::Loading,
            products: ViewState::Loading,
            browser: OrderBrowser::new(),
            draft: OrderDraft::new(),
        }
    }

    /// Fetch orders and products as independent requests; the view is ready
    /// only once both have arrived.
    pub async fn load(&mut self, client: &ApiClient) {
        self.orders = ViewState::Loading;
        self.products = ViewState::Loading;

        let (orders, products) = tokio::join!(client.fetch_orders(), client.fetch_products());

        self.orders = match orders {
            Ok(data) => ViewState::Ready(data),
            Err(err) => {
                tracing::error!(error = %err, "failed to load orders");
                ViewState::Failed(err.to_string())
            }
        };
        self.products = match products {
            Ok(data) => ViewState::Ready(data),
            Err(err) => {
                tracing::error!(error = %err, "failed to load products");
                ViewState::Failed(err.to_string())
            }
        };
    }

    pub fn is_ready(&self) -> bool {
        self.orders.is_ready() && self.products.is_ready()
    }

    /// First terminal failure, if any; the page shows it instead of the tables.
    pub fn error(&self) -> Option<&str> {
        self.orders.error().or_else(|| self.products.error())
    }

    pub fn products(&self) -> &[Product] {
        self.products.data().map(Vec::as_slice).unwrap_or_default()
    }

    /// Rows in display order; empty while loading or failed.
    pub fn visible_orders(&self) -> Vec<&Order> {
        self.orders
            .data()
            .map(|orders| self.browser.arrange(orders))
            .unwrap_or_default()
    }

    /// Submit the composed draft. An empty draft is rejected locally before
    /// any request goes out; on success the created order joins the list and
    /// the draft resets.
    pub async fn submit_order(&mut self, client: &ApiClient) -> Result<Order, SubmitError> {
        let payload = self.draft.build(self.shop_id)?;
        let created = client.create_order(&payload).await?;

        if let Some(orders) = self.orders.data_mut() {
            orders.push(created.clone());
        }
        self.draft.clear();

        Ok(created)
    }
}
