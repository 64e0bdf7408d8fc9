use crate::models::Order;

use super::{client::ApiClient, table::OrderBrowser, view::ViewState};

/// Admin orders page: one fetch, then read-only browsing.
#[derive(Debug)]
pub struct AdminOrdersView {
    state: ViewState<Vec<Order>>,
    pub browser: OrderBrowser,
}

impl AdminOrdersView {
    pub fn new() -> Self {
        Self {
            state: ViewState::Loading,
            browser: OrderBrowser::new(),
        }
    }

    /// Fetch the order list. A failure is terminal until the next `load`.
    pub async fn load(&mut self, client: &ApiClient) {
        self.state = ViewState::Loading;
        self.state = match client.fetch_orders().await {
            Ok(orders) => ViewState::Ready(orders),
            Err(err) => {
                tracing::error!(error = %err, "failed to load orders");
                ViewState::Failed(err.to_string())
            }
        };
    }

    pub fn state(&self) -> &ViewState<Vec<Order>> {
        &self.state
    }

    /// Rows in display order; empty while loading or failed.
    pub fn visible_orders(&self) -> Vec<&Order> {
        self.state
            .data()
            .map(|orders| self.browser.arrange(orders))
            .unwrap_or_default()
    }
}

impl Default for AdminOrdersView {
    fn default() -> Self {
        Self::new()
    }
}
