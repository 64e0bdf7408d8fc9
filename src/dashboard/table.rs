use std::cmp::Ordering;

use crate::models::{Order, OrderStatus};

/// Columns an order table can sort on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    OrderCode,
    Date,
    Total,
    Status,
    Payment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// Client-side filter and sort state shared by the order tables.
#[derive(Debug, Default)]
pub struct OrderBrowser {
    status_filter: Option<OrderStatus>,
    search: String,
    sort: Option<SortConfig>,
}

impl OrderBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status_filter(&mut self, status: Option<OrderStatus>) {
        self.status_filter = status;
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Clicking a column header: the first click sorts ascending, clicking
    /// the same column again flips the direction.
    pub fn request_sort(&mut self, key: SortKey) {
        let direction = match self.sort {
            Some(SortConfig {
                key: current,
                direction: SortDirection::Ascending,
            }) if current == key => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };
        self.sort = Some(SortConfig { key, direction });
    }

    pub fn sort(&self) -> Option<SortConfig> {
        self.sort
    }

    /// Apply the status filter, then the search term, then the sort, and
    /// return the rows in display order. The sort is stable, so equal rows
    /// keep their fetched order.
    pub fn arrange<'a>(&self, orders: &'a [Order]) -> Vec<&'a Order> {
        let mut rows: Vec<&Order> = orders
            .iter()
            .filter(|order| self.matches_status(order) && self.matches_search(order))
            .collect();

        if let Some(config) = self.sort {
            rows.sort_by(|a, b| {
                let ordering = compare(a, b, config.key);
                match config.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        rows
    }

    fn matches_status(&self, order: &Order) -> bool {
        self.status_filter
            .map(|status| status.matches(&order.status))
            .unwrap_or(true)
    }

    fn matches_search(&self, order: &Order) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let term = self.search.to_lowercase();
        [&order.order_id, &order.status, &order.payment]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }
}

fn compare(a: &Order, b: &Order, key: SortKey) -> Ordering {
    match key {
        SortKey::OrderCode => a.order_id.cmp(&b.order_id),
        SortKey::Date => a.date.cmp(&b.date),
        SortKey::Total => a.total.total_cmp(&b.total),
        SortKey::Status => a.status.cmp(&b.status),
        SortKey::Payment => a.payment.cmp(&b.payment),
    }
}
