use chrono::Utc;
use thiserror::Error;

use crate::{
    dto::orders::NewOrderPayload,
    models::{OrderItem, OrderStatus, PaymentState, Product},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("quantity must be greater than zero")]
    ZeroQuantity,

    #[error("order needs at least one item")]
    Empty,
}

/// Line-item builder behind the shop's "new order" dialog.
#[derive(Debug, Default)]
pub struct OrderDraft {
    items: Vec<OrderItem>,
    notes: String,
}

impl OrderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of `product`. Re-adding a product merges into its
    /// existing line and recomputes that line's subtotal.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> Result<(), DraftError> {
        if quantity == 0 {
            return Err(DraftError::ZeroQuantity);
        }

        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            line.quantity += quantity;
            line.subtotal = f64::from(line.quantity) * line.price;
        } else {
            self.items.push(OrderItem {
                product_id: product.id.clone(),
                product_name: product.name.clone(),
                quantity,
                price: product.price,
                subtotal: f64::from(quantity) * product.price,
            });
        }

        Ok(())
    }

    pub fn remove_item(&mut self, product_id: &str) {
        self.items.retain(|line| line.product_id != product_id);
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(|line| line.subtotal).sum()
    }

    /// Turn the draft into a creation payload for `shop_id`. An empty draft
    /// is rejected here, before anything reaches the network.
    pub fn build(&self, shop_id: i64) -> Result<NewOrderPayload, DraftError> {
        if self.items.is_empty() {
            return Err(DraftError::Empty);
        }

        Ok(NewOrderPayload {
            shop_id,
            items: self.items.clone(),
            notes: self.notes.clone(),
            total: self.total(),
            status: OrderStatus::Pending.as_str().to_string(),
            payment: PaymentState::Unpaid.as_str().to_string(),
            date: Utc::now().format("%Y-%m-%d").to_string(),
        })
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.notes.clear();
    }
}
