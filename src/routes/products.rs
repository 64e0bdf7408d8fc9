use axum::{Json, Router, routing::get};

use crate::{models::Product, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_products))
}

// The backend exposes no products resource, so the catalog is served from
// this fixed list.
fn builtin_catalog() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Whole Milk".to_string(),
            price: 3.99,
            unit: "liter".to_string(),
            category: "Milk".to_string(),
            description: "Fresh whole milk".to_string(),
            in_stock: true,
            supplier: "Farm Fresh Dairy".to_string(),
        },
        Product {
            id: "2".to_string(),
            name: "Greek Yogurt".to_string(),
            price: 4.49,
            unit: "cup".to_string(),
            category: "Yogurt".to_string(),
            description: "Creamy Greek yogurt".to_string(),
            in_stock: true,
            supplier: "Farm Fresh Dairy".to_string(),
        },
        Product {
            id: "3".to_string(),
            name: "Cheddar Cheese".to_string(),
            price: 5.99,
            unit: "kg".to_string(),
            category: "Cheese".to_string(),
            description: "Aged cheddar cheese".to_string(),
            in_stock: true,
            supplier: "Cheese Masters".to_string(),
        },
    ]
}

#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "List products", body = Vec<Product>)
    ),
    tag = "Products"
)]
pub async fn list_products() -> Json<Vec<Product>> {
    Json(builtin_catalog())
}
