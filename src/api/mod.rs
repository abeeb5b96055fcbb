pub mod category;
pub mod health;
pub mod inventory;
pub mod product;
pub mod revenue;
pub mod sales;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde_json::json;

use crate::domain::DomainError;
use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Record creation
        .route("/post/product", post(product::create_product))
        .route("/post/category", post(category::create_category))
        .route("/post/inventory", post(inventory::create_inventory))
        .route("/post/sale", post(sales::create_sale))
        .route("/post/revenue", post(revenue::create_revenue))
        // Catalogue
        .route("/products", get(product::list_products))
        .route("/categories", get(category::list_categories))
        // Sales
        .route("/sales/product/:type_product", get(sales::get_sales_product))
        .route("/sales/category/:type_category", get(sales::get_sales_category))
        .route("/sales/:start_date/:end_date", get(sales::get_sales_range))
        .route(
            "/sales/:start_date/:end_date/:type_product/:type_category",
            get(sales::get_sales),
        )
        // Revenue
        .route(
            "/revenue/category/:type_category",
            get(revenue::get_revenue_category),
        )
        .route("/revenue/:start_date/:end_date", get(revenue::get_revenue_period))
        .route(
            "/revenue/:start_date/:end_date/:type_category",
            get(revenue::get_revenue),
        )
        // Inventory
        .route("/inventory", get(inventory::get_inventory))
        .route("/inventory/low/stocks", get(inventory::low_stock_inventory))
        .route("/inventory/:inventory_id", put(inventory::update_inventory))
        .with_state(state)
}

/// Map a repository failure onto the generic error body.
///
/// Anything other than not-found or validation becomes a 500 whose message is
/// the underlying error text.
pub(crate) fn error_response(err: DomainError) -> Response {
    match err {
        DomainError::NotFound => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": err.to_string()})),
        )
            .into_response(),
        DomainError::Validation(msg) => {
            (StatusCode::BAD_REQUEST, Json(json!({"error": msg}))).into_response()
        }
        other => {
            tracing::error!("Request failed: {}", other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": other.to_string()})),
            )
                .into_response()
        }
    }
}
