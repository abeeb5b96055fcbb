use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::IntoParams;

use super::error_response;
use crate::domain::CreateProductInput;
use crate::infrastructure::AppState;
use crate::models::Product;

/// Query parameters for creating a product. Every field is optional.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CreateProductQuery {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i32>,
    pub category_id: Option<i32>,
}

impl From<CreateProductQuery> for CreateProductInput {
    fn from(q: CreateProductQuery) -> Self {
        Self {
            name: q.name,
            description: q.description,
            price: q.price,
            category_id: q.category_id,
        }
    }
}

/// POST /post/product - Create a product
#[utoipa::path(
    post,
    path = "/post/product",
    params(CreateProductQuery),
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 500, description = "Insert failed, e.g. duplicate name")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    Query(params): Query<CreateProductQuery>,
) -> impl IntoResponse {
    match state.product_repo.create(params.into()).await {
        Ok(product) => {
            tracing::info!("Created product {} ({:?})", product.id, product.name);
            (StatusCode::CREATED, Json(product)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// GET /products - List every product
#[utoipa::path(
    get,
    path = "/products",
    responses((status = 200, description = "All products", body = [Product]))
)]
pub async fn list_products(State(state): State<AppState>) -> impl IntoResponse {
    match state.product_repo.find_all().await {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(e) => error_response(e),
    }
}
