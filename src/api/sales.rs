//! Sale recording and the sale lookup routes.
//!
//! Lookups return the raw matching rows in id order. Date bounds are passed
//! through as given and compared as text against `created_at`.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::IntoParams;

use super::error_response;
use crate::domain::{CreateSaleInput, DateRange, SaleFilter};
use crate::infrastructure::AppState;
use crate::models::Sale;

/// Query parameters for recording a sale
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CreateSaleQuery {
    pub total_price: Option<i32>,
    /// Defaults to 0
    pub quantity: Option<i32>,
    pub product_id: Option<i32>,
    pub category_id: Option<i32>,
}

/// POST /post/sale - Record a sale
#[utoipa::path(
    post,
    path = "/post/sale",
    params(CreateSaleQuery),
    responses(
        (status = 201, description = "Sale recorded", body = Sale),
        (status = 500, description = "Insert failed")
    )
)]
pub async fn create_sale(
    State(state): State<AppState>,
    Query(params): Query<CreateSaleQuery>,
) -> impl IntoResponse {
    let input = CreateSaleInput {
        total_price: params.total_price,
        quantity: params.quantity,
        product_id: params.product_id,
        category_id: params.category_id,
    };

    match state.sale_repo.create(input).await {
        Ok(sale) => (StatusCode::CREATED, Json(sale)).into_response(),
        Err(e) => error_response(e),
    }
}

async fn find_sales(state: &AppState, filter: SaleFilter) -> axum::response::Response {
    match state.sale_repo.find(filter).await {
        Ok(sales) => (StatusCode::OK, Json(sales)).into_response(),
        Err(e) => error_response(e),
    }
}

/// GET /sales/:start_date/:end_date - Sales created within the range
#[utoipa::path(
    get,
    path = "/sales/{start_date}/{end_date}",
    params(
        ("start_date" = String, Path, description = "Inclusive lower bound, e.g. 2023-01-01"),
        ("end_date" = String, Path, description = "Inclusive upper bound, e.g. 2023-12-31")
    ),
    responses((status = 200, description = "Matching sales", body = [Sale]))
)]
pub async fn get_sales_range(
    State(state): State<AppState>,
    Path((start_date, end_date)): Path<(String, String)>,
) -> impl IntoResponse {
    let filter = SaleFilter {
        period: Some(DateRange::new(start_date, end_date)),
        ..Default::default()
    };
    find_sales(&state, filter).await
}

/// GET /sales/product/:type_product - Sales of one product
#[utoipa::path(
    get,
    path = "/sales/product/{type_product}",
    params(("type_product" = i32, Path, description = "Product id")),
    responses((status = 200, description = "Matching sales", body = [Sale]))
)]
pub async fn get_sales_product(
    State(state): State<AppState>,
    Path(type_product): Path<i32>,
) -> impl IntoResponse {
    let filter = SaleFilter {
        product_id: Some(type_product),
        ..Default::default()
    };
    find_sales(&state, filter).await
}

/// GET /sales/category/:type_category - Sales in one category
#[utoipa::path(
    get,
    path = "/sales/category/{type_category}",
    params(("type_category" = i32, Path, description = "Category id")),
    responses((status = 200, description = "Matching sales", body = [Sale]))
)]
pub async fn get_sales_category(
    State(state): State<AppState>,
    Path(type_category): Path<i32>,
) -> impl IntoResponse {
    let filter = SaleFilter {
        category_id: Some(type_category),
        ..Default::default()
    };
    find_sales(&state, filter).await
}

/// GET /sales/:start_date/:end_date/:type_product/:type_category
#[utoipa::path(
    get,
    path = "/sales/{start_date}/{end_date}/{type_product}/{type_category}",
    params(
        ("start_date" = String, Path, description = "Inclusive lower bound"),
        ("end_date" = String, Path, description = "Inclusive upper bound"),
        ("type_product" = i32, Path, description = "Product id"),
        ("type_category" = i32, Path, description = "Category id")
    ),
    responses((status = 200, description = "Matching sales", body = [Sale]))
)]
pub async fn get_sales(
    State(state): State<AppState>,
    Path((start_date, end_date, type_product, type_category)): Path<(String, String, i32, i32)>,
) -> impl IntoResponse {
    let filter = SaleFilter {
        period: Some(DateRange::new(start_date, end_date)),
        product_id: Some(type_product),
        category_id: Some(type_category),
    };
    find_sales(&state, filter).await
}
