use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;

use super::error_response;
use crate::domain::{
    CreateInventoryInput, DomainError, LOW_STOCK_THRESHOLD, UpdateInventoryInput,
};
use crate::infrastructure::AppState;
use crate::models::Inventory;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CreateInventoryQuery {
    /// Defaults to 0
    pub quantity: Option<i32>,
    pub product_id: Option<i32>,
    pub category_id: Option<i32>,
}

/// Partial update. Zero-valued fields are ignored.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UpdateInventoryQuery {
    /// Optional; must match the path id when given
    pub id: Option<i32>,
    pub quantity: Option<i32>,
    pub product_id: Option<i32>,
    pub category_id: Option<i32>,
}

// List all inventory rows
#[utoipa::path(
    get,
    path = "/inventory",
    responses((status = 200, description = "All inventory rows", body = [Inventory]))
)]
pub async fn get_inventory(State(state): State<AppState>) -> impl IntoResponse {
    match state.inventory_repo.find_all().await {
        Ok(rows) => (StatusCode::OK, Json(rows)).into_response(),
        Err(e) => error_response(e),
    }
}

// Create an inventory row
#[utoipa::path(
    post,
    path = "/post/inventory",
    params(CreateInventoryQuery),
    responses((status = 201, description = "Inventory row created", body = Inventory))
)]
pub async fn create_inventory(
    State(state): State<AppState>,
    Query(params): Query<CreateInventoryQuery>,
) -> impl IntoResponse {
    let input = CreateInventoryInput {
        quantity: params.quantity,
        product_id: params.product_id,
        category_id: params.category_id,
    };

    match state.inventory_repo.create(input).await {
        Ok(row) => (StatusCode::CREATED, Json(row)).into_response(),
        Err(e) => error_response(e),
    }
}

// Update an inventory row
#[utoipa::path(
    put,
    path = "/inventory/{inventory_id}",
    params(
        ("inventory_id" = i32, Path, description = "Inventory id"),
        UpdateInventoryQuery
    ),
    responses(
        (status = 200, description = "Updated row", body = Inventory),
        (status = 400, description = "Query id disagrees with the path id"),
        (status = 404, description = "Inventory not found")
    )
)]
pub async fn update_inventory(
    State(state): State<AppState>,
    Path(inventory_id): Path<i32>,
    Query(params): Query<UpdateInventoryQuery>,
) -> impl IntoResponse {
    if let Some(id) = params.id.filter(|id| *id != inventory_id) {
        return error_response(DomainError::Validation(format!(
            "Inventory id {} does not match path id {}",
            id, inventory_id
        )));
    }

    let input = UpdateInventoryInput {
        quantity: params.quantity,
        product_id: params.product_id,
        category_id: params.category_id,
    };

    match state.inventory_repo.update(inventory_id, input).await {
        Ok(row) => {
            tracing::info!("Inventory {} now at quantity {}", row.id, row.quantity);
            (StatusCode::OK, Json(row)).into_response()
        }
        Err(DomainError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Inventory not found"})),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// Stock alerts for rows holding fewer than five units
#[utoipa::path(
    get,
    path = "/inventory/low/stocks",
    responses((status = 200, description = "Rows with quantity below 5", body = [Inventory]))
)]
pub async fn low_stock_inventory(State(state): State<AppState>) -> impl IntoResponse {
    match state.inventory_repo.find_below(LOW_STOCK_THRESHOLD).await {
        Ok(rows) => (StatusCode::OK, Json(rows)).into_response(),
        Err(e) => error_response(e),
    }
}
