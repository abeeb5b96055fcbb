//! Revenue recording and lookups.
//!
//! Rows come back verbatim: no daily/monthly rollup and no sums. The stored
//! `revenue` figure is whatever the caller supplied.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use utoipa::IntoParams;

use super::error_response;
use crate::domain::{CreateRevenueInput, DateRange, RevenueFilter};
use crate::infrastructure::AppState;
use crate::models::Revenue;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CreateRevenueQuery {
    #[serde(rename = "revenueSales")]
    pub revenue_sales: Option<i32>,
    #[serde(rename = "revenueOtherActivities")]
    pub revenue_other_activities: Option<i32>,
    pub revenue: Option<i32>,
    pub sale_id: Option<i32>,
    pub category_id: Option<i32>,
}

#[utoipa::path(
    post,
    path = "/post/revenue",
    params(CreateRevenueQuery),
    responses(
        (status = 201, description = "Revenue recorded", body = Revenue),
        (status = 500, description = "Insert failed")
    )
)]
pub async fn create_revenue(
    State(state): State<AppState>,
    Query(params): Query<CreateRevenueQuery>,
) -> impl IntoResponse {
    let input = CreateRevenueInput {
        revenue_sales: params.revenue_sales,
        revenue_other_activities: params.revenue_other_activities,
        revenue: params.revenue,
        sale_id: params.sale_id,
        category_id: params.category_id,
    };

    match state.revenue_repo.create(input).await {
        Ok(revenue) => (StatusCode::CREATED, Json(revenue)).into_response(),
        Err(e) => error_response(e),
    }
}

async fn find_revenue(state: &AppState, filter: RevenueFilter) -> Response {
    match state.revenue_repo.find(filter).await {
        Ok(rows) => (StatusCode::OK, Json(rows)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/revenue/{start_date}/{end_date}",
    params(
        ("start_date" = String, Path, description = "Inclusive lower bound, e.g. 2023-01-01"),
        ("end_date" = String, Path, description = "Inclusive upper bound, e.g. 2023-12-31")
    ),
    responses((status = 200, description = "Matching revenue rows", body = [Revenue]))
)]
pub async fn get_revenue_period(
    State(state): State<AppState>,
    Path((start_date, end_date)): Path<(String, String)>,
) -> impl IntoResponse {
    let filter = RevenueFilter {
        period: Some(DateRange::new(start_date, end_date)),
        category_id: None,
    };
    find_revenue(&state, filter).await
}

#[utoipa::path(
    get,
    path = "/revenue/category/{type_category}",
    params(("type_category" = i32, Path, description = "Category id")),
    responses((status = 200, description = "Matching revenue rows", body = [Revenue]))
)]
pub async fn get_revenue_category(
    State(state): State<AppState>,
    Path(type_category): Path<i32>,
) -> impl IntoResponse {
    let filter = RevenueFilter {
        period: None,
        category_id: Some(type_category),
    };
    find_revenue(&state, filter).await
}

#[utoipa::path(
    get,
    path = "/revenue/{start_date}/{end_date}/{type_category}",
    params(
        ("start_date" = String, Path, description = "Inclusive lower bound"),
        ("end_date" = String, Path, description = "Inclusive upper bound"),
        ("type_category" = i32, Path, description = "Category id")
    ),
    responses((status = 200, description = "Matching revenue rows", body = [Revenue]))
)]
pub async fn get_revenue(
    State(state): State<AppState>,
    Path((start_date, end_date, type_category)): Path<(String, String, i32)>,
) -> impl IntoResponse {
    let filter = RevenueFilter {
        period: Some(DateRange::new(start_date, end_date)),
        category_id: Some(type_category),
    };
    find_revenue(&state, filter).await
}
