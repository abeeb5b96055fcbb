use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::IntoParams;

use super::error_response;
use crate::domain::CreateCategoryInput;
use crate::infrastructure::AppState;
use crate::models::Category;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CreateCategoryQuery {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[utoipa::path(
    post,
    path = "/post/category",
    params(CreateCategoryQuery),
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 500, description = "Insert failed, e.g. duplicate name")
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    Query(params): Query<CreateCategoryQuery>,
) -> impl IntoResponse {
    let input = CreateCategoryInput {
        name: params.name,
        description: params.description,
    };

    match state.category_repo.create(input).await {
        Ok(category) => (StatusCode::CREATED, Json(category)).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/categories",
    responses((status = 200, description = "All categories", body = [Category]))
)]
pub async fn list_categories(State(state): State<AppState>) -> impl IntoResponse {
    match state.category_repo.find_all().await {
        Ok(categories) => (StatusCode::OK, Json(categories)).into_response(),
        Err(e) => error_response(e),
    }
}
