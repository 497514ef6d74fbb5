//! Author collection endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;

use folio_core::api::types::ApiResponse;
use folio_core::model::{Author, NewAuthor};

use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

pub async fn list_authors(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Author>>>> {
    let authors = state.catalog().list_authors().await?;
    if authors.is_empty() {
        return Err(AppError::not_found("cannot find any authors "));
    }

    Ok(Json(ApiResponse::success(authors)))
}

pub async fn get_author(
    State(state): State<AppState>,
    Path(author_id): Path<i64>,
) -> AppResult<Json<ApiResponse<Author>>> {
    let author = state.catalog().get_author(author_id).await?;

    Ok(Json(ApiResponse::success(author)))
}

pub async fn create_author(
    State(state): State<AppState>,
    Json(request): Json<NewAuthor>,
) -> AppResult<(StatusCode, Json<ApiResponse<Author>>)> {
    let author = state.catalog().create_author(request).await?;

    info!(
        target: "catalog.authors",
        author_id = author.id,
        action = "create"
    );

    Ok((StatusCode::CREATED, Json(ApiResponse::success(author))))
}

pub async fn update_author(
    State(state): State<AppState>,
    Path(author_id): Path<i64>,
    Json(request): Json<NewAuthor>,
) -> AppResult<Json<ApiResponse<Author>>> {
    let author = state.catalog().update_author(author_id, request).await?;

    info!(
        target: "catalog.authors",
        author_id,
        action = "update"
    );

    Ok(Json(ApiResponse::with_message(
        format!("author with id {} has been successfully updated", author_id),
        author,
    )))
}

pub async fn delete_author(
    State(state): State<AppState>,
    Path(author_id): Path<i64>,
) -> AppResult<Json<ApiResponse<Author>>> {
    let author = state.catalog().delete_author(author_id).await?;

    info!(
        target: "catalog.authors",
        author_id,
        action = "delete"
    );

    Ok(Json(ApiResponse::with_message(
        format!("author with id {} has been successfully deleted", author_id),
        author,
    )))
}
