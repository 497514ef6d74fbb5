//! Book endpoints, nested under their owning author where ownership matters.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;

use folio_core::api::types::ApiResponse;
use folio_core::model::{Book, NewBook, UpdateBook};

use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<Book>>>> {
    let books = state.catalog().list_books().await?;
    if books.is_empty() {
        return Err(AppError::not_found("cannot find any books "));
    }

    Ok(Json(ApiResponse::success(books)))
}

pub async fn get_book(
    State(state): State<AppState>,
    Path((author_id, book_id)): Path<(i64, i64)>,
) -> AppResult<Json<ApiResponse<Book>>> {
    let book = state.catalog().get_book(author_id, book_id).await?;

    Ok(Json(ApiResponse::success(book)))
}

pub async fn create_book(
    State(state): State<AppState>,
    Path(author_id): Path<i64>,
    Json(request): Json<NewBook>,
) -> AppResult<(StatusCode, Json<ApiResponse<Book>>)> {
    let book = state.catalog().create_book(author_id, request).await?;

    info!(
        target: "catalog.books",
        book_id = book.id,
        author_id,
        action = "create"
    );

    Ok((StatusCode::CREATED, Json(ApiResponse::success(book))))
}

// The author segment routes the request but does not scope the update; the
// payload's author reference decides ownership.
pub async fn update_book(
    State(state): State<AppState>,
    Path((_author_id, book_id)): Path<(i64, i64)>,
    Json(request): Json<UpdateBook>,
) -> AppResult<Json<ApiResponse<Book>>> {
    let book = state.catalog().update_book(book_id, request).await?;

    info!(
        target: "catalog.books",
        book_id,
        action = "update"
    );

    Ok(Json(ApiResponse::with_message(
        format!("book with id {} has been successfully updated", book_id),
        book,
    )))
}

pub async fn delete_book(
    State(state): State<AppState>,
    Path((_author_id, book_id)): Path<(i64, i64)>,
) -> AppResult<Json<ApiResponse<Book>>> {
    let book = state.catalog().delete_book(book_id).await?;

    info!(
        target: "catalog.books",
        book_id,
        action = "delete"
    );

    Ok(Json(ApiResponse::with_message(
        format!("book with id {} has been successfully deleted", book_id),
        book,
    )))
}
