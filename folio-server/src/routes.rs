//! Router assembly for the catalog API.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use folio_core::api::routes::catalog;

use crate::handlers::{authors, books, ops};
use crate::infra::app_state::AppState;

/// Builds the application router over the given state.
///
/// The static `/api/authors/books/` collection route must coexist with the
/// `{author_id}` capture one segment to its left; the router prefers the
/// literal segment, so the books listing never shadows an author lookup.
pub fn create_app(state: AppState) -> Router {
    let api = Router::new()
        .route(
            catalog::authors::COLLECTION,
            get(authors::list_authors).post(authors::create_author),
        )
        .route(
            catalog::authors::ITEM,
            get(authors::get_author)
                .put(authors::update_author)
                .delete(authors::delete_author),
        )
        .route(catalog::authors::books::COLLECTION, get(books::list_books))
        .route(catalog::authors::books::OWNED, post(books::create_book))
        .route(
            catalog::authors::books::ITEM,
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        );

    Router::new()
        .route("/ping", get(ops::ping_handler))
        .route("/health", get(ops::health_handler))
        .merge(api)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
