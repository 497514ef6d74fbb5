use axum::http::StatusCode;
use axum_test::TestServer;
use folio_core::api::routes::{catalog, helpers};
use serde_json::{Value, json};

#[path = "support/mod.rs"]
mod support;

use support::build_test_server;

fn owned_books_path(author_id: i64) -> String {
    helpers::replace_param(
        catalog::authors::books::OWNED,
        "{author_id}",
        author_id.to_string(),
    )
}

fn book_path(author_id: i64, book_id: i64) -> String {
    helpers::replace_params(
        catalog::authors::books::ITEM,
        &[
            ("{author_id}", author_id.to_string()),
            ("{book_id}", book_id.to_string()),
        ],
    )
}

async fn create_author(server: &TestServer, first: &str, last: &str) -> i64 {
    let response = server
        .post(catalog::authors::COLLECTION)
        .json(&json!({
            "first_name": first,
            "last_name": last
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    body["data"]["id"].as_i64().expect("author id assigned")
}

async fn create_book(server: &TestServer, author_id: i64, name: &str) -> Value {
    let response = server
        .post(&owned_books_path(author_id))
        .json(&json!({
            "name": name,
            "description": format!("about {name}"),
            "isbn": "0000000000"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.json()
}

#[tokio::test]
async fn listing_empty_books_answers_404() {
    let server = build_test_server();

    let response = server.get(catalog::authors::books::COLLECTION).await;

    // The literal books segment must win over the author id capture;
    // a routing mixup would surface here as a path rejection instead.
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["message"], "cannot find any books ");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn created_book_round_trips_through_get() {
    let server = build_test_server();

    let martin = create_author(&server, "George", "Martin").await;
    let created = create_book(&server, martin, "Fire & Blood").await;
    assert_eq!(created["message"], "success");
    assert_eq!(created["data"]["id"], 1);
    assert_eq!(created["data"]["author_id"], martin);

    let response = server.get(&book_path(martin, 1)).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "success");
    assert_eq!(body["data"], created["data"]);

    let listing = server.get(catalog::authors::books::COLLECTION).await;
    listing.assert_status_ok();
    let listing_body: Value = listing.json();
    assert_eq!(listing_body["data"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn creating_book_for_missing_author_answers_404() {
    let server = build_test_server();

    let response = server
        .post(&owned_books_path(9))
        .json(&json!({
            "name": "Dune",
            "description": "desert planet",
            "isbn": "0441013597"
        }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["message"], "author with id 9 not found");
}

#[tokio::test]
async fn duplicate_book_name_answers_200_with_failure_message() {
    let server = build_test_server();

    let martin = create_author(&server, "George", "Martin").await;
    let herbert = create_author(&server, "Frank", "Herbert").await;
    create_book(&server, martin, "Dune").await;

    let response = server
        .post(&owned_books_path(herbert))
        .json(&json!({
            "name": "Dune",
            "description": "desert planet",
            "isbn": "0441013597"
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "book with name Dune already exists");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn book_of_another_author_answers_404() {
    let server = build_test_server();

    let martin = create_author(&server, "George", "Martin").await;
    let herbert = create_author(&server, "Frank", "Herbert").await;
    create_book(&server, martin, "Fire & Blood").await;

    let response = server.get(&book_path(herbert, 1)).await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["message"], "cannot find book with id 1");
}

#[tokio::test]
async fn updating_book_reports_success_message() {
    let server = build_test_server();

    let martin = create_author(&server, "George", "Martin").await;
    create_book(&server, martin, "Fire & Blood").await;

    let response = server
        .put(&book_path(martin, 1))
        .json(&json!({
            "name": "Fire & Blood",
            "description": "revised edition",
            "isbn": "8675309",
            "author_id": martin
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "book with id 1 has been successfully updated");
    assert_eq!(body["data"]["isbn"], "8675309");
    assert_eq!(body["data"]["description"], "revised edition");
}

#[tokio::test]
async fn updating_missing_book_answers_404() {
    let server = build_test_server();

    let martin = create_author(&server, "George", "Martin").await;

    let response = server
        .put(&book_path(martin, 5))
        .json(&json!({
            "name": "Dune",
            "description": "desert planet",
            "isbn": "0441013597",
            "author_id": martin
        }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["message"], "book with id 5 not found");
}

#[tokio::test]
async fn deleting_book_keeps_author() {
    let server = build_test_server();

    let martin = create_author(&server, "George", "Martin").await;
    let created = create_book(&server, martin, "Fire & Blood").await;

    let response = server.delete(&book_path(martin, 1)).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "book with id 1 has been successfully deleted");
    assert_eq!(body["data"], created["data"]);

    let gone = server.get(&book_path(martin, 1)).await;
    gone.assert_status(StatusCode::NOT_FOUND);

    let author = server
        .get(&helpers::replace_param(
            catalog::authors::ITEM,
            "{author_id}",
            martin.to_string(),
        ))
        .await;
    author.assert_status_ok();
}

#[tokio::test]
async fn deleting_author_cascades_to_books() {
    let server = build_test_server();

    let martin = create_author(&server, "George", "Martin").await;
    create_book(&server, martin, "Fire & Blood").await;
    create_book(&server, martin, "A Dance with Dragons").await;

    let response = server
        .delete(&helpers::replace_param(
            catalog::authors::ITEM,
            "{author_id}",
            martin.to_string(),
        ))
        .await;
    response.assert_status_ok();

    let listing = server.get(catalog::authors::books::COLLECTION).await;
    listing.assert_status(StatusCode::NOT_FOUND);
    let body: Value = listing.json();
    assert_eq!(body["message"], "cannot find any books ");
}
