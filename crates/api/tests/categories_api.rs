//! Integration tests for category listing and per-category questions.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, get, seeded_store, ART, SCIENCE};
use trivia_core::memory::MemoryStore;

#[tokio::test]
async fn categories_are_keyed_by_id() {
    let app = common::build_test_app(common::empty_store());
    let response = get(app, "/categories").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["categories"]["1"], "Science");
    assert_eq!(json["categories"]["2"], "Art");
    assert_eq!(json["categories"]["3"], "Geography");
    assert_eq!(json["categories"].as_object().unwrap().len(), 3);
}

#[tokio::test]
async fn no_categories_returns_404() {
    let app = common::build_test_app(Arc::new(MemoryStore::new()));
    let response = get(app, "/categories").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 404);
}

#[tokio::test]
async fn category_questions_only_include_that_category() {
    let app = common::build_test_app(seeded_store(9).await);
    let uri = format!("/categories/{ART}/questions");
    let response = get(app, &uri).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["current_category"], "Art");
    assert_eq!(json["total_questions"], 3);
    let questions = json["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 3);
    assert!(questions.iter().all(|q| q["category"] == ART));
}

#[tokio::test]
async fn category_questions_are_paginated() {
    // 30 questions round-robin: 10 per category.
    let app = common::build_test_app(seeded_store(33).await);
    let uri = format!("/categories/{SCIENCE}/questions?page=2");
    let json = body_json(get(app, &uri).await).await;

    assert_eq!(json["total_questions"], 11);
    let questions = json["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0]["id"], 31);
}

#[tokio::test]
async fn empty_category_is_a_successful_empty_page() {
    let app = common::build_test_app(common::empty_store());
    let uri = format!("/categories/{SCIENCE}/questions");
    let response = get(app, &uri).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["total_questions"], 0);
    assert!(json["questions"].as_array().unwrap().is_empty());
    assert_eq!(json["current_category"], "Science");
}

#[tokio::test]
async fn unknown_category_returns_404() {
    let app = common::build_test_app(seeded_store(3).await);
    let response = get(app, "/categories/99/questions").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Category with id 99 not found");
}

#[tokio::test]
async fn non_numeric_category_id_returns_400() {
    let app = common::build_test_app(seeded_store(3).await);
    let response = get(app, "/categories/science/questions").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn storage_failure_returns_500_envelope() {
    let store = seeded_store(3).await;
    store.set_offline(true);
    let app = common::build_test_app(store);

    let response = get(app, "/categories").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 500);
}
