//! Integration tests for `POST /quizzes`.

mod common;

use std::collections::HashSet;

use axum::http::StatusCode;
use common::{body_json, empty_store, post_json, seeded_store, ART, SCIENCE};
use serde_json::{json, Value};
use trivia_core::question::NewQuestion;
use trivia_core::store::QuestionStore;

fn quiz_body(previous: &[i64], category_id: Value) -> Value {
    json!({
        "previous_questions": previous,
        "quiz_category": { "type": "Art", "id": category_id },
    })
}

#[tokio::test]
async fn serves_the_only_unseen_question_in_category() {
    let store = empty_store();
    for i in 1..=3 {
        store
            .insert_question(&NewQuestion {
                question: format!("Art question {i}?"),
                answer: format!("Art answer {i}"),
                difficulty: 2,
                category: ART,
            })
            .await
            .unwrap();
    }
    let app = common::build_test_app(store);

    for _ in 0..10 {
        let response = post_json(app.clone(), "/quizzes", quiz_body(&[1, 2], json!(ART))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["question"]["id"], 3);
        assert_eq!(json["question"]["category"], ART);
    }
}

#[tokio::test]
async fn exhausted_pool_omits_question() {
    let app = common::build_test_app(seeded_store(2).await);
    let response = post_json(app, "/quizzes", quiz_body(&[1, 2], json!(0))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, json!({ "success": true }));
}

#[tokio::test]
async fn category_zero_draws_from_every_category() {
    let app = common::build_test_app(seeded_store(6).await);
    let mut categories = HashSet::new();
    let mut previous = Vec::new();

    loop {
        let response = post_json(app.clone(), "/quizzes", quiz_body(&previous, json!(0))).await;
        let json = body_json(response).await;
        let Some(question) = json.get("question") else {
            break;
        };
        categories.insert(question["category"].as_i64().unwrap());
        previous.push(question["id"].as_i64().unwrap());
    }

    assert_eq!(previous.len(), 6);
    assert_eq!(categories.len(), 3);
}

#[tokio::test]
async fn play_through_never_repeats_a_question() {
    // 10 Science questions among 30.
    let app = common::build_test_app(seeded_store(30).await);
    let mut previous: Vec<i64> = Vec::new();

    loop {
        let response =
            post_json(app.clone(), "/quizzes", quiz_body(&previous, json!(SCIENCE))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let Some(question) = json.get("question") else {
            break;
        };
        assert_eq!(question["category"], SCIENCE);
        let id = question["id"].as_i64().unwrap();
        assert!(!previous.contains(&id), "question {id} served twice");
        previous.push(id);
    }

    assert_eq!(previous.len(), 10);
}

#[tokio::test]
async fn category_id_may_be_a_string() {
    let app = common::build_test_app(seeded_store(3).await);
    let response = post_json(app, "/quizzes", quiz_body(&[], json!("2"))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["question"]["id"], 2);
}

#[tokio::test]
async fn unknown_category_ends_the_quiz_immediately() {
    let app = common::build_test_app(seeded_store(3).await);
    let response = post_json(app, "/quizzes", quiz_body(&[], json!(42))).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await.get("question").is_none());
}

// ---------------------------------------------------------------------------
// Malformed requests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_previous_questions_returns_400() {
    let app = common::build_test_app(seeded_store(3).await);
    let body = json!({ "quiz_category": { "id": 0 } });
    let response = post_json(app, "/quizzes", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 400);
}

#[tokio::test]
async fn missing_quiz_category_returns_400() {
    let app = common::build_test_app(seeded_store(3).await);
    let response = post_json(app, "/quizzes", json!({ "previous_questions": [] })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn quiz_category_without_id_returns_400() {
    let app = common::build_test_app(seeded_store(3).await);
    let body = json!({ "previous_questions": [], "quiz_category": { "type": "Art" } });
    let response = post_json(app, "/quizzes", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn storage_failure_returns_500() {
    let store = seeded_store(3).await;
    store.set_offline(true);
    let app = common::build_test_app(store);

    let response = post_json(app, "/quizzes", quiz_body(&[], json!(0))).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
