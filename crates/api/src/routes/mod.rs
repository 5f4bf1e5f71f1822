pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

use axum::Router;

use crate::state::AppState;

/// Build the trivia route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                       list categories
/// /categories/{id}/questions        questions in a category
///
/// /questions                        list (GET), search or create (POST)
/// /questions/{id}                   delete
///
/// /quizzes                          next quiz question (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/questions", questions::router())
        .nest("/quizzes", quizzes::router())
}
