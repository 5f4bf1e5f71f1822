//! Route definitions for quiz play.
//!
//! Mounted at `/quizzes` by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::quizzes;
use crate::state::AppState;

/// Quiz routes.
///
/// ```text
/// POST   /                  -> next_quiz_question
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(quizzes::next_quiz_question))
}
