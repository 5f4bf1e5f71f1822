//! Handler for quiz play.
//!
//! The client keeps the quiz state: every request resends the ids already
//! served, and the server answers with one unseen question or, once the pool
//! is exhausted, with no question at all.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use trivia_core::error::CoreError;
use trivia_core::question::Question;
use trivia_core::quiz::QuizCategory;
use trivia_core::service;
use trivia_core::types::{DbId, LenientInt};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// Body of `POST /quizzes`.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Option<Vec<DbId>>,
    pub quiz_category: Option<QuizCategoryParam>,
}

/// The `quiz_category` object. Its `type` label is ignored.
#[derive(Debug, Deserialize)]
pub struct QuizCategoryParam {
    pub id: Option<LenientInt>,
}

/// Payload for `POST /quizzes`. `question` is omitted when the quiz is over.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
}

// ---------------------------------------------------------------------------
// POST /quizzes
// ---------------------------------------------------------------------------

/// Serve the next unseen quiz question.
pub async fn next_quiz_question(
    State(state): State<AppState>,
    AppJson(input): AppJson<QuizRequest>,
) -> AppResult<impl IntoResponse> {
    let previous = input
        .previous_questions
        .ok_or_else(|| CoreError::BadRequest("previous_questions is required".into()))?;
    let LenientInt(category_id) = input
        .quiz_category
        .and_then(|c| c.id)
        .ok_or_else(|| CoreError::BadRequest("quiz_category.id is required".into()))?;

    let category = QuizCategory::from_id(category_id);
    let mut rng = StdRng::from_os_rng();

    let question =
        service::next_quiz_question(state.store.as_ref(), category, &previous, &mut rng).await?;

    match &question {
        Some(q) => tracing::debug!(question_id = q.id, ?category, "Quiz question served"),
        None => tracing::info!(
            ?category,
            served = previous.len(),
            "Quiz finished, no unseen questions left",
        ),
    }

    Ok(Json(SuccessResponse::new(QuizResponse { question })))
}
