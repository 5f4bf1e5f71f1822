//! Handlers for listing, searching, creating and deleting questions.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use trivia_core::question::QuestionDraft;
use trivia_core::service;
use trivia_core::types::DbId;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::PageParams;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// Body of `POST /questions`.
///
/// The presence of `searchTerm` (even as an empty string) selects search;
/// otherwise the remaining fields describe a question to create.
#[derive(Debug, Deserialize)]
pub struct QuestionsRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    #[serde(flatten)]
    pub draft: QuestionDraft,
}

/// Payload for `DELETE /questions/{id}`.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub deleted: DbId,
}

// ---------------------------------------------------------------------------
// GET /questions
// ---------------------------------------------------------------------------

/// List one page of all questions together with the category mapping.
pub async fn list_questions(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
) -> AppResult<impl IntoResponse> {
    let page = service::list_questions(state.store.as_ref(), params.page()).await?;

    Ok(Json(SuccessResponse::new(page)))
}

// ---------------------------------------------------------------------------
// POST /questions
// ---------------------------------------------------------------------------

/// Search questions or create a new one, depending on the body.
pub async fn search_or_create_question(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
    AppJson(input): AppJson<QuestionsRequest>,
) -> AppResult<Response> {
    let store = state.store.as_ref();

    if let Some(term) = input.search_term {
        let results = service::search_questions(store, &term, params.page()).await?;
        tracing::debug!(
            term = %term,
            matches = results.total_questions,
            "Question search",
        );
        return Ok(Json(SuccessResponse::new(results)).into_response());
    }

    let created = service::create_question(store, input.draft, params.page()).await?;

    tracing::info!(
        question_id = created.created,
        total_questions = created.total_questions,
        "Question created",
    );

    Ok(Json(SuccessResponse::new(created)).into_response())
}

// ---------------------------------------------------------------------------
// DELETE /questions/{id}
// ---------------------------------------------------------------------------

/// Delete a question by id.
pub async fn delete_question(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = service::delete_question(state.store.as_ref(), id).await?;

    tracing::info!(question_id = deleted, "Question deleted");

    Ok(Json(SuccessResponse::new(DeletedResponse { deleted })))
}
