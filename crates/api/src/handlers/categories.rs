//! Handlers for categories and per-category question listings.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use trivia_core::question::CategoryMap;
use trivia_core::service;
use trivia_core::types::DbId;

use crate::error::AppResult;
use crate::extract::{AppPath, AppQuery};
use crate::query::PageParams;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// Payload for `GET /categories`.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: CategoryMap,
}

// ---------------------------------------------------------------------------
// GET /categories
// ---------------------------------------------------------------------------

/// List all categories as an id -> label mapping.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = service::list_categories(state.store.as_ref()).await?;

    Ok(Json(SuccessResponse::new(CategoriesResponse { categories })))
}

// ---------------------------------------------------------------------------
// GET /categories/{id}/questions
// ---------------------------------------------------------------------------

/// List one page of the questions in a category.
pub async fn list_category_questions(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppQuery(params): AppQuery<PageParams>,
) -> AppResult<impl IntoResponse> {
    let page = service::questions_by_category(state.store.as_ref(), id, params.page()).await?;

    tracing::debug!(
        category_id = id,
        page = params.page(),
        returned = page.questions.len(),
        "Listed category questions",
    );

    Ok(Json(SuccessResponse::new(page)))
}
