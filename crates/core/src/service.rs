//! Trivia operations composed from the store interfaces.
//!
//! Each function fetches what it needs from the store, applies pagination or
//! quiz selection, and returns a plain serializable result. Empty results
//! that the API reports as 404 are surfaced here as [`CoreError`] values so
//! every caller gets the same behaviour.

use std::collections::HashSet;

use rand::Rng;
use serde::Serialize;

use crate::error::CoreError;
use crate::pagination::paginate;
use crate::question::{category_map, CategoryMap, Question, QuestionDraft};
use crate::quiz::{pick_unseen, QuizCategory};
use crate::store::{CategoryStore, QuestionStore};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// One page of the full question listing.
#[derive(Debug, Serialize)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
}

/// One page of search results.
#[derive(Debug, Serialize)]
pub struct SearchPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Outcome of a successful question creation.
#[derive(Debug, Serialize)]
pub struct CreatedQuestion {
    pub created: DbId,
    pub question_created: String,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// One page of questions from a single category.
#[derive(Debug, Serialize)]
pub struct CategoryPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// All categories as an id -> label mapping. Fails if there are none.
pub async fn list_categories<S>(store: &S) -> Result<CategoryMap, CoreError>
where
    S: CategoryStore + ?Sized,
{
    let categories = store.list_categories().await?;
    if categories.is_empty() {
        return Err(CoreError::NoResults("No categories found".into()));
    }
    Ok(category_map(categories))
}

// ---------------------------------------------------------------------------
// Questions
// ---------------------------------------------------------------------------

/// A page of all questions plus the category mapping.
pub async fn list_questions<S>(store: &S, page: i64) -> Result<QuestionPage, CoreError>
where
    S: QuestionStore + CategoryStore + ?Sized,
{
    let all = store.list_questions().await?;
    let questions = paginate(page, &all);
    if questions.is_empty() {
        return Err(CoreError::NoResults(format!("No questions on page {page}")));
    }

    let categories = category_map(store.list_categories().await?);

    Ok(QuestionPage {
        questions,
        total_questions: all.len(),
        categories,
    })
}

/// A page of questions whose text contains `term`.
///
/// `total_questions` counts all matches, not just the returned page.
pub async fn search_questions<S>(
    store: &S,
    term: &str,
    page: i64,
) -> Result<SearchPage, CoreError>
where
    S: QuestionStore + ?Sized,
{
    let matches = store.search_questions(term).await?;
    if matches.is_empty() {
        return Err(CoreError::NoResults(format!("No questions match '{term}'")));
    }

    Ok(SearchPage {
        questions: paginate(page, &matches),
        total_questions: matches.len(),
    })
}

/// Validate and insert a question, then return a fresh listing page.
pub async fn create_question<S>(
    store: &S,
    draft: QuestionDraft,
    page: i64,
) -> Result<CreatedQuestion, CoreError>
where
    S: QuestionStore + ?Sized,
{
    let input = draft.validate()?;
    let question = store.insert_question(&input).await?;

    let all = store.list_questions().await?;

    Ok(CreatedQuestion {
        created: question.id,
        question_created: question.question,
        questions: paginate(page, &all),
        total_questions: all.len(),
    })
}

/// Delete a question by id and return that id.
pub async fn delete_question<S>(store: &S, id: DbId) -> Result<DbId, CoreError>
where
    S: QuestionStore + ?Sized,
{
    let not_found = || CoreError::NotFound {
        entity: "Question",
        id,
    };

    store.find_question(id).await?.ok_or_else(not_found)?;

    // A concurrent delete may win between the lookup and this call.
    if !store.delete_question(id).await? {
        return Err(not_found());
    }

    Ok(id)
}

/// A page of questions belonging to one category.
///
/// An existing category with no questions on the requested page is not an
/// error; the page is simply empty.
pub async fn questions_by_category<S>(
    store: &S,
    category_id: DbId,
    page: i64,
) -> Result<CategoryPage, CoreError>
where
    S: QuestionStore + CategoryStore + ?Sized,
{
    let category = store
        .find_category(category_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Category",
            id: category_id,
        })?;

    let questions = store.list_questions_by_category(category.id).await?;

    Ok(CategoryPage {
        questions: paginate(page, &questions),
        total_questions: questions.len(),
        current_category: category.kind,
    })
}

// ---------------------------------------------------------------------------
// Quiz
// ---------------------------------------------------------------------------

/// Draw the next quiz question not yet served in this play-through.
///
/// `None` means the pool is used up and the quiz is over.
pub async fn next_quiz_question<S, R>(
    store: &S,
    category: QuizCategory,
    previous: &[DbId],
    rng: &mut R,
) -> Result<Option<Question>, CoreError>
where
    S: QuestionStore + ?Sized,
    R: Rng + ?Sized,
{
    let pool = match category {
        QuizCategory::All => store.list_questions().await?,
        QuizCategory::Only(id) => store.list_questions_by_category(id).await?,
    };

    let previous: HashSet<DbId> = previous.iter().copied().collect();
    let next = pick_unseen(&pool, &previous, rng).cloned();

    if next.is_none() {
        tracing::debug!(
            ?category,
            pool_size = pool.len(),
            served = previous.len(),
            "Quiz pool exhausted",
        );
    }

    Ok(next)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
