//! Persistence interfaces consumed by the service layer.
//!
//! Every method returns fully materialized collections. Implementations are
//! responsible for ordering lists by ascending id and for translating their
//! own failures into [`CoreError`] (usually [`CoreError::Storage`]).

use async_trait::async_trait;

use crate::error::CoreError;
use crate::question::{Category, NewQuestion, Question};
use crate::types::DbId;

/// Read/write access to trivia questions.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// All questions, ordered by id.
    async fn list_questions(&self) -> Result<Vec<Question>, CoreError>;

    /// A single question, or `None` if no question has this id.
    async fn find_question(&self, id: DbId) -> Result<Option<Question>, CoreError>;

    /// Questions whose category is `category_id`, ordered by id.
    async fn list_questions_by_category(
        &self,
        category_id: DbId,
    ) -> Result<Vec<Question>, CoreError>;

    /// Questions whose text contains `term`, case-insensitively, ordered by id.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, CoreError>;

    /// Insert a question and return it with its assigned id.
    ///
    /// A category that does not exist is reported as [`CoreError::Validation`].
    async fn insert_question(&self, input: &NewQuestion) -> Result<Question, CoreError>;

    /// Delete a question. Returns `false` if nothing was deleted.
    async fn delete_question(&self, id: DbId) -> Result<bool, CoreError>;
}

/// Read-only access to question categories.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// All categories, ordered by id.
    async fn list_categories(&self) -> Result<Vec<Category>, CoreError>;

    /// A single category, or `None` if no category has this id.
    async fn find_category(&self, id: DbId) -> Result<Option<Category>, CoreError>;
}

/// A complete trivia backend: both stores plus a liveness probe.
#[async_trait]
pub trait Store: QuestionStore + CategoryStore {
    /// Cheap round-trip proving the backend is reachable.
    async fn health_check(&self) -> Result<(), CoreError>;
}
