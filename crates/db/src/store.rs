//! [`PgStore`]: the core store traits backed by PostgreSQL.

use async_trait::async_trait;
use trivia_core::error::CoreError;
use trivia_core::question::{Category, NewQuestion, Question};
use trivia_core::store::{CategoryStore, QuestionStore, Store};
use trivia_core::types::DbId;

use crate::repositories::{CategoryRepo, QuestionRepo};
use crate::DbPool;

/// PostgreSQL SQLSTATE for foreign-key violations.
const FOREIGN_KEY_VIOLATION: &str = "23503";
/// PostgreSQL SQLSTATE for check-constraint violations.
const CHECK_VIOLATION: &str = "23514";

/// Store implementation over a shared connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Translate a sqlx error into the domain taxonomy.
///
/// - Foreign-key violations (question for a missing category) and check
///   violations (difficulty out of range) are the client's fault and map to
///   [`CoreError::Validation`].
/// - Everything else maps to [`CoreError::Storage`] and is logged.
pub fn map_sqlx_error(err: sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        match db_err.code().as_deref() {
            Some(FOREIGN_KEY_VIOLATION) => {
                let constraint = db_err.constraint().unwrap_or("unknown");
                return CoreError::Validation(format!(
                    "Referenced record does not exist ({constraint})"
                ));
            }
            Some(CHECK_VIOLATION) => {
                let constraint = db_err.constraint().unwrap_or("unknown");
                return CoreError::Validation(format!(
                    "Value violates check constraint: {constraint}"
                ));
            }
            _ => {}
        }
    }

    tracing::error!(error = %err, "Database error");
    CoreError::Storage(err.to_string())
}

#[async_trait]
impl QuestionStore for PgStore {
    async fn list_questions(&self) -> Result<Vec<Question>, CoreError> {
        let rows = QuestionRepo::list(&self.pool).await.map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn find_question(&self, id: DbId) -> Result<Option<Question>, CoreError> {
        let row = QuestionRepo::find_by_id(&self.pool, id)
            .await
            .map_err(map_sqlx_error)?;
        Ok(row.map(Question::from))
    }

    async fn list_questions_by_category(
        &self,
        category_id: DbId,
    ) -> Result<Vec<Question>, CoreError> {
        let rows = QuestionRepo::list_by_category(&self.pool, category_id)
            .await
            .map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, CoreError> {
        let rows = QuestionRepo::search(&self.pool, term)
            .await
            .map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn insert_question(&self, input: &NewQuestion) -> Result<Question, CoreError> {
        let row = QuestionRepo::create(&self.pool, input)
            .await
            .map_err(map_sqlx_error)?;
        Ok(row.into())
    }

    async fn delete_question(&self, id: DbId) -> Result<bool, CoreError> {
        QuestionRepo::delete(&self.pool, id)
            .await
            .map_err(map_sqlx_error)
    }
}

#[async_trait]
impl CategoryStore for PgStore {
    async fn list_categories(&self) -> Result<Vec<Category>, CoreError> {
        let rows = CategoryRepo::list(&self.pool).await.map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn find_category(&self, id: DbId) -> Result<Option<Category>, CoreError> {
        let row = CategoryRepo::find_by_id(&self.pool, id)
            .await
            .map_err(map_sqlx_error)?;
        Ok(row.map(Category::from))
    }
}

#[async_trait]
impl Store for PgStore {
    async fn health_check(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn row_not_found_is_a_storage_error() {
        assert_matches!(
            map_sqlx_error(sqlx::Error::RowNotFound),
            CoreError::Storage(_)
        );
    }

    #[test]
    fn pool_timeout_is_a_storage_error() {
        assert_matches!(
            map_sqlx_error(sqlx::Error::PoolTimedOut),
            CoreError::Storage(_)
        );
    }
}
