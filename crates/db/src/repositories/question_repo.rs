//! Repository for the `questions` table.

use sqlx::PgPool;
use trivia_core::question::NewQuestion;
use trivia_core::types::DbId;

use crate::models::question::QuestionRow;

/// Column list for `questions` queries.
const COLUMNS: &str = "id, question, answer, difficulty, category";

/// Provides create, read, search and delete operations for questions.
///
/// Every list is ordered by id so that pagination is stable across requests.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Insert a new question, returning the full row.
    pub async fn create(pool: &PgPool, input: &NewQuestion) -> Result<QuestionRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (question, answer, difficulty, category) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QuestionRow>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(input.difficulty)
            .bind(input.category)
            .fetch_one(pool)
            .await
    }

    /// Find a question by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<QuestionRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = $1");
        sqlx::query_as::<_, QuestionRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every question.
    pub async fn list(pool: &PgPool) -> Result<Vec<QuestionRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions ORDER BY id");
        sqlx::query_as::<_, QuestionRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the questions of one category.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<QuestionRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE category = $1 ORDER BY id");
        sqlx::query_as::<_, QuestionRow>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search over the question text.
    ///
    /// `%`, `_` and `\` in `term` are matched literally.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<QuestionRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions \
             WHERE question ILIKE $1 ESCAPE '\\' \
             ORDER BY id"
        );
        sqlx::query_as::<_, QuestionRow>(&query)
            .bind(like_pattern(term))
            .fetch_all(pool)
            .await
    }

    /// Delete a question by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Wrap `term` in `%...%`, escaping LIKE metacharacters.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
