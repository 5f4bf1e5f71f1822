//! Question row model.

use sqlx::FromRow;
use trivia_core::question::Question;
use trivia_core::types::DbId;

/// A row from the `questions` table.
#[derive(Debug, Clone, FromRow)]
pub struct QuestionRow {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: DbId,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Question {
            id: row.id,
            question: row.question,
            answer: row.answer,
            difficulty: row.difficulty,
            category: row.category,
        }
    }
}
