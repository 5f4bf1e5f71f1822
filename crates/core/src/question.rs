//! Question and category records plus creation-time validation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, LenientInt};

// ---------------------------------------------------------------------------
// Validation constants
// ---------------------------------------------------------------------------

/// Easiest allowed difficulty rating.
pub const MIN_DIFFICULTY: i32 = 1;
/// Hardest allowed difficulty rating.
pub const MAX_DIFFICULTY: i32 = 5;

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A trivia question as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: DbId,
}

/// A question category (e.g. "Science").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: DbId,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Category labels keyed by id, serialized as a JSON object.
pub type CategoryMap = BTreeMap<DbId, String>;

/// Build the id -> label mapping sent alongside question listings.
pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

// ---------------------------------------------------------------------------
// Creation input
// ---------------------------------------------------------------------------

/// Unvalidated creation payload. Every field is optional on the wire so that
/// a missing field surfaces as a validation failure rather than a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionDraft {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<LenientInt>,
    pub category: Option<LenientInt>,
}

/// A fully validated question ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: DbId,
}

impl QuestionDraft {
    /// Check that all four fields are present and sane.
    pub fn validate(self) -> Result<NewQuestion, CoreError> {
        match (self.question, self.answer, self.difficulty, self.category) {
            (
                Some(question),
                Some(answer),
                Some(LenientInt(difficulty)),
                Some(LenientInt(category)),
            ) => {
                validate_text("question", &question)?;
                validate_text("answer", &answer)?;
                let difficulty = validate_difficulty(difficulty)?;

                Ok(NewQuestion {
                    question: question.trim().to_string(),
                    answer: answer.trim().to_string(),
                    difficulty,
                    category,
                })
            }
            (question, answer, difficulty, category) => {
                let missing: Vec<&str> = [
                    ("question", question.is_none()),
                    ("answer", answer.is_none()),
                    ("difficulty", difficulty.is_none()),
                    ("category", category.is_none()),
                ]
                .into_iter()
                .filter_map(|(field, absent)| absent.then_some(field))
                .collect();

                Err(CoreError::Validation(format!(
                    "Missing required fields: {}",
                    missing.join(", ")
                )))
            }
        }
    }
}

fn validate_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be blank")));
    }
    Ok(())
}

/// Validate that a difficulty rating is within the allowed range.
pub fn validate_difficulty(difficulty: i64) -> Result<i32, CoreError> {
    i32::try_from(difficulty)
        .ok()
        .filter(|d| (MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(d))
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "difficulty must be between {MIN_DIFFICULTY} and {MAX_DIFFICULTY} (got {difficulty})"
            ))
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
