//! Category row model.

use sqlx::FromRow;
use trivia_core::question::Category;
use trivia_core::types::DbId;

/// A row from the `categories` table. The label column is named `type`.
#[derive(Debug, Clone, FromRow)]
pub struct CategoryRow {
    pub id: DbId,
    #[sqlx(rename = "type")]
    pub kind: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: row.id,
            kind: row.kind,
        }
    }
}
