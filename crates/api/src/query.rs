//! Shared query parameter types for API handlers.

use serde::Deserialize;
use trivia_core::pagination::clamp_page;

/// Page selection (`?page=N`), shared by every paginated endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
}

impl PageParams {
    /// Requested page, defaulting to 1 and never below 1.
    pub fn page(&self) -> i64 {
        clamp_page(self.page)
    }
}
