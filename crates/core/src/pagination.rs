//! Fixed-size page slicing for question listings.
//!
//! Listing endpoints fetch the full ordered collection from the store and
//! hand it here to cut out a single page. The page size is not configurable
//! by the client.

/// Number of questions returned per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Page number used when the client does not supply one.
pub const DEFAULT_PAGE: i64 = 1;

/// Clamp a user-provided page number to the first page or later.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(DEFAULT_PAGE).max(1)
}

/// Return the slice of `items` belonging to the 1-based `page`.
///
/// Pages below 1 are treated as page 1. A page past the end of the
/// collection yields an empty vector; this function never fails.
pub fn paginate<T: Clone>(page: i64, items: &[T]) -> Vec<T> {
    let page = page.max(1);
    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
        .unwrap_or(usize::MAX);

    if start >= items.len() {
        return Vec::new();
    }

    let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());
    items[start..end].to_vec()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
