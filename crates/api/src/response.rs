//! Shared response envelope types for API handlers.
//!
//! Every successful response carries `"success": true` alongside the
//! endpoint's own fields. Use [`SuccessResponse`] rather than ad-hoc
//! `serde_json::json!` so payloads stay typed.

use serde::Serialize;

/// Standard `{ "success": true, ...T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(SuccessResponse::new(page)))
/// ```
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
