use std::sync::Arc;

use trivia_core::store::Store;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the store sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Question and category persistence.
    pub store: Arc<dyn Store>,
}
