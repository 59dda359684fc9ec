//! HTTP router configuration

use std::sync::Arc;

use axum::Router;

use crate::api::targets;
use crate::state::AppState;

/// Create the application router
///
/// There are no routes: every path falls through to the target list.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .fallback(targets::serve_targets)
        .with_state(state)
}
