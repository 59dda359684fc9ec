//! Application state shared across HTTP handlers

use axum::body::Bytes;
use chrono::{DateTime, Utc};
use nautobot_sd_core::Snapshot;

/// Read-only state shared by all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Serialized target list
    pub body: Bytes,
    /// Number of target groups in `body`
    pub target_count: usize,
    /// When the target list was built
    pub built_at: DateTime<Utc>,
}

impl AppState {
    /// Create state from a finished snapshot
    pub fn new(snapshot: Snapshot) -> Self {
        let target_count = snapshot.target_count();
        let built_at = snapshot.built_at();
        Self {
            body: Bytes::from(snapshot.into_body()),
            target_count,
            built_at,
        }
    }
}
