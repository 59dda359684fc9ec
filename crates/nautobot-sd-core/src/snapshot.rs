//! Serialized target snapshot

use chrono::{DateTime, Utc};
use nautobot_sd_api::TargetGroup;

use crate::error::CoreError;

/// Target list serialized once and served verbatim
///
/// Never mutated after construction.
#[derive(Debug, Clone)]
pub struct Snapshot {
    body: Vec<u8>,
    target_count: usize,
    built_at: DateTime<Utc>,
}

impl Snapshot {
    /// Serialize a target list
    ///
    /// # Errors
    /// Returns [`CoreError::Serialize`] if serialization fails.
    pub fn from_targets(targets: &[TargetGroup]) -> Result<Self, CoreError> {
        let body = serde_json::to_vec_pretty(targets)?;
        Ok(Self {
            body,
            target_count: targets.len(),
            built_at: Utc::now(),
        })
    }

    /// Serialized JSON body
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Consume the snapshot and return its JSON body
    #[must_use]
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    /// Number of target groups in the snapshot
    #[must_use]
    pub fn target_count(&self) -> usize {
        self.target_count
    }

    /// When the snapshot was built
    #[must_use]
    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }
}
