//! Prometheus HTTP service discovery types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Label carrying the Prometheus job name
pub const JOB_LABEL: &str = "__meta_prometheus_job";

/// Label carrying the device location
pub const DATACENTER_LABEL: &str = "__meta_datacenter";

/// One entry of an HTTP service discovery response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetGroup {
    /// Scrape addresses
    pub targets: Vec<String>,
    /// Labels attached to every target in the group
    pub labels: BTreeMap<String, String>,
}

impl TargetGroup {
    /// Create a single-target group with job and datacenter labels
    pub fn new(
        target: impl Into<String>,
        job: impl Into<String>,
        datacenter: impl Into<String>,
    ) -> Self {
        let labels = BTreeMap::from([
            (JOB_LABEL.to_string(), job.into()),
            (DATACENTER_LABEL.to_string(), datacenter.into()),
        ]);
        Self {
            targets: vec![target.into()],
            labels,
        }
    }

    /// Job label value
    #[must_use]
    pub fn job(&self) -> Option<&str> {
        self.labels.get(JOB_LABEL).map(String::as_str)
    }

    /// Datacenter label value
    #[must_use]
    pub fn datacenter(&self) -> Option<&str> {
        self.labels.get(DATACENTER_LABEL).map(String::as_str)
    }
}
