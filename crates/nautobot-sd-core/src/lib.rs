//! nautobot-sd-core: Discovery pipeline
//!
//! Loads GraphQL query documents, runs them against an inventory source,
//! turns the returned devices into Prometheus target groups and freezes the
//! result into a serialized snapshot.

pub mod config;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod snapshot;
pub mod transform;

pub use config::{ENV_FILE, JobLabelSource, NautobotCredentials, QueryConfig};
pub use error::CoreError;
pub use loader::{QueryDocument, load_queries};
pub use pipeline::{build_snapshot, collect_targets, process_document};
pub use snapshot::Snapshot;
pub use transform::{JobLabel, normalize_address, transform};
