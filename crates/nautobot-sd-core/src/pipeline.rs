//! Query → fetch → transform pipeline

use nautobot_sd_api::TargetGroup;
use nautobot_sd_client::{ClientError, InventorySource};
use tracing::{error, info, instrument, warn};

use crate::config::JobLabelSource;
use crate::error::CoreError;
use crate::loader::QueryDocument;
use crate::snapshot::Snapshot;
use crate::transform::{JobLabel, transform};

/// Run one query document and return its targets
///
/// Failures are logged and yield no targets; they never abort the run.
#[instrument(skip(source, document), fields(job = %document.name))]
pub async fn process_document<S>(
    source: &S,
    document: &QueryDocument,
    job_label: JobLabelSource,
) -> Vec<TargetGroup>
where
    S: InventorySource + ?Sized,
{
    let devices = match source.fetch_devices(&document.query).await {
        Ok(devices) => devices,
        Err(e) => {
            log_failure(document, &e);
            return Vec::new();
        }
    };

    if devices.is_empty() {
        info!(
            path = %document.path.display(),
            "no devices found in response, check the GraphQL query or Nautobot instance"
        );
        return Vec::new();
    }

    let job = match job_label {
        JobLabelSource::Role => JobLabel::Role,
        JobLabelSource::Query => JobLabel::Fixed(&document.name),
    };
    let targets = transform(&devices, job);

    let skipped = devices.len() - targets.len();
    if skipped > 0 {
        warn!(skipped, "skipped devices without primary IPv4 address or role");
    }
    info!(devices = devices.len(), targets = targets.len(), "processed query");

    targets
}

fn log_failure(document: &QueryDocument, err: &ClientError) {
    let path = document.path.display();
    match err {
        ClientError::Unauthorized { body } => {
            error!(
                %path,
                %body,
                "authentication failed: invalid token provided, check NAUTOBOT_API_TOKEN"
            );
        }
        ClientError::Upstream { status, body } => {
            error!(%path, status, %body, "unexpected response from Nautobot");
        }
        ClientError::Decode(e) => {
            error!(%path, error = %e, "failed to decode Nautobot response");
        }
        ClientError::Graphql { messages } => {
            error!(%path, errors = ?messages, "GraphQL query rejected");
        }
        other => {
            error!(%path, error = %other, "request to Nautobot failed");
        }
    }
}

/// Run every document in order and concatenate their targets
pub async fn collect_targets<S>(
    source: &S,
    documents: &[QueryDocument],
    job_label: JobLabelSource,
) -> Vec<TargetGroup>
where
    S: InventorySource + ?Sized,
{
    let mut targets = Vec::new();
    for document in documents {
        targets.extend(process_document(source, document, job_label).await);
    }
    targets
}

/// Run the full pipeline and freeze its output
///
/// # Errors
/// Returns [`CoreError::Serialize`] if the target list cannot be serialized.
/// Per-document failures are logged and do not produce an error.
pub async fn build_snapshot<S>(
    source: &S,
    documents: &[QueryDocument],
    job_label: JobLabelSource,
) -> Result<Snapshot, CoreError>
where
    S: InventorySource + ?Sized,
{
    if documents.is_empty() {
        warn!("no query documents loaded, serving an empty target list");
    }

    let targets = collect_targets(source, documents, job_label).await;
    let snapshot = Snapshot::from_targets(&targets)?;

    info!(
        documents = documents.len(),
        targets = snapshot.target_count(),
        bytes = snapshot.body().len(),
        "built target snapshot"
    );
    Ok(snapshot)
}
