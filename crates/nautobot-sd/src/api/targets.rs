//! Service discovery endpoint

use std::sync::Arc;

use axum::{
    extract::State,
    http::{Method, Uri, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::state::AppState;

/// Serve the target snapshot
///
/// Path and method are ignored; every request gets the same body.
pub async fn serve_targets(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
) -> impl IntoResponse {
    debug!(
        %method,
        %uri,
        targets = state.target_count,
        built_at = %state.built_at,
        "serving targets"
    );
    (
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Mutex;

    use axum::body::to_bytes;
    use nautobot_sd_api::TargetGroup;
    use nautobot_sd_core::Snapshot;

    use super::*;

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_request_log_carries_snapshot_age() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let snapshot =
            Snapshot::from_targets(&[TargetGroup::new("10.0.0.1", "switch", "dc1")]).unwrap();
        let state = Arc::new(AppState::new(snapshot));
        let expected_body = state.body.clone();
        let built_at = state.built_at.to_string();

        let response = serve_targets(State(state), Method::GET, Uri::from_static("/sd"))
            .await
            .into_response();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(body, expected_body);

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        let line = output
            .lines()
            .find(|line| line.contains("serving targets"))
            .unwrap();
        assert!(line.contains("targets=1"));
        assert!(line.contains(&format!("built_at={built_at}")));
    }
}
