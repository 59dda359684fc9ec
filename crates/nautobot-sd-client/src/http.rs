//! HTTP client for the Nautobot GraphQL endpoint

use std::fmt;

use nautobot_sd_api::{Device, GraphqlRequest, GraphqlResponse};
use reqwest::{Client, StatusCode, header};
use tracing::{debug, instrument};
use url::Url;

use crate::error::{ClientError, Result};

/// GraphQL client bound to one Nautobot endpoint and API token
#[derive(Clone)]
pub struct GraphqlClient {
    client: Client,
    endpoint: Url,
    token: String,
}

impl GraphqlClient {
    /// Create a new client
    ///
    /// # Errors
    /// Returns an error if the endpoint URL is invalid.
    ///
    /// # Example
    /// ```no_run
    /// use nautobot_sd_client::GraphqlClient;
    ///
    /// let client = GraphqlClient::new("https://nautobot.example.com/api/graphql/", "secret")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(endpoint: impl AsRef<str>, token: impl Into<String>) -> Result<Self> {
        Self::with_client(endpoint, token, Client::new())
    }

    /// Create a new client with a custom `reqwest::Client`
    ///
    /// # Errors
    /// Returns an error if the endpoint URL is invalid.
    pub fn with_client(
        endpoint: impl AsRef<str>,
        token: impl Into<String>,
        client: Client,
    ) -> Result<Self> {
        let endpoint = Url::parse(endpoint.as_ref())?;
        Ok(Self {
            client,
            endpoint,
            token: token.into(),
        })
    }

    /// Endpoint queries are posted to
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Execute a raw GraphQL query and return the devices it selects
    ///
    /// A single attempt is made; no retries and no timeout beyond the
    /// transport default.
    ///
    /// # Errors
    /// - [`ClientError::Unauthorized`] on HTTP 401
    /// - [`ClientError::Upstream`] on any other non-200 status
    /// - [`ClientError::Decode`] if the body does not match the device schema
    /// - [`ClientError::Graphql`] if the response carries GraphQL errors
    /// - [`ClientError::Http`] on transport failure
    #[instrument(skip(self, query), fields(endpoint = %self.endpoint))]
    pub async fn execute(&self, query: &str) -> Result<Vec<Device>> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(header::AUTHORIZATION, format!("Token {}", self.token))
            .header(header::CONTENT_TYPE, "application/json")
            .json(&GraphqlRequest::new(query))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(if status == StatusCode::UNAUTHORIZED {
                ClientError::Unauthorized { body }
            } else {
                ClientError::Upstream {
                    status: status.as_u16(),
                    body,
                }
            });
        }

        let body = response.bytes().await?;
        debug!(bytes = body.len(), "received GraphQL response");

        let decoded: GraphqlResponse = serde_json::from_slice(&body)?;
        if !decoded.errors.is_empty() {
            return Err(ClientError::Graphql {
                messages: decoded.errors.into_iter().map(|e| e.message).collect(),
            });
        }

        Ok(decoded.into_devices())
    }
}

impl fmt::Debug for GraphqlClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphqlClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("token", &"<redacted>")
            .finish_non_exhaustive()
    }
}
