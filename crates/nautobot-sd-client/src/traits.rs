//! Inventory source trait

use async_trait::async_trait;
use nautobot_sd_api::Device;

use crate::error::Result;
use crate::http::GraphqlClient;

/// Anything that can answer a query document with device records
#[async_trait]
pub trait InventorySource: Send + Sync {
    /// Run one query document and return the decoded devices
    async fn fetch_devices(&self, query: &str) -> Result<Vec<Device>>;
}

#[async_trait]
impl InventorySource for GraphqlClient {
    async fn fetch_devices(&self, query: &str) -> Result<Vec<Device>> {
        self.execute(query).await
    }
}
