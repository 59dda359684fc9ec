//! nautobot-sd-client: Nautobot GraphQL client
//!
//! Issues query documents against the Nautobot GraphQL endpoint and decodes
//! the returned device records.
//!
//! # Example
//!
//! ```no_run
//! use nautobot_sd_client::GraphqlClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GraphqlClient::new("https://nautobot.example.com/api/graphql/", "secret")?;
//!
//! let devices = client
//!     .execute("query { devices { name primary_ip4 { address } } }")
//!     .await?;
//! println!("{} devices", devices.len());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod http;
pub mod traits;

pub use error::{ClientError, Result};
pub use http::GraphqlClient;
pub use traits::InventorySource;
